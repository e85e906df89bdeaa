// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Event routing for the search bar.

use std::sync::mpsc::Sender;

use anyhow::Result;
use crossterm::event::{Event, KeyCode};
use tui_input::backend::crossterm::EventHandler;

use crate::{
    components::SearchBar,
    events::{AppEvent, AppEventProcessor, Focus},
    model::playlist::Playlist,
};

impl AppEventProcessor for SearchBar {
    fn process_event(
        &mut self,
        event: Event,
        _playlist: &Playlist,
        event_tx: &Sender<AppEvent>,
    ) -> Result<()> {
        if !self.is_active {
            return Ok(());
        }

        let Event::Key(key_event) = event else {
            return Ok(());
        };

        match key_event.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Tab => {
                event_tx.send(AppEvent::SetFocus(Focus::Playlist))?;
            }
            _ => {
                let before = self.input.value().to_string();
                self.input.handle_event(&event);
                if self.input.value() != before {
                    event_tx.send(AppEvent::Search(self.input.value().to_string()))?;
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::mpsc;

    use crossterm::event::{KeyEvent, KeyModifiers};

    use super::*;

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn every_keystroke_updates_the_filter() {
        let playlist = Playlist::default();
        let (event_tx, event_rx) = mpsc::channel();
        let mut bar = SearchBar::new();
        bar.is_active = true;

        bar.process_event(key(KeyCode::Char('R')), &playlist, &event_tx).unwrap();
        bar.process_event(key(KeyCode::Char('o')), &playlist, &event_tx).unwrap();
        bar.process_event(key(KeyCode::Backspace), &playlist, &event_tx).unwrap();

        let filters: Vec<String> = event_rx
            .try_iter()
            .filter_map(|event| match event {
                AppEvent::Search(text) => Some(text),
                _ => None,
            })
            .collect();
        assert_eq!(filters, vec!["R", "Ro", "R"]);
    }

    #[test]
    fn escape_returns_focus_and_keeps_the_text() {
        let playlist = Playlist::default();
        let (event_tx, event_rx) = mpsc::channel();
        let mut bar = SearchBar::new();
        bar.is_active = true;
        bar.set_text("jazz");

        bar.process_event(key(KeyCode::Esc), &playlist, &event_tx).unwrap();

        assert!(matches!(event_rx.try_recv(), Ok(AppEvent::SetFocus(Focus::Playlist))));
        assert_eq!(bar.input.value(), "jazz");
    }
}
