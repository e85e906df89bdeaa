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

//! Event routing for the favourites view.

use std::sync::mpsc::Sender;

use anyhow::Result;
use crossterm::event::{Event, KeyCode};

use crate::{
    components::{FavouritesView, next_index, previous_index},
    events::{AppEvent, AppEventProcessor},
    model::playlist::Playlist,
};

impl AppEventProcessor for FavouritesView {
    fn process_event(
        &mut self,
        event: Event,
        playlist: &Playlist,
        event_tx: &Sender<AppEvent>,
    ) -> Result<()> {
        if !self.is_active {
            return Ok(());
        }

        let Event::Key(key_event) = event else {
            return Ok(());
        };

        let len = playlist.favourites().len();
        let selected = self.list_state.selected();

        match key_event.code {
            KeyCode::Char('j') | KeyCode::Down => self.list_state.select(next_index(selected, len)),
            KeyCode::Char('k') | KeyCode::Up => self.list_state.select(previous_index(selected, len)),
            _ => {}
        }

        let Some(id) = self.selected_id(playlist) else {
            return Ok(());
        };

        match key_event.code {
            KeyCode::Enter => event_tx.send(AppEvent::PlayTrack(id))?,
            KeyCode::Char('f') => event_tx.send(AppEvent::ToggleFavourite(id))?,
            _ => {}
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::{fs::File, sync::mpsc};

    use crossterm::event::{KeyEvent, KeyModifiers};
    use tempfile::TempDir;

    use super::*;

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn unfavouriting_uses_favourite_order() {
        let dir = TempDir::new().unwrap();
        let mut playlist = Playlist::default();
        let mut ids = vec![];
        for name in ["a.mp3", "b.mp3"] {
            let path = dir.path().join(name);
            File::create(&path).unwrap();
            ids.push(playlist.upload(Some(path.as_path())).unwrap().unwrap().0);
        }
        playlist.toggle_favourite(ids[1]);
        playlist.toggle_favourite(ids[0]);

        let (event_tx, event_rx) = mpsc::channel();
        let mut view = FavouritesView::new();
        view.is_active = true;
        view.sync_selection(&playlist);

        view.process_event(key(KeyCode::Char('f')), &playlist, &event_tx).unwrap();

        assert!(matches!(event_rx.try_recv(), Ok(AppEvent::ToggleFavourite(id)) if id == ids[1]));
    }

    #[test]
    fn inactive_view_ignores_keys() {
        let playlist = Playlist::default();
        let (event_tx, event_rx) = mpsc::channel();
        let mut view = FavouritesView::new();

        view.process_event(key(KeyCode::Char('j')), &playlist, &event_tx).unwrap();

        assert_eq!(view.list_state.selected(), None);
        assert!(event_rx.try_recv().is_err());
    }
}
