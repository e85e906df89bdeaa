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

//! Event routing for the playlist view.
//!
//! Navigation keys move the selection locally. Action keys are translated
//! into application events for the selected track.

use std::sync::mpsc::Sender;

use anyhow::Result;
use crossterm::event::{Event, KeyCode};

use crate::{
    components::{PlaylistView, next_index, previous_index},
    events::{AppEvent, AppEventProcessor},
    model::{Rating, playlist::Playlist},
};

impl AppEventProcessor for PlaylistView {
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

        let len = playlist.filtered_tracks().len();
        let selected = self.table_state.selected();

        match key_event.code {
            KeyCode::Char('j') | KeyCode::Down => {
                self.table_state.select(next_index(selected, len))
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.table_state.select(previous_index(selected, len))
            }
            KeyCode::Char('g') | KeyCode::Home => self.table_state.select((len > 0).then_some(0)),
            KeyCode::Char('G') | KeyCode::End => self.table_state.select(len.checked_sub(1)),
            _ => {}
        }

        let Some(id) = self.selected_id(playlist) else {
            return Ok(());
        };

        match key_event.code {
            KeyCode::Enter => event_tx.send(AppEvent::PlayTrack(id))?,
            KeyCode::Char('f') => event_tx.send(AppEvent::ToggleFavourite(id))?,
            KeyCode::Char('d') | KeyCode::Delete => event_tx.send(AppEvent::RemoveTrack(id))?,
            KeyCode::Char(c @ '1'..='5') => {
                let stars = c as u8 - b'0';
                event_tx.send(AppEvent::RateTrack(id, Rating::try_from(stars)?))?;
            }
            _ => {}
        }

        Ok(())
    }
}
