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

//! Playlist table view.
//!
//! Shows the search-filtered tracks with their favourite marker and star
//! rating, and maps keys on the selected row to playlist actions.

mod event;
mod render;

use ratatui::widgets::TableState;

use crate::{
    components::clamp_index,
    model::{TrackId, playlist::Playlist},
};

pub(crate) struct PlaylistView {
    pub(crate) table_state: TableState,
    pub(crate) is_active: bool,
}

impl PlaylistView {
    pub(crate) fn new() -> Self {
        Self {
            table_state: TableState::new(),
            is_active: true,
        }
    }

    /// The track on the selected row of the filtered view.
    pub(crate) fn selected_id(&self, playlist: &Playlist) -> Option<TrackId> {
        let index = self.table_state.selected()?;
        playlist.filtered_tracks().get(index).map(|track| track.id)
    }

    /// Pulls the selection back inside the filtered view after it changed.
    pub(crate) fn sync_selection(&mut self, playlist: &Playlist) {
        let len = playlist.filtered_tracks().len();
        self.table_state
            .select(clamp_index(self.table_state.selected(), len));
    }
}
