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

//! Favourites list view.
//!
//! Lists favourite tracks in the order they were favourited. The list is
//! deliberately not narrowed by the playlist search filter.

mod event;
mod render;

use ratatui::widgets::ListState;

use crate::{
    components::clamp_index,
    model::{TrackId, playlist::Playlist},
};

pub(crate) struct FavouritesView {
    pub(crate) list_state: ListState,
    pub(crate) is_active: bool,
}

impl FavouritesView {
    pub(crate) fn new() -> Self {
        Self {
            list_state: ListState::default(),
            is_active: false,
        }
    }

    pub(crate) fn selected_id(&self, playlist: &Playlist) -> Option<TrackId> {
        let index = self.list_state.selected()?;
        playlist.favourites().get(index).map(|track| track.id)
    }

    pub(crate) fn sync_selection(&mut self, playlist: &Playlist) {
        let len = playlist.favourites().len();
        self.list_state
            .select(clamp_index(self.list_state.selected(), len));
    }
}
