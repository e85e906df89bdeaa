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

//! Interactive views.
//!
//! Each view keeps only its own presentation state (selection, text input,
//! directory listing). Playlist data is always read from the
//! [`Playlist`](crate::model::playlist::Playlist) at the time an event is
//! processed or a frame is drawn, and views request changes by sending
//! [`AppEvent`](crate::events::AppEvent)s rather than mutating it directly.

mod favourites;
mod picker;
mod playlist;
mod search;

pub(crate) use favourites::FavouritesView;
pub(crate) use picker::FilePicker;
pub(crate) use playlist::PlaylistView;
pub(crate) use search::SearchBar;

/// Index after `selected` in a list of `len` items, wrapping at the end.
fn next_index(selected: Option<usize>, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    Some(match selected {
        Some(i) if i + 1 < len => i + 1,
        Some(_) => 0,
        None => 0,
    })
}

/// Index before `selected` in a list of `len` items, wrapping at the start.
fn previous_index(selected: Option<usize>, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    Some(match selected {
        Some(0) => len - 1,
        Some(i) => (i - 1).min(len - 1),
        None => 0,
    })
}

/// Keeps a selection inside a list that may have shrunk.
fn clamp_index(selected: Option<usize>, len: usize) -> Option<usize> {
    match (selected, len) {
        (_, 0) => None,
        (Some(i), len) => Some(i.min(len - 1)),
        (None, _) => Some(0),
    }
}
