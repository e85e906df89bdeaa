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

//! Transient toast notifications.
//!
//! A toast is a short message shown after a playlist change. Showing a toast
//! bumps a generation counter and hands back a [`ToastTicket`]; the timer
//! that later clears the toast presents that ticket, and the clear only
//! happens if no newer toast has been shown in the meantime.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Notice {
    SongUploaded,
    AddedToFavourites,
    RemovedFromFavourites,
    RemovedFromPlaylist,
}

impl Notice {
    pub(crate) fn message(&self) -> &'static str {
        match self {
            Notice::SongUploaded => "Song Uploaded",
            Notice::AddedToFavourites => "Added to Favorites",
            Notice::RemovedFromFavourites => "Removed from Favorites",
            Notice::RemovedFromPlaylist => "Removed from Playlist",
        }
    }
}

/// Identifies one particular showing of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ToastTicket(u64);

#[derive(Debug, Default)]
pub(crate) struct Toast {
    notice: Option<Notice>,
    generation: u64,
}

impl Toast {
    pub(crate) fn show(&mut self, notice: Notice) -> ToastTicket {
        self.generation += 1;
        self.notice = Some(notice);
        ToastTicket(self.generation)
    }

    /// Clears the toast if `ticket` belongs to the most recent showing.
    pub(crate) fn expire(&mut self, ticket: ToastTicket) -> bool {
        if ticket.0 == self.generation && self.notice.is_some() {
            self.notice = None;
            true
        } else {
            false
        }
    }

    pub(crate) fn message(&self) -> Option<&'static str> {
        self.notice.map(|notice| notice.message())
    }
}
