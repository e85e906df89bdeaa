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

//! Search bar state.
//!
//! A single line text input that narrows the playlist as the user types.
//! Focus returns to the playlist on Enter or Esc, keeping the filter.

mod event;
mod render;

use tui_input::Input;

pub(crate) struct SearchBar {
    pub(crate) input: Input,
    pub(crate) is_active: bool,
}

impl SearchBar {
    pub(crate) fn new() -> Self {
        Self {
            input: Input::default(),
            is_active: false,
        }
    }

    /// Replaces the text, for filters set from the command line.
    pub(crate) fn set_text(&mut self, text: &str) {
        self.input = Input::new(text.to_string());
    }
}
