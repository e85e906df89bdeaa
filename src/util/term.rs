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

//! Terminal environment and styling utilities.
//!
//! OSC escape sequences for the terminal background. Terminals that do not
//! understand them ignore them.

use std::io::{self, Write};

/// Sets the terminal background colour (e.g. `"#281432"`) using an OSC 11
/// escape sequence.
///
/// Best-effort, a terminal that cannot be written to is left as it is.
pub(crate) fn set_terminal_bg(hex_colour: &str) {
    let mut stdout = io::stdout();
    write!(stdout, "\x1b]11;{}\x07", hex_colour).ok();
    stdout.flush().ok();
}

/// Resets the terminal background to the user's own colour (OSC 111).
pub(crate) fn reset_terminal_bg() {
    let mut stdout = io::stdout();
    write!(stdout, "\x1b]111\x07").ok();
    stdout.flush().ok();
}
