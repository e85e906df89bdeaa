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

//! Colour palette for the TUI.
//!
//! Also converts colours to the hexadecimal form terminal emulators accept
//! for background styling.

use ratatui::style::Color;

#[derive(Clone, Copy)]
pub(crate) struct Theme {
    pub(crate) background_colour: Color,
    pub(crate) accent_colour: Color,
    pub(crate) border_colour: Color,
    pub(crate) gauge_track_colour: Color,

    pub(crate) table_name_fg: Color,
    pub(crate) table_label_fg: Color,
    pub(crate) star_on_fg: Color,
    pub(crate) star_off_fg: Color,
    pub(crate) favourite_fg: Color,

    pub(crate) toast_fg: Color,
    pub(crate) toast_bg: Color,

    pub(crate) commander_colour: Color,
    pub(crate) error_fg: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::default_theme()
    }
}

impl Theme {
    pub(crate) const fn default_theme() -> Self {
        Self {
            background_colour: Color::Rgb(40, 20, 50),
            accent_colour: Color::Rgb(250, 189, 47),
            border_colour: Color::Rgb(102, 102, 102),
            gauge_track_colour: Color::Rgb(50, 30, 60),

            table_name_fg: Color::Rgb(255, 255, 255),
            table_label_fg: Color::Rgb(162, 161, 166),
            star_on_fg: Color::Rgb(255, 215, 0),
            star_off_fg: Color::Rgb(85, 85, 85),
            favourite_fg: Color::Rgb(240, 98, 146),

            toast_fg: Color::Rgb(40, 20, 50),
            toast_bg: Color::Rgb(179, 157, 219),

            commander_colour: Color::Rgb(255, 255, 255),
            error_fg: Color::Rgb(239, 83, 80),
        }
    }

    /// Converts a [`ratatui::style::Color`] into a CSS-style hexadecimal
    /// string.
    ///
    /// Only [`Color::Rgb`] has a hexadecimal form, anything else gives
    /// `None`.
    pub(crate) fn to_hex(colour: Color) -> Option<String> {
        match colour {
            Color::Rgb(r, g, b) => Some(format!("#{:02x}{:02x}{:02x}", r, g, b)),
            _ => None,
        }
    }
}
