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

//! Unicode symbols for the TUI.
//!
//! This module contains standardized icons used across the interface to
//! represent media controls and track status. These are selected for
//! compatibility with most modern terminal emulators and fonts.

// Standard Media Controls (Unicode)
pub(crate) const ICON_PLAY: &str = "\u{25B6}";
pub(crate) const ICON_PAUSE: &str = "\u{23F8}";
pub(crate) const ICON_STOP: &str = "\u{23F9}";

// Volume State Icons (Unicode Speaker Symbols)
pub(crate) const ICON_VOLUME_HIGH: &str = "\u{1F50A}";
pub(crate) const ICON_VOLUME_LOW: &str = "\u{1F508}";
pub(crate) const ICON_MUTED: &str = "\u{1F507}";

pub(crate) const FAVOURITE: &str = "\u{2764}";
pub(crate) const STAR: &str = "\u{2605}";
pub(crate) const SEARCH: &str = "\u{2315}";
