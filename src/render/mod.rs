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

//! User interface rendering logic.
//!
//! This module handles the translation of the [`App`] state into visual
//! widgets using the `ratatui` framework. It is responsible for layout
//! management, widget styling, and terminal frame composition.
//!
//! # Rendering Pipeline
//!
//! The primary entry point is the [`draw`] function, which is called after
//! every processed event. The whole frame is recomputed from state each time,
//! including the search-filtered playlist.

mod commander;
pub(crate) mod icons;
mod player;
mod toast;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

use crate::{
    App,
    events::Focus,
    render::{commander::draw_commander, player::draw_player, toast::draw_toast},
};

/// Renders the user interface to the terminal frame.
///
/// The screen is split into the toast banner, the search bar, the playlist
/// and favourites panes side by side, the player and the command line. The
/// file picker, when open, is drawn as a popup over everything else.
pub(crate) fn draw(f: &mut Frame, app: &mut App) {
    let area = f.area();

    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(5),
            Constraint::Length(1),
        ])
        .split(area);

    draw_toast(f, outer[0], app);

    app.search_bar.draw(f, outer[1], &app.theme);

    let main = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
        .split(outer[2]);

    app.playlist_view
        .draw(f, main[0], &app.playlist, &app.theme);
    app.favourites_view
        .draw(f, main[1], &app.playlist, &app.theme);

    draw_player(f, outer[3], app);

    draw_commander(f, outer[4], app);

    if app.focus == Focus::Picker {
        app.picker.draw(f, area, &app.theme);
    }
}
