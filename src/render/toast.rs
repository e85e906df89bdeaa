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

//! Render the toast banner.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    widgets::Paragraph,
};

use crate::App;

/// Draws the current toast message, or leaves the line empty.
pub(crate) fn draw_toast(f: &mut Frame, area: Rect, app: &App) {
    if let Some(message) = app.playlist.toast().message() {
        let banner = Paragraph::new(format!(" {} ", message))
            .alignment(Alignment::Center)
            .style(
                Style::default()
                    .fg(app.theme.toast_fg)
                    .bg(app.theme.toast_bg)
                    .add_modifier(Modifier::BOLD),
            );
        f.render_widget(banner, area);
    }
}
