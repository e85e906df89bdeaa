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

//! UI rendering logic for the search bar.

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
};

use crate::{components::SearchBar, render::icons::SEARCH, theme::Theme};

impl SearchBar {
    pub(crate) fn draw(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let border_colour = if self.is_active {
            theme.accent_colour
        } else {
            theme.border_colour
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_colour))
            .padding(Padding::horizontal(1));

        let inner = block.inner(area);
        let prefix = format!("{} ", SEARCH);

        let line = if self.input.value().is_empty() && !self.is_active {
            Line::from(vec![
                Span::raw(prefix.clone()),
                Span::styled("Search songs...", Style::default().fg(theme.border_colour)),
            ])
        } else {
            Line::from(vec![Span::raw(prefix.clone()), Span::raw(self.input.value())])
        };

        f.render_widget(Paragraph::new(line).block(block), area);

        if self.is_active {
            let cursor_x = inner.x + (prefix.chars().count() + self.input.visual_cursor()) as u16;
            f.set_cursor_position((cursor_x, inner.y));
        }
    }
}
