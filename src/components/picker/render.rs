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

//! UI rendering logic for the file picker popup.

use ratatui::{
    Frame,
    layout::{Constraint, Flex, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Clear, List, ListItem},
};

use crate::{
    components::{FilePicker, picker::EntryKind},
    theme::Theme,
};

impl FilePicker {
    pub(crate) fn draw(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        let popup = centered(area, 70, 70);

        let items: Vec<ListItem> = self
            .entries
            .iter()
            .map(|entry| match entry.kind {
                EntryKind::Parent | EntryKind::Directory => {
                    ListItem::new(format!("{}/", entry.name)).style(Style::default().fg(theme.accent_colour))
                }
                EntryKind::AudioFile => {
                    ListItem::new(entry.name.as_str()).style(Style::default().fg(theme.table_name_fg))
                }
            })
            .collect();

        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(format!(" Upload Song: {} ", self.dir.display()))
                    .title_bottom(" enter: choose  backspace: up  esc: cancel ")
                    .border_style(Style::default().fg(theme.accent_colour))
                    .style(Style::default().bg(theme.background_colour)),
            )
            .highlight_style(Style::default().bg(Color::Blue).fg(Color::White))
            .highlight_symbol(">> ");

        f.render_widget(Clear, popup);
        f.render_stateful_widget(list, popup, &mut self.list_state);
    }
}

/// A rectangle of the given percentage size centred in `area`.
fn centered(area: Rect, percent_x: u16, percent_y: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Percentage(percent_y)])
        .flex(Flex::Center)
        .areas(area);
    let [popup] = Layout::horizontal([Constraint::Percentage(percent_x)])
        .flex(Flex::Center)
        .areas(row);
    popup
}
