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

//! UI rendering logic for the favourites view.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    prelude::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, List, ListItem, Padding, Paragraph},
};

use crate::{components::FavouritesView, model::playlist::Playlist, theme::Theme};

impl FavouritesView {
    pub(crate) fn draw(&mut self, f: &mut Frame, area: Rect, playlist: &Playlist, theme: &Theme) {
        self.sync_selection(playlist);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(2), Constraint::Min(0)])
            .split(area);

        let border_colour = if self.is_active {
            theme.accent_colour
        } else {
            theme.border_colour
        };

        let header_block = Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(border_colour))
            .padding(Padding::horizontal(1));

        let favourites = playlist.favourites();

        let header = Paragraph::new(format!("Favourites | {}", favourites.len())).block(header_block);
        f.render_widget(header, chunks[0]);

        let items: Vec<ListItem> = favourites
            .iter()
            .map(|track| ListItem::new(track.name.as_str()).style(Style::default().fg(theme.table_name_fg)))
            .collect();

        let list = List::new(items)
            .block(Block::default().padding(Padding::horizontal(1)))
            .highlight_style(Style::default().bg(Color::Blue).fg(Color::White))
            .highlight_symbol(">> ");

        f.render_stateful_widget(list, chunks[1], &mut self.list_state);
    }
}
