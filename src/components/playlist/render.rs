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

//! UI rendering logic for the playlist view.

use std::fmt::Write;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    prelude::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Padding, Paragraph, Row, Table},
};

use crate::{
    components::PlaylistView,
    model::{Rating, playlist::Playlist},
    render::icons::{FAVOURITE, STAR},
    theme::Theme,
};

impl PlaylistView {
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

        let tracks = playlist.filtered_tracks();

        let mut header_text = format!("Playlist | {} tracks", playlist.tracks().len());
        if !playlist.filter().is_empty() {
            let _ = write!(header_text, " | {} shown", tracks.len());
        }

        let header = Paragraph::new(header_text).block(header_block);
        f.render_widget(header, chunks[0]);

        let rows = tracks.iter().map(|track| {
            let favourite = if playlist.is_favourite(track.id) {
                Line::from(FAVOURITE).style(Style::default().fg(theme.favourite_fg))
            } else {
                Line::from("")
            };

            Row::new(vec![
                Cell::from(favourite),
                Cell::from(Line::from(track.name.as_str()).style(Style::default().fg(theme.table_name_fg))),
                Cell::from(Line::from(track.duration_label.as_str()).style(Style::default().fg(theme.table_label_fg))),
                Cell::from(stars(track.rating, theme)),
            ])
        });

        let table = Table::new(
            rows,
            [
                Constraint::Length(2),
                Constraint::Min(20),
                Constraint::Length(10),
                Constraint::Length(Rating::MAX as u16),
            ],
        )
        .header(
            Row::new(vec![
                Cell::from(""),
                Cell::from("Name"),
                Cell::from("Duration"),
                Cell::from("Rating"),
            ])
            .style(Style::default().bold().fg(theme.accent_colour))
            .bottom_margin(1),
        )
        .row_highlight_style(Style::default().bg(Color::Blue).fg(Color::White))
        .column_spacing(2)
        .block(Block::default().padding(Padding::horizontal(1)));

        f.render_stateful_widget(table, chunks[1], &mut self.table_state);
    }
}

/// Five stars, lit up to the track's rating.
fn stars(rating: Rating, theme: &Theme) -> Line<'static> {
    let spans: Vec<Span> = (1..=Rating::MAX)
        .map(|n| {
            let colour = if rating.stars() >= n {
                theme.star_on_fg
            } else {
                theme.star_off_fg
            };
            Span::styled(STAR, Style::default().fg(colour))
        })
        .collect();

    Line::from(spans)
}
