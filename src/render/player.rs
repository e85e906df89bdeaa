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

//! Render the player bar.
//!
//! The bar has two rows: the track playing with its elapsed and remaining
//! time, then the progress gauge beside the volume control.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Padding, Paragraph},
};

use crate::{
    App,
    model::Volume,
    player::PlayerState,
    render::icons::{ICON_MUTED, ICON_PAUSE, ICON_PLAY, ICON_STOP, ICON_VOLUME_HIGH, ICON_VOLUME_LOW},
    theme::Theme,
    util::format::format_time,
};

/// MPV reports gain as a float, anything this close counts as applied.
const GAIN_TOLERANCE: f64 = 0.005;

pub(crate) fn draw_player(f: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::TOP | Borders::BOTTOM)
        .border_style(Style::default().fg(app.theme.border_colour))
        .padding(Padding::horizontal(1));

    let inner = block.inner(area);
    f.render_widget(block, area);

    let [info_row, _, control_row] = Layout::vertical([Constraint::Length(1); 3]).areas(inner);
    let [track_area, time_area] = Layout::horizontal([Constraint::Min(0), Constraint::Length(30)]).areas(info_row);
    let [progress_area, volume_area] = Layout::horizontal([Constraint::Min(0), Constraint::Length(34)]).areas(control_row);

    draw_track_info(f, track_area, time_area, app);
    draw_gauge(f, progress_area, app.player_position.unwrap_or(0.0), &app.theme);
    draw_volume(f, volume_area, app);
}

fn draw_track_info(f: &mut Frame, track_area: Rect, time_area: Rect, app: &App) {
    let Some(track) = app.now_playing.and_then(|id| app.playlist.track(id)) else {
        let idle = Paragraph::new(format!(" {} Nothing playing", ICON_STOP)).fg(app.theme.border_colour);
        f.render_widget(idle, track_area);
        return;
    };

    let icon = match app.player_state {
        PlayerState::Playing => ICON_PLAY,
        PlayerState::Paused => ICON_PAUSE,
        PlayerState::Stopped => ICON_STOP,
    };

    let bold = Style::default().add_modifier(Modifier::BOLD);

    let track_line = Line::from(vec![
        Span::styled(format!(" {} ", icon), bold.fg(Color::White)),
        Span::styled(track.name.as_str(), bold.fg(app.theme.accent_colour)),
    ]);
    f.render_widget(Paragraph::new(track_line), track_area);

    let duration = app.player_duration.unwrap_or(0);
    let time = app.player_time.unwrap_or(0);

    let time_line = Line::from(vec![
        Span::styled(format_time(time), bold.fg(app.theme.accent_colour)),
        Span::styled(" / ", bold.fg(Color::White)),
        Span::styled(format_time(duration), bold.fg(app.theme.accent_colour)),
        Span::styled(format!(" (-{})", format_time(duration.saturating_sub(time))), bold.fg(Color::White)),
    ]);
    f.render_widget(Paragraph::new(time_line).alignment(Alignment::Right), time_area);
}

fn draw_volume(f: &mut Frame, area: Rect, app: &App) {
    let volume = app.playlist.volume();

    let [icon_area, gauge_area, label_area] = Layout::horizontal([
        Constraint::Length(3),
        Constraint::Min(0),
        Constraint::Length(6),
    ])
    .areas(area);

    f.render_widget(Paragraph::new(format!(" {}", volume_icon(volume))), icon_area);
    draw_gauge(f, gauge_area, volume.gain(), &app.theme);

    // Dimmed until MPV confirms the gain it is actually applying
    let applied = app
        .player_gain
        .is_some_and(|gain| (gain - volume.gain()).abs() < GAIN_TOLERANCE);
    let label = Paragraph::new(format!(" {}%", volume.level()))
        .alignment(Alignment::Right)
        .fg(if applied { Color::White } else { app.theme.border_colour });
    f.render_widget(label, label_area);
}

fn draw_gauge(f: &mut Frame, area: Rect, ratio: f64, theme: &Theme) {
    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(theme.accent_colour).bg(theme.gauge_track_colour))
        .ratio(ratio.clamp(0.0, 1.0))
        .label("")
        .use_unicode(true);
    f.render_widget(gauge, area);
}

fn volume_icon(volume: Volume) -> &'static str {
    match volume.level() {
        0 => ICON_MUTED,
        1..50 => ICON_VOLUME_LOW,
        _ => ICON_VOLUME_HIGH,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn volume_icon_follows_level() {
        assert_eq!(volume_icon(Volume::new(0)), ICON_MUTED);
        assert_eq!(volume_icon(Volume::new(20)), ICON_VOLUME_LOW);
        assert_eq!(volume_icon(Volume::new(50)), ICON_VOLUME_HIGH);
    }
}
