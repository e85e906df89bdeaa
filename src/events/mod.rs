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

//! Application event distribution and orchestration.
//!
//! This module defines the central event-handling logic for the application,
//! bridging user input (keyboard), background updates (audio player, toast
//! timers) and the UI rendering pipeline.
//!
//! # Architecture
//!
//! The system follows a reactive event-loop pattern:
//!
//! 1. **Capture**: Events are received via the [`AppEvent`] enum through a
//!    channel.
//! 2. **Process**: Each event is handled to completion by exactly one
//!    handler, which updates the [`App`] state and may issue commands to the
//!    audio player or schedule a deferred event.
//! 3. **Render**: After each event is processed, the whole UI is re-drawn
//!    from state.

mod handlers;
pub(crate) mod timers;

use handlers::*;

use std::{io::Stdout, path::PathBuf, sync::mpsc::Sender};

use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{Terminal, prelude::CrosstermBackend};
use tracing::warn;

use crate::{
    App,
    model::{Rating, TrackId, playlist::Playlist, toast::ToastTicket},
    player::{AudioPlayer, PlayerState},
    render::draw,
};

const FINE_VOLUME_DELTA: i32 = 1;
const VOLUME_DELTA: i32 = 5;

/// Which part of the screen receives keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Focus {
    Playlist,
    Favourites,
    Search,
    Picker,
}

#[derive(Debug)]
pub(crate) enum AppEvent {
    Key(KeyEvent),

    SetFocus(Focus),

    Upload(Option<PathBuf>),
    Search(String),
    SetVolume(i32),
    AdjustVolume(i32),
    ToggleFavourite(TrackId),
    RateTrack(TrackId, Rating),
    RemoveTrack(TrackId),

    PlayTrack(TrackId),
    TogglePause,
    Stop,

    ToastExpired(ToastTicket),

    PlayerStateChanged(PlayerState),
    DurationChanged(u64),
    TimeChanged(f64),
    PlayerVolumeChanged(f64),
    TrackFinished,

    Tick,

    ExitApplication,

    Error(String),
    FatalError(String),
}

pub(crate) trait AppEventProcessor {
    fn process_event(
        &mut self,
        event: Event,
        playlist: &Playlist,
        event_tx: &Sender<AppEvent>,
    ) -> Result<()>;
}

/// Runs the main application loop, handling events and rendering the UI in the
/// terminal.
///
/// This function loops until a 'quit' event is received or the event channel
/// is closed.
pub(crate) fn process_events(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
) -> Result<()> {
    terminal.draw(|f| draw(f, app))?;

    while let Ok(event) = app.event_rx.recv() {
        if matches!(event, AppEvent::ExitApplication) {
            break;
        }

        let result = match event {
            AppEvent::Key(key) => process_key_event(app, key),
            AppEvent::SetFocus(focus) => {
                handle_set_focus(app, focus);
                Ok(())
            }
            AppEvent::Upload(selection) => handle_upload(app, selection),
            AppEvent::Search(text) => {
                handle_search(app, text);
                Ok(())
            }
            AppEvent::SetVolume(level) => handle_set_volume(app, level),
            AppEvent::AdjustVolume(delta) => handle_adjust_volume(app, delta),
            AppEvent::ToggleFavourite(id) => {
                handle_toggle_favourite(app, id);
                Ok(())
            }
            AppEvent::RateTrack(id, rating) => {
                handle_rate_track(app, id, rating);
                Ok(())
            }
            AppEvent::RemoveTrack(id) => handle_remove_track(app, id),
            AppEvent::PlayTrack(id) => handle_play_track(app, id),
            AppEvent::TogglePause => with_player(app, AudioPlayer::toggle_pause),
            AppEvent::Stop => with_player(app, AudioPlayer::stop),
            AppEvent::ToastExpired(ticket) => {
                app.playlist.expire_toast(ticket);
                Ok(())
            }
            AppEvent::PlayerStateChanged(state) => {
                handle_player_state_changed(app, state);
                Ok(())
            }
            AppEvent::DurationChanged(duration) => {
                app.player_duration = Some(duration);
                Ok(())
            }
            AppEvent::TimeChanged(seconds) => {
                handle_time_changed(app, seconds);
                Ok(())
            }
            AppEvent::PlayerVolumeChanged(gain) => {
                app.player_gain = Some(gain);
                Ok(())
            }
            AppEvent::TrackFinished => {
                app.player_time = app.player_duration;
                Ok(())
            }
            AppEvent::Error(message) => {
                warn!(%message, "recoverable error");
                app.status = Some(message);
                Ok(())
            }
            AppEvent::FatalError(message) => {
                handle_fatal_error(app, message);
                Ok(())
            }
            AppEvent::Tick | AppEvent::ExitApplication => Ok(()),
        };

        // Handler failures are reported on the status line, not fatal
        if let Err(e) = result {
            app.event_tx.send(AppEvent::Error(format!("{:#}", e)))?;
        }

        // Render after every event processed
        terminal.draw(|f| draw(f, app))?;
    }

    Ok(())
}

/// Maps keyboard input to application actions and playback commands.
///
/// The command line gets the first chance to consume a key, then the
/// focused view, then the global bindings (only when no text input or popup
/// has focus).
fn process_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    if key.kind != KeyEventKind::Press {
        return Ok(());
    }

    let event = Event::Key(key);

    // Text input and the picker keep ':' for themselves
    let accepts_commands = !matches!(app.focus, Focus::Search | Focus::Picker);

    if (accepts_commands || app.commander.active())
        && app
            .commander
            .handle_event(&event, &app.event_tx, &app.config)?
    {
        return Ok(());
    }

    app.status = None;

    match app.focus {
        Focus::Playlist => {
            app.playlist_view
                .process_event(event, &app.playlist, &app.event_tx)?;
        }
        Focus::Favourites => {
            app.favourites_view
                .process_event(event, &app.playlist, &app.event_tx)?;
        }
        Focus::Search => {
            return app
                .search_bar
                .process_event(event, &app.playlist, &app.event_tx);
        }
        Focus::Picker => {
            return app.picker.process_event(event, &app.playlist, &app.event_tx);
        }
    }

    process_global_key_event(app, key)
}

fn process_global_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Char('q') => app.event_tx.send(AppEvent::ExitApplication)?,

        KeyCode::Char('/') => app.event_tx.send(AppEvent::SetFocus(Focus::Search))?,
        KeyCode::Char('o') => app.event_tx.send(AppEvent::SetFocus(Focus::Picker))?,
        KeyCode::Tab => {
            let next = match app.focus {
                Focus::Playlist => Focus::Favourites,
                _ => Focus::Playlist,
            };
            app.event_tx.send(AppEvent::SetFocus(next))?;
        }

        KeyCode::Char(' ') => app.event_tx.send(AppEvent::TogglePause)?,
        KeyCode::Char('s') => app.event_tx.send(AppEvent::Stop)?,
        KeyCode::Char('-') => app.event_tx.send(AppEvent::AdjustVolume(-FINE_VOLUME_DELTA))?,
        KeyCode::Char('=') => app.event_tx.send(AppEvent::AdjustVolume(FINE_VOLUME_DELTA))?,
        KeyCode::Char('_') => app.event_tx.send(AppEvent::AdjustVolume(-VOLUME_DELTA))?,
        KeyCode::Char('+') => app.event_tx.send(AppEvent::AdjustVolume(VOLUME_DELTA))?,

        _ => {}
    }

    Ok(())
}
