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

use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::{debug, error};

use crate::{
    App,
    events::{Focus, timers::spawn_toast_expiry},
    model::{Rating, TrackId, toast::ToastTicket},
    player::{AudioPlayer, PlayerState},
};

/// Arranges for a freshly shown toast to be cleared later.
fn schedule_toast_expiry(app: &App, ticket: ToastTicket) {
    spawn_toast_expiry(ticket, app.config.toast_duration(), app.event_tx.clone());
}

/// Runs a player command, unless the player has already been lost.
pub(super) fn with_player(
    app: &App,
    command: impl FnOnce(&AudioPlayer) -> Result<()>,
) -> Result<()> {
    if app.player_lost {
        debug!("player command dropped, no player");
        return Ok(());
    }
    command(&app.audio_player)
}

pub(super) fn handle_fatal_error(app: &mut App, message: String) {
    error!(%message, "fatal error");
    app.player_lost = true;
    app.now_playing = None;
    app.player_state = PlayerState::Stopped;
    app.status = Some(message);
}

pub(super) fn handle_set_focus(app: &mut App, focus: Focus) {
    if focus == Focus::Picker {
        if let Err(e) = app.picker.refresh() {
            app.status = Some(format!("{:#}", e));
            return;
        }
    }

    app.playlist_view.is_active = focus == Focus::Playlist;
    app.favourites_view.is_active = focus == Focus::Favourites;
    app.search_bar.is_active = focus == Focus::Search;
    app.picker.is_active = focus == Focus::Picker;

    debug!(?focus, "focus changed");
    app.focus = focus;
}

pub(super) fn handle_upload(app: &mut App, selection: Option<PathBuf>) -> Result<()> {
    if let Some((_, ticket)) = app.playlist.upload(selection.as_deref())? {
        schedule_toast_expiry(app, ticket);
    }

    Ok(())
}

pub(super) fn handle_search(app: &mut App, text: String) {
    if app.search_bar.input.value() != text {
        app.search_bar.set_text(&text);
    }
    app.playlist.search(text);
    app.playlist_view.sync_selection(&app.playlist);
}

pub(super) fn handle_set_volume(app: &mut App, level: i32) -> Result<()> {
    let volume = app.playlist.set_volume(level);
    with_player(app, |player| {
        player
            .set_volume(volume)
            .context("Failed to apply volume")
    })
}

pub(super) fn handle_adjust_volume(app: &mut App, delta: i32) -> Result<()> {
    let level = i32::from(app.playlist.volume().level()) + delta;
    handle_set_volume(app, level)
}

pub(super) fn handle_toggle_favourite(app: &mut App, id: TrackId) {
    if let Some(ticket) = app.playlist.toggle_favourite(id) {
        schedule_toast_expiry(app, ticket);
    }
}

pub(super) fn handle_rate_track(app: &mut App, id: TrackId, rating: Rating) {
    app.playlist.set_rating(id, rating);
}

pub(super) fn handle_remove_track(app: &mut App, id: TrackId) -> Result<()> {
    let Some((_, ticket)) = app.playlist.remove_song(id) else {
        return Ok(());
    };
    schedule_toast_expiry(app, ticket);

    // The source is gone, so is anything playing from it
    if app.now_playing == Some(id) {
        app.now_playing = None;
        with_player(app, AudioPlayer::stop)?;
    }

    Ok(())
}

pub(super) fn handle_play_track(app: &mut App, id: TrackId) -> Result<()> {
    if app.player_lost {
        return Ok(());
    }
    let Some(path) = app.playlist.source_path(id) else {
        return Ok(());
    };

    app.audio_player.play_file(path)?;
    app.now_playing = Some(id);
    app.player_time = None;
    app.player_duration = None;
    app.player_position = None;

    Ok(())
}

pub(super) fn handle_player_state_changed(app: &mut App, state: PlayerState) {
    app.player_state = state;
    if state == PlayerState::Stopped {
        app.player_position = None;
    }
}

pub(super) fn handle_time_changed(app: &mut App, seconds: f64) {
    app.player_time = Some(seconds as u64);
    if let Some(duration) = app.player_duration {
        app.player_position = if duration > 0 {
            Some(seconds / duration as f64)
        } else {
            None
        };
    }
}

#[cfg(test)]
mod tests {
    use std::{
        fs::File,
        path::PathBuf,
        sync::mpsc::Receiver,
        time::Duration,
    };

    use tempfile::TempDir;

    use super::*;
    use crate::{config::AppConfig, events::AppEvent, player::commands::AudioPlayerCommand};

    fn test_app() -> (App, Receiver<AudioPlayerCommand>) {
        App::for_tests(AppConfig {
            toast_millis: 20,
            ..AppConfig::default()
        })
    }

    fn audio_file(dir: &TempDir, name: &str) -> PathBuf {
        let path = dir.path().join(name);
        File::create(&path).unwrap();
        path
    }

    fn upload(app: &mut App, path: PathBuf) -> TrackId {
        handle_upload(app, Some(path)).unwrap();
        app.playlist.tracks().last().unwrap().id
    }

    /// Waits for the next toast expiry and applies it, as the event loop does.
    fn expire_next_toast(app: &mut App) {
        match app.event_rx.recv_timeout(Duration::from_secs(5)) {
            Ok(AppEvent::ToastExpired(ticket)) => assert!(app.playlist.expire_toast(ticket)),
            other => panic!("unexpected event: {:?}", other),
        }
    }

    #[test]
    fn upload_schedules_its_toast_to_clear() {
        let dir = TempDir::new().unwrap();
        let (mut app, _commands) = test_app();

        upload(&mut app, audio_file(&dir, "a.mp3"));
        assert_eq!(app.playlist.toast().message(), Some("Song Uploaded"));

        expire_next_toast(&mut app);
        assert_eq!(app.playlist.toast().message(), None);
    }

    #[test]
    fn favourite_and_remove_schedule_their_toasts_to_clear() {
        let dir = TempDir::new().unwrap();
        let (mut app, _commands) = test_app();
        let id = upload(&mut app, audio_file(&dir, "a.mp3"));
        expire_next_toast(&mut app);

        handle_toggle_favourite(&mut app, id);
        assert_eq!(app.playlist.toast().message(), Some("Added to Favorites"));
        expire_next_toast(&mut app);
        assert_eq!(app.playlist.toast().message(), None);

        handle_remove_track(&mut app, id).unwrap();
        assert_eq!(app.playlist.toast().message(), Some("Removed from Playlist"));
        expire_next_toast(&mut app);
        assert_eq!(app.playlist.toast().message(), None);
    }

    #[test]
    fn cancelled_upload_schedules_nothing() {
        let (mut app, _commands) = test_app();

        handle_upload(&mut app, None).unwrap();

        assert!(app.event_rx.recv_timeout(Duration::from_millis(100)).is_err());
    }

    #[test]
    fn volume_reaches_the_player_as_a_percentage() {
        let (mut app, commands) = test_app();

        handle_set_volume(&mut app, 20).unwrap();

        assert_eq!(app.playlist.volume().gain(), 0.2);
        assert!(matches!(commands.try_recv(), Ok(AudioPlayerCommand::SetVolume(20))));

        handle_adjust_volume(&mut app, 200).unwrap();
        assert!(matches!(commands.try_recv(), Ok(AudioPlayerCommand::SetVolume(100))));
    }

    #[test]
    fn removing_the_playing_track_stops_playback() {
        let dir = TempDir::new().unwrap();
        let (mut app, commands) = test_app();
        let id = upload(&mut app, audio_file(&dir, "a.mp3"));

        handle_play_track(&mut app, id).unwrap();
        assert!(matches!(commands.try_recv(), Ok(AudioPlayerCommand::PlayFile(_))));

        handle_remove_track(&mut app, id).unwrap();

        assert_eq!(app.now_playing, None);
        assert!(matches!(commands.try_recv(), Ok(AudioPlayerCommand::Stop)));
    }

    #[test]
    fn lost_player_receives_no_more_commands() {
        let dir = TempDir::new().unwrap();
        let (mut app, commands) = test_app();
        let id = upload(&mut app, audio_file(&dir, "a.mp3"));

        handle_fatal_error(&mut app, "MPV worker failure".to_string());

        handle_set_volume(&mut app, 30).unwrap();
        handle_play_track(&mut app, id).unwrap();
        with_player(&app, AudioPlayer::toggle_pause).unwrap();

        assert_eq!(app.playlist.volume().level(), 30);
        assert_eq!(app.now_playing, None);
        assert!(app.player_lost);
        assert!(commands.try_recv().is_err());
    }
}
