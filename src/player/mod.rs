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

//! Playback of uploaded tracks.
//!
//! [`AudioPlayer`] is the only playback element in the application. It owns
//! no audio itself, every call is forwarded to an MPV worker thread, which
//! reports progress back as [`AppEvent`]s.

pub(crate) mod commands;

use std::{path::Path, sync::mpsc};

use anyhow::{Context, Result};

use crate::{events::AppEvent, model::Volume, player::commands::AudioPlayerCommand};

#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum PlayerState {
    Playing,
    Paused,
    Stopped,
}

impl PlayerState {
    /// Collapses MPV's pause and idle flags, idle taking precedence.
    fn from_flags(is_paused: bool, is_idle: bool) -> Self {
        match (is_idle, is_paused) {
            (true, _) => PlayerState::Stopped,
            (false, true) => PlayerState::Paused,
            (false, false) => PlayerState::Playing,
        }
    }
}

pub(crate) struct AudioPlayer {
    command_tx: mpsc::Sender<AudioPlayerCommand>,
}

impl AudioPlayer {
    /// Starts the playback worker, which reports back on `event_tx`.
    pub(crate) fn new(event_tx: mpsc::Sender<AppEvent>) -> Result<Self> {
        let (command_tx, command_rx) = mpsc::channel();

        commands::spawn_player_worker(command_rx, event_tx);

        Ok(Self { command_tx })
    }

    /// Replaces whatever is playing with the file at `path`.
    ///
    /// The content type is left for MPV to probe.
    pub(crate) fn play_file(&self, path: &Path) -> Result<()> {
        self.send(AudioPlayerCommand::PlayFile(path.to_path_buf()))
    }

    pub(crate) fn toggle_pause(&self) -> Result<()> {
        self.send(AudioPlayerCommand::TogglePause)
    }

    pub(crate) fn stop(&self) -> Result<()> {
        self.send(AudioPlayerCommand::Stop)
    }

    /// Applies an absolute volume, MPV takes it as a percentage.
    pub(crate) fn set_volume(&self, volume: Volume) -> Result<()> {
        self.send(AudioPlayerCommand::SetVolume(volume.level()))
    }

    /// A player whose commands arrive on `command_tx` instead of MPV.
    #[cfg(test)]
    pub(crate) fn with_channel(command_tx: mpsc::Sender<AudioPlayerCommand>) -> Self {
        Self { command_tx }
    }

    fn send(&self, command: AudioPlayerCommand) -> Result<()> {
        self.command_tx
            .send(command)
            .context("Audio player is no longer running")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_wins_over_pause_flag() {
        assert_eq!(PlayerState::from_flags(true, true), PlayerState::Stopped);
        assert_eq!(PlayerState::from_flags(true, false), PlayerState::Paused);
        assert_eq!(PlayerState::from_flags(false, false), PlayerState::Playing);
    }

    #[test]
    fn volume_is_sent_as_a_percentage() {
        let (command_tx, command_rx) = mpsc::channel();
        let player = AudioPlayer::with_channel(command_tx);

        player.set_volume(Volume::new(20)).unwrap();

        assert!(matches!(command_rx.try_recv(), Ok(AudioPlayerCommand::SetVolume(20))));
    }

    #[test]
    fn commands_fail_once_the_worker_is_gone() {
        let (command_tx, command_rx) = mpsc::channel();
        drop(command_rx);
        let player = AudioPlayer::with_channel(command_tx);

        assert!(player.stop().is_err());
        assert!(player.set_volume(Volume::new(20)).is_err());
    }
}
