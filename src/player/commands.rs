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

//! The MPV playback worker.
//!
//! The worker thread owns the `libmpv` handle. Each turn of its loop applies
//! the pending commands, then waits briefly for an MPV event and forwards
//! anything the UI shows as an [`AppEvent`].

use std::{
    path::PathBuf,
    sync::mpsc::{Receiver, Sender, TryRecvError},
    thread,
};

use anyhow::{Context, Result};
use mpv::{Format, MpvHandler};
use tracing::{debug, error, warn};

use crate::{events::AppEvent, player::PlayerState};

/// Seconds to block waiting for MPV on each turn of the loop.
const EVENT_WAIT_SECS: f64 = 0.05;

const OBSERVED_PROPERTIES: [(&str, PropertyKind); 5] = [
    ("duration", PropertyKind::Double),
    ("time-pos", PropertyKind::Double),
    ("volume", PropertyKind::Double),
    ("pause", PropertyKind::Flag),
    ("idle-active", PropertyKind::Flag),
];

#[derive(Clone, Copy)]
enum PropertyKind {
    Double,
    Flag,
}

#[derive(Debug)]
pub(crate) enum AudioPlayerCommand {
    PlayFile(PathBuf),
    TogglePause,
    Stop,
    SetVolume(u8),
}

/// Spawns the worker thread.
///
/// A worker that cannot start, or loses MPV, reports a fatal event.
pub(crate) fn spawn_player_worker(command_rx: Receiver<AudioPlayerCommand>, event_tx: Sender<AppEvent>) {
    thread::spawn(move || {
        let result = PlaybackWorker::start(event_tx.clone()).and_then(|mut worker| worker.run(&command_rx));

        if let Err(e) = result {
            error!(error = ?e, "mpv worker failed");
            let _ = event_tx.send(AppEvent::FatalError(format!("MPV worker failure: {:#}", e)));
        }
    });
}

struct PlaybackWorker {
    mpv: MpvHandler,
    event_tx: Sender<AppEvent>,
    is_paused: bool,
    is_idle: bool,
    state: PlayerState,
}

impl PlaybackWorker {
    fn start(event_tx: Sender<AppEvent>) -> Result<Self> {
        let mut builder = mpv::MpvHandlerBuilder::new().context("Failed to create MPV builder")?;
        builder
            .set_option("vo", "null")
            .context("Failed to set no video output")?;
        let mut mpv = builder.build().context("Failed to build MPV handler")?;

        for (name, kind) in OBSERVED_PROPERTIES {
            let observed = match kind {
                PropertyKind::Double => mpv.observe_property::<f64>(name, 0),
                PropertyKind::Flag => mpv.observe_property::<bool>(name, 0),
            };
            observed.with_context(|| format!("Failed to observe {}", name))?;
        }

        Ok(Self {
            mpv,
            event_tx,
            is_paused: false,
            is_idle: true,
            state: PlayerState::Stopped,
        })
    }

    /// Runs until the UI drops its end of the command channel.
    fn run(&mut self, command_rx: &Receiver<AudioPlayerCommand>) -> Result<()> {
        loop {
            loop {
                match command_rx.try_recv() {
                    Ok(command) => self.apply(command)?,
                    Err(TryRecvError::Empty) => break,
                    Err(TryRecvError::Disconnected) => return Ok(()),
                }
            }

            self.poll()?;
        }
    }

    fn apply(&mut self, command: AudioPlayerCommand) -> Result<()> {
        debug!(?command, "player command");

        match command {
            AudioPlayerCommand::PlayFile(path) => {
                let filename = path.to_string_lossy().into_owned();
                // A file that will not load is the user's problem, not the worker's
                if let Err(e) = self.mpv.command(&["loadfile", &filename, "replace"]) {
                    warn!(file = %filename, error = ?e, "failed to load file");
                    self.emit(AppEvent::Error(format!("Cannot play {}", filename)))?;
                    return Ok(());
                }
                self.mpv.set_property("pause", false)?;
            }
            AudioPlayerCommand::TogglePause => self.mpv.command(&["cycle", "pause"])?,
            AudioPlayerCommand::Stop => self.mpv.command(&["stop"])?,
            AudioPlayerCommand::SetVolume(level) => self.mpv.set_property("volume", f64::from(level))?,
        }

        Ok(())
    }

    fn poll(&mut self) -> Result<()> {
        let Some(mpv_event) = self.mpv.wait_event(EVENT_WAIT_SECS) else {
            return Ok(());
        };

        let app_event = match mpv_event {
            mpv::Event::PropertyChange { name, change, .. } => match (name, change) {
                ("duration", Format::Double(duration)) => Some(AppEvent::DurationChanged(duration as u64)),
                ("time-pos", Format::Double(seconds)) if seconds >= 0.0 => Some(AppEvent::TimeChanged(seconds)),
                // MPV reports percent, the UI deals in gain
                ("volume", Format::Double(volume)) => Some(AppEvent::PlayerVolumeChanged(volume / 100.0)),
                ("pause", Format::Flag(pause)) => {
                    self.is_paused = pause;
                    None
                }
                ("idle-active", Format::Flag(idle)) => {
                    self.is_idle = idle;
                    None
                }
                _ => None,
            },
            mpv::Event::EndFile(Ok(mpv::EndFileReason::MPV_END_FILE_REASON_EOF)) => Some(AppEvent::TrackFinished),
            _ => None,
        };

        let state = PlayerState::from_flags(self.is_paused, self.is_idle);
        if state != self.state {
            self.state = state;
            self.emit(AppEvent::PlayerStateChanged(state))?;
        }

        if let Some(event) = app_event {
            self.emit(event)?;
        }

        Ok(())
    }

    fn emit(&self, event: AppEvent) -> Result<()> {
        self.event_tx.send(event).context("Failed to send player event")
    }
}
