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

//! # Music Playlist TUI.
//!
//! A terminal-based manager for a session-local music playlist: upload audio
//! files, search them, rate and favourite them, remove them, and play them
//! through MPV with a shared volume control.
//!
//! The playlist lives only as long as the process, nothing is written back
//! apart from the configuration file and diagnostic log.
//!
//! ## Architecture
//!
//! * The **Main Thread** owns all application state, processes events one
//!   at a time and re-renders the UI after each one.
//! * **Producer Threads** feed the main thread through a single
//!   `std::sync::mpsc` channel: keyboard input, a periodic tick, the audio
//!   player worker and one-shot toast timers.
//!
//! The application follows a strict setup-run-teardown pattern to ensure the
//! terminal state is restored even if the event loop fails.

mod commander;
mod components;
mod config;
mod error;
mod events;
mod logging;
mod model;
mod player;
mod render;
mod theme;
mod util;

use anyhow::{Context, Result};
use crossterm::{
    event::{self},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::{
    io::{self},
    sync::mpsc::{self, Receiver, Sender},
    thread,
    time::Duration,
};
use tracing::info;

use crate::{
    commander::Commander,
    components::{FavouritesView, FilePicker, PlaylistView, SearchBar},
    config::AppConfig,
    events::{AppEvent, Focus, process_events},
    model::{TrackId, Volume, playlist::Playlist},
    player::{AudioPlayer, PlayerState},
    theme::Theme,
};

/// Application state.
struct App {
    pub config: AppConfig,

    pub theme: Theme,
    pub focus: Focus,

    pub event_tx: Sender<AppEvent>,
    pub event_rx: Receiver<AppEvent>,

    pub audio_player: AudioPlayer,
    /// Set once the MPV worker has died, player commands are dropped after.
    pub player_lost: bool,

    pub playlist: Playlist,

    pub playlist_view: PlaylistView,
    pub favourites_view: FavouritesView,
    pub search_bar: SearchBar,
    pub picker: FilePicker,

    pub commander: Commander,

    pub status: Option<String>,

    pub player_state: PlayerState,
    pub now_playing: Option<TrackId>,
    pub player_duration: Option<u64>,
    pub player_time: Option<u64>,
    pub player_position: Option<f64>,
    pub player_gain: Option<f64>,
}

impl App {
    /// Create a new instance of application state.
    pub fn new(config: AppConfig) -> Result<Self> {
        let (event_tx, event_rx) = mpsc::channel();

        let audio_player = AudioPlayer::new(event_tx.clone())?;

        let app = Self::assemble(config, event_tx, event_rx, audio_player);
        app.audio_player
            .set_volume(app.playlist.volume())
            .context("Failed to apply initial volume")?;

        Ok(app)
    }

    /// Application state driving a player that only records its commands.
    #[cfg(test)]
    fn for_tests(config: AppConfig) -> (Self, Receiver<player::commands::AudioPlayerCommand>) {
        let (event_tx, event_rx) = mpsc::channel();
        let (command_tx, command_rx) = mpsc::channel();

        let app = Self::assemble(config, event_tx, event_rx, AudioPlayer::with_channel(command_tx));
        (app, command_rx)
    }

    fn assemble(
        config: AppConfig,
        event_tx: Sender<AppEvent>,
        event_rx: Receiver<AppEvent>,
        audio_player: AudioPlayer,
    ) -> Self {
        let playlist = Playlist::new(Volume::new(i32::from(config.volume)));
        let picker = FilePicker::new(&config);

        Self {
            config,
            theme: Theme::default(),
            focus: Focus::Playlist,
            event_tx,
            event_rx,
            audio_player,
            player_lost: false,
            playlist,
            playlist_view: PlaylistView::new(),
            favourites_view: FavouritesView::new(),
            search_bar: SearchBar::new(),
            picker,
            commander: Commander::new(),
            status: None,
            player_state: PlayerState::Stopped,
            now_playing: None,
            player_duration: None,
            player_time: None,
            player_position: None,
            player_gain: None,
        }
    }
}

/// Logging is best-effort, a log file that cannot be opened only disables it.
fn main() -> Result<()> {
    match logging::init() {
        Ok(path) => info!(log = %path.display(), "logging initialised"),
        Err(e) => eprintln!("Logging disabled: {:#}", e),
    }

    let config = config::load_config();
    info!(?config, "configuration loaded");

    let mut app = App::new(config).context("Failed to initialise application")?;

    let mut terminal = setup_terminal(&app)?;
    let res = run(&mut terminal, &mut app);
    restore_terminal(&mut terminal);

    info!("exiting");
    res.context("Application error occurred")
}

/// Paints the terminal background, enters raw mode and the alternate screen.
fn setup_terminal(app: &App) -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    // Otherwise a thin outline of the user's own background shows around the UI
    if let Some(hex) = Theme::to_hex(app.theme.background_colour) {
        util::term::set_terminal_bg(&hex);
    }

    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;

    Ok(terminal)
}

/// Undoes [`setup_terminal`], best-effort since it runs during cleanup.
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) {
    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    util::term::reset_terminal_bg();
    terminal.show_cursor().ok();
}

/// Starts the key and tick producers, then runs the event loop until the user
/// quits.
fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    let tx_keys = app.event_tx.clone();
    thread::spawn(move || {
        loop {
            match event::read() {
                Ok(event::Event::Key(key)) => {
                    if tx_keys.send(AppEvent::Key(key)).is_err() {
                        break;
                    }
                }
                Ok(_) => {}
                Err(_) => break,
            }
        }
    });

    // Keeps playback progress moving when nothing else happens
    let tx_tick = app.event_tx.clone();
    thread::spawn(move || {
        while tx_tick.send(AppEvent::Tick).is_ok() {
            thread::sleep(Duration::from_millis(250));
        }
    });

    process_events(terminal, app)
}
