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

//! Command-line input logic and state management.
//!
//! This module implements the `:` command line. It owns a text input
//! component and, when a command is submitted, dispatches the corresponding
//! application event.

use std::{path::PathBuf, sync::mpsc::Sender};

use anyhow::Result;
use crossterm::event::{Event, KeyCode};
use tui_input::{Input, backend::crossterm::EventHandler};

use crate::{config::AppConfig, error::PlaylistError, events::AppEvent};

pub(crate) struct Commander {
    active: bool,
    pub(crate) input: Input,
}

impl Commander {
    pub(crate) fn new() -> Self {
        Self {
            active: false,
            input: Input::default(),
        }
    }

    pub(crate) fn active(&self) -> bool {
        self.active
    }

    /// Offers a terminal event to the command line, returning `true` if it
    /// was consumed.
    pub(crate) fn handle_event(
        &mut self,
        event: &Event,
        event_tx: &Sender<AppEvent>,
        config: &AppConfig,
    ) -> Result<bool> {
        let Event::Key(key_event) = event else {
            return Ok(false);
        };

        if !self.active {
            if key_event.code == KeyCode::Char(':') {
                self.active = true;
                return Ok(true);
            }
            return Ok(false);
        }

        match key_event.code {
            KeyCode::Esc => {
                self.active = false;
                self.input.reset();
            }

            KeyCode::Enter => {
                let buffer = self.input.value().to_string();
                self.input.reset();
                self.active = false;
                if !buffer.trim().is_empty() {
                    event_tx.send(parse_command(&buffer, config))?;
                }
            }

            // Delegate all other key events to the managed input component.
            _ => {
                self.input.handle_event(event);
            }
        }

        Ok(true)
    }
}

/// Translates a submitted command line into the event it requests.
///
/// Malformed commands become [`AppEvent::Error`].
fn parse_command(buffer: &str, config: &AppConfig) -> AppEvent {
    // Search text is taken as typed, spacing included
    if let Some(text) = buffer.trim_start().strip_prefix("search ") {
        return AppEvent::Search(text.to_string());
    }

    let parts: Vec<&str> = buffer.split_whitespace().collect();

    match parts.as_slice() {
        ["q"] | ["quit"] => AppEvent::ExitApplication,

        ["add", path_parts @ ..] if !path_parts.is_empty() => {
            let path = PathBuf::from(path_parts.join(" "));
            if config.is_audio_file(&path) {
                AppEvent::Upload(Some(path))
            } else {
                AppEvent::Error(PlaylistError::NotAudio(path).to_string())
            }
        }

        ["v", level] => match level.parse::<i32>() {
            Ok(level) => AppEvent::SetVolume(level),
            Err(_) => AppEvent::Error(format!("Invalid volume: {}", level)),
        },

        ["search"] => AppEvent::Search(String::new()),
        ["cs"] => AppEvent::Search(String::new()),

        [cmd, ..] => AppEvent::Error(format!("Unknown command: {}", cmd)),

        [] => AppEvent::Tick,
    }
}

#[cfg(test)]
mod tests {
    use std::sync::mpsc;

    use crossterm::event::{KeyEvent, KeyModifiers};

    use super::*;

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn add_accepts_audio_paths_with_spaces() {
        let event = parse_command("add /music/My Song.mp3", &AppConfig::default());

        assert!(matches!(event, AppEvent::Upload(Some(path)) if path == PathBuf::from("/music/My Song.mp3")));
    }

    #[test]
    fn add_rejects_non_audio_paths() {
        let event = parse_command("add /music/cover.jpg", &AppConfig::default());

        assert!(matches!(event, AppEvent::Error(msg) if msg.contains("not an audio file")));
    }

    #[test]
    fn volume_and_search_commands() {
        let config = AppConfig::default();

        assert!(matches!(parse_command("v 20", &config), AppEvent::SetVolume(20)));
        assert!(matches!(parse_command("v loud", &config), AppEvent::Error(_)));
        assert!(matches!(parse_command("search Rock On", &config), AppEvent::Search(text) if text == "Rock On"));
        assert!(matches!(parse_command("cs", &config), AppEvent::Search(text) if text.is_empty()));
        assert!(matches!(parse_command("bogus", &config), AppEvent::Error(_)));
    }

    #[test]
    fn search_text_keeps_its_spacing() {
        let config = AppConfig::default();

        assert!(matches!(parse_command("search a  b", &config), AppEvent::Search(text) if text == "a  b"));
        assert!(matches!(parse_command("search  two  spaces ", &config), AppEvent::Search(text) if text == " two  spaces "));
        assert!(matches!(parse_command("search", &config), AppEvent::Search(text) if text.is_empty()));
    }

    #[test]
    fn submitted_search_is_not_trimmed() {
        let config = AppConfig::default();
        let (event_tx, event_rx) = mpsc::channel();
        let mut commander = Commander::new();

        commander.handle_event(&key(KeyCode::Char(':')), &event_tx, &config).unwrap();
        for c in "search rock  on ".chars() {
            commander.handle_event(&key(KeyCode::Char(c)), &event_tx, &config).unwrap();
        }
        commander.handle_event(&key(KeyCode::Enter), &event_tx, &config).unwrap();

        assert!(matches!(event_rx.try_recv(), Ok(AppEvent::Search(text)) if text == "rock  on "));
    }

    #[test]
    fn typed_command_is_submitted_on_enter() {
        let config = AppConfig::default();
        let (event_tx, event_rx) = mpsc::channel();
        let mut commander = Commander::new();

        assert!(!commander.handle_event(&key(KeyCode::Char('q')), &event_tx, &config).unwrap());
        assert!(commander.handle_event(&key(KeyCode::Char(':')), &event_tx, &config).unwrap());
        assert!(commander.active());

        commander.handle_event(&key(KeyCode::Char('q')), &event_tx, &config).unwrap();
        commander.handle_event(&key(KeyCode::Enter), &event_tx, &config).unwrap();

        assert!(!commander.active());
        assert!(matches!(event_rx.try_recv(), Ok(AppEvent::ExitApplication)));
    }
}
