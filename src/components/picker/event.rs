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

//! Event routing for the file picker.
//!
//! Choosing an audio file, or cancelling with Esc, both end in an
//! [`AppEvent::Upload`]; a cancelled pick carries no file.

use std::sync::mpsc::Sender;

use anyhow::Result;
use crossterm::event::{Event, KeyCode};

use crate::{
    components::{
        FilePicker, next_index,
        picker::{EntryKind, PickerEntry},
        previous_index,
    },
    events::{AppEvent, AppEventProcessor, Focus},
    model::playlist::Playlist,
};

impl AppEventProcessor for FilePicker {
    fn process_event(
        &mut self,
        event: Event,
        _playlist: &Playlist,
        event_tx: &Sender<AppEvent>,
    ) -> Result<()> {
        if !self.is_active {
            return Ok(());
        }

        let Event::Key(key_event) = event else {
            return Ok(());
        };

        let len = self.entries.len();
        let selected = self.list_state.selected();

        match key_event.code {
            KeyCode::Char('j') | KeyCode::Down => self.list_state.select(next_index(selected, len)),
            KeyCode::Char('k') | KeyCode::Up => self.list_state.select(previous_index(selected, len)),

            KeyCode::Backspace | KeyCode::Char('h') | KeyCode::Left => {
                if let Some(parent) = self.dir.parent().map(|p| p.to_path_buf()) {
                    self.open_dir(&parent, event_tx)?;
                }
            }

            KeyCode::Enter | KeyCode::Char('l') | KeyCode::Right => {
                match self.selected_entry().cloned() {
                    Some(PickerEntry { kind: EntryKind::AudioFile, path, .. }) => {
                        if key_event.code == KeyCode::Enter {
                            event_tx.send(AppEvent::Upload(Some(path)))?;
                            event_tx.send(AppEvent::SetFocus(Focus::Playlist))?;
                        }
                    }
                    Some(PickerEntry { path, .. }) => self.open_dir(&path, event_tx)?,
                    None => {}
                }
            }

            KeyCode::Esc => {
                event_tx.send(AppEvent::Upload(None))?;
                event_tx.send(AppEvent::SetFocus(Focus::Playlist))?;
            }

            _ => {}
        }

        Ok(())
    }
}

impl FilePicker {
    fn open_dir(&mut self, dir: &std::path::Path, event_tx: &Sender<AppEvent>) -> Result<()> {
        if let Err(e) = self.change_dir(dir) {
            event_tx.send(AppEvent::Error(format!("{:#}", e)))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::{
        fs::{self, File},
        sync::mpsc,
    };

    use crossterm::event::{KeyEvent, KeyModifiers};
    use tempfile::TempDir;

    use super::*;
    use crate::config::AppConfig;

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn open_picker(dir: &TempDir) -> FilePicker {
        let mut picker = FilePicker::new(&AppConfig::default());
        picker.change_dir(dir.path()).unwrap();
        picker.is_active = true;
        picker
    }

    #[test]
    fn choosing_a_file_uploads_it() {
        let dir = TempDir::new().unwrap();
        File::create(dir.path().join("a.mp3")).unwrap();
        let playlist = Playlist::default();
        let (event_tx, event_rx) = mpsc::channel();
        let mut picker = open_picker(&dir);

        picker.process_event(key(KeyCode::Char('j')), &playlist, &event_tx).unwrap();
        picker.process_event(key(KeyCode::Enter), &playlist, &event_tx).unwrap();

        assert!(matches!(
            event_rx.try_recv(),
            Ok(AppEvent::Upload(Some(path))) if path == dir.path().join("a.mp3")
        ));
        assert!(matches!(event_rx.try_recv(), Ok(AppEvent::SetFocus(Focus::Playlist))));
    }

    #[test]
    fn escape_uploads_nothing() {
        let dir = TempDir::new().unwrap();
        let playlist = Playlist::default();
        let (event_tx, event_rx) = mpsc::channel();
        let mut picker = open_picker(&dir);

        picker.process_event(key(KeyCode::Esc), &playlist, &event_tx).unwrap();

        assert!(matches!(event_rx.try_recv(), Ok(AppEvent::Upload(None))));
    }

    #[test]
    fn enter_descends_and_backspace_returns() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("albums")).unwrap();
        File::create(dir.path().join("albums").join("x.ogg")).unwrap();
        let playlist = Playlist::default();
        let (event_tx, event_rx) = mpsc::channel();
        let mut picker = open_picker(&dir);

        picker.process_event(key(KeyCode::Char('j')), &playlist, &event_tx).unwrap();
        picker.process_event(key(KeyCode::Enter), &playlist, &event_tx).unwrap();

        assert_eq!(picker.dir, dir.path().join("albums"));
        let names: Vec<&str> = picker.entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["..", "x.ogg"]);

        picker.process_event(key(KeyCode::Backspace), &playlist, &event_tx).unwrap();

        assert_eq!(picker.dir, dir.path());
        assert!(event_rx.try_recv().is_err());
    }
}
