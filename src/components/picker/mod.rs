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

//! File picker used to upload tracks.
//!
//! A modal directory browser listing sub-directories and audio files of one
//! directory at a time. Only files with a configured audio extension are
//! offered, so anything picked here can be handed straight to the playlist.

mod event;
mod render;

use std::{
    cmp::Ordering,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use ratatui::widgets::ListState;
use walkdir::WalkDir;

use crate::config::AppConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum EntryKind {
    Parent,
    Directory,
    AudioFile,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PickerEntry {
    pub(crate) name: String,
    pub(crate) path: PathBuf,
    pub(crate) kind: EntryKind,
}

pub(crate) struct FilePicker {
    config: AppConfig,
    pub(crate) dir: PathBuf,
    pub(crate) entries: Vec<PickerEntry>,
    pub(crate) list_state: ListState,
    pub(crate) is_active: bool,
}

impl FilePicker {
    pub(crate) fn new(config: &AppConfig) -> Self {
        Self {
            config: config.clone(),
            dir: config.start_dir(),
            entries: vec![],
            list_state: ListState::default(),
            is_active: false,
        }
    }

    /// Lists the current directory again, used when the picker is opened.
    pub(crate) fn refresh(&mut self) -> Result<()> {
        let dir = self.dir.clone();
        self.change_dir(&dir)
    }

    /// Switches to `dir`, leaving the picker where it was if it cannot be
    /// listed.
    pub(crate) fn change_dir(&mut self, dir: &Path) -> Result<()> {
        let entries = list_directory(dir, &self.config)?;
        self.dir = dir.to_path_buf();
        self.entries = entries;
        self.list_state
            .select(if self.entries.is_empty() { None } else { Some(0) });
        Ok(())
    }

    pub(crate) fn selected_entry(&self) -> Option<&PickerEntry> {
        self.list_state
            .selected()
            .and_then(|index| self.entries.get(index))
    }
}

/// Lists the directories and audio files directly inside `dir`.
///
/// Directories come first, then files, each sorted by name ignoring case.
/// Hidden entries are skipped. A `..` entry leads to the parent, if any.
///
/// # Errors
///
/// Returns an error if `dir` is not a readable directory.
pub(crate) fn list_directory(dir: &Path, config: &AppConfig) -> Result<Vec<PickerEntry>> {
    if !dir.is_dir() {
        bail!("Not a directory: {}", dir.display());
    }
    std::fs::read_dir(dir).with_context(|| format!("Failed to read {}", dir.display()))?;

    let mut entries: Vec<PickerEntry> = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| !e.file_name().to_string_lossy().starts_with('.'))
        .filter_map(|e| {
            let kind = if e.file_type().is_dir() {
                EntryKind::Directory
            } else if e.file_type().is_file() && config.is_audio_file(e.path()) {
                EntryKind::AudioFile
            } else {
                return None;
            };

            Some(PickerEntry {
                name: e.file_name().to_string_lossy().into_owned(),
                path: e.into_path(),
                kind,
            })
        })
        .collect();

    entries.sort_by(|a, b| match (a.kind, b.kind) {
        (EntryKind::Directory, EntryKind::AudioFile) => Ordering::Less,
        (EntryKind::AudioFile, EntryKind::Directory) => Ordering::Greater,
        _ => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
    });

    if let Some(parent) = dir.parent() {
        entries.insert(
            0,
            PickerEntry {
                name: "..".to_string(),
                path: parent.to_path_buf(),
                kind: EntryKind::Parent,
            },
        );
    }

    Ok(entries)
}
