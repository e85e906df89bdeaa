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

//! Application configuration.
//!
//! This module manages the application configuration file.

use std::{
    path::{Path, PathBuf},
    time::Duration,
};

use serde::{Deserialize, Serialize};

pub(crate) const CONFIG_NAME: &str = "tunelist";

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct AppConfig {
    pub version: u32,
    /// Directory the file picker opens in, the working directory if unset.
    pub music_dir: Option<PathBuf>,
    pub volume: u8,
    pub toast_millis: u64,
    pub audio_extensions: Vec<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: 1,
            music_dir: None,
            volume: 50,
            toast_millis: 2000,
            audio_extensions: ["mp3", "flac", "ogg", "oga", "opus", "wav", "m4a", "aac", "wma", "aiff"]
                .iter()
                .map(|ext| ext.to_string())
                .collect(),
        }
    }
}

impl AppConfig {
    pub(crate) fn toast_duration(&self) -> Duration {
        Duration::from_millis(self.toast_millis)
    }

    pub(crate) fn start_dir(&self) -> PathBuf {
        self.music_dir
            .clone()
            .or_else(|| std::env::current_dir().ok())
            .unwrap_or_else(|| PathBuf::from("."))
    }

    /// Whether `path` carries one of the configured audio extensions.
    ///
    /// This is the terminal equivalent of an `audio/*` file picker filter.
    pub(crate) fn is_audio_file(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| {
                self.audio_extensions
                    .iter()
                    .any(|allowed| allowed.eq_ignore_ascii_case(ext))
            })
    }
}

pub fn load_config() -> AppConfig {
    confy::load(CONFIG_NAME, None).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn audio_filter_ignores_extension_case() {
        let config = AppConfig::default();

        assert!(config.is_audio_file(Path::new("/music/song.MP3")));
        assert!(config.is_audio_file(Path::new("song.flac")));
        assert!(!config.is_audio_file(Path::new("cover.jpg")));
        assert!(!config.is_audio_file(Path::new("README")));
    }

    #[test]
    fn configured_music_dir_is_the_picker_start() {
        let config = AppConfig {
            music_dir: Some(PathBuf::from("/srv/music")),
            ..AppConfig::default()
        };

        assert_eq!(config.start_dir(), PathBuf::from("/srv/music"));
        assert_eq!(config.toast_duration(), Duration::from_millis(2000));
    }
}
