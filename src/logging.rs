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

//! File-based diagnostic logging.
//!
//! The terminal is owned by the TUI while the application runs, so log
//! output is written to a file beside the configuration file instead of to
//! stderr. The filter defaults to `tunelist=info` and can be overridden with
//! `RUST_LOG`.

use std::{
    fs::{self, File, OpenOptions},
    path::{Path, PathBuf},
    sync::Mutex,
};

use anyhow::{Context, Result};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::CONFIG_NAME;

const LOG_FILE_NAME: &str = "tunelist.log";
const DEFAULT_FILTER: &str = "tunelist=info";

/// Installs the global subscriber, returning the log file location.
///
/// # Errors
///
/// Returns an error if the log file cannot be created, in which case nothing
/// is installed and logging stays disabled.
pub(crate) fn init() -> Result<PathBuf> {
    let path = log_file_path()?;
    let file = open_log_file(&path)?;

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_FILTER.into()))
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        )
        .try_init()
        .context("Failed to install log subscriber")?;

    Ok(path)
}

fn log_file_path() -> Result<PathBuf> {
    let config_path = confy::get_configuration_file_path(CONFIG_NAME, None)
        .context("Failed to locate configuration directory")?;

    let dir = config_path
        .parent()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));

    Ok(dir.join(LOG_FILE_NAME))
}

fn open_log_file(path: &Path) -> Result<File> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).context("Failed to create log directory")?;
    }

    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file {}", path.display()))
}
