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

//! Domain errors raised by playlist operations.
//!
//! Application plumbing uses `anyhow`; these are the failures that callers
//! may want to match on, such as rejecting a typed path that is not an audio
//! file.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub(crate) enum PlaylistError {
    #[error("not a file: {}", .0.display())]
    NotAFile(PathBuf),

    #[error("not an audio file: {}", .0.display())]
    NotAudio(PathBuf),

    #[error("rating must be between 1 and 5, got {0}")]
    InvalidRating(u8),
}
