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

//! Domain models and core data structures.
//!
//! This module defines the central entities of the application, the uploaded
//! [`Track`] and the small value types hanging off it, along with the
//! [`playlist::Playlist`] that owns every piece of application state.

pub(crate) mod playlist;
pub(crate) mod sources;
pub(crate) mod toast;

use std::fmt;

use crate::{error::PlaylistError, model::sources::SourceHandle};

/// Display text used in place of a real duration for uploaded tracks.
pub(crate) const UPLOADED_LABEL: &str = "Uploaded";

/// Unique identifier assigned to a track when it is uploaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub(crate) struct TrackId(pub(crate) u64);

impl fmt::Display for TrackId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A star rating, zero meaning the track has not been rated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) struct Rating(u8);

impl Rating {
    pub(crate) const MAX: u8 = 5;

    pub(crate) fn stars(&self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Rating {
    type Error = PlaylistError;

    /// Only the user-settable values `1..=5` are accepted.
    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if (1..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(PlaylistError::InvalidRating(value))
        }
    }
}

/// Playback volume as a percentage, always within `0..=100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Volume(u8);

impl Volume {
    pub(crate) const MAX: u8 = 100;

    /// Creates a volume, clamping the level into range.
    pub(crate) fn new(level: i32) -> Self {
        Self(level.clamp(0, Self::MAX as i32) as u8)
    }

    pub(crate) fn level(&self) -> u8 {
        self.0
    }

    /// The proportional gain applied to playback.
    pub(crate) fn gain(&self) -> f64 {
        f64::from(self.0) / f64::from(Self::MAX)
    }
}

impl Default for Volume {
    fn default() -> Self {
        Self(50)
    }
}

#[derive(Debug, Clone)]
pub(crate) struct Track {
    pub(crate) id: TrackId,
    pub(crate) name: String,
    pub(crate) duration_label: String,
    pub(crate) source: SourceHandle,
    pub(crate) rating: Rating,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rating_accepts_only_star_values() {
        assert_eq!(Rating::try_from(3).map(|r| r.stars()), Ok(3));
        assert_eq!(Rating::try_from(0), Err(PlaylistError::InvalidRating(0)));
        assert_eq!(Rating::try_from(6), Err(PlaylistError::InvalidRating(6)));
        assert_eq!(Rating::default().stars(), 0);
    }

    #[test]
    fn volume_clamps_and_scales() {
        assert_eq!(Volume::new(-5).level(), 0);
        assert_eq!(Volume::new(250).level(), 100);
        assert_eq!(Volume::new(20).gain(), 0.2);
        assert_eq!(Volume::new(100).gain(), 1.0);
    }
}
