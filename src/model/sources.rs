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

//! Process-local handles to uploaded audio content.
//!
//! Tracks never hold a file location directly. Instead each upload mints a
//! fresh [`SourceHandle`] that the player resolves when it needs something to
//! play. Handles are released when their track leaves the playlist, so a
//! removed track can no longer be resolved.

use std::{
    collections::HashMap,
    path::{Path, PathBuf},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct SourceHandle(u64);

#[derive(Debug, Default)]
pub(crate) struct SourceRegistry {
    next_handle: u64,
    sources: HashMap<SourceHandle, PathBuf>,
}

impl SourceRegistry {
    /// Registers a new handle for `path`.
    ///
    /// Uploading the same file twice yields two distinct handles.
    pub(crate) fn mint(&mut self, path: PathBuf) -> SourceHandle {
        self.next_handle += 1;
        let handle = SourceHandle(self.next_handle);
        self.sources.insert(handle, path);
        handle
    }

    pub(crate) fn resolve(&self, handle: SourceHandle) -> Option<&Path> {
        self.sources.get(&handle).map(PathBuf::as_path)
    }

    /// Releases a handle, returning `false` if it was not live.
    pub(crate) fn release(&mut self, handle: SourceHandle) -> bool {
        self.sources.remove(&handle).is_some()
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.sources.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minting_the_same_path_twice_gives_distinct_handles() {
        let mut registry = SourceRegistry::default();
        let a = registry.mint(PathBuf::from("/music/a.mp3"));
        let b = registry.mint(PathBuf::from("/music/a.mp3"));

        assert_ne!(a, b);
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.resolve(a), Some(Path::new("/music/a.mp3")));
    }

    #[test]
    fn released_handles_no_longer_resolve() {
        let mut registry = SourceRegistry::default();
        let handle = registry.mint(PathBuf::from("/music/a.mp3"));

        assert!(registry.release(handle));
        assert!(!registry.release(handle));
        assert_eq!(registry.resolve(handle), None);
        assert_eq!(registry.len(), 0);
    }
}
