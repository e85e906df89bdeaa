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

//! Playlist state management.
//!
//! The [`Playlist`] owns every piece of state the application shows: the
//! uploaded tracks, the favourites, the search filter, the volume and the
//! current toast. Each user action maps onto exactly one method here, which
//! updates the state synchronously.
//!
//! Methods that show a toast return the [`ToastTicket`] for that showing, the
//! caller is responsible for scheduling its expiry.

use std::path::Path;

use tracing::{debug, info};

use crate::{
    error::PlaylistError,
    model::{
        Rating, Track, TrackId, UPLOADED_LABEL, Volume,
        sources::SourceRegistry,
        toast::{Notice, Toast, ToastTicket},
    },
};

#[derive(Debug, Default)]
pub(crate) struct Playlist {
    tracks: Vec<Track>,
    favourites: Vec<TrackId>,
    filter: String,
    volume: Volume,
    sources: SourceRegistry,
    toast: Toast,
    next_id: u64,
}

impl Playlist {
    pub(crate) fn new(volume: Volume) -> Self {
        Self {
            volume,
            ..Self::default()
        }
    }

    /// Appends a track for the selected file.
    ///
    /// A `None` selection (the picker was cancelled) is silently ignored.
    ///
    /// # Errors
    ///
    /// Returns [`PlaylistError::NotAFile`] if the selection is not an existing
    /// regular file.
    pub(crate) fn upload(
        &mut self,
        selection: Option<&Path>,
    ) -> Result<Option<(TrackId, ToastTicket)>, PlaylistError> {
        let Some(path) = selection else {
            return Ok(None);
        };

        if !path.is_file() {
            return Err(PlaylistError::NotAFile(path.to_path_buf()));
        }

        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        self.next_id += 1;
        let id = TrackId(self.next_id);

        let track = Track {
            id,
            name,
            duration_label: UPLOADED_LABEL.to_string(),
            source: self.sources.mint(path.to_path_buf()),
            rating: Rating::default(),
        };

        info!(%id, name = %track.name, "uploaded track");
        self.tracks.push(track);

        Ok(Some((id, self.toast.show(Notice::SongUploaded))))
    }

    /// Replaces the search filter, verbatim.
    pub(crate) fn search(&mut self, text: impl Into<String>) {
        self.filter = text.into();
        debug!(filter = %self.filter, "search filter changed");
    }

    /// Tracks whose name contains the filter, ignoring case, in upload order.
    pub(crate) fn filtered_tracks(&self) -> Vec<&Track> {
        let needle = self.filter.to_lowercase();
        self.tracks
            .iter()
            .filter(|track| track.name.to_lowercase().contains(&needle))
            .collect()
    }

    pub(crate) fn set_volume(&mut self, level: i32) -> Volume {
        self.volume = Volume::new(level);
        debug!(level = self.volume.level(), "volume changed");
        self.volume
    }

    /// Adds the track to the end of the favourites, or removes it if it is
    /// already there.
    ///
    /// Unknown tracks are ignored.
    pub(crate) fn toggle_favourite(&mut self, id: TrackId) -> Option<ToastTicket> {
        self.track(id)?;

        let notice = if let Some(index) = self.favourites.iter().position(|fav| *fav == id) {
            self.favourites.remove(index);
            Notice::RemovedFromFavourites
        } else {
            self.favourites.push(id);
            Notice::AddedToFavourites
        };

        debug!(%id, ?notice, "favourite toggled");
        Some(self.toast.show(notice))
    }

    /// Sets the rating of one track, returning `false` if there is no such
    /// track.
    pub(crate) fn set_rating(&mut self, id: TrackId, rating: Rating) -> bool {
        match self.tracks.iter_mut().find(|track| track.id == id) {
            Some(track) => {
                track.rating = rating;
                debug!(%id, stars = rating.stars(), "track rated");
                true
            }
            None => false,
        }
    }

    /// Removes a track from the playlist and the favourites, releasing its
    /// source.
    pub(crate) fn remove_song(&mut self, id: TrackId) -> Option<(Track, ToastTicket)> {
        let index = self.tracks.iter().position(|track| track.id == id)?;
        let track = self.tracks.remove(index);

        self.favourites.retain(|fav| *fav != id);
        self.sources.release(track.source);

        info!(%id, name = %track.name, "removed track");
        let ticket = self.toast.show(Notice::RemovedFromPlaylist);

        Some((track, ticket))
    }

    pub(crate) fn expire_toast(&mut self, ticket: ToastTicket) -> bool {
        self.toast.expire(ticket)
    }

    pub(crate) fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    pub(crate) fn track(&self, id: TrackId) -> Option<&Track> {
        self.tracks.iter().find(|track| track.id == id)
    }

    /// Favourite tracks, in the order they were favourited.
    pub(crate) fn favourites(&self) -> Vec<&Track> {
        self.favourites
            .iter()
            .filter_map(|id| self.track(*id))
            .collect()
    }

    pub(crate) fn is_favourite(&self, id: TrackId) -> bool {
        self.favourites.contains(&id)
    }

    pub(crate) fn filter(&self) -> &str {
        &self.filter
    }

    pub(crate) fn volume(&self) -> Volume {
        self.volume
    }

    pub(crate) fn toast(&self) -> &Toast {
        &self.toast
    }

    /// Location of the audio content behind a track, if it is still live.
    pub(crate) fn source_path(&self, id: TrackId) -> Option<&Path> {
        self.track(id)
            .and_then(|track| self.sources.resolve(track.source))
    }

    #[cfg(test)]
    fn live_sources(&self) -> usize {
        self.sources.len()
    }
}

#[cfg(test)]
mod tests {
    use std::{fs::File, path::PathBuf};

    use tempfile::TempDir;

    use super::*;

    fn audio_file(dir: &TempDir, name: &str) -> PathBuf {
        let path = dir.path().join(name);
        File::create(&path).unwrap();
        path
    }

    fn upload(playlist: &mut Playlist, path: &Path) -> TrackId {
        playlist.upload(Some(path)).unwrap().unwrap().0
    }

    #[test]
    fn upload_appends_an_unrated_track() {
        let dir = TempDir::new().unwrap();
        let path = audio_file(&dir, "a.mp3");
        let mut playlist = Playlist::default();

        let id = upload(&mut playlist, &path);

        assert_eq!(playlist.tracks().len(), 1);
        let track = playlist.track(id).unwrap();
        assert_eq!(track.name, "a.mp3");
        assert_eq!(track.duration_label, "Uploaded");
        assert_eq!(track.rating.stars(), 0);
        assert_eq!(playlist.source_path(id), Some(path.as_path()));
        assert_eq!(playlist.toast().message(), Some("Song Uploaded"));
    }

    #[test]
    fn uploads_keep_their_order_and_distinct_ids() {
        let dir = TempDir::new().unwrap();
        let a = audio_file(&dir, "a.mp3");
        let b = audio_file(&dir, "b.mp3");
        let mut playlist = Playlist::default();

        let first = upload(&mut playlist, &a);
        let second = upload(&mut playlist, &b);
        let again = upload(&mut playlist, &a);

        let ids: Vec<TrackId> = playlist.tracks().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![first, second, again]);
        assert_ne!(first, again);
    }

    #[test]
    fn cancelled_upload_is_a_silent_no_op() {
        let mut playlist = Playlist::default();

        assert_eq!(playlist.upload(None), Ok(None));
        assert!(playlist.tracks().is_empty());
        assert_eq!(playlist.toast().message(), None);
    }

    #[test]
    fn upload_rejects_missing_files() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("missing.mp3");
        let mut playlist = Playlist::default();

        assert_eq!(
            playlist.upload(Some(missing.as_path())),
            Err(PlaylistError::NotAFile(missing.clone()))
        );
        assert!(playlist.tracks().is_empty());
    }

    #[test]
    fn filter_matches_names_ignoring_case_in_order() {
        let dir = TempDir::new().unwrap();
        let mut playlist = Playlist::default();
        for name in ["Rock Anthem.mp3", "jazz.ogg", "ROCKY.flac", "pop.mp3"] {
            upload(&mut playlist, &audio_file(&dir, name));
        }

        playlist.search("rOcK");
        let names: Vec<&str> = playlist
            .filtered_tracks()
            .iter()
            .map(|t| t.name.as_str())
            .collect();
        assert_eq!(names, vec!["Rock Anthem.mp3", "ROCKY.flac"]);

        playlist.search("");
        assert_eq!(playlist.filtered_tracks().len(), 4);

        playlist.search(" rock");
        assert_eq!(playlist.filter(), " rock");
        assert!(playlist.filtered_tracks().is_empty());
    }

    #[test]
    fn favourite_toggle_round_trip() {
        let dir = TempDir::new().unwrap();
        let mut playlist = Playlist::default();
        let id = upload(&mut playlist, &audio_file(&dir, "a.mp3"));

        assert!(playlist.toggle_favourite(id).is_some());
        assert!(playlist.is_favourite(id));
        assert_eq!(playlist.toast().message(), Some("Added to Favorites"));

        assert!(playlist.toggle_favourite(id).is_some());
        assert!(!playlist.is_favourite(id));
        assert!(playlist.favourites().is_empty());
        assert_eq!(playlist.toast().message(), Some("Removed from Favorites"));
    }

    #[test]
    fn refavouriting_appends_at_the_end() {
        let dir = TempDir::new().unwrap();
        let mut playlist = Playlist::default();
        let a = upload(&mut playlist, &audio_file(&dir, "a.mp3"));
        let b = upload(&mut playlist, &audio_file(&dir, "b.mp3"));

        playlist.toggle_favourite(a);
        playlist.toggle_favourite(b);
        playlist.toggle_favourite(a);
        playlist.toggle_favourite(a);

        let order: Vec<TrackId> = playlist.favourites().iter().map(|t| t.id).collect();
        assert_eq!(order, vec![b, a]);
    }

    #[test]
    fn favourites_ignore_the_search_filter() {
        let dir = TempDir::new().unwrap();
        let mut playlist = Playlist::default();
        let a = upload(&mut playlist, &audio_file(&dir, "a.mp3"));
        playlist.toggle_favourite(a);

        playlist.search("zzz");

        assert!(playlist.filtered_tracks().is_empty());
        assert_eq!(playlist.favourites().len(), 1);
    }

    #[test]
    fn toggling_an_unknown_track_does_nothing() {
        let mut playlist = Playlist::default();

        assert!(playlist.toggle_favourite(TrackId(42)).is_none());
        assert!(!playlist.is_favourite(TrackId(42)));
        assert_eq!(playlist.toast().message(), None);
    }

    #[test]
    fn rating_changes_only_the_target_track() {
        let dir = TempDir::new().unwrap();
        let mut playlist = Playlist::default();
        let a = upload(&mut playlist, &audio_file(&dir, "a.mp3"));
        let b = upload(&mut playlist, &audio_file(&dir, "b.mp3"));
        playlist.set_rating(b, Rating::try_from(5).unwrap());

        assert!(playlist.set_rating(a, Rating::try_from(3).unwrap()));

        assert_eq!(playlist.track(a).unwrap().rating.stars(), 3);
        assert_eq!(playlist.track(b).unwrap().rating.stars(), 5);
        assert!(!playlist.set_rating(TrackId(99), Rating::try_from(1).unwrap()));
    }

    #[test]
    fn same_named_uploads_are_rated_independently() {
        let dir = TempDir::new().unwrap();
        let path = audio_file(&dir, "a.mp3");
        let mut playlist = Playlist::default();
        let first = upload(&mut playlist, &path);
        let second = upload(&mut playlist, &path);

        playlist.set_rating(second, Rating::try_from(4).unwrap());

        assert_eq!(playlist.track(first).unwrap().rating.stars(), 0);
        assert_eq!(playlist.track(second).unwrap().rating.stars(), 4);
    }

    #[test]
    fn removal_cascades_to_favourites_and_releases_the_source() {
        let dir = TempDir::new().unwrap();
        let mut playlist = Playlist::default();
        let a = upload(&mut playlist, &audio_file(&dir, "a.mp3"));
        let b = upload(&mut playlist, &audio_file(&dir, "b.mp3"));
        playlist.toggle_favourite(a);

        let (removed, _) = playlist.remove_song(a).unwrap();

        assert_eq!(removed.name, "a.mp3");
        assert!(playlist.track(a).is_none());
        assert!(!playlist.is_favourite(a));
        assert!(playlist.favourites().is_empty());
        assert_eq!(playlist.source_path(a), None);
        assert_eq!(playlist.live_sources(), 1);
        assert!(playlist.track(b).is_some());
        assert_eq!(playlist.toast().message(), Some("Removed from Playlist"));
    }

    #[test]
    fn removing_an_unknown_track_shows_nothing() {
        let mut playlist = Playlist::default();

        assert!(playlist.remove_song(TrackId(7)).is_none());
        assert_eq!(playlist.toast().message(), None);
    }

    #[test]
    fn volume_is_clamped_and_reported_as_gain() {
        let mut playlist = Playlist::new(Volume::new(50));

        assert_eq!(playlist.set_volume(20).gain(), 0.2);
        assert_eq!(playlist.volume().level(), 20);
        assert_eq!(playlist.set_volume(140).level(), 100);
        assert_eq!(playlist.toast().message(), None);
    }

    #[test]
    fn stale_toast_expiry_keeps_the_newer_toast() {
        let dir = TempDir::new().unwrap();
        let mut playlist = Playlist::default();
        let (id, upload_ticket) = playlist
            .upload(Some(audio_file(&dir, "a.mp3").as_path()))
            .unwrap()
            .unwrap();
        let favourite_ticket = playlist.toggle_favourite(id).unwrap();

        assert!(!playlist.expire_toast(upload_ticket));
        assert_eq!(playlist.toast().message(), Some("Added to Favorites"));

        assert!(playlist.expire_toast(favourite_ticket));
        assert_eq!(playlist.toast().message(), None);
    }
}
