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

//! Deferred application events.

use std::{sync::mpsc::Sender, thread, time::Duration};

use crate::{events::AppEvent, model::toast::ToastTicket};

/// Spawns a one-shot timer that reports the toast as expired after `delay`.
///
/// Timers are never cancelled. A timer that fires after a newer toast has
/// been shown carries a stale ticket, which the playlist ignores.
pub(crate) fn spawn_toast_expiry(ticket: ToastTicket, delay: Duration, event_tx: Sender<AppEvent>) {
    thread::spawn(move || {
        thread::sleep(delay);
        let _ = event_tx.send(AppEvent::ToastExpired(ticket));
    });
}

#[cfg(test)]
mod tests {
    use std::{sync::mpsc, time::Instant};

    use super::*;
    use crate::model::toast::{Notice, Toast};

    #[test]
    fn expiry_is_delivered_after_the_delay() {
        let (event_tx, event_rx) = mpsc::channel();
        let mut toast = Toast::default();
        let ticket = toast.show(Notice::SongUploaded);

        let started = Instant::now();
        spawn_toast_expiry(ticket, Duration::from_millis(50), event_tx);

        match event_rx.recv_timeout(Duration::from_secs(5)) {
            Ok(AppEvent::ToastExpired(expired)) => {
                assert!(started.elapsed() >= Duration::from_millis(50));
                assert!(toast.expire(expired));
                assert_eq!(toast.message(), None);
            }
            other => panic!("unexpected event: {:?}", other),
        }
    }

    #[test]
    fn message_survives_until_the_timer_fires() {
        let (event_tx, event_rx) = mpsc::channel();
        let mut toast = Toast::default();
        let ticket = toast.show(Notice::RemovedFromPlaylist);

        spawn_toast_expiry(ticket, Duration::from_millis(300), event_tx);

        assert!(event_rx.recv_timeout(Duration::from_millis(50)).is_err());
        assert_eq!(toast.message(), Some("Removed from Playlist"));
    }
}
