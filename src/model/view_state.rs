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

//! Playlist screen state.
//!
//! [`ViewState`] is the single owned holder of everything the screen shows.
//! It is only ever changed by backend responses (and by typing into the
//! new-playlist input), never by predicting the result of a mutation locally.

use log::debug;

use crate::model::{Playlist, PlaylistId, Song};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) enum LoadStatus {
    #[default]
    Idle,
    Loading,
    Ready,
    Failed(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum NotificationLevel {
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Notification {
    pub(crate) level: NotificationLevel,
    pub(crate) message: String,
}

#[derive(Debug, Default)]
pub(crate) struct ViewState {
    pub(crate) songs: Vec<Song>,
    pub(crate) playlists: Vec<Playlist>,
    pub(crate) pending_name: String,
    pub(crate) load_status: LoadStatus,
    pub(crate) notification: Option<Notification>,
}

/// Replaces the playlist whose id matches `updated` with `updated`.
///
/// The replacement is wholesale, every other entry keeps its position. Returns
/// `false`, leaving the sequence untouched, when no entry has that id.
pub(crate) fn merge_by_id(playlists: &mut [Playlist], updated: Playlist) -> bool {
    match playlists.iter_mut().find(|p| p.id == updated.id) {
        Some(existing) => {
            *existing = updated;
            true
        }
        None => false,
    }
}

impl ViewState {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn begin_load(&mut self) {
        self.load_status = LoadStatus::Loading;
    }

    /// Replaces the catalog and the playlist collection with a fresh fetch.
    pub(crate) fn replace_all(&mut self, songs: Vec<Song>, playlists: Vec<Playlist>) {
        self.songs = songs;
        self.playlists = playlists;
        self.load_status = LoadStatus::Ready;
    }

    /// Records a failed fetch, the previously loaded content is kept.
    pub(crate) fn fail_load(&mut self, message: String) {
        self.notify_error(format!("Failed to load library: {message}"));
        self.load_status = LoadStatus::Failed(message);
    }

    pub(crate) fn set_pending_name(&mut self, name: &str) {
        self.pending_name.clear();
        self.pending_name.push_str(name);
    }

    /// Appends a newly created playlist and clears the pending name.
    pub(crate) fn append_playlist(&mut self, playlist: Playlist) {
        self.notify_info(format!("Created playlist \"{}\"", playlist.name));
        self.playlists.push(playlist);
        self.pending_name.clear();
    }

    /// Applies an authoritative playlist returned by an add or remove request.
    ///
    /// Responses for playlists that are not in the local collection are
    /// dropped.
    pub(crate) fn apply_playlist_update(&mut self, playlist: Playlist) -> bool {
        let id = playlist.id;
        let merged = merge_by_id(&mut self.playlists, playlist);
        if !merged {
            debug!("Dropped update for unknown playlist {id}");
        }
        merged
    }

    pub(crate) fn playlist(&self, id: PlaylistId) -> Option<&Playlist> {
        self.playlists.iter().find(|p| p.id == id)
    }

    pub(crate) fn notify_info(&mut self, message: String) {
        self.notification = Some(Notification {
            level: NotificationLevel::Info,
            message,
        });
    }

    pub(crate) fn notify_error(&mut self, message: String) {
        self.notification = Some(Notification {
            level: NotificationLevel::Error,
            message,
        });
    }

    pub(crate) fn dismiss_notification(&mut self) -> bool {
        self.notification.take().is_some()
    }
}
