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
//! This module defines the entities exchanged with the playlist service, Songs
//! and Playlists, together with the [`ViewState`] that holds everything the
//! playlist screen displays.

mod view_state;

pub(crate) use view_state::{LoadStatus, NotificationLevel, ViewState};

use serde::Deserialize;

pub(crate) type SongId = i64;
pub(crate) type PlaylistId = i64;

/// A song in the catalog, as reported by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub(crate) struct Song {
    pub(crate) id: SongId,
    pub(crate) title: String,
    pub(crate) artist: String,
}

/// A playlist and its ordered song membership, as last reported by the
/// backend.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub(crate) struct Playlist {
    pub(crate) id: PlaylistId,
    pub(crate) name: String,
    #[serde(default)]
    pub(crate) songs: Vec<Song>,
}

impl Playlist {
    pub(crate) fn contains_song(&self, song_id: SongId) -> bool {
        self.songs.iter().any(|s| s.id == song_id)
    }
}
