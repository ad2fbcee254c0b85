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

//! Playlist service client.
//!
//! The [`PlaylistApi`] trait is the seam between the request worker and the
//! remote service. [`HttpPlaylistApi`] is the production implementation, tests
//! substitute a mock.
//!
//! | Operation | Request |
//! |-----------|---------|
//! | [`PlaylistApi::fetch_songs`] | `GET /songs` |
//! | [`PlaylistApi::fetch_playlists`] | `GET /playlists` |
//! | [`PlaylistApi::create_playlist`] | `POST /playlists` |
//! | [`PlaylistApi::add_song`] | `POST /playlists/{id}/songs` |
//! | [`PlaylistApi::remove_song`] | `DELETE /playlists/{id}/songs/{song_id}` |

mod error;
mod http;

pub(crate) use error::{ApiError, Result};
pub(crate) use http::HttpPlaylistApi;

use crate::model::{Playlist, PlaylistId, Song, SongId};

#[cfg_attr(test, mockall::automock)]
pub(crate) trait PlaylistApi: Send {
    fn fetch_songs(&self) -> Result<Vec<Song>>;

    fn fetch_playlists(&self) -> Result<Vec<Playlist>>;

    /// Creates a playlist, returning it as stored by the service.
    fn create_playlist(&self, name: &str) -> Result<Playlist>;

    /// Adds a song, returning the full updated playlist.
    fn add_song(&self, playlist_id: PlaylistId, song_id: SongId) -> Result<Playlist>;

    /// Removes a song, returning the full updated playlist.
    fn remove_song(&self, playlist_id: PlaylistId, song_id: SongId) -> Result<Playlist>;
}
