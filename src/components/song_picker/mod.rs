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

//! Add-song picker.
//!
//! A modal list of the whole catalog for adding a song to one playlist. Songs
//! that are already in the playlist are listed too (and marked); picking one
//! sends the add request anyway and leaves the outcome to the backend.

mod event;
mod render;

use ratatui::widgets::ListState;

use crate::{
    components::clamp_selection,
    model::{PlaylistId, SongId},
};

#[derive(Debug, PartialEq, Eq)]
pub(crate) enum SongPickerAction {
    AddSong {
        playlist_id: PlaylistId,
        song_id: SongId,
    },
    Cancel,
}

#[derive(Default)]
pub(crate) struct SongPicker {
    playlist_id: Option<PlaylistId>,
    pub(crate) list_state: ListState,
}

impl SongPicker {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn is_open(&self) -> bool {
        self.playlist_id.is_some()
    }

    pub(crate) fn playlist_id(&self) -> Option<PlaylistId> {
        self.playlist_id
    }

    pub(crate) fn open(&mut self, playlist_id: PlaylistId, song_count: usize) {
        self.playlist_id = Some(playlist_id);
        self.list_state.select((song_count > 0).then_some(0));
    }

    pub(crate) fn close(&mut self) {
        self.playlist_id = None;
    }

    /// Keeps the highlighted row inside a catalog of `song_count` songs.
    pub(crate) fn sync(&mut self, song_count: usize) {
        clamp_selection(&mut self.list_state, song_count);
    }
}
