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

//! Playlist collection view.
//!
//! This module keeps the selection state for the list of playlists and for
//! the songs of the selected playlist, and turns key presses into remove and
//! add requests for the event handlers to dispatch.

mod event;
mod render;

use ratatui::widgets::ListState;

use crate::{
    components::clamp_selection,
    model::{Playlist, PlaylistId, SongId},
};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PlaylistPane {
    #[default]
    Playlists,
    Songs,
}

#[derive(Debug, PartialEq, Eq)]
pub(crate) enum PlaylistAction {
    OpenPicker(PlaylistId),
    RemoveSong {
        playlist_id: PlaylistId,
        song_id: SongId,
    },
}

#[derive(Default)]
pub(crate) struct PlaylistView {
    pub(crate) pane: PlaylistPane,
    pub(crate) playlists_state: ListState,
    pub(crate) songs_state: ListState,
}

impl PlaylistView {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn selected_playlist<'a>(&self, playlists: &'a [Playlist]) -> Option<&'a Playlist> {
        playlists.get(self.playlists_state.selected()?)
    }

    pub(crate) fn selected_song_id(&self, playlists: &[Playlist]) -> Option<SongId> {
        let playlist = self.selected_playlist(playlists)?;
        playlist
            .songs
            .get(self.songs_state.selected()?)
            .map(|song| song.id)
    }

    /// Re-validates both selections after the playlists have changed.
    pub(crate) fn sync(&mut self, playlists: &[Playlist]) {
        clamp_selection(&mut self.playlists_state, playlists.len());

        let song_count = self
            .selected_playlist(playlists)
            .map_or(0, |p| p.songs.len());
        clamp_selection(&mut self.songs_state, song_count);

        if song_count == 0 && self.pane == PlaylistPane::Songs {
            self.pane = PlaylistPane::Playlists;
        }
    }

    /// Selects the last playlist, used after one has been created.
    pub(crate) fn select_last(&mut self, playlists: &[Playlist]) {
        self.playlists_state
            .select(playlists.len().checked_sub(1));
        self.songs_state.select(None);
        self.sync(playlists);
    }
}
