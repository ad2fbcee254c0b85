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

//! Key handling for the playlist view.

use crossterm::event::{Event, KeyCode};

use crate::{
    components::{PlaylistAction, PlaylistPane, PlaylistView, select_next, select_previous},
    model::Playlist,
};

impl PlaylistView {
    pub(crate) fn process_event(
        &mut self,
        event: &Event,
        playlists: &[Playlist],
    ) -> Option<PlaylistAction> {
        let Event::Key(key_event) = event else {
            return None;
        };

        if key_event.code == KeyCode::Char('a') {
            return self
                .selected_playlist(playlists)
                .map(|p| PlaylistAction::OpenPicker(p.id));
        }

        match self.pane {
            PlaylistPane::Playlists => {
                match key_event.code {
                    KeyCode::Char('j') | KeyCode::Down => {
                        select_next(&mut self.playlists_state, playlists.len());
                        self.songs_state.select(None);
                    }
                    KeyCode::Char('k') | KeyCode::Up => {
                        select_previous(&mut self.playlists_state, playlists.len());
                        self.songs_state.select(None);
                    }
                    KeyCode::Enter | KeyCode::Char('l') | KeyCode::Right => {
                        let has_songs = self
                            .selected_playlist(playlists)
                            .is_some_and(|p| !p.songs.is_empty());
                        if has_songs {
                            self.pane = PlaylistPane::Songs;
                        }
                    }
                    _ => {}
                }
                self.sync(playlists);
                None
            }

            PlaylistPane::Songs => {
                let song_count = self
                    .selected_playlist(playlists)
                    .map_or(0, |p| p.songs.len());

                match key_event.code {
                    KeyCode::Char('j') | KeyCode::Down => {
                        select_next(&mut self.songs_state, song_count)
                    }
                    KeyCode::Char('k') | KeyCode::Up => {
                        select_previous(&mut self.songs_state, song_count)
                    }
                    KeyCode::Char('h') | KeyCode::Left | KeyCode::Esc | KeyCode::Backspace => {
                        self.pane = PlaylistPane::Playlists
                    }
                    KeyCode::Char('d') | KeyCode::Delete => {
                        let playlist_id = self.selected_playlist(playlists)?.id;
                        let song_id = self.selected_song_id(playlists)?;
                        return Some(PlaylistAction::RemoveSong {
                            playlist_id,
                            song_id,
                        });
                    }
                    _ => {}
                }
                None
            }
        }
    }
}
