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

use anyhow::Result;
use log::debug;

use crate::{
    App, Focus,
    components::{NameInputAction, PlaylistAction, SongPickerAction},
    model::{Playlist, Song},
};

pub(super) fn handle_refresh(app: &mut App) -> Result<()> {
    app.state.begin_load();
    app.dispatcher.fetch_library()
}

pub(super) fn handle_library_loaded(app: &mut App, songs: Vec<Song>, playlists: Vec<Playlist>) {
    app.state.replace_all(songs, playlists);
    app.song_list.sync(app.state.songs.len());
    app.playlist_view.sync(&app.state.playlists);

    let picker_orphaned = app
        .song_picker
        .playlist_id()
        .is_some_and(|id| app.state.playlist(id).is_none());
    if picker_orphaned {
        app.song_picker.close();
    } else if app.song_picker.is_open() {
        app.song_picker.sync(app.state.songs.len());
    }
}

pub(super) fn handle_library_load_failed(app: &mut App, message: String) {
    app.state.fail_load(message);
}

pub(super) fn handle_playlist_created(app: &mut App, playlist: Playlist) {
    app.state.append_playlist(playlist);
    app.name_input.reset();
    app.playlist_view.select_last(&app.state.playlists);
}

pub(super) fn handle_playlist_updated(app: &mut App, playlist: Playlist) {
    if app.state.apply_playlist_update(playlist) {
        app.playlist_view.sync(&app.state.playlists);
    }
}

pub(super) fn handle_request_failed(app: &mut App, action: String, message: String) {
    app.state.notify_error(format!("Failed to {action}: {message}"));
}

pub(super) fn handle_name_input_action(app: &mut App, action: NameInputAction) -> Result<()> {
    match action {
        NameInputAction::Changed(name) => app.state.set_pending_name(&name),
        NameInputAction::Submit => {
            if !app.dispatcher.create_playlist(&app.state.pending_name)? {
                debug!("Playlist name is blank, nothing to create");
            }
        }
        NameInputAction::Leave => app.focus = Focus::Playlists,
    }

    Ok(())
}

pub(super) fn handle_playlist_action(app: &mut App, action: PlaylistAction) -> Result<()> {
    match action {
        PlaylistAction::OpenPicker(playlist_id) => {
            app.song_picker.open(playlist_id, app.state.songs.len())
        }
        PlaylistAction::RemoveSong {
            playlist_id,
            song_id,
        } => app.dispatcher.remove_song(playlist_id, song_id)?,
    }

    Ok(())
}

pub(super) fn handle_song_picker_action(app: &mut App, action: SongPickerAction) -> Result<()> {
    match action {
        SongPickerAction::AddSong {
            playlist_id,
            song_id,
        } => {
            if app
                .state
                .playlist(playlist_id)
                .is_some_and(|p| p.contains_song(song_id))
            {
                debug!("Song {song_id} is already in playlist {playlist_id}, sending anyway");
            }
            app.dispatcher.add_song(playlist_id, song_id)?
        }
        SongPickerAction::Cancel => {}
    }

    Ok(())
}

pub(super) fn handle_tick(_app: &mut App) {}
