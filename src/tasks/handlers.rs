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
use log::{info, warn};

use crate::{
    api::ApiError,
    events::AppEvent,
    model::{PlaylistId, SongId},
    tasks::TaskContext,
};

pub(super) fn fetch_library(ctx: &TaskContext) -> Result<()> {
    let result = ctx
        .api
        .fetch_songs()
        .and_then(|songs| ctx.api.fetch_playlists().map(|playlists| (songs, playlists)));

    match result {
        Ok((songs, playlists)) => {
            info!(
                "Loaded {} songs and {} playlists",
                songs.len(),
                playlists.len()
            );
            ctx.event_tx
                .send(AppEvent::LibraryLoaded { songs, playlists })?;
        }
        Err(e) => {
            warn!("Failed to load library: {e}");
            ctx.event_tx.send(AppEvent::LibraryLoadFailed(e.to_string()))?;
        }
    }

    Ok(())
}

pub(super) fn create_playlist(ctx: &TaskContext, name: String) -> Result<()> {
    match ctx.api.create_playlist(&name) {
        Ok(playlist) => {
            info!("Created playlist {} ({})", playlist.id, playlist.name);
            ctx.event_tx.send(AppEvent::PlaylistCreated(playlist))?;
        }
        Err(e) => report_failure(ctx, format!("create playlist \"{name}\""), e)?,
    }

    Ok(())
}

pub(super) fn add_song(ctx: &TaskContext, playlist_id: PlaylistId, song_id: SongId) -> Result<()> {
    match ctx.api.add_song(playlist_id, song_id) {
        Ok(playlist) => ctx.event_tx.send(AppEvent::PlaylistUpdated(playlist))?,
        Err(e) => report_failure(
            ctx,
            format!("add song {song_id} to playlist {playlist_id}"),
            e,
        )?,
    }

    Ok(())
}

pub(super) fn remove_song(
    ctx: &TaskContext,
    playlist_id: PlaylistId,
    song_id: SongId,
) -> Result<()> {
    match ctx.api.remove_song(playlist_id, song_id) {
        Ok(playlist) => ctx.event_tx.send(AppEvent::PlaylistUpdated(playlist))?,
        Err(e) => report_failure(
            ctx,
            format!("remove song {song_id} from playlist {playlist_id}"),
            e,
        )?,
    }

    Ok(())
}

fn report_failure(ctx: &TaskContext, action: String, error: ApiError) -> Result<()> {
    warn!("Failed to {action}: {error}");
    ctx.event_tx.send(AppEvent::RequestFailed {
        action,
        message: error.to_string(),
    })?;

    Ok(())
}
