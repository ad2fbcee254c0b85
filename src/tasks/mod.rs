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

//! Background request processing.
//!
//! This module implements the command pattern used to keep network requests
//! off the main UI thread. A dedicated worker owns the [`PlaylistApi`] client,
//! translates each [`AppTask`] into a request, and broadcasts the outcome back
//! to the application via [`AppEvent`]s.
//!
//! Tasks are processed one at a time in the order they were queued, so backend
//! responses are applied in the same order the user acted.

mod handlers;
use handlers::*;

use std::{
    sync::mpsc::{Receiver, Sender},
    thread::{self, JoinHandle},
};

use anyhow::Result;
use log::{debug, info};

use crate::{
    api::PlaylistApi,
    events::AppEvent,
    model::{PlaylistId, SongId},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum AppTask {
    FetchLibrary,

    CreatePlaylist(String),
    AddSong {
        playlist_id: PlaylistId,
        song_id: SongId,
    },
    RemoveSong {
        playlist_id: PlaylistId,
        song_id: SongId,
    },
}

/// Spawns a background thread to process application tasks.
///
/// The worker exits when the task channel is closed or the application event
/// channel has gone away.
///
/// # Arguments
///
/// * `api` - The playlist service client, owned by the worker from now on.
/// * `task_rx` - The receiving end of the task channel.
/// * `event_tx` - The sending end of the channel for broadcasting results.
pub(crate) fn spawn_task_worker(
    api: Box<dyn PlaylistApi>,
    task_rx: Receiver<AppTask>,
    event_tx: Sender<AppEvent>,
) -> JoinHandle<()> {
    thread::spawn(move || {
        let ctx = TaskContext {
            api: api.as_ref(),
            event_tx: &event_tx,
        };

        while let Ok(task) = task_rx.recv() {
            debug!("Processing task {task:?}");
            if handle_task(task, &ctx).is_err() {
                break;
            }
        }

        info!("Request worker stopped");
    })
}

/// Bundles shared resources required by task handlers.
struct TaskContext<'a> {
    api: &'a dyn PlaylistApi,
    event_tx: &'a Sender<AppEvent>,
}

/// Orchestrates the execution of a single task.
///
/// Request failures are reported as events, so an error here means the
/// application event channel is closed.
fn handle_task(task: AppTask, ctx: &TaskContext) -> Result<()> {
    match task {
        AppTask::FetchLibrary => fetch_library(ctx),

        AppTask::CreatePlaylist(name) => create_playlist(ctx, name),
        AppTask::AddSong {
            playlist_id,
            song_id,
        } => add_song(ctx, playlist_id, song_id),
        AppTask::RemoveSong {
            playlist_id,
            song_id,
        } => remove_song(ctx, playlist_id, song_id),
    }
}

#[cfg(test)]
mod tests {
    use std::sync::mpsc;

    use super::*;
    use crate::{
        api::{ApiError, MockPlaylistApi},
        model::{Playlist, Song},
    };

    fn song(id: SongId) -> Song {
        Song {
            id,
            title: "A".to_string(),
            artist: "X".to_string(),
        }
    }

    fn playlist(id: PlaylistId, songs: Vec<Song>) -> Playlist {
        Playlist {
            id,
            name: "Mix".to_string(),
            songs,
        }
    }

    fn run(api: &MockPlaylistApi, task: AppTask) -> AppEvent {
        let (event_tx, event_rx) = mpsc::channel();
        let ctx = TaskContext {
            api,
            event_tx: &event_tx,
        };
        handle_task(task, &ctx).unwrap();
        event_rx.try_recv().unwrap()
    }

    #[test]
    fn fetch_library_reports_both_collections() {
        let mut api = MockPlaylistApi::new();
        api.expect_fetch_songs()
            .times(1)
            .returning(|| Ok(vec![song(1)]));
        api.expect_fetch_playlists()
            .times(1)
            .returning(|| Ok(vec![playlist(2, vec![])]));

        match run(&api, AppTask::FetchLibrary) {
            AppEvent::LibraryLoaded { songs, playlists } => {
                assert_eq!(songs, vec![song(1)]);
                assert_eq!(playlists, vec![playlist(2, vec![])]);
            }
            other => panic!("Unexpected event {other:?}"),
        }
    }

    #[test]
    fn fetch_library_failure_is_reported() {
        let mut api = MockPlaylistApi::new();
        api.expect_fetch_songs()
            .returning(|| Err(ApiError::Unreachable("connection refused".to_string())));
        api.expect_fetch_playlists().times(0);

        match run(&api, AppTask::FetchLibrary) {
            AppEvent::LibraryLoadFailed(message) => assert!(message.contains("connection refused")),
            other => panic!("Unexpected event {other:?}"),
        }
    }

    #[test]
    fn create_playlist_reports_created_playlist() {
        let mut api = MockPlaylistApi::new();
        api.expect_create_playlist()
            .withf(|name| name.to_string() == "Mix")
            .times(1)
            .returning(|_| Ok(playlist(2, vec![])));

        match run(&api, AppTask::CreatePlaylist("Mix".to_string())) {
            AppEvent::PlaylistCreated(created) => assert_eq!(created, playlist(2, vec![])),
            other => panic!("Unexpected event {other:?}"),
        }
    }

    #[test]
    fn add_and_remove_report_updated_playlist() {
        let mut api = MockPlaylistApi::new();
        api.expect_add_song()
            .withf(|playlist_id, song_id| *playlist_id == 2 && *song_id == 1)
            .returning(|_, _| Ok(playlist(2, vec![song(1)])));
        api.expect_remove_song()
            .withf(|playlist_id, song_id| *playlist_id == 2 && *song_id == 1)
            .returning(|_, _| Ok(playlist(2, vec![])));

        let added = run(
            &api,
            AppTask::AddSong {
                playlist_id: 2,
                song_id: 1,
            },
        );
        assert!(matches!(added, AppEvent::PlaylistUpdated(p) if p.songs == vec![song(1)]));

        let removed = run(
            &api,
            AppTask::RemoveSong {
                playlist_id: 2,
                song_id: 1,
            },
        );
        assert!(matches!(removed, AppEvent::PlaylistUpdated(p) if p.songs.is_empty()));
    }

    #[test]
    fn mutation_failure_names_the_action() {
        let mut api = MockPlaylistApi::new();
        api.expect_remove_song().returning(|_, _| {
            Err(ApiError::Server {
                status: 404,
                message: "not found".to_string(),
            })
        });

        match run(
            &api,
            AppTask::RemoveSong {
                playlist_id: 9,
                song_id: 1,
            },
        ) {
            AppEvent::RequestFailed { action, message } => {
                assert!(action.contains("remove"));
                assert!(message.contains("404"));
            }
            other => panic!("Unexpected event {other:?}"),
        }
    }

    #[test]
    fn worker_processes_tasks_in_order() {
        let mut api = MockPlaylistApi::new();
        api.expect_add_song()
            .returning(|_, _| Ok(playlist(2, vec![song(1)])));
        api.expect_remove_song()
            .returning(|_, _| Ok(playlist(2, vec![])));

        let (task_tx, task_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let worker = spawn_task_worker(Box::new(api), task_rx, event_tx);

        task_tx
            .send(AppTask::AddSong {
                playlist_id: 2,
                song_id: 1,
            })
            .unwrap();
        task_tx
            .send(AppTask::RemoveSong {
                playlist_id: 2,
                song_id: 1,
            })
            .unwrap();
        drop(task_tx);
        worker.join().unwrap();

        let events: Vec<AppEvent> = event_rx.iter().collect();
        assert_eq!(events.len(), 2);
        assert!(matches!(&events[0], AppEvent::PlaylistUpdated(p) if p.songs.len() == 1));
        assert!(matches!(&events[1], AppEvent::PlaylistUpdated(p) if p.songs.is_empty()));
    }
}
