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

//! Request dispatching.
//!
//! The [`Dispatcher`] is the screen's only way of asking the backend for
//! anything. It checks preconditions and queues the matching [`AppTask`] for
//! the request worker; the worker's answer comes back later as an
//! [`AppEvent`](crate::events::AppEvent) and is merged by the event handlers.

use std::sync::mpsc::Sender;

use anyhow::{Context, Result};
use log::debug;

use crate::{
    model::{PlaylistId, SongId},
    tasks::AppTask,
};

pub(crate) struct Dispatcher {
    task_tx: Sender<AppTask>,
}

impl Dispatcher {
    pub(crate) fn new(task_tx: Sender<AppTask>) -> Self {
        Self { task_tx }
    }

    pub(crate) fn fetch_library(&self) -> Result<()> {
        self.send(AppTask::FetchLibrary)
    }

    /// Queues creation of a playlist named `name`.
    ///
    /// A name made only of whitespace (byte order marks included) is ignored;
    /// returns whether a request was queued.
    pub(crate) fn create_playlist(&self, name: &str) -> Result<bool> {
        if is_blank(name) {
            debug!("Ignoring blank playlist name");
            return Ok(false);
        }

        self.send(AppTask::CreatePlaylist(name.to_string()))?;
        Ok(true)
    }

    pub(crate) fn add_song(&self, playlist_id: PlaylistId, song_id: SongId) -> Result<()> {
        self.send(AppTask::AddSong {
            playlist_id,
            song_id,
        })
    }

    pub(crate) fn remove_song(&self, playlist_id: PlaylistId, song_id: SongId) -> Result<()> {
        self.send(AppTask::RemoveSong {
            playlist_id,
            song_id,
        })
    }

    fn send(&self, task: AppTask) -> Result<()> {
        self.task_tx
            .send(task)
            .context("Request worker is not running")
    }
}

fn is_blank(name: &str) -> bool {
    name.chars().all(|c| c.is_whitespace() || c == '\u{feff}')
}

#[cfg(test)]
mod tests {
    use std::sync::mpsc;

    use super::*;

    #[test]
    fn blank_names_never_reach_the_worker() {
        let (task_tx, task_rx) = mpsc::channel();
        let dispatcher = Dispatcher::new(task_tx);

        for name in ["", " ", "\t\n", "   \u{3000}", "\u{feff}", " \u{feff} "] {
            assert!(!dispatcher.create_playlist(name).unwrap());
        }

        assert!(task_rx.try_recv().is_err());
    }

    #[test]
    fn name_is_sent_as_entered() {
        let (task_tx, task_rx) = mpsc::channel();
        let dispatcher = Dispatcher::new(task_tx);

        assert!(dispatcher.create_playlist(" Mix ").unwrap());

        assert_eq!(
            task_rx.try_recv().unwrap(),
            AppTask::CreatePlaylist(" Mix ".to_string())
        );
    }

    #[test]
    fn each_action_queues_exactly_one_task() {
        let (task_tx, task_rx) = mpsc::channel();
        let dispatcher = Dispatcher::new(task_tx);

        dispatcher.add_song(2, 1).unwrap();
        dispatcher.add_song(2, 1).unwrap();
        dispatcher.remove_song(2, 1).unwrap();

        let tasks: Vec<AppTask> = task_rx.try_iter().collect();
        assert_eq!(
            tasks,
            vec![
                AppTask::AddSong {
                    playlist_id: 2,
                    song_id: 1
                },
                AppTask::AddSong {
                    playlist_id: 2,
                    song_id: 1
                },
                AppTask::RemoveSong {
                    playlist_id: 2,
                    song_id: 1
                },
            ]
        );
    }

    #[test]
    fn closed_worker_is_an_error() {
        let (task_tx, task_rx) = mpsc::channel();
        drop(task_rx);

        let dispatcher = Dispatcher::new(task_tx);

        assert!(dispatcher.fetch_library().is_err());
    }
}
