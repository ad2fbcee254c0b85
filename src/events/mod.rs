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

//! Application event distribution and orchestration.
//!
//! This module defines the central event-handling logic for the application,
//! bridging user input (keyboard), request worker results, and the UI
//! rendering pipeline.
//!
//! # Architecture
//!
//! The system follows a reactive event-loop pattern:
//!
//! 1. **Capture**: Events are received via the [`AppEvent`] enum through an
//!    asynchronous channel.
//! 2. **Process**: [`handle_event`] updates the [`App`] state, merging
//!    backend responses into the view state and dispatching new requests to
//!    the request worker.
//! 3. **Render**: After each event is processed, the UI is re-drawn using the
//!    `ratatui` terminal.

mod handlers;
use handlers::*;

use std::io::Stdout;

use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use ratatui::{Terminal, prelude::CrosstermBackend};

use crate::{
    App, Focus,
    components::PlaylistPane,
    model::{Playlist, Song},
    render::draw,
};

#[derive(Debug)]
pub(crate) enum AppEvent {
    Key(KeyEvent),
    Resize,

    LibraryLoaded {
        songs: Vec<Song>,
        playlists: Vec<Playlist>,
    },
    LibraryLoadFailed(String),

    PlaylistCreated(Playlist),
    PlaylistUpdated(Playlist),
    RequestFailed {
        action: String,
        message: String,
    },

    Tick,

    ExitApplication,
}

/// Runs the main application loop, handling events and rendering the UI in the
/// terminal.
///
/// This function loops until a 'quit' event is received or the event channel
/// is closed.
pub(crate) fn process_events(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
) -> Result<()> {
    terminal.draw(|f| draw(f, app))?;

    while let Ok(event) = app.event_rx.recv() {
        if matches!(event, AppEvent::ExitApplication) {
            break;
        }

        handle_event(app, event)?;

        terminal.draw(|f| draw(f, app))?;
    }

    Ok(())
}

/// Applies a single event to the application state.
pub(crate) fn handle_event(app: &mut App, event: AppEvent) -> Result<()> {
    match event {
        AppEvent::Key(key) => process_key_event(app, key)?,
        AppEvent::LibraryLoaded { songs, playlists } => {
            handle_library_loaded(app, songs, playlists)
        }
        AppEvent::LibraryLoadFailed(message) => handle_library_load_failed(app, message),
        AppEvent::PlaylistCreated(playlist) => handle_playlist_created(app, playlist),
        AppEvent::PlaylistUpdated(playlist) => handle_playlist_updated(app, playlist),
        AppEvent::RequestFailed { action, message } => {
            handle_request_failed(app, action, message)
        }
        AppEvent::Tick | AppEvent::Resize => handle_tick(app),
        // The main loop stops before handing this over.
        AppEvent::ExitApplication => {}
    }

    Ok(())
}

/// Routes keyboard input to the widget that should receive it.
///
/// Routing order:
///
/// * **Add-song picker**: while open, it receives every key.
/// * **Name input**: while focused, it receives every key except `Ctrl-C`.
/// * **Global keys**: quit, focus changes, refresh and dismissing the
///   notification.
/// * **Focused list**: the catalog or the playlist view.
///
/// # Errors
///
/// Returns an error if a request cannot be queued for the request worker.
fn process_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.event_tx.send(AppEvent::ExitApplication)?;
        return Ok(());
    }

    let event = Event::Key(key);

    if app.song_picker.is_open() {
        if let Some(action) = app.song_picker.process_event(&event, &app.state.songs) {
            handle_song_picker_action(app, action)?;
        }
        return Ok(());
    }

    if app.focus == Focus::NameInput {
        if let Some(action) = app.name_input.process_event(&event) {
            handle_name_input_action(app, action)?;
        }
        return Ok(());
    }

    if process_global_key_event(app, key)? {
        return Ok(());
    }

    match app.focus {
        Focus::Songs => app.song_list.process_event(&event, app.state.songs.len()),
        Focus::Playlists => {
            if let Some(action) = app
                .playlist_view
                .process_event(&event, &app.state.playlists)
            {
                handle_playlist_action(app, action)?;
            }
        }
        Focus::NameInput => {}
    }

    Ok(())
}

/// Handles keys that mean the same thing whichever list has focus, returning
/// whether the key was consumed.
fn process_global_key_event(app: &mut App, key: KeyEvent) -> Result<bool> {
    match key.code {
        KeyCode::Char('q') => app.event_tx.send(AppEvent::ExitApplication)?,

        KeyCode::Tab | KeyCode::BackTab => {
            app.focus = match app.focus {
                Focus::Songs => Focus::Playlists,
                _ => Focus::Songs,
            };
        }

        KeyCode::Char('n') => {
            app.focus = Focus::NameInput;
            app.name_input.activate();
        }

        KeyCode::Char('r') => handle_refresh(app)?,

        // Inside a playlist's songs, Esc goes back first.
        KeyCode::Esc if app.state.notification.is_some() && !in_playlist_songs(app) => {
            app.state.dismiss_notification();
        }

        _ => return Ok(false),
    }

    Ok(true)
}

fn in_playlist_songs(app: &App) -> bool {
    app.focus == Focus::Playlists && app.playlist_view.pane == PlaylistPane::Songs
}

#[cfg(test)]
mod tests {
    use std::sync::mpsc::{self, Receiver};

    use super::*;
    use crate::{
        config::AppConfig,
        model::{LoadStatus, NotificationLevel},
        tasks::AppTask,
    };

    fn app() -> (App, Receiver<AppTask>) {
        let (task_tx, task_rx) = mpsc::channel();
        (App::new(AppConfig::default(), task_tx), task_rx)
    }

    fn press(app: &mut App, code: KeyCode) {
        handle_event(app, AppEvent::Key(KeyEvent::new(code, KeyModifiers::NONE))).unwrap();
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn song(id: i64, title: &str, artist: &str) -> Song {
        Song {
            id,
            title: title.to_string(),
            artist: artist.to_string(),
        }
    }

    fn playlist(id: i64, name: &str, songs: Vec<Song>) -> Playlist {
        Playlist {
            id,
            name: name.to_string(),
            songs,
        }
    }

    fn loaded(app: &mut App, songs: Vec<Song>, playlists: Vec<Playlist>) {
        handle_event(app, AppEvent::LibraryLoaded { songs, playlists }).unwrap();
    }

    #[test]
    fn refresh_marks_loading_and_fetches() {
        let (mut app, task_rx) = app();

        press(&mut app, KeyCode::Char('r'));

        assert_eq!(app.state.load_status, LoadStatus::Loading);
        assert_eq!(task_rx.try_recv().unwrap(), AppTask::FetchLibrary);
    }

    #[test]
    fn blank_name_sends_nothing() {
        let (mut app, task_rx) = app();
        loaded(&mut app, vec![song(1, "A", "X")], vec![]);

        press(&mut app, KeyCode::Char('n'));
        type_text(&mut app, "   ");
        press(&mut app, KeyCode::Enter);

        assert!(task_rx.try_recv().is_err());
        assert!(app.state.playlists.is_empty());
        assert_eq!(app.state.pending_name, "   ");
    }

    #[test]
    fn create_add_remove_round() {
        let (mut app, task_rx) = app();
        loaded(&mut app, vec![song(1, "A", "X")], vec![]);

        press(&mut app, KeyCode::Char('n'));
        type_text(&mut app, "Mix");
        assert_eq!(app.state.pending_name, "Mix");
        press(&mut app, KeyCode::Enter);
        assert_eq!(
            task_rx.try_recv().unwrap(),
            AppTask::CreatePlaylist("Mix".to_string())
        );
        // Nothing changes until the backend answers.
        assert!(app.state.playlists.is_empty());
        assert_eq!(app.state.pending_name, "Mix");

        handle_event(&mut app, AppEvent::PlaylistCreated(playlist(2, "Mix", vec![]))).unwrap();
        assert_eq!(app.state.playlists, vec![playlist(2, "Mix", vec![])]);
        assert!(app.state.pending_name.is_empty());
        assert_eq!(app.name_input.value(), "");

        press(&mut app, KeyCode::Esc);
        assert_eq!(app.focus, Focus::Playlists);
        press(&mut app, KeyCode::Char('a'));
        assert!(app.song_picker.is_open());
        press(&mut app, KeyCode::Enter);
        assert_eq!(
            task_rx.try_recv().unwrap(),
            AppTask::AddSong {
                playlist_id: 2,
                song_id: 1
            }
        );

        handle_event(
            &mut app,
            AppEvent::PlaylistUpdated(playlist(2, "Mix", vec![song(1, "A", "X")])),
        )
        .unwrap();
        assert_eq!(
            app.state.playlists,
            vec![playlist(2, "Mix", vec![song(1, "A", "X")])]
        );

        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Char('d'));
        assert_eq!(
            task_rx.try_recv().unwrap(),
            AppTask::RemoveSong {
                playlist_id: 2,
                song_id: 1
            }
        );

        handle_event(&mut app, AppEvent::PlaylistUpdated(playlist(2, "Mix", vec![]))).unwrap();
        assert_eq!(app.state.playlists, vec![playlist(2, "Mix", vec![])]);
    }

    #[test]
    fn failed_request_leaves_state_and_notifies() {
        let (mut app, _task_rx) = app();
        loaded(&mut app, vec![], vec![playlist(2, "Mix", vec![])]);

        handle_event(
            &mut app,
            AppEvent::RequestFailed {
                action: "create playlist \"Road\"".to_string(),
                message: "Server error (500): boom".to_string(),
            },
        )
        .unwrap();

        assert_eq!(app.state.playlists, vec![playlist(2, "Mix", vec![])]);
        let notification = app.state.notification.clone().unwrap();
        assert_eq!(notification.level, NotificationLevel::Error);
        assert!(notification.message.contains("create playlist"));

        press(&mut app, KeyCode::Esc);
        assert!(app.state.notification.is_none());
    }

    #[test]
    fn update_for_unknown_playlist_is_dropped() {
        let (mut app, _task_rx) = app();
        loaded(&mut app, vec![], vec![playlist(2, "Mix", vec![])]);

        handle_event(&mut app, AppEvent::PlaylistUpdated(playlist(3, "Other", vec![]))).unwrap();

        assert_eq!(app.state.playlists, vec![playlist(2, "Mix", vec![])]);
    }

    #[test]
    fn picker_closes_when_its_playlist_disappears() {
        let (mut app, _task_rx) = app();
        loaded(&mut app, vec![song(1, "A", "X")], vec![playlist(2, "Mix", vec![])]);
        app.focus = Focus::Playlists;
        press(&mut app, KeyCode::Char('a'));
        assert!(app.song_picker.is_open());

        loaded(&mut app, vec![song(1, "A", "X")], vec![]);

        assert!(!app.song_picker.is_open());
    }

    #[test]
    fn picker_selection_follows_a_shrinking_catalog() {
        let (mut app, task_rx) = app();
        let songs = vec![song(1, "A", "X"), song(2, "B", "Y"), song(3, "C", "Z")];
        loaded(&mut app, songs, vec![playlist(2, "Mix", vec![])]);
        app.focus = Focus::Playlists;
        press(&mut app, KeyCode::Char('a'));
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Down);
        assert_eq!(app.song_picker.list_state.selected(), Some(2));

        loaded(&mut app, vec![song(1, "A", "X")], vec![playlist(2, "Mix", vec![])]);
        assert_eq!(app.song_picker.list_state.selected(), Some(0));

        press(&mut app, KeyCode::Enter);
        assert_eq!(
            task_rx.try_recv().unwrap(),
            AppTask::AddSong {
                playlist_id: 2,
                song_id: 1
            }
        );
        assert!(!app.song_picker.is_open());
    }

    #[test]
    fn escape_leaves_playlist_songs_before_dismissing() {
        let (mut app, _task_rx) = app();
        loaded(
            &mut app,
            vec![song(1, "A", "X")],
            vec![playlist(2, "Mix", vec![song(1, "A", "X")])],
        );
        app.focus = Focus::Playlists;
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.playlist_view.pane, PlaylistPane::Songs);
        app.state.notify_info("Created playlist \"Mix\"".to_string());

        press(&mut app, KeyCode::Esc);
        assert_eq!(app.playlist_view.pane, PlaylistPane::Playlists);
        assert!(app.state.notification.is_some());

        press(&mut app, KeyCode::Esc);
        assert!(app.state.notification.is_none());
    }

    #[test]
    fn exit_event_leaves_state_alone() {
        let (mut app, _task_rx) = app();
        loaded(&mut app, vec![song(1, "A", "X")], vec![]);

        handle_event(&mut app, AppEvent::ExitApplication).unwrap();

        assert_eq!(app.state.songs, vec![song(1, "A", "X")]);
        assert_eq!(app.state.load_status, LoadStatus::Ready);
    }

    #[test]
    fn quit_requests_exit() {
        let (mut app, _task_rx) = app();

        press(&mut app, KeyCode::Char('q'));

        assert!(matches!(
            app.event_rx.try_recv(),
            Ok(AppEvent::ExitApplication)
        ));
    }
}
