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

//! # Playlist TUI.
//!
//! A terminal-based playlist manager for a remote playlist service.
//!
//! This application coordinates a TUI frontend built with `ratatui` and a
//! background request worker that talks to the service over HTTP.
//!
//! It uses an event-driven architecture where:
//!
//! * The **Main Thread** manages the terminal lifecycle, owns the view state
//!   and renders the UI.
//! * A **Request Worker** performs HTTP requests one at a time via
//!   asynchronous task processing.
//! * **Event Loops** capture user input and system ticks to drive the UI
//!   state.
//!
//! ## Architecture
//!
//! The application follows a strict setup-run-teardown pattern to ensure the
//! terminal state is preserved even in the event of a crash. Communication
//! between the UI and background workers is handled via `std::sync::mpsc`
//! channels. The view state only ever changes in response to what the
//! service returns.

mod api;
mod components;
mod config;
mod dispatcher;
mod events;
mod model;
mod render;
mod tasks;
mod theme;
mod util;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::{error, info};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::{
    io::{self},
    sync::mpsc::{self, Receiver, Sender},
    thread,
    time::Duration,
};

use crate::{
    api::HttpPlaylistApi,
    components::{NameInput, PlaylistView, SongList, SongPicker},
    config::AppConfig,
    dispatcher::Dispatcher,
    events::{AppEvent, process_events},
    model::ViewState,
    tasks::AppTask,
    theme::Theme,
};

const TICK_INTERVAL: Duration = Duration::from_millis(250);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Focus {
    Songs,
    Playlists,
    NameInput,
}

/// Application state.
struct App {
    pub config: AppConfig,

    pub theme: Theme,
    pub focus: Focus,

    pub event_tx: Sender<AppEvent>,
    pub event_rx: Receiver<AppEvent>,

    pub dispatcher: Dispatcher,

    pub state: ViewState,

    pub name_input: NameInput,
    pub song_list: SongList,
    pub playlist_view: PlaylistView,
    pub song_picker: SongPicker,
}

impl App {
    /// Create a new instance of application state.
    pub fn new(config: AppConfig, task_tx: Sender<AppTask>) -> Self {
        let (event_tx, event_rx) = mpsc::channel();

        Self {
            config,
            theme: Theme::default(),
            focus: Focus::Playlists,
            event_tx,
            event_rx,
            dispatcher: Dispatcher::new(task_tx),
            state: ViewState::new(),
            name_input: NameInput::new(),
            song_list: SongList::new(),
            playlist_view: PlaylistView::new(),
            song_picker: SongPicker::new(),
        }
    }
}

/// The entry point of the application.
///
/// Sets up logging and the service client, initializes the application state,
/// manages the terminal lifecycle, and returns an error if any part of the
/// execution fails.
fn main() -> Result<()> {
    let config = config::load_config();

    if let Err(e) = util::logging::init_logging(&config) {
        eprintln!("Logging disabled: {e:#}");
    }

    std::panic::set_hook(Box::new(|panic_info| {
        let current_thread = thread::current();
        let thread_name = current_thread.name().unwrap_or("unnamed");
        error!("panic in thread '{}': {}", thread_name, panic_info);
        disable_raw_mode().ok();
        execute!(io::stdout(), LeaveAlternateScreen).ok();
    }));

    info!("Using playlist service at {}", config.api_base_url);

    let api = HttpPlaylistApi::new(&config).context("Invalid playlist service configuration")?;

    let (task_tx, task_rx) = mpsc::channel();

    let mut app = App::new(config, task_tx);

    let mut terminal = setup_terminal()?;
    let res = run(&mut terminal, &mut app, api, task_rx);
    restore_terminal(&mut terminal);

    res.context("Application error occurred")
}

/// Prepares the terminal for the TUI application.
///
/// This function performs the following side effects:
/// * Enables raw mode to capture all keyboard input.
/// * Switches the terminal to the alternate screen buffer.
///
/// # Errors
///
/// Returns an error if raw mode cannot be enabled or if the alternate screen
/// cannot be entered.
fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;

    Ok(terminal)
}

/// Restores the terminal to its original state.
///
/// This reverses the changes made by [`setup_terminal`], disabling raw mode
/// and leaving the alternate screen. It also ensures the cursor is made
/// visible again.
///
/// This function is "best-effort" and does not return a result, as it is
/// called during cleanup.
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) {
    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    terminal.show_cursor().ok();
}

/// Starts the application's background workers and enters the main event loop.
///
/// This function spawns several long-running background threads:
/// * A request worker to process [`AppTask`]s against the playlist service.
/// * An input thread to poll for system keyboard events.
/// * A tick thread to trigger periodic UI refreshes.
///
/// It then requests the initial library fetch and hands control to
/// [`process_events`] to manage the UI and state updates.
///
/// # Errors
///
/// Returns an error if the event processing loop encounters an unrecoverable
/// application error.
fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    api: HttpPlaylistApi,
    task_rx: Receiver<AppTask>,
) -> Result<()> {
    // Spawn the background worker that owns the HTTP client.
    let task_event_tx = app.event_tx.clone();
    tasks::spawn_task_worker(Box::new(api), task_rx, task_event_tx);

    // Spawn a thread to translate raw terminal events to application events.
    let tx_keys = app.event_tx.clone();
    thread::spawn(move || {
        loop {
            let sent = match event::read() {
                Ok(event::Event::Key(key)) if key.kind == KeyEventKind::Press => {
                    tx_keys.send(AppEvent::Key(key))
                }
                Ok(event::Event::Resize(_, _)) => tx_keys.send(AppEvent::Resize),
                _ => Ok(()),
            };
            if sent.is_err() {
                break;
            }
        }
    });

    // Spawn a thread to send a periodic tick application event, this is
    // effectively the minimum "frame rate" for rendering the TUI application.
    let tx_tick = app.event_tx.clone();
    thread::spawn(move || {
        while tx_tick.send(AppEvent::Tick).is_ok() {
            thread::sleep(TICK_INTERVAL);
        }
    });

    // Initial trigger to populate the screen from the playlist service
    app.state.begin_load();
    app.dispatcher.fetch_library()?;

    // Application event loop, process events until the user quits
    process_events(terminal, app)
}
