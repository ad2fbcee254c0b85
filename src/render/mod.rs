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

//! User interface rendering logic.
//!
//! This module handles the translation of the [`App`] state into visual
//! widgets using the `ratatui` framework. It is responsible for layout
//! management and terminal frame composition; each component draws itself.
//!
//! # Rendering Pipeline
//!
//! The primary entry point is the [`draw`] function, which is called after
//! every processed event to provide a reactive user interface.

mod status;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    style::Style,
    widgets::Block,
};

use crate::{App, Focus, render::status::draw_status};

/// Renders the playlist screen to the terminal frame.
///
/// Layout, top to bottom: the new playlist input, the catalog beside the
/// playlists, and a one line status bar. The add-song picker is drawn over
/// everything when it is open.
pub(crate) fn draw(f: &mut Frame, app: &mut App) {
    let area = f.area();

    f.render_widget(
        Block::default().style(Style::default().bg(app.theme.background_colour)),
        area,
    );

    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(outer[1]);

    let picker_open = app.song_picker.is_open();

    app.name_input.draw(f, outer[0], &app.theme);

    app.song_list.draw(
        f,
        body[0],
        &app.state.songs,
        app.focus == Focus::Songs && !picker_open,
        &app.theme,
    );

    app.playlist_view.draw(
        f,
        body[1],
        &app.state.playlists,
        app.focus == Focus::Playlists && !picker_open,
        &app.theme,
    );

    if picker_open {
        app.song_picker.draw(f, outer[1], &app.state, &app.theme);
    }

    draw_status(f, outer[2], app);
}
