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

//! Render the status bar.
//!
//! The left side shows the current notification, or the load status when
//! there is none; the right side lists the keys that apply to the focused
//! widget.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::Span,
    widgets::Paragraph,
};

use crate::{
    App, Focus,
    components::PlaylistPane,
    model::{LoadStatus, NotificationLevel},
};

pub(crate) fn draw_status(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;

    f.render_widget(
        Paragraph::new("").style(Style::default().bg(theme.status_bar_colour)),
        area,
    );

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(hints(app).chars().count() as u16 + 1)])
        .horizontal_margin(1)
        .split(area);

    let status = match (&app.state.notification, &app.state.load_status) {
        (Some(notification), _) => {
            let fg = match notification.level {
                NotificationLevel::Info => theme.info_fg,
                NotificationLevel::Error => theme.error_fg,
            };
            Span::styled(
                format!("{} (Esc)", notification.message),
                Style::default().fg(fg).add_modifier(Modifier::BOLD),
            )
        }
        (None, LoadStatus::Idle) => Span::raw(""),
        (None, LoadStatus::Loading) => {
            Span::styled("Loading library…", Style::default().fg(theme.accent_colour))
        }
        (None, LoadStatus::Failed(message)) => Span::styled(
            format!("Load failed: {message} (r to retry)"),
            Style::default().fg(theme.error_fg),
        ),
        (None, LoadStatus::Ready) => Span::styled(
            format!(
                "{} songs · {} playlists · {}",
                app.state.songs.len(),
                app.state.playlists.len(),
                app.config.api_base_url
            ),
            Style::default().fg(theme.muted_fg),
        ),
    };

    f.render_widget(
        Paragraph::new(status).style(Style::default().bg(theme.status_bar_colour)),
        chunks[0],
    );

    f.render_widget(
        Paragraph::new(hints(app))
            .alignment(Alignment::Right)
            .style(
                Style::default()
                    .fg(theme.muted_fg)
                    .bg(theme.status_bar_colour),
            ),
        chunks[1],
    );
}

fn hints(app: &App) -> &'static str {
    if app.song_picker.is_open() {
        return "j/k move · Enter add · Esc cancel";
    }

    match app.focus {
        Focus::NameInput => "Enter create · Esc done",
        Focus::Songs => "Tab playlists · n new · r refresh · q quit",
        Focus::Playlists => match app.playlist_view.pane {
            PlaylistPane::Playlists => "Enter open · a add · Tab songs · n new · r refresh · q quit",
            PlaylistPane::Songs => "d remove · a add · h back · q quit",
        },
    }
}
