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

//! UI rendering logic for the playlist view.
//!
//! The upper list shows every playlist, the lower one the songs of the
//! selected playlist.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, List, ListItem, ListState},
};

use crate::{
    components::{PlaylistPane, PlaylistView},
    model::Playlist,
    theme::Theme,
    util::format::{playlist_label, song_label},
};

impl PlaylistView {
    pub(crate) fn draw(
        &mut self,
        f: &mut Frame,
        area: Rect,
        playlists: &[Playlist],
        is_active: bool,
        theme: &Theme,
    ) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(40), Constraint::Min(0)])
            .split(area);

        let playlist_items: Vec<ListItem> = playlists
            .iter()
            .map(|p| ListItem::new(playlist_label(p)))
            .collect();

        render_list(
            f,
            chunks[0],
            format!(" Playlists ({}) ", playlists.len()),
            playlist_items,
            &mut self.playlists_state,
            is_active && self.pane == PlaylistPane::Playlists,
            theme,
        );

        let (title, song_items) = match self.selected_playlist(playlists) {
            Some(playlist) if playlist.songs.is_empty() => (
                format!(" {} ", playlist.name),
                vec![ListItem::new("No songs yet, press a to add one")
                    .style(Style::default().fg(theme.muted_fg))],
            ),
            Some(playlist) => (
                format!(" {} ", playlist.name),
                playlist
                    .songs
                    .iter()
                    .map(|s| ListItem::new(song_label(s)))
                    .collect(),
            ),
            None => (" Songs ".to_string(), vec![]),
        };

        render_list(
            f,
            chunks[1],
            title,
            song_items,
            &mut self.songs_state,
            is_active && self.pane == PlaylistPane::Songs,
            theme,
        );
    }
}

fn render_list(
    f: &mut Frame,
    area: Rect,
    title: String,
    items: Vec<ListItem>,
    state: &mut ListState,
    is_active: bool,
    theme: &Theme,
) {
    let border_style = if is_active {
        Style::default()
            .fg(theme.focus_border_colour)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.border_colour)
    };

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(title)
                .border_style(border_style),
        )
        .style(Style::default().fg(theme.text_fg))
        .highlight_style(
            Style::default()
                .bg(theme.highlight_bg)
                .fg(theme.highlight_fg),
        )
        .highlight_symbol(if is_active { ">> " } else { "   " });

    f.render_stateful_widget(list, area, state);
}
