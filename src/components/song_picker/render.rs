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

//! Render the add-song picker as a centred popup.

use ratatui::{
    Frame,
    layout::{Constraint, Flex, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem},
};

use crate::{
    components::SongPicker,
    model::ViewState,
    theme::Theme,
    util::format::song_label,
};

const PRESENT_MARKER: &str = "• ";
const ABSENT_MARKER: &str = "  ";

impl SongPicker {
    pub(crate) fn draw(&mut self, f: &mut Frame, area: Rect, state: &ViewState, theme: &Theme) {
        let Some(playlist) = self.playlist_id().and_then(|id| state.playlist(id)) else {
            return;
        };

        let popup = centred(area, 60, 70);

        let items: Vec<ListItem> = state
            .songs
            .iter()
            .map(|song| {
                let marker = if playlist.contains_song(song.id) {
                    PRESENT_MARKER
                } else {
                    ABSENT_MARKER
                };
                ListItem::new(Line::from(vec![
                    Span::styled(marker, Style::default().fg(theme.accent_colour)),
                    Span::raw(song_label(song)),
                ]))
            })
            .collect();

        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(format!(" Add Song to {} ", playlist.name))
                    .title_bottom(" Enter add · Esc cancel · • already in playlist ")
                    .border_style(
                        Style::default()
                            .fg(theme.focus_border_colour)
                            .add_modifier(Modifier::BOLD),
                    )
                    .style(Style::default().bg(theme.background_colour)),
            )
            .style(Style::default().fg(theme.text_fg))
            .highlight_style(
                Style::default()
                    .bg(theme.highlight_bg)
                    .fg(theme.highlight_fg),
            )
            .highlight_symbol(">> ");

        f.render_widget(Clear, popup);
        f.render_stateful_widget(list, popup, &mut self.list_state);
    }
}

fn centred(area: Rect, percent_x: u16, percent_y: u16) -> Rect {
    let [area] = Layout::vertical([Constraint::Percentage(percent_y)])
        .flex(Flex::Center)
        .areas(area);
    let [area] = Layout::horizontal([Constraint::Percentage(percent_x)])
        .flex(Flex::Center)
        .areas(area);
    area
}
