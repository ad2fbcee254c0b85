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

//! Render the catalog list.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders, List, ListItem},
};

use crate::{components::SongList, model::Song, theme::Theme, util::format::song_label};

impl SongList {
    pub(crate) fn draw(
        &mut self,
        f: &mut Frame,
        area: Rect,
        songs: &[Song],
        is_active: bool,
        theme: &Theme,
    ) {
        let items: Vec<ListItem> = songs
            .iter()
            .map(|song| ListItem::new(song_label(song)))
            .collect();

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
                    .title(format!(" All Songs ({}) ", songs.len()))
                    .border_style(border_style),
            )
            .style(Style::default().fg(theme.text_fg))
            .highlight_style(
                Style::default()
                    .bg(theme.highlight_bg)
                    .fg(theme.highlight_fg),
            )
            .highlight_symbol(if is_active { ">> " } else { "   " });

        f.render_stateful_widget(list, area, &mut self.list_state);
    }
}
