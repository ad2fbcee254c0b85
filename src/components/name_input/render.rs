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

//! Render the new playlist input.

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::Span,
    widgets::{Block, Borders, Padding, Paragraph},
};

use crate::{components::NameInput, theme::Theme};

const PLACEHOLDER: &str = "New Playlist Name";

impl NameInput {
    pub(crate) fn draw(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let border_colour = if self.active() {
            theme.focus_border_colour
        } else {
            theme.border_colour
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_colour))
            .title(" Create Playlist (n) ")
            .padding(Padding::horizontal(1));

        let inner = block.inner(area);

        // Keep the cursor in view when the name is wider than the box.
        let scroll = self.input.visual_scroll(inner.width.saturating_sub(1) as usize);

        let text = if self.value().is_empty() && !self.active() {
            Span::styled(PLACEHOLDER, Style::default().fg(theme.muted_fg))
        } else {
            Span::styled(self.value(), Style::default().fg(theme.text_fg))
        };

        let paragraph = Paragraph::new(text)
            .scroll((0, scroll as u16))
            .block(block);
        f.render_widget(paragraph, area);

        if self.active() {
            let cursor_x = inner.x + (self.input.visual_cursor().max(scroll) - scroll) as u16;
            f.set_cursor_position((cursor_x, inner.y));
        }
    }
}
