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

//! Navigation for the catalog list.

use crossterm::event::{Event, KeyCode};

use crate::components::{SongList, select_next, select_previous};

impl SongList {
    /// Moves the selection; the catalog has no actions of its own.
    pub(crate) fn process_event(&mut self, event: &Event, len: usize) {
        if let Event::Key(key_event) = event {
            match key_event.code {
                KeyCode::Char('j') | KeyCode::Down => select_next(&mut self.list_state, len),
                KeyCode::Char('k') | KeyCode::Up => select_previous(&mut self.list_state, len),
                KeyCode::Char('g') | KeyCode::Home => self.list_state.select_first(),
                KeyCode::Char('G') | KeyCode::End => {
                    self.list_state.select((len > 0).then(|| len - 1))
                }
                _ => {}
            }
        }
    }
}
