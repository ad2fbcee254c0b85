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

//! Read-only view of the whole song catalog.

mod event;
mod render;

use ratatui::widgets::ListState;

#[derive(Default)]
pub(crate) struct SongList {
    pub(crate) list_state: ListState,
}

impl SongList {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn sync(&mut self, len: usize) {
        crate::components::clamp_selection(&mut self.list_state, len);
    }
}
