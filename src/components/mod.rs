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

//! Interactive widgets that make up the playlist screen.
//!
//! Each component keeps only its own selection and input state; the data it
//! shows is borrowed from [`ViewState`](crate::model::ViewState) at render
//! time. Components translate key events into small action values, the event
//! handlers decide what those actions do.

mod name_input;
mod playlist;
mod song_list;
mod song_picker;

pub(crate) use name_input::{NameInput, NameInputAction};
pub(crate) use playlist::{PlaylistAction, PlaylistPane, PlaylistView};
pub(crate) use song_list::SongList;
pub(crate) use song_picker::{SongPicker, SongPickerAction};

use ratatui::widgets::ListState;

/// Moves the selection down one row, wrapping to the top.
pub(crate) fn select_next(state: &mut ListState, len: usize) {
    if len == 0 {
        return;
    }
    let i = match state.selected() {
        Some(i) => if i >= len - 1 { 0 } else { i + 1 },
        None => 0,
    };
    state.select(Some(i));
}

/// Moves the selection up one row, wrapping to the bottom.
pub(crate) fn select_previous(state: &mut ListState, len: usize) {
    if len == 0 {
        return;
    }
    let i = match state.selected() {
        Some(i) => if i == 0 { len - 1 } else { i - 1 },
        None => 0,
    };
    state.select(Some(i));
}

/// Keeps the selection inside a list that may have shrunk or grown.
pub(crate) fn clamp_selection(state: &mut ListState, len: usize) {
    let selected = match (state.selected(), len) {
        (_, 0) => None,
        (Some(i), len) => Some(i.min(len - 1)),
        (None, _) => Some(0),
    };
    state.select(selected);
}
