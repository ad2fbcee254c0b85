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

//! Key handling for the add-song picker.

use crossterm::event::{Event, KeyCode};

use crate::{
    components::{SongPicker, SongPickerAction, select_next, select_previous},
    model::Song,
};

impl SongPicker {
    pub(crate) fn process_event(&mut self, event: &Event, songs: &[Song]) -> Option<SongPickerAction> {
        let playlist_id = self.playlist_id()?;

        let Event::Key(key_event) = event else {
            return None;
        };

        match key_event.code {
            KeyCode::Char('j') | KeyCode::Down => select_next(&mut self.list_state, songs.len()),
            KeyCode::Char('k') | KeyCode::Up => select_previous(&mut self.list_state, songs.len()),

            KeyCode::Esc | KeyCode::Char('q') => {
                self.close();
                return Some(SongPickerAction::Cancel);
            }

            KeyCode::Enter => {
                let song_id = songs.get(self.list_state.selected()?)?.id;
                self.close();
                return Some(SongPickerAction::AddSong {
                    playlist_id,
                    song_id,
                });
            }

            _ => {}
        }

        None
    }
}
