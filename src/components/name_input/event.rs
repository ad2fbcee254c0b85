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

//! Key handling for the name input.

use crossterm::event::{Event, KeyCode};
use tui_input::backend::crossterm::EventHandler;

use crate::components::{NameInput, NameInputAction};

impl NameInput {
    pub(crate) fn process_event(&mut self, event: &Event) -> Option<NameInputAction> {
        if !self.active {
            return None;
        }

        let Event::Key(key_event) = event else {
            return None;
        };

        match key_event.code {
            KeyCode::Esc => {
                self.active = false;
                Some(NameInputAction::Leave)
            }

            KeyCode::Enter => Some(NameInputAction::Submit),

            _ => {
                // Delegate all other keys to the managed input component.
                let changed = self.input.handle_event(event)?;
                changed
                    .value
                    .then(|| NameInputAction::Changed(self.input.value().to_string()))
            }
        }
    }
}
