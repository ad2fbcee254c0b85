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

//! New playlist name entry.
//!
//! This module wraps a text input component that edits the pending playlist
//! name and reports when the user submits it or leaves the field.

mod event;
mod render;

use tui_input::Input;

#[derive(Debug, PartialEq, Eq)]
pub(crate) enum NameInputAction {
    Changed(String),
    Submit,
    Leave,
}

#[derive(Default)]
pub(crate) struct NameInput {
    active: bool,
    pub(crate) input: Input,
}

impl NameInput {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn active(&self) -> bool {
        self.active
    }

    pub(crate) fn activate(&mut self) {
        self.active = true;
    }

    pub(crate) fn value(&self) -> &str {
        self.input.value()
    }

    /// Clears the text after the playlist it named has been created.
    pub(crate) fn reset(&mut self) {
        self.input.reset();
    }
}
