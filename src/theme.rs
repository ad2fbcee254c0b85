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

//! Visual styling and colour configuration for the TUI.
//!
//! This module defines the application's colour palette.

use ratatui::style::Color;

#[derive(Clone, Copy)]
pub(crate) struct Theme {
    pub(crate) background_colour: Color,
    pub(crate) accent_colour: Color,
    pub(crate) border_colour: Color,
    pub(crate) focus_border_colour: Color,
    pub(crate) status_bar_colour: Color,

    pub(crate) text_fg: Color,
    pub(crate) muted_fg: Color,
    pub(crate) highlight_bg: Color,
    pub(crate) highlight_fg: Color,

    pub(crate) info_fg: Color,
    pub(crate) error_fg: Color,
}

impl Default for Theme {
    // Returns the standard application theme.
    fn default() -> Self {
        Self::default_theme()
    }
}

impl Theme {
    // Constructs the default theme.
    pub(crate) const fn default_theme() -> Self {
        Self {
            background_colour: Color::Rgb(40, 20, 50),
            accent_colour: Color::Rgb(250, 189, 47),
            border_colour: Color::Rgb(102, 102, 102),
            focus_border_colour: Color::Rgb(250, 189, 47),
            status_bar_colour: Color::Rgb(50, 30, 60),

            text_fg: Color::Rgb(255, 255, 255),
            muted_fg: Color::Rgb(162, 161, 166),
            highlight_bg: Color::Rgb(179, 157, 219),
            highlight_fg: Color::Rgb(40, 20, 50),

            info_fg: Color::Rgb(130, 200, 140),
            error_fg: Color::Rgb(240, 100, 100),
        }
    }
}
