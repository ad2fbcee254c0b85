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

use crate::model::{Playlist, Song};

/// Formats a song as `Title – Artist` for list display.
pub(crate) fn song_label(song: &Song) -> String {
    format!("{} – {}", song.title, song.artist)
}

/// Formats a playlist as its name followed by its song count.
pub(crate) fn playlist_label(playlist: &Playlist) -> String {
    let count = playlist.songs.len();
    let noun = if count == 1 { "song" } else { "songs" };
    format!("{} ({} {})", playlist.name, count, noun)
}
