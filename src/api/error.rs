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

//! Error types for the playlist service client.

use thiserror::Error;

/// Errors that can occur when talking to the playlist service.
#[derive(Error, Debug)]
pub(crate) enum ApiError {
    /// The configured base URL cannot be used
    #[error("Invalid server URL: {0}")]
    InvalidUrl(String),

    /// Connection, DNS or timeout failure
    #[error("Server unreachable: {0}")]
    Unreachable(String),

    /// Server returned a non-success status
    #[error("Server error ({status}): {message}")]
    Server { status: u16, message: String },

    /// Response body was not what the endpoint promises
    #[error("Failed to parse response: {0}")]
    Parse(String),
}

pub(crate) type Result<T> = std::result::Result<T, ApiError>;

impl From<ureq::Error> for ApiError {
    fn from(err: ureq::Error) -> Self {
        match err {
            ureq::Error::Status(status, response) => {
                let message = response.into_string().unwrap_or_default();
                ApiError::Server { status, message }
            }
            ureq::Error::Transport(transport) => ApiError::Unreachable(transport.to_string()),
        }
    }
}
