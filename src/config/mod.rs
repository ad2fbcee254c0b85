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

//! Application configuration.
//!
//! This module manages the application configuration file, which tells the
//! client where the playlist service lives and how long to wait for it.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

pub(crate) const CONFIG_NAME: &str = "playlist-tui";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub version: u32,
    pub api_base_url: String,
    pub connect_timeout_secs: u64,
    pub request_timeout_secs: u64,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: 1,
            api_base_url: "http://localhost:3000".to_string(),
            connect_timeout_secs: 5,
            request_timeout_secs: 15,
            log_level: "info".to_string(),
        }
    }
}

pub fn load_config() -> AppConfig {
    confy::load(CONFIG_NAME, None).unwrap_or_default()
}

/// Directory holding the configuration file, also used for the log file.
pub fn config_dir() -> Result<PathBuf, confy::ConfyError> {
    let path = confy::get_configuration_file_path(CONFIG_NAME, None)?;
    Ok(path.parent().map(PathBuf::from).unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config: AppConfig = from_json(r#"{"api_base_url": "https://music.example.com"}"#);

        assert_eq!(config.api_base_url, "https://music.example.com");
        assert_eq!(config.request_timeout_secs, AppConfig::default().request_timeout_secs);
        assert_eq!(config.log_level, "info");
    }

    fn from_json(json: &str) -> AppConfig {
        serde_json::from_str(json).unwrap()
    }
}
