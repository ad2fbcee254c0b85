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

//! Logger set-up.
//!
//! The terminal belongs to the TUI, so log records go to a file next to the
//! configuration file instead of stderr.

use std::fs::{self, OpenOptions};

use anyhow::{Context, Result};
use env_logger::{Builder, Env, Target, WriteStyle};

use crate::config::{self, AppConfig};

const LOG_FILE: &str = "playlist-tui.log";

/// Initialises the global logger.
///
/// `RUST_LOG` takes precedence over the configured `log_level`.
///
/// # Errors
///
/// Returns an error if the log file cannot be opened or a logger is already
/// installed.
pub(crate) fn init_logging(config: &AppConfig) -> Result<()> {
    let dir = config::config_dir().context("Failed to locate configuration directory")?;
    fs::create_dir_all(&dir).context("Failed to create configuration directory")?;

    let path = dir.join(LOG_FILE);
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    Builder::from_env(Env::default().default_filter_or(config.log_level.as_str()))
        .target(Target::Pipe(Box::new(file)))
        .write_style(WriteStyle::Never)
        .try_init()
        .context("Failed to initialise logger")?;

    Ok(())
}
