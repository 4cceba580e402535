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
//! This module manages the application configuration file. The task data
//! itself is not configuration and lives in the database named here.

use std::path::{Path, PathBuf};

use confy::ConfyError;
use serde::{Deserialize, Serialize};

const CONFIG_NAME: &str = "todopro";

const DATABASE_FILE: &str = "todopro.db";
const LOG_FILE: &str = "todopro.log";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct AppConfig {
    pub version: u32,
    /// Location of the task database. Defaults to the configuration
    /// directory.
    pub database_file: Option<PathBuf>,
    /// Used when `RUST_LOG` is not set.
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: 1,
            database_file: None,
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    pub fn database_path(&self) -> PathBuf {
        self.database_file
            .clone()
            .unwrap_or_else(|| data_dir().join(DATABASE_FILE))
    }

    /// The log file sits next to the database.
    pub fn log_path(&self) -> PathBuf {
        self.database_path()
            .parent()
            .map(|dir| dir.join(LOG_FILE))
            .unwrap_or_else(|| PathBuf::from(LOG_FILE))
    }
}

fn data_dir() -> PathBuf {
    confy::get_configuration_file_path(CONFIG_NAME, None)
        .ok()
        .and_then(|path| path.parent().map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Loads the configuration file, creating it with defaults if it does not
/// exist.
///
/// An unreadable file falls back to the defaults. The error is handed back
/// so it can be logged once logging is running.
pub fn load_config() -> (AppConfig, Option<ConfyError>) {
    match confy::get_configuration_file_path(CONFIG_NAME, None) {
        Ok(path) => load_config_from(&path),
        Err(e) => (AppConfig::default(), Some(e)),
    }
}

pub fn load_config_from(path: &Path) -> (AppConfig, Option<ConfyError>) {
    match confy::load_path(path) {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    }
}
