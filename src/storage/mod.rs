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

//! Persistence boundary.
//!
//! Everything the application keeps between sessions goes through a small
//! string-keyed, string-valued store. The task snapshot and the theme are
//! stored under separate keys so that either can be written without touching
//! the other.
//!
//! # Implementations
//!
//! * [`SqliteStore`] - the on-disk store used by the application.
//! * [`MemoryStore`] - a `HashMap` backed store, used by tests.

mod sqlite;

use std::collections::HashMap;

use thiserror::Error;

pub(crate) use sqlite::SqliteStore;

/// Key holding the JSON task snapshot.
pub(crate) const STATE_KEY: &str = "todo-pro-v1";

/// Key holding the current theme name.
pub(crate) const THEME_KEY: &str = "todo-theme";

#[derive(Debug, Error)]
pub(crate) enum StoreError {
    #[error("database error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to serialize snapshot: {0}")]
    Serialize(#[from] serde_json::Error),
}

pub(crate) trait KeyValueStore {
    /// Returns the value stored under `key`, or `None` if nothing was ever
    /// written there.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Replaces the value stored under `key`.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

#[derive(Debug, Default)]
pub(crate) struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    pub(crate) fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
