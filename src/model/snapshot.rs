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

//! Persisted form of the task state.
//!
//! The whole [`TaskList`] is written as a single JSON document:
//!
//! ```json
//! { "tasks": [...], "activeFilter": "all", "activeView": "week" }
//! ```
//!
//! Loading is deliberately forgiving. A document that does not parse leaves
//! the defaults in place, and each of the three fields is only adopted when
//! it has the expected shape, independently of the others.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, error, warn};

use crate::{
    model::{DateView, StatusFilter, Task, tasks::TaskList},
    storage::{KeyValueStore, STATE_KEY, StoreError},
};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Snapshot<'a> {
    tasks: &'a [Task],
    active_filter: StatusFilter,
    active_view: DateView,
}

impl TaskList {
    /// Builds the state from the persisted snapshot.
    ///
    /// Never fails: a missing key, an unreadable store or a malformed
    /// document all result in the default state (with a log entry for the
    /// latter two).
    pub(crate) fn load(store: &dyn KeyValueStore) -> Self {
        let mut list = TaskList::new();

        let raw = match store.get(STATE_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return list,
            Err(e) => {
                error!(error = %e, "failed to read task snapshot");
                return list;
            }
        };

        let document: Value = match serde_json::from_str(&raw) {
            Ok(document) => document,
            Err(e) => {
                error!(error = %e, "task snapshot is not valid JSON, using defaults");
                return list;
            }
        };

        list.apply_document(&document);
        debug!(tasks = list.tasks.len(), "loaded task snapshot");
        list
    }

    /// Writes the full state under [`STATE_KEY`] in one call.
    pub(crate) fn save(&self, store: &mut dyn KeyValueStore) -> Result<(), StoreError> {
        let json = self.to_json()?;
        store.set(STATE_KEY, &json)
    }

    pub(crate) fn to_json(&self) -> Result<String, serde_json::Error> {
        let snapshot = Snapshot {
            tasks: &self.tasks,
            active_filter: self.active_filter,
            active_view: self.active_view,
        };

        serde_json::to_string(&snapshot)
    }

    fn apply_document(&mut self, document: &Value) {
        if let Some(items) = document.get("tasks").and_then(Value::as_array) {
            self.tasks = items.iter().filter_map(parse_task).collect();
        }

        if let Some(value) = document.get("activeFilter").and_then(Value::as_str) {
            match value.parse() {
                Ok(filter) => self.active_filter = filter,
                Err(e) => warn!(%e, "ignoring stored filter"),
            }
        }

        if let Some(value) = document.get("activeView").and_then(Value::as_str) {
            match value.parse() {
                Ok(view) => self.active_view = view,
                Err(e) => warn!(%e, "ignoring stored view"),
            }
        }
    }
}

fn parse_task(item: &Value) -> Option<Task> {
    match Task::deserialize(item) {
        Ok(task) if !task.text.trim().is_empty() => Some(task),
        Ok(task) => {
            warn!(id = task.id, "skipping stored task with empty text");
            None
        }
        Err(e) => {
            warn!(error = %e, "skipping malformed stored task");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{MemoryStore, SqliteStore};

    const NOW: i64 = 1_760_000_000_000;

    fn store_with(raw: &str) -> MemoryStore {
        let mut store = MemoryStore::new();
        store.set(STATE_KEY, raw).unwrap();
        store
    }

    #[test]
    fn missing_snapshot_gives_defaults() {
        let store = MemoryStore::new();
        assert_eq!(TaskList::load(&store), TaskList::new());
    }

    #[test]
    fn invalid_json_gives_defaults() {
        let store = store_with("{not json");
        assert_eq!(TaskList::load(&store), TaskList::new());
    }

    #[test]
    fn round_trip_through_a_fresh_store_instance() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("todopro.db");

        let mut list = TaskList::new();
        let a = list.add_task_at("Buy milk", None, NOW).unwrap();
        list.add_task_at("Pay rent", Some("2026-11-01".into()), NOW);
        list.toggle_done(a);
        list.set_filter(StatusFilter::Todo);
        list.set_view(DateView::Week);

        {
            let mut store = SqliteStore::open(&path).unwrap();
            list.save(&mut store).unwrap();
        }

        let store = SqliteStore::open(&path).unwrap();
        assert_eq!(TaskList::load(&store), list);
    }

    #[test]
    fn save_writes_the_serialized_snapshot() {
        let mut list = TaskList::new();
        list.add_task_at("a", None, NOW);

        let mut store = MemoryStore::new();
        list.save(&mut store).unwrap();

        let stored = store.get(STATE_KEY).unwrap().unwrap();
        assert_eq!(stored, list.to_json().unwrap());
        assert!(stored.contains("\"text\":\"a\""));
    }

    #[test]
    fn snapshot_uses_stored_field_names() {
        let mut list = TaskList::new();
        list.add_task_at("a", Some("2026-10-18".into()), NOW);
        list.set_view(DateView::Today);

        let value: Value = serde_json::from_str(&list.to_json().unwrap()).unwrap();
        assert_eq!(value["activeFilter"], "all");
        assert_eq!(value["activeView"], "today");
        assert_eq!(value["tasks"][0]["dueDate"], "2026-10-18");
    }

    #[test]
    fn fields_fall_back_independently() {
        let store = store_with(r#"{"tasks": "oops", "activeFilter": "done", "activeView": 3}"#);
        let list = TaskList::load(&store);

        assert!(list.tasks.is_empty());
        assert_eq!(list.active_filter, StatusFilter::Done);
        assert_eq!(list.active_view, DateView::All);
    }

    #[test]
    fn unknown_enum_strings_keep_defaults() {
        let store = store_with(r#"{"tasks": [], "activeFilter": "later", "activeView": "month"}"#);
        let list = TaskList::load(&store);

        assert_eq!(list.active_filter, StatusFilter::All);
        assert_eq!(list.active_view, DateView::All);
    }

    #[test]
    fn malformed_tasks_are_skipped() {
        let store = store_with(
            r#"{"tasks": [
                {"id": 1, "text": "ok", "done": true, "dueDate": null},
                {"id": 2},
                {"id": 3, "text": "   "},
                {"id": 4, "text": "no flags"}
            ]}"#,
        );
        let list = TaskList::load(&store);

        let ids: Vec<u64> = list.tasks.iter().map(|t| t.id).collect();
        assert_eq!(ids, [1, 4]);
        assert!(list.tasks[0].done);
        assert!(!list.tasks[1].done);
    }
}
