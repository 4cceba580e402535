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

//! Task collection state.
//!
//! This module provides the owned application state: the ordered task
//! collection plus the active status filter and date view. Every mutation is
//! a plain method reporting whether anything changed. Persistence and
//! redrawing are left to the event handlers.

use chrono::Utc;

use crate::model::{DateView, StatusFilter, Task, TaskId};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct TaskList {
    pub(crate) tasks: Vec<Task>,
    pub(crate) active_filter: StatusFilter,
    pub(crate) active_view: DateView,
}

impl TaskList {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Appends a new open task, returning its id.
    ///
    /// Returns `None`, leaving the collection untouched, when `text` is empty
    /// after trimming.
    pub(crate) fn add_task(&mut self, text: &str, due_date: Option<String>) -> Option<TaskId> {
        self.add_task_at(text, due_date, Utc::now().timestamp_millis())
    }

    pub(crate) fn add_task_at(
        &mut self,
        text: &str,
        due_date: Option<String>,
        now_millis: i64,
    ) -> Option<TaskId> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }

        let id = self.next_id(now_millis);
        self.tasks.push(Task {
            id,
            text: text.to_string(),
            done: false,
            due_date: due_date.filter(|d| !d.is_empty()),
        });

        Some(id)
    }

    /// Removes the task with `id`. Returns `false` if there is no such task.
    pub(crate) fn delete_task(&mut self, id: TaskId) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|task| task.id != id);
        self.tasks.len() != before
    }

    /// Flips the completion flag of the task with `id`. Returns `false` if
    /// there is no such task.
    pub(crate) fn toggle_done(&mut self, id: TaskId) -> bool {
        match self.tasks.iter_mut().find(|task| task.id == id) {
            Some(task) => {
                task.done = !task.done;
                true
            }
            None => false,
        }
    }

    pub(crate) fn set_filter(&mut self, filter: StatusFilter) {
        self.active_filter = filter;
    }

    pub(crate) fn set_view(&mut self, view: DateView) {
        self.active_view = view;
    }

    pub(crate) fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    /// Number of open tasks across the whole collection, whatever the active
    /// filter and view.
    pub(crate) fn remaining(&self) -> usize {
        self.tasks.iter().filter(|task| !task.done).count()
    }

    // Creation time in milliseconds, bumped past the largest id in use so
    // two tasks created within the same millisecond stay distinct.
    fn next_id(&self, now_millis: i64) -> TaskId {
        let now = TaskId::try_from(now_millis).unwrap_or_default();
        match self.tasks.iter().map(|task| task.id).max() {
            Some(max) if max >= now => max + 1,
            _ => now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NOW: i64 = 1_760_000_000_000;

    #[test]
    fn add_task_appends_open_trimmed_task() {
        let mut list = TaskList::new();
        let id = list.add_task_at("  Buy milk  ", None, NOW).unwrap();

        assert_eq!(list.tasks.len(), 1);
        let task = list.get(id).unwrap();
        assert_eq!(task.text, "Buy milk");
        assert!(!task.done);
        assert_eq!(task.due_date, None);
    }

    #[test]
    fn add_task_rejects_blank_text() {
        let mut list = TaskList::new();
        list.add_task_at("keep", None, NOW);

        for blank in ["", "   ", "\t\n"] {
            assert_eq!(list.add_task_at(blank, Some("2026-10-18".into()), NOW), None);
        }
        assert_eq!(list.tasks.len(), 1);
    }

    #[test]
    fn add_task_keeps_due_date() {
        let mut list = TaskList::new();
        let id = list.add_task_at("Pay rent", Some("2026-11-01".into()), NOW).unwrap();
        assert_eq!(list.get(id).unwrap().due_date.as_deref(), Some("2026-11-01"));
    }

    #[test]
    fn ids_stay_unique_within_one_millisecond() {
        let mut list = TaskList::new();
        let a = list.add_task_at("a", None, NOW).unwrap();
        let b = list.add_task_at("b", None, NOW).unwrap();
        let c = list.add_task_at("c", None, NOW - 5).unwrap();

        assert_eq!(a, NOW as u64);
        assert_eq!(b, a + 1);
        assert_eq!(c, b + 1);
    }

    #[test]
    fn toggle_twice_restores_original_state() {
        let mut list = TaskList::new();
        let id = list.add_task_at("a", None, NOW).unwrap();

        assert!(list.toggle_done(id));
        assert!(list.get(id).unwrap().done);
        assert!(list.toggle_done(id));
        assert!(!list.get(id).unwrap().done);
    }

    #[test]
    fn toggle_unknown_id_is_noop() {
        let mut list = TaskList::new();
        list.add_task_at("a", None, NOW);
        let before = list.clone();

        assert!(!list.toggle_done(42));
        assert_eq!(list, before);
    }

    #[test]
    fn second_delete_is_noop() {
        let mut list = TaskList::new();
        let id = list.add_task_at("a", None, NOW).unwrap();
        list.add_task_at("b", None, NOW).unwrap();

        assert!(list.delete_task(id));
        assert_eq!(list.tasks.len(), 1);
        assert!(!list.delete_task(id));
        assert_eq!(list.tasks.len(), 1);
    }

    #[test]
    fn delete_preserves_order_of_the_rest() {
        let mut list = TaskList::new();
        list.add_task_at("a", None, NOW);
        let b = list.add_task_at("b", None, NOW).unwrap();
        list.add_task_at("c", None, NOW);

        list.delete_task(b);
        let texts: Vec<&str> = list.tasks.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, ["a", "c"]);
    }

    #[test]
    fn remaining_ignores_filter_and_view() {
        let mut list = TaskList::new();
        let a = list.add_task_at("a", None, NOW).unwrap();
        list.add_task_at("b", None, NOW);
        list.add_task_at("c", Some("2000-01-01".into()), NOW);
        list.toggle_done(a);

        list.set_filter(StatusFilter::Done);
        list.set_view(DateView::Today);
        assert_eq!(list.remaining(), 2);
    }
}
