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

//! Interactive task list widget and state management.
//!
//! The list is rebuilt from scratch on every frame: the renderer derives the
//! visible tasks, turns them into [`TaskRow`] display units with
//! [`build_rows`], and hands them to [`TaskListView`]. The view remembers the
//! rows and the area it last drew, so a key press or mouse click can be
//! resolved to the task the user is actually looking at.

mod event;
mod render;

use ratatui::{layout::Rect, widgets::TableState};

use crate::{
    model::{Task, TaskId},
    util::dates,
};

/// Width of the delete column at the right edge of each row.
pub(crate) const DELETE_COLUMN_WIDTH: u16 = 3;

/// One rendered line of the task list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct TaskRow {
    pub(crate) id: TaskId,
    /// 1-based position within the visible rows, not a property of the task.
    pub(crate) position: usize,
    pub(crate) text: String,
    /// Due date formatted for display.
    pub(crate) due: Option<String>,
    pub(crate) done: bool,
    pub(crate) overdue: bool,
}

/// Turns the visible tasks into display units, numbering them in order.
pub(crate) fn build_rows(visible: &[&Task], today: &str) -> Vec<TaskRow> {
    visible
        .iter()
        .enumerate()
        .map(|(index, task)| TaskRow {
            id: task.id,
            position: index + 1,
            text: task.text.clone(),
            due: task.due_date.as_deref().map(dates::format_for_display),
            done: task.done,
            overdue: task.is_overdue(today),
        })
        .collect()
}

/// Something the user asked to do to a specific task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TaskListAction {
    ToggleDone(TaskId),
    Delete(TaskId),
}

#[derive(Debug, Default)]
pub(crate) struct TaskListView {
    pub(crate) rows: Vec<TaskRow>,
    pub(crate) table_state: TableState,
    /// Area inside the border where rows were last drawn.
    pub(crate) rows_area: Rect,
}

impl TaskListView {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Replaces the rows, keeping the selection on a valid index.
    pub(crate) fn set_rows(&mut self, rows: Vec<TaskRow>) {
        self.rows = rows;

        let len = self.rows.len();
        let selected = match self.table_state.selected() {
            _ if len == 0 => None,
            Some(i) if i >= len => Some(len - 1),
            Some(i) => Some(i),
            None => Some(0),
        };
        self.table_state.select(selected);
    }

    pub(crate) fn selected_id(&self) -> Option<TaskId> {
        self.table_state
            .selected()
            .and_then(|i| self.rows.get(i))
            .map(|row| row.id)
    }

    /// Resolves a screen position to an action on the row under it.
    ///
    /// The delete column sits at the right edge of the row, anywhere else on
    /// the row toggles completion. Positions outside the rows resolve to
    /// nothing.
    pub(crate) fn hit_test(&self, column: u16, row: u16) -> Option<(usize, TaskListAction)> {
        let area = self.rows_area;
        if column < area.x || column >= area.right() || row < area.y || row >= area.bottom() {
            return None;
        }

        let index = usize::from(row - area.y) + self.table_state.offset();
        let task = self.rows.get(index)?;

        let action = if column >= area.right().saturating_sub(DELETE_COLUMN_WIDTH) {
            TaskListAction::Delete(task.id)
        } else {
            TaskListAction::ToggleDone(task.id)
        };

        Some((index, action))
    }

    fn goto_next(&mut self) {
        let len = self.rows.len();
        if len == 0 {
            return;
        }
        let i = match self.table_state.selected() {
            Some(i) if i + 1 < len => i + 1,
            Some(_) => 0,
            None => 0,
        };
        self.table_state.select(Some(i));
    }

    fn goto_previous(&mut self) {
        let len = self.rows.len();
        if len == 0 {
            return;
        }
        let i = match self.table_state.selected() {
            Some(0) | None => len - 1,
            Some(i) => i - 1,
        };
        self.table_state.select(Some(i));
    }

    fn goto_first(&mut self) {
        if !self.rows.is_empty() {
            self.table_state.select(Some(0));
        }
    }

    fn goto_last(&mut self) {
        if !self.rows.is_empty() {
            self.table_state.select(Some(self.rows.len() - 1));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(id: TaskId, text: &str, done: bool, due: Option<&str>) -> Task {
        Task {
            id,
            text: text.to_string(),
            done,
            due_date: due.map(String::from),
        }
    }

    fn view_with_rows(count: usize) -> TaskListView {
        let tasks: Vec<Task> = (0..count)
            .map(|i| task(100 + i as u64, &format!("task {i}"), false, None))
            .collect();
        let visible: Vec<&Task> = tasks.iter().collect();

        let mut view = TaskListView::new();
        view.set_rows(build_rows(&visible, "2026-10-18"));
        view.rows_area = Rect::new(1, 5, 40, 10);
        view
    }

    #[test]
    fn rows_are_numbered_within_the_visible_list() {
        let tasks = [
            task(7, "first", false, None),
            task(3, "second", true, Some("2026-10-01")),
            task(9, "third", false, Some("2026-10-17")),
            task(1, "fourth", false, Some("2026-10-18")),
        ];
        let visible: Vec<&Task> = tasks.iter().skip(1).collect();

        let rows = build_rows(&visible, "2026-10-18");

        let positions: Vec<usize> = rows.iter().map(|r| r.position).collect();
        assert_eq!(positions, [1, 2, 3]);
        assert_eq!(rows[0].id, 3);
        assert_eq!(rows[0].due.as_deref(), Some("01/10/2026"));
        assert!(!rows[0].overdue, "done tasks are never overdue");
        assert!(rows[1].overdue);
        assert!(!rows[2].overdue, "due today is not overdue");
    }

    #[test]
    fn set_rows_clamps_selection() {
        let mut view = view_with_rows(3);
        assert_eq!(view.table_state.selected(), Some(0));

        view.table_state.select(Some(2));
        let shorter = view.rows[..1].to_vec();
        view.set_rows(shorter);
        assert_eq!(view.table_state.selected(), Some(0));

        view.set_rows(Vec::new());
        assert_eq!(view.table_state.selected(), None);
        assert_eq!(view.selected_id(), None);
    }

    #[test]
    fn navigation_wraps() {
        let mut view = view_with_rows(3);
        view.goto_previous();
        assert_eq!(view.selected_id(), Some(102));
        view.goto_next();
        assert_eq!(view.selected_id(), Some(100));
        view.goto_last();
        assert_eq!(view.selected_id(), Some(102));
        view.goto_first();
        assert_eq!(view.selected_id(), Some(100));
    }

    #[test]
    fn click_on_delete_column_deletes() {
        let view = view_with_rows(3);
        let right = view.rows_area.right() - 1;
        assert_eq!(
            view.hit_test(right, 6),
            Some((1, TaskListAction::Delete(101)))
        );
    }

    #[test]
    fn click_on_row_body_toggles() {
        let view = view_with_rows(3);
        assert_eq!(
            view.hit_test(4, 5),
            Some((0, TaskListAction::ToggleDone(100)))
        );
    }

    #[test]
    fn click_outside_rows_does_nothing() {
        let view = view_with_rows(3);
        assert_eq!(view.hit_test(4, 8), None, "below the last row");
        assert_eq!(view.hit_test(0, 5), None, "on the border");
        assert_eq!(view.hit_test(4, 4), None, "above the list");
    }
}
