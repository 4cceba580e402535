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

//! Input handling and event processing for the task list.
//!
//! This module maps raw terminal keyboard and mouse events to list
//! navigation, and to actions on the task they target.

use crossterm::event::{Event, KeyCode, MouseButton, MouseEventKind};

use crate::components::{TaskListAction, TaskListView};

impl TaskListView {
    pub(crate) fn process_event(&mut self, event: &Event) -> Option<TaskListAction> {
        match event {
            Event::Key(key_event) => match key_event.code {
                KeyCode::Char('j') | KeyCode::Down => {
                    self.goto_next();
                    None
                }
                KeyCode::Char('k') | KeyCode::Up => {
                    self.goto_previous();
                    None
                }
                KeyCode::Char('g') | KeyCode::Home => {
                    self.goto_first();
                    None
                }
                KeyCode::Char('G') | KeyCode::End => {
                    self.goto_last();
                    None
                }

                KeyCode::Char(' ') | KeyCode::Enter => {
                    self.selected_id().map(TaskListAction::ToggleDone)
                }
                KeyCode::Char('d') | KeyCode::Delete => {
                    self.selected_id().map(TaskListAction::Delete)
                }

                _ => None,
            },

            Event::Mouse(mouse_event) => match mouse_event.kind {
                MouseEventKind::Down(MouseButton::Left) => {
                    let (index, action) = self.hit_test(mouse_event.column, mouse_event.row)?;
                    self.table_state.select(Some(index));
                    Some(action)
                }
                MouseEventKind::ScrollDown => {
                    self.goto_next();
                    None
                }
                MouseEventKind::ScrollUp => {
                    self.goto_previous();
                    None
                }
                _ => None,
            },

            _ => None,
        }
    }
}
