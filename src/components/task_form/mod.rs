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

//! New task form.
//!
//! Two text inputs, the task text and an optional `YYYY-MM-DD` due date. The
//! form only collects input: submitting it emits an [`AppEvent::SubmitTask`]
//! with the raw field values, and the submit handler decides whether a task
//! gets created and whether the fields are cleared.
//!
//! [`AppEvent::SubmitTask`]: crate::events::AppEvent::SubmitTask

mod event;
mod render;

use tui_input::Input;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) enum FormField {
    #[default]
    Text,
    Date,
}

#[derive(Debug, Default)]
pub(crate) struct TaskForm {
    active: bool,
    pub(crate) focus: FormField,
    pub(crate) text: Input,
    pub(crate) date: Input,
}

impl TaskForm {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn active(&self) -> bool {
        self.active
    }

    pub(crate) fn activate(&mut self) {
        self.active = true;
        self.focus = FormField::Text;
    }

    pub(crate) fn deactivate(&mut self) {
        self.active = false;
    }

    /// Empties both fields and moves focus back to the text field.
    pub(crate) fn clear(&mut self) {
        self.text.reset();
        self.date.reset();
        self.focus = FormField::Text;
    }

    fn focused_input(&mut self) -> &mut Input {
        match self.focus {
            FormField::Text => &mut self.text,
            FormField::Date => &mut self.date,
        }
    }

    fn switch_field(&mut self) {
        self.focus = match self.focus {
            FormField::Text => FormField::Date,
            FormField::Date => FormField::Text,
        };
    }
}
