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

//! Event routing for the new task form.
//!
//! While the form is active it consumes every key event, so typing a `q` or a
//! digit goes into the field rather than triggering a global shortcut.

use std::sync::mpsc::Sender;

use anyhow::Result;
use crossterm::event::{Event, KeyCode};
use tui_input::backend::crossterm::EventHandler;

use crate::{components::TaskForm, events::AppEvent};

impl TaskForm {
    /// Processes `event`, returning `true` if the form consumed it.
    pub(crate) fn handle_event(&mut self, event: &Event, event_tx: &Sender<AppEvent>) -> Result<bool> {
        let Event::Key(key_event) = event else {
            return Ok(false);
        };

        if !self.active {
            return Ok(false);
        }

        match key_event.code {
            KeyCode::Esc => self.deactivate(),

            KeyCode::Tab | KeyCode::BackTab => self.switch_field(),

            KeyCode::Enter => {
                event_tx.send(AppEvent::SubmitTask {
                    text: self.text.value().to_string(),
                    due_date: self.date.value().to_string(),
                })?;
            }

            _ => {
                // Delegate all other key events to the focused input.
                self.focused_input().handle_event(event);
            }
        }

        Ok(true)
    }
}
