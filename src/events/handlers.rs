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

use tracing::{debug, error, info};

use crate::{
    App,
    model::{DateView, StatusFilter, TaskId},
    util::dates,
};

pub(super) fn handle_submit_task(app: &mut App, text: &str, due_date: &str) {
    if text.trim().is_empty() {
        return;
    }

    let due_date = due_date.trim();
    let due_date = if due_date.is_empty() {
        None
    } else if let Some(date) = dates::parse_date(due_date) {
        Some(dates::date_key(date))
    } else {
        app.status = Some(format!("Invalid due date '{due_date}', expected YYYY-MM-DD"));
        return;
    };

    if let Some(id) = app.tasks.add_task(text, due_date) {
        info!(id, "task added");
        app.task_form.clear();
        app.persist();
    }
}

pub(super) fn handle_delete_task(app: &mut App, id: TaskId) {
    if app.tasks.delete_task(id) {
        info!(id, "task deleted");
        app.persist();
    } else {
        debug!(id, "delete ignored, no such task");
    }
}

pub(super) fn handle_toggle_done(app: &mut App, id: TaskId) {
    if app.tasks.toggle_done(id) {
        debug!(id, done = app.tasks.get(id).is_some_and(|t| t.done), "task toggled");
        app.persist();
    } else {
        debug!(id, "toggle ignored, no such task");
    }
}

pub(super) fn handle_set_filter(app: &mut App, filter: StatusFilter) {
    app.tasks.set_filter(filter);
    app.persist();
}

pub(super) fn handle_set_view(app: &mut App, view: DateView) {
    app.tasks.set_view(view);
    app.persist();
}

pub(super) fn handle_toggle_theme(app: &mut App) {
    if let Err(e) = app.theme.toggle(app.store.as_mut()) {
        error!(error = %e, "failed to save theme");
        app.status = Some(format!("Could not save theme: {e}"));
    }
    app.theme.apply_to_terminal();
}
