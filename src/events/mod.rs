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

//! Application logic and event handling.
//!
//! This module acts as the central hub for the "Controller" logic of the
//! application. It organizes how terminal input is translated into internal
//! state changes.
//!
//! # Organization
//!
//! * [`key_handlers`]: Routes keyboard and mouse input to the components and
//!   to the global shortcuts, producing [`AppEvent`]s.
//! * [`handlers`]: One function per state-changing event. Each mutates the
//!   state and persists it; the redraw follows in [`process_events`].

mod handlers;
mod key_handlers;

use handlers::*;
use key_handlers::{process_key_event, process_mouse_event};

use std::io::Stdout;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind, MouseEvent};
use ratatui::{Terminal, prelude::CrosstermBackend};
use tracing::debug;

use crate::{
    App,
    model::{DateView, StatusFilter, TaskId},
    render::draw,
};

#[derive(Debug)]
pub(crate) enum AppEvent {
    Key(KeyEvent),
    Mouse(MouseEvent),

    SubmitTask { text: String, due_date: String },
    DeleteTask(TaskId),
    ToggleDone(TaskId),

    SetFilter(StatusFilter),
    SetView(DateView),

    ToggleTheme,

    ExitApplication,
}

/// Runs the main application loop, handling events and rendering the UI in the
/// terminal.
///
/// The loop is single threaded: it blocks on the next terminal event, runs
/// every resulting [`AppEvent`] to completion, then redraws. It returns when
/// an [`AppEvent::ExitApplication`] is processed.
pub(crate) fn process_events(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
) -> Result<()> {
    terminal.draw(|f| draw(f, app))?;

    loop {
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                app.event_tx.send(AppEvent::Key(key))?;
            }
            Event::Mouse(mouse) => app.event_tx.send(AppEvent::Mouse(mouse))?,
            // Anything else (resize, focus, paste) only needs a redraw.
            _ => {}
        }

        if !drain_events(app)? {
            break;
        }

        terminal.draw(|f| draw(f, app))?;
    }

    Ok(())
}

/// Handles every queued event, including the ones queued while handling.
///
/// Returns `false` once the application has been asked to exit.
pub(crate) fn drain_events(app: &mut App) -> Result<bool> {
    while let Ok(event) = app.event_rx.try_recv() {
        if matches!(event, AppEvent::ExitApplication) {
            debug!("exit requested");
            return Ok(false);
        }

        handle_event(app, event)?;
    }

    Ok(true)
}

fn handle_event(app: &mut App, event: AppEvent) -> Result<()> {
    // A status message lives until the next user input.
    if matches!(event, AppEvent::Key(_) | AppEvent::Mouse(_)) {
        app.status = None;
    }

    match event {
        AppEvent::Key(key) => process_key_event(app, key)?,
        AppEvent::Mouse(mouse) => process_mouse_event(app, mouse)?,
        AppEvent::SubmitTask { text, due_date } => handle_submit_task(app, &text, &due_date),
        AppEvent::DeleteTask(id) => handle_delete_task(app, id),
        AppEvent::ToggleDone(id) => handle_toggle_done(app, id),
        AppEvent::SetFilter(filter) => handle_set_filter(app, filter),
        AppEvent::SetView(view) => handle_set_view(app, view),
        AppEvent::ToggleTheme => handle_toggle_theme(app),
        AppEvent::ExitApplication => {}
    }

    Ok(())
}
