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

//! # Task List TUI.
//!
//! A single-user task manager for the terminal.
//!
//! Tasks can be added with an optional due date, marked done, deleted, and
//! narrowed down by completion status and by due date. The whole collection,
//! together with the active filter and view, is saved after every change and
//! restored on the next start.
//!
//! ## Architecture
//!
//! The application follows a strict setup-run-teardown pattern to ensure the
//! terminal state is preserved even in the event of an error. Input is
//! translated into [`AppEvent`]s on a `std::sync::mpsc` channel which is
//! drained on the main thread before each redraw.

mod components;
mod config;
mod events;
mod model;
mod render;
mod storage;
mod theme;
mod util;

use anyhow::{Context, Result, anyhow};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::{
    fs, io,
    sync::mpsc::{self, Receiver, Sender},
};
use tracing::{error, info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use crate::{
    components::{Controls, TaskForm, TaskListView},
    config::AppConfig,
    events::{AppEvent, process_events},
    model::tasks::TaskList,
    storage::{KeyValueStore, SqliteStore},
    theme::ThemeController,
};

/// Application state.
pub(crate) struct App {
    pub config: AppConfig,

    pub store: Box<dyn KeyValueStore>,

    pub tasks: TaskList,
    pub theme: ThemeController,

    pub task_form: TaskForm,
    pub task_list: TaskListView,
    pub controls: Controls,

    /// One-line message shown in the footer until the next input.
    pub status: Option<String>,

    pub event_tx: Sender<AppEvent>,
    pub event_rx: Receiver<AppEvent>,
}

impl App {
    /// Create a new instance of application state, restoring the tasks and
    /// theme from `store`.
    pub fn new(config: AppConfig, store: Box<dyn KeyValueStore>) -> Self {
        let (event_tx, event_rx) = mpsc::channel();

        let tasks = TaskList::load(store.as_ref());
        let theme = ThemeController::load(store.as_ref());

        info!(
            tasks = tasks.tasks.len(),
            filter = tasks.active_filter.as_str(),
            view = tasks.active_view.as_str(),
            theme = %theme.mode(),
            "state restored"
        );

        Self {
            config,
            store,
            tasks,
            theme,
            task_form: TaskForm::new(),
            task_list: TaskListView::new(),
            controls: Controls::new(),
            status: None,
            event_tx,
            event_rx,
        }
    }

    /// Writes the task snapshot to the store.
    ///
    /// A failed write leaves the in-memory state as it is and is reported in
    /// the footer.
    pub fn persist(&mut self) {
        if let Err(e) = self.tasks.save(self.store.as_mut()) {
            error!(error = %e, "failed to save tasks");
            self.status = Some(format!("Could not save tasks: {e}"));
        }
    }
}

/// The entry point of the application.
///
/// Loads the configuration, opens the task database, manages the terminal
/// lifecycle, and returns an error if any part of the execution fails.
fn main() -> Result<()> {
    let (config, config_error) = config::load_config();

    let _log_guard = init_tracing(&config)?;

    if let Some(e) = config_error {
        warn!(error = %e, "failed to load configuration, using defaults");
    }

    let database_path = config.database_path();
    let store = SqliteStore::open(&database_path)
        .with_context(|| format!("Failed to open task database {}", database_path.display()))?;

    let mut app = App::new(config, Box::new(store));
    info!(database = %app.config.database_path().display(), "task database opened");

    let mut terminal = setup_terminal(&app)?;
    let res = process_events(&mut terminal, &mut app);
    restore_terminal(&mut terminal);

    info!("exiting");

    res.context("Application error occurred")
}

/// Sends log output to a file beside the database, since the terminal itself
/// is occupied by the UI.
///
/// `RUST_LOG` takes precedence over the configured level. The returned guard
/// flushes buffered lines when dropped and must be held until exit.
fn init_tracing(config: &AppConfig) -> Result<WorkerGuard> {
    let log_path = config.log_path();
    let dir = log_path
        .parent()
        .filter(|dir| !dir.as_os_str().is_empty())
        .unwrap_or_else(|| std::path::Path::new("."));
    let file_name = log_path
        .file_name()
        .ok_or_else(|| anyhow!("invalid log file path {}", log_path.display()))?;

    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create log directory {}", dir.display()))?;

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .map_err(|e| anyhow!("invalid RUST_LOG / log level: {e}"))?;

    let (writer, guard) = tracing_appender::non_blocking(tracing_appender::rolling::never(dir, file_name));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(writer)
        .with_target(true)
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow!("failed to install log subscriber: {e}"))?;

    Ok(guard)
}

/// Prepares the terminal for the TUI application.
///
/// This function performs the following side effects:
/// * Sets the terminal background color based on the current theme.
/// * Enables raw mode to capture all keyboard input.
/// * Switches the terminal to the alternate screen buffer and captures the
///   mouse.
///
/// # Errors
///
/// Returns an error if raw mode cannot be enabled or if the alternate screen
/// cannot be entered.
fn setup_terminal(app: &App) -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    // Set the background of the entire terminal window, without this we'd get
    // a thin black outline
    app.theme.apply_to_terminal();

    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;

    Ok(terminal)
}

/// Restores the terminal to its original state.
///
/// This reverses the changes made by [`setup_terminal`], including disabling
/// raw mode, leaving the alternate screen, and resetting the background color.
/// It also ensures the cursor is made visible again.
///
/// Failures are ignored, there is nothing more to be done at this point.
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) {
    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), DisableMouseCapture, LeaveAlternateScreen).ok();
    util::term::reset_terminal_bg();
    terminal.show_cursor().ok();
}
