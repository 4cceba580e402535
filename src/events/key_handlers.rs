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

//! Keyboard and mouse routing.
//!
//! Input is offered to the components first, in order of precedence: the
//! new task form (which swallows everything while it has focus), then the
//! task list, then the global shortcuts.

use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers, MouseEvent};

use crate::{
    App,
    components::{ControlTarget, TaskListAction, controls::target_for_key},
    events::AppEvent,
};

/// Maps keyboard input to application events.
///
/// It handles:
///
/// * **Form Input**: Text entry while the new task form is active.
/// * **List Actions**: Moving the selection, toggling and deleting tasks.
/// * **Global Shortcuts**: Filters, views, theme, opening the form, and
///   exiting the program.
///
/// # Errors
///
/// Returns an error if an event cannot be queued.
pub(super) fn process_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    let event = Event::Key(key);

    if app.task_form.handle_event(&event, &app.event_tx)? {
        return Ok(());
    }

    if let Some(action) = app.task_list.process_event(&event) {
        return send_list_action(app, action);
    }

    process_global_key_event(app, key)
}

/// Maps a mouse event to the list row or control under the pointer.
pub(super) fn process_mouse_event(app: &mut App, mouse: MouseEvent) -> Result<()> {
    let event = Event::Mouse(mouse);

    if let Some(target) = app.controls.process_event(&event) {
        return send_control(app, target);
    }

    if let Some(action) = app.task_list.process_event(&event) {
        return send_list_action(app, action);
    }

    Ok(())
}

fn process_global_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    match (key.code, key.modifiers) {
        (KeyCode::Char('q'), _) | (KeyCode::Char('c'), KeyModifiers::CONTROL) => {
            app.event_tx.send(AppEvent::ExitApplication)?;
        }

        (KeyCode::Char('a'), _) | (KeyCode::Char('/'), _) => app.task_form.activate(),

        (KeyCode::Char(c), _) => {
            if let Some(target) = target_for_key(c) {
                send_control(app, target)?;
            }
        }

        _ => {}
    }

    Ok(())
}

fn send_control(app: &App, target: ControlTarget) -> Result<()> {
    let event = match target {
        ControlTarget::Filter(filter) => AppEvent::SetFilter(filter),
        ControlTarget::View(view) => AppEvent::SetView(view),
        ControlTarget::Theme => AppEvent::ToggleTheme,
    };
    app.event_tx.send(event)?;

    Ok(())
}

fn send_list_action(app: &App, action: TaskListAction) -> Result<()> {
    let event = match action {
        TaskListAction::ToggleDone(id) => AppEvent::ToggleDone(id),
        TaskListAction::Delete(id) => AppEvent::DeleteTask(id),
    };
    app.event_tx.send(event)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use crossterm::event::{MouseButton, MouseEventKind};
    use ratatui::{Terminal, backend::TestBackend};

    use super::*;
    use crate::{
        config::AppConfig,
        events::drain_events,
        model::{DateView, StatusFilter},
        render::draw,
        storage::MemoryStore,
        theme::ThemeMode,
    };

    fn app() -> App {
        App::new(AppConfig::default(), Box::new(MemoryStore::new()))
    }

    fn press(app: &mut App, code: KeyCode) -> bool {
        app.event_tx
            .send(AppEvent::Key(KeyEvent::new(code, KeyModifiers::NONE)))
            .unwrap();
        drain_events(app).unwrap()
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn click(app: &mut App, column: u16, row: u16) {
        app.event_tx
            .send(AppEvent::Mouse(MouseEvent {
                kind: MouseEventKind::Down(MouseButton::Left),
                column,
                row,
                modifiers: KeyModifiers::NONE,
            }))
            .unwrap();
        drain_events(app).unwrap();
    }

    fn redraw(app: &mut App) {
        let mut terminal = Terminal::new(TestBackend::new(100, 20)).unwrap();
        terminal.draw(|f| draw(f, app)).unwrap();
    }

    #[test]
    fn typing_in_the_form_creates_a_task() {
        let mut app = app();
        press(&mut app, KeyCode::Char('a'));
        type_text(&mut app, "quit smoking 123");
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.tasks.tasks.len(), 1);
        assert_eq!(app.tasks.tasks[0].text, "quit smoking 123");
        assert_eq!(app.tasks.active_filter, StatusFilter::All);
        assert!(app.task_form.active(), "form stays open for the next task");
    }

    #[test]
    fn q_quits_only_outside_the_form() {
        let mut app = app();
        press(&mut app, KeyCode::Char('/'));
        assert!(press(&mut app, KeyCode::Char('q')));
        press(&mut app, KeyCode::Esc);
        assert!(!press(&mut app, KeyCode::Char('q')));
    }

    #[test]
    fn digit_shortcuts_set_filter_and_view() {
        let mut app = app();
        press(&mut app, KeyCode::Char('3'));
        press(&mut app, KeyCode::Char('6'));

        assert_eq!(app.tasks.active_filter, StatusFilter::Done);
        assert_eq!(app.tasks.active_view, DateView::Week);
    }

    #[test]
    fn t_toggles_theme() {
        let mut app = app();
        press(&mut app, KeyCode::Char('t'));
        assert_eq!(app.theme.mode(), ThemeMode::Dark);
    }

    #[test]
    fn space_and_d_act_on_the_selected_row() {
        let mut app = app();
        app.tasks.add_task("first", None);
        app.tasks.add_task("second", None);
        redraw(&mut app);

        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Char(' '));
        assert!(!app.tasks.tasks[0].done);
        assert!(app.tasks.tasks[1].done);

        press(&mut app, KeyCode::Char('d'));
        let texts: Vec<&str> = app.tasks.tasks.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, ["first"]);
    }

    #[test]
    fn clicks_toggle_and_delete_rows() {
        let mut app = app();
        app.tasks.add_task("first", None);
        app.tasks.add_task("second", None);
        redraw(&mut app);

        let area = app.task_list.rows_area;
        click(&mut app, area.x + 6, area.y);
        assert!(app.tasks.tasks[0].done);

        click(&mut app, area.right() - 2, area.y + 1);
        assert_eq!(app.tasks.tasks.len(), 1);

        click(&mut app, area.x + 6, area.y + 5);
        assert_eq!(app.tasks.tasks.len(), 1);
        assert!(app.tasks.tasks[0].done);
    }

    #[test]
    fn clicking_a_control_selects_it() {
        let mut app = app();
        redraw(&mut app);

        let (rect, _) = app
            .controls
            .regions
            .iter()
            .copied()
            .find(|(_, target)| *target == ControlTarget::View(DateView::Today))
            .unwrap();
        click(&mut app, rect.x + 1, rect.y);

        assert_eq!(app.tasks.active_view, DateView::Today);
    }
}
