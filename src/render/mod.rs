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

//! User interface rendering logic.
//!
//! This module handles the translation of the [`App`] state into visual
//! widgets using the `ratatui` framework. It is responsible for layout
//! management, widget styling, and terminal frame composition.
//!
//! # Rendering Pipeline
//!
//! The primary entry point is the [`draw`] function, which is called after
//! every handled event. Nothing is patched incrementally: the visible tasks
//! are derived again, the rows rebuilt, and every widget redrawn.

mod footer;
pub(crate) mod icons;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
};

use crate::{
    App,
    components::task_list::build_rows,
    model::view::{DateWindow, visible_tasks},
    render::footer::draw_footer,
    theme::Theme,
};

pub(crate) trait Render {
    fn draw(&mut self, f: &mut Frame, area: Rect, theme: &Theme);
}

/// Renders the user interface to the terminal frame.
///
/// It handles:
///
/// * **Layout**: Partitioning the screen into header, form, controls, task
///   list and status line.
/// * **State Mapping**: Deriving the visible tasks from the active filter and
///   view, and converting them into list rows.
/// * **Styling**: Applying the colours of the current theme.
///
/// # Arguments
///
/// * `f` - The current terminal frame used for drawing.
/// * `app` - A mutable reference to the application state, allowing the
///   components to remember what they drew (rows, regions, scroll offsets).
pub(crate) fn draw(f: &mut Frame, app: &mut App) {
    let theme = app.theme.palette();
    let area = f.area();

    f.render_widget(
        Block::default().style(
            Style::default()
                .bg(theme.background_colour)
                .fg(theme.foreground_colour),
        ),
        area,
    );

    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area);

    let window = DateWindow::current();
    let visible = visible_tasks(
        &app.tasks.tasks,
        app.tasks.active_filter,
        app.tasks.active_view,
        &window,
    );
    let rows = build_rows(&visible, &window.today);

    draw_header(f, outer[0], rows.len(), app.tasks.tasks.len(), &theme);

    app.task_form.draw(f, outer[1], &theme);

    app.controls
        .sync(app.tasks.active_filter, app.tasks.active_view, app.theme.mode());
    app.controls.draw(f, outer[2], &theme);

    app.task_list.set_rows(rows);
    app.task_list.draw(f, outer[3], &theme);

    draw_footer(f, outer[4], app);
}

fn draw_header(f: &mut Frame, area: Rect, shown: usize, total: usize, theme: &Theme) {
    let line = Line::from(vec![
        Span::styled(
            " todopro",
            Style::default()
                .fg(theme.accent_colour)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  showing {shown} of {total}"),
            Style::default().fg(theme.muted_colour),
        ),
    ]);

    f.render_widget(Paragraph::new(line), area);
}

#[cfg(test)]
mod tests {
    use ratatui::{Terminal, backend::TestBackend, buffer::Buffer};

    use super::*;
    use crate::{
        config::AppConfig,
        model::{DateView, StatusFilter},
        storage::MemoryStore,
        util::dates,
    };

    fn app() -> App {
        App::new(AppConfig::default(), Box::new(MemoryStore::new()))
    }

    fn render(app: &mut App) -> Buffer {
        let mut terminal = Terminal::new(TestBackend::new(90, 16)).unwrap();
        terminal.draw(|f| draw(f, app)).unwrap();
        terminal.backend().buffer().clone()
    }

    fn screen_lines(buf: &Buffer) -> Vec<String> {
        (0..buf.area.height)
            .map(|y| {
                (0..buf.area.width)
                    .map(|x| buf[(x, y)].symbol())
                    .collect::<String>()
            })
            .collect()
    }

    fn line_containing<'a>(lines: &'a [String], needle: &str) -> Option<&'a String> {
        lines.iter().find(|line| line.contains(needle))
    }

    #[test]
    fn counter_covers_the_whole_collection() {
        let mut app = app();
        let done = app.tasks.add_task("done one", None).unwrap();
        app.tasks.add_task("open one", None);
        app.tasks.add_task("open two", None);
        app.tasks.toggle_done(done);
        app.tasks.set_filter(StatusFilter::Done);

        let lines = screen_lines(&render(&mut app));

        assert!(line_containing(&lines, "2 task(s) remaining").is_some());
        assert!(line_containing(&lines, "done one").is_some());
        assert!(line_containing(&lines, "open one").is_none());
        assert!(line_containing(&lines, "showing 1 of 3").is_some());
    }

    #[test]
    fn rows_show_position_date_and_delete_control() {
        let mut app = app();
        let today = dates::today();
        app.tasks.add_task("Undated", None);
        app.tasks.add_task("Pay rent", Some(today.clone()));
        app.tasks.set_view(DateView::Today);

        let lines = screen_lines(&render(&mut app));

        let row = line_containing(&lines, "Pay rent").unwrap();
        assert!(row.contains(&dates::format_for_display(&today)));
        assert!(row.contains(icons::ICON_DELETE));
        assert!(row.trim_start_matches(['\u{2502}', ' ']).starts_with('1'));
        assert!(line_containing(&lines, "Undated").is_none());
    }

    #[test]
    fn empty_list_shows_placeholder() {
        let mut app = app();
        let lines = screen_lines(&render(&mut app));
        assert!(line_containing(&lines, "Nothing to show here.").is_some());
        assert!(line_containing(&lines, "0 task(s) remaining").is_some());
    }

    #[test]
    fn overdue_rows_use_overdue_colour() {
        let mut app = app();
        app.tasks.add_task("Late", Some("2000-01-01".into()));

        let buf = render(&mut app);
        let theme = app.theme.palette();

        let (x, y) = (0..buf.area.height)
            .flat_map(|y| (0..buf.area.width).map(move |x| (x, y)))
            .find(|&(x, y)| buf[(x, y)].symbol() == "L" && buf[(x + 1, y)].symbol() == "a")
            .unwrap();
        assert_eq!(buf[(x, y)].fg, theme.overdue_fg);
    }

    #[test]
    fn list_area_is_remembered_for_clicks() {
        let mut app = app();
        app.tasks.add_task("one", None);
        render(&mut app);

        let area = app.task_list.rows_area;
        assert!(area.width > 0 && area.height > 0);
        assert!(app.task_list.hit_test(area.x + 2, area.y).is_some());
    }
}
