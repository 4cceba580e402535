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

//! Render the status line: the remaining task counter on the left, and
//! either the latest status message or the key help on the right.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    widgets::Paragraph,
};

use crate::App;

const HELP_TEXT: &str = "a add  space toggle  d delete  1-3 status  4-6 dates  t theme  q quit";
const FORM_HELP_TEXT: &str = "enter save  tab next field  esc cancel";

pub(crate) fn remaining_label(remaining: usize) -> String {
    format!("{remaining} task(s) remaining")
}

pub(crate) fn draw_footer(f: &mut Frame, area: Rect, app: &App) {
    let theme = app.theme.palette();

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(24), Constraint::Min(0)])
        .horizontal_margin(1)
        .split(area);

    let counter = Paragraph::new(remaining_label(app.tasks.remaining()))
        .style(Style::default().fg(theme.accent_colour).add_modifier(Modifier::BOLD));
    f.render_widget(counter, chunks[0]);

    let (text, colour) = match &app.status {
        Some(message) => (message.as_str(), theme.overdue_fg),
        None if app.task_form.active() => (FORM_HELP_TEXT, theme.muted_colour),
        None => (HELP_TEXT, theme.muted_colour),
    };

    f.render_widget(
        Paragraph::new(text)
            .style(Style::default().fg(colour))
            .alignment(Alignment::Right),
        chunks[1],
    );
}
