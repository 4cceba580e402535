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

//! UI rendering logic for the task list.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Cell, Padding, Paragraph, Row, Table},
};

use crate::{
    components::{TaskListView, TaskRow, task_list::DELETE_COLUMN_WIDTH},
    render::{
        Render,
        icons::{ICON_DELETE, ICON_DONE, ICON_OPEN, ICON_OVERDUE},
    },
    theme::Theme,
};

const EMPTY_TEXT: &str = "Nothing to show here.";

impl Render for TaskListView {
    fn draw(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        let block = Block::default()
            .title(" Tasks ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border_colour));

        self.rows_area = block.inner(area);

        if self.rows.is_empty() {
            let empty = Paragraph::new(EMPTY_TEXT)
                .style(Style::default().fg(theme.muted_colour))
                .alignment(Alignment::Center)
                .block(block.padding(Padding::top(1)));
            f.render_widget(empty, area);
            return;
        }

        let rows = self.rows.iter().map(|row| table_row(row, theme));

        let table = Table::new(
            rows,
            [
                Constraint::Length(4),
                Constraint::Length(1),
                Constraint::Fill(1),
                Constraint::Length(10),
                Constraint::Length(DELETE_COLUMN_WIDTH),
            ],
        )
        .row_highlight_style(Style::default().bg(theme.selection_colour))
        .block(block);

        f.render_stateful_widget(table, area, &mut self.table_state);
    }
}

fn table_row<'a>(row: &'a TaskRow, theme: &Theme) -> Row<'a> {
    let text_style = if row.done {
        Style::default()
            .fg(theme.done_fg)
            .add_modifier(Modifier::CROSSED_OUT)
    } else if row.overdue {
        Style::default()
            .fg(theme.overdue_fg)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.foreground_colour)
    };

    let marker = match (row.done, row.overdue) {
        (true, _) => Line::from(ICON_DONE).style(Style::default().fg(theme.done_fg)),
        (false, true) => Line::from(ICON_OVERDUE).style(Style::default().fg(theme.overdue_fg)),
        (false, false) => Line::from(ICON_OPEN).style(Style::default().fg(theme.muted_colour)),
    };

    let due_style = if row.overdue {
        Style::default().fg(theme.overdue_fg)
    } else {
        Style::default().fg(theme.date_fg)
    };

    Row::new(vec![
        Cell::from(
            Line::from(row.position.to_string())
                .style(Style::default().fg(theme.badge_fg))
                .alignment(Alignment::Right),
        ),
        Cell::from(marker),
        Cell::from(Line::from(row.text.as_str()).style(text_style)),
        Cell::from(Line::from(row.due.clone().unwrap_or_default()).style(due_style)),
        Cell::from(
            Line::from(ICON_DELETE)
                .style(Style::default().fg(theme.delete_fg))
                .alignment(Alignment::Center),
        ),
    ])
}
