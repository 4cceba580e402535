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

//! Render the new task form: the text field, the date field, and the cursor
//! of whichever one has focus.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::{Block, Borders, Paragraph},
};
use tui_input::Input;

use crate::{
    components::{TaskForm, task_form::FormField},
    render::Render,
    theme::Theme,
};

const TEXT_PLACEHOLDER: &str = "press a to add a task";
const DATE_PLACEHOLDER: &str = "YYYY-MM-DD";

impl Render for TaskForm {
    fn draw(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(10), Constraint::Length(16)])
            .split(area);

        let text_focused = self.active() && self.focus == FormField::Text;
        let date_focused = self.active() && self.focus == FormField::Date;

        draw_input(f, chunks[0], " New task ", &self.text, TEXT_PLACEHOLDER, text_focused, theme);
        draw_input(f, chunks[1], " Due date ", &self.date, DATE_PLACEHOLDER, date_focused, theme);
    }
}

fn draw_input(
    f: &mut Frame,
    area: Rect,
    title: &str,
    input: &Input,
    placeholder: &str,
    focused: bool,
    theme: &Theme,
) {
    let border_colour = if focused {
        theme.accent_colour
    } else {
        theme.border_colour
    };

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_colour));
    let inner = block.inner(area);

    // Keep the cursor in view when the value is wider than the field.
    let width = usize::from(inner.width.max(1));
    let scroll = input.visual_scroll(width);

    let paragraph = if input.value().is_empty() && !focused {
        Paragraph::new(placeholder).style(Style::default().fg(theme.muted_colour))
    } else {
        Paragraph::new(input.value())
            .style(Style::default().fg(theme.foreground_colour))
            .scroll((0, u16::try_from(scroll).unwrap_or(u16::MAX)))
    };

    f.render_widget(paragraph.block(block), area);

    if focused {
        let offset = input.visual_cursor().saturating_sub(scroll);
        let cursor_x = inner.x + u16::try_from(offset).unwrap_or(0);
        f.set_cursor_position((cursor_x, inner.y));
    }
}
