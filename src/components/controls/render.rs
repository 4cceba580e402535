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

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::{
    components::{ControlTarget, Controls, controls::shortcut},
    model::{DateView, StatusFilter},
    render::Render,
    theme::Theme,
};

const SEPARATOR: &str = " \u{2502} ";

impl Render for Controls {
    fn draw(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        self.regions.clear();

        let (active_filter, active_view) = (self.active_filter, self.active_view);
        let filters = StatusFilter::ALL
            .into_iter()
            .map(|filter| (ControlTarget::Filter(filter), filter.label(), filter == active_filter));
        let views = DateView::ALL
            .into_iter()
            .map(|view| (ControlTarget::View(view), view.label(), view == active_view));

        let mut spans = Vec::new();
        let mut x = area.x;

        for (i, (target, label, active)) in filters.chain(views).enumerate() {
            if i == StatusFilter::ALL.len() {
                spans.push(Span::styled(SEPARATOR, Style::default().fg(theme.border_colour)));
                x += width_of(SEPARATOR);
            }

            let span = control_span(target, label, active, theme);
            let width = width_of(&span.content);
            self.regions.push((Rect::new(x, area.y, width, 1).intersection(area), target));
            x += width;
            spans.push(span);
        }

        f.render_widget(Paragraph::new(Line::from(spans)), area);

        let glyph = format!(" {} [{}] ", self.theme_mode.glyph(), shortcut(ControlTarget::Theme));
        let glyph_width = width_of(&glyph);
        let glyph_area = Rect::new(
            area.right().saturating_sub(glyph_width),
            area.y,
            glyph_width.min(area.width),
            1,
        );
        self.regions.push((glyph_area, ControlTarget::Theme));

        f.render_widget(
            Paragraph::new(glyph)
                .style(Style::default().fg(theme.muted_colour))
                .alignment(Alignment::Right),
            glyph_area,
        );
    }
}

fn control_span(target: ControlTarget, label: &str, active: bool, theme: &Theme) -> Span<'static> {
    let text = format!(" [{}] {} ", shortcut(target), label);
    let style = if active {
        Style::default()
            .fg(theme.background_colour)
            .bg(theme.accent_colour)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.muted_colour)
    };
    Span::styled(text, style)
}

fn width_of(text: &str) -> u16 {
    u16::try_from(Span::raw(text).width()).unwrap_or(u16::MAX)
}

#[cfg(test)]
mod tests {
    use ratatui::{Terminal, backend::TestBackend};

    use super::*;
    use crate::theme::ThemeMode;

    fn draw(controls: &mut Controls, theme: &Theme) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 1)).unwrap();
        terminal
            .draw(|f| {
                let area = f.area();
                controls.draw(f, area, theme);
            })
            .unwrap();

        let buf = terminal.backend().buffer();
        (0..buf.area.width).map(|x| buf[(x, 0)].symbol()).collect()
    }

    #[test]
    fn draws_every_control_and_remembers_regions() {
        let mut controls = Controls::new();
        controls.sync(StatusFilter::Todo, DateView::Week, ThemeMode::Light);

        let line = draw(&mut controls, &Theme::light());
        assert!(line.contains("[2] To do"));
        assert!(line.contains("[6] 7 days"));

        // Six tabs plus the theme toggle.
        assert_eq!(controls.regions.len(), 7);
        let (todo_rect, _) = controls.regions[1];
        assert_eq!(
            controls.target_at(todo_rect.x + 1, 0),
            Some(ControlTarget::Filter(StatusFilter::Todo))
        );
        assert_eq!(controls.target_at(99, 0), Some(ControlTarget::Theme));
    }

    #[test]
    fn active_controls_are_highlighted() {
        let theme = Theme::light();
        let mut controls = Controls::new();
        controls.sync(StatusFilter::Done, DateView::Today, ThemeMode::Light);

        let mut terminal = Terminal::new(TestBackend::new(100, 1)).unwrap();
        terminal
            .draw(|f| {
                let area = f.area();
                controls.draw(f, area, &theme);
            })
            .unwrap();
        let buf = terminal.backend().buffer();

        let highlighted: Vec<ControlTarget> = controls
            .regions
            .iter()
            .filter(|(rect, _)| buf[(rect.x + 1, 0)].bg == theme.accent_colour)
            .map(|(_, target)| *target)
            .collect();

        assert_eq!(
            highlighted,
            [
                ControlTarget::Filter(StatusFilter::Done),
                ControlTarget::View(DateView::Today)
            ]
        );
    }
}
