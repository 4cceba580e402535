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

//! Filter, view and theme controls.
//!
//! A single line of mutually exclusive status filters, mutually exclusive
//! date views, and the theme toggle. Which control is marked active is
//! re-synced from the application state before every draw, and the screen
//! region of each control is remembered so mouse clicks can be mapped back
//! to it.

mod render;

use crossterm::event::{Event, MouseButton, MouseEventKind};
use ratatui::layout::Rect;

use crate::{
    model::{DateView, StatusFilter},
    theme::ThemeMode,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ControlTarget {
    Filter(StatusFilter),
    View(DateView),
    Theme,
}

#[derive(Debug, Default)]
pub(crate) struct Controls {
    pub(crate) active_filter: StatusFilter,
    pub(crate) active_view: DateView,
    pub(crate) theme_mode: ThemeMode,
    /// Screen regions of the controls as last drawn.
    pub(crate) regions: Vec<(Rect, ControlTarget)>,
}

impl Controls {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn sync(&mut self, filter: StatusFilter, view: DateView, theme_mode: ThemeMode) {
        self.active_filter = filter;
        self.active_view = view;
        self.theme_mode = theme_mode;
    }

    pub(crate) fn target_at(&self, column: u16, row: u16) -> Option<ControlTarget> {
        self.regions
            .iter()
            .find(|(rect, _)| {
                column >= rect.x && column < rect.right() && row >= rect.y && row < rect.bottom()
            })
            .map(|(_, target)| *target)
    }

    pub(crate) fn process_event(&self, event: &Event) -> Option<ControlTarget> {
        match event {
            Event::Mouse(mouse_event)
                if mouse_event.kind == MouseEventKind::Down(MouseButton::Left) =>
            {
                self.target_at(mouse_event.column, mouse_event.row)
            }
            _ => None,
        }
    }
}

/// Keyboard shortcut shown next to each control.
pub(crate) fn shortcut(target: ControlTarget) -> char {
    match target {
        ControlTarget::Filter(StatusFilter::All) => '1',
        ControlTarget::Filter(StatusFilter::Todo) => '2',
        ControlTarget::Filter(StatusFilter::Done) => '3',
        ControlTarget::View(DateView::All) => '4',
        ControlTarget::View(DateView::Today) => '5',
        ControlTarget::View(DateView::Week) => '6',
        ControlTarget::Theme => 't',
    }
}

/// Reverse of [`shortcut`].
pub(crate) fn target_for_key(c: char) -> Option<ControlTarget> {
    let target = match c {
        '1' => ControlTarget::Filter(StatusFilter::All),
        '2' => ControlTarget::Filter(StatusFilter::Todo),
        '3' => ControlTarget::Filter(StatusFilter::Done),
        '4' => ControlTarget::View(DateView::All),
        '5' => ControlTarget::View(DateView::Today),
        '6' => ControlTarget::View(DateView::Week),
        't' => ControlTarget::Theme,
        _ => return None,
    };
    Some(target)
}
