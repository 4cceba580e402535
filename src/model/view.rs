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

//! Derivation of the visible task subset.
//!
//! The status filter runs first, then the date window. Both stages keep the
//! collection's relative order. The date bounds come from a [`DateWindow`]
//! rather than being read from the clock inside the filter, so callers (and
//! tests) decide what "now" is.

use crate::{
    model::{DateView, StatusFilter, Task},
    util::dates,
};

/// Length of the `week` window, inclusive of both ends.
pub(crate) const WEEK_SPAN_DAYS: u64 = 7;

/// The `YYYY-MM-DD` bounds used by the date views.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct DateWindow {
    pub(crate) today: String,
    pub(crate) week_end: String,
}

impl DateWindow {
    /// The window as of the local clock.
    pub(crate) fn current() -> Self {
        Self {
            today: dates::today(),
            week_end: dates::days_from_now(WEEK_SPAN_DAYS),
        }
    }

    /// The window as if `today` were the current date.
    #[cfg(test)]
    pub(crate) fn starting(today: chrono::NaiveDate) -> Self {
        Self {
            today: dates::date_key(today),
            week_end: dates::offset_from(today, WEEK_SPAN_DAYS),
        }
    }
}

pub(crate) fn visible_tasks<'a>(
    tasks: &'a [Task],
    filter: StatusFilter,
    view: DateView,
    window: &DateWindow,
) -> Vec<&'a Task> {
    tasks
        .iter()
        .filter(|task| matches_filter(task, filter))
        .filter(|task| matches_view(task, view, window))
        .collect()
}

fn matches_filter(task: &Task, filter: StatusFilter) -> bool {
    match filter {
        StatusFilter::All => true,
        StatusFilter::Todo => !task.done,
        StatusFilter::Done => task.done,
    }
}

fn matches_view(task: &Task, view: DateView, window: &DateWindow) -> bool {
    match (view, task.due_date.as_deref()) {
        (DateView::All, _) => true,
        (DateView::Today, Some(due)) => due == window.today,
        (DateView::Week, Some(due)) => {
            window.today.as_str() <= due && due <= window.week_end.as_str()
        }
        (_, None) => false,
    }
}
