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

//! Domain models and core data structures.
//!
//! This module defines the task entity and the two visibility settings (the
//! status filter and the date view). The owned application state built from
//! these lives in [`tasks`], its persisted form in [`snapshot`], and the
//! derivation of the visible subset in [`view`].

pub(crate) mod snapshot;
pub(crate) mod tasks;
pub(crate) mod view;

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

pub(crate) type TaskId = u64;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Task {
    pub(crate) id: TaskId,
    pub(crate) text: String,
    #[serde(default)]
    pub(crate) done: bool,
    #[serde(default)]
    pub(crate) due_date: Option<String>,
}

impl Task {
    /// A task is overdue when it is still open and its due date is strictly
    /// before `today`.
    pub(crate) fn is_overdue(&self, today: &str) -> bool {
        !self.done
            && self
                .due_date
                .as_deref()
                .is_some_and(|due| due < today)
    }
}

/// Status-based visibility rule.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum StatusFilter {
    #[default]
    All,
    Todo,
    Done,
}

/// Date-window visibility rule.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum DateView {
    #[default]
    All,
    Today,
    Week,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct UnknownValue(pub(crate) String);

impl fmt::Display for UnknownValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown value '{}'", self.0)
    }
}

impl StatusFilter {
    pub(crate) const ALL: [StatusFilter; 3] =
        [StatusFilter::All, StatusFilter::Todo, StatusFilter::Done];

    pub(crate) fn as_str(self) -> &'static str {
        match self {
            StatusFilter::All => "all",
            StatusFilter::Todo => "todo",
            StatusFilter::Done => "done",
        }
    }

    pub(crate) fn label(self) -> &'static str {
        match self {
            StatusFilter::All => "All",
            StatusFilter::Todo => "To do",
            StatusFilter::Done => "Done",
        }
    }
}

impl FromStr for StatusFilter {
    type Err = UnknownValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(StatusFilter::All),
            "todo" => Ok(StatusFilter::Todo),
            "done" => Ok(StatusFilter::Done),
            other => Err(UnknownValue(other.to_string())),
        }
    }
}

impl DateView {
    pub(crate) const ALL: [DateView; 3] = [DateView::All, DateView::Today, DateView::Week];

    pub(crate) fn as_str(self) -> &'static str {
        match self {
            DateView::All => "all",
            DateView::Today => "today",
            DateView::Week => "week",
        }
    }

    pub(crate) fn label(self) -> &'static str {
        match self {
            DateView::All => "Any date",
            DateView::Today => "Today",
            DateView::Week => "7 days",
        }
    }
}

impl FromStr for DateView {
    type Err = UnknownValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(DateView::All),
            "today" => Ok(DateView::Today),
            "week" => Ok(DateView::Week),
            other => Err(UnknownValue(other.to_string())),
        }
    }
}
