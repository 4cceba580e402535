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

//! Calendar date helpers.
//!
//! Due dates are stored as zero-padded `YYYY-MM-DD` strings. Because the
//! format is fixed width, comparing two of these strings lexicographically
//! gives the same answer as comparing the dates, which the view filters rely
//! on.

use chrono::{Days, Local, NaiveDate, NaiveTime};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Returns the current local date as `YYYY-MM-DD`.
pub(crate) fn today() -> String {
    date_key(Local::now().date_naive())
}

/// Returns the local date `n` days after today as `YYYY-MM-DD`.
///
/// The arithmetic starts from midday rather than the current instant, so a
/// daylight saving shift can never push the result onto a neighbouring day.
pub(crate) fn days_from_now(n: u64) -> String {
    let today = Local::now().date_naive();

    NaiveTime::from_hms_opt(12, 0, 0)
        .map(|noon| today.and_time(noon))
        .and_then(|midday| midday.checked_add_days(Days::new(n)))
        .map(|d| date_key(d.date()))
        .unwrap_or_else(|| offset_from(today, n))
}

/// Returns the date `n` days after `date` as `YYYY-MM-DD`.
pub(crate) fn offset_from(date: NaiveDate, n: u64) -> String {
    date_key(date.checked_add_days(Days::new(n)).unwrap_or(date))
}

pub(crate) fn date_key(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Parses a `YYYY-MM-DD` string, rejecting anything that is not a real date.
pub(crate) fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, DATE_FORMAT).ok()
}

/// Reformats a stored `YYYY-MM-DD` date as `DD/MM/YYYY`.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(format_for_display("2026-03-09"), "09/03/2026");
/// ```
pub(crate) fn format_for_display(date: &str) -> String {
    let mut parts = date.splitn(3, '-');
    let year = parts.next().unwrap_or_default();
    let month = parts.next().unwrap_or_default();
    let day = parts.next().unwrap_or_default();
    format!("{day}/{month}/{year}")
}
