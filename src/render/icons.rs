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

//! Unicode symbols for the TUI.
//!
//! These are selected for compatibility with most modern terminal emulators
//! and fonts, and are all a single cell wide so the list columns line up.

pub(crate) const ICON_DELETE: &str = "\u{2715}";
pub(crate) const ICON_DONE: &str = "\u{2713}";
pub(crate) const ICON_OPEN: &str = "\u{25CB}";
pub(crate) const ICON_OVERDUE: &str = "!";
