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

//! Terminal environment and styling utilities.
//!
//! This module changes the terminal emulator's background colour with OSC
//! (Operating System Command) escape sequences, so switching between the
//! light and dark themes repaints the whole window and not only the cells
//! ratatui draws.
//!
//! # Compatibility
//!
//! Most modern terminals (XTerm, iTerm2, Alacritty, Kitty) support these
//! sequences. Terminals that do not simply ignore them.

use std::io::{self, Write};

use tracing::warn;

/// Sets the terminal background colour using an OSC 11 escape sequence.
///
/// # Arguments
///
/// * `hex_color` - A string slice representing the colour (e.g., `"#1e1e1e"`).
pub(crate) fn set_terminal_bg(hex_color: &str) {
    let mut stdout = io::stdout();
    if let Err(e) = write!(stdout, "\x1b]11;{}\x07", hex_color).and_then(|_| stdout.flush()) {
        warn!(error = %e, "failed to set terminal background");
    }
}

/// Resets the terminal background to its default colour (OSC 111).
pub(crate) fn reset_terminal_bg() {
    let mut stdout = io::stdout();
    if let Err(e) = write!(stdout, "\x1b]111\x07").and_then(|_| stdout.flush()) {
        warn!(error = %e, "failed to reset terminal background");
    }
}
