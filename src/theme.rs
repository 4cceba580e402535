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

//! Visual styling and colour configuration for the TUI.
//!
//! This module defines the light and dark colour palettes, the small state
//! machine switching between them, and utilities for converting colours
//! between Ratatui's internal representation and the hexadecimal strings used
//! for terminal emulator styling.
//!
//! The theme is persisted on its own key, independently of the task state.

use std::{fmt, str::FromStr};

use ratatui::style::Color;
use tracing::{error, info, warn};

use crate::{
    model::UnknownValue,
    storage::{KeyValueStore, StoreError, THEME_KEY},
    util::term,
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub(crate) fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    pub(crate) fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    /// Glyph shown on the toggle, hinting at the mode it switches to.
    pub(crate) fn glyph(self) -> &'static str {
        match self {
            ThemeMode::Light => "\u{1F319}",
            ThemeMode::Dark => "\u{2600}\u{FE0F}",
        }
    }

    pub(crate) fn palette(self) -> Theme {
        match self {
            ThemeMode::Light => Theme::light(),
            ThemeMode::Dark => Theme::dark(),
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeMode {
    type Err = UnknownValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(ThemeMode::Light),
            "dark" => Ok(ThemeMode::Dark),
            other => Err(UnknownValue(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Theme {
    pub(crate) background_colour: Color,
    pub(crate) foreground_colour: Color,
    pub(crate) accent_colour: Color,
    pub(crate) border_colour: Color,
    pub(crate) muted_colour: Color,
    pub(crate) selection_colour: Color,

    pub(crate) done_fg: Color,
    pub(crate) overdue_fg: Color,
    pub(crate) date_fg: Color,
    pub(crate) badge_fg: Color,
    pub(crate) delete_fg: Color,
}

impl Theme {
    pub(crate) const fn light() -> Self {
        Self {
            background_colour: Color::Rgb(246, 244, 240),
            foreground_colour: Color::Rgb(40, 40, 48),
            accent_colour: Color::Rgb(88, 86, 214),
            border_colour: Color::Rgb(190, 186, 180),
            muted_colour: Color::Rgb(130, 128, 136),
            selection_colour: Color::Rgb(226, 224, 246),

            done_fg: Color::Rgb(150, 150, 150),
            overdue_fg: Color::Rgb(200, 40, 50),
            date_fg: Color::Rgb(100, 110, 130),
            badge_fg: Color::Rgb(88, 86, 214),
            delete_fg: Color::Rgb(190, 60, 60),
        }
    }

    pub(crate) const fn dark() -> Self {
        Self {
            background_colour: Color::Rgb(30, 30, 36),
            foreground_colour: Color::Rgb(230, 230, 235),
            accent_colour: Color::Rgb(250, 189, 47),
            border_colour: Color::Rgb(102, 102, 102),
            muted_colour: Color::Rgb(162, 161, 166),
            selection_colour: Color::Rgb(55, 50, 70),

            done_fg: Color::Rgb(110, 110, 115),
            overdue_fg: Color::Rgb(255, 110, 100),
            date_fg: Color::Rgb(179, 157, 219),
            badge_fg: Color::Rgb(250, 189, 47),
            delete_fg: Color::Rgb(255, 120, 120),
        }
    }

    /// Converts a [`ratatui::style::Color`] into a CSS-style hexadecimal
    /// string.
    ///
    /// This is used to set the terminal emulator's background colour via
    /// escape sequences. Non-RGB colours have no fixed value, so `None` is
    /// returned for them.
    pub(crate) fn to_hex(colour: Color) -> Option<String> {
        match colour {
            Color::Rgb(r, g, b) => Some(format!("#{:02x}{:02x}{:02x}", r, g, b)),
            _ => None,
        }
    }
}

/// Holds the current [`ThemeMode`] and keeps the terminal and the store in
/// step with it.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct ThemeController {
    mode: ThemeMode,
}

impl ThemeController {
    /// Reads the persisted mode, falling back to light when nothing (or
    /// something unrecognised) is stored.
    pub(crate) fn load(store: &dyn KeyValueStore) -> Self {
        let mode = match store.get(THEME_KEY) {
            Ok(Some(raw)) => raw.parse().unwrap_or_else(|e| {
                warn!(%e, "ignoring stored theme");
                ThemeMode::default()
            }),
            Ok(None) => ThemeMode::default(),
            Err(e) => {
                error!(error = %e, "failed to read theme");
                ThemeMode::default()
            }
        };

        Self { mode }
    }

    pub(crate) fn mode(&self) -> ThemeMode {
        self.mode
    }

    pub(crate) fn palette(&self) -> Theme {
        self.mode.palette()
    }

    /// Flips between light and dark and persists the new mode.
    ///
    /// The in-memory mode changes even if the write fails.
    pub(crate) fn toggle(&mut self, store: &mut dyn KeyValueStore) -> Result<ThemeMode, StoreError> {
        self.mode = self.mode.toggled();
        info!(theme = %self.mode, "theme changed");
        store.set(THEME_KEY, self.mode.as_str())?;
        Ok(self.mode)
    }

    /// Pushes the palette background to the terminal emulator.
    pub(crate) fn apply_to_terminal(&self) {
        if let Some(hex) = Theme::to_hex(self.palette().background_colour) {
            term::set_terminal_bg(&hex);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn defaults_to_light_without_stored_value() {
        let store = MemoryStore::new();
        assert_eq!(ThemeController::load(&store).mode(), ThemeMode::Light);
    }

    #[test]
    fn palettes_follow_the_mode() {
        let light = ThemeController::load(&MemoryStore::new()).palette();
        assert_eq!(light.background_colour, Theme::light().background_colour);
        assert_eq!(ThemeMode::Dark.palette().background_colour, Theme::dark().background_colour);
        assert_ne!(light.background_colour, Theme::dark().background_colour);
    }

    #[test]
    fn unknown_stored_value_falls_back_to_light() {
        let mut store = MemoryStore::new();
        store.set(THEME_KEY, "sepia").unwrap();
        assert_eq!(ThemeController::load(&store).mode(), ThemeMode::Light);
    }

    #[test]
    fn toggle_persists_and_reloads() {
        let mut store = MemoryStore::new();
        let mut controller = ThemeController::load(&store);

        assert_eq!(controller.toggle(&mut store).unwrap(), ThemeMode::Dark);
        assert_eq!(store.get(THEME_KEY).unwrap().as_deref(), Some("dark"));
        assert_eq!(ThemeController::load(&store).mode(), ThemeMode::Dark);

        assert_eq!(controller.toggle(&mut store).unwrap(), ThemeMode::Light);
        assert_eq!(store.get(THEME_KEY).unwrap().as_deref(), Some("light"));
    }

    #[test]
    fn glyph_points_at_the_other_mode() {
        assert_eq!(ThemeMode::Light.glyph(), "\u{1F319}");
        assert_eq!(ThemeMode::Dark.glyph(), "\u{2600}\u{FE0F}");
    }

    #[test]
    fn to_hex_formats_rgb() {
        assert_eq!(Theme::to_hex(Color::Rgb(40, 20, 5)).as_deref(), Some("#281405"));
        assert_eq!(Theme::to_hex(Color::Reset), None);
    }
}
