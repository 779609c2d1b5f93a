//! Color modes and palette records.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::color::Color;

/// The user's preferred color mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Light,
    Dark,
}

impl Mode {
    /// Returns the opposite mode.
    pub fn toggle(self) -> Self {
        match self {
            Mode::Light => Mode::Dark,
            Mode::Dark => Mode::Light,
        }
    }

    /// Returns true for [`Mode::Dark`].
    pub fn is_dark(self) -> bool {
        matches!(self, Mode::Dark)
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Light => f.write_str("light"),
            Mode::Dark => f.write_str("dark"),
        }
    }
}

/// The concrete style record a theme produces for one mode.
///
/// Field names follow the usual application palette roles: `surface` is the
/// background of raised elements (cards, panels) as opposed to the window
/// `background`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    /// Primary accent color.
    pub primary: Color,
    /// Secondary accent color.
    pub secondary: Color,
    /// Window background.
    pub background: Color,
    /// Background of raised elements.
    pub surface: Color,
    /// Main text color.
    pub text_primary: Color,
    /// De-emphasized text color.
    pub text_secondary: Color,
}
