//! Theme records: a named pair of light and dark palettes.

use serde::{Deserialize, Serialize};

use super::palette::{Mode, Palette};
use crate::color::Color;

/// A named visual theme with one palette per color mode.
///
/// A theme file on disk is exactly this record serialized as JSON, so themes
/// can be defined either in code or dropped into a theme directory and
/// discovered at startup.
///
/// # Example
///
/// ```rust
/// use retheme::{Mode, Theme};
///
/// let theme = Theme::built_in_default();
/// assert_eq!(theme.name(), "default");
/// assert_eq!(theme.palette(Mode::Light).primary.to_string(), "#1976d2");
/// assert_eq!(theme.palette(Mode::Dark).primary.to_string(), "#90caf9");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    name: String,
    light: Palette,
    dark: Palette,
}

impl Theme {
    /// Creates a theme from its name and mode palettes.
    pub fn new(name: impl Into<String>, light: Palette, dark: Palette) -> Self {
        Self {
            name: name.into(),
            light,
            dark,
        }
    }

    /// The theme's registry name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the palette for the given mode.
    pub fn palette(&self, mode: Mode) -> &Palette {
        match mode {
            Mode::Light => &self.light,
            Mode::Dark => &self.dark,
        }
    }

    /// The built-in theme registered under the reserved name `default`.
    ///
    /// Blue primary accents (night-sky backgrounds in dark mode), pink
    /// secondary in both modes.
    pub fn built_in_default() -> Self {
        Self::new(
            crate::registry::DEFAULT_THEME_NAME,
            Palette {
                primary: Color::new(0x19, 0x76, 0xd2),
                secondary: Color::new(0xff, 0x40, 0x81),
                background: Color::new(0xf4, 0xf4, 0xf4),
                surface: Color::new(0xff, 0xff, 0xff),
                text_primary: Color::new(0x1c, 0x1c, 0x1c),
                text_secondary: Color::new(0x66, 0x66, 0x66),
            },
            Palette {
                primary: Color::new(0x90, 0xca, 0xf9),
                secondary: Color::new(0xff, 0x40, 0x81),
                background: Color::new(0x0d, 0x1b, 0x2a),
                surface: Color::new(0x1b, 0x26, 0x3b),
                text_primary: Color::new(0xff, 0xff, 0xff),
                text_secondary: Color::new(0xa9, 0xbc, 0xd0),
            },
        )
    }
}
