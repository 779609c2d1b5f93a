//! RGB color values parsed from hex notation.
//!
//! Palettes store colors as `#rrggbb` strings in theme files; this module
//! parses them into [`Color`] values and converts them to the nearest
//! ANSI 256-color palette index for terminal output.

use std::fmt;
use std::str::FromStr;

use serde::de::{self, Deserializer, Visitor};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

/// An RGB color parsed from `#rrggbb` hex notation.
///
/// Colors serialize back to the same hex notation, so a round-trip through
/// a theme file preserves the original text.
///
/// # Example
///
/// ```rust
/// use retheme::Color;
///
/// let blue: Color = "#1976d2".parse().unwrap();
/// assert_eq!(blue.to_string(), "#1976d2");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    /// Creates a color from RGB components.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses a `#rrggbb` hex string.
    ///
    /// # Errors
    ///
    /// Returns [`ColorParseError`] if the string is not a `#` followed by
    /// exactly six hex digits.
    pub fn from_hex(s: &str) -> Result<Self, ColorParseError> {
        let err = || ColorParseError {
            value: s.to_string(),
        };

        let digits = s.strip_prefix('#').ok_or_else(err)?;
        if digits.len() != 6 || !digits.is_ascii() {
            return Err(err());
        }

        let r = u8::from_str_radix(&digits[0..2], 16).map_err(|_| err())?;
        let g = u8::from_str_radix(&digits[2..4], 16).map_err(|_| err())?;
        let b = u8::from_str_radix(&digits[4..6], 16).map_err(|_| err())?;

        Ok(Self { r, g, b })
    }

    /// Converts this color to the nearest ANSI 256-color palette index.
    ///
    /// Grayscale values map to the grayscale ramp (232-255) with the extremes
    /// clamped to the color cube corners; everything else maps into the
    /// 6x6x6 color cube (16-231).
    ///
    /// # Example
    ///
    /// ```rust
    /// use retheme::Color;
    ///
    /// // Pure red maps to ANSI 196
    /// assert_eq!(Color::new(255, 0, 0).to_ansi256(), 196);
    ///
    /// // Pure green maps to ANSI 46
    /// assert_eq!(Color::new(0, 255, 0).to_ansi256(), 46);
    /// ```
    pub fn to_ansi256(self) -> u8 {
        let (r, g, b) = (self.r, self.g, self.b);
        if r == g && g == b {
            if r < 8 {
                16
            } else if r > 248 {
                231
            } else {
                232 + ((r as u16 - 8) * 24 / 247) as u8
            }
        } else {
            let red = (r as u16 * 5 / 255) as u8;
            let green = (g as u16 * 5 / 255) as u8;
            let blue = (b as u16 * 5 / 255) as u8;
            16 + 36 * red + 6 * green + blue
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct HexVisitor;

        impl Visitor<'_> for HexVisitor {
            type Value = Color;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a hex color string like \"#1976d2\"")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Color, E> {
                Color::from_hex(v).map_err(E::custom)
            }
        }

        deserializer.deserialize_str(HexVisitor)
    }
}

/// Error returned when a hex color string is malformed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorParseError {
    /// The string that failed to parse.
    pub value: String,
}

impl fmt::Display for ColorParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid hex color '{}': expected '#' followed by six hex digits",
            self.value
        )
    }
}

impl std::error::Error for ColorParseError {}
