//! Presentational widgets: styled terminal renditions of the registry and
//! the active selection.
//!
//! This module provides:
//!
//! - [`theme_card`]: one theme as a single line with palette swatches
//! - [`theme_list`]: a card per registered theme, active theme marked
//! - [`mode_switch`]: the dark-mode toggle row
//!
//! Widgets render through minijinja templates with console-backed filters
//! (see the `swatch`, `paint` and `strong` filters), so their output honors
//! the terminal's color support.

mod card;
mod filters;
mod list;
mod switch;

pub use card::theme_card;
pub use list::theme_list;
pub use switch::mode_switch;

use crate::theme::Mode;

/// The brightness glyph shown next to a mode.
fn mode_glyph(mode: Mode) -> &'static str {
    match mode {
        Mode::Light => "☀",
        Mode::Dark => "☾",
    }
}
