//! Single-theme preview card.

use serde::Serialize;

use super::filters::environment;
use super::mode_glyph;
use crate::theme::{Mode, Theme};
use crate::util::truncate_to_width;

/// Display width budget for the theme name.
const NAME_WIDTH: usize = 20;

const CARD_TEMPLATE: &str = "{{ primary | swatch }}{{ background | swatch }}{{ secondary | swatch }} \
     {{ check | paint(primary) }} {{ name | strong(text) }} {{ glyph | paint(muted) }}";

#[derive(Serialize)]
struct CardData {
    name: String,
    check: &'static str,
    glyph: &'static str,
    primary: String,
    background: String,
    secondary: String,
    text: String,
    muted: String,
}

/// Renders one theme as a single styled line.
///
/// The line previews the theme's palette in the given mode: swatch blocks
/// for primary, background and secondary colors, the theme name in the
/// palette's text color, a check mark when the theme is active, and the mode
/// glyph.
///
/// # Errors
///
/// Returns a template error; with the built-in templates this only happens
/// if rendering itself fails.
pub fn theme_card(theme: &Theme, mode: Mode, active: bool) -> Result<String, minijinja::Error> {
    let palette = theme.palette(mode);
    let data = CardData {
        name: truncate_to_width(theme.name(), NAME_WIDTH),
        check: if active { "✔" } else { " " },
        glyph: mode_glyph(mode),
        primary: palette.primary.to_string(),
        background: palette.background.to_string(),
        secondary: palette.secondary.to_string(),
        text: palette.text_primary.to_string(),
        muted: palette.text_secondary.to_string(),
    };

    let mut env = environment();
    env.add_template("card", CARD_TEMPLATE)?;
    env.get_template("card")?.render(&data)
}
