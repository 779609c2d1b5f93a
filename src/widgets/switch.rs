//! Dark mode switch rendering.

use serde::Serialize;

use super::filters::environment;
use super::mode_glyph;
use crate::theme::Mode;

const SWITCH_TEMPLATE: &str = "{{ glyph }} Dark mode [{{ state }}]";

#[derive(Serialize)]
struct SwitchData {
    glyph: &'static str,
    state: &'static str,
}

/// Renders the dark-mode toggle row for the given mode.
///
/// # Example
///
/// ```rust
/// use retheme::{widgets, Mode};
///
/// assert_eq!(widgets::mode_switch(Mode::Dark).unwrap(), "☾ Dark mode [on]");
/// assert_eq!(widgets::mode_switch(Mode::Light).unwrap(), "☀ Dark mode [off]");
/// ```
///
/// # Errors
///
/// Returns a template error; with the built-in template this only happens if
/// rendering itself fails.
pub fn mode_switch(mode: Mode) -> Result<String, minijinja::Error> {
    let data = SwitchData {
        glyph: mode_glyph(mode),
        state: if mode.is_dark() { "on" } else { "off" },
    };

    let mut env = environment();
    env.add_template("switch", SWITCH_TEMPLATE)?;
    env.get_template("switch")?.render(&data)
}
