//! MiniJinja filter registration for widget templates.

use console::Style;
use minijinja::{Environment, Value};

use crate::color::Color;

/// Characters used for a color swatch block.
const SWATCH_BLOCK: &str = "██";

fn style_for(hex: &str) -> Style {
    match Color::from_hex(hex) {
        Ok(color) => Style::new().color256(color.to_ansi256()),
        // Palette colors always serialize as valid hex; an unparsable value
        // can only come from a hand-built template, so render it unstyled.
        Err(_) => Style::new(),
    }
}

/// Registers the widget filters on a minijinja environment.
pub(crate) fn register_filters(env: &mut Environment<'static>) {
    // {{ "#1976d2" | swatch }} renders a block of that color
    env.add_filter("swatch", |hex: String| -> String {
        style_for(&hex).apply_to(SWATCH_BLOCK).to_string()
    });

    // {{ name | paint(hex) }} renders the value in that color
    env.add_filter("paint", |value: Value, hex: String| -> String {
        style_for(&hex).apply_to(value.to_string()).to_string()
    });

    // {{ name | strong(hex) }} renders the value bold in that color
    env.add_filter("strong", |value: Value, hex: String| -> String {
        style_for(&hex)
            .bold()
            .apply_to(value.to_string())
            .to_string()
    });
}

/// Creates a widget template environment with all filters registered.
pub(crate) fn environment() -> Environment<'static> {
    let mut env = Environment::new();
    register_filters(&mut env);
    env
}
