//! Theme list rendering.

use super::card::theme_card;
use crate::provider::ThemeProvider;

/// Renders every registered theme as a card, one per line, sorted by name.
///
/// Each theme is previewed in the provider's active mode, and the active
/// theme carries a check mark.
///
/// # Errors
///
/// Propagates template errors from [`theme_card`].
pub fn theme_list(provider: &ThemeProvider) -> Result<String, minijinja::Error> {
    let mut themes: Vec<_> = provider.registry().themes().collect();
    themes.sort_by(|a, b| a.name().cmp(b.name()));

    let mut lines = Vec::with_capacity(themes.len());
    for theme in themes {
        let active = theme.name() == provider.theme_name();
        lines.push(theme_card(theme, provider.mode(), active)?);
    }

    Ok(lines.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::Registry;
    use crate::storage::MemoryStorage;
    use crate::theme::{Mode, Theme};
    use console::strip_ansi_codes;

    fn provider_with_ocean() -> ThemeProvider {
        let mut registry = Registry::with_default();
        let default = Theme::built_in_default();
        registry.add(Theme::new(
            "ocean",
            default.palette(Mode::Light).clone(),
            default.palette(Mode::Dark).clone(),
        ));
        ThemeProvider::new(registry, MemoryStorage::new())
    }

    #[test]
    fn test_list_is_sorted_and_complete() {
        let provider = provider_with_ocean();
        let out = theme_list(&provider).unwrap();
        let plain = strip_ansi_codes(&out).to_string();

        let lines: Vec<&str> = plain.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("default"));
        assert!(lines[1].contains("ocean"));
    }

    #[test]
    fn test_list_marks_only_active_theme() {
        let mut provider = provider_with_ocean();
        provider.set_theme("ocean", Mode::Dark).unwrap();

        let out = theme_list(&provider).unwrap();
        let plain = strip_ansi_codes(&out).to_string();

        let marked: Vec<&str> = plain.lines().filter(|l| l.contains('✔')).collect();
        assert_eq!(marked.len(), 1);
        assert!(marked[0].contains("ocean"));
    }
}
