//! Theme registry: the in-memory map from theme name to definition.
//!
//! The registry is populated once at startup from up to three sources:
//!
//! 1. **Built-ins**: [`Registry::with_default`] seeds the reserved `default`
//!    theme.
//! 2. **Programmatic registration**: [`Registry::add`] registers a theme
//!    built in code; it always wins, including over the built-in.
//! 3. **Filesystem discovery**: [`Registry::load_dir`] scans a directory for
//!    `*.json` theme files and registers each under its declared name.
//!
//! # Lookup and fallback
//!
//! [`Registry::resolve`] is the single lookup operation: an unknown theme
//! name falls back to the `default` theme with a logged warning, and only a
//! missing default is a hard error ([`RegistryError::DefaultMissing`]).
//!
//! # Collision handling
//!
//! Theme names declared by files in two *different* source directories are a
//! configuration error reported with both paths; a duplicate within one
//! directory keeps the first file (discovery order is sorted by path) and
//! logs a warning. A file re-declaring the built-in `default` overrides it
//! silently, while names registered through [`Registry::add`] are pinned:
//! a file re-declaring one is skipped with a logged warning, whatever the
//! call order.

use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::theme::{Mode, Palette, Theme};

mod discover;

pub use discover::{walk_theme_dir, ThemeFile, THEME_EXTENSION};

/// Reserved name of the fallback theme.
pub const DEFAULT_THEME_NAME: &str = "default";

/// Error type for registry operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// The reserved `default` theme is not registered.
    ///
    /// This is a fatal configuration error: every fallback path ends here.
    DefaultMissing,

    /// A theme name was requested that is not registered.
    ///
    /// Returned by [`Registry::require`]; [`Registry::resolve`] falls back
    /// to the default theme instead.
    UnknownTheme {
        /// The name that was requested.
        name: String,
    },

    /// Two theme directories declare the same theme name.
    ///
    /// This is an unrecoverable configuration error that must be fixed by
    /// the application developer.
    Duplicate {
        /// The theme name that has conflicting sources
        name: String,
        /// Path to the existing theme file
        existing_path: PathBuf,
        /// Directory containing the existing theme file
        existing_dir: PathBuf,
        /// Path to the conflicting theme file
        conflicting_path: PathBuf,
        /// Directory containing the conflicting theme file
        conflicting_dir: PathBuf,
    },

    /// Failed to read a theme directory or file.
    Io {
        /// Path that failed to read
        path: PathBuf,
        /// Error message
        message: String,
    },
}

impl std::fmt::Display for RegistryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RegistryError::DefaultMissing => {
                write!(f, "the '{}' theme is not registered", DEFAULT_THEME_NAME)
            }
            RegistryError::UnknownTheme { name } => {
                write!(f, "unknown theme: \"{}\"", name)
            }
            RegistryError::Duplicate {
                name,
                existing_path,
                existing_dir,
                conflicting_path,
                conflicting_dir,
            } => {
                write!(
                    f,
                    "Theme name collision detected for \"{}\":\n  \
                     - {} (from {})\n  \
                     - {} (from {})",
                    name,
                    existing_path.display(),
                    existing_dir.display(),
                    conflicting_path.display(),
                    conflicting_dir.display()
                )
            }
            RegistryError::Io { path, message } => {
                write!(f, "Failed to read \"{}\": {}", path.display(), message)
            }
        }
    }
}

impl std::error::Error for RegistryError {}

/// In-memory mapping from theme name to its definition.
///
/// # Example
///
/// ```rust
/// use retheme::{Mode, Registry};
///
/// let registry = Registry::with_default();
///
/// // Known name resolves to its own palette
/// let palette = registry.resolve("default", Mode::Dark).unwrap();
/// assert_eq!(palette.primary.to_string(), "#90caf9");
///
/// // Unknown name falls back to the default theme
/// let fallback = registry.resolve("missing", Mode::Light).unwrap();
/// assert_eq!(fallback.primary.to_string(), "#1976d2");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Registry {
    /// Map from theme name to definition.
    themes: HashMap<String, Theme>,

    /// Tracks which file and source directory each discovered theme came
    /// from. Built-in and programmatically added themes have no entry.
    sources: HashMap<String, (PathBuf, PathBuf)>,

    /// Names registered through [`Registry::add`]. Discovery never replaces
    /// these; the built-in default is deliberately not in this set.
    pinned: HashSet<String>,
}

impl Registry {
    /// Creates an empty registry.
    ///
    /// Note that [`Registry::resolve`] on an empty registry always returns
    /// [`RegistryError::DefaultMissing`]; most applications want
    /// [`Registry::with_default`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry seeded with the built-in `default` theme.
    ///
    /// The seed is not pinned, so a theme directory can still ship its own
    /// `default` theme file.
    pub fn with_default() -> Self {
        let mut registry = Self::new();
        let theme = Theme::built_in_default();
        registry.themes.insert(theme.name().to_string(), theme);
        registry
    }

    /// Registers a theme under its declared name.
    ///
    /// Programmatic registration has the highest priority: it overwrites any
    /// existing theme with the same name, whatever its source, and pins the
    /// name so that later discovery cannot replace it.
    pub fn add(&mut self, theme: Theme) {
        self.sources.remove(theme.name());
        self.pinned.insert(theme.name().to_string());
        self.themes.insert(theme.name().to_string(), theme);
    }

    /// Discovers and registers theme files under a directory.
    ///
    /// Scans `root` recursively for `*.json` files and deserializes each as
    /// a [`Theme`]. Files that are unreadable or fail to parse are skipped
    /// with a logged warning, matching the lenient discovery contract: a
    /// broken theme file should not take the application down. Files
    /// re-declaring a name pinned by [`Registry::add`] are also skipped
    /// with a warning.
    ///
    /// Returns the number of themes registered.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Io`] if the directory itself cannot be
    /// walked, and [`RegistryError::Duplicate`] if two different source
    /// directories declare the same theme name.
    pub fn load_dir(&mut self, root: impl AsRef<Path>) -> Result<usize, RegistryError> {
        let root = root.as_ref();
        let files = walk_theme_dir(root).map_err(|e| RegistryError::Io {
            path: root.to_path_buf(),
            message: e.to_string(),
        })?;

        let mut loaded = 0;
        for file in files {
            let text = match std::fs::read_to_string(&file.path) {
                Ok(text) => text,
                Err(e) => {
                    warn!(path = %file.path.display(), error = %e, "skipping unreadable theme file");
                    continue;
                }
            };

            let theme: Theme = match serde_json::from_str(&text) {
                Ok(theme) => theme,
                Err(e) => {
                    warn!(path = %file.path.display(), error = %e, "skipping invalid theme file");
                    continue;
                }
            };

            if self.pinned.contains(theme.name()) {
                warn!(
                    theme = theme.name(),
                    path = %file.path.display(),
                    "theme name is registered in code, skipping theme file"
                );
                continue;
            }

            if let Some((existing_path, existing_dir)) = self.sources.get(theme.name()) {
                if existing_dir != &file.source_dir {
                    return Err(RegistryError::Duplicate {
                        name: theme.name().to_string(),
                        existing_path: existing_path.clone(),
                        existing_dir: existing_dir.clone(),
                        conflicting_path: file.path.clone(),
                        conflicting_dir: file.source_dir.clone(),
                    });
                }
                // Same directory declares the name twice; first file wins.
                warn!(
                    theme = theme.name(),
                    path = %file.path.display(),
                    "duplicate theme name in directory, keeping the first file"
                );
                continue;
            }

            debug!(theme = theme.name(), path = %file.path.display(), "registered theme");
            self.sources.insert(
                theme.name().to_string(),
                (file.path.clone(), file.source_dir.clone()),
            );
            self.themes.insert(theme.name().to_string(), theme);
            loaded += 1;
        }

        Ok(loaded)
    }

    /// Looks up a palette by theme name and mode, with default fallback.
    ///
    /// An unknown name logs a warning and resolves against the `default`
    /// theme instead of failing.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::DefaultMissing`] only when the fallback
    /// itself is unregistered.
    pub fn resolve(&self, name: &str, mode: Mode) -> Result<&Palette, RegistryError> {
        if let Some(theme) = self.themes.get(name) {
            return Ok(theme.palette(mode));
        }

        warn!(theme = name, "theme not found, using the default theme");
        self.themes
            .get(DEFAULT_THEME_NAME)
            .map(|theme| theme.palette(mode))
            .ok_or(RegistryError::DefaultMissing)
    }

    /// Looks up a theme by exact name, without fallback.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::UnknownTheme`] if the name is not registered.
    pub fn require(&self, name: &str) -> Result<&Theme, RegistryError> {
        self.themes
            .get(name)
            .ok_or_else(|| RegistryError::UnknownTheme {
                name: name.to_string(),
            })
    }

    /// Looks up a theme by exact name.
    pub fn get(&self, name: &str) -> Option<&Theme> {
        self.themes.get(name)
    }

    /// Returns true if a theme is registered under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.themes.contains_key(name)
    }

    /// Returns an iterator over all registered theme names.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.themes.keys().map(|s| s.as_str())
    }

    /// Returns an iterator over all registered themes, in no fixed order.
    pub fn themes(&self) -> impl Iterator<Item = &Theme> {
        self.themes.values()
    }

    /// Returns the number of registered themes.
    pub fn len(&self) -> usize {
        self.themes.len()
    }

    /// Returns true if no themes are registered.
    pub fn is_empty(&self) -> bool {
        self.themes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;

    fn flat_palette(hex: &str) -> Palette {
        let color = Color::from_hex(hex).unwrap();
        Palette {
            primary: color,
            secondary: color,
            background: color,
            surface: color,
            text_primary: color,
            text_secondary: color,
        }
    }

    fn ocean_theme() -> Theme {
        Theme::new("ocean", flat_palette("#005577"), flat_palette("#003344"))
    }

    // =========================================================================
    // Lookup and fallback
    // =========================================================================

    #[test]
    fn test_resolve_known_theme() {
        let registry = Registry::with_default();
        let light = registry.resolve("default", Mode::Light).unwrap();
        let dark = registry.resolve("default", Mode::Dark).unwrap();

        assert_eq!(light.primary.to_string(), "#1976d2");
        assert_eq!(dark.primary.to_string(), "#90caf9");
    }

    #[test]
    fn test_resolve_unknown_falls_back_to_default() {
        let registry = Registry::with_default();
        let palette = registry.resolve("unknown", Mode::Light).unwrap();
        assert_eq!(palette.primary.to_string(), "#1976d2");
    }

    #[test]
    fn test_resolve_without_default_is_fatal() {
        let mut registry = Registry::new();
        registry.add(ocean_theme());

        // Known name still resolves
        assert!(registry.resolve("ocean", Mode::Light).is_ok());

        // Fallback path has nowhere to go
        let result = registry.resolve("unknown", Mode::Light);
        assert_eq!(result.unwrap_err(), RegistryError::DefaultMissing);
    }

    #[test]
    fn test_require_does_not_fall_back() {
        let registry = Registry::with_default();
        let result = registry.require("unknown");
        assert!(matches!(result, Err(RegistryError::UnknownTheme { .. })));
    }

    // =========================================================================
    // Registration
    // =========================================================================

    #[test]
    fn test_add_overwrites_same_name() {
        let mut registry = Registry::new();
        registry.add(Theme::new(
            "ocean",
            flat_palette("#111111"),
            flat_palette("#111111"),
        ));
        registry.add(ocean_theme());

        let palette = registry.resolve("ocean", Mode::Light).unwrap();
        assert_eq!(palette.primary.to_string(), "#005577");
    }

    #[test]
    fn test_add_can_replace_built_in_default() {
        let mut registry = Registry::with_default();
        registry.add(Theme::new(
            DEFAULT_THEME_NAME,
            flat_palette("#222222"),
            flat_palette("#333333"),
        ));

        let palette = registry.resolve("default", Mode::Light).unwrap();
        assert_eq!(palette.primary.to_string(), "#222222");
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_introspection() {
        let mut registry = Registry::with_default();
        registry.add(ocean_theme());

        assert_eq!(registry.len(), 2);
        assert!(!registry.is_empty());
        assert!(registry.contains("ocean"));
        assert!(!registry.contains("forest"));
        assert!(registry.get("ocean").is_some());

        let mut names: Vec<&str> = registry.names().collect();
        names.sort_unstable();
        assert_eq!(names, vec!["default", "ocean"]);
    }

    // =========================================================================
    // Filesystem discovery
    // =========================================================================

    #[test]
    fn test_load_dir_registers_by_declared_name() {
        let dir = tempfile::tempdir().unwrap();
        let theme = ocean_theme();
        // File name differs from the declared theme name on purpose.
        std::fs::write(
            dir.path().join("blue-ish.json"),
            serde_json::to_string(&theme).unwrap(),
        )
        .unwrap();

        let mut registry = Registry::with_default();
        let loaded = registry.load_dir(dir.path()).unwrap();

        assert_eq!(loaded, 1);
        assert!(registry.contains("ocean"));
        assert!(!registry.contains("blue-ish"));
    }

    #[test]
    fn test_load_dir_skips_invalid_files() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("broken.json"), "{not json").unwrap();
        std::fs::write(
            dir.path().join("ocean.json"),
            serde_json::to_string(&ocean_theme()).unwrap(),
        )
        .unwrap();

        let mut registry = Registry::with_default();
        let loaded = registry.load_dir(dir.path()).unwrap();

        assert_eq!(loaded, 1);
        assert!(registry.contains("ocean"));
    }

    #[test]
    fn test_load_dir_same_dir_duplicate_keeps_first() {
        let dir = tempfile::tempdir().unwrap();
        let first = Theme::new("ocean", flat_palette("#aaaaaa"), flat_palette("#aaaaaa"));
        let second = Theme::new("ocean", flat_palette("#bbbbbb"), flat_palette("#bbbbbb"));
        std::fs::write(
            dir.path().join("a.json"),
            serde_json::to_string(&first).unwrap(),
        )
        .unwrap();
        std::fs::write(
            dir.path().join("b.json"),
            serde_json::to_string(&second).unwrap(),
        )
        .unwrap();

        let mut registry = Registry::new();
        let loaded = registry.load_dir(dir.path()).unwrap();

        assert_eq!(loaded, 1);
        let palette = registry.resolve("ocean", Mode::Light).unwrap();
        assert_eq!(palette.primary.to_string(), "#aaaaaa");
    }

    #[test]
    fn test_load_dir_cross_dir_collision_errors() {
        let dir_a = tempfile::tempdir().unwrap();
        let dir_b = tempfile::tempdir().unwrap();
        std::fs::write(
            dir_a.path().join("ocean.json"),
            serde_json::to_string(&ocean_theme()).unwrap(),
        )
        .unwrap();
        std::fs::write(
            dir_b.path().join("ocean.json"),
            serde_json::to_string(&ocean_theme()).unwrap(),
        )
        .unwrap();

        let mut registry = Registry::new();
        registry.load_dir(dir_a.path()).unwrap();
        let result = registry.load_dir(dir_b.path());

        assert!(matches!(result, Err(RegistryError::Duplicate { .. })));
        if let Err(RegistryError::Duplicate { name, .. }) = result {
            assert_eq!(name, "ocean");
        }
    }

    #[test]
    fn test_load_dir_does_not_replace_added_theme() {
        let dir = tempfile::tempdir().unwrap();
        let from_disk = Theme::new("ocean", flat_palette("#bbbbbb"), flat_palette("#bbbbbb"));
        std::fs::write(
            dir.path().join("ocean.json"),
            serde_json::to_string(&from_disk).unwrap(),
        )
        .unwrap();

        let mut registry = Registry::with_default();
        registry.add(Theme::new(
            "ocean",
            flat_palette("#aaaaaa"),
            flat_palette("#aaaaaa"),
        ));
        let loaded = registry.load_dir(dir.path()).unwrap();

        // The pinned registration wins; the file is not counted as loaded
        assert_eq!(loaded, 0);
        let palette = registry.resolve("ocean", Mode::Light).unwrap();
        assert_eq!(palette.primary.to_string(), "#aaaaaa");
    }

    #[test]
    fn test_add_still_wins_after_load_dir() {
        let dir = tempfile::tempdir().unwrap();
        let from_disk = Theme::new("ocean", flat_palette("#bbbbbb"), flat_palette("#bbbbbb"));
        std::fs::write(
            dir.path().join("ocean.json"),
            serde_json::to_string(&from_disk).unwrap(),
        )
        .unwrap();

        let mut registry = Registry::with_default();
        registry.load_dir(dir.path()).unwrap();
        registry.add(Theme::new(
            "ocean",
            flat_palette("#aaaaaa"),
            flat_palette("#aaaaaa"),
        ));

        let palette = registry.resolve("ocean", Mode::Light).unwrap();
        assert_eq!(palette.primary.to_string(), "#aaaaaa");
    }

    #[test]
    fn test_load_dir_overrides_built_in_default() {
        let dir = tempfile::tempdir().unwrap();
        let custom = Theme::new(
            DEFAULT_THEME_NAME,
            flat_palette("#123456"),
            flat_palette("#654321"),
        );
        std::fs::write(
            dir.path().join("default.json"),
            serde_json::to_string(&custom).unwrap(),
        )
        .unwrap();

        let mut registry = Registry::with_default();
        registry.load_dir(dir.path()).unwrap();

        let palette = registry.resolve("default", Mode::Light).unwrap();
        assert_eq!(palette.primary.to_string(), "#123456");
    }

    #[test]
    fn test_load_dir_missing_dir_errors() {
        let dir = tempfile::tempdir().unwrap();
        let mut registry = Registry::new();
        let result = registry.load_dir(dir.path().join("missing"));
        assert!(matches!(result, Err(RegistryError::Io { .. })));
    }

    // =========================================================================
    // Error display
    // =========================================================================

    #[test]
    fn test_error_display_duplicate() {
        let err = RegistryError::Duplicate {
            name: "ocean".to_string(),
            existing_path: PathBuf::from("/a/ocean.json"),
            existing_dir: PathBuf::from("/a"),
            conflicting_path: PathBuf::from("/b/ocean.json"),
            conflicting_dir: PathBuf::from("/b"),
        };

        let display = err.to_string();
        assert!(display.contains("ocean"));
        assert!(display.contains("/a/ocean.json"));
        assert!(display.contains("/b/ocean.json"));
    }

    #[test]
    fn test_error_display_default_missing() {
        assert!(RegistryError::DefaultMissing.to_string().contains("default"));
    }

    #[test]
    fn test_error_display_unknown_theme() {
        let err = RegistryError::UnknownTheme {
            name: "missing".to_string(),
        };
        assert!(err.to_string().contains("missing"));
    }
}
