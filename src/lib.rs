//! Runtime theme management for styled terminal applications.
//!
//! `retheme` lets an application switch between named visual themes (color
//! palettes with light and dark variants) at runtime, persist the chosen
//! theme, and render theme pickers as styled terminal output.
//!
//! # Overview
//!
//! Three pieces cooperate:
//!
//! - A [`Registry`] maps theme names to [`Theme`] definitions. It is seeded
//!   with a built-in `default` theme and can discover more from `*.json`
//!   files in a theme directory.
//! - A [`ThemeProvider`] holds the active `{name, mode}` selection, persists
//!   it under a single storage key, and falls back to the default theme when
//!   a lookup misses.
//! - The [`widgets`] module renders the registry and active selection
//!   (theme list, theme cards, dark-mode switch).
//!
//! # Example
//!
//! ```rust
//! use retheme::{MemoryStorage, Mode, Registry, ThemeProvider};
//!
//! let registry = Registry::with_default();
//!
//! // Lookups fall back to the default theme for unknown names
//! let palette = registry.resolve("no-such-theme", Mode::Dark).unwrap();
//! assert_eq!(palette.primary.to_string(), "#90caf9");
//!
//! // The provider persists the active selection
//! let mut provider = ThemeProvider::new(registry, MemoryStorage::new());
//! provider.set_theme("default", Mode::Dark).unwrap();
//! assert_eq!(provider.mode(), Mode::Dark);
//! ```
//!
//! # Persistence
//!
//! The selection is stored as one JSON entry under a fixed key, last write
//! wins. [`FileStorage`] keeps it in a state file under the user config
//! directory; [`MemoryStorage`] keeps it for the process lifetime. Custom
//! backends implement the three-method [`Storage`] trait.

mod color;
mod init;
pub mod provider;
pub mod registry;
pub mod storage;
pub mod theme;
mod util;
pub mod widgets;

pub use color::{Color, ColorParseError};
pub use init::init_theme_dir;
pub use provider::{context, ContextError, Selection, ThemeProvider, STORAGE_KEY};
pub use registry::{Registry, RegistryError, DEFAULT_THEME_NAME};
pub use storage::{FileStorage, MemoryStorage, Storage};
pub use theme::{detect_mode, set_mode_detector, Mode, Palette, Theme};
pub use util::truncate_to_width;
