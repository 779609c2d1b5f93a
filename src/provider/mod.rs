//! Active theme state: the provider and its process-wide context.
//!
//! This module provides:
//!
//! - [`Selection`]: the persisted `{name, mode}` record
//! - [`ThemeProvider`]: owns the registry and storage, holds the active
//!   selection, and persists changes
//! - [`context`]: an optional process-global slot for sharing one provider
//!   across an application
//!
//! The provider persists exactly one storage entry, [`STORAGE_KEY`], as JSON
//! text. Last write wins; there is no other consistency guarantee.

pub mod context;
#[allow(clippy::module_inception)]
mod provider;

use serde::{Deserialize, Serialize};

use crate::registry::DEFAULT_THEME_NAME;
use crate::theme::Mode;

pub use context::ContextError;
pub use provider::ThemeProvider;

/// Storage key under which the active selection is persisted.
pub const STORAGE_KEY: &str = "app_theme_user";

/// The persisted theme selection.
///
/// The wire format keeps the historical field name `type` for the mode, so
/// state written by earlier tooling reads back unchanged:
/// `{"name":"default","type":"dark"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    /// Name of the selected theme.
    pub name: String,
    /// Selected color mode.
    #[serde(rename = "type")]
    pub mode: Mode,
}

impl Selection {
    /// Creates a selection record.
    pub fn new(name: impl Into<String>, mode: Mode) -> Self {
        Self {
            name: name.into(),
            mode,
        }
    }
}

impl Default for Selection {
    /// The selection used when nothing is persisted: the reserved default
    /// theme in light mode.
    fn default() -> Self {
        Self::new(DEFAULT_THEME_NAME, Mode::Light)
    }
}
