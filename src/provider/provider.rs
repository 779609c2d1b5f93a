//! The theme provider: active selection plus persistence.

use tracing::warn;

use super::{Selection, STORAGE_KEY};
use crate::registry::{Registry, RegistryError};
use crate::storage::Storage;
use crate::theme::{detect_mode, Mode, Palette};

/// Holds the active theme selection and keeps it persisted.
///
/// The provider owns a [`Registry`] and a [`Storage`]. On construction it
/// restores the persisted selection, validating the theme name against the
/// registry; from then on every accepted change is written back under
/// [`STORAGE_KEY`].
///
/// # Example
///
/// ```rust
/// use retheme::{MemoryStorage, Mode, Registry, ThemeProvider};
///
/// let mut provider = ThemeProvider::new(Registry::with_default(), MemoryStorage::new());
/// assert_eq!(provider.theme_name(), "default");
/// assert_eq!(provider.mode(), Mode::Light);
///
/// provider.set_theme("default", Mode::Dark).unwrap();
/// assert_eq!(provider.palette().unwrap().primary.to_string(), "#90caf9");
/// ```
pub struct ThemeProvider {
    registry: Registry,
    storage: Box<dyn Storage + Send>,
    name: String,
    mode: Mode,
}

impl ThemeProvider {
    /// Creates a provider, restoring any persisted selection.
    ///
    /// With nothing persisted, the active selection is the default theme in
    /// light mode. A persisted record that fails to parse, or names a theme
    /// absent from the registry, is discarded with a logged warning.
    pub fn new(registry: Registry, storage: impl Storage + Send + 'static) -> Self {
        Self::with_initial_mode(registry, storage, Mode::Light)
    }

    /// Like [`ThemeProvider::new`], but an absent persisted selection
    /// defaults the mode from OS dark-mode detection instead of light.
    pub fn with_detected_mode(registry: Registry, storage: impl Storage + Send + 'static) -> Self {
        let mode = detect_mode();
        Self::with_initial_mode(registry, storage, mode)
    }

    fn with_initial_mode(
        registry: Registry,
        storage: impl Storage + Send + 'static,
        initial_mode: Mode,
    ) -> Self {
        let storage: Box<dyn Storage + Send> = Box::new(storage);
        let selection = Self::restore(&registry, storage.as_ref()).unwrap_or_else(|| Selection {
            mode: initial_mode,
            ..Selection::default()
        });

        Self {
            registry,
            storage,
            name: selection.name,
            mode: selection.mode,
        }
    }

    fn restore(registry: &Registry, storage: &(dyn Storage + Send)) -> Option<Selection> {
        let text = storage.load(STORAGE_KEY)?;

        let selection: Selection = match serde_json::from_str(&text) {
            Ok(selection) => selection,
            Err(e) => {
                warn!(error = %e, "discarding unreadable persisted theme selection");
                return None;
            }
        };

        if !registry.contains(&selection.name) {
            warn!(
                theme = selection.name.as_str(),
                "persisted theme is not registered, using the default selection"
            );
            return None;
        }

        Some(selection)
    }

    /// Name of the active theme.
    pub fn theme_name(&self) -> &str {
        &self.name
    }

    /// The active color mode.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// The active selection as a record.
    pub fn selection(&self) -> Selection {
        Selection::new(self.name.clone(), self.mode)
    }

    /// The registry this provider resolves against.
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// The active palette.
    ///
    /// Resolution goes through the registry, so an active name that has
    /// somehow become unknown still falls back to the default theme.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::DefaultMissing`] when even the fallback is
    /// unregistered.
    pub fn palette(&self) -> Result<&Palette, RegistryError> {
        self.registry.resolve(&self.name, self.mode)
    }

    /// Activates a theme and persists the new selection.
    ///
    /// A selection identical to the current one is accepted without
    /// re-persisting.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::UnknownTheme`] for a name absent from the
    /// registry; the active selection is left unchanged and nothing is
    /// persisted.
    pub fn set_theme(&mut self, name: &str, mode: Mode) -> Result<(), RegistryError> {
        self.registry.require(name)?;

        if name == self.name && mode == self.mode {
            return Ok(());
        }

        self.name = name.to_string();
        self.mode = mode;
        self.persist();
        Ok(())
    }

    /// Flips the active mode between light and dark, persisting the change.
    ///
    /// Returns the new mode.
    pub fn toggle_mode(&mut self) -> Mode {
        self.mode = self.mode.toggle();
        self.persist();
        self.mode
    }

    fn persist(&mut self) {
        match serde_json::to_string(&self.selection()) {
            Ok(json) => self.storage.save(STORAGE_KEY, &json),
            Err(e) => warn!(error = %e, "failed to serialize theme selection"),
        }
    }
}

impl std::fmt::Debug for ThemeProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeProvider")
            .field("name", &self.name)
            .field("mode", &self.mode)
            .field("themes", &self.registry.len())
            .finish()
    }
}
