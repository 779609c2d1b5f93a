//! Process-global theme context.
//!
//! Applications that don't want to thread a [`ThemeProvider`] through every
//! call site can install one here and reach it from anywhere with
//! [`with_theme`]. Accessing the context before a provider is installed is a
//! programmer-usage error and fails immediately with
//! [`ContextError::OutsideProvider`].

use once_cell::sync::Lazy;
use std::sync::Mutex;

use super::ThemeProvider;

static CONTEXT: Lazy<Mutex<Option<ThemeProvider>>> = Lazy::new(|| Mutex::new(None));

/// Error raised when the context is used without an installed provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContextError {
    /// No provider is installed in the process-global context.
    OutsideProvider,
}

impl std::fmt::Display for ContextError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ContextError::OutsideProvider => {
                f.write_str("theme context used without an installed ThemeProvider")
            }
        }
    }
}

impl std::error::Error for ContextError {}

/// Installs a provider as the process-global theme context.
///
/// Returns the previously installed provider, if any.
pub fn install(provider: ThemeProvider) -> Option<ThemeProvider> {
    let mut guard = CONTEXT.lock().unwrap();
    guard.replace(provider)
}

/// Removes and returns the installed provider.
pub fn uninstall() -> Option<ThemeProvider> {
    let mut guard = CONTEXT.lock().unwrap();
    guard.take()
}

/// Runs `f` with mutable access to the installed provider.
///
/// # Errors
///
/// Returns [`ContextError::OutsideProvider`] if no provider is installed.
pub fn with_theme<T>(f: impl FnOnce(&mut ThemeProvider) -> T) -> Result<T, ContextError> {
    let mut guard = CONTEXT.lock().unwrap();
    match guard.as_mut() {
        Some(provider) => Ok(f(provider)),
        None => Err(ContextError::OutsideProvider),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::Registry;
    use crate::storage::MemoryStorage;
    use crate::theme::Mode;
    use serial_test::serial;

    fn provider() -> ThemeProvider {
        ThemeProvider::new(Registry::with_default(), MemoryStorage::new())
    }

    #[test]
    #[serial]
    fn test_with_theme_outside_provider_errors() {
        uninstall();

        let result = with_theme(|provider| provider.theme_name().to_string());
        assert_eq!(result, Err(ContextError::OutsideProvider));
    }

    #[test]
    #[serial]
    fn test_install_and_access() {
        install(provider());

        let name = with_theme(|provider| provider.theme_name().to_string()).unwrap();
        assert_eq!(name, "default");

        let mode = with_theme(|provider| provider.toggle_mode()).unwrap();
        assert_eq!(mode, Mode::Dark);

        uninstall();
    }

    #[test]
    #[serial]
    fn test_install_replaces_previous() {
        assert!(install(provider()).is_none());
        assert!(install(provider()).is_some());

        uninstall();
        assert!(uninstall().is_none());
    }

    #[test]
    fn test_context_error_display() {
        let msg = ContextError::OutsideProvider.to_string();
        assert!(msg.contains("ThemeProvider"));
    }
}
