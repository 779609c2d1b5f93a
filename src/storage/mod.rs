//! Key-value persistence for the active theme selection.
//!
//! The provider persists exactly one entry (see
//! [`crate::provider::STORAGE_KEY`]), so the storage contract is the
//! smallest one that covers it: string keys, string values, last write wins.
//!
//! Two implementations ship with the crate:
//!
//! - [`MemoryStorage`]: HashMap-backed, for tests and ephemeral sessions
//! - [`FileStorage`]: a single JSON object file under the user config
//!   directory
//!
//! Writes are best-effort: a failed flush is logged and the in-memory state
//! keeps the value, mirroring how browser local storage is typically treated
//! by callers.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use tracing::warn;

/// String key-value storage for theme state.
///
/// Serialization is the caller's responsibility; implementations store raw
/// strings and stay free of any encoding concern.
pub trait Storage {
    /// Writes a string value under `key`, replacing any previous value.
    fn save(&mut self, key: &str, value: &str);

    /// Reads the value stored under `key`. Returns `None` if not present.
    fn load(&self, key: &str) -> Option<String>;

    /// Removes `key` from storage.
    fn remove(&mut self, key: &str);
}

/// In-memory storage backed by a `HashMap`.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: HashMap<String, String>,
}

impl MemoryStorage {
    /// Creates an empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for MemoryStorage {
    fn save(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }

    fn load(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn remove(&mut self, key: &str) {
        self.entries.remove(key);
    }
}

/// File-backed storage: one JSON object mapping keys to values.
///
/// The whole map is rewritten on every save. That is fine for this crate's
/// single-entry workload and keeps the file human-editable.
///
/// # Example
///
/// ```rust,no_run
/// use retheme::{FileStorage, Storage};
///
/// let path = FileStorage::default_path().expect("no user config directory");
/// let mut storage = FileStorage::new(path);
/// storage.save("greeting", "hello");
/// assert_eq!(storage.load("greeting").as_deref(), Some("hello"));
/// ```
#[derive(Debug)]
pub struct FileStorage {
    path: PathBuf,
    entries: HashMap<String, String>,
}

impl FileStorage {
    /// Opens storage at `path`, reading any existing entries.
    ///
    /// A missing file starts empty; an unreadable or corrupt file is treated
    /// as empty with a logged warning, so a damaged state file never blocks
    /// startup.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = Self::read_entries(&path);
        Self { path, entries }
    }

    /// The conventional storage location: `<config dir>/retheme/state.json`.
    ///
    /// Returns `None` when the platform has no user config directory.
    pub fn default_path() -> Option<PathBuf> {
        Some(dirs::config_dir()?.join("retheme").join("state.json"))
    }

    /// The file this storage reads and writes.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_entries(path: &Path) -> HashMap<String, String> {
        let text = match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return HashMap::new(),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "failed to read state file, starting empty");
                return HashMap::new();
            }
        };

        match serde_json::from_str(&text) {
            Ok(entries) => entries,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "corrupt state file, starting empty");
                HashMap::new()
            }
        }
    }

    fn flush(&self) {
        if let Some(parent) = self.path.parent() {
            if let Err(e) = std::fs::create_dir_all(parent) {
                warn!(path = %self.path.display(), error = %e, "failed to create state directory");
                return;
            }
        }

        let json = match serde_json::to_string_pretty(&self.entries) {
            Ok(json) => json,
            Err(e) => {
                warn!(error = %e, "failed to serialize state");
                return;
            }
        };

        if let Err(e) = std::fs::write(&self.path, json) {
            warn!(path = %self.path.display(), error = %e, "failed to write state file");
        }
    }
}

impl Storage for FileStorage {
    fn save(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
        self.flush();
    }

    fn load(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn remove(&mut self, key: &str) {
        if self.entries.remove(key).is_some() {
            self.flush();
        }
    }
}
