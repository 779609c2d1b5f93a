//! Project scaffolding for theme directories.

use std::io;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::theme::Theme;

/// File name of the scaffolded default theme.
const DEFAULT_THEME_FILE: &str = "default.json";

/// Creates a `themes/` directory under `root`, seeded with the built-in
/// default theme.
///
/// The directory is created if missing, and `default.json` is written only
/// when absent so local edits survive re-running the initializer. Returns
/// the theme directory path, ready to hand to
/// [`Registry::load_dir`](crate::Registry::load_dir).
///
/// # Errors
///
/// Returns an error if the directory or file cannot be created.
pub fn init_theme_dir(root: impl AsRef<Path>) -> io::Result<PathBuf> {
    let themes_dir = root.as_ref().join("themes");
    std::fs::create_dir_all(&themes_dir)?;

    let default_path = themes_dir.join(DEFAULT_THEME_FILE);
    if default_path.exists() {
        info!(path = %default_path.display(), "default theme file already present, leaving it unchanged");
    } else {
        let json = serde_json::to_string_pretty(&Theme::built_in_default())
            .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
        std::fs::write(&default_path, json)?;
        info!(path = %default_path.display(), "wrote default theme file");
    }

    Ok(themes_dir)
}
