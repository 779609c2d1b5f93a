//! Filesystem discovery of theme files.

use std::path::{Path, PathBuf};

/// Recognized theme file extension.
pub const THEME_EXTENSION: &str = ".json";

/// A theme file discovered during directory walking.
///
/// Captures the file location without reading its content; parsing happens
/// in [`crate::registry::Registry::load_dir`] so that unreadable or invalid
/// files can be reported against both the file and its source directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeFile {
    /// Absolute path to the theme file.
    pub path: PathBuf,
    /// The theme directory root this file belongs to.
    pub source_dir: PathBuf,
}

/// Walks a theme directory and collects candidate theme files.
///
/// Traverses the directory recursively, finding all files with the
/// [`THEME_EXTENSION`] extension. The result is sorted by path so discovery
/// order is deterministic across platforms.
///
/// # Errors
///
/// Returns an error if the directory cannot be read or traversed.
pub fn walk_theme_dir(root: impl AsRef<Path>) -> Result<Vec<ThemeFile>, std::io::Error> {
    let root = root.as_ref();
    let root_canonical = root.canonicalize()?;
    let mut files = Vec::new();

    walk_dir_recursive(&root_canonical, &root_canonical, &mut files)?;
    files.sort_by(|a, b| a.path.cmp(&b.path));

    Ok(files)
}

fn walk_dir_recursive(
    current: &Path,
    root: &Path,
    files: &mut Vec<ThemeFile>,
) -> Result<(), std::io::Error> {
    for entry in std::fs::read_dir(current)? {
        let entry = entry?;
        let path = entry.path();

        if path.is_dir() {
            walk_dir_recursive(&path, root, files)?;
        } else if path.is_file() && path.to_string_lossy().ends_with(THEME_EXTENSION) {
            files.push(ThemeFile {
                path,
                source_dir: root.to_path_buf(),
            });
        }
    }

    Ok(())
}
