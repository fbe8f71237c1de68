//! Common file system operations with unified error handling

use std::fs;
use std::path::Path;

/// Remove a directory tree if it exists. Returns whether anything was removed.
pub fn remove_dir_if_exists(path: &Path) -> std::io::Result<bool> {
    if path.exists() {
        fs::remove_dir_all(path)?;
        return Ok(true);
    }
    Ok(false)
}

/// Create a directory and all missing parents
pub fn ensure_dir(path: &Path) -> std::io::Result<()> {
    fs::create_dir_all(path)
}
