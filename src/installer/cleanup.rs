//! Pre-install cleanup and legacy-layout migration
//!
//! Removing the namespace directory before every install makes reinstall
//! idempotent: a rerun with a different artifact set can never leave
//! orphaned files behind. The legacy `rules/` layout is removed as a
//! one-time migration; its content never carries over.

use std::path::Path;

use crate::common::fs::remove_dir_if_exists;
use crate::error::{Result, io_error};

use super::layout;

/// What cleanup actually removed
#[derive(Debug, Default, Clone, Copy)]
pub struct CleanupReport {
    pub removed_current: bool,
    pub removed_legacy: bool,
}

/// Remove the installed namespace directory and any legacy layout.
/// Absence of either path is not an error.
pub fn cleanup(config_root: &Path) -> Result<CleanupReport> {
    let removed_current = remove_dir_if_exists(&layout::namespace_root(config_root))
        .map_err(|e| io_error(e.to_string()))?;
    let removed_legacy = remove_dir_if_exists(&layout::legacy_root(config_root))
        .map_err(|e| io_error(e.to_string()))?;
    Ok(CleanupReport {
        removed_current,
        removed_legacy,
    })
}
