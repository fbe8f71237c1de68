//! Command implementations
//!
//! Thin entry points: resolve the project root, run the operation, report.

pub mod completions;
pub mod install;
pub mod launcher;
pub mod version;

use std::path::PathBuf;

use crate::error::{Result, io_error};

/// Resolve the project root from the global flag or the current directory
pub fn resolve_project_root(project_root: Option<PathBuf>) -> Result<PathBuf> {
    match project_root {
        Some(path) => Ok(path),
        None => std::env::current_dir().map_err(|e| io_error(e.to_string())),
    }
}
