//! Error types and handling for Modforge
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! This module is organized into sub-modules by error domain:
//! - [`artifact`]: Artifact contract errors
//! - [`store`]: Content store errors
//! - [`fs`]: File system errors

pub mod artifact;
pub mod fs;
pub mod store;

// Re-export convenience constructors from submodules
#[allow(unused_imports)]
pub use artifact::module_missing;
#[allow(unused_imports)]
pub use fs::{io_error, read_failed as file_read_failed, write_failed as file_write_failed};
#[allow(unused_imports)]
pub use store::{content_root_not_found, source_missing};

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for Modforge operations
#[derive(Error, Diagnostic, Debug)]
pub enum ModforgeError {
    // Artifact contract errors
    #[error("Artifact '{name}' has no module identifier")]
    #[diagnostic(
        code(modforge::artifact::module_missing),
        help(
            "Every collected artifact must carry a non-empty module id. This indicates a broken artifact collector, not bad user input."
        )
    )]
    ModuleDataInvalid { name: String },

    // Content store errors
    #[error("Content root not found: {path}")]
    #[diagnostic(
        code(modforge::store::content_root_not_found),
        help("Check the --content-root path; it must point at a directory of module directories")
    )]
    ContentRootNotFound { path: String },

    #[error("Source file missing: {path}")]
    #[diagnostic(
        code(modforge::store::source_missing),
        help("The content store references a file that no longer exists; re-sync the store")
    )]
    SourceMissing { path: String },

    // File system errors
    #[error("Failed to read file: {path}")]
    #[diagnostic(code(modforge::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("Failed to write file: {path}")]
    #[diagnostic(code(modforge::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(modforge::fs::io_error))]
    IoError { message: String },
}

impl From<std::io::Error> for ModforgeError {
    fn from(err: std::io::Error) -> Self {
        ModforgeError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for ModforgeError {
    fn from(err: serde_json::Error) -> Self {
        ModforgeError::IoError {
            message: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, ModforgeError>;
