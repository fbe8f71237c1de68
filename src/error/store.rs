//! Content store errors

use super::ModforgeError;

/// Creates an error for a missing content root directory
pub fn content_root_not_found(path: impl Into<String>) -> ModforgeError {
    ModforgeError::ContentRootNotFound { path: path.into() }
}

/// Creates an error for a referenced source file that cannot be read
pub fn source_missing(path: impl Into<String>) -> ModforgeError {
    ModforgeError::SourceMissing { path: path.into() }
}
