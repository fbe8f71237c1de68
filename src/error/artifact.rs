//! Artifact contract errors

use super::ModforgeError;

/// Creates an error for an artifact that arrived without a module identifier
pub fn module_missing(name: impl Into<String>) -> ModforgeError {
    ModforgeError::ModuleDataInvalid { name: name.into() }
}
