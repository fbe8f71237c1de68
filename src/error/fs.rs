//! File system errors

use super::ModforgeError;

/// Creates a file read failure error
pub fn read_failed(path: impl Into<String>, reason: impl Into<String>) -> ModforgeError {
    ModforgeError::FileReadFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates a file write failure error
pub fn write_failed(path: impl Into<String>, reason: impl Into<String>) -> ModforgeError {
    ModforgeError::FileWriteFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates an IO error
pub fn io_error(message: impl Into<String>) -> ModforgeError {
    ModforgeError::IoError {
        message: message.into(),
    }
}
