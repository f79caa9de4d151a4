//! File system errors

use super::ResprobeError;

/// Creates a file read failed error
pub fn read_failed(path: impl Into<String>, reason: impl Into<String>) -> ResprobeError {
    ResprobeError::FileReadFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

