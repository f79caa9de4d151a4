//! Configuration errors

use super::ResprobeError;

/// Creates a config parse failed error
pub fn parse_failed(path: impl Into<String>, reason: impl Into<String>) -> ResprobeError {
    ResprobeError::ConfigParseFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates a config read failed error
pub fn read_failed(path: impl Into<String>, reason: impl Into<String>) -> ResprobeError {
    ResprobeError::ConfigReadFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates an invalid config error
pub fn invalid(message: impl Into<String>) -> ResprobeError {
    ResprobeError::ConfigInvalid {
        message: message.into(),
    }
}
