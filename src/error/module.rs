//! Module definition errors

use super::ResprobeError;

/// Creates a module parse failed error
pub fn parse_failed(path: impl Into<String>, reason: impl Into<String>) -> ResprobeError {
    ResprobeError::ModuleParseFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates an invalid module error
pub fn invalid(message: impl Into<String>) -> ResprobeError {
    ResprobeError::ModuleInvalid {
        message: message.into(),
    }
}

/// Creates a duplicate module error
pub fn already_created(name: impl Into<String>) -> ResprobeError {
    ResprobeError::ModuleAlreadyCreated { name: name.into() }
}

/// Creates a module directory not found error
pub fn dir_not_found(path: impl Into<String>) -> ResprobeError {
    ResprobeError::ModuleDirNotFound { path: path.into() }
}

/// Creates a module not found error listing the known names
pub fn not_found(name: impl Into<String>, available: &[&str]) -> ResprobeError {
    ResprobeError::ModuleNotFound {
        name: name.into(),
        available: available.join(", "),
    }
}
