//! Resource identifier and package root errors

use super::ResprobeError;

/// Creates an invalid resource identifier error
pub fn invalid_id(id: impl Into<String>, reason: impl Into<String>) -> ResprobeError {
    ResprobeError::InvalidResourceId {
        id: id.into(),
        reason: reason.into(),
    }
}

/// Creates a package root not found error
pub fn root_not_found(path: impl Into<String>) -> ResprobeError {
    ResprobeError::PackageRootNotFound { path: path.into() }
}
