//! Precondition violations raised by the resource checker

use super::ResprobeError;

/// Creates a resource missing error
pub fn resource_missing(id: impl Into<String>) -> ResprobeError {
    ResprobeError::ResourceMissing { id: id.into() }
}

/// Creates a resolved path missing error
pub fn resolved_path_missing(path: impl Into<String>) -> ResprobeError {
    ResprobeError::ResolvedPathMissing { path: path.into() }
}

/// Creates a resource empty error
pub fn resource_empty(id: impl Into<String>) -> ResprobeError {
    ResprobeError::ResourceEmpty { id: id.into() }
}

impl ResprobeError {
    /// Whether this error is one of the checker's fail-fast preconditions
    pub fn is_precondition_violation(&self) -> bool {
        matches!(
            self,
            ResprobeError::ResourceMissing { .. }
                | ResprobeError::ResolvedPathMissing { .. }
                | ResprobeError::ResourceEmpty { .. }
        )
    }
}
