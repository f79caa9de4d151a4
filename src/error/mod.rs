//! Error types and handling for resprobe
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! This module is organized into sub-modules by error domain:
//! - [`precondition`]: Failed resource checks
//! - [`resource`]: Resource identifier and package root errors
//! - [`config`]: Configuration errors
//! - [`fs`]: File system errors
//! - [`module`]: Module definition errors

pub mod config;
pub mod fs;
pub mod module;
pub mod precondition;
pub mod resource;

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for resprobe operations
#[derive(Error, Diagnostic, Debug)]
pub enum ResprobeError {
    // Precondition violations
    #[error("Required resource '{id}' does not exist")]
    #[diagnostic(
        code(resprobe::precondition::resource_missing),
        help("Check that the package root is correct and the resource is bundled with it")
    )]
    ResourceMissing { id: String },

    #[error("Resolved path does not exist on disk as a file: {path}")]
    #[diagnostic(code(resprobe::precondition::resolved_path_missing))]
    ResolvedPathMissing { path: String },

    #[error("Resource '{id}' is empty")]
    #[diagnostic(
        code(resprobe::precondition::resource_empty),
        help("A required resource must contain at least one byte")
    )]
    ResourceEmpty { id: String },

    // Resource errors
    #[error("Invalid resource identifier '{id}': {reason}")]
    #[diagnostic(
        code(resprobe::resource::invalid_id),
        help("Resource identifiers are relative paths such as modules/public/module_time.json")
    )]
    InvalidResourceId { id: String, reason: String },

    #[error("Package root not found: {path}")]
    #[diagnostic(
        code(resprobe::resource::root_not_found),
        help("Pass --root or set RESPROBE_ROOT to an existing directory")
    )]
    PackageRootNotFound { path: String },

    // Configuration errors
    #[error("Failed to parse configuration file: {path}: {reason}")]
    #[diagnostic(code(resprobe::config::parse_failed))]
    ConfigParseFailed { path: String, reason: String },

    #[error("Failed to read configuration file: {path}: {reason}")]
    #[diagnostic(code(resprobe::config::read_failed))]
    ConfigReadFailed { path: String, reason: String },

    #[error("Invalid configuration: {message}")]
    #[diagnostic(code(resprobe::config::invalid))]
    ConfigInvalid { message: String },

    // File system errors
    #[error("Failed to read file: {path}: {reason}")]
    #[diagnostic(code(resprobe::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(resprobe::fs::io_error))]
    IoError { message: String },

    // Module errors
    #[error("Failed to parse module definition '{path}': {reason}")]
    #[diagnostic(code(resprobe::module::parse_failed))]
    ModuleParseFailed { path: String, reason: String },

    #[error("Invalid module definition: {message}")]
    #[diagnostic(code(resprobe::module::invalid))]
    ModuleInvalid { message: String },

    #[error("Module directory not found: {path}")]
    #[diagnostic(
        code(resprobe::module::dir_not_found),
        help("Module definitions are looked up under modules/public by default")
    )]
    ModuleDirNotFound { path: String },

    #[error("Module '{name}' not found")]
    #[diagnostic(code(resprobe::module::not_found), help("Available modules: {available}"))]
    ModuleNotFound { name: String, available: String },

    #[error("The module '{name}' has already been created.")]
    #[diagnostic(code(resprobe::module::duplicate))]
    ModuleAlreadyCreated { name: String },
}

impl From<std::io::Error> for ResprobeError {
    fn from(err: std::io::Error) -> Self {
        ResprobeError::IoError {
            message: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, ResprobeError>;
