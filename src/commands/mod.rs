//! Command implementations for resprobe CLI

pub mod check;
pub mod completions;
pub mod modules;
pub mod version;

use std::path::PathBuf;

use crate::error::Result;
use crate::resource::Package;

/// Open the package at the given root, or the current directory
fn open_package(root: Option<PathBuf>) -> Result<Package> {
    let root = match root {
        Some(root) => root,
        None => std::env::current_dir()?,
    };
    Package::open(root)
}
