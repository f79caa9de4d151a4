//! Test fixtures and utilities for reducing test setup duplication.
//!
//! ```ignore
//! use crate::test_fixtures::{create_temp_dir, create_package};
//!
//! let temp = create_temp_dir();
//! let (temp, package) = create_package(&[("README.md", "# readme")]);
//! ```

use std::path::Path;

use tempfile::TempDir;

use crate::resource::Package;

/// Module definition used as the public module in fixtures
pub const TIME_MODULE_JSON: &str = r#"{
    "kind": "struct",
    "name": "time",
    "attributes": [
        {
            "kind": "function",
            "name": "now",
            "arguments": [[]]
        }
    ]
}"#;

/// Create a temp directory in the system temp location.
///
/// # Panics
///
/// Panics if the temp directory cannot be created.
#[must_use]
pub fn create_temp_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp directory")
}

/// Write `content` to `relative` under `root`, creating parent directories.
///
/// # Panics
///
/// Panics if the file cannot be written.
pub fn write_file(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("Failed to create parent directory");
    }
    std::fs::write(&path, content).expect("Failed to write file");
}

/// Create a package in a temp directory containing the given files.
///
/// # Panics
///
/// Panics if the files cannot be written or the package cannot be opened.
#[must_use]
pub fn create_package(files: &[(&str, &str)]) -> (TempDir, Package) {
    let temp = create_temp_dir();
    for (relative, content) in files {
        write_file(temp.path(), relative, content);
    }
    let package = Package::open(temp.path()).expect("Failed to open package");
    (temp, package)
}

/// Create a package containing all four default resources.
///
/// # Panics
///
/// Panics if the package cannot be created.
#[must_use]
pub fn create_complete_package() -> (TempDir, Package) {
    create_package(&[
        ("README.md", "# Package\n"),
        ("tests/python/test_parser.py", "def test_parser():\n    pass\n"),
        ("modules/public/module_time.json", TIME_MODULE_JSON),
        (
            "modules/private/module_phish.json",
            r#"{"kind": "struct", "name": "phish", "attributes": []}"#,
        ),
    ])
}
