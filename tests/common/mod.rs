//! Common test utilities for resprobe integration tests

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

/// Module definition used as the public module in fixtures
#[allow(dead_code)]
pub const TIME_MODULE_JSON: &str = r#"{
    "kind": "struct",
    "name": "time",
    "attributes": [
        {"kind": "function", "name": "now", "arguments": [[]]},
        {"kind": "value", "name": "epoch", "type": "i", "documentation": "Seconds since 1970"}
    ]
}"#;

/// Module definition used as the private module in fixtures
#[allow(dead_code)]
pub const PHISH_MODULE_JSON: &str = r#"{
    "kind": "struct",
    "name": "phish",
    "attributes": [
        {"kind": "function", "name": "match", "arguments": [["string"], ["regexp"]]}
    ]
}"#;

/// A package root in a temp directory
pub struct TestPackage {
    /// Temporary directory
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Path to package root
    pub path: PathBuf,
}

impl TestPackage {
    /// Create an empty package
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self { temp, path }
    }

    /// Create a package holding all four resources
    #[allow(dead_code)]
    pub fn complete() -> Self {
        let package = Self::new();
        package.write_file("README.md", "# Package\n");
        package.write_file("tests/python/test_parser.py", "def test_parser():\n    pass\n");
        package.write_file("modules/public/module_time.json", TIME_MODULE_JSON);
        package.write_file("modules/private/module_phish.json", PHISH_MODULE_JSON);
        package
    }

    /// Write a file in the package
    pub fn write_file(&self, path: &str, content: &str) {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Remove a file from the package
    #[allow(dead_code)]
    pub fn remove_file(&self, path: &str) {
        std::fs::remove_file(self.path.join(path)).expect("Failed to remove file");
    }

    /// Canonical path of a resource, as the binary prints it
    #[allow(dead_code)]
    pub fn resolved(&self, path: &str) -> PathBuf {
        dunce::canonicalize(&self.path)
            .expect("Failed to canonicalize package root")
            .join(path)
    }
}

impl Default for TestPackage {
    fn default() -> Self {
        Self::new()
    }
}

/// resprobe binary command without any inherited package root
#[allow(deprecated)]
pub fn resprobe_cmd() -> Command {
    let mut cmd = Command::cargo_bin("resprobe").expect("Failed to find resprobe binary");
    cmd.env_remove("RESPROBE_ROOT");
    cmd
}

/// resprobe binary command running inside the package root
#[allow(dead_code)]
pub fn resprobe_cmd_for_package(path: &Path) -> Command {
    let mut cmd = resprobe_cmd();
    cmd.current_dir(path);
    cmd
}
