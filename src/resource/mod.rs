//! Packaged resources
//!
//! A **resource** is a file bundled under a package root and named by a
//! relative identifier such as `modules/public/module_time.json`. The
//! [`Package`] answers the three questions the checker asks about one:
//! does it exist, where does it live on disk, and what are its bytes.

use std::fmt;
use std::path::{Component, Path, PathBuf};

use crate::error::{Result, fs, resource};

/// Relative path naming a file bundled with a package
///
/// Identifiers always use `/` as separator, regardless of platform.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResourceId(String);

impl ResourceId {
    /// Create an identifier, rejecting empty, absolute, and parent-escaping paths
    pub fn new(id: impl Into<String>) -> Result<Self> {
        let id = id.into();

        if id.trim().is_empty() {
            return Err(resource::invalid_id(id, "identifier cannot be empty"));
        }
        if id.starts_with('/') || id.starts_with('\\') || Path::new(&id).is_absolute() {
            return Err(resource::invalid_id(id, "identifier must be relative"));
        }

        let escapes_root = Path::new(&id)
            .components()
            .any(|c| matches!(c, Component::ParentDir));
        if escapes_root {
            return Err(resource::invalid_id(
                id,
                "parent directory components are not allowed",
            ));
        }

        Ok(Self(id))
    }

    /// The identifier as written
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Platform-specific relative path for this identifier
    fn to_relative_path(&self) -> PathBuf {
        self.0
            .split('/')
            .filter(|segment| !segment.is_empty() && *segment != ".")
            .collect()
    }
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A package root that resources are looked up under
#[derive(Debug, Clone)]
pub struct Package {
    root: PathBuf,
}

impl Package {
    /// Open a package rooted at `root`
    ///
    /// The root is canonicalized so that resolved paths are absolute.
    pub fn open(root: impl AsRef<Path>) -> Result<Self> {
        let root = root.as_ref();
        let canonical = dunce::canonicalize(root)
            .map_err(|_| resource::root_not_found(root.display().to_string()))?;

        if !canonical.is_dir() {
            return Err(resource::root_not_found(canonical.display().to_string()));
        }

        Ok(Self { root: canonical })
    }

    /// The canonical package root
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Whether anything (file or directory) exists for the identifier
    pub fn exists(&self, id: &ResourceId) -> bool {
        self.filename(id).exists()
    }

    /// Resolve the identifier to a file-system path
    ///
    /// The path is returned whether or not anything exists there.
    pub fn filename(&self, id: &ResourceId) -> PathBuf {
        self.root.join(id.to_relative_path())
    }

    /// Read the raw bytes of a resource
    pub fn read(&self, id: &ResourceId) -> Result<Vec<u8>> {
        let path = self.filename(id);
        std::fs::read(&path).map_err(|e| fs::read_failed(path.display().to_string(), e.to_string()))
    }
}
