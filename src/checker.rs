//! Resource existence checker
//!
//! Runs a fixed, straight-line sequence against a [`Package`]:
//!
//! 1. report whether each configured resource exists (`True`/`False`)
//! 2. require the public module to exist
//! 3. resolve it to a path, print it, and require a regular file there
//! 4. read it and require at least one byte
//!
//! Steps 2-4 are fail-fast: the first violation is returned as an error and
//! nothing after it runs. Stdout output is deterministic for an unchanged
//! package.

use std::io::Write;
use std::path::PathBuf;

use crate::config::ResourceSet;
use crate::error::{Result, precondition};
use crate::hash;
use crate::resource::{Package, ResourceId};
use crate::ui::Reporter;

/// Printed before the existence report
pub const GREETING: &str = "Hello, world";

/// Width of the separator printed around the content check
pub const SEPARATOR_WIDTH: usize = 20;

/// Outcome of the content check for one resource
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentCheck {
    pub id: ResourceId,
    pub path: PathBuf,
    pub len: usize,
}

/// Everything a successful run observed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckReport {
    /// Existence per identifier, in report order
    pub existence: Vec<(ResourceId, bool)>,
    pub public_module: ContentCheck,
    pub private_module: Option<ContentCheck>,
}

pub struct Checker<'a> {
    package: &'a Package,
    resources: &'a ResourceSet,
    reporter: Reporter,
}

impl<'a> Checker<'a> {
    pub fn new(package: &'a Package, resources: &'a ResourceSet) -> Self {
        Self {
            package,
            resources,
            reporter: Reporter::default(),
        }
    }

    #[must_use]
    pub fn with_reporter(mut self, reporter: Reporter) -> Self {
        self.reporter = reporter;
        self
    }

    /// Run the check, writing the report lines to `out`
    pub fn run<W: Write>(&self, out: &mut W) -> Result<CheckReport> {
        writeln!(out, "{GREETING}")?;

        let existence = self.report_existence(out)?;

        let public_module = self.check_content(out, &self.resources.public_module)?;

        let private_module = if self.resources.check_private {
            Some(self.check_content(out, &self.resources.private_module)?)
        } else {
            None
        };

        Ok(CheckReport {
            existence,
            public_module,
            private_module,
        })
    }

    fn report_existence<W: Write>(&self, out: &mut W) -> Result<Vec<(ResourceId, bool)>> {
        let mut existence = Vec::with_capacity(4);
        for id in self.resources.in_order() {
            let exists = self.package.exists(id);
            writeln!(out, "{}", display_bool(exists))?;
            self.reporter.detail("exists:", format!("{id} = {exists}"));
            existence.push((id.clone(), exists));
        }
        Ok(existence)
    }

    fn check_content<W: Write>(&self, out: &mut W, id: &ResourceId) -> Result<ContentCheck> {
        if !self.package.exists(id) {
            return Err(precondition::resource_missing(id.as_str()));
        }

        writeln!(out, "{}", separator())?;

        let path = self.package.filename(id);
        writeln!(out, "{}", path.display())?;
        if !path.is_file() {
            return Err(precondition::resolved_path_missing(
                path.display().to_string(),
            ));
        }

        let contents = self.package.read(id)?;
        if contents.is_empty() {
            return Err(precondition::resource_empty(id.as_str()));
        }
        self.reporter.detail("bytes:", contents.len());
        self.reporter.detail("digest:", hash::hash_bytes(&contents));

        writeln!(out, "{}", separator())?;

        Ok(ContentCheck {
            id: id.clone(),
            path,
            len: contents.len(),
        })
    }
}

fn display_bool(value: bool) -> &'static str {
    if value { "True" } else { "False" }
}

fn separator() -> String {
    "=".repeat(SEPARATOR_WIDTH)
}
