//! Pool of known modules
//!
//! Built by scanning a directory for `*.json` definition files. Every file
//! whose top-level kind is `struct` is registered under its `name`; files
//! that share a name become extra paths of the same module.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use super::{Module, definition};
use crate::error::{Result, module};

/// Extension of module definition files
const DEFINITION_EXTENSION: &str = "json";

#[derive(Debug, Clone, Default)]
pub struct ModulesPool {
    known_modules: BTreeMap<String, Module>,
}

impl ModulesPool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load every module defined directly inside `directory`
    ///
    /// Subdirectories are not descended into. Files are visited in
    /// file-name order so paths of a shared module are deterministic.
    pub fn from_dir(directory: &Path) -> Result<Self> {
        if !directory.is_dir() {
            return Err(module::dir_not_found(directory.display().to_string()));
        }

        let mut known_modules: BTreeMap<String, Module> = BTreeMap::new();

        let entries = WalkDir::new(directory)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name()
            .into_iter()
            .filter_map(std::result::Result::ok)
            .filter(|e| e.file_type().is_file())
            .filter(|e| {
                e.path()
                    .extension()
                    .is_some_and(|ext| ext == DEFINITION_EXTENSION)
            });

        for entry in entries {
            let path = entry.path();
            let json = definition::read_json(path)?;
            let Some(name) = definition::struct_header(&json, path)? else {
                continue;
            };

            match known_modules.get_mut(name) {
                Some(existing) => existing.add_path(path),
                None => {
                    known_modules.insert(name.to_string(), Module::new(name, path));
                }
            }
        }

        for module in known_modules.values_mut() {
            module.initialize()?;
        }

        Ok(Self { known_modules })
    }

    /// Look up an initialized module by name
    pub fn load(&self, name: &str) -> Option<&Module> {
        self.known_modules
            .get(name)
            .filter(|module| module.is_initialized())
    }

    /// Create a module from explicit definition files and add it to the pool
    ///
    /// The module name is taken from the first file.
    pub fn create(&mut self, paths: Vec<PathBuf>) -> Result<&Module> {
        let mut paths = paths.into_iter();
        let Some(first) = paths.next() else {
            return Err(module::invalid("No definition files given"));
        };

        let json = definition::read_json(&first)?;
        let name = definition::parse_definition(json, &first).and_then(|raw| match raw {
            definition::RawAttribute::Struct { name, .. } => Ok(name),
            _ => Err(module::invalid(format!(
                "The first level 'kind' entry must be 'struct' in '{}'",
                first.display()
            ))),
        })?;

        if self.known_modules.contains_key(&name) {
            return Err(module::already_created(name));
        }

        let mut created = Module::new(name.clone(), first);
        for path in paths {
            created.add_path(path);
        }
        created.initialize()?;

        Ok(&*self.known_modules.entry(name).or_insert(created))
    }

    /// Names of all known modules, sorted
    pub fn names(&self) -> Vec<&str> {
        self.known_modules.keys().map(String::as_str).collect()
    }

    pub fn modules(&self) -> impl Iterator<Item = &Module> {
        self.known_modules.values()
    }

    pub fn len(&self) -> usize {
        self.known_modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.known_modules.is_empty()
    }
}
