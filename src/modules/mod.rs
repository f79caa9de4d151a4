//! Module definitions
//!
//! A module is a named tree of structures, functions and values described by
//! one or more JSON files (see [`definition`]). Files that share a module
//! name are merged into a single structure.

pub mod definition;
pub mod pool;

use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::error::{ResprobeError, Result, module};
use definition::RawAttribute;

pub use pool::ModulesPool;

/// Parameter type of a module function
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgumentType {
    Int,
    Float,
    Regexp,
    String,
}

impl FromStr for ArgumentType {
    type Err = ResprobeError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "int" => Ok(Self::Int),
            "float" => Ok(Self::Float),
            "regexp" => Ok(Self::Regexp),
            "string" => Ok(Self::String),
            _ => Err(module::invalid(format!(
                "Unknown function parameter type '{s}'"
            ))),
        }
    }
}

/// Type of a module value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueType {
    Int,
    Float,
    String,
    Regexp,
}

impl FromStr for ValueType {
    type Err = ResprobeError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "i" => Ok(Self::Int),
            "f" => Ok(Self::Float),
            "s" => Ok(Self::String),
            "r" => Ok(Self::Regexp),
            _ => Err(module::invalid(format!("Unknown value type '{s}'"))),
        }
    }
}

/// A function with one or more overloads
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Function {
    pub name: String,
    pub overloads: Vec<Vec<ArgumentType>>,
}

/// A typed value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Value {
    pub name: String,
    pub value_type: ValueType,
    pub documentation: Option<String>,
}

/// A named structure holding attributes keyed by name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Structure {
    pub name: String,
    pub attributes: BTreeMap<String, Attribute>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Attribute {
    Struct(Structure),
    Function(Function),
    Value(Value),
}

impl Attribute {
    pub fn name(&self) -> &str {
        match self {
            Attribute::Struct(s) => &s.name,
            Attribute::Function(f) => &f.name,
            Attribute::Value(v) => &v.name,
        }
    }

    fn kind(&self) -> &'static str {
        match self {
            Attribute::Struct(_) => "struct",
            Attribute::Function(_) => "function",
            Attribute::Value(_) => "value",
        }
    }

    /// Convert a raw attribute, returning `None` for skipped kinds
    fn from_raw(raw: RawAttribute) -> Result<Option<Self>> {
        match raw {
            RawAttribute::Struct { name, attributes } => {
                Ok(Some(Attribute::Struct(Structure::from_raw(name, attributes)?)))
            }
            RawAttribute::Function { name, arguments } => {
                let overloads = arguments
                    .iter()
                    .map(|overload| {
                        overload
                            .iter()
                            .map(|t| t.parse::<ArgumentType>())
                            .collect::<Result<Vec<_>>>()
                    })
                    .collect::<Result<Vec<_>>>()?;
                Ok(Some(Attribute::Function(Function { name, overloads })))
            }
            RawAttribute::Value {
                name,
                value_type,
                documentation,
            } => Ok(Some(Attribute::Value(Value {
                name,
                value_type: value_type.parse()?,
                documentation,
            }))),
            RawAttribute::Other => Ok(None),
        }
    }
}

impl Structure {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: BTreeMap::new(),
        }
    }

    fn from_raw(name: String, raw: Vec<RawAttribute>) -> Result<Self> {
        let mut structure = Self::new(name);
        for attribute in raw {
            if let Some(attribute) = Attribute::from_raw(attribute)? {
                structure.add(attribute)?;
            }
        }
        Ok(structure)
    }

    #[allow(dead_code)]
    pub fn get(&self, name: &str) -> Option<&Attribute> {
        self.attributes.get(name)
    }

    /// Add an attribute, merging with an existing one of the same name
    ///
    /// Structures merge recursively, function overloads accumulate, and
    /// values must agree on their type.
    pub fn add(&mut self, attribute: Attribute) -> Result<()> {
        let Some(existing) = self.attributes.get_mut(attribute.name()) else {
            self.attributes
                .insert(attribute.name().to_string(), attribute);
            return Ok(());
        };

        match (existing, attribute) {
            (Attribute::Struct(existing), Attribute::Struct(incoming)) => {
                existing.merge(incoming)
            }
            (Attribute::Function(existing), Attribute::Function(incoming)) => {
                for overload in incoming.overloads {
                    if !existing.overloads.contains(&overload) {
                        existing.overloads.push(overload);
                    }
                }
                Ok(())
            }
            (Attribute::Value(existing), Attribute::Value(incoming)) => {
                if existing.value_type != incoming.value_type {
                    return Err(module::invalid(format!(
                        "Value '{}' is redefined with a different type in '{}'",
                        incoming.name, self.name
                    )));
                }
                if existing.documentation.is_none() {
                    existing.documentation = incoming.documentation;
                }
                Ok(())
            }
            (existing, incoming) => Err(module::invalid(format!(
                "Attribute '{}' of '{}' is defined both as {} and {}",
                incoming.name(),
                self.name,
                existing.kind(),
                incoming.kind()
            ))),
        }
    }

    /// Merge all attributes of `other` into this structure
    pub fn merge(&mut self, other: Structure) -> Result<()> {
        for attribute in other.attributes.into_values() {
            self.add(attribute)?;
        }
        Ok(())
    }

    /// Number of attributes, counting nested structures recursively
    pub fn attribute_count(&self) -> usize {
        self.attributes
            .values()
            .map(|attribute| match attribute {
                Attribute::Struct(s) => 1 + s.attribute_count(),
                Attribute::Function(_) | Attribute::Value(_) => 1,
            })
            .sum()
    }
}

/// A module backed by one or more definition files
#[derive(Debug, Clone)]
pub struct Module {
    name: String,
    paths: Vec<PathBuf>,
    structure: Option<Structure>,
}

impl Module {
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            paths: vec![path.into()],
            structure: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    #[allow(dead_code)]
    pub fn paths(&self) -> &[PathBuf] {
        &self.paths
    }

    /// Register another definition file for this module
    pub fn add_path(&mut self, path: impl Into<PathBuf>) {
        self.paths.push(path.into());
    }

    /// Paths joined for display
    pub fn paths_as_string(&self) -> String {
        self.paths
            .iter()
            .map(|p| p.display().to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }

    pub fn is_initialized(&self) -> bool {
        self.structure.is_some()
    }

    pub fn structure(&self) -> Option<&Structure> {
        self.structure.as_ref()
    }

    /// Read every definition file and merge them into one structure
    pub fn initialize(&mut self) -> Result<()> {
        let mut merged: Option<Structure> = None;

        for path in &self.paths {
            let structure = read_structure(path)?;
            if structure.name != self.name {
                return Err(module::invalid(format!(
                    "Module '{}' cannot include '{}' which defines '{}'",
                    self.name,
                    path.display(),
                    structure.name
                )));
            }
            match merged.as_mut() {
                Some(existing) => existing.merge(structure)?,
                None => merged = Some(structure),
            }
        }

        self.structure = merged;
        Ok(())
    }
}

impl fmt::Display for Module {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.paths_as_string())
    }
}

fn read_structure(path: &Path) -> Result<Structure> {
    let json = definition::read_json(path)?;
    match definition::parse_definition(json, path)? {
        RawAttribute::Struct { name, attributes } => Structure::from_raw(name, attributes),
        _ => Err(module::invalid(format!(
            "The first level 'kind' entry must be 'struct' in '{}'",
            path.display()
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_fixtures::{create_temp_dir, write_file};

    fn function(name: &str, overloads: Vec<Vec<ArgumentType>>) -> Attribute {
        Attribute::Function(Function {
            name: name.to_string(),
            overloads,
        })
    }

    fn value(name: &str, value_type: ValueType) -> Attribute {
        Attribute::Value(Value {
            name: name.to_string(),
            value_type,
            documentation: None,
        })
    }

    #[test]
    fn test_argument_types() {
        assert_eq!("int".parse::<ArgumentType>().unwrap(), ArgumentType::Int);
        assert_eq!(
            "regexp".parse::<ArgumentType>().unwrap(),
            ArgumentType::Regexp
        );
        assert_eq!(
            "string".parse::<ArgumentType>().unwrap(),
            ArgumentType::String
        );
        assert_eq!(
            "float".parse::<ArgumentType>().unwrap(),
            ArgumentType::Float
        );
    }

    #[test]
    fn test_unknown_argument_type() {
        let err = "bool".parse::<ArgumentType>().unwrap_err();
        assert_eq!(err.to_string(), "Invalid module definition: Unknown function parameter type 'bool'");
    }

    #[test]
    fn test_value_types() {
        assert_eq!("i".parse::<ValueType>().unwrap(), ValueType::Int);
        assert_eq!("f".parse::<ValueType>().unwrap(), ValueType::Float);
        assert_eq!("s".parse::<ValueType>().unwrap(), ValueType::String);
        assert_eq!("r".parse::<ValueType>().unwrap(), ValueType::Regexp);
        assert!("int".parse::<ValueType>().is_err());
    }

    #[test]
    fn test_function_overloads_accumulate() {
        let mut s = Structure::new("time");
        s.add(function("now", vec![vec![]])).unwrap();
        s.add(function(
            "now",
            vec![vec![], vec![ArgumentType::Int]],
        ))
        .unwrap();

        let Some(Attribute::Function(f)) = s.get("now") else {
            panic!("Expected function");
        };
        assert_eq!(f.overloads, vec![vec![], vec![ArgumentType::Int]]);
    }

    #[test]
    fn test_value_type_conflict() {
        let mut s = Structure::new("time");
        s.add(value("epoch", ValueType::Int)).unwrap();
        assert!(s.add(value("epoch", ValueType::Int)).is_ok());
        let err = s.add(value("epoch", ValueType::String)).unwrap_err();
        assert!(err.to_string().contains("epoch"));
    }

    #[test]
    fn test_kind_conflict() {
        let mut s = Structure::new("time");
        s.add(value("now", ValueType::Int)).unwrap();
        let err = s.add(function("now", vec![vec![]])).unwrap_err();
        assert!(err.to_string().contains("both as value and function"));
    }

    #[test]
    fn test_nested_structs_merge() {
        let mut zone_a = Structure::new("zone");
        zone_a.add(value("offset", ValueType::Int)).unwrap();
        let mut zone_b = Structure::new("zone");
        zone_b.add(value("name", ValueType::String)).unwrap();

        let mut s = Structure::new("time");
        s.add(Attribute::Struct(zone_a)).unwrap();
        s.add(Attribute::Struct(zone_b)).unwrap();

        let Some(Attribute::Struct(zone)) = s.get("zone") else {
            panic!("Expected struct");
        };
        assert!(zone.get("offset").is_some());
        assert!(zone.get("name").is_some());
        assert_eq!(s.attribute_count(), 3);
    }

    #[test]
    fn test_module_initialize_merges_files() {
        let temp = create_temp_dir();
        write_file(
            temp.path(),
            "time_a.json",
            r#"{"kind": "struct", "name": "time", "attributes": [
                {"kind": "function", "name": "now", "arguments": [[]]}
            ]}"#,
        );
        write_file(
            temp.path(),
            "time_b.json",
            r#"{"kind": "struct", "name": "time", "attributes": [
                {"kind": "value", "name": "epoch", "type": "i"}
            ]}"#,
        );

        let mut module = Module::new("time", temp.path().join("time_a.json"));
        module.add_path(temp.path().join("time_b.json"));
        assert!(!module.is_initialized());

        module.initialize().unwrap();
        let structure = module.structure().unwrap();
        assert_eq!(structure.name, "time");
        assert!(structure.get("now").is_some());
        assert!(structure.get("epoch").is_some());
        assert!(module.paths_as_string().contains("time_a.json, "));
    }

    #[test]
    fn test_module_initialize_unknown_parameter_type() {
        let temp = create_temp_dir();
        write_file(
            temp.path(),
            "time.json",
            r#"{"kind": "struct", "name": "time", "attributes": [
                {"kind": "function", "name": "now", "arguments": [["bool"]]}
            ]}"#,
        );

        let mut module = Module::new("time", temp.path().join("time.json"));
        let err = module.initialize().unwrap_err();
        assert!(err.to_string().contains("Unknown function parameter type 'bool'"));
    }

    #[test]
    fn test_module_initialize_name_mismatch() {
        let temp = create_temp_dir();
        write_file(
            temp.path(),
            "phish.json",
            r#"{"kind": "struct", "name": "phish", "attributes": []}"#,
        );

        let mut module = Module::new("time", temp.path().join("phish.json"));
        assert!(module.initialize().is_err());
    }
}
