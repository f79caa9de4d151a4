//! JSON shape of module definition files
//!
//! ```json
//! {
//!     "kind": "struct",
//!     "name": "time",
//!     "attributes": [
//!         { "kind": "function", "name": "now", "arguments": [[]] },
//!         { "kind": "value", "name": "epoch", "type": "i" }
//!     ]
//! }
//! ```

use std::path::Path;

use serde::Deserialize;
use serde_json::Value as Json;

use crate::error::{Result, module};

/// Kind tag every top-level definition must carry
pub const STRUCT_KIND: &str = "struct";

/// One entry of an `attributes` array
///
/// Kinds other than struct, function and value are accepted and skipped.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum RawAttribute {
    Struct {
        name: String,
        attributes: Vec<RawAttribute>,
    },
    Function {
        name: String,
        arguments: Vec<Vec<String>>,
    },
    Value {
        name: String,
        #[serde(rename = "type")]
        value_type: String,
        #[serde(default)]
        documentation: Option<String>,
    },
    #[serde(other)]
    Other,
}

/// Read and parse a definition file without interpreting it
pub fn read_json(path: &Path) -> Result<Json> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| module::parse_failed(path.display().to_string(), e.to_string()))?;
    serde_json::from_str(&content)
        .map_err(|e| module::parse_failed(path.display().to_string(), e.to_string()))
}

/// The top-level `name` of a definition, if it describes a struct
///
/// Used when scanning a directory to decide which files are modules. A
/// struct without a string `name` is an error rather than a skipped file.
pub fn struct_header<'a>(json: &'a Json, path: &Path) -> Result<Option<&'a str>> {
    if json.get("kind").and_then(Json::as_str) != Some(STRUCT_KIND) {
        return Ok(None);
    }
    json.get("name")
        .and_then(Json::as_str)
        .map(Some)
        .ok_or_else(|| {
            module::parse_failed(
                path.display().to_string(),
                "The key 'name' not found or not a string",
            )
        })
}

/// Parse a full definition, requiring a top-level struct
pub fn parse_definition(json: Json, path: &Path) -> Result<RawAttribute> {
    let kind = json.get("kind").and_then(Json::as_str);
    if kind != Some(STRUCT_KIND) {
        return Err(module::invalid(format!(
            "The first level 'kind' entry must be 'struct' in '{}'",
            path.display()
        )));
    }

    serde_json::from_value(json)
        .map_err(|e| module::parse_failed(path.display().to_string(), e.to_string()))
}
