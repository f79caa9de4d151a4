//! Probe configuration (resprobe.yaml)
//!
//! The resource set defaults to the four identifiers every package is
//! expected to carry. A `resprobe.yaml` at the package root may override
//! any of them.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, config};
use crate::resource::ResourceId;

/// Configuration file name looked up at the package root
pub const CONFIG_FILE: &str = "resprobe.yaml";

/// Package README
pub const README: &str = "README.md";

/// Parser test file shipped with the package
pub const TEST_PARSER: &str = "tests/python/test_parser.py";

/// Public module definition, required to exist and be non-empty
pub const PUBLIC_MODULE_TIME: &str = "modules/public/module_time.json";

/// Private module definition, only checked on request
pub const PRIVATE_MODULE_PHISH: &str = "modules/private/module_phish.json";

/// On-disk shape of resprobe.yaml
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub readme: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub test_parser: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public_module: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub private_module: Option<String>,

    #[serde(default)]
    pub check_private: bool,
}

/// The fixed identifiers a check run works on
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceSet {
    pub readme: ResourceId,
    pub test_parser: ResourceId,
    pub public_module: ResourceId,
    pub private_module: ResourceId,

    /// Also run the fail-fast checks against the private module
    pub check_private: bool,
}

impl ResourceSet {
    /// Built-in resource set
    pub fn defaults() -> Result<Self> {
        Ok(Self {
            readme: ResourceId::new(README)?,
            test_parser: ResourceId::new(TEST_PARSER)?,
            public_module: ResourceId::new(PUBLIC_MODULE_TIME)?,
            private_module: ResourceId::new(PRIVATE_MODULE_PHISH)?,
            check_private: false,
        })
    }

    /// Apply overrides from a parsed configuration file
    pub fn with_overrides(mut self, file: ConfigFile) -> Result<Self> {
        fn apply(slot: &mut ResourceId, field: &str, value: Option<String>) -> Result<()> {
            if let Some(value) = value {
                *slot = ResourceId::new(value)
                    .map_err(|e| config::invalid(format!("{field}: {e}")))?;
            }
            Ok(())
        }

        apply(&mut self.readme, "readme", file.readme)?;
        apply(&mut self.test_parser, "test_parser", file.test_parser)?;
        apply(&mut self.public_module, "public_module", file.public_module)?;
        apply(&mut self.private_module, "private_module", file.private_module)?;
        self.check_private |= file.check_private;

        Ok(self)
    }

    /// Identifiers in the order their existence is reported
    pub fn in_order(&self) -> [&ResourceId; 4] {
        [
            &self.readme,
            &self.test_parser,
            &self.public_module,
            &self.private_module,
        ]
    }
}

/// Loaded configuration and where it came from
#[derive(Debug, Clone)]
pub struct ProbeConfig {
    pub resources: ResourceSet,

    /// Path of the configuration file, if one was found
    pub source: Option<PathBuf>,
}

impl ProbeConfig {
    /// Load configuration for a package root
    ///
    /// A missing resprobe.yaml is not an error; the defaults are used.
    pub fn load(root: &Path) -> Result<Self> {
        let path = root.join(CONFIG_FILE);
        let defaults = ResourceSet::defaults()?;

        if !path.is_file() {
            return Ok(Self {
                resources: defaults,
                source: None,
            });
        }

        let content = std::fs::read_to_string(&path)
            .map_err(|e| config::read_failed(path.display().to_string(), e.to_string()))?;
        let file = parse(&content, &path)?;

        Ok(Self {
            resources: defaults.with_overrides(file)?,
            source: Some(path),
        })
    }
}

fn parse(content: &str, path: &Path) -> Result<ConfigFile> {
    if content.trim().is_empty() {
        return Ok(ConfigFile::default());
    }
    serde_yaml::from_str(content)
        .map_err(|e| config::parse_failed(path.display().to_string(), e.to_string()))
}
