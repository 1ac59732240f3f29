//! CLI configuration
//!
//! Handles loading of the optional `.stringcase.yaml` file. The transforms
//! themselves take no configuration; this only shapes how the `stringcase`
//! binary picks a style and prints results.

use crate::case::Case;
use crate::error::{Error, Result};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Default config file name looked up in the working directory
pub const CONFIG_FILE: &str = ".stringcase.yaml";

/// Current config schema version
pub const CONFIG_VERSION: u32 = 1;

/// stringcase configuration (`.stringcase.yaml`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Config {
    /// Schema version for migrations
    pub version: u32,

    /// Style used when the case argument is `-`
    #[serde(default = "default_case")]
    pub default_case: Case,

    /// Output format
    #[serde(default)]
    pub output: OutputFormat,

    /// Trim ASCII whitespace from every input before converting
    #[serde(default)]
    pub trim_input: bool,

    /// Extra names for styles, e.g. `kebab2: spinal`
    #[serde(default)]
    pub aliases: BTreeMap<String, String>,
}

fn default_case() -> Case {
    Case::Snake
}

/// How conversions are printed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One converted value per line
    #[default]
    Text,
    /// JSON array of conversions
    Json,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            default_case: default_case(),
            output: OutputFormat::Text,
            trim_input: false,
            aliases: BTreeMap::new(),
        }
    }
}

impl Config {
    /// Parse config from YAML text and validate it
    pub fn from_yaml(content: &str) -> Result<Self> {
        let config: Config = serde_norway::from_str(content)
            .map_err(|e| Error::Config(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config file from an explicit path
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(Error::Io)?;
        log::debug!("Loaded config from {}", path.display());
        Self::from_yaml(&content)
    }

    /// Load `.stringcase.yaml` from a directory, falling back to defaults
    pub fn load_from_dir(dir: &Path) -> Result<Self> {
        let config_file = dir.join(CONFIG_FILE);
        if !config_file.exists() {
            log::debug!("No {} in {}, using defaults", CONFIG_FILE, dir.display());
            return Ok(Self::default());
        }
        Self::load(&config_file)
    }

    fn validate(&self) -> Result<()> {
        if self.version != CONFIG_VERSION {
            return Err(Error::Config(format!(
                "Unsupported config version: {}",
                self.version
            )));
        }

        for (alias, target) in &self.aliases {
            target.parse::<Case>().map_err(|_| {
                Error::Config(format!("Alias '{}' points to unknown case '{}'", alias, target))
            })?;
        }
        Ok(())
    }

    /// Resolve a case name, consulting aliases before built-in names.
    ///
    /// `-` selects `default_case`.
    pub fn resolve_case(&self, name: &str) -> Result<Case> {
        if name == "-" {
            return Ok(self.default_case);
        }
        match self.aliases.get(name) {
            Some(target) => target.parse(),
            None => name.parse(),
        }
    }

    /// Apply input preprocessing and then the style
    pub fn convert(&self, case: Case, input: &str) -> String {
        if self.trim_input {
            case.apply(&crate::trimcase(input))
        } else {
            case.apply(input)
        }
    }
}
