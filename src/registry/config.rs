//! Registry configuration loaded from YAML or JSON.
//!
//! Example YAML:
//! ```yaml
//! default_model: lin
//! aliases:
//!   lin: linear
//!   ols: linear
//! ```

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::error::RegistryError;

/// Environment variable holding the path of the registry configuration file.
pub const CONFIG_ENV_VAR: &str = "MODEL_REGISTRY_CONFIG";

/// Aliases and default model applied to a new [`ModelRegistry`](super::ModelRegistry).
///
/// Names are validated when the configuration is applied, not when it is parsed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryConfig {
    /// Alias -> registered model name
    #[serde(default)]
    pub aliases: HashMap<String, String>,

    /// Model created by `create_default`
    #[serde(default)]
    pub default_model: Option<String>,
}

impl RegistryConfig {
    /// Parse a configuration from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, RegistryError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Parse a configuration from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, RegistryError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a configuration file. `.json` files are parsed as JSON, anything
    /// else as YAML.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, RegistryError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let is_json = path
            .extension()
            .map_or(false, |ext| ext.eq_ignore_ascii_case("json"));

        log::debug!("Loading registry config from {}", path.display());
        if is_json {
            Self::from_json(&content)
        } else {
            Self::from_yaml(&content)
        }
    }

    /// Load the file named by [`CONFIG_ENV_VAR`], or the default configuration
    /// when the variable is unset.
    pub fn from_env() -> Result<Self, RegistryError> {
        match std::env::var_os(CONFIG_ENV_VAR) {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }
}
