//! Registry errors.

use thiserror::Error;

/// Errors that can occur while registering, resolving, or creating models.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// An argument was empty or malformed.
    #[error("Invalid argument `{argument}`: {reason}")]
    InvalidArgument {
        argument: &'static str,
        reason: String,
    },

    /// No factory is registered under the identifier.
    #[error("Model not found: {0}")]
    NotFound(String),

    /// `create_default` was called without a configured default model.
    #[error("No default model configured")]
    NoDefault,

    /// The registered factory failed to construct an instance.
    #[error("Factory for `{name}` failed: {source}")]
    Construction {
        name: String,
        #[source]
        source: anyhow::Error,
    },

    /// The process-wide registry was installed twice.
    #[error("Global model registry already initialized")]
    AlreadyInitialized,

    /// The process-wide registry was used before installation.
    #[error("Global model registry not initialized")]
    Uninitialized,

    /// Configuration file could not be read.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML configuration could not be parsed.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// JSON configuration could not be parsed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl RegistryError {
    pub(crate) fn invalid(argument: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            argument,
            reason: reason.into(),
        }
    }
}
