//! Validated model identifiers.

use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::error::RegistryError;

/// Identifier a factory is registered under.
///
/// Guaranteed non-empty, not whitespace-only, and free of control characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ModelName(String);

impl ModelName {
    /// Validate `name` and wrap it.
    pub fn new(name: impl Into<String>) -> Result<Self, RegistryError> {
        Self::parse("name", name.into())
    }

    /// Validate `value` on behalf of the argument called `argument`.
    pub(crate) fn parse(argument: &'static str, value: String) -> Result<Self, RegistryError> {
        if value.is_empty() {
            return Err(RegistryError::invalid(argument, "must not be empty"));
        }
        if value.trim().is_empty() {
            return Err(RegistryError::invalid(
                argument,
                "must not be whitespace only",
            ));
        }
        if value.chars().any(char::is_control) {
            return Err(RegistryError::invalid(
                argument,
                format!("{:?} contains control characters", value),
            ));
        }
        Ok(Self(value))
    }

    /// The identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ModelName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ModelName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// Lets `HashMap<ModelName, _>` be queried with a plain `&str`.
impl Borrow<str> for ModelName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ModelName {
    type Error = RegistryError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for ModelName {
    type Error = RegistryError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ModelName> for String {
    fn from(name: ModelName) -> Self {
        name.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_plain_and_namespaced_names() {
        assert_eq!(ModelName::new("linear").unwrap().as_str(), "linear");
        assert_eq!(
            ModelName::new("sk:ridge v2").unwrap().to_string(),
            "sk:ridge v2"
        );
    }

    #[test]
    fn test_rejects_empty() {
        let err = ModelName::new("").unwrap_err();
        assert!(matches!(
            err,
            RegistryError::InvalidArgument { argument: "name", .. }
        ));
    }

    #[test]
    fn test_rejects_whitespace_and_control_characters() {
        assert!(matches!(
            ModelName::new("   "),
            Err(RegistryError::InvalidArgument { .. })
        ));
        assert!(matches!(
            ModelName::new("line\nar"),
            Err(RegistryError::InvalidArgument { .. })
        ));
    }

    #[test]
    fn test_deserialize_validates() {
        let name: ModelName = serde_yaml::from_str("linear").unwrap();
        assert_eq!(name.as_str(), "linear");
        assert!(serde_yaml::from_str::<ModelName>("''").is_err());
    }
}
