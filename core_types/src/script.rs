//! Script names
//!
//! Script names are matched exactly: no trimming, no case folding.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Script name validation errors
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ScriptNameError {
    #[error("Script name must not be empty")]
    Empty,
}

/// Name of a script exposed by the host
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ScriptName(String);

impl ScriptName {
    /// Creates a script name, rejecting the empty string
    pub fn new(name: impl Into<String>) -> Result<Self, ScriptNameError> {
        let name = name.into();
        if name.is_empty() {
            return Err(ScriptNameError::Empty);
        }
        Ok(Self(name))
    }

    /// Returns the name as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for ScriptName {
    type Err = ScriptNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for ScriptName {
    type Error = ScriptNameError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ScriptName> for String {
    fn from(name: ScriptName) -> Self {
        name.0
    }
}

impl AsRef<str> for ScriptName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ScriptName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_name_rejected() {
        assert_eq!(ScriptName::new(""), Err(ScriptNameError::Empty));
        assert!("".parse::<ScriptName>().is_err());
    }

    #[test]
    fn test_name_kept_verbatim() {
        let name = ScriptName::new(" GetUsers ").unwrap();
        assert_eq!(name.as_str(), " GetUsers ");
        assert_ne!(name, ScriptName::new("getusers").unwrap());
    }

    #[test]
    fn test_serde_transparent_string() {
        let name = ScriptName::new("SaveRecord").unwrap();
        let json = serde_json::to_string(&name).unwrap();
        assert_eq!(json, "\"SaveRecord\"");

        let back: ScriptName = serde_json::from_str(&json).unwrap();
        assert_eq!(back, name);
    }

    #[test]
    fn test_serde_rejects_empty() {
        let result: Result<ScriptName, _> = serde_json::from_str("\"\"");
        assert!(result.is_err());
    }
}
