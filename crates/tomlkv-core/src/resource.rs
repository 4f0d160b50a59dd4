//! Resource instance exchanged with the host

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Error, Result};

/// One key of one TOML file, as requested by or reported to the host.
///
/// ```
/// use tomlkv_core::KeyValue;
///
/// let instance: KeyValue =
///     serde_json::from_str(r#"{"path": "app.toml", "key": "server.port", "value": 8080}"#).unwrap();
/// assert_eq!(instance.key, "server.port");
/// assert!(instance.exists());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct KeyValue {
    /// Location of the TOML file
    pub path: PathBuf,

    /// Dotted key path, e.g. `section.subsection.key`
    pub key: String,

    /// Value of the key. A missing or `null` value is written as `""`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,

    /// Whether the key should exist (desired) or does exist (actual).
    /// Absent means `true`.
    #[serde(rename = "_exist", default, skip_serializing_if = "Option::is_none")]
    pub exist: Option<bool>,
}

impl KeyValue {
    pub fn new(path: impl Into<PathBuf>, key: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            key: key.into(),
            value: None,
            exist: None,
        }
    }

    pub fn with_value(mut self, value: Value) -> Self {
        self.value = Some(value);
        self
    }

    pub fn with_exist(mut self, exist: bool) -> Self {
        self.exist = Some(exist);
        self
    }

    /// Actual state of a key that is present.
    pub fn present(path: &Path, key: &str, value: Value) -> Self {
        Self::new(path, key).with_value(value)
    }

    /// Actual state of a key (or file) that is missing.
    pub fn absent(path: &Path, key: &str) -> Self {
        Self::new(path, key).with_exist(false)
    }

    pub fn exists(&self) -> bool {
        self.exist.unwrap_or(true)
    }

    /// Reject instances no operation can act on.
    pub fn validate(&self) -> Result<()> {
        if self.path.as_os_str().is_empty() {
            return Err(Error::invalid_parameter("'path' must not be empty"));
        }
        Ok(())
    }
}

/// Outcome of comparing the actual state of a key with a desired one.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TestResult {
    #[serde(flatten)]
    pub actual: KeyValue,

    #[serde(rename = "_inDesiredState")]
    pub in_desired_state: bool,

    /// Names of the properties that differ, in wire form
    #[serde(rename = "_differingProperties", skip_serializing_if = "Vec::is_empty")]
    pub differing_properties: Vec<String>,
}
