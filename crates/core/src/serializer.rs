//! Output sinks for a parsed [`Matter`] tree.

use serde_json::Value;
use thiserror::Error;

use crate::document::Matter;

/// Errors that can occur while serializing a tree.
#[derive(Debug, Error)]
pub enum SerializeError {
    #[error("failed to encode JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to encode YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Transforms a parsed tree into some output.
pub trait Serializer {
    type Output;

    fn serialize(&self, matter: &Matter) -> Result<Self::Output, SerializeError>;
}

/// Returns the tree as-is.
#[derive(Debug, Clone, Copy, Default)]
pub struct ToObject;

impl Serializer for ToObject {
    type Output = Matter;

    fn serialize(&self, matter: &Matter) -> Result<Matter, SerializeError> {
        Ok(matter.clone())
    }
}

/// Encodes the tree as JSON text, keys in first-insertion order.
#[derive(Debug, Clone, Copy, Default)]
pub struct ToJson {
    pretty: bool,
}

impl ToJson {
    /// Compact single-line output.
    pub fn new() -> Self {
        Self::default()
    }

    /// Indented multi-line output.
    pub fn pretty() -> Self {
        Self { pretty: true }
    }
}

impl Serializer for ToJson {
    type Output = String;

    fn serialize(&self, matter: &Matter) -> Result<String, SerializeError> {
        let text = if self.pretty {
            serde_json::to_string_pretty(matter)?
        } else {
            serde_json::to_string(matter)?
        };
        Ok(text)
    }
}

/// Encodes the tree as a YAML document.
#[derive(Debug, Clone, Copy, Default)]
pub struct ToYaml;

impl Serializer for ToYaml {
    type Output = String;

    fn serialize(&self, matter: &Matter) -> Result<String, SerializeError> {
        Ok(serde_yaml::to_string(&Value::Object(matter.clone()))?)
    }
}
