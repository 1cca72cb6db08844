//! JSON and YAML export for OpenAPI specifications

use crate::spec::OpenApiSpec;
use thiserror::Error;

/// Errors raised while exporting or loading a specification
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl OpenApiSpec {
    /// Render the specification as compact JSON.
    pub fn to_json(&self) -> Result<String, ExportError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Render the specification as pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String, ExportError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Render the specification as YAML.
    pub fn to_yaml(&self) -> Result<String, ExportError> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Load a specification from JSON.
    pub fn from_json(json: &str) -> Result<Self, ExportError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a specification from YAML.
    pub fn from_yaml(yaml: &str) -> Result<Self, ExportError> {
        Ok(serde_yaml::from_str(yaml)?)
    }
}
