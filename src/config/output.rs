//! Output configuration for the command-line binary

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// How the serialized schema is written
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,

    /// Indent JSON output; YAML is always block-formatted
    #[serde(default = "default_pretty")]
    pub pretty: bool,
}

/// Document format on stdout
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Json,
    Yaml,
}

/// Errors rendering a document
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("JSON rendering failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML rendering failed: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl OutputConfig {
    /// Renders a primitive tree in the configured format.
    pub fn render(&self, document: &Value) -> Result<String, RenderError> {
        let text = match (self.format, self.pretty) {
            (OutputFormat::Json, true) => serde_json::to_string_pretty(document)?,
            (OutputFormat::Json, false) => serde_json::to_string(document)?,
            (OutputFormat::Yaml, _) => serde_yaml::to_string(document)?,
        };
        Ok(text)
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            pretty: default_pretty(),
        }
    }
}

fn default_pretty() -> bool {
    true
}
