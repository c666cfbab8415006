//! Configuration parsing
//!
//! Supports TOML (primary) and JSON formats.

use contracts::{SensorError, SensorsBlueprint};

/// Configuration file format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    /// TOML format (recommended)
    Toml,
    /// JSON format
    Json,
}

impl ConfigFormat {
    /// Infer the format from a file extension
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "toml" => Some(Self::Toml),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

/// Parse blueprint content in the given format
pub fn parse(content: &str, format: ConfigFormat) -> Result<SensorsBlueprint, SensorError> {
    match format {
        ConfigFormat::Toml => toml::from_str(content)
            .map_err(|e| SensorError::config_parse("blueprint", format!("TOML parse error: {e}"))),
        ConfigFormat::Json => serde_json::from_str(content)
            .map_err(|e| SensorError::config_parse("blueprint", format!("JSON parse error: {e}"))),
    }
}
