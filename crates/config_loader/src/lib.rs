//! # Config Loader
//!
//! Configuration loading and parsing module.
//!
//! Responsibilities:
//! - Parse TOML/JSON blueprint files
//! - Validate blueprint legality
//! - Produce a `SensorsBlueprint`
//!
//! # Example
//!
//! ```no_run
//! use config_loader::ConfigLoader;
//! use std::path::Path;
//!
//! let blueprint = ConfigLoader::load_from_path(Path::new("sensors.toml")).unwrap();
//! println!("sensors: {}", blueprint.sensors.len());
//! ```

mod parser;
mod validator;

pub use contracts::SensorsBlueprint;
pub use parser::ConfigFormat;

use contracts::SensorError;
use std::path::Path;

/// Configuration loader
///
/// Provides static methods to load a blueprint from files or strings.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load a blueprint from a file path.
    ///
    /// Automatically detects format from file extension (.toml / .json).
    ///
    /// # Errors
    /// - File read failure
    /// - Unsupported format
    /// - Parse failure
    /// - Validation failure
    pub fn load_from_path(path: &Path) -> Result<SensorsBlueprint, SensorError> {
        let format = Self::detect_format(path)?;
        let content = Self::read_file(path)?;
        Self::load_from_str(&content, format)
    }

    /// Load a blueprint from a string.
    ///
    /// # Errors
    /// - Parse failure
    /// - Validation failure
    pub fn load_from_str(
        content: &str,
        format: ConfigFormat,
    ) -> Result<SensorsBlueprint, SensorError> {
        let blueprint = parser::parse(content, format)?;
        validator::validate(&blueprint)?;
        Ok(blueprint)
    }

    /// Serialize a blueprint to a TOML string
    pub fn to_toml(blueprint: &SensorsBlueprint) -> Result<String, SensorError> {
        toml::to_string_pretty(blueprint)
            .map_err(|e| SensorError::config_parse("blueprint", format!("TOML serialize error: {e}")))
    }

    /// Serialize a blueprint to a JSON string
    pub fn to_json(blueprint: &SensorsBlueprint) -> Result<String, SensorError> {
        serde_json::to_string_pretty(blueprint)
            .map_err(|e| SensorError::config_parse("blueprint", format!("JSON serialize error: {e}")))
    }
}

impl ConfigLoader {
    /// Infer configuration format from file extension
    fn detect_format(path: &Path) -> Result<ConfigFormat, SensorError> {
        let ext = path.extension().and_then(|e| e.to_str()).ok_or_else(|| {
            SensorError::config_parse("blueprint", "cannot determine file format from extension")
        })?;

        ConfigFormat::from_extension(ext).ok_or_else(|| {
            SensorError::config_parse("blueprint", format!("unsupported config format: .{ext}"))
        })
    }

    /// Read configuration file content
    fn read_file(path: &Path) -> Result<String, SensorError> {
        Ok(std::fs::read_to_string(path)?)
    }
}
