//! Layered error definitions
//!
//! Categorized by source: config / flight-dynamics properties / physical domain

use thiserror::Error;

/// Unified error type
///
/// Every failure is local to one `configure` or `get_data` call; nothing in
/// this family may take down the host's stepping loop.
#[derive(Debug, Error)]
pub enum SensorError {
    // ===== Configuration Errors =====
    /// Parameter present but not a valid scalar
    #[error("config parse error at '{key}': {message}")]
    ConfigParse { key: String, message: String },

    /// Parameter or blueprint violates a constraint
    #[error("config validation error at '{field}': {message}")]
    ConfigValidation { field: String, message: String },

    // ===== Flight-Dynamics Errors =====
    /// The FDM source does not expose a property the model needs
    #[error("fdm property not available: {name}")]
    MissingProperty { name: String },

    // ===== Domain Errors =====
    /// Local temperature at or below absolute zero; the density model is
    /// undefined there, so the sample is rejected instead of emitting NaN.
    #[error("non-physical atmosphere: local temperature {temperature_k} K")]
    NonPhysicalAtmosphere { temperature_k: f64 },

    // ===== General Errors =====
    /// IO error
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl SensorError {
    /// Create configuration parse error
    pub fn config_parse(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ConfigParse {
            key: key.into(),
            message: message.into(),
        }
    }

    /// Create configuration validation error
    pub fn config_validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ConfigValidation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create missing-property error
    pub fn missing_property(name: impl Into<String>) -> Self {
        Self::MissingProperty { name: name.into() }
    }
}
