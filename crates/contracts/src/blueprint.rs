//! SensorsBlueprint - Config Loader output
//!
//! Describes the full sensor rig attached to one simulated vehicle: which
//! sensor plugins to instantiate, their parameters, and the noise seed.

use serde::{Deserialize, Serialize};

use crate::{ParamTable, SensorKind};

/// Configuration version
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ConfigVersion {
    #[default]
    V1,
}

/// Complete sensor rig blueprint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SensorsBlueprint {
    /// Configuration version
    #[serde(default)]
    pub version: ConfigVersion,

    /// Base seed for the per-sensor noise generators.
    ///
    /// Each instantiated sensor derives its own generator from this seed, so
    /// redundant sensors stay statistically independent while a fixed seed
    /// keeps whole runs reproducible. `None` seeds from OS entropy.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub noise_seed: Option<u64>,

    /// Sensor definitions
    pub sensors: Vec<SensorEntry>,
}

/// One sensor definition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SensorEntry {
    /// Unique identifier (for logging and tracing)
    pub id: String,

    /// Physical model to instantiate
    pub kind: SensorKind,

    /// Model parameters, passed verbatim to `configure`
    #[serde(default)]
    pub params: ParamTable,
}
