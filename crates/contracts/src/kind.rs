//! Sensor kind tags

use serde::{Deserialize, Serialize};

/// Sensor kind within the plugin family.
///
/// One variant per physical model. The family shares the
/// `construct / configure / get_data` lifecycle; each kind owns its own math
/// and state. Further members (IMU, GPS, barometer) extend this enum and the
/// [`Measurement`](crate::Measurement) payload together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SensorKind {
    /// Differential-pressure airspeed sensor
    Airspeed,
}

impl std::fmt::Display for SensorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SensorKind::Airspeed => write!(f, "airspeed"),
        }
    }
}
