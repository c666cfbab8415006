//! Measurement types - sensor plugin output
//!
//! Synthesized sensor readings, created fresh on every query; ownership
//! transfers to the caller.

use serde::{Deserialize, Serialize};

use crate::SensorKind;

/// Differential-pressure airspeed reading.
///
/// The raw signal an airspeed sensor reports: the pressure difference between
/// pitot and static ports. Consumers derive indicated airspeed from it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AirspeedMeasurement {
    /// Differential pressure (pressure units, see the density model)
    pub diff_pressure: f64,
}

/// Measurement payload, tagged by sensor kind.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Measurement {
    /// Airspeed sensor reading
    Airspeed(AirspeedMeasurement),
}

impl Measurement {
    /// Kind of the sensor that produced this measurement
    pub fn kind(&self) -> SensorKind {
        match self {
            Measurement::Airspeed(_) => SensorKind::Airspeed,
        }
    }
}

impl From<AirspeedMeasurement> for Measurement {
    fn from(m: AirspeedMeasurement) -> Self {
        Measurement::Airspeed(m)
    }
}
