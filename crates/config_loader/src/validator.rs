//! Configuration validation
//!
//! Rules:
//! - sensor ids unique
//! - airspeed `diff_pressure_stddev`, when present, parses as a scalar and is >= 0

use std::collections::HashSet;

use contracts::{keys, ConfigSource, SensorError, SensorKind, SensorsBlueprint};

/// Validate a blueprint.
///
/// Returns the first error encountered, or Ok(()).
pub fn validate(blueprint: &SensorsBlueprint) -> Result<(), SensorError> {
    validate_sensor_ids(blueprint)?;
    validate_airspeed_params(blueprint)?;
    Ok(())
}

fn validate_sensor_ids(blueprint: &SensorsBlueprint) -> Result<(), SensorError> {
    let mut seen = HashSet::new();
    for sensor in &blueprint.sensors {
        if !seen.insert(&sensor.id) {
            return Err(SensorError::config_validation(
                format!("sensors[id={}]", sensor.id),
                "duplicate sensor id",
            ));
        }
    }
    Ok(())
}

fn validate_airspeed_params(blueprint: &SensorsBlueprint) -> Result<(), SensorError> {
    for sensor in &blueprint.sensors {
        if sensor.kind != SensorKind::Airspeed {
            continue;
        }
        if let Some(stddev) = sensor
            .params
            .scalar_f64(keys::airspeed::DIFF_PRESSURE_STDDEV)?
        {
            if !stddev.is_finite() || stddev < 0.0 {
                return Err(SensorError::config_validation(
                    format!(
                        "sensors[{}].{}",
                        sensor.id,
                        keys::airspeed::DIFF_PRESSURE_STDDEV
                    ),
                    format!("standard deviation must be finite and >= 0, got {stddev}"),
                ));
            }
        }
    }
    Ok(())
}
