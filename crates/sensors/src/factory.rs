//! Blueprint-driven plugin factory
//!
//! Instantiates and configures one plugin per blueprint entry, binding each
//! to the shared FDM handle.

use std::sync::Arc;

use contracts::{FdmSource, SensorKind, SensorsBlueprint};
use tracing::info;

use crate::airspeed::AirspeedSensor;
use crate::plugin::SensorPlugin;
use crate::Result;

/// Build all sensors described by a blueprint.
///
/// Each instance gets its own noise generator: with `noise_seed` set, the
/// per-sensor seed is derived from the base seed and the entry index (golden
/// ratio spread), so redundant sensors draw independent but reproducible
/// sequences. Without a seed, every instance seeds from OS entropy.
///
/// Fails fast on the first entry whose parameters do not configure.
pub fn build_sensors(
    blueprint: &SensorsBlueprint,
    fdm: Arc<dyn FdmSource>,
) -> Result<Vec<Box<dyn SensorPlugin>>> {
    let mut sensors: Vec<Box<dyn SensorPlugin>> = Vec::with_capacity(blueprint.sensors.len());

    for (index, entry) in blueprint.sensors.iter().enumerate() {
        let mut sensor: Box<dyn SensorPlugin> = match entry.kind {
            SensorKind::Airspeed => match blueprint.noise_seed {
                Some(base) => Box::new(AirspeedSensor::with_seed(
                    &entry.id,
                    fdm.clone(),
                    derive_seed(base, index),
                )),
                None => Box::new(AirspeedSensor::new(&entry.id, fdm.clone())),
            },
        };

        sensor.configure(&entry.params)?;
        sensors.push(sensor);
    }

    info!(count = sensors.len(), "sensor rig built");
    Ok(sensors)
}

fn derive_seed(base: u64, index: usize) -> u64 {
    base ^ (index as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15)
}
