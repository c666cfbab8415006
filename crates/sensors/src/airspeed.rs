//! Airspeed sensor model
//!
//! Synthesizes a differential-pressure reading (pitot minus static) from
//! ground-truth calibrated airspeed and local temperature, with configurable
//! gaussian measurement noise.

use std::sync::Arc;

use contracts::{
    keys, properties, AirspeedMeasurement, ConfigSource, FdmSource, Measurement, SensorError,
    SensorKind,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::StandardNormal;
use tracing::{debug, trace};

use crate::plugin::SensorPlugin;
use crate::Result;

const FT_TO_M: f64 = 0.3048;

/// Temperature at mean sea level (Kelvin)
const TEMPERATURE_MSL_K: f64 = 288.0;

/// Air density at mean sea level (kg/m³)
const SEA_LEVEL_DENSITY: f64 = 1.225;

/// Exponent of the barometric density approximation
const DENSITY_RATIO_EXPONENT: f64 = 4.256;

/// Dynamic-pressure coefficient: half of 0.01, from q = ½ρv² with the
/// calibrated-airspeed normalization folded in. Downstream consumers depend
/// on this exact value; do not "correct" it to 0.5.
const DIFF_PRESSURE_COEFF: f64 = 0.005;

/// Celsius→Kelvin offset used by the model (273.0, not 273.15; kept
/// bit-compatible with existing consumers).
const CELSIUS_TO_KELVIN: f64 = 273.0;

fn rankine_to_celsius(rankine: f64) -> f64 {
    (rankine - 491.67) / 1.8
}

/// Differential-pressure airspeed sensor.
///
/// Holds a shared handle to the flight-dynamics source for its whole
/// lifetime and owns its noise generator, so redundant instances never
/// interfere with each other and a fixed seed reproduces a full noise
/// sequence.
pub struct AirspeedSensor {
    sensor_id: String,
    fdm: Arc<dyn FdmSource>,
    diff_pressure_stddev: f64,
    last_sim_time: f64,
    rng: StdRng,
}

impl AirspeedSensor {
    /// Create a sensor seeded from OS entropy
    pub fn new(sensor_id: impl Into<String>, fdm: Arc<dyn FdmSource>) -> Self {
        Self::from_rng(sensor_id, fdm, StdRng::from_os_rng())
    }

    /// Create a sensor with a deterministic noise seed
    pub fn with_seed(sensor_id: impl Into<String>, fdm: Arc<dyn FdmSource>, seed: u64) -> Self {
        Self::from_rng(sensor_id, fdm, StdRng::seed_from_u64(seed))
    }

    fn from_rng(sensor_id: impl Into<String>, fdm: Arc<dyn FdmSource>, rng: StdRng) -> Self {
        Self {
            sensor_id: sensor_id.into(),
            fdm,
            diff_pressure_stddev: 0.0,
            last_sim_time: 0.0,
            rng,
        }
    }

    /// Configured noise standard deviation (pressure units)
    pub fn diff_pressure_stddev(&self) -> f64 {
        self.diff_pressure_stddev
    }

    /// Simulation time of the last successful sample (0.0 before the first)
    pub fn last_sim_time(&self) -> f64 {
        self.last_sim_time
    }

    /// Synthesize one reading from current simulation state.
    ///
    /// Advances the noise generator by one draw and, on success, records the
    /// sample's simulation time.
    pub fn sample(&mut self) -> Result<AirspeedMeasurement> {
        let sim_time = self.fdm.sim_time();
        let dt = sim_time - self.last_sim_time;

        let temperature_local = self.air_temperature_celsius()? + CELSIUS_TO_KELVIN;
        if temperature_local <= 0.0 {
            return Err(SensorError::NonPhysicalAtmosphere {
                temperature_k: temperature_local,
            });
        }
        let density_ratio = (TEMPERATURE_MSL_K / temperature_local).powf(DENSITY_RATIO_EXPONENT);
        let rho = SEA_LEVEL_DENSITY / density_ratio;

        let noise: f64 = self.rng.sample(StandardNormal);
        let diff_pressure_noise = noise * self.diff_pressure_stddev;

        let vel_a = self.airspeed_ms()?;
        let diff_pressure = DIFF_PRESSURE_COEFF * rho * vel_a * vel_a + diff_pressure_noise;

        // dt does not shape the noise yet; a Wiener-style sqrt(dt) scale
        // would hook in at diff_pressure_noise.
        trace!(
            sensor_id = %self.sensor_id,
            sim_time,
            dt,
            diff_pressure,
            "airspeed sample"
        );

        self.last_sim_time = sim_time;
        Ok(AirspeedMeasurement { diff_pressure })
    }

    /// Calibrated airspeed (m/s)
    fn airspeed_ms(&self) -> Result<f64> {
        let vc_fps = self
            .fdm
            .property(properties::CALIBRATED_AIRSPEED_FPS)
            .ok_or_else(|| SensorError::missing_property(properties::CALIBRATED_AIRSPEED_FPS))?;
        Ok(vc_fps * FT_TO_M)
    }

    /// Local air temperature (°C)
    fn air_temperature_celsius(&self) -> Result<f64> {
        let rankine = self
            .fdm
            .property(properties::AMBIENT_TEMPERATURE_RANKINE)
            .ok_or_else(|| {
                SensorError::missing_property(properties::AMBIENT_TEMPERATURE_RANKINE)
            })?;
        Ok(rankine_to_celsius(rankine))
    }
}

impl SensorPlugin for AirspeedSensor {
    fn sensor_id(&self) -> &str {
        &self.sensor_id
    }

    fn kind(&self) -> SensorKind {
        SensorKind::Airspeed
    }

    fn configure(&mut self, params: &dyn ConfigSource) -> Result<()> {
        if let Some(stddev) = params.scalar_f64(keys::airspeed::DIFF_PRESSURE_STDDEV)? {
            if !stddev.is_finite() || stddev < 0.0 {
                return Err(SensorError::config_validation(
                    keys::airspeed::DIFF_PRESSURE_STDDEV,
                    format!("standard deviation must be finite and >= 0, got {stddev}"),
                ));
            }
            self.diff_pressure_stddev = stddev;
        }

        debug!(
            sensor_id = %self.sensor_id,
            diff_pressure_stddev = self.diff_pressure_stddev,
            "airspeed sensor configured"
        );
        Ok(())
    }

    fn get_data(&mut self) -> Result<Measurement> {
        Ok(Measurement::Airspeed(self.sample()?))
    }
}
