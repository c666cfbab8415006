//! Sensor plugin trait

use contracts::{ConfigSource, Measurement, SensorKind};

use crate::Result;

/// Sensor plugin lifecycle.
///
/// Implemented once per sensor kind. The host constructs a plugin bound to a
/// live FDM handle, pushes configuration once, then queries it from the
/// simulation-stepping loop:
///
/// 1. construct with a shared `FdmSource`
/// 2. `configure` with the sensor's parameter block
/// 3. `get_data` once per tick (or per sensor update interval)
///
/// `get_data` before `configure` is valid: the plugin runs on its defaults
/// (for the airspeed model, noiseless output). There is no internal rate
/// limiting; hosts wanting decoupled sampling throttle their own calls.
pub trait SensorPlugin {
    /// Plugin instance id (for logging and tracing)
    fn sensor_id(&self) -> &str;

    /// Sensor kind
    fn kind(&self) -> SensorKind;

    /// Apply configuration parameters.
    ///
    /// Missing keys keep their defaults. A malformed or out-of-range value
    /// aborts configuration with an error and leaves prior parameters
    /// untouched.
    fn configure(&mut self, params: &dyn ConfigSource) -> Result<()>;

    /// Synthesize one measurement from current simulation state.
    fn get_data(&mut self) -> Result<Measurement>;
}
