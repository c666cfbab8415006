//! # Sensors
//!
//! Sensor plugin family for a flight-dynamics simulation host.
//!
//! Responsibilities:
//! - `SensorPlugin` lifecycle trait (construct / configure / get_data)
//! - Airspeed sensor model (differential pressure from ground-truth state)
//! - Blueprint-driven plugin factory
//! - Scripted mock FDM source for tests and demos

mod airspeed;
mod factory;
mod mock_fdm;
mod plugin;

pub use airspeed::AirspeedSensor;
pub use factory::build_sensors;
pub use mock_fdm::MockFdm;
pub use plugin::SensorPlugin;

/// Sensor Result type alias
pub type Result<T> = std::result::Result<T, contracts::SensorError>;
