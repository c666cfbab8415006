//! # Contracts
//!
//! Frozen interface contracts (ICD), defining inter-module data structures and traits.
//! All business crates can only depend on this crate, reverse dependencies are prohibited.
//!
//! ## Time Model
//! - Uses flight-dynamics simulation time (seconds, f64) as primary clock
//! - Sensor plugins are stepped synchronously by the host; no internal clocks

mod blueprint;
mod config;
mod error;
mod fdm;
mod kind;
mod measurement;

pub use blueprint::*;
pub use config::{keys, ConfigSource, ParamTable, ParamValue};
pub use error::SensorError;
pub use fdm::{properties, FdmSource};
pub use kind::SensorKind;
pub use measurement::*;
