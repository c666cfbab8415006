//! FdmSource trait - Flight-dynamics ground-truth abstraction
//!
//! Defines the read-only query surface a sensor plugin needs from the host
//! simulation, decoupling sensor models from the concrete FDM backend.
//! Supports unified handling of a real flight-dynamics engine and scripted
//! mock sources.

/// Read-only flight-dynamics state source.
///
/// The host owns the simulation; plugins hold a shared handle for their whole
/// lifetime and query it once per tick. Any backend exposing this query shape
/// (a JSBSim-style property tree) is substitutable, which is what makes the
/// sensor models testable without a simulator.
///
/// No `Send`/`Sync` bounds: plugins are stepped synchronously from the host's
/// single-threaded loop.
pub trait FdmSource {
    /// Current simulation time (seconds)
    fn sim_time(&self) -> f64;

    /// Current value of a named ground-truth property.
    ///
    /// Returns `None` if the backend does not expose the property. Plugins
    /// report that as [`SensorError::MissingProperty`](crate::SensorError)
    /// rather than silently reading zero.
    fn property(&self, name: &str) -> Option<f64>;
}

/// Property names of the flight-dynamics property tree consumed by the
/// sensor family.
pub mod properties {
    /// Calibrated airspeed (ft/s)
    pub const CALIBRATED_AIRSPEED_FPS: &str = "velocities/vc-fps";

    /// Local atmospheric temperature (degrees Rankine)
    pub const AMBIENT_TEMPERATURE_RANKINE: &str = "atmosphere/T-R";
}
