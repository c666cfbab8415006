//! Mock flight-dynamics source
//!
//! Implements `FdmSource` over a scripted property map. Used for testing and
//! development without a flight-dynamics engine: the driving code holds an
//! `Arc` clone and advances time/properties between ticks.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use contracts::FdmSource;

/// Scripted FDM source.
///
/// Interior mutability so the same shared handle serves both the test driver
/// (writing state) and the plugin under test (reading it). Single-threaded
/// by design, like the host loop it stands in for.
#[derive(Debug, Default)]
pub struct MockFdm {
    sim_time: Cell<f64>,
    properties: RefCell<HashMap<String, f64>>,
}

impl MockFdm {
    /// Create a source at t = 0 with no properties
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the current simulation time (seconds)
    pub fn set_sim_time(&self, t: f64) {
        self.sim_time.set(t);
    }

    /// Advance the simulation time by `dt` seconds
    pub fn advance(&self, dt: f64) {
        self.sim_time.set(self.sim_time.get() + dt);
    }

    /// Set or overwrite a ground-truth property
    pub fn set_property(&self, name: impl Into<String>, value: f64) {
        self.properties.borrow_mut().insert(name.into(), value);
    }

    /// Remove a property, making subsequent reads return `None`
    pub fn clear_property(&self, name: &str) {
        self.properties.borrow_mut().remove(name);
    }
}

impl FdmSource for MockFdm {
    fn sim_time(&self) -> f64 {
        self.sim_time.get()
    }

    fn property(&self, name: &str) -> Option<f64> {
        self.properties.borrow().get(name).copied()
    }
}
