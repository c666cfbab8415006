//! ConfigSource trait - structured parameter access
//!
//! `getScalar(key)` semantics over a structured configuration node: a missing
//! key is not an error (the plugin keeps its default), a present-but-malformed
//! value is.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::SensorError;

/// Well-known parameter keys, one module per sensor kind.
pub mod keys {
    /// Airspeed sensor parameters
    pub mod airspeed {
        /// Standard deviation of the differential-pressure noise (pressure units)
        pub const DIFF_PRESSURE_STDDEV: &str = "diff_pressure_stddev";
    }
}

/// Structured parameter source handed to `SensorPlugin::configure`.
///
/// One node of the host's configuration document, scoped to a single sensor.
pub trait ConfigSource {
    /// Look up a scalar parameter by key.
    ///
    /// - Missing key → `Ok(None)`
    /// - Numeric value (or a string parseable as a real) → `Ok(Some(v))`
    /// - Anything else → `Err(ConfigParse)`
    fn scalar_f64(&self, key: &str) -> Result<Option<f64>, SensorError>;
}

/// Raw scalar value in a parameter block.
///
/// `untagged` so TOML/JSON values map directly; `Integer` is listed before
/// `Float` so whole numbers keep their native representation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    Bool(bool),
    Integer(i64),
    Float(f64),
    String(String),
}

/// Per-sensor parameter block.
///
/// A flat key/value table deserialized verbatim from the blueprint, so this
/// crate never needs to know each plugin's parameter keys. Host configuration
/// surfaces are textual, so string values are accepted wherever they parse as
/// the requested scalar type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParamTable(BTreeMap<String, ParamValue>);

impl ParamTable {
    /// Create an empty parameter table
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a parameter
    pub fn insert(&mut self, key: impl Into<String>, value: ParamValue) {
        self.0.insert(key.into(), value);
    }

    /// Raw value for a key, if present
    pub fn get(&self, key: &str) -> Option<&ParamValue> {
        self.0.get(key)
    }

    /// Number of parameters
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True if the table holds no parameters
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl ConfigSource for ParamTable {
    fn scalar_f64(&self, key: &str) -> Result<Option<f64>, SensorError> {
        match self.0.get(key) {
            None => Ok(None),
            Some(ParamValue::Float(v)) => Ok(Some(*v)),
            Some(ParamValue::Integer(v)) => Ok(Some(*v as f64)),
            Some(ParamValue::String(s)) => s.trim().parse::<f64>().map(Some).map_err(|_| {
                SensorError::config_parse(key, format!("expected a real number, got {s:?}"))
            }),
            Some(ParamValue::Bool(b)) => Err(SensorError::config_parse(
                key,
                format!("expected a real number, got boolean {b}"),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_key_is_none_not_error() {
        let table = ParamTable::new();
        assert_eq!(table.scalar_f64("diff_pressure_stddev").unwrap(), None);
    }

    #[test]
    fn numeric_values_read_as_f64() {
        let mut table = ParamTable::new();
        table.insert("a", ParamValue::Float(2.5));
        table.insert("b", ParamValue::Integer(3));
        assert_eq!(table.scalar_f64("a").unwrap(), Some(2.5));
        assert_eq!(table.scalar_f64("b").unwrap(), Some(3.0));
    }

    #[test]
    fn numeric_string_parses() {
        let mut table = ParamTable::new();
        table.insert("stddev", ParamValue::String(" 2.0 ".to_string()));
        assert_eq!(table.scalar_f64("stddev").unwrap(), Some(2.0));
    }

    #[test]
    fn malformed_string_is_parse_error() {
        let mut table = ParamTable::new();
        table.insert("stddev", ParamValue::String("not-a-number".to_string()));
        let err = table.scalar_f64("stddev").unwrap_err();
        assert!(matches!(err, SensorError::ConfigParse { .. }));
        assert!(err.to_string().contains("stddev"));
    }

    #[test]
    fn bool_is_parse_error() {
        let mut table = ParamTable::new();
        table.insert("stddev", ParamValue::Bool(true));
        assert!(matches!(
            table.scalar_f64("stddev"),
            Err(SensorError::ConfigParse { .. })
        ));
    }

    #[test]
    fn deserializes_from_json_object() {
        let table: ParamTable =
            serde_json::from_str(r#"{"diff_pressure_stddev": 1.5, "label": "pitot"}"#).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.scalar_f64("diff_pressure_stddev").unwrap(), Some(1.5));
    }
}
