//! # Integration Tests
//!
//! End-to-end tests across the sensor stack, no simulator required:
//! blueprint loading -> factory -> scripted FDM -> measurements.

#[cfg(test)]
mod e2e_tests {
    use std::sync::Arc;

    use config_loader::{ConfigFormat, ConfigLoader};
    use contracts::{properties, Measurement};
    use sensors::{build_sensors, MockFdm};

    const RIG_TOML: &str = r#"
noise_seed = 42

[[sensors]]
id = "pitot0"
kind = "airspeed"
[sensors.params]
diff_pressure_stddev = 0.0
"#;

    fn standard_day_fdm(vc_fps: f64) -> Arc<MockFdm> {
        let fdm = MockFdm::new();
        fdm.set_property(properties::CALIBRATED_AIRSPEED_FPS, vc_fps);
        // 518.67 °R = 15 °C, sea-level standard day
        fdm.set_property(properties::AMBIENT_TEMPERATURE_RANKINE, 518.67);
        Arc::new(fdm)
    }

    /// Blueprint -> factory -> sample, against the worked reference case:
    /// 100 ft/s at standard conditions, no noise.
    #[test]
    fn e2e_standard_day_reference_value() {
        let blueprint = ConfigLoader::load_from_str(RIG_TOML, ConfigFormat::Toml).unwrap();
        let fdm = standard_day_fdm(100.0);
        let mut sensors = build_sensors(&blueprint, fdm).unwrap();
        assert_eq!(sensors.len(), 1);

        let Measurement::Airspeed(m) = sensors[0].get_data().unwrap();
        // 0.005 * 1.225 * (100 * 0.3048)^2
        let expected = 0.005 * 1.225 * (100.0f64 * 0.3048).powi(2);
        assert!((m.diff_pressure - expected).abs() < 1e-9);
    }

    /// Repeated ticks with a climbing airspeed give strictly growing
    /// differential pressure in the noiseless case.
    #[test]
    fn e2e_tick_loop_tracks_airspeed() {
        let blueprint = ConfigLoader::load_from_str(RIG_TOML, ConfigFormat::Toml).unwrap();
        let fdm = standard_day_fdm(50.0);
        let mut sensors = build_sensors(&blueprint, fdm.clone()).unwrap();

        let mut last = f64::NEG_INFINITY;
        for tick in 0..20 {
            fdm.advance(0.01);
            fdm.set_property(
                properties::CALIBRATED_AIRSPEED_FPS,
                50.0 + 5.0 * tick as f64,
            );
            let Measurement::Airspeed(m) = sensors[0].get_data().unwrap();
            assert!(m.diff_pressure > last, "tick {tick}");
            last = m.diff_pressure;
        }
    }

    /// Two hosts running the same blueprint and the same scripted flight see
    /// bit-identical telemetry, noise included.
    #[test]
    fn e2e_noisy_run_is_reproducible() {
        let noisy_toml = RIG_TOML.replace("diff_pressure_stddev = 0.0", "diff_pressure_stddev = 2.0");

        let run = || {
            let blueprint = ConfigLoader::load_from_str(&noisy_toml, ConfigFormat::Toml).unwrap();
            let fdm = standard_day_fdm(100.0);
            let mut sensors = build_sensors(&blueprint, fdm.clone()).unwrap();
            (0..50)
                .map(|_| {
                    fdm.advance(0.004);
                    let Measurement::Airspeed(m) = sensors[0].get_data().unwrap();
                    m.diff_pressure
                })
                .collect::<Vec<f64>>()
        };

        assert_eq!(run(), run());
    }

    /// JSON and TOML renditions of one blueprint build identical rigs.
    #[test]
    fn e2e_blueprint_formats_agree() {
        let from_toml = ConfigLoader::load_from_str(RIG_TOML, ConfigFormat::Toml).unwrap();
        let json = ConfigLoader::to_json(&from_toml).unwrap();
        let from_json = ConfigLoader::load_from_str(&json, ConfigFormat::Json).unwrap();

        let fdm = standard_day_fdm(120.0);
        let mut rig_a = build_sensors(&from_toml, fdm.clone()).unwrap();
        let mut rig_b = build_sensors(&from_json, fdm.clone()).unwrap();
        assert_eq!(rig_a[0].get_data().unwrap(), rig_b[0].get_data().unwrap());
    }

    /// An instrument-invalid atmosphere fails one query without poisoning
    /// the plugin; later ticks with sane state succeed.
    #[test]
    fn e2e_domain_error_is_local_to_one_query() {
        let blueprint = ConfigLoader::load_from_str(RIG_TOML, ConfigFormat::Toml).unwrap();
        let fdm = standard_day_fdm(100.0);
        let mut sensors = build_sensors(&blueprint, fdm.clone()).unwrap();

        fdm.set_property(properties::AMBIENT_TEMPERATURE_RANKINE, 0.0);
        assert!(sensors[0].get_data().is_err());

        fdm.set_property(properties::AMBIENT_TEMPERATURE_RANKINE, 518.67);
        assert!(sensors[0].get_data().is_ok());
    }
}
