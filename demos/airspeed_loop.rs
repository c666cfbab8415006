//! Airspeed Loop Demo
//!
//! Plays the host role: loads a sensor blueprint, binds the rig to a
//! scripted flight-dynamics source, and steps the plugins once per tick
//! through a takeoff acceleration profile.
//!
//! Run with: cargo run --bin airspeed_loop [blueprint.toml]

use std::sync::Arc;

use config_loader::{ConfigFormat, ConfigLoader};
use contracts::{properties, FdmSource, Measurement};
use sensors::{build_sensors, MockFdm};

const DEFAULT_BLUEPRINT: &str = r#"
noise_seed = 1337

[[sensors]]
id = "pitot0"
kind = "airspeed"
[sensors.params]
diff_pressure_stddev = 0.5
"#;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let blueprint = if let Some(path) = std::env::args().nth(1) {
        tracing::info!(path = %path, "loading blueprint");
        ConfigLoader::load_from_path(std::path::Path::new(&path))?
    } else {
        ConfigLoader::load_from_str(DEFAULT_BLUEPRINT, ConfigFormat::Toml)?
    };

    // Scripted flight: standard day at sea level, accelerating down the runway.
    let fdm = Arc::new(MockFdm::new());
    fdm.set_property(properties::AMBIENT_TEMPERATURE_RANKINE, 518.67);
    fdm.set_property(properties::CALIBRATED_AIRSPEED_FPS, 0.0);

    let mut rig = build_sensors(&blueprint, fdm.clone())?;
    tracing::info!(sensors = rig.len(), "rig bound to fdm");

    let dt = 0.1;
    let accel_fps2 = 10.0;

    for tick in 0..100u32 {
        fdm.advance(dt);
        fdm.set_property(
            properties::CALIBRATED_AIRSPEED_FPS,
            accel_fps2 * dt * tick as f64,
        );

        for sensor in rig.iter_mut() {
            let Measurement::Airspeed(m) = sensor.get_data()?;
            tracing::info!(
                sensor_id = %sensor.sensor_id(),
                sim_time = format!("{:.1}", fdm.sim_time()),
                diff_pressure = format!("{:.4}", m.diff_pressure),
                "airspeed reading"
            );
        }
    }

    Ok(())
}
