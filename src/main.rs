//! YantraSim - Headless behavior accuracy bench
//!
//! Runs a numbered motion behavior (pure advance or pure in-place turn)
//! through the kinematic executor for a configured number of repetitions,
//! reports expected-versus-executed error statistics, and records the raw
//! pairs as a whitespace-separated `.dat` file.

use std::env;
use std::path::Path;

use tracing::info;

use yantra_sim::accuracy::{save_dat, AccuracyTest, TestKind};
use yantra_sim::angles::rad_to_deg;
use yantra_sim::config::SimConfig;
use yantra_sim::error::{Result, YantraError};
use yantra_sim::noise::NoiseGenerator;

/// Parse config path from command line arguments.
///
/// Supports:
/// - `yantra-sim <path>` (positional)
/// - `yantra-sim --config <path>` (flag-based)
/// - `yantra-sim -c <path>` (short flag)
fn parse_config_path() -> Option<String> {
    let args: Vec<String> = env::args().collect();

    for i in 1..args.len() {
        if (args[i] == "--config" || args[i] == "-c") && i + 1 < args.len() {
            return Some(args[i + 1].clone());
        }
    }

    if args.len() > 1 && !args[1].starts_with('-') {
        return Some(args[1].clone());
    }

    None
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("yantra_sim=info".parse().unwrap()),
        )
        .init();

    let config = match parse_config_path() {
        Some(path) => {
            info!("Loading configuration from {}", path);
            SimConfig::load(Path::new(&path))?
        }
        None => {
            if Path::new("yantra.toml").exists() {
                info!("Loading configuration from yantra.toml");
                SimConfig::load(Path::new("yantra.toml"))?
            } else {
                info!("Using default configuration");
                SimConfig::default()
            }
        }
    };

    info!("YantraSim v{}", env!("CARGO_PKG_VERSION"));

    let params = config.motion_params()?;
    let behavior = config.behavior()?;
    let kind = TestKind::from_behavior(behavior).ok_or_else(|| {
        YantraError::Config(format!(
            "behavior {} is not an accuracy behavior",
            behavior.id()
        ))
    })?;

    info!(
        "Motion: advance {:.3}m, turn {:.4}rad ({:.1}°)",
        params.max_advance,
        params.max_turn_angle,
        rad_to_deg(params.max_turn_angle)
    );

    // Where the start pose lands on the display canvas
    let converter = config.converter();
    let (cx, cy) = converter.to_canvas(config.simulation.start_x, config.simulation.start_y);
    info!(
        "Start pose: ({:.2}, {:.2})m, canvas ({:.0}, {:.0})px",
        config.simulation.start_x, config.simulation.start_y, cx, cy
    );

    let mut test = AccuracyTest::new(kind, params, config.simulation.steps)?
        .with_start(config.simulation.start_x, config.simulation.start_y);

    if config.simulation.add_noise {
        info!(
            "Actuation noise enabled: stddev {:.4}, seed {}",
            config.simulation.noise_stddev, config.simulation.random_seed
        );
        test = test.with_noise(
            NoiseGenerator::new(config.simulation.random_seed),
            config.simulation.noise_stddev,
        );
    }

    let report = test.run();

    for quantity in &report.summary {
        info!(
            "{}: error mean {:.4}, error variance {:.6}",
            quantity.label, quantity.err_mean, quantity.err_var
        );
    }

    let dat_path = Path::new(&config.output.dat_path);
    save_dat(&report, dat_path)?;
    info!("Test data saved to {:?}", dat_path);

    Ok(())
}
