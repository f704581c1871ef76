use std::path::PathBuf;

use anyhow::Result;
use cargo_drop_simulation::*;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "cargo-drop")]
#[command(about = "Predict where cargo released from a drone will land")]
struct Args {
    /// JSON release configuration; flags below override its values
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Cargo weight, kg
    #[arg(long)]
    weight: Option<f64>,

    /// Cargo cube edge, cm
    #[arg(long)]
    size_cm: Option<f64>,

    /// Cargo drag coefficient against vertical motion
    #[arg(long)]
    cd_vertical: Option<f64>,

    /// Cargo drag coefficient against horizontal motion
    #[arg(long)]
    cd_horizontal: Option<f64>,

    /// Drone horizontal speed, m/s
    #[arg(long, allow_hyphen_values = true)]
    horizontal_velocity: Option<f64>,

    /// Drone vertical speed, m/s (positive is climbing)
    #[arg(long, allow_hyphen_values = true)]
    vertical_velocity: Option<f64>,

    /// Drone altitude, m
    #[arg(short, long)]
    altitude: Option<f64>,

    /// Print the outcome as JSON instead of a text report
    #[arg(long)]
    json: bool,
}

impl Args {
    fn release_config(&self) -> Result<ReleaseConfig> {
        let mut config = match &self.config {
            Some(path) => ReleaseConfig::from_json_file(path)?,
            None => ReleaseConfig::default(),
        };

        let overrides = [
            (self.weight, &mut config.cargo.weight),
            (self.size_cm, &mut config.cargo.size_cm),
            (self.cd_vertical, &mut config.cargo.drag_coefficient_vertical),
            (self.cd_horizontal, &mut config.cargo.drag_coefficient_horizontal),
            (self.horizontal_velocity, &mut config.drone.horizontal_velocity),
            (self.vertical_velocity, &mut config.drone.vertical_velocity),
            (self.altitude, &mut config.drone.altitude),
        ];
        for (value, field) in overrides {
            if let Some(value) = value {
                *field = value;
            }
        }

        config.validate()?;
        Ok(config)
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("cargo_drop_simulation=info".parse()?))
        .init();

    let args = Args::parse();
    let config = args.release_config()?;
    let simulator = Simulator::new(config);

    info!(
        "Simulating drop from {:.1} m with time step {}s",
        config.drone.altitude,
        simulator.time_step()
    );

    let outcome = simulator.predict_traced();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    } else {
        DropReport::new(&config, &outcome).display();
    }

    Ok(())
}
