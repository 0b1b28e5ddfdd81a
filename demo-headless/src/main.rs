//! Psychrometric chart CLI
//!
//! Generates a dew-point psychrometric chart for a given altitude and
//! temperature range, renders it with plotters and optionally dumps the
//! raw curve data as JSON.

mod render;

use clap::Parser;
use psychro_core::{generate_chart, ChartConfig, MagnusModel};
use std::error::Error;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Psychrometric chart generator with configurable altitude and range
#[derive(Parser, Debug)]
#[command(name = "psychro-chart")]
#[command(about = "Generate a psychrometric chart for a given altitude", long_about = None)]
struct Args {
    /// Altitude in meters
    #[arg(short, long, default_value_t = 0.0)]
    altitude: f64,

    /// Minimum dry bulb temperature in °C
    #[arg(long, default_value_t = 0.0)]
    t_min: f64,

    /// Maximum dry bulb temperature in °C
    #[arg(long, default_value_t = 50.0)]
    t_max: f64,

    /// Number of RH lines (e.g. 10 for 10%, 20%...100%)
    #[arg(short, long, default_value_t = 10)]
    rh_steps: usize,

    /// Output image path (.png or .svg)
    #[arg(short, long, default_value = "psychrometric_chart.png")]
    output: PathBuf,

    /// Also write the raw curve data as JSON to this path
    #[arg(long)]
    json: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let config = ChartConfig {
        altitude_m: args.altitude,
        t_min_c: args.t_min,
        t_max_c: args.t_max,
        rh_steps: args.rh_steps,
    };

    let chart = generate_chart(&config, &MagnusModel)?;
    info!(
        "Generated {} curves for altitude {} m",
        chart.curves.len(),
        config.altitude_m
    );

    if let Some(json_path) = &args.json {
        std::fs::write(json_path, serde_json::to_string_pretty(&chart)?)?;
        println!("Curve data written to {}", json_path.display());
    }

    render::render_to_file(&chart, &args.output)?;
    println!("Chart written to {}", args.output.display());
    Ok(())
}
