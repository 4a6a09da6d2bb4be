/*
 * Boid Flocking Simulation
 *
 * Boids in a wrap-around cube follow three rules:
 * 1. Separation: Avoid crowding neighbors
 * 2. Cohesion: Steer towards the average position of neighbors
 * 3. Alignment: Steer towards the average heading of neighbors
 *
 * Drag with the left mouse button to orbit the camera, scroll to zoom.
 */

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use orbit_boids::{app, SimConfig};

#[derive(Parser, Debug)]
#[command(about = "3D boid flocking simulation with an orbital camera")]
struct Args {
    /// Scenario file (YAML). Built-in defaults are used when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Number of boids, overrides the scenario
    #[arg(short, long)]
    boids: Option<usize>,

    /// Random seed for the initial flock, overrides the scenario
    #[arg(short, long)]
    seed: Option<u64>,

    /// Step the flock on a single thread
    #[arg(long)]
    sequential: bool,
}

fn load_config(args: &Args) -> Result<SimConfig> {
    let mut config = match &args.config {
        Some(path) => SimConfig::load(path)
            .with_context(|| format!("failed to load scenario {}", path.display()))?,
        None => SimConfig::default(),
    };

    if let Some(boids) = args.boids {
        config.boids = boids;
    }
    if let Some(seed) = args.seed {
        config.seed = seed;
    }
    if args.sequential {
        config.parallel = false;
    }

    Ok(config)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let config = load_config(&args)?;
    info!("Starting simulation with {} boids (seed {})", config.boids, config.seed);

    app::run(config)?;
    Ok(())
}
