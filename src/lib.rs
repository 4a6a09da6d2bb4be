/*
 * Boid Flocking Simulation - Module Definitions
 *
 * The core of the crate is two independent pieces:
 * - `Flock`: a fixed set of boids stepped by separation, cohesion and
 *   alignment, with a speed limit and a wrap-around world cube.
 * - `OrbitalCamera`: a viewpoint on a sphere around a center point, moved by
 *   pointer drags and scrolling, that produces a view matrix.
 *
 * The remaining modules are the nannou front end that drives them.
 */

// Re-export key components for easier access
pub use boid::Boid;
pub use camera::{LookTarget, OrbitalCamera};
pub use config::SimConfig;
pub use error::{ConfigError, ParamsError};
pub use flock::Flock;
pub use params::{FlockParams, SpeedLimit};

// Define modules
pub mod app;
pub mod boid;
pub mod camera;
pub mod config;
pub mod culling;
pub mod debug;
pub mod error;
pub mod flock;
pub mod input;
pub mod params;
pub mod physics;
pub mod primitives;
pub mod renderer;
pub mod ui;
