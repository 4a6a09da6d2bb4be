//! Scenario configuration.
//!
//! A scenario describes everything needed to start a session: how many boids
//! to spawn and with which seed, the flock parameters, where the camera
//! starts, and how pointer input maps onto the camera. Every field has a
//! default, so a YAML file only needs the values it wants to change:
//!
//! ```yaml
//! boids: 400
//! seed: 7
//! time_scale: 0.5
//! parallel: true
//!
//! flock:
//!   neighborhood_radius: 1.8
//!   separation_weight: 0.15
//!   cohesion_weight: 0.12
//!   alignment_weight: 0.12
//!   max_speed: 2.0
//!   world_half_extent: 10.0
//!   speed_limit: clamp_to_max    # or unit_length
//!
//! camera:
//!   radius: 25.0
//!   theta: 0.0
//!   phi: 60.0
//!   center: [0.0, 0.0, 0.0]
//!   zoom: true
//!   min_radius: 0.1
//!   look_target: negated_position  # or center
//!
//! input:
//!   max_drag_delta: 10.0
//!   drag_sensitivity: 0.5
//!   zoom_step: 1.0
//! ```

use std::fs;
use std::path::Path;

use log::debug;
use nannou::prelude::Vec3;
use serde::{Deserialize, Serialize};

use crate::camera::{LookTarget, OrbitalCamera, DEFAULT_MIN_RADIUS};
use crate::error::{ConfigError, ParamsError};
use crate::params::FlockParams;

/// Initial camera placement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    pub radius: f32,
    pub theta: f32,
    pub phi: f32,
    pub center: [f32; 3],
    pub zoom: bool,
    pub min_radius: f32,
    pub look_target: LookTarget,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            radius: 25.0,
            theta: 0.0,
            phi: 60.0,
            center: [0.0, 0.0, 0.0],
            zoom: true,
            min_radius: DEFAULT_MIN_RADIUS,
            look_target: LookTarget::NegatedPosition,
        }
    }
}

impl CameraConfig {
    /// Reject placements that would leave the camera inside or behind its center.
    pub fn validate(&self) -> Result<(), ParamsError> {
        let [x, y, z] = self.center;
        for (name, value) in [
            ("camera.radius", self.radius),
            ("camera.theta", self.theta),
            ("camera.phi", self.phi),
            ("camera.center", x),
            ("camera.center", y),
            ("camera.center", z),
            ("camera.min_radius", self.min_radius),
        ] {
            if !value.is_finite() {
                return Err(ParamsError::NonFinite(name));
            }
        }

        if self.radius <= 0.0 {
            return Err(ParamsError::NotPositive("camera.radius", self.radius));
        }
        if self.zoom && self.min_radius <= 0.0 {
            return Err(ParamsError::NotPositive("camera.min_radius", self.min_radius));
        }
        Ok(())
    }

    pub fn build(&self) -> OrbitalCamera {
        let [x, y, z] = self.center;
        let camera = OrbitalCamera::new(self.radius, self.theta, self.phi, Vec3::new(x, y, z))
            .with_look_target(self.look_target);

        if self.zoom {
            camera.with_zoom(self.min_radius)
        } else {
            camera
        }
    }
}

/// How pointer input becomes camera deltas
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// Largest drag delta passed to the camera per event, in degrees.
    pub max_drag_delta: f32,
    /// Degrees of rotation per pixel of pointer movement.
    pub drag_sensitivity: f32,
    /// Radius change per scroll line.
    pub zoom_step: f32,
}

impl InputConfig {
    pub fn validate(&self) -> Result<(), ParamsError> {
        for (name, value) in [
            ("input.max_drag_delta", self.max_drag_delta),
            ("input.drag_sensitivity", self.drag_sensitivity),
            ("input.zoom_step", self.zoom_step),
        ] {
            if !value.is_finite() {
                return Err(ParamsError::NonFinite(name));
            }
            if value < 0.0 {
                return Err(ParamsError::Negative(name, value));
            }
        }
        Ok(())
    }
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            max_drag_delta: 10.0,
            drag_sensitivity: 0.5,
            zoom_step: 1.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    pub boids: usize,
    pub seed: u64,
    /// Multiplier applied to wall-clock frame time before stepping.
    pub time_scale: f32,
    /// Step the flock on the rayon thread pool.
    pub parallel: bool,
    pub flock: FlockParams,
    pub camera: CameraConfig,
    pub input: InputConfig,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            boids: 300,
            seed: 42,
            // Simulated time runs at half of wall-clock time
            time_scale: 0.5,
            parallel: true,
            flock: FlockParams::default(),
            camera: CameraConfig::default(),
            input: InputConfig::default(),
        }
    }
}

impl SimConfig {
    /// Check every section. Frame time is scaled by `time_scale`, so it must
    /// not turn a step backwards.
    pub fn validate(&self) -> Result<(), ParamsError> {
        self.flock.validate()?;
        self.camera.validate()?;
        self.input.validate()?;

        if !self.time_scale.is_finite() {
            return Err(ParamsError::NonFinite("time_scale"));
        }
        if self.time_scale < 0.0 {
            return Err(ParamsError::Negative("time_scale", self.time_scale));
        }
        Ok(())
    }

    pub fn from_yaml_str(source: &str) -> Result<Self, ConfigError> {
        let config: SimConfig = serde_yaml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        debug!("Loading scenario from {}", path.display());
        let source = fs::read_to_string(path)?;
        Self::from_yaml_str(&source)
    }
}
