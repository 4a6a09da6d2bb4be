/*
 * Camera Module
 *
 * This module defines the OrbitalCamera: a viewpoint on a sphere around a
 * fixed center, described by a radius, an azimuth (theta) and an elevation
 * (phi), both in degrees. Input handlers nudge the angles and the radius;
 * the render loop asks for the view matrix once per frame.
 *
 * Zooming is optional. A camera built with `new` ignores radius changes;
 * `with_zoom` turns them on and sets how close the camera may get.
 */

use log::debug;
use nannou::prelude::{Mat4, Vec3};
use serde::{Deserialize, Serialize};

/// Lowest allowed elevation in degrees. Keeps the camera off the pole.
pub const MIN_PHI: f32 = 0.1;
/// Highest allowed elevation in degrees. Keeps the camera from passing the horizon.
pub const MAX_PHI: f32 = 90.1;
/// Smallest radius a zooming camera accepts unless told otherwise.
pub const DEFAULT_MIN_RADIUS: f32 = 0.1;

const WORLD_UP: Vec3 = Vec3::Y;

/// Where the view matrix points the camera.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LookTarget {
    /// Look at the camera position mirrored through the origin. Only points at
    /// `center` when `center` is the origin.
    NegatedPosition,
    /// Look at `center`.
    Center,
}

impl Default for LookTarget {
    fn default() -> Self {
        LookTarget::NegatedPosition
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct OrbitalCamera {
    radius: f32,
    theta: f32,
    phi: f32,
    center: Vec3,
    // Derived from the four values above, refreshed by every mutator
    position: Vec3,
    look: Vec3,
    // None disables zoom; Some holds the smallest radius allowed
    min_radius: Option<f32>,
    look_target: LookTarget,
}

impl OrbitalCamera {
    /// Create a camera without zoom. `phi` is clamped into `[MIN_PHI, MAX_PHI]`.
    pub fn new(radius: f32, theta: f32, phi: f32, center: Vec3) -> Self {
        let mut camera = Self {
            radius,
            theta,
            phi: phi.clamp(MIN_PHI, MAX_PHI),
            center,
            position: Vec3::ZERO,
            look: Vec3::ZERO,
            min_radius: None,
            look_target: LookTarget::default(),
        };
        camera.update();
        camera
    }

    /// Allow `update_radius`, never letting the radius drop below `min_radius`.
    pub fn with_zoom(mut self, min_radius: f32) -> Self {
        let min_radius = min_radius.max(f32::EPSILON);
        self.min_radius = Some(min_radius);
        self.radius = self.radius.max(min_radius);
        self.update();
        self
    }

    pub fn with_look_target(mut self, look_target: LookTarget) -> Self {
        self.look_target = look_target;
        self.update();
        self
    }

    // Rotate around the vertical axis. The caller bounds `delta`.
    pub fn update_theta(&mut self, delta: f32) {
        self.theta = (self.theta - delta) % 360.0;
        self.update();
    }

    // Tilt up or down, staying between the pole and just past the horizon
    pub fn update_phi(&mut self, delta: f32) {
        self.phi = (self.phi - delta).clamp(MIN_PHI, MAX_PHI);
        self.update();
    }

    // Move toward (positive delta) or away from the center
    pub fn update_radius(&mut self, delta: f32) {
        match self.min_radius {
            Some(min_radius) => {
                self.radius = (self.radius - delta).max(min_radius);
                self.update();
            }
            None => debug!("Ignoring radius change of {} on a camera without zoom", delta),
        }
    }

    /// Look-at transform for the current position, with +Y as up.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.look, WORLD_UP)
    }

    /// Azimuth in degrees, reported in `(-360, 0]`.
    pub fn theta(&self) -> f32 {
        let folded = self.theta % 360.0;
        if folded > 0.0 {
            // A tiny positive angle rounds to -360 here, which is a full turn
            let shifted = folded - 360.0;
            if shifted <= -360.0 {
                0.0
            } else {
                shifted
            }
        } else {
            folded
        }
    }

    pub fn phi(&self) -> f32 {
        self.phi
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn center(&self) -> Vec3 {
        self.center
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn look(&self) -> Vec3 {
        self.look
    }

    pub fn zoom_enabled(&self) -> bool {
        self.min_radius.is_some()
    }

    pub fn look_target(&self) -> LookTarget {
        self.look_target
    }

    // Spherical to Cartesian, then pick the look point
    fn update(&mut self) {
        let phi = self.phi.to_radians();
        let theta = self.theta.to_radians();

        let horizontal = self.radius * phi.sin();
        self.position = Vec3::new(
            horizontal * theta.sin() + self.center.x,
            self.radius * phi.cos() + self.center.y,
            horizontal * theta.cos() + self.center.z,
        );

        self.look = match self.look_target {
            LookTarget::NegatedPosition => -self.position,
            LookTarget::Center => self.center,
        };
    }
}

impl Default for OrbitalCamera {
    fn default() -> Self {
        Self::new(25.0, 0.0, 60.0, Vec3::ZERO)
    }
}
