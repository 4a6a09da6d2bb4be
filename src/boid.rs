/*
 * Boid Module
 *
 * This module defines the Boid struct: a position and a velocity in the
 * world cube. Boids have no identity of their own; they only exist as
 * elements of a Flock. Steering lives in the physics module, the per-boid
 * pieces of integration (speed limit, world wrap) live here.
 */

use nannou::prelude::Vec3;
use rand::Rng;

use crate::params::SpeedLimit;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Boid {
    pub position: Vec3,
    pub velocity: Vec3,
}

impl Boid {
    pub fn new(position: Vec3, velocity: Vec3) -> Self {
        Self { position, velocity }
    }

    // Uniform position inside the world cube, uniform velocity per axis in [-max_speed, max_speed]
    pub fn random<R: Rng + ?Sized>(rng: &mut R, half_extent: f32, max_speed: f32) -> Self {
        let position = Vec3::new(
            rng.gen_range(-half_extent..=half_extent),
            rng.gen_range(-half_extent..=half_extent),
            rng.gen_range(-half_extent..=half_extent),
        );
        let velocity = Vec3::new(
            rng.gen_range(-max_speed..=max_speed),
            rng.gen_range(-max_speed..=max_speed),
            rng.gen_range(-max_speed..=max_speed),
        );

        Self { position, velocity }
    }

    // Rescale the velocity if it is faster than max_speed
    pub fn limit_speed(&mut self, max_speed: f32, policy: SpeedLimit) {
        let speed_squared = self.velocity.length_squared();
        if speed_squared <= max_speed * max_speed {
            return;
        }

        let speed = speed_squared.sqrt();
        self.velocity = match policy {
            SpeedLimit::ClampToMax => self.velocity * (max_speed / speed),
            SpeedLimit::UnitLength => self.velocity / speed,
        };
    }

    // Advance the position along the current velocity
    #[inline]
    pub fn integrate(&mut self, dt: f32) {
        self.position += self.velocity * dt;
    }

    // Wrap the boid around the world edges. Leaving through one face teleports
    // it onto the opposite face; there is no bounce.
    pub fn wrap_edges(&mut self, half_extent: f32) {
        self.position.x = wrap_axis(self.position.x, half_extent);
        self.position.y = wrap_axis(self.position.y, half_extent);
        self.position.z = wrap_axis(self.position.z, half_extent);
    }

    // Speed in world units per second
    #[inline]
    pub fn speed(&self) -> f32 {
        self.velocity.length()
    }
}

#[inline]
fn wrap_axis(value: f32, half_extent: f32) -> f32 {
    if value > half_extent {
        -half_extent
    } else if value < -half_extent {
        half_extent
    } else {
        value
    }
}
