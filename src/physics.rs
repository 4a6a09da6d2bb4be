/*
 * Physics Module
 *
 * This module holds the flocking rules: the neighbor scan and the three
 * steering terms (separation, cohesion, alignment) combined into one
 * acceleration per boid.
 *
 * Everything here reads from a snapshot of the flock taken at the start of
 * the step and never writes to it, so any boid can be processed in any order
 * (or on any thread) with the same result.
 *
 * Neighbor search is brute force, O(n²) per step.
 */

use nannou::prelude::Vec3;

use crate::boid::Boid;
use crate::params::FlockParams;

/// Vectors shorter than this are treated as having no direction.
pub const NORMALIZE_EPSILON: f32 = 1e-6;

/// Normalize `v`, or return the zero vector when `v` is too short to have a direction.
#[inline]
pub fn safe_normalize(v: Vec3) -> Vec3 {
    let length_squared = v.length_squared();
    if length_squared <= NORMALIZE_EPSILON * NORMALIZE_EPSILON || !length_squared.is_finite() {
        Vec3::ZERO
    } else {
        v / length_squared.sqrt()
    }
}

// Running sums over every boid inside the neighborhood radius of one boid
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Neighborhood {
    pub count: usize,
    pub displacement_sum: Vec3,
    pub position_sum: Vec3,
    pub velocity_sum: Vec3,
}

impl Default for Neighborhood {
    fn default() -> Self {
        Self {
            count: 0,
            displacement_sum: Vec3::ZERO,
            position_sum: Vec3::ZERO,
            velocity_sum: Vec3::ZERO,
        }
    }
}

impl Neighborhood {
    // Scan every other boid in the snapshot and accumulate those closer than `radius`
    pub fn scan(index: usize, snapshot: &[Boid], radius: f32) -> Self {
        let position = snapshot[index].position;
        let radius_squared = radius * radius;
        let mut neighborhood = Neighborhood::default();

        for (j, other) in snapshot.iter().enumerate() {
            if j == index {
                continue;
            }

            let d = other.position - position;
            if d.length_squared() < radius_squared {
                neighborhood.count += 1;
                neighborhood.displacement_sum += d;
                neighborhood.position_sum += other.position;
                neighborhood.velocity_sum += other.velocity;
            }
        }

        neighborhood
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    // Steer away from the crowd: opposite of the summed displacement to the neighbors
    pub fn separation(&self) -> Vec3 {
        if self.is_empty() {
            return Vec3::ZERO;
        }
        -safe_normalize(self.displacement_sum)
    }

    // Steer toward the centroid of the neighbors
    pub fn cohesion(&self, position: Vec3) -> Vec3 {
        if self.is_empty() {
            return Vec3::ZERO;
        }
        let centroid = self.position_sum / self.count as f32;
        safe_normalize(centroid - position)
    }

    // Steer toward the average heading of the neighbors
    pub fn alignment(&self) -> Vec3 {
        if self.is_empty() {
            return Vec3::ZERO;
        }
        safe_normalize(self.velocity_sum / self.count as f32)
    }
}

/// Weighted sum of the three steering terms for boid `index`.
///
/// The caller divides by `params.weight_sum()` before adding it to the velocity.
pub fn steering(index: usize, snapshot: &[Boid], params: &FlockParams) -> Vec3 {
    let neighborhood = Neighborhood::scan(index, snapshot, params.neighborhood_radius);
    if neighborhood.is_empty() {
        return Vec3::ZERO;
    }

    let position = snapshot[index].position;
    neighborhood.separation() * params.separation_weight
        + neighborhood.cohesion(position) * params.cohesion_weight
        + neighborhood.alignment() * params.alignment_weight
}

// Compute the next state of boid `index` from the snapshot
pub fn advance(index: usize, snapshot: &[Boid], params: &FlockParams, dt: f32) -> Boid {
    let mut boid = snapshot[index];

    let acceleration = steering(index, snapshot, params);
    boid.velocity += acceleration / params.weight_sum();
    boid.limit_speed(params.max_speed, params.speed_limit);
    boid.integrate(dt);
    boid.wrap_edges(params.world_half_extent);

    boid
}
