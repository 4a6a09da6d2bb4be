/*
 * Flock Module
 *
 * A Flock owns a fixed-size set of boids and the parameters that steer them.
 * Each step copies the current boids into a snapshot, computes every boid's
 * next state from that snapshot, and then swaps the result in. No boid ever
 * sees a neighbor that has already moved this step.
 */

use log::{debug, trace};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rayon::prelude::*;

use crate::boid::Boid;
use crate::error::ParamsError;
use crate::params::FlockParams;
use crate::physics;

#[derive(Debug, Clone)]
pub struct Flock {
    boids: Vec<Boid>,
    params: FlockParams,
    // Reused between steps so stepping does not allocate
    snapshot: Vec<Boid>,
}

impl Flock {
    /// Build a flock from caller-supplied boids.
    ///
    /// The number of boids is fixed from here on.
    pub fn new(boids: Vec<Boid>, params: FlockParams) -> Result<Self, ParamsError> {
        params.validate()?;
        debug!("Creating flock with {} boids", boids.len());

        let snapshot = Vec::with_capacity(boids.len());
        Ok(Self { boids, params, snapshot })
    }

    /// Build a flock of `count` boids scattered uniformly through the world cube.
    pub fn random(count: usize, params: FlockParams, seed: u64) -> Result<Self, ParamsError> {
        params.validate()?;

        let mut rng = StdRng::seed_from_u64(seed);
        let boids = (0..count)
            .map(|_| Boid::random(&mut rng, params.world_half_extent, params.max_speed))
            .collect();

        Self::new(boids, params)
    }

    pub fn boids(&self) -> &[Boid] {
        &self.boids
    }

    pub fn len(&self) -> usize {
        self.boids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boids.is_empty()
    }

    pub fn params(&self) -> &FlockParams {
        &self.params
    }

    /// Replace the steering parameters. Invalid parameters leave the flock unchanged.
    pub fn set_params(&mut self, params: FlockParams) -> Result<(), ParamsError> {
        params.validate()?;
        if params != self.params {
            debug!("Flock parameters updated: {:?}", params);
        }
        self.params = params;
        Ok(())
    }

    /// Advance every boid by `dt` seconds on the calling thread.
    pub fn step(&mut self, dt: f32) {
        self.take_snapshot();

        let snapshot = &self.snapshot;
        let params = &self.params;
        for (i, boid) in self.boids.iter_mut().enumerate() {
            *boid = physics::advance(i, snapshot, params, dt);
        }

        trace!("Stepped {} boids by {:.4}s", self.boids.len(), dt);
    }

    /// Same as [`Flock::step`], with the boids split across the rayon thread pool.
    ///
    /// Produces exactly the same state as `step`.
    pub fn step_parallel(&mut self, dt: f32) {
        self.take_snapshot();

        // Process boids in chunks to cut down on task overhead
        let chunk_size = std::cmp::max(self.boids.len() / rayon::current_num_threads(), 1);
        let snapshot = &self.snapshot;
        let params = &self.params;

        self.boids
            .par_chunks_mut(chunk_size)
            .enumerate()
            .for_each(|(chunk_idx, chunk)| {
                for (i_in_chunk, boid) in chunk.iter_mut().enumerate() {
                    let i = chunk_idx * chunk_size + i_in_chunk;
                    *boid = physics::advance(i, snapshot, params, dt);
                }
            });

        trace!(
            "Stepped {} boids by {:.4}s in chunks of {}",
            self.boids.len(),
            dt,
            chunk_size
        );
    }

    fn take_snapshot(&mut self) {
        self.snapshot.clear();
        self.snapshot.extend_from_slice(&self.boids);
    }
}
