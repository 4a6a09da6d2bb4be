use nannou::prelude::Vec3;
use orbit_boids::{Boid, Flock, FlockParams, SpeedLimit};

/// Dense flock so most boids have neighbors
pub fn crowded_params() -> FlockParams {
    FlockParams {
        neighborhood_radius: 3.0,
        separation_weight: 0.3,
        cohesion_weight: 0.2,
        alignment_weight: 0.1,
        max_speed: 2.0,
        world_half_extent: 5.0,
        speed_limit: SpeedLimit::ClampToMax,
    }
}

/// The two-boid setup: one at the origin, one a unit along +x, both at rest
pub fn pair(params: FlockParams) -> Flock {
    let boids = vec![
        Boid::new(Vec3::new(0.0, 0.0, 0.0), Vec3::ZERO),
        Boid::new(Vec3::new(1.0, 0.0, 0.0), Vec3::ZERO),
    ];
    Flock::new(boids, params).unwrap()
}

pub fn pair_params(separation: f32, cohesion: f32, alignment: f32) -> FlockParams {
    FlockParams {
        neighborhood_radius: 5.0,
        separation_weight: separation,
        cohesion_weight: cohesion,
        alignment_weight: alignment,
        max_speed: 2.0,
        world_half_extent: 10.0,
        speed_limit: SpeedLimit::ClampToMax,
    }
}

// ==================================================================================
// Invariants after every step
// ==================================================================================

#[test]
fn speed_never_exceeds_max_speed() {
    let mut flock = Flock::random(150, crowded_params(), 9).unwrap();
    for _ in 0..100 {
        flock.step(0.05);
        for boid in flock.boids() {
            assert!(boid.speed() <= crowded_params().max_speed + 1e-4, "speed {}", boid.speed());
        }
    }
}

#[test]
fn unit_length_policy_bounds_speed_when_max_speed_is_at_least_one() {
    let params = FlockParams { speed_limit: SpeedLimit::UnitLength, max_speed: 1.5, ..crowded_params() };
    let mut flock = Flock::random(120, params, 4).unwrap();
    for _ in 0..60 {
        flock.step(0.05);
        for boid in flock.boids() {
            assert!(boid.speed() <= params.max_speed + 1e-4);
        }
    }
}

#[test]
fn unit_length_policy_can_exceed_small_max_speed() {
    // A boid faster than 0.5 is rescaled to length 1, which is faster still
    let params = FlockParams {
        speed_limit: SpeedLimit::UnitLength,
        max_speed: 0.5,
        ..crowded_params()
    };
    let boids = vec![Boid::new(Vec3::ZERO, Vec3::new(3.0, 0.0, 0.0))];
    let mut flock = Flock::new(boids, params).unwrap();
    flock.step(0.0);
    assert!((flock.boids()[0].speed() - 1.0).abs() < 1e-5);
}

#[test]
fn boids_stay_inside_the_world() {
    let params = crowded_params();
    let mut flock = Flock::random(200, params, 21).unwrap();
    for _ in 0..200 {
        flock.step(0.1);
        for boid in flock.boids() {
            for axis in [boid.position.x, boid.position.y, boid.position.z] {
                assert!(axis.abs() <= params.world_half_extent, "escaped to {}", axis);
            }
        }
    }
}

#[test]
fn parallel_step_keeps_the_same_invariants() {
    let params = crowded_params();
    let mut flock = Flock::random(300, params, 8).unwrap();
    for _ in 0..50 {
        flock.step_parallel(0.1);
    }
    for boid in flock.boids() {
        assert!(boid.speed() <= params.max_speed + 1e-4);
        assert!(boid.position.abs().max_element() <= params.world_half_extent);
    }
}

// ==================================================================================
// Single-boid behavior
// ==================================================================================

#[test]
fn lonely_boid_flies_straight() {
    let velocity = Vec3::new(0.3, -0.2, 0.1);
    let boids = vec![
        Boid::new(Vec3::ZERO, velocity),
        Boid::new(Vec3::new(4.0, 4.0, 4.0), Vec3::new(1.0, 1.0, 1.0)),
    ];
    let params = FlockParams { neighborhood_radius: 1.0, ..crowded_params() };
    let mut flock = Flock::new(boids, params).unwrap();

    flock.step(0.5);

    let boid = flock.boids()[0];
    assert_eq!(boid.velocity, velocity);
    assert!((boid.position - velocity * 0.5).length() < 1e-6);
}

#[test]
fn boid_leaving_the_world_reappears_on_the_far_side() {
    let params = FlockParams { world_half_extent: 10.0, ..crowded_params() };
    let boids = vec![Boid::new(Vec3::new(9.95, 0.0, -9.95), Vec3::new(1.0, 0.0, -1.0))];
    let mut flock = Flock::new(boids, params).unwrap();

    flock.step(0.1);

    let boid = flock.boids()[0];
    assert_eq!(boid.position.x, -10.0);
    assert_eq!(boid.position.z, 10.0);
    assert_eq!(boid.position.y, 0.0);
    // Velocity is untouched by the wrap
    assert_eq!(boid.velocity, Vec3::new(1.0, 0.0, -1.0));
}

// ==================================================================================
// Determinism
// ==================================================================================

#[test]
fn identical_runs_produce_identical_trajectories() {
    let dts = [0.016, 0.02, 0.033, 0.0, 0.05, 0.016];
    let mut a = Flock::random(80, crowded_params(), 1234).unwrap();
    let mut b = Flock::random(80, crowded_params(), 1234).unwrap();

    for _ in 0..10 {
        for &dt in &dts {
            a.step(dt);
            b.step(dt);
            assert_eq!(a.boids(), b.boids());
        }
    }
}

// ==================================================================================
// Two-boid scenarios
// ==================================================================================

#[test]
fn equal_weights_cancel_for_a_resting_pair() {
    // Separation and cohesion both point along x with opposite signs and the
    // same weight; alignment of two resting boids is zero.
    let mut flock = pair(pair_params(0.12, 0.12, 0.12));
    flock.step(1.0);

    for boid in flock.boids() {
        assert_eq!(boid.velocity.y, 0.0);
        assert_eq!(boid.velocity.z, 0.0);
        assert!(boid.velocity.x.abs() < 1e-6);
    }
    assert_eq!(flock.boids()[0].position, Vec3::ZERO);
    assert_eq!(flock.boids()[1].position, Vec3::new(1.0, 0.0, 0.0));
}

#[test]
fn stronger_cohesion_pulls_the_pair_together() {
    let mut flock = pair(pair_params(0.12, 0.24, 0.12));
    flock.step(1.0);

    let left = flock.boids()[0];
    let right = flock.boids()[1];

    assert!(left.velocity.x > 0.0);
    assert!(right.velocity.x < 0.0);
    assert_eq!(left.velocity.y, 0.0);
    assert_eq!(left.velocity.z, 0.0);
    // (0.24 - 0.12) / (0.12 + 0.24 + 0.12)
    assert!((left.velocity.x - 0.25).abs() < 1e-5);
    assert!((right.velocity.x + 0.25).abs() < 1e-5);
    assert!(right.position.x - left.position.x < 1.0);
}

#[test]
fn stronger_separation_pushes_the_pair_apart() {
    let mut flock = pair(pair_params(0.36, 0.12, 0.12));
    flock.step(1.0);

    let left = flock.boids()[0];
    let right = flock.boids()[1];

    assert!(left.velocity.x < 0.0);
    assert!(right.velocity.x > 0.0);
    assert!(right.position.x - left.position.x > 1.0);
}

#[test]
fn alignment_turns_a_resting_boid_toward_its_neighbor_heading() {
    let boids = vec![
        Boid::new(Vec3::new(0.0, 0.0, 0.0), Vec3::ZERO),
        Boid::new(Vec3::new(1.0, 0.0, 0.0), Vec3::new(0.0, 0.0, 1.0)),
    ];
    let mut flock = Flock::new(boids, pair_params(0.12, 0.12, 0.12)).unwrap();
    flock.step(1.0);

    let first = flock.boids()[0];
    assert!(first.velocity.z > 0.0);
    assert!(first.velocity.x.abs() < 1e-6);
    assert!((first.velocity.z - 0.12 / 0.36).abs() < 1e-5);
}
