/*
 * Primitives Module
 *
 * Small pieces of geometry used by the renderer: the bird outline drawn for
 * every boid, the ring that shows a boid's neighborhood, and the reference
 * grid drawn on the back faces of the world cube.
 */

use std::f32::consts::TAU;

use nannou::prelude::Vec3;

// Bird outline, nose along +X. Scaled so the nose sits on a 0.3536 radius.
const BIRD_VERTICES: [[f32; 3]; 5] = [
    [0.3536, 0.0, 0.0],
    [-0.15, 0.0, 0.05],
    [-0.25, 0.25, 0.0],
    [-0.25, -0.25, 0.0],
    [-0.15, 0.0, -0.05],
];

const BIRD_INDICES: [u16; 18] = [
    0, 2, 1,
    0, 1, 3,
    1, 2, 4,
    1, 4, 3,
    4, 2, 0,
    0, 3, 4,
];

/// Radius of the sphere that encloses the bird outline.
pub const BIRD_RADIUS: f32 = 0.3536;

#[derive(Debug, Clone, PartialEq)]
pub struct Mesh {
    pub vertices: Vec<Vec3>,
    pub indices: Vec<u16>,
}

impl Mesh {
    // Unique edges of the triangle list, for wireframe drawing
    pub fn edges(&self) -> Vec<(u16, u16)> {
        let mut edges: Vec<(u16, u16)> = Vec::with_capacity(self.indices.len());
        for triangle in self.indices.chunks_exact(3) {
            for (a, b) in [(triangle[0], triangle[1]), (triangle[1], triangle[2]), (triangle[2], triangle[0])] {
                let edge = if a < b { (a, b) } else { (b, a) };
                if !edges.contains(&edge) {
                    edges.push(edge);
                }
            }
        }
        edges
    }
}

pub fn bird_mesh() -> Mesh {
    Mesh {
        vertices: BIRD_VERTICES.iter().map(|v| Vec3::new(v[0], v[1], v[2])).collect(),
        indices: BIRD_INDICES.to_vec(),
    }
}

/// Points evenly spaced around a circle of `radius` in the XY plane.
pub fn circle(radius: f32, points: u32) -> Vec<Vec3> {
    let points = points.max(3);
    let delta = TAU / points as f32;

    (0..points)
        .map(|i| {
            let angle = i as f32 * delta;
            Vec3::new(radius * angle.cos(), radius * angle.sin(), 0.0)
        })
        .collect()
}

/// Grid lines on the three back faces of a cube with half extent `size`
/// (the floor at -Y and the walls at -X and -Z), `spaces` cells per side.
pub fn half_cube_grid(size: f32, spaces: u32) -> Vec<(Vec3, Vec3)> {
    let spaces = spaces.max(1);
    let step = 2.0 * size / spaces as f32;
    let mut lines = Vec::with_capacity(6 * (spaces as usize + 1));

    for i in 0..=spaces {
        let t = -size + i as f32 * step;

        // Floor
        lines.push((Vec3::new(t, -size, -size), Vec3::new(t, -size, size)));
        lines.push((Vec3::new(-size, -size, t), Vec3::new(size, -size, t)));

        // Back wall (z = -size)
        lines.push((Vec3::new(t, -size, -size), Vec3::new(t, size, -size)));
        lines.push((Vec3::new(-size, t, -size), Vec3::new(size, t, -size)));

        // Side wall (x = -size)
        lines.push((Vec3::new(-size, -size, t), Vec3::new(-size, size, t)));
        lines.push((Vec3::new(-size, t, -size), Vec3::new(-size, t, size)));
    }

    lines
}
