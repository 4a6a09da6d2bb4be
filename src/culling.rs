/*
 * Culling Module
 *
 * Projection from world space to the screen and visibility tests.
 * Points behind the camera have no projection; boids whose center falls
 * outside the clip volume are skipped by the renderer.
 */

use nannou::prelude::*;

use crate::boid::Boid;

// World point to normalized device coordinates. None when the point is behind the camera.
pub fn to_ndc(view_projection: Mat4, point: Vec3) -> Option<Vec3> {
    let clip = view_projection * point.extend(1.0);
    if clip.w <= f32::EPSILON {
        return None;
    }
    Some(clip.truncate() / clip.w)
}

#[inline]
pub fn in_clip_volume(ndc: Vec3) -> bool {
    ndc.x.abs() <= 1.0 && ndc.y.abs() <= 1.0 && (-1.0..=1.0).contains(&ndc.z)
}

// Normalized device coordinates to nannou window coordinates (origin at the center, +y up)
pub fn ndc_to_screen(ndc: Vec3, window_rect: Rect) -> Point2 {
    pt2(
        window_rect.x() + ndc.x * window_rect.w() / 2.0,
        window_rect.y() + ndc.y * window_rect.h() / 2.0,
    )
}

// Indices of the boids whose centers are inside the view
pub fn visible_boids(boids: &[Boid], view_projection: Mat4) -> Vec<usize> {
    boids
        .iter()
        .enumerate()
        .filter_map(|(i, boid)| {
            to_ndc(view_projection, boid.position)
                .filter(|&ndc| in_clip_volume(ndc))
                .map(|_| i)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::OrbitalCamera;

    fn view_projection() -> Mat4 {
        // Camera on +Z looking at the origin
        let camera = OrbitalCamera::new(10.0, 0.0, 90.0, Vec3::ZERO);
        let projection = Mat4::perspective_rh_gl(45f32.to_radians(), 1.0, 0.1, 100.0);
        projection * camera.view_matrix()
    }

    #[test]
    fn origin_projects_to_screen_center() {
        let ndc = to_ndc(view_projection(), Vec3::ZERO).unwrap();
        assert!(ndc.x.abs() < 1e-4 && ndc.y.abs() < 1e-4);
        assert!(in_clip_volume(ndc));

        let rect = Rect::from_w_h(800.0, 600.0);
        let screen = ndc_to_screen(ndc, rect);
        assert!(screen.length() < 1e-2);
    }

    #[test]
    fn points_behind_the_camera_are_dropped() {
        assert_eq!(to_ndc(view_projection(), Vec3::new(0.0, 0.0, 20.0)), None);
    }

    #[test]
    fn only_boids_in_front_are_visible() {
        let boids = [
            Boid::new(Vec3::ZERO, Vec3::ZERO),
            Boid::new(Vec3::new(0.0, 0.0, 20.0), Vec3::ZERO),
            Boid::new(Vec3::new(500.0, 0.0, 0.0), Vec3::ZERO),
        ];
        assert_eq!(visible_boids(&boids, view_projection()), vec![0]);
    }
}
