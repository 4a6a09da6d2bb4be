/*
 * Renderer Module
 *
 * This module draws the simulation: every boid as a wireframe bird turned to
 * face along its velocity, the reference grid on the back faces of the world
 * cube, and (in debug mode) the neighborhood and collision rings of the first
 * boid. World geometry goes through `projection * view` and is drawn as 2D
 * lines with nannou's Draw API.
 */

use std::f32::consts::FRAC_PI_2;

use nannou::prelude::*;

use crate::app::Model;
use crate::culling::{ndc_to_screen, to_ndc, visible_boids};
use crate::primitives::{circle, BIRD_RADIUS};
use crate::ui;

const FIELD_OF_VIEW_DEGREES: f32 = 45.0;
const NEAR_PLANE: f32 = 0.1;
const FAR_PLANE: f32 = 100.0;

// Perspective projection for the current window
pub fn projection(window_rect: Rect) -> Mat4 {
    let aspect = if window_rect.h() > 0.0 { window_rect.w() / window_rect.h() } else { 1.0 };
    Mat4::perspective_rh_gl(FIELD_OF_VIEW_DEGREES.to_radians(), aspect, NEAR_PLANE, FAR_PLANE)
}

// Rotation turning the bird's nose (+X) toward `velocity`
pub fn heading(velocity: Vec3) -> Quat {
    let length = velocity.length();
    if length <= f32::EPSILON {
        Quat::IDENTITY
    } else {
        Quat::from_rotation_arc(Vec3::X, velocity / length)
    }
}

// Draw a world-space segment, skipping it when either end is behind the camera
fn draw_segment(draw: &Draw, view_projection: Mat4, window_rect: Rect, a: Vec3, b: Vec3, color: Rgba, weight: f32) {
    if let (Some(a), Some(b)) = (to_ndc(view_projection, a), to_ndc(view_projection, b)) {
        draw.line()
            .start(ndc_to_screen(a, window_rect))
            .end(ndc_to_screen(b, window_rect))
            .weight(weight)
            .color(color);
    }
}

// Draw a closed loop of world-space points
fn draw_loop(draw: &Draw, view_projection: Mat4, window_rect: Rect, points: &[Vec3], color: Rgba) {
    for (i, &start) in points.iter().enumerate() {
        let end = points[(i + 1) % points.len()];
        draw_segment(draw, view_projection, window_rect, start, end, color, 1.0);
    }
}

// Three rings of `radius` around `center`, one per principal plane
fn draw_rings(draw: &Draw, view_projection: Mat4, window_rect: Rect, center: Vec3, ring: &[Vec3], color: Rgba) {
    for rotation in [
        Quat::IDENTITY,
        Quat::from_rotation_x(FRAC_PI_2),
        Quat::from_rotation_y(FRAC_PI_2),
    ] {
        let points: Vec<Vec3> = ring.iter().map(|&p| rotation * p + center).collect();
        draw_loop(draw, view_projection, window_rect, &points, color);
    }
}

// Render the model
pub fn view(app: &App, model: &Model, frame: Frame) {
    let draw = app.draw();
    draw.background().color(rgb(0.85, 0.85, 0.85));

    let window_rect = app.window_rect();
    let view_projection = projection(window_rect) * model.camera.view_matrix();

    if model.ui_state.show_grid {
        let grid_color = rgba(0.55, 0.55, 0.55, 1.0);
        for &(a, b) in &model.grid {
            draw_segment(&draw, view_projection, window_rect, a, b, grid_color, 1.0);
        }
    }

    let boids = model.flock.boids();
    let visible = visible_boids(boids, view_projection);
    let bird_color = rgba(0.0, 0.0, 0.0, 1.0);

    for &i in &visible {
        let boid = &boids[i];
        let transform = Mat4::from_rotation_translation(heading(boid.velocity), boid.position);

        for &(a, b) in &model.bird_edges {
            let start = transform.transform_point3(model.bird.vertices[a as usize]);
            let end = transform.transform_point3(model.bird.vertices[b as usize]);
            draw_segment(&draw, view_projection, window_rect, start, end, bird_color, 1.0);
        }
    }

    if let Some(first) = boids.first() {
        if model.ui_state.show_neighborhood {
            let ring = circle(model.flock.params().neighborhood_radius, 100);
            draw_rings(&draw, view_projection, window_rect, first.position, &ring, rgba(0.75, 0.75, 0.75, 1.0));
        }
        if model.ui_state.show_collision {
            let ring = circle(BIRD_RADIUS, 30);
            draw_rings(&draw, view_projection, window_rect, first.position, &ring, rgba(0.2, 0.2, 0.2, 1.0));
        }
    }

    if model.ui_state.show_debug {
        let mut debug_info = model.debug_info.clone();
        debug_info.visible_boids = visible.len();
        ui::draw_debug_info(&draw, &debug_info, window_rect, boids.len(), &model.camera);
    }

    draw.to_frame(app, &frame).unwrap();
    model.egui.draw_to_frame(&frame).unwrap();
}
