/*
 * Input Module
 *
 * This module turns pointer input into camera changes.
 *
 * Features:
 * - Orbiting with a left-button drag (horizontal drag -> theta, vertical -> phi)
 * - Zooming with the mouse wheel or trackpad
 * - Ignoring pointer input that lands on the egui panel
 *
 * The camera does not validate the deltas it receives, so every drag delta is
 * capped here before it is handed over.
 */

use nannou::prelude::*;
use nannou::winit::event::{MouseButton, MouseScrollDelta, TouchPhase};

use crate::app::Model;
use crate::camera::OrbitalCamera;
use crate::config::InputConfig;

// Pixel deltas are much finer than line deltas; scale them to roughly one line per 100px
const PIXELS_PER_LINE: f32 = 100.0;

// Tracks a left-button drag and converts pointer motion into bounded angle deltas
#[derive(Debug, Clone, PartialEq)]
pub struct DragTracker {
    last_cursor_pos: Option<Vec2>,
    sensitivity: f32,
    max_delta: f32,
}

impl DragTracker {
    pub fn new(sensitivity: f32, max_delta: f32) -> Self {
        Self {
            last_cursor_pos: None,
            sensitivity,
            max_delta: max_delta.abs(),
        }
    }

    pub fn from_config(config: &InputConfig) -> Self {
        Self::new(config.drag_sensitivity, config.max_drag_delta)
    }

    pub fn is_dragging(&self) -> bool {
        self.last_cursor_pos.is_some()
    }

    pub fn start(&mut self, position: Vec2) {
        self.last_cursor_pos = Some(position);
    }

    /// Record a pointer move. Returns the capped delta when a drag is in progress
    /// and the pointer actually moved.
    pub fn drag(&mut self, position: Vec2) -> Option<Vec2> {
        let last = self.last_cursor_pos?;
        let delta = position - last;
        if delta.length_squared() == 0.0 {
            return None;
        }

        self.last_cursor_pos = Some(position);
        let scaled = delta * self.sensitivity;
        Some(vec2(
            scaled.x.clamp(-self.max_delta, self.max_delta),
            scaled.y.clamp(-self.max_delta, self.max_delta),
        ))
    }

    pub fn end(&mut self) {
        self.last_cursor_pos = None;
    }
}

// Apply a drag delta to the camera
pub fn orbit(camera: &mut OrbitalCamera, delta: Vec2) {
    camera.update_theta(delta.x);
    camera.update_phi(delta.y);
}

// Radius change for a wheel event; positive values move the camera in
pub fn scroll_to_radius_delta(delta: MouseScrollDelta, zoom_step: f32) -> f32 {
    let lines = match delta {
        MouseScrollDelta::LineDelta(_, y) => y,
        MouseScrollDelta::PixelDelta(pos) => pos.y as f32 / PIXELS_PER_LINE,
    };
    lines * zoom_step
}

// Mouse moved event handler
pub fn mouse_moved(_app: &App, model: &mut Model, pos: Point2) {
    if let Some(delta) = model.drag.drag(pos) {
        orbit(&mut model.camera, delta);
    }
}

// Mouse pressed event handler
pub fn mouse_pressed(app: &App, model: &mut Model, button: MouseButton) {
    if button == MouseButton::Left && !model.egui.ctx().is_pointer_over_area() {
        model.drag.start(app.mouse.position());
    }
}

// Mouse released event handler
pub fn mouse_released(_app: &App, model: &mut Model, button: MouseButton) {
    if button == MouseButton::Left {
        model.drag.end();
    }
}

// Mouse wheel event handler for zooming
pub fn mouse_wheel(_app: &App, model: &mut Model, delta: MouseScrollDelta, _phase: TouchPhase) {
    if model.egui.ctx().is_pointer_over_area() {
        return;
    }
    let radius_delta = scroll_to_radius_delta(delta, model.config.input.zoom_step);
    model.camera.update_radius(radius_delta);
}

// Keyboard shortcuts: space pauses, R respawns the flock, C resets the camera, G toggles the grid
pub fn key_pressed(_app: &App, model: &mut Model, key: Key) {
    match key {
        Key::Space => model.ui_state.pause_simulation = !model.ui_state.pause_simulation,
        Key::R => crate::app::reset_flock(model),
        Key::C => crate::app::reset_camera(model),
        Key::G => model.ui_state.show_grid = !model.ui_state.show_grid,
        _ => {}
    }
}

// Handle raw window events for egui
pub fn raw_window_event(_app: &App, model: &mut Model, event: &nannou::winit::event::WindowEvent) {
    model.egui.handle_raw_event(event);
}

#[cfg(test)]
mod tests {
    use super::*;
    use nannou::winit::dpi::PhysicalPosition;

    #[test]
    fn drag_needs_a_press_first() {
        let mut tracker = DragTracker::new(1.0, 10.0);
        assert_eq!(tracker.drag(vec2(5.0, 5.0)), None);

        tracker.start(vec2(0.0, 0.0));
        assert_eq!(tracker.drag(vec2(3.0, -2.0)), Some(vec2(3.0, -2.0)));
        assert_eq!(tracker.drag(vec2(3.0, -2.0)), None);

        tracker.end();
        assert!(!tracker.is_dragging());
        assert_eq!(tracker.drag(vec2(9.0, 9.0)), None);
    }

    #[test]
    fn drag_deltas_are_capped() {
        let mut tracker = DragTracker::new(1.0, 10.0);
        tracker.start(vec2(0.0, 0.0));
        assert_eq!(tracker.drag(vec2(250.0, -40.0)), Some(vec2(10.0, -10.0)));
    }

    #[test]
    fn sensitivity_scales_before_the_cap() {
        let mut tracker = DragTracker::new(0.5, 10.0);
        tracker.start(vec2(0.0, 0.0));
        assert_eq!(tracker.drag(vec2(8.0, 30.0)), Some(vec2(4.0, 10.0)));
    }

    #[test]
    fn orbit_moves_both_angles() {
        let mut camera = OrbitalCamera::new(10.0, 0.0, 45.0, Vec3::ZERO);
        orbit(&mut camera, vec2(10.0, 5.0));
        assert!((camera.theta() - -10.0).abs() < 1e-4);
        assert!((camera.phi() - 40.0).abs() < 1e-4);
    }

    #[test]
    fn scroll_maps_lines_and_pixels() {
        assert_eq!(scroll_to_radius_delta(MouseScrollDelta::LineDelta(0.0, 2.0), 1.5), 3.0);
        let pixels = MouseScrollDelta::PixelDelta(PhysicalPosition::new(0.0, -200.0));
        assert_eq!(scroll_to_radius_delta(pixels, 1.0), -2.0);
    }
}
