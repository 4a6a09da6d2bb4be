/*
 * UI Module
 *
 * This module builds the egui control panel. The panel edits a copy of the
 * flock parameters; the app hands the copy back to the flock, which keeps
 * its old parameters if the new ones are rejected.
 */

use nannou_egui::{egui, Egui};

use crate::camera::OrbitalCamera;
use crate::debug::DebugInfo;
use crate::params::{FlockParams, SpeedLimit};

// Toggles owned by the panel
#[derive(Debug, Clone, PartialEq)]
pub struct UiState {
    pub pause_simulation: bool,
    pub parallel: bool,
    pub show_debug: bool,
    pub show_grid: bool,
    pub show_neighborhood: bool,
    pub show_collision: bool,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            pause_simulation: false,
            parallel: true,
            show_debug: false,
            show_grid: true,
            show_neighborhood: false,
            show_collision: false,
        }
    }
}

// What the user asked for this frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UiResponse {
    pub reset_flock: bool,
    pub reset_camera: bool,
    pub params_changed: bool,
}

pub fn update_ui(
    egui: &mut Egui,
    params: &mut FlockParams,
    state: &mut UiState,
    camera: &OrbitalCamera,
    debug_info: &DebugInfo,
) -> UiResponse {
    let mut response = UiResponse::default();
    let before = *params;

    let ctx = egui.begin_frame();

    egui::Window::new("Simulation Controls")
        .default_pos([10.0, 10.0])
        .show(&ctx, |ui| {
            ui.collapsing("Flocking Behavior", |ui| {
                ui.add(egui::Slider::new(&mut params.separation_weight, FlockParams::get_weight_range()).text("Separation Weight"));
                ui.add(egui::Slider::new(&mut params.cohesion_weight, FlockParams::get_weight_range()).text("Cohesion Weight"));
                ui.add(egui::Slider::new(&mut params.alignment_weight, FlockParams::get_weight_range()).text("Alignment Weight"));
                ui.add(egui::Slider::new(&mut params.neighborhood_radius, FlockParams::get_radius_range()).text("Neighborhood Radius"));
                ui.add(egui::Slider::new(&mut params.max_speed, FlockParams::get_max_speed_range()).text("Max Speed"));

                ui.horizontal(|ui| {
                    ui.label("Speed limit:");
                    ui.radio_value(&mut params.speed_limit, SpeedLimit::ClampToMax, "Clamp to max");
                    ui.radio_value(&mut params.speed_limit, SpeedLimit::UnitLength, "Unit length");
                });

                if ui.button("Reset Boids").clicked() {
                    response.reset_flock = true;
                }
            });

            ui.collapsing("Camera", |ui| {
                ui.label("Orbit: click and drag");
                if camera.zoom_enabled() {
                    ui.label("Zoom: mouse wheel or trackpad");
                }
                ui.label(format!("Theta: {:.1}°", camera.theta()));
                ui.label(format!("Phi: {:.1}°", camera.phi()));
                ui.label(format!("Radius: {:.2}", camera.radius()));
                if ui.button("Reset Camera").clicked() {
                    response.reset_camera = true;
                }
            });

            ui.collapsing("Display", |ui| {
                ui.checkbox(&mut state.show_grid, "Show Grid");
                ui.checkbox(&mut state.show_neighborhood, "Show Neighborhood");
                ui.checkbox(&mut state.show_collision, "Show Collision Region");
            });

            ui.collapsing("Performance", |ui| {
                ui.checkbox(&mut state.parallel, "Parallel Step");
                ui.label(format!("FPS: {:.1}", debug_info.fps));
                ui.label(format!("Step time: {:.2} ms", debug_info.step_time.as_secs_f64() * 1000.0));
            });

            ui.checkbox(&mut state.show_debug, "Show Debug Info");
            ui.checkbox(&mut state.pause_simulation, "Pause Simulation");
        });

    response.params_changed = *params != before;
    response
}

// Draw debug information on the screen
pub fn draw_debug_info(
    draw: &nannou::Draw,
    debug_info: &DebugInfo,
    window_rect: nannou::geom::Rect,
    boids_len: usize,
    camera: &OrbitalCamera,
) {
    let margin = 20.0;
    let line_height = 20.0;

    let mut lines = debug_info.lines(boids_len);
    lines.push(format!(
        "Camera: theta {:.1} phi {:.1} r {:.1}",
        camera.theta(),
        camera.phi(),
        camera.radius()
    ));

    let panel_width = 260.0;
    let panel_height = line_height * lines.len() as f32 + margin;
    draw.rect()
        .x_y(window_rect.right() - panel_width / 2.0, window_rect.top() - panel_height / 2.0)
        .w_h(panel_width, panel_height)
        .color(nannou::color::rgba(0.0, 0.0, 0.0, 0.7));

    let text_x = window_rect.right() - panel_width / 2.0;
    let text_y = window_rect.top() - margin;
    for (i, text) in lines.iter().enumerate() {
        draw.text(text)
            .x_y(text_x, text_y - i as f32 * line_height)
            .w(panel_width - margin)
            .left_justify()
            .color(nannou::color::WHITE)
            .font_size(14);
    }
}
