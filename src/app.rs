/*
 * Application Module
 *
 * This module wires the flock and the orbital camera into a nannou window.
 * Each frame: read the elapsed time, step the flock, then draw it through
 * the camera's view matrix. The flock and the camera never talk to each
 * other; the window event handlers in `input` move the camera.
 */

use std::sync::OnceLock;
use std::time::Instant;

use log::{error, info, warn};
use nannou::prelude::*;
use nannou_egui::Egui;

use crate::camera::OrbitalCamera;
use crate::config::SimConfig;
use crate::debug::DebugInfo;
use crate::error::ParamsError;
use crate::flock::Flock;
use crate::input::{self, DragTracker};
use crate::params::FlockParams;
use crate::primitives::{bird_mesh, half_cube_grid, Mesh};
use crate::renderer;
use crate::ui::{self, UiState};

const GRID_SPACES: u32 = 10;

// nannou builds the model from a plain fn, so the scenario is parked here first
static SCENARIO: OnceLock<SimConfig> = OnceLock::new();

// Main model for the application
pub struct Model {
    pub flock: Flock,
    pub camera: OrbitalCamera,
    pub drag: DragTracker,
    pub egui: Egui,
    pub config: SimConfig,
    pub ui_state: UiState,
    pub debug_info: DebugInfo,
    pub bird: Mesh,
    pub bird_edges: Vec<(u16, u16)>,
    pub grid: Vec<(Vec3, Vec3)>,
    pub resets: u64,
}

/// Validate the scenario and open the simulation window. Blocks until the window closes.
pub fn run(config: SimConfig) -> Result<(), ParamsError> {
    config.validate()?;
    if SCENARIO.set(config).is_err() {
        warn!("Simulation already started; keeping the first scenario");
    }

    nannou::app(model).update(update).run();
    Ok(())
}

// Initialize the model
pub fn model(app: &App) -> Model {
    let config = SCENARIO.get().cloned().unwrap_or_default();

    let window_id = app
        .new_window()
        .title("Boids")
        .size(800, 600)
        .view(renderer::view)
        .mouse_moved(input::mouse_moved)
        .mouse_pressed(input::mouse_pressed)
        .mouse_released(input::mouse_released)
        .mouse_wheel(input::mouse_wheel)
        .key_pressed(input::key_pressed)
        .raw_event(input::raw_window_event)
        .build()
        .unwrap();

    let window = app.window(window_id).unwrap();
    let egui = Egui::from_window(&window);

    let flock = Flock::random(config.boids, config.flock, config.seed)
        .expect("scenario parameters are validated before launch");
    info!(
        "Spawned {} boids in a world of half extent {}",
        flock.len(),
        config.flock.world_half_extent
    );

    let bird = bird_mesh();
    let bird_edges = bird.edges();
    let grid = half_cube_grid(config.flock.world_half_extent, GRID_SPACES);

    Model {
        flock,
        camera: config.camera.build(),
        drag: DragTracker::from_config(&config.input),
        egui,
        ui_state: UiState { parallel: config.parallel, ..UiState::default() },
        config,
        debug_info: DebugInfo::default(),
        bird,
        bird_edges,
        grid,
        resets: 0,
    }
}

// Update the model
pub fn update(app: &App, model: &mut Model, update: Update) {
    model.debug_info.fps = app.fps();
    model.debug_info.frame_time = update.since_last;

    let mut params = *model.flock.params();
    let response = ui::update_ui(
        &mut model.egui,
        &mut params,
        &mut model.ui_state,
        &model.camera,
        &model.debug_info,
    );

    if response.params_changed {
        apply_params(model, params);
    }
    if response.reset_flock {
        reset_flock(model);
    }
    if response.reset_camera {
        reset_camera(model);
    }

    if model.ui_state.pause_simulation {
        return;
    }

    let dt = update.since_last.as_secs_f32() * model.config.time_scale;
    let started = Instant::now();
    if model.ui_state.parallel {
        model.flock.step_parallel(dt);
    } else {
        model.flock.step(dt);
    }
    model.debug_info.record_step(dt, started.elapsed());
}

pub fn apply_params(model: &mut Model, params: FlockParams) {
    let resized_world = params.world_half_extent != model.flock.params().world_half_extent;
    match model.flock.set_params(params) {
        Ok(()) => {
            if resized_world {
                model.grid = half_cube_grid(params.world_half_extent, GRID_SPACES);
            }
        }
        Err(e) => warn!("Rejected parameter change: {}", e),
    }
}

// Respawn the flock with the current parameters and a fresh seed
pub fn reset_flock(model: &mut Model) {
    model.resets += 1;
    let seed = model.config.seed.wrapping_add(model.resets);
    match Flock::random(model.flock.len(), *model.flock.params(), seed) {
        Ok(flock) => {
            info!("Reset flock with seed {}", seed);
            model.flock = flock;
        }
        Err(e) => error!("Could not reset flock: {}", e),
    }
}

pub fn reset_camera(model: &mut Model) {
    model.camera = model.config.camera.build();
    model.drag.end();
}
