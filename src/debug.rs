/*
 * Debug Information Module
 *
 * This module defines the DebugInfo struct that contains performance metrics
 * shown in the UI panel and the on-screen overlay.
 */

use std::time::Duration;

// Debug information to display
#[derive(Debug, Clone, Default)]
pub struct DebugInfo {
    pub fps: f32,
    pub frame_time: Duration,
    pub step_time: Duration,
    pub simulated_dt: f32,
    pub steps: u64,
    pub visible_boids: usize,
}

impl DebugInfo {
    // Record one flock step
    pub fn record_step(&mut self, dt: f32, took: Duration) {
        self.simulated_dt = dt;
        self.step_time = took;
        self.steps += 1;
    }

    pub fn lines(&self, total_boids: usize) -> Vec<String> {
        vec![
            format!("FPS: {:.1}", self.fps),
            format!("Frame time: {:.2} ms", self.frame_time.as_secs_f64() * 1000.0),
            format!("Step time: {:.2} ms", self.step_time.as_secs_f64() * 1000.0),
            format!("Simulated dt: {:.2} ms", self.simulated_dt * 1000.0),
            format!("Steps: {}", self.steps),
            format!("Total Boids: {}", total_boids),
            format!("Visible Boids: {}", self.visible_boids),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_step_counts() {
        let mut info = DebugInfo::default();
        info.record_step(0.016, Duration::from_millis(2));
        info.record_step(0.017, Duration::from_millis(3));
        assert_eq!(info.steps, 2);
        assert_eq!(info.simulated_dt, 0.017);
        assert_eq!(info.step_time, Duration::from_millis(3));
    }

    #[test]
    fn lines_include_boid_counts() {
        let info = DebugInfo { visible_boids: 7, ..DebugInfo::default() };
        let lines = info.lines(20);
        assert!(lines.contains(&"Total Boids: 20".to_string()));
        assert!(lines.contains(&"Visible Boids: 7".to_string()));
    }

    #[test]
    fn lines_show_the_last_simulated_dt() {
        let mut info = DebugInfo::default();
        info.record_step(0.008, Duration::from_millis(1));
        assert!(info.lines(1).contains(&"Simulated dt: 8.00 ms".to_string()));
    }
}
