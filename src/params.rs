/*
 * Flock Parameters Module
 *
 * This module defines the FlockParams struct that holds the steering
 * configuration shared by every boid in a flock. The values are fixed while
 * a step runs; the UI edits a copy and hands it back through
 * `Flock::set_params`, which validates it first.
 */

use serde::{Deserialize, Serialize};

use crate::error::ParamsError;

/// What happens to a velocity whose magnitude exceeds `max_speed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpeedLimit {
    /// Rescale to `max_speed`.
    ClampToMax,
    /// Rescale to length 1, whatever `max_speed` is. This is how the original
    /// simulation behaved; it only respects the speed bound when `max_speed >= 1`.
    UnitLength,
}

impl Default for SpeedLimit {
    fn default() -> Self {
        SpeedLimit::ClampToMax
    }
}

// Steering configuration for a flock
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlockParams {
    pub neighborhood_radius: f32,
    pub separation_weight: f32,
    pub cohesion_weight: f32,
    pub alignment_weight: f32,
    pub max_speed: f32,
    pub world_half_extent: f32,
    pub speed_limit: SpeedLimit,
}

impl Default for FlockParams {
    fn default() -> Self {
        Self {
            // Five bird radii, the size of the neighborhood ring drawn in debug mode
            neighborhood_radius: 0.3536 * 5.0,
            separation_weight: 0.12,
            cohesion_weight: 0.12,
            alignment_weight: 0.12,
            max_speed: 2.0,
            world_half_extent: 10.0,
            speed_limit: SpeedLimit::default(),
        }
    }
}

impl FlockParams {
    // Sum of the three steering weights, used to normalize the combined acceleration
    #[inline]
    pub fn weight_sum(&self) -> f32 {
        self.separation_weight + self.cohesion_weight + self.alignment_weight
    }

    /// Check that every scalar is usable by the step.
    pub fn validate(&self) -> Result<(), ParamsError> {
        let scalars = [
            ("neighborhood_radius", self.neighborhood_radius),
            ("separation_weight", self.separation_weight),
            ("cohesion_weight", self.cohesion_weight),
            ("alignment_weight", self.alignment_weight),
            ("max_speed", self.max_speed),
            ("world_half_extent", self.world_half_extent),
        ];
        for (name, value) in scalars {
            if !value.is_finite() {
                return Err(ParamsError::NonFinite(name));
            }
        }

        for (name, value) in [
            ("neighborhood_radius", self.neighborhood_radius),
            ("max_speed", self.max_speed),
            ("world_half_extent", self.world_half_extent),
        ] {
            if value <= 0.0 {
                return Err(ParamsError::NotPositive(name, value));
            }
        }

        for (name, value) in [
            ("separation_weight", self.separation_weight),
            ("cohesion_weight", self.cohesion_weight),
            ("alignment_weight", self.alignment_weight),
        ] {
            if value < 0.0 {
                return Err(ParamsError::NegativeWeight(name, value));
            }
        }

        if self.weight_sum() <= 0.0 {
            return Err(ParamsError::ZeroWeightSum);
        }

        Ok(())
    }

    // Get parameter ranges for UI sliders
    pub fn get_weight_range() -> std::ops::RangeInclusive<f32> {
        0.0..=3.0
    }

    pub fn get_radius_range() -> std::ops::RangeInclusive<f32> {
        0.1..=10.0
    }

    pub fn get_max_speed_range() -> std::ops::RangeInclusive<f32> {
        0.1..=20.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert_eq!(FlockParams::default().validate(), Ok(()));
    }

    #[test]
    fn rejects_all_zero_weights() {
        let params = FlockParams {
            separation_weight: 0.0,
            cohesion_weight: 0.0,
            alignment_weight: 0.0,
            ..FlockParams::default()
        };
        assert_eq!(params.validate(), Err(ParamsError::ZeroWeightSum));
    }

    #[test]
    fn rejects_negative_weight_and_non_positive_extent() {
        let params = FlockParams { cohesion_weight: -0.5, ..FlockParams::default() };
        assert_eq!(
            params.validate(),
            Err(ParamsError::NegativeWeight("cohesion_weight", -0.5))
        );

        let params = FlockParams { world_half_extent: 0.0, ..FlockParams::default() };
        assert_eq!(
            params.validate(),
            Err(ParamsError::NotPositive("world_half_extent", 0.0))
        );
    }

    #[test]
    fn rejects_nan() {
        let params = FlockParams { max_speed: f32::NAN, ..FlockParams::default() };
        assert_eq!(params.validate(), Err(ParamsError::NonFinite("max_speed")));
    }

    #[test]
    fn zero_weight_allowed_when_others_are_not() {
        let params = FlockParams { alignment_weight: 0.0, ..FlockParams::default() };
        assert!(params.validate().is_ok());
        assert!((params.weight_sum() - 0.24).abs() < 1e-6);
    }
}
