//! Configuration for the reactive navigator.

use std::f64::consts::PI;

use crate::env::{RenderMode, SimError};
use crate::geometry::Position;
use crate::world::WorldConfig;

/// Parameters of the reactive obstacle-avoidance loop.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReactiveConfig {
    pub world: WorldConfig,
    /// Forward displacement per frame.
    pub speed: f64,
    /// Angular window searched for a free heading.
    pub fov: f64,
    /// How far ahead a heading must be free.
    pub look_ahead: u32,
    /// Distance between look-ahead samples.
    pub look_ahead_step: u32,
    /// Number of sweep offsets from 0 to `fov / 2`.
    pub sweep_steps: usize,
    /// Rays reported for display.
    pub visual_rays: usize,
    /// Range of the random heading change after a blocked move, radians.
    pub perturbation: (f64, f64),
    pub start: Position,
    pub start_heading: f64,
    /// Seed for the floor and for every random heading choice.
    pub seed: u64,
    /// Oldest trail points are dropped beyond this length.
    pub max_trail_len: usize,
    pub render_mode: RenderMode,
}

impl ReactiveConfig {
    pub fn validate(&self) -> Result<(), SimError> {
        self.world.validate()?;
        self.validate_motion()
    }

    /// Checks everything except random obstacle placement.
    pub fn validate_motion(&self) -> Result<(), SimError> {
        self.world.check_point("start", &self.start)?;
        if self.look_ahead <= self.world.robot_radius {
            return Err(SimError::InvalidConfig(format!(
                "look_ahead {} must exceed robot radius {}",
                self.look_ahead, self.world.robot_radius
            )));
        }
        if self.sweep_steps == 0 {
            return Err(SimError::InvalidConfig("sweep_steps must be at least 1".into()));
        }
        let (lo, hi) = self.perturbation;
        if !(lo.is_finite() && hi.is_finite() && lo <= hi) {
            return Err(SimError::InvalidConfig(format!(
                "perturbation range [{lo}, {hi}] is empty"
            )));
        }
        if !(self.speed.is_finite() && self.speed > 0.0) {
            return Err(SimError::InvalidConfig(format!(
                "speed must be positive, got {}",
                self.speed
            )));
        }
        Ok(())
    }
}

impl Default for ReactiveConfig {
    fn default() -> Self {
        Self {
            world: WorldConfig::reactive(),
            speed: 2.5,
            fov: PI / 2.0,
            look_ahead: 30,
            look_ahead_step: 2,
            sweep_steps: 20,
            visual_rays: 9,
            perturbation: (20f64.to_radians(), 160f64.to_radians()),
            start: Position::new(60.0, 60.0),
            start_heading: 0.0,
            seed: 42,
            max_trail_len: 10_000,
            render_mode: RenderMode::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let cfg = ReactiveConfig::default();
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.world.obstacles.count, 12);
    }

    #[test]
    fn inverted_perturbation_rejected() {
        let cfg = ReactiveConfig {
            perturbation: (2.0, 1.0),
            ..ReactiveConfig::default()
        };
        assert!(matches!(cfg.validate(), Err(SimError::InvalidConfig(_))));
    }

    #[test]
    fn look_ahead_inside_robot_rejected() {
        let cfg = ReactiveConfig {
            look_ahead: 5,
            ..ReactiveConfig::default()
        };
        assert!(cfg.validate().is_err());
    }
}
