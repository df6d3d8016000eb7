//! Configuration for the learning environment.

use std::f64::consts::PI;

use crate::geometry::Position;
use crate::motion::{Commit, Kinematics};
use crate::sensing::Raycaster;
use crate::world::WorldConfig;

use super::error::SimError;
use super::observation::ObservationBuilder;
use super::render::RenderMode;
use super::reward::RewardConfig;

/// Configuration for [`NavigationEnv`](super::NavigationEnv).
///
/// Controls floor geometry, robot dynamics, the ray sensor, episode limits,
/// and reward shaping.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NavConfig {
    // --- Floor ---
    pub world: WorldConfig,

    // --- Robot dynamics ---
    /// Forward displacement per step.
    pub speed: f64,
    /// Heading change of a turn action, in radians.
    pub turn_increment: f64,

    // --- Ray sensor ---
    /// Number of rays N in the observation.
    pub num_rays: usize,
    /// Angular span of the ray fan, centred on the heading.
    pub ray_fov: f64,
    /// Maximum ray length; also the normalization constant.
    pub ray_range: u32,
    /// Distance between ray samples.
    pub ray_step: u32,

    // --- Episode ---
    pub start: Position,
    pub start_heading: f64,
    /// Goal point; `None` places it 40 units in from the far corner.
    pub goal: Option<Position>,
    /// Distance below which the goal counts as reached.
    pub goal_radius: f64,
    /// Step budget before truncation.
    pub max_steps: u32,
    /// Seed for the first reset when none is given.
    pub default_seed: u64,

    pub reward: RewardConfig,
    pub render_mode: RenderMode,
}

impl NavConfig {
    /// Distance of the default goal from the bottom-right corner.
    pub const GOAL_INSET: f64 = 40.0;

    /// The goal actually used by episodes.
    pub fn goal(&self) -> Position {
        self.goal.unwrap_or_else(|| {
            Position::new(
                self.world.width as f64 - Self::GOAL_INSET,
                self.world.height as f64 - Self::GOAL_INSET,
            )
        })
    }

    /// Observation length.
    pub fn observation_dim(&self) -> usize {
        ObservationBuilder::dim(self.num_rays)
    }

    /// Number of discrete actions.
    pub fn action_dim(&self) -> usize {
        3
    }

    pub fn raycaster(&self) -> Raycaster {
        Raycaster::new(self.world.robot_radius, self.ray_range, self.ray_step)
    }

    pub fn kinematics(&self) -> Kinematics {
        Kinematics::new(self.speed, self.turn_increment, Commit::GridCell)
    }

    /// Full validation, including random obstacle placement.
    pub fn validate(&self) -> Result<(), SimError> {
        self.world.validate()?;
        self.validate_episode()
    }

    /// Validation for episodes on a caller-supplied layout.
    pub fn validate_episode(&self) -> Result<(), SimError> {
        self.world.validate_robot()?;
        let r = self.world.robot_radius;
        self.world.check_point("start", &self.start)?;
        self.world.check_point("goal", &self.goal())?;
        if self.num_rays == 0 {
            return Err(SimError::InvalidConfig("num_rays must be at least 1".into()));
        }
        if self.ray_range <= r {
            return Err(SimError::InvalidConfig(format!(
                "ray_range {} must exceed robot radius {}",
                self.ray_range, r
            )));
        }
        if !(self.speed.is_finite() && self.speed > 0.0) {
            return Err(SimError::InvalidConfig(format!(
                "speed must be positive, got {}",
                self.speed
            )));
        }
        if self.max_steps == 0 {
            return Err(SimError::InvalidConfig("max_steps must be positive".into()));
        }
        if self.start.distance_to(&self.goal()) < self.goal_radius {
            return Err(SimError::InvalidConfig(
                "start lies inside the goal radius".into(),
            ));
        }
        Ok(())
    }
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            world: WorldConfig::learning(),
            speed: 4.0,
            turn_increment: 18f64.to_radians(),
            num_rays: 8,
            ray_fov: PI,
            ray_range: 80,
            ray_step: 1,
            start: Position::new(40.0, 40.0),
            start_heading: 0.0,
            goal: None,
            goal_radius: 20.0,
            max_steps: 1000,
            default_seed: 42,
            reward: RewardConfig::default(),
            render_mode: RenderMode::None,
        }
    }
}
