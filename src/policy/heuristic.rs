//! Goal-seeking heuristic baseline.
//!
//! Steers toward the goal and turns toward the more open side when the
//! forward-facing rays report an obstacle close ahead.

use std::f64::consts::{PI, TAU};

use super::trait_::Policy;
use crate::env::{NavConfig, ObservationBuilder};
use crate::motion::Action;

/// Heuristic policy reading only the observation vector.
///
/// The goal direction is recovered by undoing the canvas normalization of
/// the goal offset. Turns are issued when the heading error exceeds half a
/// turn increment.
pub struct GoalSeekingPolicy {
    width: f64,
    height: f64,
    num_rays: usize,
    turn_increment: f64,
    /// Normalized forward range below which the policy steers away.
    pub clearance: f64,
}

impl GoalSeekingPolicy {
    pub fn new(config: &NavConfig) -> Self {
        Self {
            width: config.world.width as f64,
            height: config.world.height as f64,
            num_rays: config.num_rays,
            turn_increment: config.turn_increment,
            clearance: 0.35,
        }
    }

    fn avoid(&self, rays: &[f64]) -> Option<Action> {
        let n = rays.len();
        let front = if n % 2 == 0 {
            rays[n / 2 - 1].min(rays[n / 2])
        } else {
            rays[n / 2]
        };
        if front >= self.clearance {
            return None;
        }
        // first half of the fan lies on the left of the heading
        let left: f64 = rays[..n / 2].iter().sum();
        let right: f64 = rays[n - n / 2..].iter().sum();
        Some(if left > right {
            Action::TurnLeft
        } else {
            Action::TurnRight
        })
    }
}

impl Policy for GoalSeekingPolicy {
    fn select_action(&mut self, observation: &[f64]) -> Action {
        let offset = ObservationBuilder::POSE_FEATURE_DIM;
        if observation.len() < offset + self.num_rays || self.num_rays == 0 {
            return Action::Forward;
        }

        if let Some(action) = self.avoid(&observation[offset..offset + self.num_rays]) {
            return action;
        }

        let goal_angle = (observation[1] * self.height).atan2(observation[0] * self.width);
        let heading = observation[3].atan2(observation[2]);
        let error = (goal_angle - heading + PI).rem_euclid(TAU) - PI;

        let dead_band = self.turn_increment / 2.0;
        if error < -dead_band {
            Action::TurnLeft
        } else if error > dead_band {
            Action::TurnRight
        } else {
            Action::Forward
        }
    }

    fn name(&self) -> &str {
        "goal_seeking"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn obs(dx: f64, dy: f64, heading: f64, rays: [f64; 8]) -> Vec<f64> {
        let mut o = vec![dx, dy, heading.cos(), heading.sin()];
        o.extend(rays);
        o
    }

    #[test]
    fn drives_straight_at_goal() {
        let mut policy = GoalSeekingPolicy::new(&NavConfig::default());
        let o = obs(0.5, 0.0, 0.0, [1.0; 8]);
        assert_eq!(policy.select_action(&o), Action::Forward);
    }

    #[test]
    fn turns_toward_goal() {
        let mut policy = GoalSeekingPolicy::new(&NavConfig::default());
        // goal straight "down" the canvas, heading along +x
        assert_eq!(
            policy.select_action(&obs(0.0, 0.5, 0.0, [1.0; 8])),
            Action::TurnRight
        );
        assert_eq!(
            policy.select_action(&obs(0.0, -0.5, 0.0, [1.0; 8])),
            Action::TurnLeft
        );
    }

    #[test]
    fn steers_to_open_side_when_blocked() {
        let mut policy = GoalSeekingPolicy::new(&NavConfig::default());
        let rays = [1.0, 1.0, 0.9, 0.2, 0.2, 0.3, 0.2, 0.2];
        assert_eq!(
            policy.select_action(&obs(0.5, 0.0, 0.0, rays)),
            Action::TurnLeft
        );
    }

    #[test]
    fn short_observation_defaults_forward() {
        let mut policy = GoalSeekingPolicy::new(&NavConfig::default());
        assert_eq!(policy.select_action(&[0.1, 0.2]), Action::Forward);
    }
}
