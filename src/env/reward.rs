//! Reward shaping for the navigation episode.
//!
//! Every step pays a flat cost. A blocked move adds the collision penalty;
//! an accepted move earns progress toward the goal. Reaching the goal adds
//! a bonus on top of whatever the move produced.

/// Reward coefficients.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RewardConfig {
    /// Flat cost subtracted every step.
    pub step_cost: f64,
    /// Penalty subtracted when the forward move is blocked.
    pub collision_penalty: f64,
    /// Multiplier on the reduction in goal distance.
    pub progress_scale: f64,
    /// Bonus added when the goal radius is entered.
    pub goal_bonus: f64,
}

impl Default for RewardConfig {
    fn default() -> Self {
        Self {
            step_cost: 0.01,
            collision_penalty: 10.0,
            progress_scale: 5.0,
            goal_bonus: 100.0,
        }
    }
}

/// Individual reward terms of one step.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RewardBreakdown {
    pub step_cost: f64,
    pub collision: f64,
    pub progress: f64,
    pub goal: f64,
}

impl RewardBreakdown {
    /// Sum of the terms, accumulated in transition order.
    pub fn total(&self) -> f64 {
        let mut reward = self.step_cost;
        reward += self.collision;
        reward += self.progress;
        reward += self.goal;
        reward
    }
}

/// Computes per-step rewards.
pub struct RewardComputer;

impl RewardComputer {
    /// Reward for one step.
    ///
    /// # Arguments
    ///
    /// * `collided` - The forward move was rejected
    /// * `distance_gain` - `prev_goal_distance - new_goal_distance`; ignored on collision
    /// * `reached_goal` - The robot ended the step inside the goal radius
    pub fn compute(
        config: &RewardConfig,
        collided: bool,
        distance_gain: f64,
        reached_goal: bool,
    ) -> RewardBreakdown {
        let mut r = RewardBreakdown {
            step_cost: -config.step_cost,
            ..RewardBreakdown::default()
        };
        if collided {
            r.collision = -config.collision_penalty;
        } else {
            r.progress = distance_gain * config.progress_scale;
        }
        if reached_goal {
            r.goal = config.goal_bonus;
        }
        r
    }
}
