//! Evaluation metrics for navigation policies.
//!
//! Runs complete episodes and aggregates outcome rates and returns.

use std::fmt;

use super::environment::NavigationEnv;
use super::error::SimError;
use super::types::{EpisodeStatus, TerminalCause};
use crate::policy::Policy;

/// Aggregated evaluation metrics over multiple episodes.
#[derive(Debug, Clone, PartialEq)]
pub struct EvaluationMetrics {
    /// Mean undiscounted return per episode.
    pub mean_return: f64,
    /// Mean number of steps per episode.
    pub mean_length: f64,
    /// Fraction of episodes that reached the goal.
    pub success_rate: f64,
    /// Fraction of episodes that ended in a collision.
    pub collision_rate: f64,
    /// Fraction of episodes cut off by the step budget.
    pub truncation_rate: f64,
    /// Number of episodes evaluated.
    pub n_episodes: usize,
}

impl EvaluationMetrics {
    /// Evaluates `policy` on `n_episodes` floors seeded `base_seed..`.
    pub fn evaluate(
        env: &mut NavigationEnv,
        policy: &mut dyn Policy,
        n_episodes: usize,
        base_seed: u64,
    ) -> Result<Self, SimError> {
        let mut returns = Vec::with_capacity(n_episodes);
        let mut lengths = Vec::with_capacity(n_episodes);
        let (mut goals, mut collisions, mut truncations) = (0usize, 0usize, 0usize);

        for episode in 0..n_episodes {
            let (mut obs, _) = env.reset(Some(base_seed.wrapping_add(episode as u64)))?;
            loop {
                let action = policy.select_action(&obs);
                let result = env.step(action)?;
                obs = result.observation;
                if result.terminated || result.truncated {
                    break;
                }
            }

            match env.status() {
                Some(EpisodeStatus::Terminated(TerminalCause::GoalReached)) => goals += 1,
                Some(EpisodeStatus::Terminated(TerminalCause::Collision)) => collisions += 1,
                Some(EpisodeStatus::Truncated) => truncations += 1,
                _ => {}
            }
            returns.push(env.cumulative_reward());
            lengths.push(env.steps() as f64);
        }

        let n = n_episodes.max(1) as f64;
        Ok(Self {
            mean_return: returns.iter().sum::<f64>() / n,
            mean_length: lengths.iter().sum::<f64>() / n,
            success_rate: goals as f64 / n,
            collision_rate: collisions as f64 / n,
            truncation_rate: truncations as f64 / n,
            n_episodes,
        })
    }
}

impl fmt::Display for EvaluationMetrics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "=== Evaluation Metrics ({} episodes) ===",
            self.n_episodes
        )?;
        writeln!(f, "  Mean return:      {:.2}", self.mean_return)?;
        writeln!(f, "  Mean length:      {:.1}", self.mean_length)?;
        writeln!(f, "  Success rate:     {:.1}%", self.success_rate * 100.0)?;
        writeln!(f, "  Collision rate:   {:.1}%", self.collision_rate * 100.0)?;
        writeln!(f, "  Truncation rate:  {:.1}%", self.truncation_rate * 100.0)
    }
}
