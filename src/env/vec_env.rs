//! A batch of independent environments stepped together.
//!
//! Instances share nothing: each owns its floor, pose, and seed sequence.
//! With the `parallel` feature the batch is stepped on the rayon pool.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::motion::Action;

use super::config::NavConfig;
use super::environment::NavigationEnv;
use super::error::SimError;
use super::types::StepResult;

/// Fixed-size batch of [`NavigationEnv`] instances.
#[derive(Debug)]
pub struct VecEnv {
    envs: Vec<NavigationEnv>,
    base_seed: u64,
}

impl VecEnv {
    /// Creates `n` environments sharing one configuration.
    ///
    /// Instance `i` is first reset with seed `base_seed + i`.
    pub fn new(config: NavConfig, n: usize, base_seed: u64) -> Result<Self, SimError> {
        let envs = (0..n)
            .map(|_| NavigationEnv::new(config.clone()))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { envs, base_seed })
    }

    pub fn len(&self) -> usize {
        self.envs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.envs.is_empty()
    }

    pub fn envs(&self) -> &[NavigationEnv] {
        &self.envs
    }

    /// Resets every instance with its own seed.
    pub fn reset_all(&mut self) -> Result<Vec<Vec<f64>>, SimError> {
        let base = self.base_seed;
        self.envs
            .iter_mut()
            .enumerate()
            .map(|(i, env)| env.reset(Some(base.wrapping_add(i as u64))).map(|(obs, _)| obs))
            .collect()
    }

    /// Mutable access to one instance, e.g. to load a fixed layout.
    pub fn env_mut(&mut self, index: usize) -> Option<&mut NavigationEnv> {
        self.envs.get_mut(index)
    }

    /// Steps every instance with its own action.
    ///
    /// Fails without stepping anything when an instance is not reset or its
    /// episode is over; call [`VecEnv::reset_done`] first.
    pub fn step_all(&mut self, actions: &[Action]) -> Result<Vec<StepResult>, SimError> {
        if actions.len() != self.envs.len() {
            return Err(SimError::ActionCountMismatch {
                expected: self.envs.len(),
                got: actions.len(),
            });
        }
        for env in &self.envs {
            match env.status() {
                None => return Err(SimError::NotReset),
                Some(status) if !status.is_active() => return Err(SimError::EpisodeOver),
                Some(_) => {}
            }
        }

        #[cfg(feature = "parallel")]
        let results: Result<Vec<_>, _> = self
            .envs
            .par_iter_mut()
            .zip(actions.par_iter())
            .map(|(env, &action)| env.step(action))
            .collect();

        #[cfg(not(feature = "parallel"))]
        let results: Result<Vec<_>, _> = self
            .envs
            .iter_mut()
            .zip(actions)
            .map(|(env, &action)| env.step(action))
            .collect();

        results
    }

    /// Resets the instances whose episode has ended.
    ///
    /// Returns the fresh observation for each reset instance and `None` for
    /// instances still running. Reset instances continue their own seed
    /// sequence.
    pub fn reset_done(&mut self) -> Result<Vec<Option<Vec<f64>>>, SimError> {
        self.envs
            .iter_mut()
            .map(|env| match env.status() {
                Some(status) if status.is_active() => Ok(None),
                _ => env.reset(None).map(|(obs, _)| Some(obs)),
            })
            .collect()
    }
}
