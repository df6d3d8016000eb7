//! Common interface of the two navigation front-ends.

use super::error::SimError;
use super::render::RenderSnapshot;
use super::types::{Info, StepResult};

/// Reset/step contract shared by the learning environment and the reactive
/// navigator.
///
/// # Lifecycle
///
/// 1. Call [`Simulation::reset`] to build a fresh floor and place the robot.
/// 2. Repeatedly call [`Simulation::step`] until the result reports done
///    (the reactive navigator never does).
/// 3. Call [`Simulation::close`] when finished.
pub trait Simulation {
    type Action;
    type Observation;

    /// Starts a new episode. The same seed always yields the same floor.
    fn reset(&mut self, seed: Option<u64>) -> Result<(Self::Observation, Info), SimError>;

    /// Advances by one tick.
    fn step(&mut self, action: Self::Action) -> Result<StepResult<Self::Observation>, SimError>;

    /// Snapshot of the current scene, if rendering is enabled.
    fn render(&self) -> Option<RenderSnapshot>;

    /// Releases rendering resources. Safe to call more than once.
    fn close(&mut self);

    /// Human-readable name.
    fn name(&self) -> &str;
}
