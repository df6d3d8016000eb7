//! Policy trait for the navigation environment.

use crate::motion::Action;

/// A policy that picks a discrete action from an observation vector.
///
/// Observations follow the layout produced by
/// [`ObservationBuilder`](crate::env::ObservationBuilder).
pub trait Policy: Send {
    /// Selects the next action.
    fn select_action(&mut self, observation: &[f64]) -> Action;

    /// Returns a human-readable name for this policy.
    fn name(&self) -> &str;
}
