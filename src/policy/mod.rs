//! Action producers for the navigation environment.

pub mod heuristic;
pub mod random;
pub mod trait_;

pub use heuristic::GoalSeekingPolicy;
pub use random::RandomPolicy;
pub use trait_::Policy;
