use thiserror::Error;

use crate::motion::InvalidAction;
use crate::world::WorldError;

/// Errors returned by the simulation front-ends.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SimError {
    #[error(transparent)]
    InvalidAction(#[from] InvalidAction),

    #[error("Environment must be reset before stepping")]
    NotReset,

    #[error("Episode is over; call reset before stepping again")]
    EpisodeOver,

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Expected {expected} actions, got {got}")]
    ActionCountMismatch { expected: usize, got: usize },

    #[error(transparent)]
    World(#[from] WorldError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_action_is_transparent() {
        let e: SimError = InvalidAction(5).into();
        assert_eq!(
            e.to_string(),
            "Invalid action 5: expected 0 (forward), 1 (turn left) or 2 (turn right)"
        );
    }

    #[test]
    fn not_reset_display() {
        assert_eq!(
            SimError::NotReset.to_string(),
            "Environment must be reset before stepping"
        );
    }

    #[test]
    fn world_error_converts() {
        let e: SimError = WorldError::InvalidRobotRadius(0).into();
        assert!(matches!(e, SimError::World(_)));
    }
}
