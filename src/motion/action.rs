//! Discrete control actions.

use std::fmt;

use rand::Rng;
use thiserror::Error;

/// Raw action index outside `{0, 1, 2}`.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("Invalid action {0}: expected 0 (forward), 1 (turn left) or 2 (turn right)")]
pub struct InvalidAction(pub usize);

/// One of the three discrete robot commands.
///
/// Every command still attempts a forward move after any rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Action {
    Forward,
    TurnLeft,
    TurnRight,
}

impl Action {
    /// All actions in index order.
    pub const ALL: [Action; 3] = [Action::Forward, Action::TurnLeft, Action::TurnRight];

    /// Integer encoding used by external agents.
    pub fn index(&self) -> usize {
        match self {
            Action::Forward => 0,
            Action::TurnLeft => 1,
            Action::TurnRight => 2,
        }
    }

    /// Uniformly random action.
    pub fn sample<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }

    /// Heading change for this action given the turn increment.
    ///
    /// Left is counter-clockwise on screen, i.e. a negative change in the
    /// y-down frame.
    pub fn heading_delta(&self, turn: f64) -> f64 {
        match self {
            Action::Forward => 0.0,
            Action::TurnLeft => -turn,
            Action::TurnRight => turn,
        }
    }
}

impl TryFrom<usize> for Action {
    type Error = InvalidAction;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        Self::ALL.get(value).copied().ok_or(InvalidAction(value))
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Forward => write!(f, "forward"),
            Action::TurnLeft => write!(f, "turn_left"),
            Action::TurnRight => write!(f, "turn_right"),
        }
    }
}
