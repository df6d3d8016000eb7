//! Robot actions and kinematics.

pub mod action;
pub mod kinematics;

pub use action::{Action, InvalidAction};
pub use kinematics::{Commit, Kinematics, MoveOutcome};
