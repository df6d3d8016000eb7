//! Pose integration and collision resolution.

use crate::geometry::{Pose, Position};
use crate::world::OccupancyField;

use super::action::Action;

/// How an accepted candidate position is stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Commit {
    /// Snap onto the tested grid cell; the pose stays on integer coordinates.
    GridCell,
    /// Keep the exact floating-point candidate.
    Continuous,
}

/// Result of a forward move attempt.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MoveOutcome {
    /// The candidate was free and has been committed.
    Moved { from: Position, to: Position },
    /// The candidate collides; the pose is unchanged.
    Blocked { attempted: Position },
}

impl MoveOutcome {
    pub fn is_blocked(&self) -> bool {
        matches!(self, MoveOutcome::Blocked { .. })
    }
}

/// Unicycle model with a fixed forward speed and turn increment.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Kinematics {
    /// Distance covered by one forward move.
    pub speed: f64,
    /// Rotation applied by a turn action, in radians.
    pub turn_increment: f64,
    pub commit: Commit,
}

impl Kinematics {
    pub fn new(speed: f64, turn_increment: f64, commit: Commit) -> Self {
        Self {
            speed,
            turn_increment,
            commit,
        }
    }

    /// Rotates the pose in place; position is untouched.
    pub fn turn(&self, pose: &mut Pose, action: Action) {
        pose.heading += action.heading_delta(self.turn_increment);
    }

    /// Attempts one forward move along the current heading.
    pub fn advance(&self, field: &OccupancyField, pose: &mut Pose) -> MoveOutcome {
        let candidate = pose.ahead(self.speed);
        if field.collides(&candidate) {
            return MoveOutcome::Blocked {
                attempted: candidate,
            };
        }

        let from = pose.position;
        pose.position = match self.commit {
            Commit::GridCell => candidate.snapped(),
            Commit::Continuous => candidate,
        };
        MoveOutcome::Moved {
            from,
            to: pose.position,
        }
    }

    /// Turn, then always attempt a forward move.
    pub fn apply(&self, field: &OccupancyField, pose: &mut Pose, action: Action) -> MoveOutcome {
        self.turn(pose, action);
        self.advance(field, pose)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::Obstacle;

    fn open_field() -> OccupancyField {
        OccupancyField::build(200, 200, &[], 10)
    }

    fn grid_kinematics() -> Kinematics {
        Kinematics::new(4.0, 18f64.to_radians(), Commit::GridCell)
    }

    #[test]
    fn forward_moves_by_speed() {
        let field = open_field();
        let mut pose = Pose::new(Position::new(40.0, 40.0), 0.0);
        let out = grid_kinematics().apply(&field, &mut pose, Action::Forward);
        assert!(!out.is_blocked());
        assert_eq!(pose.position, Position::new(44.0, 40.0));
    }

    #[test]
    fn turning_still_moves() {
        let field = open_field();
        let mut pose = Pose::new(Position::new(40.0, 40.0), 0.0);
        grid_kinematics().apply(&field, &mut pose, Action::TurnRight);
        assert!((pose.heading - 18f64.to_radians()).abs() < 1e-12);
        // 40 + 4cos18° = 43.80, 40 + 4sin18° = 41.24, truncated
        assert_eq!(pose.position, Position::new(43.0, 41.0));
    }

    #[test]
    fn continuous_commit_keeps_fraction() {
        let field = open_field();
        let mut pose = Pose::new(Position::new(40.0, 40.0), 18f64.to_radians());
        let k = Kinematics::new(2.5, 0.0, Commit::Continuous);
        k.advance(&field, &mut pose);
        assert!((pose.position.x - (40.0 + 2.5 * 18f64.to_radians().cos())).abs() < 1e-12);
    }

    #[test]
    fn blocked_move_leaves_pose() {
        let field = OccupancyField::build(200, 200, &[Obstacle::new(51, 20, 90, 60)], 10);
        let mut pose = Pose::new(Position::new(40.0, 40.0), 0.0);
        let out = grid_kinematics().apply(&field, &mut pose, Action::Forward);
        assert_eq!(
            out,
            MoveOutcome::Blocked {
                attempted: Position::new(44.0, 40.0)
            }
        );
        assert_eq!(pose.position, Position::new(40.0, 40.0));
    }

    #[test]
    fn leaving_the_canvas_is_blocked() {
        let field = open_field();
        let mut pose = Pose::new(Position::new(198.0, 100.0), 0.0);
        assert!(grid_kinematics().advance(&field, &mut pose).is_blocked());
    }
}
