//! Floor-plan parameters shared by both navigation variants.

use crate::geometry::Position;

use super::error::WorldError;
use super::obstacle::ObstacleConfig;

/// Canvas size, robot footprint, and obstacle placement.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WorldConfig {
    /// Canvas width W.
    pub width: u32,
    /// Canvas height H.
    pub height: u32,
    /// Robot radius used for inflation and ray start.
    pub robot_radius: u32,
    /// Random obstacle placement.
    pub obstacles: ObstacleConfig,
}

impl WorldConfig {
    /// 700×500 floor with the learning-environment obstacle layout.
    pub fn learning() -> Self {
        Self {
            width: 700,
            height: 500,
            robot_radius: 10,
            obstacles: ObstacleConfig::learning(),
        }
    }

    /// 700×500 floor with the reactive-navigator obstacle layout.
    pub fn reactive() -> Self {
        Self {
            obstacles: ObstacleConfig::reactive(),
            ..Self::learning()
        }
    }

    /// Rejects canvases that cannot hold the robot or the obstacle corners.
    pub fn validate(&self) -> Result<(), WorldError> {
        self.validate_robot()?;
        self.obstacles.validate(self.width, self.height)
    }

    /// The robot needs a positive radius and must fit across the canvas.
    pub fn validate_robot(&self) -> Result<(), WorldError> {
        let r = self.robot_radius;
        if r == 0 || 2 * r >= self.width.min(self.height) {
            return Err(WorldError::InvalidRobotRadius(r));
        }
        Ok(())
    }

    /// Fails unless `p` lies on the canvas.
    pub fn check_point(&self, name: &'static str, p: &Position) -> Result<(), WorldError> {
        let inside = p.x >= 0.0
            && p.y >= 0.0
            && p.x < self.width as f64
            && p.y < self.height as f64;
        if inside {
            Ok(())
        } else {
            Err(WorldError::PointOutOfBounds {
                name,
                x: p.x,
                y: p.y,
                width: self.width,
                height: self.height,
            })
        }
    }
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self::learning()
    }
}
