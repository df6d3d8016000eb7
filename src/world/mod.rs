//! The static warehouse floor: obstacle layout and collision grid.

pub mod config;
pub mod error;
pub mod obstacle;
pub mod occupancy;

pub use config::WorldConfig;
pub use error::WorldError;
pub use obstacle::{Obstacle, ObstacleConfig};
pub use occupancy::{BinaryGrid, OccupancyField};

use rand::Rng;
use tracing::debug;

/// An obstacle layout together with the collision grid built from it.
#[derive(Debug, Clone, PartialEq)]
pub struct World {
    obstacles: Vec<Obstacle>,
    field: OccupancyField,
}

impl World {
    /// Draws a fresh layout from `rng` and builds its occupancy field.
    pub fn generate<R: Rng + ?Sized>(config: &WorldConfig, rng: &mut R) -> Result<Self, WorldError> {
        config.validate()?;
        let obstacles = config.obstacles.generate(config.width, config.height, rng)?;
        Ok(Self::build(config, obstacles))
    }

    /// Builds a world from an explicit layout.
    pub fn from_obstacles(config: &WorldConfig, obstacles: Vec<Obstacle>) -> Result<Self, WorldError> {
        config.validate_robot()?;
        Ok(Self::build(config, obstacles))
    }

    fn build(config: &WorldConfig, obstacles: Vec<Obstacle>) -> Self {
        let field = OccupancyField::build(
            config.width,
            config.height,
            &obstacles,
            config.robot_radius,
        );
        debug!(
            obstacles = obstacles.len(),
            free_ratio = field.free_ratio(),
            "built occupancy field"
        );
        Self { obstacles, field }
    }

    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    pub fn field(&self) -> &OccupancyField {
        &self.field
    }
}
