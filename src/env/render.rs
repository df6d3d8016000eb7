//! Scene snapshots for external renderers.
//!
//! The simulation never owns a drawing surface. When rendering is enabled it
//! hands out a [`RenderSnapshot`] holding everything needed to draw a frame.

use std::sync::Arc;

use crate::geometry::{Pose, Position};
use crate::sensing::RayHit;
use crate::world::{BinaryGrid, Obstacle, World};

/// Whether `render` produces snapshots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RenderMode {
    #[default]
    None,
    Snapshot,
}

/// Drawable state of one frame.
#[derive(Debug, Clone)]
pub struct RenderSnapshot {
    /// Shared with the simulation; never mutated.
    pub world: Arc<World>,
    pub pose: Pose,
    pub robot_radius: u32,
    pub goal: Option<Position>,
    pub rays: Vec<RayHit>,
    pub trail: Vec<Position>,
}

impl RenderSnapshot {
    pub fn obstacles(&self) -> &[Obstacle] {
        self.world.obstacles()
    }

    pub fn inflated_mask(&self) -> &BinaryGrid {
        self.world.field().inflated_mask()
    }

    /// Coarse text rendering, one character per `cell × cell` block.
    ///
    /// `#` obstacle outline, `:` inflated margin, `*` trail, `G` goal,
    /// `R` robot.
    pub fn to_ascii(&self, cell: u32) -> String {
        let cell = cell.max(1);
        let field = self.world.field();
        let cols = field.width().div_ceil(cell);
        let rows = field.height().div_ceil(cell);
        let mut canvas = vec![vec![' '; cols as usize]; rows as usize];

        for (row, line) in canvas.iter_mut().enumerate() {
            for (col, ch) in line.iter_mut().enumerate() {
                let x0 = col as i64 * cell as i64;
                let y0 = row as i64 * cell as i64;
                let block = (0..cell as i64)
                    .flat_map(|dy| (0..cell as i64).map(move |dx| (x0 + dx, y0 + dy)));
                let mut inflated = false;
                for (x, y) in block {
                    if field.edge_mask().get(x, y) == Some(true) {
                        *ch = '#';
                        break;
                    }
                    inflated |= field.inflated_mask().get(x, y) == Some(true);
                }
                if *ch == ' ' && inflated {
                    *ch = ':';
                }
            }
        }

        let mut mark = |p: &Position, c: char| {
            let (x, y) = p.cell();
            if x >= 0 && y >= 0 {
                if let Some(slot) = canvas
                    .get_mut((y / cell as i64) as usize)
                    .and_then(|line| line.get_mut((x / cell as i64) as usize))
                {
                    *slot = c;
                }
            }
        };
        for p in &self.trail {
            mark(p, '*');
        }
        if let Some(goal) = &self.goal {
            mark(goal, 'G');
        }
        mark(&self.pose.position, 'R');

        canvas
            .into_iter()
            .map(|line| line.into_iter().collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::WorldConfig;

    #[test]
    fn ascii_marks_robot_goal_and_walls() {
        let cfg = WorldConfig {
            width: 100,
            height: 50,
            robot_radius: 5,
            ..WorldConfig::default()
        };
        let world = World::from_obstacles(&cfg, vec![Obstacle::new(40, 10, 60, 30)]).unwrap();
        let snap = RenderSnapshot {
            world: Arc::new(world),
            pose: Pose::new(Position::new(5.0, 5.0), 0.0),
            robot_radius: 5,
            goal: Some(Position::new(95.0, 45.0)),
            rays: Vec::new(),
            trail: vec![Position::new(15.0, 5.0)],
        };
        let text = snap.to_ascii(10);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 5);
        assert!(lines.iter().all(|l| l.chars().count() == 10));
        assert!(lines[0].starts_with("R*"));
        assert!(lines[4].ends_with('G'));
        assert!(text.contains('#'));
        assert!(text.contains(':'));
    }
}
