//! Range sensing by marching rays through the occupancy field.

use crate::geometry::{linspace, Pose, Position};
use crate::world::OccupancyField;

/// Outcome of a single ray.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RayHit {
    /// Absolute ray angle in radians.
    pub angle: f64,
    /// Distance to the first blocked sample, or the maximum range.
    pub distance: f64,
    /// Point where the ray stopped.
    pub endpoint: Position,
    /// Whether a blocked sample was found before the maximum range.
    pub blocked: bool,
}

/// Marches rays outward from the robot's rim.
///
/// Sampling starts at the robot radius rather than at the centre so the
/// robot's own footprint never reports a hit. Samples are taken every
/// `step` units up to, but excluding, `max_range`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Raycaster {
    pub robot_radius: u32,
    pub max_range: u32,
    pub step: u32,
}

impl Raycaster {
    pub fn new(robot_radius: u32, max_range: u32, step: u32) -> Self {
        Self {
            robot_radius,
            max_range,
            step: step.max(1),
        }
    }

    /// Casts one ray from `origin` along `angle`.
    pub fn cast(&self, field: &OccupancyField, origin: &Position, angle: f64) -> RayHit {
        let (c, s) = (angle.cos(), angle.sin());
        let first_hit = (self.robot_radius..self.max_range)
            .step_by(self.step as usize)
            .find(|&d| {
                let d = d as f64;
                let x = (origin.x + c * d).trunc() as i64;
                let y = (origin.y + s * d).trunc() as i64;
                field.collides_cell(x, y)
            });

        let distance = first_hit.unwrap_or(self.max_range) as f64;
        RayHit {
            angle,
            distance,
            endpoint: origin.advanced(angle, distance),
            blocked: first_hit.is_some(),
        }
    }

    /// Whether the whole range along `angle` is free.
    pub fn is_clear(&self, field: &OccupancyField, origin: &Position, angle: f64) -> bool {
        !self.cast(field, origin, angle).blocked
    }

    /// Casts `count` rays spread evenly across `fov`, centred on the heading.
    ///
    /// The outermost rays sit exactly on `heading ± fov/2`.
    pub fn fan(&self, field: &OccupancyField, pose: &Pose, fov: f64, count: usize) -> Vec<RayHit> {
        let half = fov / 2.0;
        linspace(pose.heading - half, pose.heading + half, count)
            .into_iter()
            .map(|angle| self.cast(field, &pose.position, angle))
            .collect()
    }

    /// Distances divided by the maximum range, each in `[0, 1]`.
    pub fn normalize(&self, hits: &[RayHit]) -> Vec<f64> {
        let range = self.max_range.max(1) as f64;
        hits.iter().map(|h| h.distance / range).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::Obstacle;
    use std::f64::consts::PI;

    fn wall_field() -> OccupancyField {
        // vertical wall outline starting at x = 150
        OccupancyField::build(400, 300, &[Obstacle::new(150, 50, 200, 250)], 10)
    }

    #[test]
    fn ray_stops_at_inflated_wall() {
        let field = wall_field();
        let rc = Raycaster::new(10, 80, 1);
        let hit = rc.cast(&field, &Position::new(100.0, 150.0), 0.0);
        // inflated boundary begins at 140
        assert!(hit.blocked);
        assert_eq!(hit.distance, 40.0);
        assert!((hit.endpoint.x - 140.0).abs() < 1e-9);
    }

    #[test]
    fn free_ray_reports_max_range() {
        let field = wall_field();
        let rc = Raycaster::new(10, 80, 1);
        let hit = rc.cast(&field, &Position::new(100.0, 150.0), PI);
        assert!(!hit.blocked);
        assert_eq!(hit.distance, 80.0);
        assert!(rc.is_clear(&field, &Position::new(100.0, 150.0), PI));
    }

    #[test]
    fn canvas_edge_blocks_rays() {
        let field = OccupancyField::build(100, 100, &[], 10);
        let rc = Raycaster::new(10, 80, 1);
        let hit = rc.cast(&field, &Position::new(30.0, 50.0), PI);
        // x = 30 - 31 = -1 is the first sample outside the canvas
        assert_eq!(hit.distance, 31.0);
    }

    #[test]
    fn sampling_starts_at_robot_rim() {
        // robot centre sits on an inflated cell; only the rim onward counts
        let field = wall_field();
        let rc = Raycaster::new(10, 80, 1);
        assert!(field.collides_cell(145, 150));
        let hit = rc.cast(&field, &Position::new(145.0, 150.0), PI);
        assert!(!hit.blocked);
        assert_eq!(hit.distance, 80.0);
    }

    #[test]
    fn coarse_step_samples_every_other_unit() {
        let field = wall_field();
        let rc = Raycaster::new(10, 30, 2);
        // samples at 10, 12, ..., 28; the last one lands on x = 140
        let hit = rc.cast(&field, &Position::new(112.0, 150.0), 0.0);
        assert!(hit.blocked);
        assert_eq!(hit.distance, 28.0);
        // one unit further back the inflated wall is out of sampling reach
        assert!(rc.is_clear(&field, &Position::new(111.0, 150.0), 0.0));
    }

    #[test]
    fn fan_spans_field_of_view() {
        let field = OccupancyField::build(400, 300, &[], 10);
        let rc = Raycaster::new(10, 80, 1);
        let pose = Pose::new(Position::new(200.0, 150.0), 0.3);
        let hits = rc.fan(&field, &pose, PI, 8);
        assert_eq!(hits.len(), 8);
        assert!((hits[0].angle - (0.3 - PI / 2.0)).abs() < 1e-12);
        assert!((hits[7].angle - (0.3 + PI / 2.0)).abs() < 1e-12);
        let norm = rc.normalize(&hits);
        assert!(norm.iter().all(|&v| v == 1.0));
    }

    #[test]
    fn distances_stay_within_rim_and_range() {
        let field = wall_field();
        let rc = Raycaster::new(10, 80, 1);
        for i in 0..36 {
            let pose = Pose::new(Position::new(120.0, 140.0), i as f64 * 10f64.to_radians());
            for hit in rc.fan(&field, &pose, PI, 8) {
                assert!(hit.distance >= 10.0 && hit.distance <= 80.0);
            }
        }
    }
}
