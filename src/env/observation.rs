//! Observation encoding.
//!
//! Layout: `[goal_dx, goal_dy, cos(h), sin(h), ray_0, ..., ray_{N-1}]`.
//! Goal offsets are divided by the canvas size, rays by their range.

use crate::geometry::{Pose, Position};

/// Builds flat observation vectors.
pub struct ObservationBuilder;

impl ObservationBuilder {
    /// Number of features before the rays.
    pub const POSE_FEATURE_DIM: usize = 4;

    /// Observation length for `num_rays` rays.
    pub fn dim(num_rays: usize) -> usize {
        Self::POSE_FEATURE_DIM + num_rays
    }

    /// Encodes the pose relative to the goal followed by normalized rays.
    pub fn build(pose: &Pose, goal: &Position, width: u32, height: u32, rays: &[f64]) -> Vec<f64> {
        let (c, s) = pose.direction();
        let mut obs = Vec::with_capacity(Self::dim(rays.len()));
        obs.push((goal.x - pose.position.x) / width as f64);
        obs.push((goal.y - pose.position.y) / height as f64);
        obs.push(c);
        obs.push(s);
        obs.extend_from_slice(rays);
        obs
    }

    /// Lower and upper bounds of every feature.
    pub fn bounds(num_rays: usize) -> (Vec<f64>, Vec<f64>) {
        let mut low = vec![-1.0; Self::POSE_FEATURE_DIM];
        let mut high = vec![1.0; Self::POSE_FEATURE_DIM];
        low.extend(std::iter::repeat(0.0).take(num_rays));
        high.extend(std::iter::repeat(1.0).take(num_rays));
        (low, high)
    }
}
