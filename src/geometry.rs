//! Planar geometry shared by every stage of the simulation.
//!
//! Coordinates follow the floor-plan convention: `x` grows to the right,
//! `y` grows downward, and headings are measured in radians from the `+x`
//! axis toward `+y`.

use std::f64::consts::TAU;
use std::fmt;

/// A point on the canvas `[0, W) × [0, H)`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    /// Creates a new position.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another position.
    pub fn distance_to(&self, other: &Position) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Point reached by travelling `dist` along `angle` from `self`.
    pub fn advanced(&self, angle: f64, dist: f64) -> Self {
        Self {
            x: self.x + angle.cos() * dist,
            y: self.y + angle.sin() * dist,
        }
    }

    /// Grid cell containing this position.
    ///
    /// Coordinates are truncated toward zero, so `-0.5` maps to cell `0`.
    /// Callers decide what an out-of-range cell means.
    pub fn cell(&self) -> (i64, i64) {
        (self.x.trunc() as i64, self.y.trunc() as i64)
    }

    /// Position snapped onto the corner of its grid cell.
    pub fn snapped(&self) -> Self {
        let (cx, cy) = self.cell();
        Self::new(cx as f64, cy as f64)
    }

    /// Clamps both coordinates into the given inclusive ranges.
    pub fn clamped(self, min_x: f64, max_x: f64, min_y: f64, max_y: f64) -> Self {
        Self {
            x: self.x.clamp(min_x, max_x),
            y: self.y.clamp(min_y, max_y),
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.2}, {:.2})", self.x, self.y)
    }
}

/// Robot position plus heading.
///
/// The heading is not forced into `[0, 2π)`; every consumer goes through
/// `cos`/`sin` so any real value is valid.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pose {
    pub position: Position,
    pub heading: f64,
}

impl Pose {
    pub fn new(position: Position, heading: f64) -> Self {
        Self { position, heading }
    }

    /// Unit vector `(cos h, sin h)`.
    pub fn direction(&self) -> (f64, f64) {
        (self.heading.cos(), self.heading.sin())
    }

    /// Candidate position after moving `speed` units along the heading.
    pub fn ahead(&self, speed: f64) -> Position {
        self.position.advanced(self.heading, speed)
    }
}

impl fmt::Display for Pose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} @ {:.1}°", self.position, self.heading.to_degrees())
    }
}

/// Wraps an angle into `[0, 2π)`.
pub fn wrap_angle(angle: f64) -> f64 {
    let wrapped = angle.rem_euclid(TAU);
    // rem_euclid can round up to exactly TAU for tiny negative inputs
    if wrapped >= TAU {
        0.0
    } else {
        wrapped
    }
}

/// `n` evenly spaced values from `start` to `end`, both ends included.
///
/// A single sample sits at the midpoint.
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![(start + end) / 2.0],
        _ => {
            let step = (end - start) / (n - 1) as f64;
            (0..n)
                .map(|i| if i == n - 1 { end } else { start + step * i as f64 })
                .collect()
        }
    }
}
