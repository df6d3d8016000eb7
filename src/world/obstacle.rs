//! Procedural obstacle layouts.
//!
//! Obstacles are axis-aligned rectangles whose top-left corner and size are
//! drawn from a caller-supplied random source. Rectangles may overlap.

use rand::Rng;

use super::error::WorldError;

/// Axis-aligned rectangle in cell coordinates, corners inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Obstacle {
    pub x1: u32,
    pub y1: u32,
    pub x2: u32,
    pub y2: u32,
}

impl Obstacle {
    /// Creates a rectangle from two corners, in any order.
    pub fn new(x1: u32, y1: u32, x2: u32, y2: u32) -> Self {
        Self {
            x1: x1.min(x2),
            y1: y1.min(y2),
            x2: x1.max(x2),
            y2: y1.max(y2),
        }
    }

    /// Whether the cell `(x, y)` lies inside or on the rectangle.
    pub fn contains_cell(&self, x: i64, y: i64) -> bool {
        x >= self.x1 as i64 && x <= self.x2 as i64 && y >= self.y1 as i64 && y <= self.y2 as i64
    }

    pub fn width(&self) -> u32 {
        self.x2 - self.x1
    }

    pub fn height(&self) -> u32 {
        self.y2 - self.y1
    }
}

/// Parameters for random obstacle placement.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ObstacleConfig {
    /// Number of rectangles per layout.
    pub count: usize,
    /// Smallest corner coordinate on either axis.
    pub corner_min: u32,
    /// Corner x is drawn from `[corner_min, W - margin_x]`.
    pub margin_x: u32,
    /// Corner y is drawn from `[corner_min, H - margin_y]`.
    pub margin_y: u32,
    /// Inclusive width range.
    pub width: (u32, u32),
    /// Inclusive height range.
    pub height: (u32, u32),
}

impl ObstacleConfig {
    /// Layout used by the learning environment: 10 larger boxes.
    pub fn learning() -> Self {
        Self {
            count: 10,
            corner_min: 30,
            margin_x: 180,
            margin_y: 140,
            width: (40, 160),
            height: (40, 140),
        }
    }

    /// Layout used by the reactive navigator: 12 boxes up to 120 units.
    pub fn reactive() -> Self {
        Self {
            count: 12,
            corner_min: 30,
            margin_x: 160,
            margin_y: 120,
            width: (40, 120),
            height: (40, 120),
        }
    }

    /// Checks that corners and sizes can be drawn on a `width × height` canvas.
    pub fn validate(&self, width: u32, height: u32) -> Result<(), WorldError> {
        let required_x = self.margin_x + self.corner_min;
        let required_y = self.margin_y + self.corner_min;
        if self.count > 0 && (width < required_x || height < required_y) {
            return Err(WorldError::DegenerateCanvas {
                width,
                height,
                required_x,
                required_y,
            });
        }
        for (name, (min, max)) in [("obstacle width", self.width), ("obstacle height", self.height)] {
            if min == 0 || min > max {
                return Err(WorldError::InvalidRange { name, min, max });
            }
        }
        Ok(())
    }

    /// Draws `count` rectangles from `rng`.
    ///
    /// The draw order per rectangle is corner x, corner y, width, height, so
    /// a given seed always yields the same sequence.
    pub fn generate<R: Rng + ?Sized>(
        &self,
        width: u32,
        height: u32,
        rng: &mut R,
    ) -> Result<Vec<Obstacle>, WorldError> {
        self.validate(width, height)?;
        if self.count == 0 {
            return Ok(Vec::new());
        }
        let max_x = width - self.margin_x;
        let max_y = height - self.margin_y;

        let obstacles = (0..self.count)
            .map(|_| {
                let x1 = rng.gen_range(self.corner_min..=max_x);
                let y1 = rng.gen_range(self.corner_min..=max_y);
                let x2 = x1 + rng.gen_range(self.width.0..=self.width.1);
                let y2 = y1 + rng.gen_range(self.height.0..=self.height.1);
                Obstacle { x1, y1, x2, y2 }
            })
            .collect();
        Ok(obstacles)
    }
}

impl Default for ObstacleConfig {
    fn default() -> Self {
        Self::learning()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn same_seed_same_layout() {
        let cfg = ObstacleConfig::learning();
        let a = cfg.generate(700, 500, &mut StdRng::seed_from_u64(7)).unwrap();
        let b = cfg.generate(700, 500, &mut StdRng::seed_from_u64(7)).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.len(), 10);
    }

    #[test]
    fn different_seeds_differ() {
        let cfg = ObstacleConfig::learning();
        let a = cfg.generate(700, 500, &mut StdRng::seed_from_u64(1)).unwrap();
        let b = cfg.generate(700, 500, &mut StdRng::seed_from_u64(2)).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn rectangles_respect_ranges() {
        let cfg = ObstacleConfig::reactive();
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..20 {
            for o in cfg.generate(700, 500, &mut rng).unwrap() {
                assert!(o.x1 >= 30 && o.x1 <= 540);
                assert!(o.y1 >= 30 && o.y1 <= 380);
                assert!((40..=120).contains(&o.width()));
                assert!((40..=120).contains(&o.height()));
            }
        }
    }

    #[test]
    fn degenerate_canvas_fails_fast() {
        let cfg = ObstacleConfig::learning();
        let err = cfg.generate(150, 500, &mut StdRng::seed_from_u64(0));
        assert!(matches!(err, Err(WorldError::DegenerateCanvas { .. })));
    }

    #[test]
    fn empty_layout_fits_any_canvas() {
        let cfg = ObstacleConfig {
            count: 0,
            ..ObstacleConfig::learning()
        };
        let obstacles = cfg.generate(50, 50, &mut StdRng::seed_from_u64(0)).unwrap();
        assert!(obstacles.is_empty());
    }

    #[test]
    fn inverted_size_range_rejected() {
        let cfg = ObstacleConfig {
            width: (90, 40),
            ..ObstacleConfig::learning()
        };
        assert_eq!(
            cfg.validate(700, 500),
            Err(WorldError::InvalidRange {
                name: "obstacle width",
                min: 90,
                max: 40
            })
        );
    }

    #[test]
    fn obstacle_new_orders_corners() {
        let o = Obstacle::new(50, 60, 10, 20);
        assert_eq!(o, Obstacle { x1: 10, y1: 20, x2: 50, y2: 60 });
        assert!(o.contains_cell(10, 60));
        assert!(!o.contains_cell(51, 30));
    }
}
