//! Occupancy field: obstacle outlines and their inflation by the robot radius.
//!
//! Obstacles act as walls defined by their outline, not as solid blocks. The
//! outline of the union of all rectangles is rasterized into an edge mask,
//! which is then dilated with a disk of the robot's radius. After that a
//! collision check for the whole robot body is a single cell lookup.

use crate::geometry::Position;

use super::obstacle::Obstacle;

/// Dense row-major boolean grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinaryGrid {
    width: u32,
    height: u32,
    cells: Vec<bool>,
}

impl BinaryGrid {
    /// Creates a grid with every cell cleared.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            cells: vec![false; width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Value at `(x, y)`, or `None` outside the grid.
    pub fn get(&self, x: i64, y: i64) -> Option<bool> {
        self.index(x, y).map(|i| self.cells[i])
    }

    /// Number of set cells.
    pub fn count_set(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    /// Coordinates of every set cell in row-major order.
    pub fn iter_set(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        let w = self.width as usize;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, &c)| c)
            .map(move |(i, _)| ((i % w) as u32, (i / w) as u32))
    }

    fn set(&mut self, x: i64, y: i64) {
        if let Some(i) = self.index(x, y) {
            self.cells[i] = true;
        }
    }

    fn index(&self, x: i64, y: i64) -> Option<usize> {
        if x >= 0 && y >= 0 && x < self.width as i64 && y < self.height as i64 {
            Some(y as usize * self.width as usize + x as usize)
        } else {
            None
        }
    }
}

/// Collision grid derived from an obstacle layout.
///
/// Built once per layout and only read afterwards. A cell is blocked when a
/// disk of `robot_radius` centred on it touches an obstacle outline, and
/// everything outside the canvas is blocked.
#[derive(Debug, Clone, PartialEq)]
pub struct OccupancyField {
    edge_mask: BinaryGrid,
    inflated_mask: BinaryGrid,
    robot_radius: u32,
}

impl OccupancyField {
    /// Rasterizes the outline of `obstacles` and inflates it by `robot_radius`.
    pub fn build(width: u32, height: u32, obstacles: &[Obstacle], robot_radius: u32) -> Self {
        let edge_mask = Self::outline(width, height, obstacles);
        let inflated_mask = Self::dilate(&edge_mask, robot_radius);
        Self {
            edge_mask,
            inflated_mask,
            robot_radius,
        }
    }

    pub fn width(&self) -> u32 {
        self.edge_mask.width()
    }

    pub fn height(&self) -> u32 {
        self.edge_mask.height()
    }

    pub fn robot_radius(&self) -> u32 {
        self.robot_radius
    }

    pub fn edge_mask(&self) -> &BinaryGrid {
        &self.edge_mask
    }

    pub fn inflated_mask(&self) -> &BinaryGrid {
        &self.inflated_mask
    }

    pub fn in_bounds(&self, x: i64, y: i64) -> bool {
        x >= 0 && y >= 0 && x < self.width() as i64 && y < self.height() as i64
    }

    /// Whether the robot centred on cell `(x, y)` would collide.
    pub fn collides_cell(&self, x: i64, y: i64) -> bool {
        self.inflated_mask.get(x, y).unwrap_or(true)
    }

    /// Whether the robot centred at `p` would collide.
    pub fn collides(&self, p: &Position) -> bool {
        let (x, y) = p.cell();
        self.collides_cell(x, y)
    }

    /// Fraction of canvas cells where the robot fits.
    pub fn free_ratio(&self) -> f64 {
        let total = self.width() as usize * self.height() as usize;
        if total == 0 {
            return 0.0;
        }
        1.0 - self.inflated_mask.count_set() as f64 / total as f64
    }

    /// Boundary cells of the union of the filled rectangles.
    fn outline(width: u32, height: u32, obstacles: &[Obstacle]) -> BinaryGrid {
        let mut solid = BinaryGrid::new(width, height);
        for o in obstacles {
            for y in o.y1 as i64..=o.y2 as i64 {
                for x in o.x1 as i64..=o.x2 as i64 {
                    solid.set(x, y);
                }
            }
        }

        let mut edges = BinaryGrid::new(width, height);
        for (x, y) in solid.iter_set() {
            let (x, y) = (x as i64, y as i64);
            let exposed = [(1, 0), (-1, 0), (0, 1), (0, -1)]
                .iter()
                .any(|(dx, dy)| !solid.get(x + dx, y + dy).unwrap_or(false));
            if exposed {
                edges.set(x, y);
            }
        }
        edges
    }

    /// Stamps the disk `dx² + dy² ≤ r²` around every set cell.
    fn dilate(mask: &BinaryGrid, radius: u32) -> BinaryGrid {
        let r = radius as i64;
        let disk: Vec<(i64, i64)> = (-r..=r)
            .flat_map(|dy| (-r..=r).map(move |dx| (dx, dy)))
            .filter(|(dx, dy)| dx * dx + dy * dy <= r * r)
            .collect();

        let mut out = BinaryGrid::new(mask.width(), mask.height());
        for (x, y) in mask.iter_set() {
            for (dx, dy) in &disk {
                out.set(x as i64 + dx, y as i64 + dy);
            }
        }
        out
    }
}
