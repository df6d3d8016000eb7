use thiserror::Error;

/// Errors raised while validating world parameters.
///
/// All of these are detected before any obstacle is placed, so a bad
/// configuration never reaches the generator.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum WorldError {
    #[error("Canvas {width}x{height} leaves no room for obstacle corners (needs more than {required_x}x{required_y})")]
    DegenerateCanvas {
        width: u32,
        height: u32,
        required_x: u32,
        required_y: u32,
    },

    #[error("Invalid range for {name}: [{min}, {max}]")]
    InvalidRange { name: &'static str, min: u32, max: u32 },

    #[error("Robot radius must be positive and smaller than the canvas, got {0}")]
    InvalidRobotRadius(u32),

    #[error("{name} {x:.1},{y:.1} lies outside the {width}x{height} canvas")]
    PointOutOfBounds {
        name: &'static str,
        x: f64,
        y: f64,
        width: u32,
        height: u32,
    },
}
