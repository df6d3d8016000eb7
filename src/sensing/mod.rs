//! Ray-based perception.

pub mod raycaster;

pub use raycaster::{RayHit, Raycaster};
