//! warehouse-nav - wheeled-robot navigation on a procedurally generated
//! warehouse floor.
//!
//! The crate builds a floor of random rectangular obstacles, inflates their
//! outlines by the robot radius, and senses it with ray fans. Two front-ends
//! sit on top:
//!
//! - [`env::NavigationEnv`]: an episodic reset/step environment with a
//!   discrete action set, observation vector, shaped reward and
//!   termination flags, for external learning agents.
//! - [`reactive::ReactiveNavigator`]: a rule-based avoider that sweeps
//!   headings and runs until a [`reactive::StopSignal`] fires.
//!
//! Every instance owns its floor and seeded random source, so runs are
//! reproducible and instances can be stepped in parallel.

pub mod env;
pub mod geometry;
pub mod motion;
pub mod policy;
pub mod reactive;
pub mod sensing;
pub mod world;

pub use env::{NavConfig, NavigationEnv, SimError, Simulation, StepResult};
pub use geometry::{Pose, Position};
pub use motion::Action;
pub use reactive::{ReactiveConfig, ReactiveNavigator, StopSignal};
pub use world::{Obstacle, World, WorldConfig};
