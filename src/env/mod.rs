//! Episodic navigation front-ends.
//!
//! [`NavigationEnv`] exposes the reset/step contract consumed by learning
//! agents; [`VecEnv`] batches independent instances. Both the learning
//! environment and the reactive navigator implement [`Simulation`].

pub mod config;
pub mod environment;
pub mod error;
pub mod metrics;
pub mod observation;
pub mod render;
pub mod reward;
pub mod simulation;
pub mod types;
pub mod vec_env;

pub use config::NavConfig;
pub use environment::NavigationEnv;
pub use error::SimError;
pub use metrics::EvaluationMetrics;
pub use observation::ObservationBuilder;
pub use render::{RenderMode, RenderSnapshot};
pub use reward::{RewardBreakdown, RewardComputer, RewardConfig};
pub use simulation::Simulation;
pub use types::{EpisodeStatus, Info, InfoValue, StepResult, TerminalCause};
pub use vec_env::VecEnv;
