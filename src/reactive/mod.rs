//! Autonomous reactive navigation.
//!
//! Unlike [`crate::env::NavigationEnv`] there is no goal, reward or episode
//! end; the navigator wanders the floor avoiding obstacles until stopped.

pub mod config;
pub mod navigator;
pub mod stop;

pub use config::ReactiveConfig;
pub use navigator::{FrameReport, HeadingChoice, ReactiveNavigator};
pub use stop::StopSignal;
