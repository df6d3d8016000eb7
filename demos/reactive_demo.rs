//! Runs the reactive navigator and prints where it went.
//!
//! Usage:
//!   cargo run --example reactive_demo -- --frames 2000 --seed 7
//!
//! Ctrl-C is not wired up; use `--frames 0` to run until killed.

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use warehouse_nav::env::RenderMode;
use warehouse_nav::reactive::{HeadingChoice, ReactiveConfig, ReactiveNavigator, StopSignal};

/// Reactive obstacle avoidance on a random warehouse floor
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Frames to run (0 = unlimited)
    #[arg(short, long, default_value_t = 1500)]
    frames: u64,

    /// Floor and heading seed
    #[arg(short, long, default_value_t = 42)]
    seed: u64,

    /// Canvas units per character in the text map
    #[arg(long, default_value_t = 10)]
    cell: u32,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
    let args = Args::parse();

    let config = ReactiveConfig {
        seed: args.seed,
        render_mode: RenderMode::Snapshot,
        ..ReactiveConfig::default()
    };
    let mut navigator = ReactiveNavigator::new(config)?;

    let (mut swept, mut fallbacks, mut collisions) = (0u64, 0u64, 0u64);
    let max_frames = (args.frames > 0).then_some(args.frames);
    let frames = navigator.run(&StopSignal::new(), max_frames, |_, report| {
        match report.choice {
            HeadingChoice::Straight => {}
            HeadingChoice::Swept(_) => swept += 1,
            HeadingChoice::Fallback(_) => fallbacks += 1,
        }
        if report.collided {
            collisions += 1;
        }
    });
    info!(frames, swept, fallbacks, collisions, "run complete");

    if let Some(snapshot) = navigator.render() {
        println!("{}", snapshot.to_ascii(args.cell));
    }
    println!("final pose: {}", navigator.pose());
    Ok(())
}
