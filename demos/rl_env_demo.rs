//! Runs the navigation environment and evaluates a baseline policy.
//!
//! Usage:
//!   cargo run --example rl_env_demo -- --policy goal --episodes 50
//!   RUST_LOG=warehouse_nav=debug cargo run --example rl_env_demo

use anyhow::Result;
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use warehouse_nav::env::{EvaluationMetrics, NavConfig, NavigationEnv, RenderMode};
use warehouse_nav::policy::{GoalSeekingPolicy, Policy, RandomPolicy};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum PolicyKind {
    Random,
    Goal,
}

/// Evaluate a baseline policy on random warehouse floors
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Policy to evaluate
    #[arg(short, long, value_enum, default_value_t = PolicyKind::Goal)]
    policy: PolicyKind,

    /// Number of episodes
    #[arg(short, long, default_value_t = 25)]
    episodes: usize,

    /// Seed of the first floor; episode i uses seed + i
    #[arg(short, long, default_value_t = 42)]
    seed: u64,

    /// Print the final frame of one extra episode
    #[arg(long)]
    show: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();
    let args = Args::parse();

    let config = NavConfig {
        render_mode: if args.show {
            RenderMode::Snapshot
        } else {
            RenderMode::None
        },
        ..NavConfig::default()
    };
    let mut env = NavigationEnv::new(config.clone())?;

    let mut policy: Box<dyn Policy> = match args.policy {
        PolicyKind::Random => Box::new(RandomPolicy::new(args.seed)),
        PolicyKind::Goal => Box::new(GoalSeekingPolicy::new(&config)),
    };

    let metrics = EvaluationMetrics::evaluate(&mut env, policy.as_mut(), args.episodes, args.seed)?;
    println!("Policy: {}", policy.name());
    println!("{metrics}");

    if args.show {
        let (mut obs, _) = env.reset(Some(args.seed))?;
        loop {
            let result = env.step(policy.select_action(&obs))?;
            let done = result.is_done();
            obs = result.observation;
            if done {
                break;
            }
        }
        if let Some(snapshot) = env.render() {
            println!("{}", snapshot.to_ascii(10));
        }
        println!(
            "outcome: {} after {} steps, return {:.2}",
            env.status().map(|s| s.to_string()).unwrap_or_default(),
            env.steps(),
            env.cumulative_reward()
        );
        env.close();
    }
    Ok(())
}
