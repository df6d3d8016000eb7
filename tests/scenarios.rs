//! End-to-end episodes on hand-built floors.

use warehouse_nav::env::{EpisodeStatus, InfoValue, NavConfig, NavigationEnv, TerminalCause};
use warehouse_nav::geometry::{Pose, Position};
use warehouse_nav::motion::Action;
use warehouse_nav::reactive::{HeadingChoice, ReactiveConfig, ReactiveNavigator};
use warehouse_nav::world::{Obstacle, ObstacleConfig, WorldConfig};
use warehouse_nav::Simulation;

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn forward_into_wall_ends_episode() {
    let mut env = NavigationEnv::new(NavConfig::default()).unwrap();
    // left wall at x = 51, inflated out to x = 41
    env.reset_with_obstacles(vec![Obstacle::new(51, 20, 90, 60)])
        .unwrap();

    let result = env.step(Action::Forward).unwrap();
    assert!(approx(result.reward, -10.01), "reward {}", result.reward);
    assert!(result.terminated);
    assert!(!result.truncated);
    assert_eq!(env.pose(), Some(Pose::new(Position::new(40.0, 40.0), 0.0)));
    assert_eq!(
        env.status(),
        Some(EpisodeStatus::Terminated(TerminalCause::Collision))
    );
}

#[test]
fn forward_into_goal_radius_ends_episode() {
    let config = NavConfig {
        start: Position::new(637.0, 460.0),
        ..NavConfig::default()
    };
    let mut env = NavigationEnv::new(config).unwrap();
    env.reset_with_obstacles(vec![]).unwrap();
    assert!(approx(env.goal_distance().unwrap(), 23.0));

    let result = env.step(Action::Forward).unwrap();
    // step cost, 4 units of progress, goal bonus
    assert!(approx(result.reward, -0.01 + 20.0 + 100.0), "reward {}", result.reward);
    assert!(result.terminated);
    assert!(!result.truncated);
    assert_eq!(
        env.status(),
        Some(EpisodeStatus::Terminated(TerminalCause::GoalReached))
    );
}

#[test]
fn step_budget_truncates_episode() {
    let config = NavConfig {
        world: WorldConfig {
            width: 4200,
            height: 200,
            obstacles: ObstacleConfig {
                count: 0,
                ..ObstacleConfig::learning()
            },
            ..WorldConfig::learning()
        },
        start: Position::new(4150.0, 100.0),
        start_heading: std::f64::consts::PI,
        goal: Some(Position::new(4160.0, 160.0)),
        ..NavConfig::default()
    };
    let mut env = NavigationEnv::new(config).unwrap();
    env.reset(Some(0)).unwrap();

    for step in 1..=1000u32 {
        let result = env.step(Action::Forward).unwrap();
        assert!(!result.terminated, "terminated at step {step}");
        assert_eq!(result.truncated, step == 1000, "step {step}");
    }
    assert_eq!(env.status(), Some(EpisodeStatus::Truncated));
    assert_eq!(env.steps(), 1000);
    assert_eq!(env.pose().unwrap().position, Position::new(150.0, 100.0));
}

#[test]
fn enclosed_reactive_robot_reports_fallback() {
    let config = ReactiveConfig {
        world: WorldConfig {
            width: 300,
            height: 300,
            ..WorldConfig::reactive()
        },
        start: Position::new(100.0, 100.0),
        ..ReactiveConfig::default()
    };
    let mut nav =
        ReactiveNavigator::with_obstacles(config, vec![Obstacle::new(80, 80, 120, 120)]).unwrap();

    let step = nav.step(()).unwrap();
    assert_eq!(step.info.get("fallback"), Some(&InfoValue::Bool(true)));
    assert_eq!(step.info.get("collided"), Some(&InfoValue::Bool(false)));
    assert!(!step.is_done());
    assert!(matches!(nav.tick().choice, HeadingChoice::Fallback(_)));
}

#[test]
fn collision_on_last_step_only_terminates() {
    let config = NavConfig {
        max_steps: 1,
        ..NavConfig::default()
    };
    let mut env = NavigationEnv::new(config).unwrap();
    env.reset_with_obstacles(vec![Obstacle::new(51, 20, 90, 60)])
        .unwrap();

    let result = env.step(Action::Forward).unwrap();
    assert!(result.terminated);
    assert!(!result.truncated);
    assert_eq!(
        env.status(),
        Some(EpisodeStatus::Terminated(TerminalCause::Collision))
    );
}

#[test]
fn goal_on_last_step_only_terminates() {
    let config = NavConfig {
        start: Position::new(637.0, 460.0),
        max_steps: 1,
        ..NavConfig::default()
    };
    let mut env = NavigationEnv::new(config).unwrap();
    env.reset_with_obstacles(vec![]).unwrap();

    let result = env.step(Action::Forward).unwrap();
    assert!(result.terminated);
    assert!(!result.truncated);
    assert_eq!(
        env.status(),
        Some(EpisodeStatus::Terminated(TerminalCause::GoalReached))
    );
}
