//! Goal-reaching navigation environment.
//!
//! Implements the per-step transition: turn → forward attempt → collision
//! check → progress reward → step cost → goal check → step budget.

use std::sync::Arc;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info, trace, warn};

use crate::geometry::{Pose, Position};
use crate::motion::{Action, Kinematics};
use crate::sensing::{RayHit, Raycaster};
use crate::world::{Obstacle, World};

use super::config::NavConfig;
use super::error::SimError;
use super::observation::ObservationBuilder;
use super::render::{RenderMode, RenderSnapshot};
use super::reward::RewardComputer;
use super::simulation::Simulation;
use super::types::{EpisodeStatus, Info, StepResult, TerminalCause};

/// State owned by one episode; replaced wholesale on every reset.
#[derive(Debug, Clone)]
struct Episode {
    world: Arc<World>,
    pose: Pose,
    goal: Position,
    steps: u32,
    prev_goal_distance: f64,
    status: EpisodeStatus,
    cumulative_reward: f64,
    seed: Option<u64>,
    rays: Vec<RayHit>,
}

/// Single-robot navigation environment with discrete actions.
///
/// Each instance owns its floor, pose, and random source, so any number of
/// instances can run side by side without coordination.
///
/// # Lifecycle
///
/// 1. Create with [`NavigationEnv::new`].
/// 2. Call [`NavigationEnv::reset`] to draw a floor and place the robot.
/// 3. Call [`NavigationEnv::step`] until `terminated` or `truncated`.
#[derive(Debug)]
pub struct NavigationEnv {
    config: NavConfig,
    raycaster: Raycaster,
    kinematics: Kinematics,
    /// Seed used by the next `reset(None)`.
    next_seed: u64,
    render_mode: RenderMode,
    episode: Option<Episode>,
}

impl NavigationEnv {
    /// Creates an environment after validating `config`.
    pub fn new(config: NavConfig) -> Result<Self, SimError> {
        config.validate()?;
        Ok(Self {
            raycaster: config.raycaster(),
            kinematics: config.kinematics(),
            next_seed: config.default_seed,
            render_mode: config.render_mode,
            config,
            episode: None,
        })
    }

    /// Starts an episode on a freshly generated floor.
    ///
    /// With `None` the environment continues its own seed sequence, starting
    /// at `default_seed`, so consecutive resets see different floors.
    pub fn reset(&mut self, seed: Option<u64>) -> Result<(Vec<f64>, Info), SimError> {
        let seed = seed.unwrap_or(self.next_seed);
        self.next_seed = seed.wrapping_add(1);

        let mut rng = StdRng::seed_from_u64(seed);
        let world = World::generate(&self.config.world, &mut rng)?;
        info!(
            seed,
            obstacles = world.obstacles().len(),
            free_ratio = world.field().free_ratio(),
            "reset navigation environment"
        );
        Ok(self.begin(world, Some(seed)))
    }

    /// Starts an episode on a caller-supplied layout.
    pub fn reset_with_obstacles(
        &mut self,
        obstacles: Vec<Obstacle>,
    ) -> Result<(Vec<f64>, Info), SimError> {
        self.config.validate_episode()?;
        let world = World::from_obstacles(&self.config.world, obstacles)?;
        info!(
            obstacles = world.obstacles().len(),
            "reset navigation environment with fixed layout"
        );
        Ok(self.begin(world, None))
    }

    fn begin(&mut self, world: World, seed: Option<u64>) -> (Vec<f64>, Info) {
        let goal = self.config.goal();
        let pose = Pose::new(self.config.start, self.config.start_heading);
        if world.field().collides(&pose.position) {
            warn!(start = %pose.position, "start position overlaps an inflated obstacle");
        }

        let mut episode = Episode {
            world: Arc::new(world),
            pose,
            goal,
            steps: 0,
            prev_goal_distance: pose.position.distance_to(&goal),
            status: EpisodeStatus::Active,
            cumulative_reward: 0.0,
            seed,
            rays: Vec::new(),
        };
        let observation = Self::observe(&self.config, &self.raycaster, &mut episode);
        self.episode = Some(episode);
        (observation, Info::new())
    }

    /// Executes one transition.
    ///
    /// Every action attempts a forward move after its rotation. A blocked
    /// move leaves the position unchanged and terminates the episode.
    pub fn step(&mut self, action: Action) -> Result<StepResult, SimError> {
        let episode = self.episode.as_mut().ok_or(SimError::NotReset)?;
        if !episode.status.is_active() {
            return Err(SimError::EpisodeOver);
        }
        episode.steps += 1;

        self.kinematics.turn(&mut episode.pose, action);
        let outcome = self
            .kinematics
            .advance(episode.world.field(), &mut episode.pose);
        let collided = outcome.is_blocked();

        let distance = episode.pose.position.distance_to(&episode.goal);
        let gain = if collided {
            0.0
        } else {
            let gain = episode.prev_goal_distance - distance;
            episode.prev_goal_distance = distance;
            gain
        };
        let reached_goal = distance < self.config.goal_radius;

        let reward =
            RewardComputer::compute(&self.config.reward, collided, gain, reached_goal).total();
        episode.cumulative_reward += reward;

        episode.status = if reached_goal {
            EpisodeStatus::Terminated(TerminalCause::GoalReached)
        } else if collided {
            EpisodeStatus::Terminated(TerminalCause::Collision)
        } else if episode.steps >= self.config.max_steps {
            EpisodeStatus::Truncated
        } else {
            EpisodeStatus::Active
        };

        if collided {
            debug!(step = episode.steps, pose = %episode.pose, "forward move blocked");
        }
        trace!(step = episode.steps, %action, reward, distance, "step");
        if !episode.status.is_active() {
            info!(
                outcome = %episode.status,
                steps = episode.steps,
                total_reward = episode.cumulative_reward,
                "episode finished"
            );
        }

        let observation = Self::observe(&self.config, &self.raycaster, episode);
        Ok(StepResult {
            observation,
            reward,
            terminated: matches!(episode.status, EpisodeStatus::Terminated(_)),
            truncated: matches!(episode.status, EpisodeStatus::Truncated),
            info: Info::new(),
        })
    }

    /// Steps with an integer action from an external agent.
    pub fn step_index(&mut self, action: usize) -> Result<StepResult, SimError> {
        let action = Action::try_from(action)?;
        self.step(action)
    }

    fn observe(config: &NavConfig, raycaster: &Raycaster, episode: &mut Episode) -> Vec<f64> {
        episode.rays = raycaster.fan(
            episode.world.field(),
            &episode.pose,
            config.ray_fov,
            config.num_rays,
        );
        let rays = raycaster.normalize(&episode.rays);
        ObservationBuilder::build(
            &episode.pose,
            &episode.goal,
            config.world.width,
            config.world.height,
            &rays,
        )
    }

    /// Snapshot of the current scene when rendering is enabled.
    pub fn render(&self) -> Option<RenderSnapshot> {
        if self.render_mode != RenderMode::Snapshot {
            return None;
        }
        let episode = self.episode.as_ref()?;
        Some(RenderSnapshot {
            world: Arc::clone(&episode.world),
            pose: episode.pose,
            robot_radius: self.config.world.robot_radius,
            goal: Some(episode.goal),
            rays: episode.rays.clone(),
            trail: Vec::new(),
        })
    }

    /// Disables rendering.
    pub fn close(&mut self) {
        if self.render_mode != RenderMode::None {
            debug!("closing navigation renderer");
            self.render_mode = RenderMode::None;
        }
    }

    pub fn config(&self) -> &NavConfig {
        &self.config
    }

    pub fn pose(&self) -> Option<Pose> {
        self.episode.as_ref().map(|e| e.pose)
    }

    pub fn goal(&self) -> Position {
        self.config.goal()
    }

    pub fn world(&self) -> Option<&World> {
        self.episode.as_ref().map(|e| e.world.as_ref())
    }

    /// Steps taken in the current episode.
    pub fn steps(&self) -> u32 {
        self.episode.as_ref().map_or(0, |e| e.steps)
    }

    pub fn status(&self) -> Option<EpisodeStatus> {
        self.episode.as_ref().map(|e| e.status)
    }

    pub fn cumulative_reward(&self) -> f64 {
        self.episode.as_ref().map_or(0.0, |e| e.cumulative_reward)
    }

    /// Seed of the current floor, `None` for fixed layouts.
    pub fn seed(&self) -> Option<u64> {
        self.episode.as_ref().and_then(|e| e.seed)
    }

    /// Straight-line distance from the robot to the goal.
    pub fn goal_distance(&self) -> Option<f64> {
        self.episode
            .as_ref()
            .map(|e| e.pose.position.distance_to(&e.goal))
    }
}

impl Simulation for NavigationEnv {
    type Action = Action;
    type Observation = Vec<f64>;

    fn reset(&mut self, seed: Option<u64>) -> Result<(Vec<f64>, Info), SimError> {
        NavigationEnv::reset(self, seed)
    }

    fn step(&mut self, action: Action) -> Result<StepResult, SimError> {
        NavigationEnv::step(self, action)
    }

    fn render(&self) -> Option<RenderSnapshot> {
        NavigationEnv::render(self)
    }

    fn close(&mut self) {
        NavigationEnv::close(self)
    }

    fn name(&self) -> &str {
        "warehouse_nav"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_env() -> NavigationEnv {
        NavigationEnv::new(NavConfig::default()).unwrap()
    }

    #[test]
    fn reset_returns_observation() {
        let mut env = make_env();
        let (obs, info) = env.reset(Some(0)).unwrap();
        assert_eq!(obs.len(), env.config().observation_dim());
        assert!(info.is_empty());
        assert_eq!(env.pose(), Some(Pose::new(Position::new(40.0, 40.0), 0.0)));
        assert_eq!(env.steps(), 0);
        assert_eq!(env.status(), Some(EpisodeStatus::Active));
    }

    #[test]
    fn step_before_reset_fails() {
        let mut env = make_env();
        assert_eq!(env.step(Action::Forward), Err(SimError::NotReset));
    }

    #[test]
    fn invalid_action_index_rejected() {
        let mut env = make_env();
        env.reset(Some(1)).unwrap();
        assert!(matches!(
            env.step_index(3),
            Err(SimError::InvalidAction(_))
        ));
        assert_eq!(env.steps(), 0);
    }

    #[test]
    fn observation_values_in_range() {
        let mut env = make_env();
        let (obs, _) = env.reset(Some(5)).unwrap();
        assert!(obs[..4].iter().all(|v| (-1.0..=1.0).contains(v)));
        assert!(obs[4..].iter().all(|v| (0.0..=1.0).contains(v)));
    }

    #[test]
    fn reset_without_seed_advances_sequence() {
        let mut env = make_env();
        env.reset(None).unwrap();
        assert_eq!(env.seed(), Some(42));
        let first = env.world().unwrap().obstacles().to_vec();
        env.reset(None).unwrap();
        assert_eq!(env.seed(), Some(43));
        assert_ne!(env.world().unwrap().obstacles(), first.as_slice());
    }

    #[test]
    fn stepping_after_termination_fails() {
        let mut env = make_env();
        env.reset_with_obstacles(vec![Obstacle::new(51, 20, 90, 60)])
            .unwrap();
        let result = env.step(Action::Forward).unwrap();
        assert!(result.terminated);
        assert_eq!(env.step(Action::Forward), Err(SimError::EpisodeOver));
    }

    #[test]
    fn empty_floor_on_small_canvas_resets() {
        let config = NavConfig {
            world: crate::world::WorldConfig {
                width: 150,
                height: 120,
                obstacles: crate::world::ObstacleConfig {
                    count: 0,
                    ..Default::default()
                },
                ..Default::default()
            },
            ..NavConfig::default()
        };
        let mut env = NavigationEnv::new(config).unwrap();
        let (obs, _) = env.reset(Some(0)).unwrap();
        assert_eq!(obs.len(), 12);
        assert!(env.world().unwrap().obstacles().is_empty());
        assert_eq!(env.goal(), Position::new(110.0, 80.0));
    }

    #[test]
    fn render_disabled_by_default() {
        let mut env = make_env();
        env.reset(Some(0)).unwrap();
        assert!(env.render().is_none());
    }

    #[test]
    fn render_snapshot_and_idempotent_close() {
        let config = NavConfig {
            render_mode: RenderMode::Snapshot,
            ..NavConfig::default()
        };
        let mut env = NavigationEnv::new(config).unwrap();
        assert!(env.render().is_none());
        env.reset(Some(3)).unwrap();
        let snap = env.render().unwrap();
        assert_eq!(snap.rays.len(), 8);
        assert_eq!(snap.obstacles().len(), 10);
        assert_eq!(snap.goal, Some(Position::new(660.0, 460.0)));
        env.close();
        env.close();
        assert!(env.render().is_none());
    }

    #[test]
    fn simulation_trait_delegates() {
        let mut env = make_env();
        let sim: &mut dyn Simulation<Action = Action, Observation = Vec<f64>> = &mut env;
        let (obs, _) = sim.reset(Some(2)).unwrap();
        assert_eq!(obs.len(), 12);
        let step = sim.step(Action::TurnLeft).unwrap();
        assert_eq!(step.observation.len(), 12);
        assert_eq!(sim.name(), "warehouse_nav");
    }
}
