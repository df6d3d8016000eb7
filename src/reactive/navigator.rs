//! Rule-based obstacle avoidance that runs until told to stop.
//!
//! Every frame the navigator keeps its heading when the look-ahead ray is
//! clear, otherwise it sweeps outward from the heading, alternating left
//! and right, and takes the first clear candidate. When nothing in the
//! window is clear it picks a random heading. It then always tries one
//! forward move; a blocked move perturbs the heading and the next frame
//! tries again.

use std::collections::VecDeque;
use std::f64::consts::PI;
use std::sync::Arc;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, trace, warn};

use crate::env::{Info, RenderMode, RenderSnapshot, SimError, Simulation, StepResult};
use crate::geometry::{linspace, wrap_angle, Pose, Position};
use crate::motion::{Commit, Kinematics};
use crate::sensing::{RayHit, Raycaster};
use crate::world::{Obstacle, World};

use super::config::ReactiveConfig;
use super::stop::StopSignal;

/// How the heading for a frame was picked.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HeadingChoice {
    /// The current heading was clear.
    Straight,
    /// A swept candidate was clear; holds its signed offset from the
    /// previous heading.
    Swept(f64),
    /// Nothing in the window was clear; holds the random new heading.
    Fallback(f64),
}

/// Summary of one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameReport {
    /// 1-based frame number since the last reset.
    pub frame: u64,
    pub pose: Pose,
    pub choice: HeadingChoice,
    /// The forward move was blocked and the heading was perturbed.
    pub collided: bool,
}

/// Reactive navigator owning its floor, pose, trail and random source.
///
/// # Lifecycle
///
/// 1. Create with [`ReactiveNavigator::new`] or
///    [`ReactiveNavigator::with_obstacles`].
/// 2. Drive it with [`ReactiveNavigator::tick`] or hand control to
///    [`ReactiveNavigator::run`] until a [`StopSignal`] fires.
#[derive(Debug)]
pub struct ReactiveNavigator {
    config: ReactiveConfig,
    world: Arc<World>,
    /// Caller-supplied layout that survives resets.
    fixed_layout: Option<Vec<Obstacle>>,
    pose: Pose,
    rng: StdRng,
    look_ahead: Raycaster,
    kinematics: Kinematics,
    trail: VecDeque<Position>,
    frame: u64,
    render_mode: RenderMode,
}

impl ReactiveNavigator {
    /// Builds a random floor from `config.seed` and places the robot.
    ///
    /// The same generator keeps feeding the random heading choices, so one
    /// seed reproduces the whole run.
    pub fn new(config: ReactiveConfig) -> Result<Self, SimError> {
        config.validate()?;
        let mut rng = StdRng::seed_from_u64(config.seed);
        let world = World::generate(&config.world, &mut rng)?;
        Ok(Self::assemble(config, world, None, rng))
    }

    /// Uses an explicit layout instead of a random one.
    pub fn with_obstacles(config: ReactiveConfig, obstacles: Vec<Obstacle>) -> Result<Self, SimError> {
        config.validate_motion()?;
        let world = World::from_obstacles(&config.world, obstacles.clone())?;
        let rng = StdRng::seed_from_u64(config.seed);
        Ok(Self::assemble(config, world, Some(obstacles), rng))
    }

    fn assemble(
        config: ReactiveConfig,
        world: World,
        fixed_layout: Option<Vec<Obstacle>>,
        rng: StdRng,
    ) -> Self {
        let mut navigator = Self {
            look_ahead: Raycaster::new(
                config.world.robot_radius,
                config.look_ahead,
                config.look_ahead_step,
            ),
            kinematics: Kinematics::new(config.speed, 0.0, Commit::Continuous),
            pose: Pose::new(config.start, config.start_heading),
            render_mode: config.render_mode,
            world: Arc::new(world),
            fixed_layout,
            rng,
            trail: VecDeque::new(),
            frame: 0,
            config,
        };
        navigator.place_robot();
        navigator
    }

    fn place_robot(&mut self) {
        self.pose = Pose::new(self.config.start, self.config.start_heading);
        self.trail.clear();
        self.frame = 0;
        if self.world.field().collides(&self.pose.position) {
            warn!(start = %self.pose.position, "reactive start overlaps an inflated obstacle");
        }
        info!(
            obstacles = self.world.obstacles().len(),
            free_ratio = self.world.field().free_ratio(),
            "reactive navigator ready"
        );
    }

    /// Restarts from the configured pose.
    ///
    /// Random floors are redrawn from `seed` (or `config.seed`); a fixed
    /// layout is kept and only the random source is reseeded.
    pub fn reset(&mut self, seed: Option<u64>) -> Result<Pose, SimError> {
        let seed = seed.unwrap_or(self.config.seed);
        let mut rng = StdRng::seed_from_u64(seed);
        let world = match &self.fixed_layout {
            Some(obstacles) => World::from_obstacles(&self.config.world, obstacles.clone())?,
            None => World::generate(&self.config.world, &mut rng)?,
        };
        self.world = Arc::new(world);
        self.rng = rng;
        self.place_robot();
        Ok(self.pose)
    }

    /// Picks this frame's heading and applies it to the pose.
    pub fn choose_heading(&mut self) -> HeadingChoice {
        let field = self.world.field();
        let origin = self.pose.position;
        let heading = self.pose.heading;
        if self.look_ahead.is_clear(field, &origin, heading) {
            return HeadingChoice::Straight;
        }

        for delta in linspace(0.0, self.config.fov / 2.0, self.config.sweep_steps) {
            for offset in [delta, -delta] {
                let candidate = wrap_angle(heading + offset);
                if self.look_ahead.is_clear(field, &origin, candidate) {
                    self.pose.heading = candidate;
                    return HeadingChoice::Swept(offset);
                }
            }
        }

        let fallback = wrap_angle(heading + self.rng.gen_range(-PI..PI));
        debug!(pose = %self.pose, fallback, "no clear heading in window");
        self.pose.heading = fallback;
        HeadingChoice::Fallback(fallback)
    }

    /// Runs one frame: choose a heading, try to move, record the trail.
    pub fn tick(&mut self) -> FrameReport {
        let choice = self.choose_heading();
        let outcome = self.kinematics.advance(self.world.field(), &mut self.pose);
        let collided = outcome.is_blocked();
        if collided {
            let (lo, hi) = self.config.perturbation;
            self.pose.heading = wrap_angle(self.pose.heading + self.rng.gen_range(lo..=hi));
            trace!(frame = self.frame + 1, pose = %self.pose, "blocked, heading perturbed");
        }

        let r = self.config.world.robot_radius as f64;
        let max_x = (self.config.world.width as f64 - r - 1.0).max(r);
        let max_y = (self.config.world.height as f64 - r - 1.0).max(r);
        self.pose.position = self.pose.position.clamped(r, max_x, r, max_y);

        if self.config.max_trail_len > 0 {
            while self.trail.len() >= self.config.max_trail_len {
                self.trail.pop_front();
            }
            self.trail.push_back(self.pose.position);
        }

        self.frame += 1;
        FrameReport {
            frame: self.frame,
            pose: self.pose,
            choice,
            collided,
        }
    }

    /// Ticks until `stop` fires or `max_frames` frames have run.
    ///
    /// The signal is checked once per frame boundary; a frame in progress
    /// always completes. Returns the number of frames run by this call.
    pub fn run<F>(&mut self, stop: &StopSignal, max_frames: Option<u64>, mut on_frame: F) -> u64
    where
        F: FnMut(&ReactiveNavigator, &FrameReport),
    {
        let mut frames = 0;
        while !stop.is_stopped() && max_frames.map_or(true, |max| frames < max) {
            let report = self.tick();
            on_frame(self, &report);
            frames += 1;
        }
        info!(frames, total = self.frame, pose = %self.pose, "reactive loop stopped");
        frames
    }

    /// Display rays spread across the field of view.
    pub fn look_ahead_fan(&self) -> Vec<RayHit> {
        self.look_ahead.fan(
            self.world.field(),
            &self.pose,
            self.config.fov,
            self.config.visual_rays,
        )
    }

    pub fn render(&self) -> Option<RenderSnapshot> {
        if self.render_mode != RenderMode::Snapshot {
            return None;
        }
        Some(RenderSnapshot {
            world: Arc::clone(&self.world),
            pose: self.pose,
            robot_radius: self.config.world.robot_radius,
            goal: None,
            rays: self.look_ahead_fan(),
            trail: self.trail.iter().copied().collect(),
        })
    }

    pub fn close(&mut self) {
        self.render_mode = RenderMode::None;
    }

    pub fn config(&self) -> &ReactiveConfig {
        &self.config
    }

    pub fn pose(&self) -> Pose {
        self.pose
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    /// Positions visited so far, oldest first.
    pub fn trail(&self) -> impl Iterator<Item = &Position> {
        self.trail.iter()
    }

    pub fn trail_len(&self) -> usize {
        self.trail.len()
    }

    /// Frames run since the last reset.
    pub fn frame(&self) -> u64 {
        self.frame
    }
}

impl Simulation for ReactiveNavigator {
    type Action = ();
    type Observation = Pose;

    fn reset(&mut self, seed: Option<u64>) -> Result<(Pose, Info), SimError> {
        let pose = ReactiveNavigator::reset(self, seed)?;
        Ok((pose, Info::new()))
    }

    /// One frame. The reactive loop has no reward and never ends on its own.
    fn step(&mut self, _action: ()) -> Result<StepResult<Pose>, SimError> {
        let report = self.tick();
        let mut info = Info::new();
        info.insert("frame", report.frame);
        info.insert("collided", report.collided);
        info.insert(
            "fallback",
            matches!(report.choice, HeadingChoice::Fallback(_)),
        );
        Ok(StepResult {
            observation: report.pose,
            reward: 0.0,
            terminated: false,
            truncated: false,
            info,
        })
    }

    fn render(&self) -> Option<RenderSnapshot> {
        ReactiveNavigator::render(self)
    }

    fn close(&mut self) {
        ReactiveNavigator::close(self)
    }

    fn name(&self) -> &str {
        "reactive_nav"
    }
}
