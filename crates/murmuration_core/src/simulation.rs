//! The simulation: owns the space, the scheduler and the steering target.

use crate::agent::Agent;
use crate::config::SimulationConfig;
use crate::error::Result;
use crate::lifecycle;
use crate::scheduler::Scheduler;
use crate::snapshot;
use crate::space::Space;
use crate::systems::SteeringParams;
use glam::DVec2;
use murmuration_data::{AgentId, AgentKind, FrameSnapshot, RenderRecord, TickReport};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

pub struct Simulation {
    config: SimulationConfig,
    space: Space,
    scheduler: Scheduler,
    rng: ChaCha8Rng,
    target: DVec2,
    predators_enabled: bool,
    target_seeking: bool,
    next_id: u64,
}

impl Simulation {
    /// Validates `config` and builds the initial population.
    pub fn new(config: SimulationConfig) -> Result<Self> {
        let mut sim = Self::empty(config)?;
        sim.build_initial_population()?;
        Ok(sim)
    }

    /// Validates `config` and returns a simulation with no agents.
    pub fn empty(config: SimulationConfig) -> Result<Self> {
        config.validate()?;
        let rng = match config.world.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        let space = Space::with_cell_size(
            config.world.width,
            config.world.height,
            config.world.wrap,
            config.world.cell_size,
        );
        Ok(Self {
            target: config.steering.target,
            predators_enabled: config.predator.enabled,
            target_seeking: config.steering.target_seeking,
            config,
            space,
            scheduler: Scheduler::new(),
            rng,
            next_id: 0,
        })
    }

    /// Places the configured flock, obstacle pairs and, when enabled, predators.
    ///
    /// Each flock member starts with velocity `d * target`, where `d` is its distance
    /// from the centre of the space.
    pub fn build_initial_population(&mut self) -> Result<()> {
        let center = self.space.center();
        for _ in 0..self.config.flock.population {
            let pos = self.random_position();
            let velocity = DVec2::splat(self.space.distance(pos, center)) * self.target;
            self.spawn_flock_member(pos, velocity)?;
        }

        for _ in 0..self.config.obstacles.pairs {
            let pos = self.random_position();
            self.spawn_obstacle(pos, self.config.obstacles.outer_size)?;
            self.spawn_obstacle(pos, self.config.obstacles.inner_size)?;
        }

        if self.predators_enabled {
            for _ in 0..self.config.predator.count {
                let pos = self.random_position();
                let velocity = DVec2::new(self.rng.gen_range(-1.0..1.0), self.rng.gen_range(-1.0..1.0));
                self.spawn_predator(pos, velocity)?;
            }
        }

        tracing::info!(
            flock = self.population(AgentKind::FlockMember),
            obstacles = self.population(AgentKind::Obstacle),
            predators = self.population(AgentKind::Predator),
            fingerprint = %self.config.fingerprint(),
            "Initial population built"
        );
        Ok(())
    }

    pub fn spawn_flock_member(&mut self, pos: DVec2, velocity: DVec2) -> Result<AgentId> {
        let agent = lifecycle::create_flock_member(self.allocate_id(), &self.config.flock, velocity);
        lifecycle::admit(&mut self.space, &mut self.scheduler, agent, pos)
    }

    pub fn spawn_predator(&mut self, pos: DVec2, velocity: DVec2) -> Result<AgentId> {
        let agent = lifecycle::create_predator(
            self.allocate_id(),
            &self.config.predator,
            &self.config.flock,
            velocity,
        );
        lifecycle::admit(&mut self.space, &mut self.scheduler, agent, pos)
    }

    pub fn spawn_obstacle(&mut self, pos: DVec2, size: f64) -> Result<AgentId> {
        let agent = lifecycle::create_obstacle(self.allocate_id(), size);
        lifecycle::admit(&mut self.space, &mut self.scheduler, agent, pos)
    }

    pub fn despawn(&mut self, id: AgentId) -> Result<Agent> {
        lifecycle::despawn(&mut self.space, &mut self.scheduler, id)
    }

    /// Moves the point flock members seek.
    pub fn update_target(&mut self, pos: DVec2) {
        self.target = pos;
    }

    pub fn target(&self) -> DVec2 {
        self.target
    }

    pub fn predators_enabled(&self) -> bool {
        self.predators_enabled
    }

    pub fn target_seeking(&self) -> bool {
        self.target_seeking
    }

    /// Advances one tick. Any error leaves the simulation unusable.
    pub fn step(&mut self) -> Result<TickReport> {
        let params = SteeringParams {
            target: self.target_seeking.then_some(self.target),
            policy: self.config.steering.degenerate_velocity,
            obstacle_vision_margin: self.config.obstacles.vision_margin,
            prey_vision_margin: self.config.predator.prey_vision_margin,
        };
        let report = self
            .scheduler
            .step_all(&mut self.space, &params, &mut self.rng)?;

        if !report.eaten.is_empty() {
            tracing::debug!(
                tick = report.tick,
                eaten = report.eaten.len(),
                remaining = self.population(AgentKind::FlockMember),
                "Predation"
            );
        }
        Ok(report)
    }

    pub fn render_snapshot(&self) -> Vec<RenderRecord> {
        snapshot::render_records(&self.scheduler)
    }

    pub fn frame(&self) -> FrameSnapshot {
        snapshot::frame(&self.scheduler, self.target_seeking.then_some(self.target))
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn space(&self) -> &Space {
        &self.space
    }

    pub fn scheduler(&self) -> &Scheduler {
        &self.scheduler
    }

    pub fn agent(&self, id: AgentId) -> Option<&Agent> {
        self.scheduler.get(id)
    }

    pub fn tick(&self) -> u64 {
        self.scheduler.tick()
    }

    pub fn len(&self) -> usize {
        self.scheduler.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scheduler.is_empty()
    }

    pub fn population(&self, kind: AgentKind) -> usize {
        self.scheduler.count(kind)
    }

    fn allocate_id(&mut self) -> AgentId {
        self.next_id += 1;
        AgentId(self.next_id)
    }

    fn random_position(&mut self) -> DVec2 {
        DVec2::new(
            self.rng.gen_range(0.0..self.space.width()),
            self.rng.gen_range(0.0..self.space.height()),
        )
    }
}
