use glam::DVec2;
use murmuration_core::config::{DegeneratePolicy, SimulationConfig};
use murmuration_core::Simulation;
use murmuration_data::AgentId;

enum Spawn {
    Member { at: DVec2, velocity: DVec2 },
    Predator { at: DVec2, velocity: DVec2 },
    Obstacle { at: DVec2, size: f64 },
}

/// Builds a simulation with a hand-placed population.
#[allow(dead_code)]
pub struct ScenarioBuilder {
    config: SimulationConfig,
    spawns: Vec<Spawn>,
}

#[allow(dead_code)]
impl ScenarioBuilder {
    pub fn new() -> Self {
        let mut config = SimulationConfig::default();
        config.world.seed = Some(0);
        config.steering.target_seeking = false;
        Self {
            config,
            spawns: Vec::new(),
        }
    }

    pub fn with_space(mut self, width: f64, height: f64, wrap: bool) -> Self {
        self.config.world.width = width;
        self.config.world.height = height;
        self.config.world.wrap = wrap;
        self.config.steering.target = DVec2::new(width / 2.0, height / 2.0);
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.config.world.seed = Some(seed);
        self
    }

    pub fn with_policy(mut self, policy: DegeneratePolicy) -> Self {
        self.config.steering.degenerate_velocity = policy;
        self
    }

    pub fn with_config<F>(mut self, modifier: F) -> Self
    where
        F: FnOnce(&mut SimulationConfig),
    {
        modifier(&mut self.config);
        self
    }

    pub fn member(mut self, x: f64, y: f64, velocity: DVec2) -> Self {
        self.spawns.push(Spawn::Member {
            at: DVec2::new(x, y),
            velocity,
        });
        self
    }

    pub fn predator(mut self, x: f64, y: f64, velocity: DVec2) -> Self {
        self.spawns.push(Spawn::Predator {
            at: DVec2::new(x, y),
            velocity,
        });
        self
    }

    pub fn obstacle(mut self, x: f64, y: f64, size: f64) -> Self {
        self.spawns.push(Spawn::Obstacle {
            at: DVec2::new(x, y),
            size,
        });
        self
    }

    /// Returns the simulation and the ids of the spawned agents, in call order.
    pub fn build(self) -> (Simulation, Vec<AgentId>) {
        let mut sim = Simulation::empty(self.config).expect("scenario config should validate");
        let ids = self
            .spawns
            .into_iter()
            .map(|spawn| match spawn {
                Spawn::Member { at, velocity } => sim.spawn_flock_member(at, velocity),
                Spawn::Predator { at, velocity } => sim.spawn_predator(at, velocity),
                Spawn::Obstacle { at, size } => sim.spawn_obstacle(at, size),
            })
            .collect::<Result<Vec<_>, _>>()
            .expect("scenario agents should be admitted");
        (sim, ids)
    }
}

/// A seeded copy of the default configuration.
#[allow(dead_code)]
pub fn seeded_config(seed: u64) -> SimulationConfig {
    let mut config = SimulationConfig::default();
    config.world.seed = Some(seed);
    config
}

#[allow(dead_code)]
pub fn assert_consistent(sim: &Simulation) {
    assert_eq!(sim.space().len(), sim.scheduler().len());
    for agent in sim.scheduler().iter() {
        assert_eq!(
            sim.space().position(agent.id).ok(),
            Some(agent.position),
            "agent {} out of sync with the space",
            agent.id
        );
    }
}
