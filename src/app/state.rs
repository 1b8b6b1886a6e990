use anyhow::{Context, Result};
use murmuration_core::config::SimulationConfig;
use murmuration_core::metrics::Metrics;
use murmuration_core::Simulation;
use murmuration_data::AgentKind;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::input::TargetOrbit;
use super::render::SnapshotWriter;

/// Command line overrides layered on top of the configuration file.
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    pub ticks: u64,
    pub seed: Option<u64>,
    pub predators: bool,
    pub no_target: bool,
    pub orbit_target: bool,
    pub snapshots: Option<PathBuf>,
}

impl RunOptions {
    pub fn apply(&self, config: &mut SimulationConfig) {
        if let Some(seed) = self.seed {
            config.world.seed = Some(seed);
        }
        if self.predators {
            config.predator.enabled = true;
        }
        if self.no_target {
            config.steering.target_seeking = false;
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunSummary {
    pub ticks: u64,
    pub flock_remaining: usize,
    pub predators: usize,
    pub eaten_total: u64,
    pub stalled_total: u64,
    pub elapsed_ms: u64,
    pub config_fingerprint: String,
}

pub struct App {
    pub running: bool,
    pub sim: Simulation,
    pub metrics: Metrics,
    pub options: RunOptions,
    pub orbit: Option<TargetOrbit>,
    pub snapshots: Option<SnapshotWriter<std::fs::File>>,
}

impl App {
    /// Reads `path`, falling back to defaults when the file does not exist.
    ///
    /// A file that exists but does not parse or validate is an error.
    pub fn load_config(path: impl AsRef<Path>) -> Result<SimulationConfig> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::warn!(path = %path.display(), "Config file not found, using defaults");
            return Ok(SimulationConfig::default());
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        SimulationConfig::from_toml(&content)
            .with_context(|| format!("Failed to load {}", path.display()))
    }

    pub fn new(mut config: SimulationConfig, options: RunOptions) -> Result<Self> {
        options.apply(&mut config);
        let sim = Simulation::new(config).context("Failed to build simulation")?;

        let orbit = options.orbit_target.then(|| TargetOrbit::around(&sim));
        let snapshots = match &options.snapshots {
            Some(path) => Some(SnapshotWriter::create(path)?),
            None => None,
        };

        Ok(Self {
            running: true,
            metrics: Metrics::new(sim.config().log_interval),
            sim,
            options,
            orbit,
            snapshots,
        })
    }

    pub fn summary(&self) -> RunSummary {
        RunSummary {
            ticks: self.sim.tick(),
            flock_remaining: self.sim.population(AgentKind::FlockMember),
            predators: self.sim.population(AgentKind::Predator),
            eaten_total: self.metrics.prey_eaten(),
            stalled_total: self.metrics.stalled_steps(),
            elapsed_ms: self.metrics.elapsed().as_millis() as u64,
            config_fingerprint: self.sim.config().fingerprint(),
        }
    }
}
