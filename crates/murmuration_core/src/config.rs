//! Configuration management for simulation parameters.
//!
//! This module provides strongly-typed configuration structures that map to
//! the `config.toml` file. Every parameter has a default matching the classic
//! flocking setup (a 1000x900 torus, 50 birds, 4 obstacle pairs).
//!
//! ## Configuration Hierarchy
//!
//! 1. Default values (hardcoded in `Default` impl)
//! 2. `config.toml` file (overrides defaults, missing keys fall back)
//! 3. Command line overrides applied by the runner
//!
//! ## Example `config.toml`
//!
//! ```toml
//! [world]
//! width = 1000.0
//! height = 900.0
//! wrap = true
//! seed = 42
//!
//! [flock]
//! population = 80
//! cohere = 0.05
//!
//! [predator]
//! enabled = true
//!
//! [steering]
//! target_seeking = false
//! degenerate_velocity = "fatal"
//! ```

use crate::agent::FlockWeights;
use crate::error::{Result, SimError};
use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Dimensions of the plane and reproducibility settings.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct WorldConfig {
    pub width: f64,
    pub height: f64,
    pub wrap: bool,
    pub seed: Option<u64>,
    /// Edge length of a spatial index cell.
    pub cell_size: f64,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            width: 1000.0,
            height: 900.0,
            wrap: true,
            seed: None,
            cell_size: 25.0,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct FlockConfig {
    pub population: usize,
    pub speed: f64,
    pub vision: f64,
    pub separation: f64,
    pub collision_separation: f64,
    pub size: f64,
    pub cohere: f64,
    pub separate: f64,
    /// Alignment is added at full strength by default.
    #[serde(rename = "match")]
    pub match_heading: f64,
}

impl Default for FlockConfig {
    fn default() -> Self {
        Self {
            population: 50,
            speed: 2.0,
            vision: 10.0,
            separation: 1.0,
            collision_separation: 30.0,
            size: 10.0,
            cohere: 0.05,
            separate: 1.25,
            match_heading: 1.0,
        }
    }
}

impl FlockConfig {
    pub fn weights(&self) -> FlockWeights {
        FlockWeights {
            cohere: self.cohere,
            separate: self.separate,
            match_heading: self.match_heading,
        }
    }
}

/// Static obstacles, laid out as co-located outer/inner marker pairs.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ObstacleConfig {
    pub pairs: usize,
    pub outer_size: f64,
    pub inner_size: f64,
    /// Added to a mover's vision when looking for obstacles.
    pub vision_margin: f64,
}

impl Default for ObstacleConfig {
    fn default() -> Self {
        Self {
            pairs: 4,
            outer_size: 30.0,
            inner_size: 4.0,
            vision_margin: 15.0,
        }
    }
}

/// Predators outpace and outsee the flock: left unset, `speed` and `vision` follow the
/// `[flock]` values (+0.1 and +5).
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct PredatorConfig {
    pub enabled: bool,
    pub count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub speed: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vision: Option<f64>,
    pub size: f64,
    pub collision_separation: f64,
    /// Added to the predator's vision when looking for prey.
    pub prey_vision_margin: f64,
}

impl Default for PredatorConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            count: 1,
            speed: None,
            vision: None,
            size: 12.0,
            collision_separation: 30.0,
            prey_vision_margin: 20.0,
        }
    }
}

impl PredatorConfig {
    pub const SPEED_LEAD: f64 = 0.1;
    pub const VISION_LEAD: f64 = 5.0;

    pub fn speed_for(&self, flock: &FlockConfig) -> f64 {
        self.speed.unwrap_or(flock.speed + Self::SPEED_LEAD)
    }

    pub fn vision_for(&self, flock: &FlockConfig) -> f64 {
        self.vision.unwrap_or(flock.vision + Self::VISION_LEAD)
    }
}

/// What a mover does when its blended steering vector has no direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DegeneratePolicy {
    /// Keep the previous heading; hold position if there is none.
    #[default]
    RetainHeading,
    /// Abort the tick with `SimError::DegenerateVelocity`.
    Fatal,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct SteeringConfig {
    pub target_seeking: bool,
    pub target: DVec2,
    pub degenerate_velocity: DegeneratePolicy,
}

impl Default for SteeringConfig {
    fn default() -> Self {
        Self {
            target_seeking: true,
            target: DVec2::new(500.0, 450.0),
            degenerate_velocity: DegeneratePolicy::RetainHeading,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct SimulationConfig {
    /// Ticks between periodic progress logs.
    pub log_interval: u64,
    pub world: WorldConfig,
    pub flock: FlockConfig,
    pub obstacles: ObstacleConfig,
    pub predator: PredatorConfig,
    pub steering: SteeringConfig,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            log_interval: 1000,
            world: WorldConfig::default(),
            flock: FlockConfig::default(),
            obstacles: ObstacleConfig::default(),
            predator: PredatorConfig::default(),
            steering: SteeringConfig::default(),
        }
    }
}

/// Upper bound on spatial index cells allocated for one world.
pub const MAX_GRID_CELLS: f64 = (1u64 << 24) as f64;

macro_rules! ensure_config {
    ($cond:expr, $msg:expr) => {
        if !$cond {
            return Err(SimError::invalid_config($msg));
        }
    };
}

fn positive(v: f64) -> bool {
    v.is_finite() && v > 0.0
}

fn non_negative(v: f64) -> bool {
    v.is_finite() && v >= 0.0
}

impl SimulationConfig {
    /// Validates all configuration parameters.
    ///
    /// Returns `Ok(())` if all parameters are valid, or
    /// `SimError::InvalidConfiguration` describing the first failure.
    ///
    /// # Validation Rules
    /// - The spatial index may not exceed `MAX_GRID_CELLS` cells
    /// - Dimensions, cell size, speeds, visions and sizes must be positive and finite
    /// - The flock population must be positive; obstacle pairs may be zero
    /// - Weights and separations must be non-negative
    /// - An enabled predator population must be positive
    /// - The target must lie inside the space
    pub fn validate(&self) -> Result<()> {
        let w = &self.world;
        ensure_config!(positive(w.width), "world width must be positive");
        ensure_config!(positive(w.height), "world height must be positive");
        ensure_config!(positive(w.cell_size), "world cell size must be positive");
        let cells = (w.width / w.cell_size).ceil() * (w.height / w.cell_size).ceil();
        ensure_config!(
            cells.is_finite() && cells <= MAX_GRID_CELLS,
            "world cell size too small for the world dimensions"
        );

        let f = &self.flock;
        ensure_config!(f.population > 0, "flock population must be positive");
        ensure_config!(positive(f.speed), "flock speed must be positive");
        ensure_config!(positive(f.vision), "flock vision must be positive");
        ensure_config!(positive(f.size), "flock size must be positive");
        ensure_config!(
            non_negative(f.separation),
            "flock separation must be non-negative"
        );
        ensure_config!(
            non_negative(f.collision_separation),
            "flock collision separation must be non-negative"
        );
        ensure_config!(
            non_negative(f.cohere) && non_negative(f.separate) && non_negative(f.match_heading),
            "flock weights must be non-negative"
        );

        let o = &self.obstacles;
        ensure_config!(
            positive(o.outer_size) && positive(o.inner_size),
            "obstacle sizes must be positive"
        );
        ensure_config!(
            non_negative(o.vision_margin),
            "obstacle vision margin must be non-negative"
        );

        let p = &self.predator;
        if p.enabled {
            ensure_config!(p.count > 0, "predator count must be positive when enabled");
        }
        ensure_config!(
            positive(p.speed_for(f)),
            "predator speed must be positive"
        );
        ensure_config!(
            positive(p.vision_for(f)),
            "predator vision must be positive"
        );
        ensure_config!(positive(p.size), "predator size must be positive");
        ensure_config!(
            non_negative(p.collision_separation),
            "predator collision separation must be non-negative"
        );
        ensure_config!(
            non_negative(p.prey_vision_margin),
            "predator prey vision margin must be non-negative"
        );

        let t = self.steering.target;
        ensure_config!(
            t.is_finite() && t.x >= 0.0 && t.x <= w.width && t.y >= 0.0 && t.y <= w.height,
            "steering target must lie inside the world"
        );

        ensure_config!(self.log_interval > 0, "log interval must be positive");
        Ok(())
    }

    /// Parses and validates a TOML document. Missing keys keep their defaults.
    pub fn from_toml(content: &str) -> anyhow::Result<Self> {
        let config = toml::from_str::<Self>(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_toml(&self) -> anyhow::Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Hex SHA-256 over every behaviour-affecting section.
    #[must_use]
    pub fn fingerprint(&self) -> String {
        use sha2::{Digest, Sha256};
        let mut hasher = Sha256::new();
        hasher.update(format!("{:?}", self.world).as_bytes());
        hasher.update(format!("{:?}", self.flock).as_bytes());
        hasher.update(format!("{:?}", self.obstacles).as_bytes());
        hasher.update(format!("{:?}", self.predator).as_bytes());
        hasher.update(format!("{:?}", self.steering).as_bytes());
        hex::encode(hasher.finalize())
    }
}
