//! # Murmuration Core
//!
//! The simulation engine for Murmuration - decentralized flocking on a bounded,
//! optionally toroidal, plane.
//!
//! This crate contains the deterministic simulation logic, including:
//! - Spatial indexing and minimal-image geometry
//! - Flock member steering (cohesion, separation, alignment, avoidance, seeking)
//! - Predator hunting and the prey removal protocol
//! - Random-activation scheduling with mid-tick removal
//! - Metrics collection and structured logging
//!
//! ## Example
//!
//! ```
//! use murmuration_core::config::SimulationConfig;
//! use murmuration_core::Simulation;
//! use murmuration_data::AgentKind;
//!
//! let mut config = SimulationConfig::default();
//! config.world.seed = Some(42);
//! config.predator.enabled = true;
//!
//! let mut sim = Simulation::new(config).unwrap();
//! let report = sim.step().unwrap();
//! assert_eq!(report.tick, 1);
//! assert!(sim.population(AgentKind::FlockMember) <= 50);
//! ```

/// Agent envelope and kind-specific state
pub mod agent;
/// Configuration management for simulation parameters
pub mod config;
/// Error types and the engine `Result` alias
pub mod error;
/// Plane arithmetic: minimal-image offsets, wrap and clamp
pub mod geometry;
/// Agent construction, admission and removal
pub mod lifecycle;
/// Performance metrics collection and logging
pub mod metrics;
/// Random-activation scheduler
pub mod scheduler;
/// Render state extraction
pub mod snapshot;
/// The bounded plane and its neighbourhood queries
pub mod space;
/// Spatial hashing for proximity queries
pub mod spatial_hash;
/// Top-level simulation driver
pub mod simulation;
/// Per-agent step logic (flocking, predation, shared steering rules)
pub mod systems;

pub use error::{Result, SimError};
pub use simulation::Simulation;
