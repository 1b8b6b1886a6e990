//! Core data structures for the murmuration simulation.

pub mod agent;
pub mod render;
