//! Headless runner for the murmuration flocking engine.
//!
//! The engine itself lives in `murmuration_core`; this crate wires it to a
//! configuration file, a moving target and a snapshot sink.

pub mod app;
