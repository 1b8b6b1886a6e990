//! Error types for the simulation engine.
//!
//! `OutOfBounds`, `NotFound` and `DuplicateAgent` raised while a tick is running mean the
//! scheduler and the space disagree about who is alive; callers treat them as fatal.
//! `InvalidConfiguration` is the only error expected before the simulation starts.

use murmuration_data::AgentId;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SimError {
    /// A position lies outside a non-wrapping space or is not finite.
    #[error("position ({x}, {y}) lies outside the {width}x{height} space")]
    OutOfBounds {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    },

    /// The agent is not registered where the caller expected it.
    #[error("agent {0} is not registered")]
    NotFound(AgentId),

    /// The agent is already registered.
    #[error("agent {0} is already registered")]
    DuplicateAgent(AgentId),

    /// Normalization of a zero-length steering vector was attempted.
    #[error("agent {0} produced a zero-length velocity")]
    DegenerateVelocity(AgentId),

    /// Rejected at construction time.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
}

/// Result type alias for engine operations.
pub type Result<T> = std::result::Result<T, SimError>;

impl SimError {
    #[must_use]
    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        Self::InvalidConfiguration(msg.into())
    }

    #[must_use]
    pub fn out_of_bounds(position: glam::DVec2, width: f64, height: f64) -> Self {
        Self::OutOfBounds {
            x: position.x,
            y: position.y,
            width,
            height,
        }
    }

    /// Whether the error can only come from a scheduler/space desynchronization.
    #[must_use]
    pub fn is_invariant_violation(&self) -> bool {
        matches!(
            self,
            Self::OutOfBounds { .. } | Self::NotFound(_) | Self::DuplicateAgent(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SimError::invalid_config("flock vision must be positive");
        assert_eq!(
            err.to_string(),
            "invalid configuration: flock vision must be positive"
        );
        assert_eq!(
            SimError::NotFound(AgentId(4)).to_string(),
            "agent #4 is not registered"
        );
    }

    #[test]
    fn test_out_of_bounds_display() {
        let err = SimError::out_of_bounds(glam::DVec2::new(120.0, 5.0), 100.0, 100.0);
        assert_eq!(
            err.to_string(),
            "position (120, 5) lies outside the 100x100 space"
        );
    }

    #[test]
    fn test_invariant_classification() {
        assert!(SimError::NotFound(AgentId(1)).is_invariant_violation());
        assert!(!SimError::DegenerateVelocity(AgentId(1)).is_invariant_violation());
        assert!(!SimError::invalid_config("x").is_invariant_violation());
    }
}
