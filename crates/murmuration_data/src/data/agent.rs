use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable identifier of an agent, unique for the lifetime of a simulation.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct AgentId(pub u64);

impl fmt::Display for AgentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl From<u64> for AgentId {
    fn from(raw: u64) -> Self {
        Self(raw)
    }
}

/// The three agent variants sharing the plane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgentKind {
    FlockMember,
    Predator,
    Obstacle,
}

impl AgentKind {
    pub const ALL: [AgentKind; 3] = [Self::FlockMember, Self::Predator, Self::Obstacle];

    /// Obstacles never move once placed.
    #[must_use]
    pub fn is_mobile(self) -> bool {
        !matches!(self, Self::Obstacle)
    }
}

impl fmt::Display for AgentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::FlockMember => "flock member",
            Self::Predator => "predator",
            Self::Obstacle => "obstacle",
        };
        f.write_str(name)
    }
}
