//! Agent data: the shared envelope plus kind-specific state.

use glam::DVec2;
use murmuration_data::{AgentId, AgentKind, RenderRecord};
use serde::{Deserialize, Serialize};

/// Relative importance of the three flocking drives.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FlockWeights {
    pub cohere: f64,
    pub separate: f64,
    #[serde(rename = "match")]
    pub match_heading: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FlockMember {
    pub velocity: DVec2,
    /// Distance covered per tick.
    pub speed: f64,
    /// Query radius, before the agent's own size is added.
    pub vision: f64,
    /// Desired gap to other flock members.
    pub separation: f64,
    /// Desired gap to predators and obstacles.
    pub collision_separation: f64,
    pub weights: FlockWeights,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Predator {
    pub velocity: DVec2,
    pub speed: f64,
    pub vision: f64,
    pub collision_separation: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum AgentBody {
    FlockMember(FlockMember),
    Predator(Predator),
    Obstacle,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Agent {
    pub id: AgentId,
    /// Radius used for avoidance thresholds and rendering.
    pub size: f64,
    /// Mirror of the position held by the space, refreshed after every move.
    pub position: DVec2,
    /// Set once the space has accepted the agent; unplaced agents skip their steps.
    pub placed: bool,
    /// Number of scheduler visits received.
    pub activations: u64,
    pub body: AgentBody,
}

impl Agent {
    pub fn new(id: AgentId, size: f64, body: AgentBody) -> Self {
        Self {
            id,
            size,
            position: DVec2::ZERO,
            placed: false,
            activations: 0,
            body,
        }
    }

    pub fn kind(&self) -> AgentKind {
        match self.body {
            AgentBody::FlockMember(_) => AgentKind::FlockMember,
            AgentBody::Predator(_) => AgentKind::Predator,
            AgentBody::Obstacle => AgentKind::Obstacle,
        }
    }

    /// Current velocity; `None` for obstacles.
    pub fn velocity(&self) -> Option<DVec2> {
        match &self.body {
            AgentBody::FlockMember(m) => Some(m.velocity),
            AgentBody::Predator(p) => Some(p.velocity),
            AgentBody::Obstacle => None,
        }
    }

    pub fn speed(&self) -> Option<f64> {
        match &self.body {
            AgentBody::FlockMember(m) => Some(m.speed),
            AgentBody::Predator(p) => Some(p.speed),
            AgentBody::Obstacle => None,
        }
    }

    pub fn mark_placed(&mut self, position: DVec2) {
        self.position = position;
        self.placed = true;
    }

    pub fn render_record(&self) -> RenderRecord {
        RenderRecord {
            id: self.id,
            kind: self.kind(),
            position: self.position,
            size: self.size,
        }
    }
}
