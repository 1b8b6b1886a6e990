use super::agent::{AgentId, AgentKind};
use glam::DVec2;
use serde::{Deserialize, Serialize};

/// What a renderer needs to draw one agent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RenderRecord {
    pub id: AgentId,
    pub kind: AgentKind,
    pub position: DVec2,
    pub size: f64,
}

/// Render state of every live agent after a tick, ordered by id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct FrameSnapshot {
    pub tick: u64,
    pub target: Option<DVec2>,
    pub agents: Vec<RenderRecord>,
}

impl FrameSnapshot {
    #[must_use]
    pub fn count(&self, kind: AgentKind) -> usize {
        self.agents.iter().filter(|r| r.kind == kind).count()
    }
}

/// Summary of a single scheduler pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct TickReport {
    pub tick: u64,
    /// Agents whose step ran this tick.
    pub visited: usize,
    /// Agents in the tick-start snapshot that were removed before their turn.
    pub skipped: usize,
    /// Steps that could not form a heading and held position.
    pub stalled: usize,
    /// Prey removed by predators during the tick, in removal order.
    pub eaten: Vec<AgentId>,
}

impl TickReport {
    #[must_use]
    pub fn new(tick: u64) -> Self {
        Self {
            tick,
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_record_serializes_position_as_pair() {
        let record = RenderRecord {
            id: AgentId(7),
            kind: AgentKind::Predator,
            position: DVec2::new(1.5, 2.0),
            size: 12.0,
        };
        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"id\":7"));
        assert!(json.contains("\"kind\":\"predator\""));
        assert!(json.contains("[1.5,2.0]"));
    }

    #[test]
    fn test_frame_snapshot_counts_by_kind() {
        let record = |id, kind| RenderRecord {
            id: AgentId(id),
            kind,
            position: DVec2::ZERO,
            size: 1.0,
        };
        let frame = FrameSnapshot {
            tick: 3,
            target: None,
            agents: vec![
                record(0, AgentKind::FlockMember),
                record(1, AgentKind::FlockMember),
                record(2, AgentKind::Obstacle),
            ],
        };
        assert_eq!(frame.count(AgentKind::FlockMember), 2);
        assert_eq!(frame.count(AgentKind::Predator), 0);
        assert_eq!(frame.count(AgentKind::Obstacle), 1);
    }
}
