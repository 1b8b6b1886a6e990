//! Per-agent step logic.
//!
//! The scheduler hands each visited agent to [`step_agent`] together with a
//! [`StepContext`] giving access to the shared space and the rest of the roster.

pub mod flocking;
pub mod predation;
pub mod steering;

use crate::agent::{Agent, AgentBody};
use crate::config::DegeneratePolicy;
use crate::error::Result;
use crate::scheduler::Scheduler;
use crate::space::Space;
use glam::DVec2;
use murmuration_data::AgentId;

/// Tick-wide steering inputs owned by the simulation.
#[derive(Debug, Clone, PartialEq)]
pub struct SteeringParams {
    /// Point flock members seek; `None` disables target seeking.
    pub target: Option<DVec2>,
    pub policy: DegeneratePolicy,
    pub obstacle_vision_margin: f64,
    pub prey_vision_margin: f64,
}

pub struct StepContext<'a> {
    pub space: &'a mut Space,
    /// Every live agent except the one currently stepping.
    pub roster: &'a mut Scheduler,
    pub params: &'a SteeringParams,
    /// Prey removed so far this tick.
    pub eaten: &'a mut Vec<AgentId>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// Obstacles have nothing to do.
    Idle,
    /// The agent was never placed and sat the tick out.
    Unplaced,
    Moved,
    /// No heading could be formed; the agent held position.
    Stalled,
}

pub fn step_agent(agent: &mut Agent, ctx: &mut StepContext<'_>) -> Result<StepOutcome> {
    if !agent.placed {
        tracing::debug!(agent = %agent.id, "Skipping unplaced agent");
        return Ok(StepOutcome::Unplaced);
    }
    let Agent {
        id,
        size,
        position,
        body,
        ..
    } = agent;
    match body {
        AgentBody::FlockMember(member) => flocking::step(*id, *size, position, member, ctx),
        AgentBody::Predator(predator) => predation::step(*id, *size, position, predator, ctx),
        AgentBody::Obstacle => Ok(StepOutcome::Idle),
    }
}
