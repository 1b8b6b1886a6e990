//! Agent creation, admission and removal.
//!
//! An agent is live once it has a position in the [`Space`] and an entry in the
//! [`Scheduler`]. [`admit`] and [`despawn`] change both together so no agent is ever
//! registered in one and missing from the other.

use crate::agent::{Agent, AgentBody, FlockMember, Predator};
use crate::config::{FlockConfig, PredatorConfig};
use crate::error::{Result, SimError};
use crate::scheduler::Scheduler;
use crate::space::Space;
use glam::DVec2;
use murmuration_data::AgentId;

pub fn create_flock_member(id: AgentId, config: &FlockConfig, velocity: DVec2) -> Agent {
    Agent::new(
        id,
        config.size,
        AgentBody::FlockMember(FlockMember {
            velocity,
            speed: config.speed,
            vision: config.vision,
            separation: config.separation,
            collision_separation: config.collision_separation,
            weights: config.weights(),
        }),
    )
}

pub fn create_predator(
    id: AgentId,
    config: &PredatorConfig,
    flock: &FlockConfig,
    velocity: DVec2,
) -> Agent {
    Agent::new(
        id,
        config.size,
        AgentBody::Predator(Predator {
            velocity,
            speed: config.speed_for(flock),
            vision: config.vision_for(flock),
            collision_separation: config.collision_separation,
        }),
    )
}

pub fn create_obstacle(id: AgentId, size: f64) -> Agent {
    Agent::new(id, size, AgentBody::Obstacle)
}

/// Places `agent` at `pos` and registers it with the scheduler.
///
/// The stored position may differ from `pos` on a torus. Nothing is registered if
/// either side rejects the agent.
pub fn admit(
    space: &mut Space,
    scheduler: &mut Scheduler,
    mut agent: Agent,
    pos: DVec2,
) -> Result<AgentId> {
    let id = agent.id;
    if scheduler.contains(id) {
        return Err(SimError::DuplicateAgent(id));
    }
    let position = space.place(id, agent.kind(), pos)?;
    agent.mark_placed(position);
    if let Err(err) = scheduler.add(agent) {
        space.remove(id)?;
        return Err(err);
    }
    Ok(id)
}

/// Removes `id` from both the space and the scheduler, returning the agent.
pub fn despawn(space: &mut Space, scheduler: &mut Scheduler, id: AgentId) -> Result<Agent> {
    if !space.contains(id) || !scheduler.contains(id) {
        return Err(SimError::NotFound(id));
    }
    space.remove(id)?;
    let mut agent = scheduler.remove(id)?;
    agent.placed = false;
    Ok(agent)
}
