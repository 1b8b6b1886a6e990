//! Flock member step: cohesion, separation, alignment, avoidance and target seeking.

use super::steering;
use super::{StepContext, StepOutcome};
use crate::agent::FlockMember;
use crate::error::Result;
use glam::DVec2;
use murmuration_data::{AgentId, AgentKind};

/// Steers and moves one flock member.
///
/// Neighbours are read from the space as it stands right now, so members that already
/// moved this tick are seen at their new positions.
pub fn step(
    id: AgentId,
    size: f64,
    position: &mut DVec2,
    member: &mut FlockMember,
    ctx: &mut StepContext<'_>,
) -> Result<StepOutcome> {
    let here = ctx.space.position(id)?;
    let space = &*ctx.space;

    let flockmates = space.neighbors_of_kind(here, member.vision + size, AgentKind::FlockMember);
    let obstacles = space.neighbors_of_kind(
        here,
        member.vision + ctx.params.obstacle_vision_margin,
        AgentKind::Obstacle,
    );
    let predators = space.neighbors_of_kind(here, member.vision + size, AgentKind::Predator);

    let velocities = flockmates
        .iter()
        .map(|n| ctx.roster.velocity_of(n.id))
        .collect::<Result<Vec<_>>>()?;

    let weights = member.weights;
    let mut velocity = member.velocity
        + steering::mean_heading(space, here, &flockmates) * weights.cohere
        + steering::repel(space, here, &flockmates, member.separation + size) * weights.separate
        + steering::repel(space, here, &predators, member.collision_separation)
        + steering::repel(space, here, &obstacles, member.collision_separation)
        + steering::mean_velocity(&velocities) * weights.match_heading;
    if let Some(target) = ctx.params.target {
        velocity += steering::seek(space, here, target);
    }
    velocity /= 2.0;

    let Some(heading) =
        steering::resolve_heading(velocity, member.velocity, ctx.params.policy, id)?
    else {
        member.velocity = DVec2::ZERO;
        return Ok(StepOutcome::Stalled);
    };

    member.velocity = heading;
    *position = ctx.space.move_agent(id, here + heading * member.speed)?;
    Ok(StepOutcome::Moved)
}
