//! Predator step: hunt the nearest flock, steer clear of obstacles, eat what is in reach.

use super::steering;
use super::{StepContext, StepOutcome};
use crate::agent::Predator;
use crate::error::Result;
use crate::lifecycle;
use glam::DVec2;
use murmuration_data::{AgentId, AgentKind};

/// Steers and moves one predator, then removes every prey within its size.
///
/// Prey are gathered once, before the predator moves. Reach is measured from where the
/// predator ends up to where each prey stood at the start of the step.
pub fn step(
    id: AgentId,
    size: f64,
    position: &mut DVec2,
    predator: &mut Predator,
    ctx: &mut StepContext<'_>,
) -> Result<StepOutcome> {
    let here = ctx.space.position(id)?;
    let space = &*ctx.space;

    let prey = space.neighbors_of_kind(
        here,
        predator.vision + ctx.params.prey_vision_margin,
        AgentKind::FlockMember,
    );
    let obstacles = space.neighbors_of_kind(
        here,
        predator.vision + ctx.params.obstacle_vision_margin,
        AgentKind::Obstacle,
    );

    let attack = steering::mean_heading(space, here, &prey);
    let avoid = steering::repel(space, here, &obstacles, predator.collision_separation);
    let velocity =
        predator.velocity + (avoid * predator.collision_separation + attack) / 2.0;

    let outcome =
        match steering::resolve_heading(velocity, predator.velocity, ctx.params.policy, id)? {
            Some(heading) => {
                predator.velocity = heading;
                *position = ctx.space.move_agent(id, here + heading * predator.speed)?;
                StepOutcome::Moved
            }
            None => {
                predator.velocity = DVec2::ZERO;
                StepOutcome::Stalled
            }
        };

    let reach_from = *position;
    for victim in prey {
        if ctx.space.distance(reach_from, victim.position) < size {
            lifecycle::despawn(ctx.space, ctx.roster, victim.id)?;
            tracing::trace!(predator = %id, prey = %victim.id, "Prey eaten");
            ctx.eaten.push(victim.id);
        }
    }

    Ok(outcome)
}
