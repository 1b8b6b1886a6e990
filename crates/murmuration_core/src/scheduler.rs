//! Random-activation scheduler.
//!
//! Each tick visits every agent registered at tick start exactly once, in a freshly
//! shuffled order. Agents removed by an earlier step are skipped when their turn comes;
//! agents added during the tick wait for the next one.

use crate::agent::Agent;
use crate::error::{Result, SimError};
use crate::space::Space;
use crate::systems::{self, StepContext, StepOutcome, SteeringParams};
use glam::DVec2;
use murmuration_data::{AgentId, AgentKind, TickReport};
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default)]
pub struct Scheduler {
    agents: BTreeMap<AgentId, Agent>,
    tick: u64,
}

impl Scheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, agent: Agent) -> Result<()> {
        if self.agents.contains_key(&agent.id) {
            return Err(SimError::DuplicateAgent(agent.id));
        }
        self.agents.insert(agent.id, agent);
        Ok(())
    }

    pub fn remove(&mut self, id: AgentId) -> Result<Agent> {
        self.agents.remove(&id).ok_or(SimError::NotFound(id))
    }

    pub fn get(&self, id: AgentId) -> Option<&Agent> {
        self.agents.get(&id)
    }

    pub fn get_mut(&mut self, id: AgentId) -> Option<&mut Agent> {
        self.agents.get_mut(&id)
    }

    pub fn contains(&self, id: AgentId) -> bool {
        self.agents.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.agents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    /// Completed ticks.
    pub fn tick(&self) -> u64 {
        self.tick
    }

    /// Live agents in id order.
    pub fn iter(&self) -> impl Iterator<Item = &Agent> + '_ {
        self.agents.values()
    }

    pub fn ids(&self) -> Vec<AgentId> {
        self.agents.keys().copied().collect()
    }

    pub fn count(&self, kind: AgentKind) -> usize {
        self.agents.values().filter(|a| a.kind() == kind).count()
    }

    /// Velocity of a live agent; obstacles report zero.
    pub fn velocity_of(&self, id: AgentId) -> Result<DVec2> {
        self.agents
            .get(&id)
            .map(|a| a.velocity().unwrap_or(DVec2::ZERO))
            .ok_or(SimError::NotFound(id))
    }

    /// Runs one tick of the agents' own step logic.
    pub fn step_all<R: Rng>(
        &mut self,
        space: &mut Space,
        params: &SteeringParams,
        rng: &mut R,
    ) -> Result<TickReport> {
        self.step_all_with(space, params, rng, systems::step_agent)
    }

    /// Runs one tick, calling `visit` for each agent in turn.
    ///
    /// The visited agent is checked out of the roster while `visit` runs, so lookups
    /// through `ctx.roster` only see the other agents. The first error aborts the tick.
    pub fn step_all_with<R, F>(
        &mut self,
        space: &mut Space,
        params: &SteeringParams,
        rng: &mut R,
        mut visit: F,
    ) -> Result<TickReport>
    where
        R: Rng,
        F: FnMut(&mut Agent, &mut StepContext<'_>) -> Result<StepOutcome>,
    {
        self.tick += 1;
        let mut report = TickReport::new(self.tick);

        let mut order = self.ids();
        order.shuffle(rng);

        for id in order {
            let Some(mut agent) = self.agents.remove(&id) else {
                report.skipped += 1;
                continue;
            };
            agent.activations += 1;
            let outcome = {
                let mut ctx = StepContext {
                    space: &mut *space,
                    roster: &mut *self,
                    params,
                    eaten: &mut report.eaten,
                };
                visit(&mut agent, &mut ctx)
            };
            self.agents.insert(id, agent);

            report.visited += 1;
            if outcome? == StepOutcome::Stalled {
                report.stalled += 1;
            }
        }

        Ok(report)
    }
}
