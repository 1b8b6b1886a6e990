//! Read-only render state handed to rendering consumers after each tick.

use crate::agent::Agent;
use crate::scheduler::Scheduler;
use glam::DVec2;
use murmuration_data::{FrameSnapshot, RenderRecord};

/// One record per live agent, ordered by id.
pub fn render_records(scheduler: &Scheduler) -> Vec<RenderRecord> {
    scheduler.iter().map(Agent::render_record).collect()
}

pub fn frame(scheduler: &Scheduler, target: Option<DVec2>) -> FrameSnapshot {
    FrameSnapshot {
        tick: scheduler.tick(),
        target,
        agents: render_records(scheduler),
    }
}
