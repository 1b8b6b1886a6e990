pub mod input;
pub mod render;
pub mod state;

pub use input::TargetOrbit;
pub use render::SnapshotWriter;
pub use state::{App, RunOptions, RunSummary};

use anyhow::{Context, Result};
use std::time::Instant;

impl App {
    /// Runs ticks until the budget is spent, the flock is gone, or a tick fails.
    pub fn run(&mut self) -> Result<RunSummary> {
        tracing::info!(
            ticks = self.options.ticks,
            predators = self.sim.predators_enabled(),
            target_seeking = self.sim.target_seeking(),
            "Starting run"
        );

        while self.running {
            if self.sim.tick() >= self.options.ticks {
                self.running = false;
                break;
            }
            self.tick()?;
            if self.sim.population(murmuration_data::AgentKind::FlockMember) == 0 {
                self.metrics.log_event("flock_extinct", "no flock members remain");
                self.running = false;
            }
        }

        if let Some(writer) = self.snapshots.as_mut() {
            writer.flush()?;
        }

        let summary = self.summary();
        tracing::info!(
            ticks = summary.ticks,
            flock = summary.flock_remaining,
            eaten = summary.eaten_total,
            elapsed_ms = summary.elapsed_ms,
            "Run finished"
        );
        Ok(summary)
    }

    /// Advances the simulation once: move the target, step, record, emit.
    pub fn tick(&mut self) -> Result<()> {
        if let Some(orbit) = self.orbit.as_mut() {
            orbit.apply(&mut self.sim);
        }

        let next = self.sim.tick() + 1;
        let started = Instant::now();
        let report = self
            .sim
            .step()
            .with_context(|| format!("tick {next} failed"))?;
        self.metrics
            .record_tick(&report, self.sim.len(), started.elapsed());

        if let Some(writer) = self.snapshots.as_mut() {
            writer.write_frame(&self.sim.frame())?;
        }
        Ok(())
    }
}
