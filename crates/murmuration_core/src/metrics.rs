//! Performance metrics collection for the simulation.
//!
//! Provides structured logging and counters for monitoring simulation
//! progress and predation.

use murmuration_data::TickReport;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

/// Running totals across a simulation run.
pub struct Metrics {
    tick_count: AtomicU64,
    agent_count: AtomicU64,
    prey_eaten: AtomicU64,
    stalled_steps: AtomicU64,
    log_interval: u64,
    start_time: Instant,
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new(1000)
    }
}

impl Metrics {
    /// Creates a collector that logs a summary every `log_interval` ticks.
    #[must_use]
    pub fn new(log_interval: u64) -> Self {
        Self {
            tick_count: AtomicU64::new(0),
            agent_count: AtomicU64::new(0),
            prey_eaten: AtomicU64::new(0),
            stalled_steps: AtomicU64::new(0),
            log_interval: log_interval.max(1),
            start_time: Instant::now(),
        }
    }

    /// Records a completed tick with its duration.
    pub fn record_tick(&self, report: &TickReport, agents: usize, duration: Duration) {
        self.tick_count.fetch_add(1, Ordering::Relaxed);
        self.agent_count.store(agents as u64, Ordering::Relaxed);
        self.prey_eaten
            .fetch_add(report.eaten.len() as u64, Ordering::Relaxed);
        self.stalled_steps
            .fetch_add(report.stalled as u64, Ordering::Relaxed);

        let tick = self.tick_count.load(Ordering::Relaxed);
        if tick % self.log_interval == 0 {
            tracing::info!(
                tick = report.tick,
                agents = agents,
                eaten_total = self.prey_eaten(),
                stalled_total = self.stalled_steps(),
                duration_us = duration.as_micros() as u64,
                "Simulation tick"
            );
        }
    }

    #[must_use]
    pub fn tick_count(&self) -> u64 {
        self.tick_count.load(Ordering::Relaxed)
    }

    #[must_use]
    pub fn agent_count(&self) -> u64 {
        self.agent_count.load(Ordering::Relaxed)
    }

    #[must_use]
    pub fn prey_eaten(&self) -> u64 {
        self.prey_eaten.load(Ordering::Relaxed)
    }

    #[must_use]
    pub fn stalled_steps(&self) -> u64 {
        self.stalled_steps.load(Ordering::Relaxed)
    }

    /// Gets elapsed time since metrics creation.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }

    /// Logs a simulation event.
    pub fn log_event(&self, event_type: &str, details: &str) {
        tracing::info!(
            event_type = event_type,
            details = details,
            "Simulation event"
        );
    }
}

/// Initialize tracing subscriber for logging.
///
/// `RUST_LOG` takes precedence over `default_level`. Calling this twice is harmless.
pub fn init_logging(default_level: &str) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));
    tracing::subscriber::set_global_default(
        tracing_subscriber::FmtSubscriber::builder()
            .with_env_filter(filter)
            .finish(),
    )
    .ok();
}
