//! Scheduling disciplines and aggregate metrics.
//!
//! Four classical CPU scheduling disciplines, each simulated over a fixed
//! batch that is treated as read-only:
//!
//! | Discipline | Preemptive | Selection |
//! |-----------|-----------|-----------|
//! | [`Fcfs`] | no | input order |
//! | [`Sjf`] | yes, per tick | least remaining burst |
//! | [`Priority`] | no | lowest priority value |
//! | [`RoundRobin`] | yes, per quantum | cyclic cursor |
//!
//! Every discipline produces a [`Timeline`]; [`ScheduleSummary`] derives
//! the averages and throughput shown under the schedule table.
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

mod fcfs;
mod kpi;
mod priority;
mod round_robin;
mod sjf;

pub use fcfs::Fcfs;
pub use kpi::ScheduleSummary;
pub use priority::Priority;
pub use round_robin::RoundRobin;
pub use sjf::Sjf;

use std::fmt::Debug;

use crate::config::SimulationConfig;
use crate::models::{Process, Timeline};

/// A scheduling discipline that simulates a whole batch in one call.
///
/// Implementations must not retain state between calls; two calls on the
/// same batch yield identical timelines.
pub trait CpuScheduler: Send + Sync + Debug {
    /// Short name (e.g. "FCFS", "RR").
    fn name(&self) -> &'static str;

    /// Report title (e.g. "Round-robin").
    fn title(&self) -> &'static str;

    /// Simulates the batch and returns its timeline.
    fn schedule(&self, processes: &[Process]) -> Timeline;
}

/// The four disciplines in report order: FCFS, SJF, Priority, Round-robin.
///
/// # Example
/// ```
/// use cpu_schedule::config::SimulationConfig;
/// use cpu_schedule::models::Process;
/// use cpu_schedule::scheduler::{standard_suite, CpuScheduler};
///
/// let batch = vec![Process::new(1, 5), Process::new(2, 3).with_arrival(1)];
/// let titles: Vec<_> = standard_suite(&SimulationConfig::default())
///     .iter()
///     .map(|s| s.schedule(&batch).title)
///     .collect();
/// assert_eq!(titles[0], "First-come, first-serve");
/// assert_eq!(titles.len(), 4);
/// ```
pub fn standard_suite(config: &SimulationConfig) -> Vec<Box<dyn CpuScheduler>> {
    vec![
        Box::new(Fcfs),
        Box::new(Sjf),
        Box::new(Priority),
        Box::new(RoundRobin::new(config.quantum)),
    ]
}
