//! First-come, first-served scheduling.
//!
//! # Algorithm
//!
//! 1. Treat input order as arrival order (the batch is not re-sorted).
//! 2. Keep a service cursor: the total burst dispatched so far.
//! 3. A process that arrives after t=0 waits `max(0, service - arrival)`.
//! 4. A process arriving at t=0 (or earlier) carries the previous
//!    process's waiting time forward unchanged.
//!
//! # Complexity
//! O(n)

use tracing::{debug, info};

use super::CpuScheduler;
use crate::models::{ExecutionInterval, MetricsRow, Process, Timeline};

/// Non-preemptive first-come, first-served scheduler.
#[derive(Debug, Clone, Copy, Default)]
pub struct Fcfs;

impl CpuScheduler for Fcfs {
    fn name(&self) -> &'static str {
        "FCFS"
    }

    fn title(&self) -> &'static str {
        "First-come, first-serve"
    }

    fn schedule(&self, processes: &[Process]) -> Timeline {
        let mut timeline = Timeline::new(self.title());
        let mut service: i64 = 0;
        let mut waiting: i64 = 0;

        for p in processes {
            if p.arrival_time > 0 {
                waiting = (service - p.arrival_time).max(0);
            }
            // arrival <= 0: no subtraction, the previous waiting value carries over.

            let start = waiting + p.arrival_time;
            let completion = p.burst + p.arrival_time + waiting;
            service += p.burst;

            debug!(pid = p.id, start, completion, waiting, "fcfs dispatch");

            timeline.record(
                MetricsRow {
                    id: p.id,
                    priority: p.priority,
                    burst: p.burst,
                    arrival: p.arrival_time,
                    waiting,
                    turnaround: p.burst + waiting,
                    completion,
                },
                ExecutionInterval::new(p.id, start, service),
            );
        }

        info!(processes = processes.len(), service, "fcfs schedule complete");
        timeline
    }
}
