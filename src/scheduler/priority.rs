//! Non-preemptive priority scheduling.
//!
//! # Algorithm
//!
//! 1. Order a working copy of the batch by ascending priority value.
//!    Equal priorities keep their batch order (lowest index first).
//! 2. Waiting time follows the recurrence
//!    `w[0] = 0`, `w[i] = w[i-1] + burst[i-1] - arrival[i]`.
//!    Values are not clamped and may go negative.
//! 3. Turnaround is `burst + waiting`.
//!
//! The recurrence differs from the textbook cumulative sum: each step
//! only looks at its direct predecessor in execution order.
//!
//! # Complexity
//! O(n log n)

use tracing::{debug, info};

use super::CpuScheduler;
use crate::models::{MetricsRow, Process, Timeline};

/// Non-preemptive priority scheduler (lower value runs first).
#[derive(Debug, Clone, Copy, Default)]
pub struct Priority;

/// Batch indices in execution order.
///
/// Sorting by `(priority, index)` makes the tie-break explicit instead of
/// depending on the stability of the sort.
pub(crate) fn execution_order(processes: &[Process]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..processes.len()).collect();
    order.sort_by_key(|&i| (processes[i].priority, i));
    order
}

/// Waiting times for processes already in execution order.
pub(crate) fn waiting_times(ordered: &[&Process]) -> Vec<i64> {
    let mut waiting = vec![0; ordered.len()];
    for i in 1..ordered.len() {
        waiting[i] = waiting[i - 1] + ordered[i - 1].burst - ordered[i].arrival_time;
    }
    waiting
}

impl CpuScheduler for Priority {
    fn name(&self) -> &'static str {
        "PRIORITY"
    }

    fn title(&self) -> &'static str {
        "Priority"
    }

    fn schedule(&self, processes: &[Process]) -> Timeline {
        let ordered: Vec<&Process> = execution_order(processes)
            .into_iter()
            .map(|i| &processes[i])
            .collect();
        let waiting = waiting_times(&ordered);
        let mut timeline = Timeline::new(self.title());

        for (p, &w) in ordered.iter().zip(&waiting) {
            debug!(pid = p.id, priority = p.priority, waiting = w, "priority dispatch");
            timeline.record_cumulative(MetricsRow {
                id: p.id,
                priority: p.priority,
                burst: p.burst,
                arrival: p.arrival_time,
                waiting: w,
                turnaround: p.burst + w,
                completion: p.burst + p.arrival_time + w,
            });
        }

        info!(processes = processes.len(), "priority schedule complete");
        timeline
    }
}
