//! Round-robin scheduling (preemptive, fixed quantum).
//!
//! # Algorithm
//!
//! A cursor walks the batch. At each step the process under the cursor
//! either finishes (remaining <= quantum) or runs one full quantum.
//!
//! Cursor rule: from the last index wrap to 0; otherwise step forward only
//! if the next process has arrived by the current clock, else wrap to 0.
//! A process that has not yet arrived is therefore skipped until the
//! cursor reaches it with the clock past its arrival.
//!
//! Index 0 is dispatched regardless of its arrival time.
//!
//! Waiting (`clock - arrival - burst`) and turnaround (`clock - arrival`)
//! are recorded at completion without clamping.
//!
//! # Idle gaps
//! When the cursor wraps because index `k + 1` has not arrived and every
//! process up to `k` is already finished, no later step can make progress.
//! The clock then jumps to the arrival of index `k + 1`.

use tracing::{debug, info};

use super::CpuScheduler;
use crate::config::Quantum;
use crate::models::{MetricsRow, Process, Timeline};

/// Preemptive round-robin scheduler.
#[derive(Debug, Clone, Copy, Default)]
pub struct RoundRobin {
    quantum: Quantum,
}

/// Raw outcome of the dispatch loop, in batch order.
#[derive(Debug, Clone, Default)]
pub(crate) struct RoundRobinRun {
    pub waiting: Vec<i64>,
    pub turnaround: Vec<i64>,
    /// Clock after the last completion.
    pub clock: i64,
    /// Clock advance of every dispatch that did work.
    pub increments: Vec<i64>,
    /// Clock jumps over idle gaps.
    pub idle: Vec<i64>,
    /// How many times each process reached zero remaining burst.
    pub drained: Vec<u32>,
}

impl RoundRobin {
    /// Creates a scheduler with the given quantum.
    pub fn new(quantum: Quantum) -> Self {
        Self { quantum }
    }

    pub(crate) fn simulate(&self, processes: &[Process]) -> RoundRobinRun {
        let n = processes.len();
        let q = self.quantum.ticks();
        let mut remaining: Vec<i64> = processes.iter().map(|p| p.burst).collect();
        let mut run = RoundRobinRun {
            waiting: vec![0; n],
            turnaround: vec![0; n],
            drained: vec![0; n],
            ..RoundRobinRun::default()
        };
        let mut unfinished = n;
        let mut clock: i64 = 0;
        let mut count: usize = 0;

        while unfinished != 0 {
            let mut completed = false;

            if remaining[count] > 0 && remaining[count] <= q {
                clock += remaining[count];
                run.increments.push(remaining[count]);
                remaining[count] = 0;
                completed = true;
            } else if remaining[count] > 0 {
                remaining[count] -= q;
                clock += q;
                run.increments.push(q);
            }

            if completed {
                let p = &processes[count];
                run.waiting[count] = clock - p.arrival_time - p.burst;
                run.turnaround[count] = clock - p.arrival_time;
                run.drained[count] += 1;
                unfinished -= 1;
                debug!(pid = p.id, clock, waiting = run.waiting[count], "rr completion");
            }

            if count == n - 1 {
                count = 0;
            } else if processes[count + 1].arrival_time <= clock {
                count += 1;
            } else {
                if unfinished != 0 && remaining[..=count].iter().all(|&r| r == 0) {
                    let next = processes[count + 1].arrival_time;
                    debug!(from = clock, to = next, "rr idle until next arrival");
                    run.idle.push(next - clock);
                    clock = next;
                }
                count = 0;
            }
        }

        run.clock = clock;
        run
    }
}

impl CpuScheduler for RoundRobin {
    fn name(&self) -> &'static str {
        "RR"
    }

    fn title(&self) -> &'static str {
        "Round-robin"
    }

    fn schedule(&self, processes: &[Process]) -> Timeline {
        let run = self.simulate(processes);
        let mut timeline = Timeline::new(self.title());

        for (i, p) in processes.iter().enumerate() {
            let waiting = run.waiting[i];
            timeline.record_cumulative(MetricsRow {
                id: p.id,
                priority: p.priority,
                burst: p.burst,
                arrival: p.arrival_time,
                waiting,
                turnaround: run.turnaround[i],
                completion: p.burst + p.arrival_time + waiting,
            });
        }

        info!(
            processes = processes.len(),
            quantum = self.quantum.ticks(),
            clock = run.clock,
            "round-robin schedule complete"
        );
        timeline
    }
}
