//! Shortest-job-first scheduling (preemptive, shortest remaining time).
//!
//! # Algorithm
//!
//! Discrete ticks from t=0:
//! 1. Scan the batch for arrived processes with work left.
//! 2. The process chosen last tick keeps the CPU unless another eligible
//!    process has strictly less remaining work.
//! 3. Otherwise the least remaining burst wins; ties go to the lowest
//!    batch index.
//! 4. Run the chosen process for one tick. A tick with nothing eligible
//!    is idle.
//!
//! Waiting time is `finish - burst - arrival`, clamped at zero.
//!
//! Only an arrival can change the outcome of step 2, so the loop advances
//! from event to event: the chosen process runs until it finishes or the
//! next process arrives, and idle stretches jump straight to the next
//! arrival. The dispatch sequence is the same as ticking one step at a time.
//!
//! # Complexity
//! O(n²): at most one selection per arrival and per completion.

use tracing::{debug, info, trace};

use super::CpuScheduler;
use crate::models::{MetricsRow, Process, Timeline};

/// Preemptive shortest-remaining-time-first scheduler.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sjf;

/// A contiguous run of CPU ticks given to one process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Dispatch {
    pub start: i64,
    pub ticks: i64,
    pub index: usize,
}

/// Raw outcome of the simulation, in batch order.
#[derive(Debug, Clone, Default)]
pub(crate) struct SjfRun {
    pub waiting: Vec<i64>,
    pub dispatches: Vec<Dispatch>,
}

/// Picks the process to run at tick `t`.
///
/// `incumbent` is the process that ran on the previous tick and has not
/// finished.
fn select(
    processes: &[Process],
    remaining: &[i64],
    t: i64,
    incumbent: Option<usize>,
) -> Option<usize> {
    let mut best = incumbent;
    let mut best_remaining = incumbent.map_or(i64::MAX, |i| remaining[i]);

    for (i, p) in processes.iter().enumerate() {
        if p.has_arrived(t) && remaining[i] > 0 && remaining[i] < best_remaining {
            best = Some(i);
            best_remaining = remaining[i];
        }
    }

    best
}

/// Earliest arrival after `t` among processes with work left.
fn next_arrival(processes: &[Process], remaining: &[i64], t: i64) -> Option<i64> {
    processes
        .iter()
        .zip(remaining)
        .filter(|(p, r)| **r > 0 && p.arrival_time > t)
        .map(|(p, _)| p.arrival_time)
        .min()
}

pub(crate) fn simulate(processes: &[Process]) -> SjfRun {
    let n = processes.len();
    let mut remaining: Vec<i64> = processes.iter().map(|p| p.burst).collect();
    let mut run = SjfRun {
        waiting: vec![0; n],
        dispatches: Vec::new(),
    };
    let mut complete = 0;
    let mut incumbent: Option<usize> = None;
    let mut t: i64 = 0;

    while complete < n {
        let Some(i) = select(processes, &remaining, t, incumbent) else {
            let Some(next) = next_arrival(processes, &remaining, t) else {
                // Only non-positive bursts remain; they never drain.
                break;
            };
            trace!(from = t, to = next, "sjf idle");
            t = next;
            continue;
        };

        let ticks = next_arrival(processes, &remaining, t)
            .map_or(remaining[i], |a| remaining[i].min(a - t));
        remaining[i] -= ticks;
        let extends = |d: &&mut Dispatch| d.index == i && d.start + d.ticks == t;
        if let Some(last) = run.dispatches.last_mut().filter(extends) {
            last.ticks += ticks;
        } else {
            run.dispatches.push(Dispatch { start: t, ticks, index: i });
        }
        incumbent = Some(i);
        t += ticks;

        if remaining[i] == 0 {
            let p = &processes[i];
            let finish = t;
            run.waiting[i] = (finish - p.burst - p.arrival_time).max(0);
            complete += 1;
            incumbent = None;
            debug!(pid = p.id, finish, waiting = run.waiting[i], "sjf completion");
        }
    }

    run
}

impl CpuScheduler for Sjf {
    fn name(&self) -> &'static str {
        "SJF"
    }

    fn title(&self) -> &'static str {
        "Shortest-job-first"
    }

    fn schedule(&self, processes: &[Process]) -> Timeline {
        let run = simulate(processes);
        let mut timeline = Timeline::new(self.title());

        for (p, &waiting) in processes.iter().zip(&run.waiting) {
            timeline.record_cumulative(MetricsRow {
                id: p.id,
                priority: p.priority,
                burst: p.burst,
                arrival: p.arrival_time,
                waiting,
                turnaround: p.burst + waiting,
                completion: p.burst + p.arrival_time + waiting,
            });
        }

        info!(
            processes = processes.len(),
            slices = run.dispatches.len(),
            "sjf schedule complete"
        );
        timeline
    }
}
