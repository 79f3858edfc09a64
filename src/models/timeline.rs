//! Timeline (simulation result) model.
//!
//! A timeline is everything one scheduler run produces: a title, one
//! execution interval per process and one metrics row per process. It is
//! fully materialized before it is handed to the report renderer.

use serde::{Deserialize, Serialize};

use crate::scheduler::ScheduleSummary;

/// One reported span in the timeline diagram.
///
/// For the preemptive and priority disciplines `stop` is the running
/// maximum completion time seen so far, not the end of a dispatch slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionInterval {
    /// Process the span is reported for.
    pub process_id: i64,
    /// Start tick.
    pub start: i64,
    /// Stop tick.
    pub stop: i64,
}

impl ExecutionInterval {
    /// Creates a new interval.
    pub fn new(process_id: i64, start: i64, stop: i64) -> Self {
        Self {
            process_id,
            start,
            stop,
        }
    }
}

/// Per-process timing metrics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricsRow {
    pub id: i64,
    pub priority: i64,
    pub burst: i64,
    pub arrival: i64,
    /// Time spent ready but not running.
    pub waiting: i64,
    /// Time from arrival to completion.
    pub turnaround: i64,
    /// Tick at which the process finished.
    pub completion: i64,
}

/// The result of running one scheduling discipline over a batch.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Timeline {
    /// Display title (e.g. "Round-robin").
    pub title: String,
    /// Execution intervals, one per process.
    pub intervals: Vec<ExecutionInterval>,
    /// Metrics rows, one per process, in the same order as `intervals`.
    pub rows: Vec<MetricsRow>,
    /// Running maximum of completion times recorded so far.
    #[serde(skip)]
    horizon: i64,
}

impl Timeline {
    /// Creates an empty timeline with the given title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    /// Records a row together with an explicitly computed interval.
    pub fn record(&mut self, row: MetricsRow, interval: ExecutionInterval) {
        self.horizon = self.horizon.max(row.completion);
        self.rows.push(row);
        self.intervals.push(interval);
    }

    /// Records a row whose interval stops at the running maximum completion.
    ///
    /// The interval starts at `waiting + arrival`.
    pub fn record_cumulative(&mut self, row: MetricsRow) {
        self.horizon = self.horizon.max(row.completion);
        let interval = ExecutionInterval::new(row.id, row.waiting + row.arrival, self.horizon);
        self.rows.push(row);
        self.intervals.push(interval);
    }

    /// Number of processes recorded.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Latest completion across all rows, `None` when empty.
    pub fn max_completion(&self) -> Option<i64> {
        self.rows.iter().map(|r| r.completion).max()
    }

    /// Finds the metrics row for a process id.
    pub fn row_for(&self, id: i64) -> Option<&MetricsRow> {
        self.rows.iter().find(|r| r.id == id)
    }

    /// Aggregate metrics, `None` for an empty timeline.
    pub fn summary(&self) -> Option<ScheduleSummary> {
        ScheduleSummary::calculate(&self.rows)
    }
}
