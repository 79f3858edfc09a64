//! Aggregate timing metrics.
//!
//! Computes the summary row shown under every schedule table from the
//! per-process metrics rows of one timeline.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Avg Waiting | mean(waiting) |
//! | Avg Turnaround | mean(turnaround) |
//! | Max Completion | latest completion time |
//! | Throughput | process count / max completion |
//!
//! All means are unweighted.

use serde::{Deserialize, Serialize};

use crate::models::MetricsRow;

/// Aggregate metrics over one timeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleSummary {
    /// Number of rows aggregated.
    pub process_count: usize,
    /// Mean waiting time (ticks).
    pub avg_waiting: f64,
    /// Mean turnaround time (ticks).
    pub avg_turnaround: f64,
    /// Latest completion time (ticks).
    pub max_completion: i64,
    /// Completed processes per tick. `None` when `max_completion <= 0`.
    pub throughput: Option<f64>,
}

impl ScheduleSummary {
    /// Computes aggregates from metrics rows.
    ///
    /// Returns `None` for an empty slice instead of dividing by zero.
    pub fn calculate(rows: &[MetricsRow]) -> Option<Self> {
        if rows.is_empty() {
            return None;
        }

        let count = rows.len() as f64;
        // Widened: per-row values are bounded, their sum over many rows is not.
        let total_waiting: i128 = rows.iter().map(|r| i128::from(r.waiting)).sum();
        let total_turnaround: i128 = rows.iter().map(|r| i128::from(r.turnaround)).sum();
        let max_completion = rows.iter().map(|r| r.completion).max().unwrap_or(0);

        let throughput = if max_completion > 0 {
            Some(count / max_completion as f64)
        } else {
            None
        };

        Some(Self {
            process_count: rows.len(),
            avg_waiting: total_waiting as f64 / count,
            avg_turnaround: total_turnaround as f64 / count,
            max_completion,
            throughput,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(id: i64, waiting: i64, turnaround: i64, completion: i64) -> MetricsRow {
        MetricsRow {
            id,
            priority: 0,
            burst: turnaround - waiting,
            arrival: completion - turnaround,
            waiting,
            turnaround,
            completion,
        }
    }

    #[test]
    fn test_summary_basic() {
        let rows = vec![row(1, 0, 5, 5), row(2, 4, 7, 8), row(3, 6, 14, 16)];
        let s = ScheduleSummary::calculate(&rows).unwrap();

        assert_eq!(s.process_count, 3);
        assert!((s.avg_waiting - 10.0 / 3.0).abs() < 1e-10);
        assert!((s.avg_turnaround - 26.0 / 3.0).abs() < 1e-10);
        assert_eq!(s.max_completion, 16);
        assert!((s.throughput.unwrap() - 0.1875).abs() < 1e-10);
    }

    #[test]
    fn test_summary_single_process() {
        let s = ScheduleSummary::calculate(&[row(1, 2, 6, 8)]).unwrap();
        assert!((s.avg_waiting - 2.0).abs() < 1e-10);
        assert!((s.avg_turnaround - 6.0).abs() < 1e-10);
        assert!((s.throughput.unwrap() - 1.0 / 8.0).abs() < 1e-10);
    }

    #[test]
    fn test_summary_uses_latest_not_last_completion() {
        let rows = vec![row(1, 0, 10, 10), row(2, 0, 3, 3)];
        let s = ScheduleSummary::calculate(&rows).unwrap();
        assert_eq!(s.max_completion, 10);
        assert!((s.throughput.unwrap() - 0.2).abs() < 1e-10);
    }

    #[test]
    fn test_summary_empty() {
        assert!(ScheduleSummary::calculate(&[]).is_none());
    }

    #[test]
    fn test_summary_non_positive_horizon() {
        let s = ScheduleSummary::calculate(&[row(1, -5, -2, 0)]).unwrap();
        assert_eq!(s.throughput, None);
        assert!((s.avg_waiting + 5.0).abs() < 1e-10);
    }

    #[test]
    fn test_summary_large_values_do_not_overflow() {
        let big = i64::MAX / 4;
        let rows = vec![row(1, big, big + 1, big + 1), row(2, big, big + 1, big + 1)];
        let rows: Vec<MetricsRow> = rows.into_iter().cycle().take(8).collect();

        let s = ScheduleSummary::calculate(&rows).unwrap();
        assert!((s.avg_waiting - big as f64).abs() / (big as f64) < 1e-9);
        assert_eq!(s.max_completion, big + 1);
    }
}
