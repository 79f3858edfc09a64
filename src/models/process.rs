//! Process (schedulable work) model.
//!
//! A process is one unit of CPU work in a fixed, known-in-advance batch.
//! Batches are plain slices: schedulers borrow them read-only and build
//! their own working copies (remaining bursts, sorted orders).
//!
//! # Time Representation
//! All times are integer ticks relative to the simulation epoch (t=0).

use serde::{Deserialize, Serialize};

/// A process to be scheduled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Process {
    /// Process identifier. Unique within a batch, used only for display.
    pub id: i64,
    /// Earliest tick at which the process may run.
    pub arrival_time: i64,
    /// Total CPU time required (ticks).
    pub burst: i64,
    /// Scheduling priority (lower = more urgent).
    #[serde(default)]
    pub priority: i64,
}

impl Process {
    /// Creates a process arriving at t=0 with priority 0.
    pub fn new(id: i64, burst: i64) -> Self {
        Self {
            id,
            arrival_time: 0,
            burst,
            priority: 0,
        }
    }

    /// Sets the arrival time.
    pub fn with_arrival(mut self, arrival_time: i64) -> Self {
        self.arrival_time = arrival_time;
        self
    }

    /// Sets the scheduling priority.
    pub fn with_priority(mut self, priority: i64) -> Self {
        self.priority = priority;
        self
    }

    /// Whether the process may run at tick `t`.
    #[inline]
    pub fn has_arrived(&self, t: i64) -> bool {
        self.arrival_time <= t
    }
}

/// Sum of all bursts in a batch.
pub fn total_burst(processes: &[Process]) -> i64 {
    processes.iter().map(|p| p.burst).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_process_builder() {
        let p = Process::new(7, 5).with_arrival(3).with_priority(2);
        assert_eq!(p.id, 7);
        assert_eq!(p.burst, 5);
        assert_eq!(p.arrival_time, 3);
        assert_eq!(p.priority, 2);
    }

    #[test]
    fn test_has_arrived() {
        let p = Process::new(1, 4).with_arrival(2);
        assert!(!p.has_arrived(1));
        assert!(p.has_arrived(2));
        assert!(p.has_arrived(10));
    }

    #[test]
    fn test_total_burst() {
        let batch = vec![Process::new(1, 5), Process::new(2, 3), Process::new(3, 8)];
        assert_eq!(total_burst(&batch), 16);
        assert_eq!(total_burst(&[]), 0);
    }

    #[test]
    fn test_priority_defaults_when_absent() {
        let p: Process =
            serde_json::from_str(r#"{"id":1,"arrival_time":0,"burst":5}"#).unwrap();
        assert_eq!(p.priority, 0);
    }
}
