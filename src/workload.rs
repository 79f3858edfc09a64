//! Synthetic process batches.
//!
//! Generates reproducible batches from a seed: ids `1..=count`, arrival
//! times non-decreasing from t=0 (each gap drawn from `0..=max_gap`),
//! bursts and priorities drawn uniformly from inclusive ranges.

use rand::prelude::*;

use crate::models::Process;

/// Seeded generator for process batches.
///
/// # Example
/// ```
/// use cpu_schedule::workload::WorkloadGenerator;
///
/// let batch = WorkloadGenerator::new(7).with_count(5).generate();
/// assert_eq!(batch.len(), 5);
/// assert_eq!(batch[0].arrival_time, 0);
/// assert_eq!(batch, WorkloadGenerator::new(7).with_count(5).generate());
/// ```
#[derive(Debug, Clone)]
pub struct WorkloadGenerator {
    seed: u64,
    count: usize,
    burst_range: (i64, i64),
    max_gap: i64,
    priority_range: (i64, i64),
}

impl WorkloadGenerator {
    /// Creates a generator with defaults: 10 processes, bursts 1..=10,
    /// arrival gaps 0..=3, priorities 0..=5.
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            count: 10,
            burst_range: (1, 10),
            max_gap: 3,
            priority_range: (0, 5),
        }
    }

    /// Sets the number of processes.
    pub fn with_count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }

    /// Sets the inclusive burst range. The lower bound is raised to 1.
    pub fn with_burst_range(mut self, min: i64, max: i64) -> Self {
        let min = min.max(1);
        self.burst_range = (min, max.max(min));
        self
    }

    /// Sets the largest gap between consecutive arrivals.
    pub fn with_max_gap(mut self, max_gap: i64) -> Self {
        self.max_gap = max_gap.max(0);
        self
    }

    /// Sets the inclusive priority range.
    pub fn with_priority_range(mut self, min: i64, max: i64) -> Self {
        self.priority_range = (min, max.max(min));
        self
    }

    /// Generates the batch.
    pub fn generate(&self) -> Vec<Process> {
        let mut rng = StdRng::seed_from_u64(self.seed);
        let mut arrival = 0;
        let mut processes = Vec::with_capacity(self.count);

        for i in 0..self.count {
            if i > 0 {
                arrival += rng.random_range(0..=self.max_gap);
            }
            let burst = rng.random_range(self.burst_range.0..=self.burst_range.1);
            let priority = rng.random_range(self.priority_range.0..=self.priority_range.1);

            processes.push(
                Process::new(i as i64 + 1, burst)
                    .with_arrival(arrival)
                    .with_priority(priority),
            );
        }

        processes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::validate_batch;

    #[test]
    fn test_generated_batch_is_valid() {
        for seed in 0..10 {
            let batch = WorkloadGenerator::new(seed).with_count(25).generate();
            assert!(validate_batch(&batch).is_ok());
        }
    }

    #[test]
    fn test_arrivals_non_decreasing() {
        let batch = WorkloadGenerator::new(1).with_count(30).generate();
        assert!(batch
            .windows(2)
            .all(|w| w[0].arrival_time <= w[1].arrival_time));
    }

    #[test]
    fn test_ranges_respected() {
        let batch = WorkloadGenerator::new(2)
            .with_count(50)
            .with_burst_range(3, 4)
            .with_priority_range(-1, 1)
            .with_max_gap(0)
            .generate();

        assert!(batch.iter().all(|p| (3..=4).contains(&p.burst)));
        assert!(batch.iter().all(|p| (-1..=1).contains(&p.priority)));
        assert!(batch.iter().all(|p| p.arrival_time == 0));
    }

    #[test]
    fn test_zero_burst_range_is_raised() {
        let batch = WorkloadGenerator::new(3)
            .with_burst_range(0, 0)
            .generate();
        assert!(batch.iter().all(|p| p.burst == 1));
    }
}
