//! Simulation domain models.
//!
//! Provides the input descriptor (`Process`) and the output structures
//! (`Timeline`, `ExecutionInterval`, `MetricsRow`) that every scheduling
//! discipline populates the same way.
//!
//! # Lifecycle
//!
//! | Type | Created by | Lifetime |
//! |------|-----------|----------|
//! | Process | input loader / caller | whole run, read-only |
//! | Timeline | one scheduler call | until rendered |
//! | ExecutionInterval | one scheduler call | owned by its Timeline |
//! | MetricsRow | one scheduler call | owned by its Timeline |

mod process;
mod timeline;

pub use process::{total_burst, Process};
pub use timeline::{ExecutionInterval, MetricsRow, Timeline};
