//! CPU scheduling simulator.
//!
//! Runs a fixed, known-in-advance batch of processes through four classical
//! scheduling disciplines and reports per-process timing metrics and an
//! execution timeline for each. Nothing here is a live scheduler: every
//! run is an offline computation over data already in memory.
//!
//! # Modules
//!
//! - **`models`**: Domain types (`Process`, `Timeline`, `ExecutionInterval`, `MetricsRow`)
//! - **`scheduler`**: `CpuScheduler` trait, FCFS / SJF / Priority / Round-robin, `ScheduleSummary`
//! - **`config`**: `SimulationConfig` and the round-robin `Quantum`
//! - **`input`**: Delimited record loader
//! - **`validation`**: Batch integrity checks (duplicate IDs, bursts, arrivals)
//! - **`report`**: Banner, timeline diagram and metrics table rendering
//! - **`workload`**: Seeded synthetic batches
//! - **`driver`**: CLI entry points (`run_args`, `run_file`, `run_batch`)
//!
//! # Example
//!
//! ```
//! use cpu_schedule::config::SimulationConfig;
//! use cpu_schedule::input::load_processes;
//! use cpu_schedule::scheduler::{standard_suite, CpuScheduler};
//!
//! let batch = load_processes("1,5,0\n2,3,1\n3,8,2\n".as_bytes()).unwrap();
//! for scheduler in standard_suite(&SimulationConfig::default()) {
//!     let timeline = scheduler.schedule(&batch);
//!     assert_eq!(timeline.rows.len(), 3);
//! }
//! ```
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

pub mod config;
pub mod driver;
pub mod error;
pub mod input;
mod logging;
pub mod models;
pub mod report;
pub mod scheduler;
pub mod validation;
pub mod workload;

pub use error::{SimError, SimResult};
pub use logging::init_tracing;
