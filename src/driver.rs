//! End-to-end run: arguments to batch to reports.

use std::io::Write;
use std::path::Path;

use tracing::{debug, info};

use crate::config::SimulationConfig;
use crate::error::{SimError, SimResult};
use crate::input::open_batch;
use crate::models::Process;
use crate::report::write_report;
use crate::scheduler::{standard_suite, CpuScheduler};
use crate::validation::validate_batch;

/// Validates a batch and writes one report block per discipline.
///
/// Nothing is written when validation fails.
pub fn run_batch<W: Write>(
    processes: &[Process],
    config: &SimulationConfig,
    out: &mut W,
) -> SimResult<()> {
    if let Err(errors) = validate_batch(processes) {
        for e in &errors {
            debug!(kind = ?e.kind, "{}", e.message);
        }
        return Err(SimError::InvalidBatch(errors));
    }

    for scheduler in standard_suite(config) {
        let timeline = scheduler.schedule(processes);
        write_report(out, &timeline)?;
    }
    out.flush()?;
    Ok(())
}

/// Loads the batch at `path` and runs it with `config`.
pub fn run_file<W: Write>(
    path: impl AsRef<Path>,
    config: &SimulationConfig,
    out: &mut W,
) -> SimResult<()> {
    let processes = open_batch(path)?;
    info!(processes = processes.len(), "simulating batch");
    run_batch(&processes, config, out)
}

/// Runs the CLI with its arguments (program name excluded).
pub fn run_args<W: Write>(args: &[String], out: &mut W) -> SimResult<()> {
    let [path] = args else {
        return Err(SimError::Usage(args.len()));
    };
    run_file(path, &SimulationConfig::default(), out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usage_errors() {
        let mut out = Vec::new();
        assert!(matches!(run_args(&[], &mut out), Err(SimError::Usage(0))));
        let two = vec!["a.csv".to_string(), "b.csv".to_string()];
        assert!(matches!(run_args(&two, &mut out), Err(SimError::Usage(2))));
        assert!(out.is_empty());
    }

    #[test]
    fn test_invalid_batch_writes_nothing() {
        let mut out = Vec::new();
        let batch = vec![Process::new(1, 0)];
        let err = run_batch(&batch, &SimulationConfig::default(), &mut out).unwrap_err();
        assert!(matches!(err, SimError::InvalidBatch(_)));
        assert!(out.is_empty());
    }

    #[test]
    fn test_reports_in_order() {
        let mut out = Vec::new();
        let batch = vec![Process::new(1, 5), Process::new(2, 3).with_arrival(1)];
        run_batch(&batch, &SimulationConfig::default(), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        let positions: Vec<usize> = [
            "First-come, first-serve",
            "Shortest-job-first",
            "Priority",
            "Round-robin",
        ]
        .iter()
        .map(|title| text.find(title).unwrap())
        .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(text.matches("Schedule table").count(), 4);
    }
}
