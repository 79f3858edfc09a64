//! cpu-schedule: simulate FCFS, SJF, priority and round-robin scheduling
//! over a batch file and print a report for each.
//!
//! Usage: cpu-schedule <batch-file>

use std::io;
use std::process::ExitCode;

use cpu_schedule::driver::run_args;
use cpu_schedule::init_tracing;

fn main() -> ExitCode {
    init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match run_args(&args, &mut out) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::from(e.exit_code())
        }
    }
}
