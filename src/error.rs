//! Error types for loading, validating and reporting.
//!
//! Every error is terminal for a CLI run: there is no retry or partial
//! recovery anywhere in the simulator.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::validation::ValidationError;

/// Simulator operation result
pub type SimResult<T> = Result<T, SimError>;

/// Simulator errors
#[derive(Error, Debug)]
pub enum SimError {
    #[error("invalid args: expected exactly one scheduling file, got {0} argument(s)")]
    Usage(usize),

    #[error("error opening scheduling file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("error reading scheduling file: {0}")]
    Read(#[source] io::Error),

    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("line {line}: wrong number of fields, expected {expected}, found {found}")]
    FieldCount {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("invalid process batch: {}", summarize(.0))]
    InvalidBatch(Vec<ValidationError>),

    #[error("invalid quantum {0}: must be at least 1 tick")]
    InvalidQuantum(i64),

    #[error("error writing report: {0}")]
    Output(#[from] io::Error),
}

impl SimError {
    /// Process exit status for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            SimError::Usage(_) => 2,
            _ => 1,
        }
    }
}

fn summarize(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}
