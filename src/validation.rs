//! Input validation for process batches.
//!
//! Checks structural integrity of a batch before simulation. Detects:
//! - Duplicate process IDs
//! - Bursts below one tick
//! - Negative arrival times
//! - Batches whose total work and arrival span exceed [`MAX_HORIZON`]
//!
//! A zero burst never drains, so SJF and round-robin would never
//! terminate on such a batch.

use std::collections::HashSet;

use crate::models::Process;

/// Upper bound on the sum of all bursts plus all arrival times.
///
/// Every clock value, waiting time and completion time a discipline
/// computes stays within a small multiple of this sum, so a batch under
/// the bound cannot overflow `i64`.
pub const MAX_HORIZON: i64 = i64::MAX / 4;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two processes share the same ID.
    DuplicateId,
    /// A process requires less than one tick of CPU time.
    InvalidBurst,
    /// A process arrives before the simulation epoch.
    NegativeArrival,
    /// Total bursts plus arrivals exceed [`MAX_HORIZON`].
    HorizonTooLarge,
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a process batch.
///
/// Checks:
/// 1. No duplicate process IDs
/// 2. Every burst is at least 1
/// 3. Every arrival time is at least 0
/// 4. Bursts plus arrivals sum to at most [`MAX_HORIZON`]
///
/// An empty batch is valid.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_batch(processes: &[Process]) -> ValidationResult {
    let mut errors = Vec::new();
    let mut ids = HashSet::new();
    let mut horizon: i128 = 0;

    for p in processes {
        horizon += i128::from(p.burst.max(0)) + i128::from(p.arrival_time.max(0));

        if !ids.insert(p.id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate process ID: {}", p.id),
            ));
        }

        if p.burst < 1 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidBurst,
                format!("Process {} has burst {}", p.id, p.burst),
            ));
        }

        if p.arrival_time < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeArrival,
                format!("Process {} arrives at {}", p.id, p.arrival_time),
            ));
        }
    }

    if horizon > i128::from(MAX_HORIZON) {
        errors.push(ValidationError::new(
            ValidationErrorKind::HorizonTooLarge,
            format!("Bursts and arrivals sum to {horizon}, limit is {MAX_HORIZON}"),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
