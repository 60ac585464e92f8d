//! Input validation for simulation requests.
//!
//! The engine trusts its input; this module is the gate in front of it.
//! Detects:
//! - Empty process lists
//! - Empty or duplicate IDs
//! - Negative arrival times
//! - Non-positive burst times
//! - Missing priorities (when the algorithm needs them)
//! - Workloads whose timeline would overflow `i64`
//! - A zero round-robin quantum
//!
//! All problems are collected, not just the first one.

use std::collections::HashSet;
use std::fmt;

use crate::error::SchedError;
use crate::models::Process;
use crate::scheduler::SimulationRequest;

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
    /// No processes supplied.
    EmptyInput,
    /// A process has a blank ID.
    EmptyId,
    /// Two processes share the same ID.
    DuplicateId,
    /// Arrival time below zero.
    NegativeArrival,
    /// Burst time below one.
    NonPositiveBurst,
    /// A priority algorithm was chosen but a process has no priority.
    MissingPriority,
    /// Latest arrival plus total burst exceeds `i64::MAX`.
    TimeOverflow,
    /// Round-robin quantum below one.
    InvalidQuantum,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Validates a process list.
///
/// Checks:
/// 1. At least one process
/// 2. Every ID is non-blank and unique
/// 3. Arrival ≥ 0, burst ≥ 1
/// 4. Every process has a priority if `require_priority`
/// 5. `max(arrival) + sum(burst)` fits in `i64` (the clock never passes it)
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_processes(processes: &[Process], require_priority: bool) -> ValidationResult {
    let mut errors = Vec::new();

    if processes.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyInput,
            "At least one process is required",
        ));
    }

    let mut ids = HashSet::new();
    for (pos, p) in processes.iter().enumerate() {
        if p.id.trim().is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyId,
                format!("Process #{} has an empty ID", pos + 1),
            ));
        } else if !ids.insert(p.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate process ID: {}", p.id),
            ));
        }

        if p.arrival_time < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeArrival,
                format!("Process '{}' has negative arrival time {}", p.id, p.arrival_time),
            ));
        }

        if p.burst_time < 1 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveBurst,
                format!("Process '{}' has burst time {} (must be ≥ 1)", p.id, p.burst_time),
            ));
        }

        if require_priority && p.priority.is_none() {
            errors.push(ValidationError::new(
                ValidationErrorKind::MissingPriority,
                format!("Process '{}' has no priority", p.id),
            ));
        }
    }

    let latest_arrival = processes
        .iter()
        .map(|p| p.arrival_time.max(0))
        .max()
        .unwrap_or(0);
    let horizon = processes
        .iter()
        .try_fold(latest_arrival, |acc, p| acc.checked_add(p.burst_time.max(0)));
    if horizon.is_none() {
        errors.push(ValidationError::new(
            ValidationErrorKind::TimeOverflow,
            "Arrival and burst times are too large to simulate",
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates a round-robin quantum. `None` selects the default.
pub fn validate_quantum(quantum: Option<u32>) -> ValidationResult {
    if quantum == Some(0) {
        return Err(vec![ValidationError::new(
            ValidationErrorKind::InvalidQuantum,
            "Time quantum must be at least 1",
        )]);
    }
    Ok(())
}

/// Validates a full request: its processes plus the quantum.
///
/// Priorities are required only for priority algorithms.
pub fn validate_request(request: &SimulationRequest) -> ValidationResult {
    let mut errors = validate_processes(&request.processes, request.algorithm.uses_priority())
        .err()
        .unwrap_or_default();

    if request.algorithm.uses_quantum() {
        if let Err(quantum_errors) = validate_quantum(request.quantum) {
            errors.extend(quantum_errors);
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates input for running every algorithm over the same processes.
///
/// Priorities are optional (missing ones take the simulator default);
/// the quantum is always checked since round robin is among the runs.
pub fn validate_comparison(processes: &[Process], quantum: Option<u32>) -> ValidationResult {
    let mut errors = validate_processes(processes, false).err().unwrap_or_default();
    if let Err(quantum_errors) = validate_quantum(quantum) {
        errors.extend(quantum_errors);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates a request, converting failures into [`SchedError::InvalidInput`].
pub fn ensure_valid(request: &SimulationRequest) -> Result<(), SchedError> {
    validate_request(request).map_err(SchedError::InvalidInput)
}
