//! Input validation for scheduling runs.
//!
//! Checks a process submission before it reaches the scheduler.
//! Detects:
//! - Empty submissions
//! - Missing, zero, or negative burst times
//! - Negative arrival times
//! - Duplicate IDs
//! - Workloads whose completion times do not fit in `i64`
//!
//! The scheduler itself assumes validated input and never fails.

use std::collections::HashSet;
use std::fmt;

use crate::models::ProcessDescriptor;

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
    /// No processes were submitted.
    EmptyInput,
    /// A burst time is zero or negative.
    InvalidBurstTime,
    /// An arrival time is negative.
    NegativeArrivalTime,
    /// Two processes share the same ID.
    DuplicateId,
    /// A process submission string could not be parsed.
    MalformedProcess,
    /// A workload generator configuration cannot produce valid processes.
    InvalidWorkload,
    /// The latest possible completion time does not fit in `i64`.
    TimeOverflow,
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub(crate) fn empty_input() -> Self {
        Self::new(
            ValidationErrorKind::EmptyInput,
            "Please add at least one process",
        )
    }

    pub(crate) fn invalid_burst(name: &str, burst_time: i64) -> Self {
        Self::new(
            ValidationErrorKind::InvalidBurstTime,
            format!(
                "Process '{name}' has invalid burst time {burst_time} (must be greater than 0)"
            ),
        )
    }

    pub(crate) fn negative_arrival(name: &str, arrival_time: i64) -> Self {
        Self::new(
            ValidationErrorKind::NegativeArrivalTime,
            format!("Process '{name}' has negative arrival time {arrival_time}"),
        )
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Validates a process submission.
///
/// Checks:
/// 1. At least one process
/// 2. No duplicate process IDs
/// 3. Every burst time is greater than 0
/// 4. Every arrival time is 0 or later
/// 5. The latest arrival plus the total burst fits in `i64`, which bounds
///    every completion time the scheduler can produce
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_processes(processes: &[ProcessDescriptor]) -> ValidationResult {
    if processes.is_empty() {
        return Err(vec![ValidationError::empty_input()]);
    }

    let mut errors = Vec::new();
    let mut ids = HashSet::new();

    for p in processes {
        if !ids.insert(p.id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate process ID: {}", p.id),
            ));
        }

        if p.burst_time <= 0 {
            errors.push(ValidationError::invalid_burst(&p.name, p.burst_time));
        }

        if p.arrival_time < 0 {
            errors.push(ValidationError::negative_arrival(&p.name, p.arrival_time));
        }
    }

    if errors.is_empty() && completion_bound(processes).is_none() {
        errors.push(ValidationError::new(
            ValidationErrorKind::TimeOverflow,
            "Arrival and burst times are too large: completion time would overflow",
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Upper bound on any completion time: latest arrival plus total burst.
fn completion_bound(processes: &[ProcessDescriptor]) -> Option<i64> {
    let latest = processes.iter().map(|p| p.arrival_time).max().unwrap_or(0);
    processes
        .iter()
        .try_fold(latest, |t, p| t.checked_add(p.burst_time))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_processes() -> Vec<ProcessDescriptor> {
        vec![
            ProcessDescriptor::new(1, "A", 5),
            ProcessDescriptor::new(2, "B", 3).with_arrival(1),
            ProcessDescriptor::new(3, "C", 1).with_arrival(2),
        ]
    }

    #[test]
    fn test_valid_input() {
        assert!(validate_processes(&sample_processes()).is_ok());
    }

    #[test]
    fn test_empty_input() {
        let errors = validate_processes(&[]).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::EmptyInput);
        assert!(errors[0].message.contains("at least one process"));
    }

    #[test]
    fn test_zero_burst() {
        let processes = vec![ProcessDescriptor::new(1, "A", 0)];
        let errors = validate_processes(&processes).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::InvalidBurstTime));
    }

    #[test]
    fn test_negative_burst() {
        let processes = vec![ProcessDescriptor::new(1, "A", -2)];
        let errors = validate_processes(&processes).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::InvalidBurstTime && e.message.contains("'A'")));
    }

    #[test]
    fn test_negative_arrival() {
        let processes = vec![ProcessDescriptor::new(1, "A", 2).with_arrival(-1)];
        let errors = validate_processes(&processes).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::NegativeArrivalTime));
    }

    #[test]
    fn test_duplicate_id() {
        let processes = vec![
            ProcessDescriptor::new(1, "A", 2),
            ProcessDescriptor::new(1, "B", 3),
        ];
        let errors = validate_processes(&processes).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateId));
    }

    #[test]
    fn test_multiple_errors() {
        // Duplicate ID + zero burst + negative arrival
        let processes = vec![
            ProcessDescriptor::new(1, "A", 2),
            ProcessDescriptor::new(1, "B", 0).with_arrival(-4),
        ];
        let errors = validate_processes(&processes).unwrap_err();
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn test_time_overflow() {
        let half = i64::MAX / 2 + 1;
        let processes = vec![
            ProcessDescriptor::new(1, "A", half),
            ProcessDescriptor::new(2, "B", half),
        ];
        let errors = validate_processes(&processes).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::TimeOverflow);

        // Late arrival counts toward the bound
        let processes = vec![ProcessDescriptor::new(1, "A", 2).with_arrival(i64::MAX - 1)];
        let errors = validate_processes(&processes).unwrap_err();
        assert_eq!(errors[0].kind, ValidationErrorKind::TimeOverflow);
    }

    #[test]
    fn test_largest_fitting_workload() {
        let processes = vec![
            ProcessDescriptor::new(1, "A", i64::MAX / 2),
            ProcessDescriptor::new(2, "B", i64::MAX / 2).with_arrival(1),
        ];
        assert!(validate_processes(&processes).is_ok());
    }

    #[test]
    fn test_display_is_message() {
        let err = ValidationError::empty_input();
        assert_eq!(err.to_string(), err.message);
    }
}
