//! Error types for the scheduler crate.
//!
//! - `SchedulerError`: construction-time precondition failures (fatal)
//! - `SchedulingError`: failures surfaced by `schedule` itself
//!
//! Rejected immediate submissions are deliberately absent: they are
//! recorded as diagnostics and never escalated.

use amber_beacon_core::WorkId;
use std::fmt;

/// Construction-time failures.
///
/// None of the scheduler's operations can function without its execution
/// backend, so construction fails outright.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchedulerError {
    /// The job-execution backend is not reachable from this host.
    ExecutionBackendUnavailable,
}

impl fmt::Display for SchedulerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ExecutionBackendUnavailable => {
                write!(f, "job execution backend unavailable")
            }
        }
    }
}

impl std::error::Error for SchedulerError {}

/// Errors from scheduling operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchedulingError {
    /// The timer service refused a deferred-trigger registration.
    TriggerRegistration { id: WorkId, reason: String },
}

impl fmt::Display for SchedulingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TriggerRegistration { id, reason } => {
                write!(f, "deferred trigger registration failed for {id}: {reason}")
            }
        }
    }
}

impl std::error::Error for SchedulingError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scheduler_error_display() {
        let err = SchedulerError::ExecutionBackendUnavailable;
        assert!(err.to_string().contains("backend unavailable"));
    }

    #[test]
    fn scheduling_error_display_names_the_work() {
        let err = SchedulingError::TriggerRegistration {
            id: WorkId::new("late-job"),
            reason: "quota exceeded".to_string(),
        };
        assert!(err.to_string().contains("late-job"));
        assert!(err.to_string().contains("quota exceeded"));
    }
}
