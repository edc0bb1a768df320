//! Scheduling error taxonomy.
//!
//! Invalid configuration is rejected at the boundary, before a policy
//! runs. Once a policy begins it runs to completion deterministically;
//! the only mid-run condition is the deadlock guard, which is surfaced
//! rather than silently hung.

use std::error::Error;
use std::fmt;

use crate::models::{ProcessId, MAX_PROCESSES};

/// Errors produced by registry construction and the scheduling policies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    /// Process count outside the supported `1..=MAX_PROCESSES` bound.
    InvalidProcessCount { count: usize },
    /// Two processes share the same id.
    DuplicateProcessId { id: ProcessId },
    /// A process was created with a zero burst time.
    ZeroBurstTime { id: ProcessId },
    /// Round Robin invoked with a zero time quantum.
    NonPositiveQuantum,
    /// A selection step found no eligible process and no future arrival
    /// to advance to.
    NoEligibleProcessDeadlock { time: u64 },
}

impl fmt::Display for ScheduleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScheduleError::InvalidProcessCount { count } => write!(
                f,
                "process count {count} outside supported range 1..={MAX_PROCESSES}"
            ),
            ScheduleError::DuplicateProcessId { id } => {
                write!(f, "duplicate process id P{id}")
            }
            ScheduleError::ZeroBurstTime { id } => {
                write!(f, "process P{id} has a zero burst time")
            }
            ScheduleError::NonPositiveQuantum => {
                write!(f, "round robin requires a positive time quantum")
            }
            ScheduleError::NoEligibleProcessDeadlock { time } => write!(
                f,
                "no eligible process and no future arrival at t={time}"
            ),
        }
    }
}

impl Error for ScheduleError {}
