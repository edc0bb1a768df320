//! Process registry.
//!
//! Holds the fixed set of processes for one simulation run. Policies
//! mutate per-process scheduling state in place; `reset` restores the
//! starting conditions between successive policy invocations so every
//! algorithm observes the same workload.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::{Process, ProcessId};
use crate::error::ScheduleError;

/// Largest supported process count per run.
pub const MAX_PROCESSES: usize = 10;

/// An ordered, fixed-size-per-run set of processes.
///
/// Construction validates the input so the policies can run as total
/// functions: the count must be `1..=MAX_PROCESSES`, ids must be unique,
/// and every burst must be positive (a zero burst would never be selected
/// by the completion loops and the run would not terminate).
///
/// The set is `Clone`, so all four policies can be compared over
/// independent copies of the same workload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessSet {
    processes: Vec<Process>,
}

impl ProcessSet {
    /// Creates a registry from the given processes, in creation order.
    ///
    /// # Errors
    /// - [`ScheduleError::InvalidProcessCount`] if the count is 0 or
    ///   exceeds [`MAX_PROCESSES`].
    /// - [`ScheduleError::DuplicateProcessId`] if two processes share an id.
    /// - [`ScheduleError::ZeroBurstTime`] if any burst time is 0.
    pub fn new(processes: Vec<Process>) -> Result<Self, ScheduleError> {
        if processes.is_empty() || processes.len() > MAX_PROCESSES {
            return Err(ScheduleError::InvalidProcessCount {
                count: processes.len(),
            });
        }

        let mut seen = HashSet::new();
        for p in &processes {
            if !seen.insert(p.id) {
                return Err(ScheduleError::DuplicateProcessId { id: p.id });
            }
            if p.burst_time == 0 {
                return Err(ScheduleError::ZeroBurstTime { id: p.id });
            }
        }

        Ok(Self { processes })
    }

    /// Restores every process's `remaining_time` to its `burst_time`.
    ///
    /// `waiting_time` and `turnaround_time` are left untouched: they are
    /// recomputed, not accumulated, by the next run.
    pub fn reset(&mut self) {
        for p in &mut self.processes {
            p.remaining_time = p.burst_time;
        }
    }

    /// Number of processes.
    pub fn len(&self) -> usize {
        self.processes.len()
    }

    /// Whether the registry is empty. Always `false` for a validated set.
    pub fn is_empty(&self) -> bool {
        self.processes.is_empty()
    }

    /// The processes in creation order.
    pub fn processes(&self) -> &[Process] {
        &self.processes
    }

    /// Mutable access in creation order. Policies use this to update
    /// `remaining_time` and record metrics during a run.
    pub fn processes_mut(&mut self) -> &mut [Process] {
        &mut self.processes
    }

    /// The process at the given registry index.
    pub fn get(&self, index: usize) -> Option<&Process> {
        self.processes.get(index)
    }

    /// Finds a process by id.
    pub fn by_id(&self, id: ProcessId) -> Option<&Process> {
        self.processes.iter().find(|p| p.id == id)
    }

    /// Number of processes that still owe CPU time.
    pub fn pending_count(&self) -> usize {
        self.processes.iter().filter(|p| p.is_pending()).count()
    }
}
