//! Process model.
//!
//! A process is the unit of scheduling: it arrives at a fixed time,
//! requires a fixed amount of CPU time (its burst), and carries a
//! priority used only by priority dispatch.
//!
//! # Time Representation
//! All times are unsigned integer time units relative to a simulation
//! epoch (t=0). The consumer defines what one unit means.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5

use serde::{Deserialize, Serialize};

/// Stable process identifier, assigned at creation (1..N in creation order).
pub type ProcessId = u32;

/// A process to be scheduled.
///
/// `remaining_time` is the only field mutated while a policy runs; it
/// drives Round Robin preemption and the SJF/Priority completion checks.
/// `waiting_time` and `turnaround_time` are outputs, `None` until a
/// policy run completes, and are recomputed (not accumulated) by each run.
///
/// Invariants: `0 <= remaining_time <= burst_time`; on completion,
/// `turnaround_time == waiting_time + burst_time`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Process {
    /// Stable identifier.
    pub id: ProcessId,
    /// Time unit at which the process becomes eligible to run.
    pub arrival_time: u64,
    /// Total CPU time required. Must be positive.
    pub burst_time: u64,
    /// Scheduling priority. Lower value = higher priority.
    pub priority: i32,
    /// CPU time still owed. Initialized to `burst_time`.
    pub remaining_time: u64,
    /// Time spent eligible but not running. `None` until a run completes.
    pub waiting_time: Option<u64>,
    /// Time from arrival to completion. `None` until a run completes.
    pub turnaround_time: Option<u64>,
}

impl Process {
    /// Creates a new process with the given id, arrival time, and burst time.
    ///
    /// Priority defaults to 0; `remaining_time` starts at `burst_time`.
    pub fn new(id: ProcessId, arrival_time: u64, burst_time: u64) -> Self {
        Self {
            id,
            arrival_time,
            burst_time,
            priority: 0,
            remaining_time: burst_time,
            waiting_time: None,
            turnaround_time: None,
        }
    }

    /// Sets the scheduling priority (lower value = higher priority).
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Whether this process still owes CPU time.
    #[inline]
    pub fn is_pending(&self) -> bool {
        self.remaining_time > 0
    }

    /// Whether this process has arrived by `now`.
    #[inline]
    pub fn has_arrived(&self, now: u64) -> bool {
        self.arrival_time <= now
    }

    /// Completion time derived from recorded metrics, if the last run
    /// finished this process.
    pub fn completion_time(&self) -> Option<u64> {
        self.turnaround_time.map(|t| self.arrival_time + t)
    }

    /// Records the output metrics for a completed run.
    pub(crate) fn record_metrics(&mut self, waiting_time: u64, turnaround_time: u64) {
        self.waiting_time = Some(waiting_time);
        self.turnaround_time = Some(turnaround_time);
    }
}
