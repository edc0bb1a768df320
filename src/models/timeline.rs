//! Timeline (Gantt sequence) model.
//!
//! A timeline is the ordered sequence of dispatch and idle slices a
//! policy produced. Slices are contiguous from t=0 and the sequence
//! grows dynamically — the idle-stepping policies can produce long runs
//! when arrivals are sparse.
//!
//! For FCFS/SJF/Priority each dispatch slice covers one full burst; for
//! Round Robin, one quantum-or-remainder execution.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ProcessId;

/// What occupies a slice of the timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SliceKind {
    /// The process with this id holds the CPU.
    Dispatch(ProcessId),
    /// No eligible process; the CPU sits idle.
    Idle,
}

impl fmt::Display for SliceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SliceKind::Dispatch(id) => write!(f, "P{id}"),
            SliceKind::Idle => write!(f, "IDLE"),
        }
    }
}

/// One atomic unit of the rendered execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slice {
    /// Start time (inclusive).
    pub start: u64,
    /// End time (exclusive). Always greater than `start`.
    pub end: u64,
    /// Dispatch or idle.
    pub kind: SliceKind,
}

impl Slice {
    /// Creates a dispatch slice for the given process.
    pub fn dispatch(id: ProcessId, start: u64, end: u64) -> Self {
        Self {
            start,
            end,
            kind: SliceKind::Dispatch(id),
        }
    }

    /// Creates an idle slice.
    pub fn idle(start: u64, end: u64) -> Self {
        Self {
            start,
            end,
            kind: SliceKind::Idle,
        }
    }

    /// Slice length in time units.
    #[inline]
    pub fn duration(&self) -> u64 {
        self.end - self.start
    }

    /// Whether this slice dispatches the given process.
    pub fn dispatches(&self, id: ProcessId) -> bool {
        self.kind == SliceKind::Dispatch(id)
    }

    /// Whether this is an idle slice.
    pub fn is_idle(&self) -> bool {
        self.kind == SliceKind::Idle
    }
}

/// An ordered sequence of execution/idle slices.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timeline {
    slices: Vec<Slice>,
}

impl Timeline {
    /// Creates an empty timeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a slice.
    pub fn push(&mut self, slice: Slice) {
        self.slices.push(slice);
    }

    /// The slices in dispatch order.
    pub fn slices(&self) -> &[Slice] {
        &self.slices
    }

    /// Number of slices.
    pub fn slice_count(&self) -> usize {
        self.slices.len()
    }

    /// Whether the timeline has no slices.
    pub fn is_empty(&self) -> bool {
        self.slices.is_empty()
    }

    /// Final simulated time: the end of the last slice, 0 when empty.
    pub fn span(&self) -> u64 {
        self.slices.last().map(|s| s.end).unwrap_or(0)
    }

    /// Total time the CPU was dispatched.
    pub fn busy_time(&self) -> u64 {
        self.slices
            .iter()
            .filter(|s| !s.is_idle())
            .map(Slice::duration)
            .sum()
    }

    /// Total time the CPU sat idle.
    pub fn idle_time(&self) -> u64 {
        self.slices
            .iter()
            .filter(|s| s.is_idle())
            .map(Slice::duration)
            .sum()
    }

    /// All slices dispatching the given process.
    pub fn slices_for_process(&self, id: ProcessId) -> Vec<&Slice> {
        self.slices.iter().filter(|s| s.dispatches(id)).collect()
    }

    /// Completion time of the given process: the end of its last slice.
    pub fn completion_of(&self, id: ProcessId) -> Option<u64> {
        self.slices
            .iter()
            .filter(|s| s.dispatches(id))
            .map(|s| s.end)
            .max()
    }
}
