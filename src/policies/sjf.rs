//! Shortest Job First (non-preemptive).

use crate::error::ScheduleError;
use crate::models::{ProcessSet, Timeline};

use super::{run_eligible_min, SchedulingPolicy};

/// Shortest Job First dispatch, non-preemptive.
///
/// At each decision point, selects the arrived, unfinished process with
/// the smallest burst time (ties to the lowest registry index) and runs
/// it to completion. Arrival gating applies before the shortest-job
/// comparison: a long process that is the only one arrived runs first.
/// When nothing is eligible, the clock steps one idle unit at a time.
///
/// # Reference
/// Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3.2
#[derive(Debug, Clone, Copy, Default)]
pub struct Sjf;

impl SchedulingPolicy for Sjf {
    fn name(&self) -> &'static str {
        "SJF"
    }

    fn run(&self, set: &mut ProcessSet) -> Result<Timeline, ScheduleError> {
        Ok(run_eligible_min(set, |p| p.burst_time))
    }

    fn description(&self) -> &'static str {
        "Shortest Job First (non-preemptive)"
    }
}
