//! Priority scheduling (non-preemptive).

use crate::error::ScheduleError;
use crate::models::{ProcessSet, Timeline};

use super::{run_eligible_min, SchedulingPolicy};

/// Non-preemptive priority dispatch.
///
/// Structurally identical to [`Sjf`](super::Sjf), selecting by minimum
/// `priority` value instead of minimum burst time: lower value = higher
/// priority, ties to the lowest registry index, unit idle stepping when
/// nothing has arrived.
#[derive(Debug, Clone, Copy, Default)]
pub struct Priority;

impl SchedulingPolicy for Priority {
    fn name(&self) -> &'static str {
        "PRIORITY"
    }

    fn run(&self, set: &mut ProcessSet) -> Result<Timeline, ScheduleError> {
        Ok(run_eligible_min(set, |p| p.priority))
    }

    fn description(&self) -> &'static str {
        "Priority Scheduling (non-preemptive)"
    }
}
