//! First-Come, First-Served.

use crate::error::ScheduleError;
use crate::models::{ProcessSet, Slice, Timeline};

use super::SchedulingPolicy;

/// First-Come, First-Served dispatch.
///
/// Non-preemptive; processes run in registry (creation) order, not
/// re-sorted by arrival time. If the input order does not match the
/// arrival order, execution follows the input order. When the next
/// process has not arrived yet, a single idle slice covers the gap.
///
/// Total over a valid registry; always returns `Ok`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Fcfs;

impl SchedulingPolicy for Fcfs {
    fn name(&self) -> &'static str {
        "FCFS"
    }

    fn run(&self, set: &mut ProcessSet) -> Result<Timeline, ScheduleError> {
        let mut timeline = Timeline::new();
        let mut current_time: u64 = 0;

        for p in set.processes_mut() {
            if current_time < p.arrival_time {
                timeline.push(Slice::idle(current_time, p.arrival_time));
                current_time = p.arrival_time;
            }

            let start = current_time;
            let waiting = current_time - p.arrival_time;
            p.record_metrics(waiting, waiting + p.burst_time);
            current_time += p.burst_time;
            timeline.push(Slice::dispatch(p.id, start, current_time));
        }

        Ok(timeline)
    }

    fn description(&self) -> &'static str {
        "First-Come, First-Served"
    }
}
