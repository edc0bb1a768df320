//! Scheduling policies.
//!
//! Each policy is a small stateless dispatcher over a [`ProcessSet`]:
//! it observes a reset registry, mutates `remaining_time` while it
//! runs, records waiting/turnaround metrics as processes complete, and
//! returns the [`Timeline`] of dispatch and idle slices it produced.
//!
//! # Disciplines
//!
//! | Policy | Selection | Preemption |
//! |--------|-----------|------------|
//! | [`Fcfs`] | registry order | none |
//! | [`Sjf`] | smallest burst among arrived | none |
//! | [`RoundRobin`] | fixed-order pass | quantum |
//! | [`Priority`] | smallest priority value among arrived | none |
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3

mod fcfs;
mod priority;
mod round_robin;
mod sjf;

pub use fcfs::Fcfs;
pub use priority::Priority;
pub use round_robin::RoundRobin;
pub use sjf::Sjf;

use std::fmt::Debug;

use crate::error::ScheduleError;
use crate::models::{Process, ProcessSet, Slice, Timeline};

/// A scheduling discipline.
///
/// Policies never run concurrently against the same registry; the run
/// controller resets the registry between successive invocations so each
/// algorithm observes identical starting conditions.
pub trait SchedulingPolicy: Send + Sync + Debug {
    /// Policy name (e.g., "FCFS", "RR").
    fn name(&self) -> &'static str;

    /// Dispatches every process in the registry to completion.
    ///
    /// Returns the produced timeline; waiting and turnaround times are
    /// recorded on the registry's processes.
    fn run(&self, set: &mut ProcessSet) -> Result<Timeline, ScheduleError>;

    /// Policy description.
    fn description(&self) -> &'static str {
        self.name()
    }
}

/// Index of the eligible process minimizing `key`, ties broken by
/// lowest registry index (strict `<` scan keeps the first minimum).
///
/// Eligible means arrived by `now` and still owing CPU time.
pub(crate) fn select_eligible_min<K: Ord>(
    processes: &[Process],
    now: u64,
    key: impl Fn(&Process) -> K,
) -> Option<usize> {
    let mut best: Option<usize> = None;
    for (i, p) in processes.iter().enumerate() {
        if !p.has_arrived(now) || !p.is_pending() {
            continue;
        }
        match best {
            Some(b) if key(p) >= key(&processes[b]) => {}
            _ => best = Some(i),
        }
    }
    best
}

/// Shared non-preemptive dispatch loop for the eligible-minimum
/// policies (SJF and Priority).
///
/// When no process is eligible, emits a unit idle slice and advances
/// the clock by one time unit (fine-grained idle stepping). A selected
/// process runs its whole burst atomically.
pub(crate) fn run_eligible_min<K: Ord>(
    set: &mut ProcessSet,
    key: impl Fn(&Process) -> K,
) -> Timeline {
    let mut timeline = Timeline::new();
    let mut current_time: u64 = 0;
    let mut completed = 0;
    let total = set.len();

    while completed < total {
        match select_eligible_min(set.processes(), current_time, &key) {
            None => {
                timeline.push(Slice::idle(current_time, current_time + 1));
                current_time += 1;
            }
            Some(i) => {
                let p = &mut set.processes_mut()[i];
                let start = current_time;
                let waiting = current_time - p.arrival_time;
                p.record_metrics(waiting, waiting + p.burst_time);
                current_time += p.burst_time;
                p.remaining_time = 0;
                timeline.push(Slice::dispatch(p.id, start, current_time));
                completed += 1;
            }
        }
    }

    timeline
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Process;

    fn sample_set() -> ProcessSet {
        ProcessSet::new(vec![
            Process::new(1, 0, 5).with_priority(2),
            Process::new(2, 1, 3).with_priority(1),
            Process::new(3, 2, 1).with_priority(3),
        ])
        .unwrap()
    }

    fn all_policies() -> Vec<Box<dyn SchedulingPolicy>> {
        vec![
            Box::new(Fcfs),
            Box::new(Sjf),
            Box::new(RoundRobin::new(2)),
            Box::new(Priority),
        ]
    }

    #[test]
    fn test_select_eligible_min_ties_go_to_first_index() {
        let set = ProcessSet::new(vec![
            Process::new(1, 0, 4),
            Process::new(2, 0, 4),
            Process::new(3, 0, 2),
        ])
        .unwrap();

        // P3 has the smallest burst.
        assert_eq!(select_eligible_min(set.processes(), 0, |p| p.burst_time), Some(2));

        // Equal keys: first index wins.
        assert_eq!(select_eligible_min(set.processes(), 0, |_| 0u64), Some(0));

        // Nothing arrived yet.
        let late = ProcessSet::new(vec![Process::new(1, 5, 1)]).unwrap();
        assert_eq!(select_eligible_min(late.processes(), 0, |p| p.burst_time), None);
    }

    #[test]
    fn test_metric_invariants_hold_for_every_policy() {
        for policy in all_policies() {
            let mut set = sample_set();
            let timeline = policy.run(&mut set).unwrap();

            for p in set.processes() {
                let waiting = p.waiting_time.unwrap();
                let turnaround = p.turnaround_time.unwrap();
                assert_eq!(turnaround, waiting + p.burst_time, "{}", policy.name());

                let completion = timeline.completion_of(p.id).unwrap();
                assert_eq!(turnaround, completion - p.arrival_time, "{}", policy.name());
            }
        }
    }

    #[test]
    fn test_time_conservation_holds_for_every_policy() {
        for policy in all_policies() {
            let mut set = sample_set();
            let timeline = policy.run(&mut set).unwrap();
            assert_eq!(
                timeline.busy_time() + timeline.idle_time(),
                timeline.span(),
                "{}",
                policy.name()
            );

            // Every process's dispatched time sums to its burst.
            for p in set.processes() {
                let dispatched: u64 = timeline
                    .slices_for_process(p.id)
                    .iter()
                    .map(|s| s.duration())
                    .sum();
                assert_eq!(dispatched, p.burst_time, "{}", policy.name());
            }
        }
    }

    #[test]
    fn test_timelines_are_contiguous_from_zero() {
        for policy in all_policies() {
            let mut set = ProcessSet::new(vec![
                Process::new(1, 4, 2).with_priority(1),
                Process::new(2, 9, 3).with_priority(0),
            ])
            .unwrap();
            let timeline = policy.run(&mut set).unwrap();

            let mut expected_start = 0;
            for slice in timeline.slices() {
                assert_eq!(slice.start, expected_start, "{}", policy.name());
                assert!(slice.end > slice.start, "{}", policy.name());
                expected_start = slice.end;
            }
        }
    }
}
