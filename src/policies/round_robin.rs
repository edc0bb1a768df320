//! Round Robin.

use crate::error::ScheduleError;
use crate::models::{ProcessSet, Slice, Timeline};

use super::SchedulingPolicy;

/// Round Robin dispatch with a fixed time quantum.
///
/// Simplified variant: repeated fixed-order passes over the registry
/// rather than a rotating queue. Within one pass every arrived,
/// unfinished process receives one slice of `min(remaining, quantum)`
/// time units; the pass then repeats until all complete.
///
/// If a full pass executes nothing while processes remain, every
/// unfinished process arrives in the future; the clock jumps to the
/// earliest such arrival and an idle slice covers the gap, so the run
/// can never spin without advancing time.
#[derive(Debug, Clone, Copy)]
pub struct RoundRobin {
    /// Maximum CPU time granted per dispatch. Must be positive.
    pub quantum: u64,
}

impl RoundRobin {
    /// Creates a Round Robin policy with the given time quantum.
    ///
    /// The quantum is validated when the policy runs: `run` rejects a
    /// zero quantum with [`ScheduleError::NonPositiveQuantum`] before
    /// any scheduling begins.
    pub fn new(quantum: u64) -> Self {
        Self { quantum }
    }
}

impl SchedulingPolicy for RoundRobin {
    fn name(&self) -> &'static str {
        "RR"
    }

    fn run(&self, set: &mut ProcessSet) -> Result<Timeline, ScheduleError> {
        if self.quantum == 0 {
            return Err(ScheduleError::NonPositiveQuantum);
        }

        let mut timeline = Timeline::new();
        let mut current_time: u64 = 0;
        let mut completed = 0;
        let total = set.len();

        while completed < total {
            let mut executed_in_pass = false;

            for i in 0..total {
                let p = &mut set.processes_mut()[i];
                if !p.has_arrived(current_time) || !p.is_pending() {
                    continue;
                }

                let execute = p.remaining_time.min(self.quantum);
                timeline.push(Slice::dispatch(p.id, current_time, current_time + execute));
                p.remaining_time -= execute;
                current_time += execute;
                executed_in_pass = true;

                if p.remaining_time == 0 {
                    let turnaround = current_time - p.arrival_time;
                    p.record_metrics(turnaround - p.burst_time, turnaround);
                    completed += 1;
                }
            }

            if !executed_in_pass && completed < total {
                // Every unfinished process arrives in the future.
                let next_arrival = set
                    .processes()
                    .iter()
                    .filter(|p| p.is_pending())
                    .map(|p| p.arrival_time)
                    .min();

                match next_arrival {
                    Some(arrival) if arrival > current_time => {
                        timeline.push(Slice::idle(current_time, arrival));
                        current_time = arrival;
                    }
                    _ => {
                        return Err(ScheduleError::NoEligibleProcessDeadlock {
                            time: current_time,
                        })
                    }
                }
            }
        }

        Ok(timeline)
    }

    fn description(&self) -> &'static str {
        "Round Robin (preemptive, fixed quantum)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Process;

    fn sample_set() -> ProcessSet {
        ProcessSet::new(vec![
            Process::new(1, 0, 5),
            Process::new(2, 1, 3),
            Process::new(3, 2, 1),
        ])
        .unwrap()
    }

    #[test]
    fn test_round_robin_quantum_two_trace() {
        let mut set = sample_set();
        let timeline = RoundRobin::new(2).run(&mut set).unwrap();

        assert_eq!(
            timeline.slices(),
            &[
                Slice::dispatch(1, 0, 2),
                Slice::dispatch(2, 2, 4),
                Slice::dispatch(3, 4, 5),
                Slice::dispatch(1, 5, 7),
                Slice::dispatch(2, 7, 8),
                Slice::dispatch(1, 8, 9),
            ]
        );

        // Slice count per process equals ceil(burst / quantum).
        assert_eq!(timeline.slices_for_process(1).len(), 3);
        assert_eq!(timeline.slices_for_process(2).len(), 2);
        assert_eq!(timeline.slices_for_process(3).len(), 1);

        assert_eq!(set.by_id(1).unwrap().turnaround_time, Some(9));
        assert_eq!(set.by_id(1).unwrap().waiting_time, Some(4));
        assert_eq!(set.by_id(2).unwrap().waiting_time, Some(4));
        assert_eq!(set.by_id(3).unwrap().waiting_time, Some(2));
    }

    #[test]
    fn test_no_slice_exceeds_quantum() {
        let quantum = 3;
        let mut set = sample_set();
        let timeline = RoundRobin::new(quantum).run(&mut set).unwrap();

        for p in set.processes() {
            let slices = timeline.slices_for_process(p.id);
            let (last, rest) = slices.split_last().unwrap();
            for s in rest {
                assert_eq!(s.duration(), quantum);
            }

            // Final slice carries the residual.
            let residual = p.burst_time % quantum;
            let expected = if residual == 0 { quantum } else { residual };
            assert_eq!(last.duration(), expected);
        }
    }

    #[test]
    fn test_zero_quantum_rejected() {
        let mut set = sample_set();
        let err = RoundRobin::new(0).run(&mut set).unwrap_err();
        assert_eq!(err, ScheduleError::NonPositiveQuantum);
        // Rejected before scheduling begins: nothing was mutated.
        assert_eq!(set.pending_count(), 3);
    }

    #[test]
    fn test_jumps_to_next_arrival_when_pass_finds_nothing() {
        let mut set =
            ProcessSet::new(vec![Process::new(1, 5, 2), Process::new(2, 6, 1)]).unwrap();
        let timeline = RoundRobin::new(3).run(&mut set).unwrap();

        assert_eq!(
            timeline.slices(),
            &[
                Slice::idle(0, 5),
                Slice::dispatch(1, 5, 7),
                Slice::dispatch(2, 7, 8),
            ]
        );
        assert_eq!(set.by_id(1).unwrap().waiting_time, Some(0));
        assert_eq!(timeline.busy_time() + timeline.idle_time(), timeline.span());
    }

    #[test]
    fn test_large_quantum_runs_bursts_whole() {
        let mut set = sample_set();
        let timeline = RoundRobin::new(100).run(&mut set).unwrap();

        assert_eq!(
            timeline.slices(),
            &[
                Slice::dispatch(1, 0, 5),
                Slice::dispatch(2, 5, 8),
                Slice::dispatch(3, 8, 9),
            ]
        );
    }
}
