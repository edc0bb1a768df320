//! Seeded random workload generation.
//!
//! Produces reproducible process sets for experimentation and property
//! tests: same seed, same workload.

use rand::prelude::*;

use crate::error::ScheduleError;
use crate::models::{Process, ProcessSet};

/// Generates `count` random processes with arrivals in `0..=20`, bursts
/// in `1..=10`, and priorities in `0..=5`.
///
/// Ids are assigned 1..=count in creation order. The count is validated
/// by [`ProcessSet::new`].
pub fn random_process_set(count: usize, seed: u64) -> Result<ProcessSet, ScheduleError> {
    let mut rng = StdRng::seed_from_u64(seed);

    let processes = (1..=count as u32)
        .map(|id| {
            Process::new(id, rng.random_range(0..=20), rng.random_range(1..=10))
                .with_priority(rng.random_range(0..=5))
        })
        .collect();

    ProcessSet::new(processes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policies::{Fcfs, Priority, RoundRobin, SchedulingPolicy, Sjf};

    #[test]
    fn test_same_seed_same_workload() {
        let a = random_process_set(5, 42).unwrap();
        let b = random_process_set(5, 42).unwrap();
        assert_eq!(a, b);

        let c = random_process_set(5, 43).unwrap();
        assert_ne!(a, c);
    }

    #[test]
    fn test_generated_values_stay_in_bounds() {
        let set = random_process_set(10, 7).unwrap();
        for (i, p) in set.processes().iter().enumerate() {
            assert_eq!(p.id, i as u32 + 1);
            assert!(p.arrival_time <= 20);
            assert!((1..=10).contains(&p.burst_time));
            assert!((0..=5).contains(&p.priority));
        }
    }

    #[test]
    fn test_invalid_count_rejected() {
        assert!(random_process_set(0, 1).is_err());
        assert!(random_process_set(11, 1).is_err());
    }

    #[test]
    fn test_random_workloads_schedule_cleanly() {
        let policies: Vec<Box<dyn SchedulingPolicy>> = vec![
            Box::new(Fcfs),
            Box::new(Sjf),
            Box::new(RoundRobin::new(2)),
            Box::new(Priority),
        ];

        for seed in 0..5 {
            for policy in &policies {
                let mut set = random_process_set(6, seed).unwrap();
                let timeline = policy.run(&mut set).unwrap();

                assert_eq!(
                    timeline.busy_time() + timeline.idle_time(),
                    timeline.span(),
                    "{} seed {seed}",
                    policy.name()
                );
                for p in set.processes() {
                    assert_eq!(
                        p.turnaround_time.unwrap(),
                        p.waiting_time.unwrap() + p.burst_time,
                        "{} seed {seed}",
                        policy.name()
                    );
                }
            }
        }
    }
}
