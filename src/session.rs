//! Run controller.
//!
//! Orchestrates one policy invocation: resets the registry so each
//! algorithm observes identical starting conditions, runs the policy,
//! computes aggregate metrics, and hands back a self-contained report.
//! Policy computation is single-threaded and synchronous; no policy
//! runs concurrently with another against the same registry.

use log::{debug, info};

use crate::error::ScheduleError;
use crate::metrics::RunMetrics;
use crate::models::{Process, ProcessSet, Timeline};
use crate::policies::SchedulingPolicy;

/// The outcome of one policy run: the timeline, a metric-bearing
/// snapshot of the processes, and the aggregate metrics.
#[derive(Debug, Clone)]
pub struct RunReport {
    /// Name of the policy that produced this report.
    pub policy: &'static str,
    /// Dispatch/idle slices in execution order.
    pub timeline: Timeline,
    /// Processes with waiting/turnaround times recorded.
    pub processes: Vec<Process>,
    /// Aggregate metrics for the run.
    pub metrics: RunMetrics,
}

/// One operator session over a fixed process registry.
#[derive(Debug, Clone)]
pub struct Session {
    set: ProcessSet,
}

impl Session {
    /// Creates a session owning the given registry.
    pub fn new(set: ProcessSet) -> Self {
        Self { set }
    }

    /// The session's registry.
    pub fn process_set(&self) -> &ProcessSet {
        &self.set
    }

    /// Runs one policy over the registry.
    ///
    /// The registry is reset first, so successive runs never leak
    /// `remaining_time` state into each other.
    pub fn run(&mut self, policy: &dyn SchedulingPolicy) -> Result<RunReport, ScheduleError> {
        self.set.reset();
        debug!(
            "running {} over {} processes",
            policy.name(),
            self.set.len()
        );

        let timeline = policy.run(&mut self.set)?;
        let metrics = RunMetrics::calculate(&self.set, &timeline);
        info!(
            "{} finished: makespan {}, {} slices",
            policy.name(),
            metrics.makespan,
            timeline.slice_count()
        );

        Ok(RunReport {
            policy: policy.name(),
            timeline,
            processes: self.set.processes().to_vec(),
            metrics,
        })
    }
}
