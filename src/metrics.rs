//! Run quality metrics.
//!
//! Computes aggregate performance indicators from a completed policy
//! run and its timeline.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Avg Waiting | Mean time spent eligible but not running |
//! | Avg Turnaround | Mean time from arrival to completion |
//! | Makespan | Final simulated time (timeline span) |
//! | CPU Utilization | Busy time / span |
//! | Throughput | Completed processes per time unit |

use serde::{Deserialize, Serialize};

use crate::models::{ProcessSet, Timeline};

/// Aggregate performance indicators for one policy run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunMetrics {
    /// Mean waiting time across processes with recorded metrics.
    pub avg_waiting_time: f64,
    /// Mean turnaround time across processes with recorded metrics.
    pub avg_turnaround_time: f64,
    /// Final simulated time.
    pub makespan: u64,
    /// Fraction of the span spent dispatching (0.0..1.0).
    pub cpu_utilization: f64,
    /// Completed processes per time unit.
    pub throughput: f64,
}

impl RunMetrics {
    /// Computes metrics from a run's registry and timeline.
    ///
    /// Processes without recorded metrics (no completed run) are
    /// excluded from the averages.
    pub fn calculate(set: &ProcessSet, timeline: &Timeline) -> Self {
        let mut total_waiting: f64 = 0.0;
        let mut total_turnaround: f64 = 0.0;
        let mut counted = 0usize;

        for p in set.processes() {
            if let (Some(waiting), Some(turnaround)) = (p.waiting_time, p.turnaround_time) {
                total_waiting += waiting as f64;
                total_turnaround += turnaround as f64;
                counted += 1;
            }
        }

        let (avg_waiting_time, avg_turnaround_time) = if counted == 0 {
            (0.0, 0.0)
        } else {
            (total_waiting / counted as f64, total_turnaround / counted as f64)
        };

        let makespan = timeline.span();
        let (cpu_utilization, throughput) = if makespan == 0 {
            (0.0, 0.0)
        } else {
            (
                timeline.busy_time() as f64 / makespan as f64,
                counted as f64 / makespan as f64,
            )
        };

        Self {
            avg_waiting_time,
            avg_turnaround_time,
            makespan,
            cpu_utilization,
            throughput,
        }
    }
}
