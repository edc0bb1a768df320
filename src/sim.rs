//! Execution simulation.
//!
//! Cosmetic collaborator outside the scheduling core: spawns one thread
//! per process, each blocking for a duration proportional to the
//! process's burst time, then joins them all before the session moves
//! on. There are no ordering or resource-contention semantics among the
//! threads — this is not a scheduler-accurate execution model.

use std::io;
use std::thread;
use std::time::Duration;

use log::info;

use crate::models::ProcessSet;

/// Thread-per-process burst simulator with a join-all barrier.
///
/// Each process sleeps `time_scale * burst_time`. The default scale is
/// one second per time unit; demos and tests shrink it via
/// [`with_time_scale`](Self::with_time_scale).
#[derive(Debug, Clone)]
pub struct BurstSimulator {
    time_scale: Duration,
}

impl BurstSimulator {
    /// Creates a simulator at the default scale of 1s per burst unit.
    pub fn new() -> Self {
        Self {
            time_scale: Duration::from_secs(1),
        }
    }

    /// Sets the wall-clock duration of one burst time unit.
    pub fn with_time_scale(mut self, time_scale: Duration) -> Self {
        self.time_scale = time_scale;
        self
    }

    /// Runs one task per process and waits for all of them.
    ///
    /// A thread that fails to spawn is fatal for the run; the error is
    /// propagated after no further threads are started.
    pub fn run_all(&self, set: &ProcessSet) -> io::Result<()> {
        let mut handles = Vec::with_capacity(set.len());

        for p in set.processes() {
            let id = p.id;
            let burst = u32::try_from(p.burst_time).unwrap_or(u32::MAX);
            let sleep = self.time_scale.saturating_mul(burst);

            let handle = thread::Builder::new()
                .name(format!("process-{id}"))
                .spawn(move || {
                    info!("process P{id} is running");
                    thread::sleep(sleep);
                    info!("process P{id} has completed");
                })?;
            handles.push(handle);
        }

        for handle in handles {
            handle
                .join()
                .map_err(|_| io::Error::new(io::ErrorKind::Other, "simulation thread panicked"))?;
        }

        Ok(())
    }
}

impl Default for BurstSimulator {
    fn default() -> Self {
        Self::new()
    }
}
