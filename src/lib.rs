//! CPU scheduling simulator.
//!
//! Computes execution order and per-process timing metrics for a fixed
//! set of processes under four classic dispatch disciplines — FCFS,
//! non-preemptive SJF, Round Robin, and non-preemptive Priority
//! Scheduling — and derives the Gantt timeline each run produces.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Process`, `ProcessSet` (the registry),
//!   `Timeline`, `Slice`
//! - **`policies`**: The `SchedulingPolicy` trait and the four disciplines
//! - **`metrics`**: Aggregate per-run indicators (`RunMetrics`)
//! - **`render`**: Gantt and table text output (presentation only)
//! - **`session`**: Run controller — reset, dispatch, report
//! - **`sim`**: Thread-per-process execution simulation (cosmetic)
//! - **`workload`**: Seeded random workload generation
//!
//! # Example
//!
//! ```
//! use cpusched::models::{Process, ProcessSet};
//! use cpusched::policies::{SchedulingPolicy, Sjf};
//!
//! let mut set = ProcessSet::new(vec![
//!     Process::new(1, 0, 5),
//!     Process::new(2, 1, 3),
//! ]).unwrap();
//!
//! let timeline = Sjf.run(&mut set).unwrap();
//! assert_eq!(timeline.span(), 8);
//! assert_eq!(set.by_id(2).unwrap().waiting_time, Some(4));
//! ```
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2015), "Modern Operating Systems", Ch. 2.4

pub mod error;
pub mod metrics;
pub mod models;
pub mod policies;
pub mod render;
pub mod session;
pub mod sim;
pub mod workload;
