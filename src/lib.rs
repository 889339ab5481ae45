//! Non-preemptive Shortest-Job-First CPU scheduling simulation.
//!
//! Given processes with arrival and burst times, computes the execution
//! timeline on a single CPU, per-process completion/turnaround/waiting
//! times, and their averages.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `ProcessDescriptor`, `ProcessTable`,
//!   `ScheduledSlot`, `SjfSchedule`
//! - **`validation`**: Input checks (empty input, burst/arrival ranges, duplicate IDs)
//! - **`scheduler`**: `SjfScheduler` and `ScheduleKpi`
//! - **`workload`**: Seeded random process sets
//! - **`report`**: Text Gantt chart, metrics table, and averages
//!
//! # Example
//!
//! ```
//! use sjf_schedule::models::{NewProcess, ProcessTable};
//! use sjf_schedule::scheduler::SjfScheduler;
//!
//! let mut table = ProcessTable::new();
//! table.add(NewProcess::new("A", 4)).unwrap();
//! table.add(NewProcess::new("B", 2)).unwrap();
//! table.add(NewProcess::new("C", 1)).unwrap();
//!
//! let schedule = table.schedule(&SjfScheduler::new()).unwrap();
//! let order: Vec<&str> = schedule.timeline.iter().map(|s| s.name.as_str()).collect();
//! assert_eq!(order, vec!["C", "B", "A"]);
//! ```
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 3

pub mod models;
pub mod report;
pub mod scheduler;
pub mod validation;
pub mod workload;

pub use models::{ProcessDescriptor, ScheduledSlot, SjfSchedule};
pub use scheduler::SjfScheduler;
