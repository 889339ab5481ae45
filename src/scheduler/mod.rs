//! SJF scheduler and KPI evaluation.
//!
//! # Algorithm
//!
//! `SjfScheduler` runs a single CPU under non-preemptive Shortest-Job-First:
//! whenever the CPU is free it starts the ready process with the smallest
//! burst, jumping over idle intervals when nothing has arrived yet.
//!
//! # KPI
//!
//! `ScheduleKpi` computes makespan, idle time, CPU utilization, throughput,
//! and waiting/response statistics.
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Smith (1956), SPT is optimal for mean flow time on a single machine

mod kpi;
mod sjf;

pub use kpi::ScheduleKpi;
pub use sjf::SjfScheduler;
