//! Schedule quality metrics (KPIs).
//!
//! Computes standard CPU scheduling performance indicators from a
//! completed schedule.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Makespan | Latest completion time |
//! | Busy Time | Sum of burst times |
//! | Idle Time | Time in `[0, makespan)` with no process running |
//! | CPU Utilization | busy / makespan |
//! | Throughput | Processes completed per time unit |
//! | Max Waiting | Largest single waiting time |
//! | Mean Response | Mean time from arrival to first execution |
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.2

use serde::{Deserialize, Serialize};

use crate::models::{Averages, SjfSchedule};

/// Schedule performance indicators.
///
/// All time values are in simulation ticks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleKpi {
    /// Latest completion time.
    pub makespan: i64,
    /// Total time the CPU spent executing.
    pub busy_time: i64,
    /// Total time the CPU sat idle before the last completion.
    pub idle_time: i64,
    /// Idle intervals `[start, end)`.
    pub idle_gaps: Vec<(i64, i64)>,
    /// Busy fraction of the makespan (0.0..=1.0).
    pub cpu_utilization: f64,
    /// Completed processes per tick.
    pub throughput: f64,
    /// Largest waiting time of any process.
    pub max_waiting: i64,
    /// Mean response time. Equals mean waiting under non-preemption.
    pub mean_response: f64,
    /// Mean turnaround and waiting time.
    pub averages: Averages,
}

impl ScheduleKpi {
    /// Computes KPIs from a schedule.
    pub fn calculate(schedule: &SjfSchedule) -> Self {
        let makespan = schedule.makespan();
        let busy_time: i64 = schedule.timeline.iter().map(|s| s.burst_time).sum();
        let idle_gaps = schedule.idle_gaps();
        let idle_time: i64 = idle_gaps.iter().map(|(start, end)| end - start).sum();
        let max_waiting = schedule
            .timeline
            .iter()
            .map(|s| s.waiting_time)
            .max()
            .unwrap_or(0);

        let (cpu_utilization, throughput) = if makespan <= 0 {
            (0.0, 0.0)
        } else {
            (
                busy_time as f64 / makespan as f64,
                schedule.len() as f64 / makespan as f64,
            )
        };

        let mean_response = if schedule.is_empty() {
            0.0
        } else {
            let total: f64 = schedule
                .timeline
                .iter()
                .map(|s| s.response_time() as f64)
                .sum();
            total / schedule.len() as f64
        };

        Self {
            makespan,
            busy_time,
            idle_time,
            idle_gaps,
            cpu_utilization,
            throughput,
            max_waiting,
            mean_response,
            averages: schedule.averages,
        }
    }

    /// Whether the schedule meets the given quality thresholds.
    pub fn meets_thresholds(&self, max_waiting: i64, min_utilization: f64) -> bool {
        self.max_waiting <= max_waiting && self.cpu_utilization >= min_utilization
    }
}
