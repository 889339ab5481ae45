//! Schedule (solution) model.
//!
//! A schedule is the result of one scheduling run: the chronological
//! execution timeline, the same slots reordered to submission order for
//! tabular use, and the aggregate averages.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.2
//! (Scheduling Criteria)

use serde::{Deserialize, Serialize};

use super::{ProcessDescriptor, ProcessId};

/// One process's execution interval and its derived metrics.
///
/// Exactly one slot exists per scheduled process. Under non-preemptive
/// execution the slot covers `[start_time, completion_time)` with no
/// interruption.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledSlot {
    /// Originating process ID.
    pub process_id: ProcessId,
    /// Originating process name.
    pub name: String,
    /// Arrival time of the process.
    pub arrival_time: i64,
    /// Burst time of the process.
    pub burst_time: i64,
    /// Time the process began executing.
    pub start_time: i64,
    /// `start_time + burst_time`.
    pub completion_time: i64,
    /// `completion_time - arrival_time`.
    pub turnaround_time: i64,
    /// `turnaround_time - burst_time`.
    pub waiting_time: i64,
}

impl ScheduledSlot {
    /// Builds the slot for `process` starting at `start_time`.
    ///
    /// Arithmetic saturates at the `i64` bounds; validated input never
    /// reaches them.
    pub fn new(process: &ProcessDescriptor, start_time: i64) -> Self {
        let completion_time = start_time.saturating_add(process.burst_time);
        let turnaround_time = completion_time.saturating_sub(process.arrival_time);
        Self {
            process_id: process.id,
            name: process.name.clone(),
            arrival_time: process.arrival_time,
            burst_time: process.burst_time,
            start_time,
            completion_time,
            turnaround_time,
            waiting_time: turnaround_time.saturating_sub(process.burst_time),
        }
    }

    /// Time from arrival to first execution.
    ///
    /// Equal to `waiting_time` since a started process is never displaced.
    #[inline]
    pub fn response_time(&self) -> i64 {
        self.start_time - self.arrival_time
    }

    /// Width of this slot's Gantt block, proportional to its burst.
    #[inline]
    pub fn visual_width(&self, unit: usize) -> usize {
        usize::try_from(self.burst_time)
            .unwrap_or(0)
            .saturating_mul(unit)
    }

    /// Whether this slot overlaps `other` in time.
    pub fn overlaps(&self, other: &ScheduledSlot) -> bool {
        self.start_time < other.completion_time && other.start_time < self.completion_time
    }
}

/// Arithmetic means over all slots of a schedule.
///
/// Values are unrounded; two-decimal display is left to the report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Averages {
    /// Mean turnaround time.
    pub mean_turnaround: f64,
    /// Mean waiting time.
    pub mean_waiting: f64,
}

impl Averages {
    /// Computes the means over `slots`. Empty input yields zeros.
    pub fn from_slots(slots: &[ScheduledSlot]) -> Self {
        if slots.is_empty() {
            return Self::default();
        }
        // Summed as f64: n turnarounds near the time bound overflow i64.
        let n = slots.len() as f64;
        let total_turnaround: f64 = slots.iter().map(|s| s.turnaround_time as f64).sum();
        let total_waiting: f64 = slots.iter().map(|s| s.waiting_time as f64).sum();
        Self {
            mean_turnaround: total_turnaround / n,
            mean_waiting: total_waiting / n,
        }
    }
}

/// The complete output of one scheduling run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SjfSchedule {
    /// Slots in execution order (ascending `start_time`).
    pub timeline: Vec<ScheduledSlot>,
    /// The same slots in the caller's submission order.
    pub metrics: Vec<ScheduledSlot>,
    /// Mean turnaround and waiting time.
    pub averages: Averages,
}

impl SjfSchedule {
    /// Creates an empty schedule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of scheduled processes.
    pub fn len(&self) -> usize {
        self.timeline.len()
    }

    /// Whether nothing was scheduled.
    pub fn is_empty(&self) -> bool {
        self.timeline.is_empty()
    }

    /// Latest completion time, or 0 for an empty schedule.
    pub fn makespan(&self) -> i64 {
        self.timeline
            .iter()
            .map(|s| s.completion_time)
            .max()
            .unwrap_or(0)
    }

    /// Finds the slot for a process.
    pub fn slot_for(&self, process_id: ProcessId) -> Option<&ScheduledSlot> {
        self.timeline.iter().find(|s| s.process_id == process_id)
    }

    /// Process IDs in execution order.
    pub fn execution_order(&self) -> Vec<ProcessId> {
        self.timeline.iter().map(|s| s.process_id).collect()
    }

    /// Idle intervals `[start, end)` from t=0 during which no process runs.
    pub fn idle_gaps(&self) -> Vec<(i64, i64)> {
        let mut gaps = Vec::new();
        let mut cursor = 0;
        for slot in &self.timeline {
            if slot.start_time > cursor {
                gaps.push((cursor, slot.start_time));
            }
            cursor = cursor.max(slot.completion_time);
        }
        gaps
    }
}
