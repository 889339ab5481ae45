//! Non-preemptive Shortest-Job-First scheduler.
//!
//! # Algorithm
//!
//! 1. Order processes by (arrival, burst, submission index). This order
//!    only feeds arrivals into the ready queue; it is not the execution order.
//! 2. Starting at t=0, move every arrived process into a min-heap keyed by
//!    (burst, arrival, submission index).
//! 3. If the heap is empty, jump the clock to the next arrival. No slot is
//!    emitted for the idle interval.
//! 4. Otherwise pop the shortest job, run it to completion, advance the clock.
//! 5. Reorder the slots to submission order for the metrics view.
//!
//! Ties on burst time go to the earlier arrival, then to the earlier
//! submission, so every run has a single deterministic winner.
//!
//! # Complexity
//! O(n log n): one sort plus one heap push/pop per process.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3.2

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use tracing::{debug, instrument, trace};

use crate::models::{Averages, ProcessDescriptor, ScheduledSlot, SjfSchedule};
use crate::validation::{validate_processes, ValidationError};

/// Ready-queue ordering key. Field order is the tie-break order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct ReadyKey {
    burst_time: i64,
    arrival_time: i64,
    index: usize,
}

impl ReadyKey {
    fn of(processes: &[ProcessDescriptor], index: usize) -> Self {
        let p = &processes[index];
        Self {
            burst_time: p.burst_time,
            arrival_time: p.arrival_time,
            index,
        }
    }
}

/// Non-preemptive SJF scheduler on a single CPU.
///
/// Stateless: every call to [`schedule`](Self::schedule) is an independent,
/// pure run over borrowed input, so one scheduler may be shared freely
/// across threads.
///
/// # Example
///
/// ```
/// use sjf_schedule::models::ProcessDescriptor;
/// use sjf_schedule::scheduler::SjfScheduler;
///
/// let processes = vec![
///     ProcessDescriptor::new(1, "A", 5),
///     ProcessDescriptor::new(2, "B", 3).with_arrival(1),
///     ProcessDescriptor::new(3, "C", 1).with_arrival(2),
/// ];
///
/// let schedule = SjfScheduler::new().schedule(&processes);
/// assert_eq!(schedule.execution_order(), vec![1, 3, 2]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SjfScheduler;

impl SjfScheduler {
    /// Creates a new scheduler.
    pub fn new() -> Self {
        Self
    }

    /// Validates `processes`, then schedules them.
    ///
    /// Returns every validation problem found instead of a schedule when the
    /// input is empty or contains an invalid process.
    pub fn try_schedule(
        &self,
        processes: &[ProcessDescriptor],
    ) -> Result<SjfSchedule, Vec<ValidationError>> {
        validate_processes(processes)?;
        Ok(self.schedule(processes))
    }

    /// Schedules processes without validating them.
    ///
    /// Total for any input: an empty slice yields an empty schedule, and
    /// times saturate rather than wrap. With validated input every slot has
    /// non-negative waiting time and no time saturates.
    #[instrument(skip_all, fields(processes = processes.len()))]
    pub fn schedule(&self, processes: &[ProcessDescriptor]) -> SjfSchedule {
        let n = processes.len();

        let mut pending: Vec<usize> = (0..n).collect();
        pending.sort_by_key(|&i| (processes[i].arrival_time, processes[i].burst_time, i));

        let mut cursor = 0;
        let mut ready: BinaryHeap<Reverse<ReadyKey>> = BinaryHeap::with_capacity(n);
        let mut current_time: i64 = 0;
        let mut timeline: Vec<ScheduledSlot> = Vec::with_capacity(n);
        // Submission index → position in `timeline`
        let mut slot_of = vec![0usize; n];

        while cursor < n || !ready.is_empty() {
            while let Some(&index) = pending.get(cursor) {
                if !processes[index].is_ready_at(current_time) {
                    break;
                }
                ready.push(Reverse(ReadyKey::of(processes, index)));
                cursor += 1;
            }

            let Some(Reverse(next)) = ready.pop() else {
                // Nothing has arrived yet; `pending` is sorted by arrival.
                let next_arrival = processes[pending[cursor]].arrival_time;
                trace!(from = current_time, to = next_arrival, "cpu idle");
                current_time = next_arrival;
                continue;
            };

            let process = &processes[next.index];
            let slot = ScheduledSlot::new(process, current_time);
            debug!(
                process = %process.name,
                start = slot.start_time,
                end = slot.completion_time,
                waiting = slot.waiting_time,
                "dispatched"
            );

            current_time = slot.completion_time;
            slot_of[next.index] = timeline.len();
            timeline.push(slot);
        }

        let metrics: Vec<ScheduledSlot> = slot_of.iter().map(|&i| timeline[i].clone()).collect();
        let averages = Averages::from_slots(&timeline);

        debug!(
            makespan = current_time,
            mean_turnaround = averages.mean_turnaround,
            mean_waiting = averages.mean_waiting,
            "schedule complete"
        );

        SjfSchedule {
            timeline,
            metrics,
            averages,
        }
    }
}
