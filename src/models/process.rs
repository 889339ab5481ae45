//! Process descriptor model.
//!
//! A process is a single CPU burst to be scheduled: it becomes eligible
//! at its arrival time and, once started, runs uninterrupted for its
//! burst time.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3

use serde::{Deserialize, Serialize};

/// Stable process identifier, unique within one scheduling call.
pub type ProcessId = u64;

/// A process submitted for scheduling.
///
/// # Time Representation
/// Times are unitless integer ticks relative to t=0. Arrival must be
/// non-negative and burst strictly positive; both are checked by
/// [`validate_processes`](crate::validation::validate_processes), not by
/// the scheduler.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessDescriptor {
    /// Unique process identifier.
    pub id: ProcessId,
    /// Display label. Carried through to the output unchanged.
    pub name: String,
    /// Time the process becomes eligible to run.
    pub arrival_time: i64,
    /// Required service duration.
    pub burst_time: i64,
}

impl ProcessDescriptor {
    /// Creates a process arriving at t=0.
    pub fn new(id: ProcessId, name: impl Into<String>, burst_time: i64) -> Self {
        Self {
            id,
            name: name.into(),
            arrival_time: 0,
            burst_time,
        }
    }

    /// Sets the arrival time.
    pub fn with_arrival(mut self, arrival_time: i64) -> Self {
        self.arrival_time = arrival_time;
        self
    }

    /// Sets the burst time.
    pub fn with_burst(mut self, burst_time: i64) -> Self {
        self.burst_time = burst_time;
        self
    }

    /// Whether the process has arrived by `time`.
    #[inline]
    pub fn is_ready_at(&self, time: i64) -> bool {
        self.arrival_time <= time
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_process_builder() {
        let p = ProcessDescriptor::new(7, "P1", 4).with_arrival(3);
        assert_eq!(p.id, 7);
        assert_eq!(p.name, "P1");
        assert_eq!(p.arrival_time, 3);
        assert_eq!(p.burst_time, 4);

        let p = p.with_burst(9);
        assert_eq!(p.burst_time, 9);
    }

    #[test]
    fn test_is_ready_at() {
        let p = ProcessDescriptor::new(1, "A", 2).with_arrival(5);
        assert!(!p.is_ready_at(4));
        assert!(p.is_ready_at(5));
        assert!(p.is_ready_at(6));
    }

    #[test]
    fn test_process_json_field_names() {
        let json = r#"{"id":3,"name":"B","arrival_time":1,"burst_time":3}"#;
        let p: ProcessDescriptor = serde_json::from_str(json).unwrap();
        assert_eq!(p, ProcessDescriptor::new(3, "B", 3).with_arrival(1));
    }
}
