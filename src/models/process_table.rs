//! Process table: the caller-owned submission list.
//!
//! Holds processes in submission order, keyed by a stable ID. Handles ID
//! generation, default naming (`P1`, `P2`, ...) and per-process input
//! checks, so that everything handed to the scheduler is already valid.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::{ProcessDescriptor, ProcessId, SjfSchedule};
use crate::scheduler::SjfScheduler;
use crate::validation::{ValidationError, ValidationErrorKind};

/// A process as submitted by a user, before defaults are applied.
///
/// Every field is optional: a blank name becomes `P{n}`, a missing
/// arrival becomes 0, a missing ID is generated. A missing burst is an
/// error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewProcess {
    /// Explicit ID. Generated when absent.
    #[serde(default)]
    pub id: Option<ProcessId>,
    /// Display label. Blank means "use the default name".
    #[serde(default)]
    pub name: String,
    /// Arrival time. Absent means 0.
    #[serde(default)]
    pub arrival_time: Option<i64>,
    /// Burst time. Required.
    #[serde(default)]
    pub burst_time: Option<i64>,
}

impl NewProcess {
    /// Creates a submission with the given burst.
    pub fn new(name: impl Into<String>, burst_time: i64) -> Self {
        Self {
            name: name.into(),
            burst_time: Some(burst_time),
            ..Default::default()
        }
    }

    /// Sets the arrival time.
    pub fn with_arrival(mut self, arrival_time: i64) -> Self {
        self.arrival_time = Some(arrival_time);
        self
    }

    /// Sets an explicit ID.
    pub fn with_id(mut self, id: ProcessId) -> Self {
        self.id = Some(id);
        self
    }
}

/// Parses `NAME:ARRIVAL:BURST`. Name and arrival may be left empty.
impl FromStr for NewProcess {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || {
            ValidationError::new(
                ValidationErrorKind::MalformedProcess,
                format!("Expected NAME:ARRIVAL:BURST, got '{s}'"),
            )
        };

        let mut parts = s.split(':');
        let (Some(name), Some(arrival), Some(burst), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(malformed());
        };

        let name = name.trim();
        let arrival_time = match arrival.trim() {
            "" => None,
            a => Some(a.parse::<i64>().map_err(|_| malformed())?),
        };
        let burst_time = match burst.trim() {
            "" => None,
            b => Some(b.parse::<i64>().map_err(|_| {
                ValidationError::new(
                    ValidationErrorKind::InvalidBurstTime,
                    format!("Process '{name}' has non-numeric burst time '{b}'"),
                )
            })?),
        };

        Ok(Self {
            id: None,
            name: name.to_string(),
            arrival_time,
            burst_time,
        })
    }
}

/// Owned, append/remove-capable process list keyed by ID.
#[derive(Debug, Clone)]
pub struct ProcessTable {
    processes: Vec<ProcessDescriptor>,
    next_id: ProcessId,
    name_counter: u64,
}

impl ProcessTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self {
            processes: Vec::new(),
            next_id: 1,
            name_counter: 1,
        }
    }

    /// Adds a process, applying defaults.
    ///
    /// Rejects a missing or non-positive burst, a negative arrival, and an
    /// ID (explicit or generated) already in the table. A rejected submission leaves the
    /// table unchanged.
    pub fn add(&mut self, entry: NewProcess) -> Result<ProcessId, ValidationError> {
        let name = match entry.name.trim() {
            "" => format!("P{}", self.name_counter),
            n => n.to_string(),
        };

        let burst_time = match entry.burst_time {
            Some(b) if b > 0 => b,
            Some(b) => return Err(ValidationError::invalid_burst(&name, b)),
            None => {
                return Err(ValidationError::new(
                    ValidationErrorKind::InvalidBurstTime,
                    format!("Process '{name}' is missing a burst time"),
                ))
            }
        };

        let arrival_time = entry.arrival_time.unwrap_or(0);
        if arrival_time < 0 {
            return Err(ValidationError::negative_arrival(&name, arrival_time));
        }

        let id = entry.id.unwrap_or(self.next_id);
        if self.get(id).is_some() {
            return Err(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate process ID: {id}"),
            ));
        }
        // `u64::MAX` has no successor; the counter stays where it was.
        if let Some(next) = id.checked_add(1) {
            self.next_id = self.next_id.max(next);
        }
        self.name_counter += 1;

        self.processes.push(ProcessDescriptor {
            id,
            name,
            arrival_time,
            burst_time,
        });
        Ok(id)
    }

    /// Removes a process by ID.
    pub fn remove(&mut self, id: ProcessId) -> Option<ProcessDescriptor> {
        let pos = self.processes.iter().position(|p| p.id == id)?;
        Some(self.processes.remove(pos))
    }

    /// Removes all processes and restarts default naming at `P1`.
    ///
    /// Generated IDs keep increasing so stale IDs never alias new processes.
    pub fn clear(&mut self) {
        self.processes.clear();
        self.name_counter = 1;
    }

    /// Finds a process by ID.
    pub fn get(&self, id: ProcessId) -> Option<&ProcessDescriptor> {
        self.processes.iter().find(|p| p.id == id)
    }

    /// Processes in submission order.
    pub fn processes(&self) -> &[ProcessDescriptor] {
        &self.processes
    }

    /// Number of processes.
    pub fn len(&self) -> usize {
        self.processes.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.processes.is_empty()
    }

    /// Schedules the current contents.
    pub fn schedule(
        &self,
        scheduler: &SjfScheduler,
    ) -> Result<SjfSchedule, Vec<ValidationError>> {
        scheduler.try_schedule(&self.processes)
    }
}

impl Default for ProcessTable {
    fn default() -> Self {
        Self::new()
    }
}
