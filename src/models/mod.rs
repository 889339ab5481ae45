//! Scheduling domain models.
//!
//! Provides the data types for a single-CPU scheduling run: the submitted
//! processes, the list that collects them, and the resulting schedule.
//!
//! | Type | Role |
//! |------|------|
//! | `ProcessDescriptor` | Validated input: id, name, arrival, burst |
//! | `NewProcess` | Raw submission before defaults are applied |
//! | `ProcessTable` | Submission list keyed by id |
//! | `ScheduledSlot` | One process's execution interval and metrics |
//! | `SjfSchedule` | Timeline, metrics in input order, averages |

mod process;
mod process_table;
mod schedule;

pub use process::{ProcessDescriptor, ProcessId};
pub use process_table::{NewProcess, ProcessTable};
pub use schedule::{Averages, ScheduledSlot, SjfSchedule};
