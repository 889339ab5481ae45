//! Plain-text rendering of a schedule.
//!
//! Draws a Gantt chart whose block widths are proportional to burst time,
//! the per-process metrics table in submission order, and the averages
//! rounded to two decimals.
//!
//! Block widths are capped at [`MAX_BLOCK_WIDTH`] columns and idle gaps
//! wider than [`MAX_IDLE_WIDTH`] collapse to a fixed break marker, so the
//! chart stays bounded however large the times are. Axis labels always
//! show the real times.

use std::fmt;

use crate::models::{ScheduledSlot, SjfSchedule};
use crate::scheduler::ScheduleKpi;

/// Widest a single process block is drawn.
pub const MAX_BLOCK_WIDTH: usize = 80;

/// Widest an idle gap is drawn as dots before collapsing to [`IDLE_BREAK`].
pub const MAX_IDLE_WIDTH: usize = 12;

const IDLE_BREAK: &str = "..~..";

const HEADERS: [&str; 6] = [
    "Process",
    "Arrival",
    "Burst",
    "Completion",
    "Turnaround",
    "Waiting",
];

/// Text report over a finished schedule.
///
/// # Example
///
/// ```
/// use sjf_schedule::models::ProcessDescriptor;
/// use sjf_schedule::report::Report;
/// use sjf_schedule::scheduler::SjfScheduler;
///
/// let schedule = SjfScheduler::new().schedule(&[ProcessDescriptor::new(1, "A", 2)]);
/// let text = Report::new(&schedule).with_unit_width(2).to_string();
/// assert!(text.contains("Average Waiting Time: 0.00"));
/// ```
#[derive(Debug, Clone)]
pub struct Report<'a> {
    schedule: &'a SjfSchedule,
    unit_width: usize,
    kpi: Option<ScheduleKpi>,
}

impl<'a> Report<'a> {
    /// Creates a report with 3 characters per time unit.
    pub fn new(schedule: &'a SjfSchedule) -> Self {
        Self {
            schedule,
            unit_width: 3,
            kpi: None,
        }
    }

    /// Sets the Gantt width of one time unit (at least 1).
    pub fn with_unit_width(mut self, unit_width: usize) -> Self {
        self.unit_width = unit_width.max(1);
        self
    }

    /// Appends a KPI summary section.
    pub fn with_kpi(mut self, enabled: bool) -> Self {
        self.kpi = enabled.then(|| ScheduleKpi::calculate(self.schedule));
        self
    }

    /// The Gantt chart: block row and time axis.
    pub fn gantt(&self) -> (String, String) {
        let mut bar = String::new();
        let mut axis = String::new();
        let mut col = 0;
        let mut cursor = 0;

        for slot in &self.schedule.timeline {
            if slot.start_time > cursor {
                let gap = idle_fill(self.width_of(slot.start_time - cursor));
                mark(&mut axis, col, cursor);
                bar.push('|');
                bar.push_str(&gap);
                col += 1 + gap.len();
            }

            let width = slot.visual_width(self.unit_width).min(MAX_BLOCK_WIDTH);
            mark(&mut axis, col, slot.start_time);
            bar.push('|');
            bar.push_str(&block_label(&slot.name, width));
            col += 1 + width;
            cursor = slot.completion_time;
        }

        if let Some(last) = self.schedule.timeline.last() {
            mark(&mut axis, col, last.completion_time);
            bar.push('|');
        }

        (bar, axis)
    }

    /// Averages rounded to two decimals.
    pub fn averages(&self) -> (String, String) {
        let avg = &self.schedule.averages;
        (
            format!("{:.2}", avg.mean_turnaround),
            format!("{:.2}", avg.mean_waiting),
        )
    }

    fn width_of(&self, duration: i64) -> usize {
        usize::try_from(duration)
            .unwrap_or(0)
            .saturating_mul(self.unit_width)
    }

    fn write_table(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rows: Vec<[String; 6]> = self.schedule.metrics.iter().map(row).collect();

        let mut widths = HEADERS.map(str::len);
        for r in &rows {
            for (w, cell) in widths.iter_mut().zip(r) {
                *w = (*w).max(cell.chars().count());
            }
        }

        let header = HEADERS.map(String::from);
        for cells in std::iter::once(&header).chain(&rows) {
            let line = cells
                .iter()
                .zip(widths)
                .map(|(cell, w)| format!("{cell:<w$}"))
                .collect::<Vec<_>>()
                .join("  ");
            writeln!(f, "{}", line.trim_end())?;
        }
        Ok(())
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.schedule.is_empty() {
            return writeln!(f, "No processes scheduled.");
        }

        let (bar, axis) = self.gantt();
        writeln!(f, "Gantt Chart")?;
        writeln!(f, "{bar}")?;
        writeln!(f, "{axis}")?;
        writeln!(f)?;

        self.write_table(f)?;
        writeln!(f)?;

        let (turnaround, waiting) = self.averages();
        writeln!(f, "Average Turnaround Time: {turnaround}")?;
        writeln!(f, "Average Waiting Time: {waiting}")?;

        if let Some(kpi) = &self.kpi {
            writeln!(f)?;
            writeln!(f, "Makespan: {}", kpi.makespan)?;
            writeln!(f, "CPU Utilization: {:.2}%", kpi.cpu_utilization * 100.0)?;
            writeln!(f, "Idle Time: {}", kpi.idle_time)?;
            writeln!(f, "Throughput: {:.2} processes/unit", kpi.throughput)?;
            writeln!(f, "Max Waiting Time: {}", kpi.max_waiting)?;
        }
        Ok(())
    }
}

fn row(slot: &ScheduledSlot) -> [String; 6] {
    [
        slot.name.clone(),
        slot.arrival_time.to_string(),
        slot.burst_time.to_string(),
        slot.completion_time.to_string(),
        slot.turnaround_time.to_string(),
        slot.waiting_time.to_string(),
    ]
}

fn idle_fill(width: usize) -> String {
    if width > MAX_IDLE_WIDTH {
        IDLE_BREAK.to_string()
    } else {
        ".".repeat(width)
    }
}

/// Centers `name` in `width` columns, truncating if it does not fit.
fn block_label(name: &str, width: usize) -> String {
    let label: String = name.chars().take(width).collect();
    format!("{label:^width$}")
}

/// Writes `time` at column `col` of the axis, or after a space if the
/// previous label already reaches that column.
fn mark(axis: &mut String, col: usize, time: i64) {
    if axis.len() < col {
        axis.push_str(&" ".repeat(col - axis.len()));
    } else if !axis.is_empty() {
        axis.push(' ');
    }
    axis.push_str(&time.to_string());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ProcessDescriptor;
    use crate::scheduler::SjfScheduler;

    fn staggered() -> SjfSchedule {
        SjfScheduler::new().schedule(&[
            ProcessDescriptor::new(1, "A", 5),
            ProcessDescriptor::new(2, "B", 3).with_arrival(1),
            ProcessDescriptor::new(3, "C", 1).with_arrival(2),
        ])
    }

    #[test]
    fn test_gantt_widths() {
        let schedule = staggered();
        let (bar, axis) = Report::new(&schedule).with_unit_width(3).gantt();

        let expected_bar = format!("|{:^15}|{:^3}|{:^9}|", "A", "C", "B");
        assert_eq!(bar, expected_bar);
        let expected_axis = format!("0{}5{}6{}9", " ".repeat(15), " ".repeat(3), " ".repeat(9));
        assert_eq!(axis, expected_axis);
    }

    #[test]
    fn test_gantt_idle_gap() {
        let schedule =
            SjfScheduler::new().schedule(&[ProcessDescriptor::new(1, "A", 2).with_arrival(10)]);
        let (bar, axis) = Report::new(&schedule).with_unit_width(1).gantt();

        assert_eq!(bar, format!("|{}|A |", ".".repeat(10)));
        // "0" at col 0, "10" at col 11, "12" at col 14
        assert_eq!(axis, format!("0{}10 12", " ".repeat(10)));
    }

    #[test]
    fn test_gantt_long_idle_gap_collapses() {
        let arrival = 1_000_000_000_000_000;
        let schedule =
            SjfScheduler::new().schedule(&[ProcessDescriptor::new(1, "A", 1).with_arrival(arrival)]);
        let report = Report::new(&schedule);
        let (bar, axis) = report.gantt();

        assert_eq!(bar, "|..~..| A |");
        assert_eq!(
            axis,
            format!("0{}1000000000000000 1000000000000001", " ".repeat(5))
        );
        assert!(report.to_string().len() < 1_000);
    }

    #[test]
    fn test_gantt_huge_burst_capped() {
        let schedule =
            SjfScheduler::new().schedule(&[ProcessDescriptor::new(1, "A", i64::MAX / 2)]);
        let (bar, _) = Report::new(&schedule)
            .with_unit_width(usize::MAX)
            .gantt();
        assert_eq!(bar.len(), MAX_BLOCK_WIDTH + 2);
    }

    #[test]
    fn test_label_truncated() {
        assert_eq!(block_label("Compiler", 3), "Com");
        assert_eq!(block_label("A", 3), " A ");
    }

    #[test]
    fn test_table_in_submission_order() {
        let schedule = staggered();
        let text = Report::new(&schedule).to_string();
        let rows: Vec<Vec<&str>> = text
            .lines()
            .skip_while(|l| !l.starts_with("Process"))
            .skip(1)
            .take(3)
            .map(|l| l.split_whitespace().collect())
            .collect();

        assert_eq!(rows[0], vec!["A", "0", "5", "5", "5", "0"]);
        assert_eq!(rows[1], vec!["B", "1", "3", "9", "8", "5"]);
        assert_eq!(rows[2], vec!["C", "2", "1", "6", "4", "3"]);
    }

    #[test]
    fn test_averages_two_decimals() {
        let schedule = staggered();
        let report = Report::new(&schedule);
        assert_eq!(report.averages(), ("5.67".to_string(), "2.67".to_string()));

        let text = report.to_string();
        assert!(text.contains("Average Turnaround Time: 5.67"));
        assert!(text.contains("Average Waiting Time: 2.67"));
    }

    #[test]
    fn test_kpi_section() {
        let schedule = staggered();
        let text = Report::new(&schedule).with_kpi(true).to_string();
        assert!(text.contains("Makespan: 9"));
        assert!(text.contains("CPU Utilization: 100.00%"));

        let plain = Report::new(&schedule).to_string();
        assert!(!plain.contains("Makespan"));
    }

    #[test]
    fn test_empty_report() {
        let schedule = SjfSchedule::new();
        assert_eq!(Report::new(&schedule).to_string(), "No processes scheduled.\n");
    }
}
