use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use serde::Serialize;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use sjf_schedule::models::{NewProcess, ProcessTable, SjfSchedule};
use sjf_schedule::report::Report;
use sjf_schedule::scheduler::{ScheduleKpi, SjfScheduler};
use sjf_schedule::validation::ValidationError;
use sjf_schedule::workload::WorkloadConfig;

/// Simulate non-preemptive Shortest-Job-First CPU scheduling and report
/// the Gantt timeline, per-process metrics, and averages.
#[derive(Parser)]
#[command(author, version, about)]
struct Cli {
    #[command(flatten)]
    verbose: Verbosity<WarnLevel>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Schedule a set of processes
    ///
    /// Processes from --file are added first, then each --process in order.
    Run {
        /// JSON file with an array of {name, arrival_time, burst_time, id?}
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Inline process; name and arrival may be left empty
        #[arg(short, long = "process", value_name = "NAME:ARRIVAL:BURST")]
        processes: Vec<String>,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Gantt characters per time unit
        #[arg(long, default_value_t = 3)]
        unit_width: usize,

        /// Include utilization, idle time, and throughput
        #[arg(long)]
        kpi: bool,
    },

    /// Print a random process set as JSON
    Generate {
        /// Number of processes
        #[arg(short, long, default_value_t = 5)]
        count: usize,

        /// Latest arrival time
        #[arg(long, default_value_t = 10)]
        max_arrival: i64,

        /// Shortest burst time
        #[arg(long, default_value_t = 1)]
        min_burst: i64,

        /// Longest burst time
        #[arg(long, default_value_t = 10)]
        max_burst: i64,

        /// RNG seed
        #[arg(long, default_value_t = 0)]
        seed: u64,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Serialize)]
struct JsonOutput<'a> {
    #[serde(flatten)]
    schedule: &'a SjfSchedule,
    #[serde(skip_serializing_if = "Option::is_none")]
    kpi: Option<ScheduleKpi>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so stdout stays clean for JSON output.
    let level = cli.verbose.tracing_level_filter();
    let filter = EnvFilter::new(format!("warn,sjf_schedule={level}"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Run {
            file,
            processes,
            format,
            unit_width,
            kpi,
        } => {
            let table = build_table(file.as_deref(), &processes)?;
            info!(processes = table.len(), "scheduling");

            let schedule = table
                .schedule(&SjfScheduler::new())
                .or_else(|errors| reject(&errors))?;

            match format {
                OutputFormat::Text => {
                    let report = Report::new(&schedule)
                        .with_unit_width(unit_width)
                        .with_kpi(kpi);
                    write!(out, "{report}")?;
                }
                OutputFormat::Json => {
                    let output = JsonOutput {
                        schedule: &schedule,
                        kpi: kpi.then(|| ScheduleKpi::calculate(&schedule)),
                    };
                    serde_json::to_writer_pretty(&mut out, &output)?;
                    writeln!(out)?;
                }
            }
        }
        Commands::Generate {
            count,
            max_arrival,
            min_burst,
            max_burst,
            seed,
        } => {
            let processes = WorkloadConfig::new(count)
                .with_max_arrival(max_arrival)
                .with_burst_range(min_burst, max_burst)
                .with_seed(seed)
                .generate()
                .or_else(|errors| reject(&errors))?;
            serde_json::to_writer_pretty(&mut out, &processes)?;
            writeln!(out)?;
        }
    }

    Ok(())
}

/// Collects processes from the JSON file and inline arguments.
///
/// Every rejected submission is reported before failing.
fn build_table(file: Option<&Path>, inline: &[String]) -> Result<ProcessTable> {
    let mut entries = Vec::new();
    let mut errors = Vec::new();

    if let Some(path) = file {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let parsed: Vec<NewProcess> = serde_json::from_str(&text)
            .with_context(|| format!("failed to parse process list in {}", path.display()))?;
        entries.extend(parsed);
    }

    for arg in inline {
        match arg.parse::<NewProcess>() {
            Ok(entry) => entries.push(entry),
            Err(err) => errors.push(err),
        }
    }

    let mut table = ProcessTable::new();
    for entry in entries {
        if let Err(err) = table.add(entry) {
            errors.push(err);
        }
    }

    if errors.is_empty() {
        Ok(table)
    } else {
        reject(&errors)
    }
}

fn reject<T>(errors: &[ValidationError]) -> Result<T> {
    for err in errors {
        warn!(kind = ?err.kind, "{}", err.message);
        eprintln!("error: {err}");
    }
    bail!("{} invalid input(s), nothing scheduled", errors.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use sjf_schedule::validation::ValidationErrorKind;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_run() {
        let cli = Cli::try_parse_from([
            "sjf-schedule",
            "run",
            "-p",
            "A:0:5",
            "--process",
            "B:1:3",
            "--format",
            "json",
            "--kpi",
        ])
        .unwrap();

        match cli.command {
            Commands::Run {
                processes,
                format,
                kpi,
                unit_width,
                file,
            } => {
                assert_eq!(processes, vec!["A:0:5", "B:1:3"]);
                assert_eq!(format, OutputFormat::Json);
                assert!(kpi);
                assert_eq!(unit_width, 3);
                assert!(file.is_none());
            }
            Commands::Generate { .. } => panic!("expected run"),
        }
    }

    #[test]
    fn test_build_table_inline() {
        let inline = vec!["A:0:5".to_string(), ":1:3".to_string()];
        let table = build_table(None, &inline).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.processes()[1].name, "P2");
    }

    #[test]
    fn test_build_table_rejects_bad_burst() {
        let inline = vec!["A:0:5".to_string(), "B:0:0".to_string()];
        assert!(build_table(None, &inline).is_err());
    }

    #[test]
    fn test_json_output_shape() {
        let table = build_table(None, &["A:0:2".to_string()]).unwrap();
        let schedule = table.schedule(&SjfScheduler::new()).unwrap();
        let output = JsonOutput {
            schedule: &schedule,
            kpi: None,
        };
        let value = serde_json::to_value(&output).unwrap();
        assert!(value.get("timeline").is_some());
        assert!(value.get("metrics").is_some());
        assert!(value["averages"].get("mean_waiting").is_some());
        assert!(value.get("kpi").is_none());
    }

    #[test]
    fn test_reject_reports_count() {
        let errors = vec![ValidationError {
            kind: ValidationErrorKind::EmptyInput,
            message: "Please add at least one process".into(),
        }];
        let err = reject::<()>(&errors).unwrap_err();
        assert!(err.to_string().contains("1 invalid input"));
    }
}
