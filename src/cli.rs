use std::path::PathBuf;

use clap::Parser;
use job_schedule::dispatching::Policy;

/// Order jobs by a dispatching policy and schedule them on parallel machines.
///
/// Reads `name;duration;priority;deadline` lines from INPUT and prints
/// `name, start, end, machine` for every job in schedule order.
#[derive(Parser, Debug)]
#[command(name = "job-schedule", version, about)]
pub struct CliArgs {
    /// Semicolon-delimited job file
    pub input: PathBuf,

    /// Ordering policy: priority, sjf, edf, fcfs (or 0-3)
    #[arg(long, short, env = "JOB_SCHEDULE_POLICY")]
    pub policy: Option<Policy>,

    /// Number of parallel machines
    #[arg(long, short, env = "JOB_SCHEDULE_MACHINES")]
    pub machines: Option<usize>,

    /// Path to a TOML config file with `policy` and `machines`
    #[arg(long, env = "JOB_SCHEDULE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Print the schedule as JSON
    #[arg(long)]
    pub json: bool,

    /// Append makespan, tardiness and utilization figures
    #[arg(long)]
    pub summary: bool,
}
