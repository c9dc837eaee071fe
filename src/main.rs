mod cli;
mod render;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use job_schedule::config::RunConfig;
use job_schedule::import;
use job_schedule::scheduler::schedule_jobs;
use job_schedule::validation::parse_rows;

use crate::cli::CliArgs;
use crate::render::{render_schedule, render_summary};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let args = CliArgs::parse();

    let config = RunConfig::load(args.config.as_deref())
        .context("failed to load configuration")?
        .with_overrides(args.policy, args.machines);
    config.validate()?;

    let rows = import::load_file(&args.input)
        .with_context(|| format!("failed to read {}", args.input.display()))?;
    info!(rows = rows.len(), policy = %config.policy, machines = config.machines, "loaded jobs");

    let jobs = parse_rows(&rows)?;
    let schedule = schedule_jobs(jobs, config.policy, config.machines)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&schedule)?);
    } else {
        print!("{}", render_schedule(&schedule));
    }
    if args.summary {
        print!("{}", render_summary(&schedule));
    }

    Ok(())
}
