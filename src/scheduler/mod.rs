//! Machine assignment, the order-then-assign pipeline, and KPI evaluation.
//!
//! # Algorithm
//!
//! `MachineAssigner` is greedy list scheduling: each job, in policy order,
//! goes to the machine that becomes free earliest. It is not optimal for
//! makespan or lateness.
//!
//! # References
//!
//! - Graham (1966), "Bounds for certain multiprocessing anomalies"
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 5

mod assigner;
mod kpi;

pub use assigner::{assign, MachineAssigner, MachineSelection};
pub use kpi::ScheduleKpi;

use tracing::{info, warn};

use crate::dispatching::{order, Policy};
use crate::error::ScheduleError;
use crate::models::{Job, Schedule};

/// Orders `jobs` by `policy`, then assigns them to `machine_count` machines.
///
/// The machine count is checked before any work is done.
pub fn schedule_jobs(
    jobs: Vec<Job>,
    policy: Policy,
    machine_count: usize,
) -> Result<Schedule, ScheduleError> {
    let assigner = MachineAssigner::new(machine_count)?;
    let job_count = jobs.len();
    let ordered = order(jobs, policy);
    let schedule = assigner.assign(&ordered)?;

    info!(
        jobs = job_count,
        machines = machine_count,
        %policy,
        makespan = schedule.makespan(),
        "schedule complete"
    );
    for miss in schedule.deadline_misses() {
        warn!(
            job = miss.job_id,
            name = %miss.name,
            deadline = miss.deadline,
            end = miss.end_time,
            "job finishes after its deadline"
        );
    }

    Ok(schedule)
}
