//! Schedule quality metrics (KPIs).
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Makespan (C_max) | Latest completion time |
//! | Total Tardiness | Sum of max(0, completion - deadline) |
//! | Maximum Tardiness | Largest single delay |
//! | On-Time Rate | Fraction meeting deadlines |
//! | Avg Utilization | Mean machine busyness over the makespan |
//! | Avg Flow Time | Mean completion time (all jobs released at t=0) |
//!
//! # Reference
//! Pinedo (2016), "Scheduling", Ch. 1.2: Performance Measures

use serde::{Deserialize, Serialize};

use crate::models::Schedule;

/// Schedule performance indicators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleKpi {
    /// Latest completion time.
    pub makespan: i64,
    /// Sum of tardiness across all jobs.
    pub total_tardiness: i64,
    /// Maximum tardiness of any single job.
    pub max_tardiness: i64,
    /// Number of jobs finishing after their deadline.
    pub late_jobs: usize,
    /// Fraction of jobs completing on time (0.0..1.0).
    pub on_time_rate: f64,
    /// Average machine utilization (0.0..1.0).
    pub avg_utilization: f64,
    /// Per-machine utilization, indexed by machine id.
    pub utilization_by_machine: Vec<f64>,
    /// Mean completion time.
    pub avg_flow_time: f64,
}

impl ScheduleKpi {
    /// Computes KPIs from a completed schedule.
    pub fn calculate(schedule: &Schedule) -> Self {
        let mut total_tardiness: i64 = 0;
        let mut max_tardiness: i64 = 0;
        let mut late_jobs: usize = 0;
        let mut total_flow_time: f64 = 0.0;

        for entry in &schedule.entries {
            total_flow_time += entry.end_time as f64;
            let tardiness = entry.job.tardiness_at(entry.end_time);
            if tardiness > 0 {
                late_jobs += 1;
                total_tardiness = total_tardiness.saturating_add(tardiness);
                max_tardiness = max_tardiness.max(tardiness);
            }
        }

        let utilization_by_machine = schedule.all_utilizations();
        let avg_utilization = if utilization_by_machine.is_empty() {
            0.0
        } else {
            utilization_by_machine.iter().sum::<f64>() / utilization_by_machine.len() as f64
        };

        let count = schedule.len();
        let (on_time_rate, avg_flow_time) = if count == 0 {
            (1.0, 0.0)
        } else {
            (
                (count - late_jobs) as f64 / count as f64,
                total_flow_time / count as f64,
            )
        };

        Self {
            makespan: schedule.makespan(),
            total_tardiness,
            max_tardiness,
            late_jobs,
            on_time_rate,
            avg_utilization,
            utilization_by_machine,
            avg_flow_time,
        }
    }
}
