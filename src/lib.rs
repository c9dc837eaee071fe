//! Policy-driven job ordering and greedy parallel-machine scheduling.
//!
//! A run is strictly one-way: raw rows → [`validation`] → jobs →
//! [`dispatching::order`] → ordered jobs → [`scheduler::MachineAssigner`]
//! → [`models::Schedule`]. No state survives a run, so independent runs
//! may execute concurrently.
//!
//! # Modules
//!
//! - **`models`**: `Job`, `Machine`, `ScheduledJob`, `Schedule`
//! - **`dispatching`**: `Policy` and the four ordering rules
//! - **`scheduler`**: machine assignment, `schedule_jobs` pipeline, KPIs
//! - **`validation`**: fail-fast row parsing
//! - **`import`**: best-effort `name;duration;priority;deadline` loader
//! - **`config`**: TOML run configuration
//!
//! # Example
//!
//! ```
//! use job_schedule::dispatching::Policy;
//! use job_schedule::scheduler::schedule_jobs;
//! use job_schedule::validation::{parse_rows, RawRow};
//!
//! let rows = vec![
//!     RawRow::new("A", "5", "1", "10"),
//!     RawRow::new("B", "3", "1", "10"),
//!     RawRow::new("C", "8", "1", "10"),
//! ];
//! let jobs = parse_rows(&rows).unwrap();
//! let schedule = schedule_jobs(jobs, Policy::FirstComeFirstServed, 2).unwrap();
//! assert_eq!(schedule.makespan(), 11);
//! ```
//!
//! # References
//!
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems"
//! - Graham (1966), "Bounds for certain multiprocessing anomalies"

pub mod config;
pub mod dispatching;
pub mod error;
pub mod import;
pub mod models;
pub mod scheduler;
pub mod validation;

pub use error::{ImportError, ScheduleError};
