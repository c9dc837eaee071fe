//! Job ordering by dispatching policy.
//!
//! Produces a total order over jobs with a stable sort, so jobs with
//! equal keys keep their input order under every policy. Ordering has no
//! machine awareness and never fails.
//!
//! # Usage
//!
//! ```
//! use job_schedule::dispatching::{order, Policy};
//! use job_schedule::models::Job;
//!
//! let jobs = vec![Job::new(0, 5), Job::new(1, 3), Job::new(2, 8)];
//! let ordered = order(jobs, Policy::ShortestJobFirst);
//! let ids: Vec<usize> = ordered.iter().map(|j| j.id).collect();
//! assert_eq!(ids, vec![1, 0, 2]);
//! ```
//!
//! # References
//!
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 4

mod policy;
pub mod rules;

pub use policy::{ParsePolicyError, Policy};

use crate::models::Job;
use std::cmp::Ordering;
use std::fmt::Debug;

/// A comparator that decides which of two jobs is scheduled first.
///
/// `Ordering::Less` means `a` goes before `b`. Returning `Equal` leaves the
/// pair in input order.
pub trait OrderingRule: Send + Sync + Debug {
    /// Rule name (e.g., "SPT", "EDD").
    fn name(&self) -> &'static str;

    /// Compares two jobs.
    fn compare(&self, a: &Job, b: &Job) -> Ordering;

    /// Rule description.
    fn description(&self) -> &'static str {
        self.name()
    }
}

/// Orders jobs by `policy`.
///
/// Stable: ties preserve input order. The result is a permutation of the input.
pub fn order(mut jobs: Vec<Job>, policy: Policy) -> Vec<Job> {
    let rule = policy.rule();
    jobs.sort_by(|a, b| rule.compare(a, b));
    jobs
}
