//! Built-in ordering rules.
//!
//! | Rule | Key | Direction |
//! |------|-----|-----------|
//! | PRIORITY | `priority` | descending |
//! | SPT | `duration` | ascending |
//! | EDD | `deadline` | ascending |
//! | FCFS | `id` | ascending |
//!
//! Rules only compare keys. Equal keys return `Ordering::Equal` so the
//! stable sort in [`order`](super::order) keeps input order.
//!
//! # References
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 4
//! - Haupt (1989), "A Survey of Priority Rule-Based Scheduling"

use std::cmp::Ordering;

use super::OrderingRule;
use crate::models::Job;

/// Highest priority first.
#[derive(Debug, Clone, Copy)]
pub struct ByPriority;

impl OrderingRule for ByPriority {
    fn name(&self) -> &'static str {
        "PRIORITY"
    }

    fn compare(&self, a: &Job, b: &Job) -> Ordering {
        b.priority.cmp(&a.priority)
    }

    fn description(&self) -> &'static str {
        "By Priority"
    }
}

/// Shortest Processing Time.
///
/// Minimizes mean flow time on a single machine.
///
/// # Reference
/// Smith (1956), "Various optimizers for single-stage production"
#[derive(Debug, Clone, Copy)]
pub struct Spt;

impl OrderingRule for Spt {
    fn name(&self) -> &'static str {
        "SPT"
    }

    fn compare(&self, a: &Job, b: &Job) -> Ordering {
        a.duration.cmp(&b.duration)
    }

    fn description(&self) -> &'static str {
        "Shortest Job First"
    }
}

/// Earliest Due Date.
///
/// Minimizes maximum lateness on a single machine. Deadlines are not
/// re-checked against assigned completion times.
///
/// # Reference
/// Jackson (1955), "Scheduling a production line to minimize maximum tardiness"
#[derive(Debug, Clone, Copy)]
pub struct Edd;

impl OrderingRule for Edd {
    fn name(&self) -> &'static str {
        "EDD"
    }

    fn compare(&self, a: &Job, b: &Job) -> Ordering {
        a.deadline.cmp(&b.deadline)
    }

    fn description(&self) -> &'static str {
        "Earliest Deadline First"
    }
}

/// First In First Out, by arrival (input) order.
#[derive(Debug, Clone, Copy)]
pub struct Fcfs;

impl OrderingRule for Fcfs {
    fn name(&self) -> &'static str {
        "FCFS"
    }

    fn compare(&self, a: &Job, b: &Job) -> Ordering {
        a.id.cmp(&b.id)
    }

    fn description(&self) -> &'static str {
        "First Come First Served"
    }
}
