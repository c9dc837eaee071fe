//! Job model.
//!
//! A job is a single, non-preemptible unit of work. Jobs are created from
//! validated input at the start of a run and never mutated afterwards.

use serde::{Deserialize, Serialize};

/// A job to be scheduled.
///
/// # Identity
/// `id` is the 0-based input row index. It doubles as the arrival order
/// used by first-come-first-served ordering.
///
/// # Time Representation
/// All times are abstract integer units relative to the start of the run (t=0).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Job {
    /// Unique job identifier (arrival order).
    pub id: usize,
    /// Human-readable name.
    pub name: String,
    /// Processing time. Always positive for validated jobs.
    pub duration: i64,
    /// Scheduling priority (higher = more urgent).
    pub priority: i64,
    /// Absolute due time.
    pub deadline: i64,
}

impl Job {
    /// Creates a job with the given id and duration.
    pub fn new(id: usize, duration: i64) -> Self {
        Self {
            id,
            name: format!("job-{id}"),
            duration,
            priority: 0,
            deadline: 0,
        }
    }

    /// Sets the job name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the scheduling priority.
    pub fn with_priority(mut self, priority: i64) -> Self {
        self.priority = priority;
        self
    }

    /// Sets the deadline.
    pub fn with_deadline(mut self, deadline: i64) -> Self {
        self.deadline = deadline;
        self
    }

    /// Lateness if the job completes at `end_time` (zero when on time).
    pub fn tardiness_at(&self, end_time: i64) -> i64 {
        end_time.saturating_sub(self.deadline).max(0)
    }
}
