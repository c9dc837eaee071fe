//! Scheduling domain models.
//!
//! | Type | Role | Lifetime |
//! |------|------|----------|
//! | `Job` | Immutable unit of work | One run |
//! | `Machine` | Earliest-availability counter | Owned by the assigner for one run |
//! | `ScheduledJob` | Job × machine × interval | Output |
//! | `Schedule` | All entries of a run | Output |

mod job;
mod machine;
mod schedule;

pub use job::Job;
pub use machine::Machine;
pub use schedule::{DeadlineMiss, Schedule, ScheduledJob};
