//! Error types for scheduling runs and file import.
//!
//! Scheduling errors are fail-fast: the first one aborts the run and no
//! partial schedule is returned. Import errors only cover I/O; malformed
//! lines are dropped by the loader instead of failing.

use thiserror::Error;

/// Errors that abort a scheduling run.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    /// A raw field could not be converted to an integer.
    #[error("Invalid input in row {row}: field '{field}' has non-integer value '{value}'")]
    Parse {
        /// 1-based input row.
        row: usize,
        /// Field name (`duration`, `priority`, `deadline`).
        field: &'static str,
        /// The offending raw text.
        value: String,
    },

    /// Duration parsed but is zero or negative.
    #[error("Invalid input in row {row}: duration must be positive, got {duration}")]
    InvalidDuration { row: usize, duration: i64 },

    /// Job name is empty after trimming.
    #[error("Invalid input in row {row}: name must not be empty")]
    EmptyName { row: usize },

    /// A job reached the assigner with a zero or negative duration.
    #[error("Job {job_id} has non-positive duration {duration}")]
    InvalidJobDuration { job_id: usize, duration: i64 },

    /// Machine count passed to the assigner is not positive.
    #[error("Machine count must be positive, got {0}")]
    InvalidMachineCount(usize),

    /// An end time does not fit in the time domain.
    #[error("End time of job {job_id} overflows the time range")]
    TimeOverflow { job_id: usize },
}

impl ScheduleError {
    /// The 1-based input row this error refers to, if any.
    pub fn row(&self) -> Option<usize> {
        match self {
            Self::Parse { row, .. } | Self::InvalidDuration { row, .. } | Self::EmptyName { row } => {
                Some(*row)
            }
            Self::InvalidJobDuration { .. }
            | Self::InvalidMachineCount(_)
            | Self::TimeOverflow { .. } => None,
        }
    }
}

/// Errors raised while reading an import file.
#[derive(Error, Debug)]
pub enum ImportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
