//! Input validation: raw text rows to `Job`s.
//!
//! Each row must carry a non-empty name and integer duration, priority
//! and deadline, with a positive duration. Validation is fail-fast: the
//! first bad row aborts the whole run and its 1-based index is reported.
//!
//! Job ids are always the 0-based row index; rows carry no id field.

use serde::{Deserialize, Serialize};

use crate::error::ScheduleError;
use crate::models::Job;

/// One unvalidated input row, as entered or imported.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawRow {
    pub name: String,
    pub duration: String,
    pub priority: String,
    pub deadline: String,
}

impl RawRow {
    /// Creates a row from its four text fields.
    pub fn new(
        name: impl Into<String>,
        duration: impl Into<String>,
        priority: impl Into<String>,
        deadline: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            duration: duration.into(),
            priority: priority.into(),
            deadline: deadline.into(),
        }
    }
}

/// Converts the row at 0-based `index` into a job.
///
/// Errors carry `index + 1`.
pub fn parse_row(index: usize, row: &RawRow) -> Result<Job, ScheduleError> {
    let line = index + 1;

    let name = row.name.trim();
    if name.is_empty() {
        return Err(ScheduleError::EmptyName { row: line });
    }

    let duration = parse_field(line, "duration", &row.duration)?;
    let priority = parse_field(line, "priority", &row.priority)?;
    let deadline = parse_field(line, "deadline", &row.deadline)?;

    if duration <= 0 {
        return Err(ScheduleError::InvalidDuration {
            row: line,
            duration,
        });
    }

    Ok(Job {
        id: index,
        name: name.to_string(),
        duration,
        priority,
        deadline,
    })
}

/// Converts every row, stopping at the first invalid one.
pub fn parse_rows(rows: &[RawRow]) -> Result<Vec<Job>, ScheduleError> {
    rows.iter()
        .enumerate()
        .map(|(index, row)| parse_row(index, row))
        .collect()
}

fn parse_field(row: usize, field: &'static str, raw: &str) -> Result<i64, ScheduleError> {
    raw.trim().parse::<i64>().map_err(|_| ScheduleError::Parse {
        row,
        field,
        value: raw.to_string(),
    })
}
