//! Machine simulation state.

use serde::{Deserialize, Serialize};

/// A simulated parallel machine.
///
/// Not a worker: only tracks the earliest time the machine can take its
/// next job. `available_time` starts at 0 and never decreases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Machine {
    /// Machine identifier in `0..machine_count`.
    pub id: usize,
    /// Earliest time the machine is free.
    pub available_time: i64,
}

impl Machine {
    /// Creates an idle machine, free at t=0.
    pub fn new(id: usize) -> Self {
        Self {
            id,
            available_time: 0,
        }
    }

    /// Occupies the machine for `duration` starting at its available time.
    ///
    /// Returns `(start, end)`, or `None` if `end` overflows.
    pub(crate) fn occupy(&mut self, duration: i64) -> Option<(i64, i64)> {
        let start = self.available_time;
        let end = start.checked_add(duration)?;
        self.available_time = end;
        Some((start, end))
    }
}
