//! Policy selection.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::rules::{ByPriority, Edd, Fcfs, Spt};
use super::OrderingRule;

/// Job-ordering policy selected by the caller.
///
/// Numeric ids (`index`) follow the order the policies are offered in:
/// 0 = priority, 1 = shortest first, 2 = earliest deadline, 3 = arrival.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Policy {
    /// Descending priority.
    #[default]
    ByPriority,
    /// Ascending duration.
    ShortestJobFirst,
    /// Ascending deadline.
    EarliestDeadlineFirst,
    /// Ascending id (arrival order).
    FirstComeFirstServed,
}

/// Unrecognized policy identifier.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown policy '{0}' (expected priority, sjf, edf or fcfs)")]
pub struct ParsePolicyError(pub String);

impl Policy {
    /// All policies in numeric-id order.
    pub const ALL: [Policy; 4] = [
        Policy::ByPriority,
        Policy::ShortestJobFirst,
        Policy::EarliestDeadlineFirst,
        Policy::FirstComeFirstServed,
    ];

    /// Stable numeric id.
    pub fn index(self) -> usize {
        match self {
            Policy::ByPriority => 0,
            Policy::ShortestJobFirst => 1,
            Policy::EarliestDeadlineFirst => 2,
            Policy::FirstComeFirstServed => 3,
        }
    }

    /// Looks up a policy by numeric id.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Short string id, accepted by `FromStr`.
    pub fn as_str(self) -> &'static str {
        match self {
            Policy::ByPriority => "priority",
            Policy::ShortestJobFirst => "sjf",
            Policy::EarliestDeadlineFirst => "edf",
            Policy::FirstComeFirstServed => "fcfs",
        }
    }

    /// The comparator backing this policy.
    pub fn rule(self) -> &'static dyn OrderingRule {
        match self {
            Policy::ByPriority => &ByPriority,
            Policy::ShortestJobFirst => &Spt,
            Policy::EarliestDeadlineFirst => &Edd,
            Policy::FirstComeFirstServed => &Fcfs,
        }
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Policy {
    type Err = ParsePolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace(['-', ' '], "_");
        match normalized.as_str() {
            "priority" | "by_priority" => Ok(Policy::ByPriority),
            "sjf" | "spt" | "shortest_job_first" => Ok(Policy::ShortestJobFirst),
            "edf" | "edd" | "earliest_deadline_first" => Ok(Policy::EarliestDeadlineFirst),
            "fcfs" | "fifo" | "first_come_first_served" => Ok(Policy::FirstComeFirstServed),
            other => match other.parse::<usize>().ok().and_then(Policy::from_index) {
                Some(policy) => Ok(policy),
                None => Err(ParsePolicyError(s.to_string())),
            },
        }
    }
}
