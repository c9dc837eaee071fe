//! Run configuration loaded from TOML.
//!
//! ```toml
//! policy = "edf"
//! machines = 3
//! ```
//!
//! Missing keys fall back to defaults (`priority`, one machine).
//! Command-line flags override file values.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::dispatching::Policy;
use crate::error::ScheduleError;

/// Errors raised while loading a configuration file.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid config: {0}")]
    Toml(#[from] toml::de::Error),

    #[error(transparent)]
    Invalid(#[from] ScheduleError),
}

/// Settings for one scheduling run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RunConfig {
    /// Ordering policy.
    #[serde(default, deserialize_with = "deserialize_policy")]
    pub policy: Policy,

    /// Number of parallel machines.
    #[serde(default = "default_machines")]
    pub machines: usize,
}

fn default_machines() -> usize {
    1
}

/// Accepts any form `Policy::from_str` does (`"sjf"`, `"shortest_job_first"`, `1`).
fn deserialize_policy<'de, D>(deserializer: D) -> Result<Policy, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Index(usize),
        Name(String),
    }

    match Raw::deserialize(deserializer)? {
        Raw::Index(i) => Policy::from_index(i)
            .ok_or_else(|| serde::de::Error::custom(format!("unknown policy index {i}"))),
        Raw::Name(s) => s.parse().map_err(serde::de::Error::custom),
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            policy: Policy::default(),
            machines: default_machines(),
        }
    }
}

impl RunConfig {
    /// Parses and validates a TOML document.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads config from `path`, or defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => {
                debug!(path = %path.display(), "loading config");
                Self::from_toml_str(&fs::read_to_string(path)?)
            }
            None => Ok(Self::default()),
        }
    }

    /// Applies command-line overrides.
    pub fn with_overrides(mut self, policy: Option<Policy>, machines: Option<usize>) -> Self {
        if let Some(policy) = policy {
            self.policy = policy;
        }
        if let Some(machines) = machines {
            self.machines = machines;
        }
        self
    }

    /// Rejects a zero machine count.
    pub fn validate(&self) -> Result<(), ScheduleError> {
        if self.machines == 0 {
            return Err(ScheduleError::InvalidMachineCount(self.machines));
        }
        Ok(())
    }
}
