//! lbsim.toml configuration parser.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};

/// Tunables for one simulation run.
///
/// Every field has a default, so a partial `lbsim.toml` only needs to
/// list the values it overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Initial worker pool size.
    pub workers: u32,
    /// Number of ticks to run.
    pub ticks: u64,
    /// Requests pre-queued per initial worker before tick 1.
    pub initial_queue_multiplier: u32,
    /// Shrink when the backlog drops below this many requests per worker.
    pub min_queue_per_worker: u32,
    /// Grow when the backlog exceeds this many requests per worker.
    pub max_queue_per_worker: u32,
    /// Ticks to wait after a scaling action before the next one.
    pub cooldown_ticks: u32,
    /// A request is generated on every tick divisible by this value.
    pub request_interval_ticks: u64,
    pub min_duration: u32,
    pub max_duration: u32,
    /// Source-address prefixes rejected at admission.
    pub blocked_prefixes: Vec<String>,
    /// Event log written by the CLI.
    pub log_file: String,
    /// PRNG seed. `None` seeds from entropy.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            workers: 10,
            ticks: 10_000,
            initial_queue_multiplier: 100,
            min_queue_per_worker: 50,
            max_queue_per_worker: 80,
            cooldown_ticks: 10,
            request_interval_ticks: 1,
            min_duration: 5,
            max_duration: 20,
            blocked_prefixes: vec![
                "10.0.0".to_string(),
                "123.43.21".to_string(),
                "123.45.67".to_string(),
            ],
            log_file: "loadbalancer_log.txt".to_string(),
            seed: None,
        }
    }
}

impl SimulationConfig {
    pub fn from_file(path: &Path) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> ConfigResult<Self> {
        let config: SimulationConfig = toml::from_str(content)?;
        Ok(config)
    }

    pub fn to_toml_string(&self) -> ConfigResult<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Check the invariants the engine relies on.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.workers < 1 {
            return Err(ConfigError::NoWorkers);
        }
        if self.min_queue_per_worker > self.max_queue_per_worker {
            return Err(ConfigError::QueueThresholds {
                min: self.min_queue_per_worker,
                max: self.max_queue_per_worker,
            });
        }
        if self.min_duration == 0 || self.max_duration == 0 {
            return Err(ConfigError::ZeroDuration);
        }
        if self.min_duration > self.max_duration {
            return Err(ConfigError::DurationRange {
                min: self.min_duration,
                max: self.max_duration,
            });
        }
        if self.request_interval_ticks == 0 {
            return Err(ConfigError::ZeroInterval);
        }
        Ok(())
    }

    /// Size of the backlog pre-populated before the first tick.
    pub fn initial_queue_size(&self) -> u64 {
        u64::from(self.workers) * u64::from(self.initial_queue_multiplier)
    }
}
