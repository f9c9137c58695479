//! Configuration error types.

use thiserror::Error;

/// Errors raised while loading or validating a simulation config.
///
/// Validation errors are fatal to engine construction.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("min_queue_per_worker ({min}) exceeds max_queue_per_worker ({max})")]
    QueueThresholds { min: u32, max: u32 },

    #[error("request duration bounds must be positive")]
    ZeroDuration,

    #[error("min_duration ({min}) exceeds max_duration ({max})")]
    DurationRange { min: u32, max: u32 },

    #[error("initial worker count must be at least 1")]
    NoWorkers,

    #[error("request_interval_ticks must be at least 1")]
    ZeroInterval,

    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

pub type ConfigResult<T> = Result<T, ConfigError>;
