//! Engine error types.

use thiserror::Error;

/// Errors surfaced by the simulation engine.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("invalid configuration: {0}")]
    Config(#[from] lbsim_core::ConfigError),

    /// Dispatch sequencing fault. Never expected in a correct run.
    #[error("invariant violation: {0}")]
    Invariant(#[from] lbsim_scheduler::SchedulerError),

    #[error("simulation already finished after {ticks} ticks")]
    Finished { ticks: u64 },

    #[error("simulation task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

pub type EngineResult<T> = Result<T, EngineError>;
