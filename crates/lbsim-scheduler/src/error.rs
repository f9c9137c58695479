//! Scheduler error types.

use thiserror::Error;

/// Internal faults in dispatch sequencing.
///
/// These indicate a bug in the caller, not a runtime condition.
#[derive(Debug, Error)]
pub enum SchedulerError {
    #[error("worker {worker_id} is still busy and cannot start a new request")]
    WorkerBusy { worker_id: u32 },
}

pub type SchedulerResult<T> = Result<T, SchedulerError>;
