//! Run statistics.

use serde::{Deserialize, Serialize};

/// Counters accumulated over a run, plus final pool/queue sizes.
///
/// `requests_generated == requests_blocked + requests_admitted` holds at
/// every tick boundary.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsSnapshot {
    pub ticks_run: u64,
    pub requests_generated: u64,
    pub requests_blocked: u64,
    pub requests_admitted: u64,
    pub requests_dispatched: u64,
    pub requests_completed: u64,
    pub scale_up_events: u64,
    pub scale_down_events: u64,
    pub final_worker_count: usize,
    pub final_queue_length: usize,
}

impl StatsSnapshot {
    /// Requests that passed admission. Same as `requests_admitted`.
    pub fn requests_processed(&self) -> u64 {
        self.requests_generated - self.requests_blocked
    }
}
