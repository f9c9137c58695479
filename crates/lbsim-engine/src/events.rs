//! Per-tick observable events.
//!
//! `Display` renders the event-log line format, e.g.
//! `[CYCLE 12] SCALE UP → 11 servers | Queue: 881`.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Something a log renderer may want to record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TickEvent {
    /// A generated request was rejected by the admission filter.
    Blocked {
        tick: u64,
        address: String,
        queue_len_after: usize,
    },
    /// The pool grew by one worker.
    ScaleUp {
        tick: u64,
        new_worker_count: usize,
        queue_len: usize,
    },
    /// The pool shrank by one worker.
    ScaleDown {
        tick: u64,
        new_worker_count: usize,
        queue_len: usize,
    },
}

impl TickEvent {
    pub fn tick(&self) -> u64 {
        match self {
            TickEvent::Blocked { tick, .. }
            | TickEvent::ScaleUp { tick, .. }
            | TickEvent::ScaleDown { tick, .. } => *tick,
        }
    }
}

impl fmt::Display for TickEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TickEvent::Blocked {
                tick,
                address,
                queue_len_after,
            } => write!(f, "[CYCLE {tick}] BLOCKED → {address} | Queue: {queue_len_after}"),
            TickEvent::ScaleUp {
                tick,
                new_worker_count,
                queue_len,
            } => write!(
                f,
                "[CYCLE {tick}] SCALE UP → {new_worker_count} servers | Queue: {queue_len}"
            ),
            TickEvent::ScaleDown {
                tick,
                new_worker_count,
                queue_len,
            } => write!(
                f,
                "[CYCLE {tick}] SCALE DOWN → {new_worker_count} servers | Queue: {queue_len}"
            ),
        }
    }
}

/// Everything that happened during one tick.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TickEvents {
    pub tick: u64,
    /// Requests started on a worker this tick.
    pub dispatched: usize,
    /// Requests that finished this tick.
    pub completed: usize,
    pub events: Vec<TickEvent>,
}
