//! FIFO request backlog and the dispatch pass.

use std::collections::VecDeque;

use tracing::trace;

use lbsim_core::Request;

use crate::error::SchedulerResult;
use crate::worker::Worker;

/// Unbounded FIFO of admitted, not-yet-assigned requests.
///
/// Admission filtering happens upstream; `enqueue` never rejects.
#[derive(Debug, Default)]
pub struct RequestQueue {
    backlog: VecDeque<Request>,
}

impl RequestQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn enqueue(&mut self, request: Request) {
        self.backlog.push_back(request);
    }

    pub fn len(&self) -> usize {
        self.backlog.len()
    }

    pub fn is_empty(&self) -> bool {
        self.backlog.is_empty()
    }

    pub fn front(&self) -> Option<&Request> {
        self.backlog.front()
    }

    /// Hand the queue head to every idle worker, in pool order.
    ///
    /// Makes a single pass, so each worker receives at most one request.
    /// Returns the number of requests assigned.
    pub fn try_assign(&mut self, workers: &mut [Worker]) -> SchedulerResult<usize> {
        let mut assigned = 0;
        for worker in workers.iter_mut() {
            if self.backlog.is_empty() {
                break;
            }
            if !worker.is_idle() {
                continue;
            }
            if let Some(request) = self.backlog.pop_front() {
                trace!(
                    worker = worker.id(),
                    source = request.source_address(),
                    duration = request.duration_ticks(),
                    "dispatching request"
                );
                worker.start(request)?;
                assigned += 1;
            }
        }
        Ok(assigned)
    }
}
