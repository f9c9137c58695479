//! Single-slot worker.

use lbsim_core::Request;

use crate::error::{SchedulerError, SchedulerResult};

/// Processes at most one request at a time, one tick of work per advance.
///
/// Invariant: when `busy` is false, `remaining_ticks` is 0 and there is no
/// current request.
#[derive(Debug, Clone)]
pub struct Worker {
    id: u32,
    busy: bool,
    remaining_ticks: u32,
    current_request: Option<Request>,
}

impl Worker {
    pub fn new(id: u32) -> Self {
        Self {
            id,
            busy: false,
            remaining_ticks: 0,
            current_request: None,
        }
    }

    /// Begin processing `request`.
    ///
    /// Fails with `WorkerBusy` if the worker still holds unfinished work;
    /// dispatch must only target idle workers.
    pub fn start(&mut self, request: Request) -> SchedulerResult<()> {
        if !self.is_idle() {
            return Err(SchedulerError::WorkerBusy { worker_id: self.id });
        }
        self.remaining_ticks = request.duration_ticks();
        self.busy = true;
        self.current_request = Some(request);
        Ok(())
    }

    /// True when no work is pending. A countdown at zero counts as idle
    /// even if `busy` has not been cleared yet.
    pub fn is_idle(&self) -> bool {
        !self.busy || self.remaining_ticks == 0
    }

    /// Run one tick of the current request.
    ///
    /// Returns the request if it completed on this tick. No-op when idle.
    pub fn advance(&mut self) -> Option<Request> {
        if !self.busy {
            return None;
        }
        self.remaining_ticks = self.remaining_ticks.saturating_sub(1);
        if self.remaining_ticks == 0 {
            self.busy = false;
            return self.current_request.take();
        }
        None
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    pub fn remaining_ticks(&self) -> u32 {
        self.remaining_ticks
    }

    pub fn current_request(&self) -> Option<&Request> {
        self.current_request.as_ref()
    }
}
