//! Ordered worker pool.
//!
//! Workers are kept in creation order. Dispatch walks that order and
//! scale-down always removes the tail.

use tracing::debug;

use crate::worker::Worker;

/// The ordered collection of workers owned by one simulation.
///
/// Never holds fewer than one worker.
#[derive(Debug)]
pub struct WorkerPool {
    workers: Vec<Worker>,
}

impl WorkerPool {
    /// Create a pool of `size` idle workers, clamped to at least one.
    pub fn new(size: u32) -> Self {
        let mut pool = Self {
            workers: Vec::with_capacity(size.max(1) as usize),
        };
        for _ in 0..size.max(1) {
            pool.grow();
        }
        pool
    }

    /// Append a new idle worker. Returns the new pool size.
    pub fn grow(&mut self) -> usize {
        let id = self.workers.len() as u32 + 1;
        self.workers.push(Worker::new(id));
        self.workers.len()
    }

    /// Remove the last worker, abandoning any in-flight request.
    ///
    /// Returns the new pool size, or `None` if the pool is already at its
    /// single-worker floor.
    pub fn shrink(&mut self) -> Option<usize> {
        if self.workers.len() <= 1 {
            return None;
        }
        if let Some(removed) = self.workers.pop()
            && let Some(abandoned) = removed.current_request()
        {
            debug!(
                worker = removed.id(),
                source = abandoned.source_address(),
                remaining = removed.remaining_ticks(),
                "discarding in-flight request on scale-down"
            );
        }
        Some(self.workers.len())
    }

    pub fn len(&self) -> usize {
        self.workers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.workers.is_empty()
    }

    pub fn workers(&self) -> &[Worker] {
        &self.workers
    }

    pub fn workers_mut(&mut self) -> &mut [Worker] {
        &mut self.workers
    }

    /// Advance every worker by one tick. Returns how many finished.
    pub fn advance_all(&mut self) -> usize {
        self.workers
            .iter_mut()
            .filter_map(|w| w.advance())
            .count()
    }

    pub fn idle_count(&self) -> usize {
        self.workers.iter().filter(|w| w.is_idle()).count()
    }
}
