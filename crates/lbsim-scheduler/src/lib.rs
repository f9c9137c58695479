//! lbsim-scheduler — admission, dispatch, and worker pool management.
//!
//! Accepted requests wait in a FIFO `RequestQueue`. Once per tick the
//! dispatcher walks the `WorkerPool` in pool order and hands the queue
//! head to every idle worker.
//!
//! # Architecture
//!
//! ```text
//! AdmissionFilter (blocked source prefixes)
//!   └── RequestQueue (FIFO backlog)
//!         └── try_assign() ──► WorkerPool
//!                                ├── Worker 1 (single slot)
//!                                ├── Worker 2
//!                                └── ...      (grow/shrink at the tail)
//! ```

pub mod admission;
pub mod error;
pub mod pool;
pub mod queue;
pub mod worker;

pub use admission::{AdmissionFilter, is_blocked};
pub use error::{SchedulerError, SchedulerResult};
pub use pool::WorkerPool;
pub use queue::RequestQueue;
pub use worker::Worker;
