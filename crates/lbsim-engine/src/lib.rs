//! lbsim-engine — the discrete-time simulation loop.
//!
//! Owns the request queue, the worker pool, and the pool controller for a
//! single run and advances them one tick at a time:
//!
//! ```text
//! tick t
//!   1. t % request_interval == 0 → generate → AdmissionFilter → queue | Blocked
//!   2. dispatch queue head to idle workers (pool order)
//!   3. advance every worker
//!   4. cooldown > 0 ? cooldown -= 1 : PoolController → ScaleUp | ScaleDown
//! ```
//!
//! A run is deterministic for a given config and seed. Independent runs
//! share nothing and can be driven in parallel (see [`driver::run_batch`]).

pub mod driver;
pub mod engine;
pub mod error;
pub mod events;
pub mod generator;
pub mod stats;

pub use driver::{run_batch, run_until_shutdown};
pub use engine::{ClockState, Engine};
pub use error::{EngineError, EngineResult};
pub use events::{TickEvent, TickEvents};
pub use generator::{RandomRequestGenerator, RequestGenerator, SequenceGenerator};
pub use stats::StatsSnapshot;
