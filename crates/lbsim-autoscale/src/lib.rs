//! lbsim-autoscale — queue-pressure driven pool sizing.
//!
//! Compares the backlog length against per-worker thresholds and grows or
//! shrinks the pool by one worker at a time. A cooldown window prevents
//! rapid oscillation.
//!
//! # Scaling Algorithm
//!
//! ```text
//! if cooldown > 0:
//!     cooldown -= 1
//!     NoChange
//! elif queue_len > max_per_worker * workers:
//!     Grow               // cooldown = cooldown_ticks
//! elif queue_len < min_per_worker * workers and workers > 1:
//!     Shrink             // cooldown = cooldown_ticks
//! else:
//!     NoChange
//! ```
//!
//! Shrinking always removes the last worker in pool order and abandons
//! whatever it was running.

pub mod scaler;

pub use scaler::{PoolController, ScaleDecision, ScalingThresholds, apply};
