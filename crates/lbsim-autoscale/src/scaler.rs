//! Pool controller — threshold evaluation and cooldown tracking.

use serde::{Deserialize, Serialize};
use tracing::debug;

use lbsim_scheduler::WorkerPool;

/// A scaling decision for the worker pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScaleDecision {
    /// Add one worker.
    Grow,
    /// Remove the last worker.
    Shrink,
    /// No change needed.
    NoChange,
}

/// Per-worker backlog bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScalingThresholds {
    pub min_queue_per_worker: u32,
    pub max_queue_per_worker: u32,
}

impl ScalingThresholds {
    /// Pure threshold check, ignoring cooldown.
    pub fn evaluate(&self, queue_len: usize, worker_count: usize) -> ScaleDecision {
        let queue_len = queue_len as u64;
        let workers = worker_count as u64;

        if queue_len > u64::from(self.max_queue_per_worker) * workers {
            ScaleDecision::Grow
        } else if queue_len < u64::from(self.min_queue_per_worker) * workers && worker_count > 1 {
            ScaleDecision::Shrink
        } else {
            ScaleDecision::NoChange
        }
    }
}

/// Evaluates queue pressure and rate-limits scaling with a cooldown.
#[derive(Debug, Clone)]
pub struct PoolController {
    thresholds: ScalingThresholds,
    cooldown_ticks: u32,
    cooldown_remaining: u32,
}

impl PoolController {
    pub fn new(thresholds: ScalingThresholds, cooldown_ticks: u32) -> Self {
        Self {
            thresholds,
            cooldown_ticks,
            cooldown_remaining: 0,
        }
    }

    /// Threshold evaluation without touching the cooldown.
    pub fn evaluate(&self, queue_len: usize, worker_count: usize) -> ScaleDecision {
        self.thresholds.evaluate(queue_len, worker_count)
    }

    /// Called once per tick.
    ///
    /// While cooling down this only decrements the counter. Otherwise it
    /// evaluates the thresholds and, if an action is due, restarts the
    /// cooldown at `cooldown_ticks`.
    pub fn decide(&mut self, queue_len: usize, worker_count: usize) -> ScaleDecision {
        if self.cooldown_remaining > 0 {
            self.cooldown_remaining -= 1;
            return ScaleDecision::NoChange;
        }

        let decision = self.evaluate(queue_len, worker_count);
        if decision != ScaleDecision::NoChange {
            self.cooldown_remaining = self.cooldown_ticks;
            debug!(
                ?decision,
                queue_len,
                workers = worker_count,
                cooldown = self.cooldown_ticks,
                "scaling decision"
            );
        }
        decision
    }

    pub fn cooldown_remaining(&self) -> u32 {
        self.cooldown_remaining
    }

    pub fn cooldown_ticks(&self) -> u32 {
        self.cooldown_ticks
    }

    pub fn thresholds(&self) -> ScalingThresholds {
        self.thresholds
    }
}

/// Apply a decision to the pool.
///
/// Returns the new pool size if the pool changed.
pub fn apply(decision: ScaleDecision, pool: &mut WorkerPool) -> Option<usize> {
    match decision {
        ScaleDecision::Grow => Some(pool.grow()),
        ScaleDecision::Shrink => pool.shrink(),
        ScaleDecision::NoChange => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controller(cooldown: u32) -> PoolController {
        PoolController::new(
            ScalingThresholds {
                min_queue_per_worker: 50,
                max_queue_per_worker: 80,
            },
            cooldown,
        )
    }

    #[test]
    fn grow_above_max_threshold() {
        let ctl = controller(0);
        assert_eq!(ctl.evaluate(161, 2), ScaleDecision::Grow);
        assert_eq!(ctl.evaluate(160, 2), ScaleDecision::NoChange);
    }

    #[test]
    fn shrink_below_min_threshold() {
        let ctl = controller(0);
        assert_eq!(ctl.evaluate(99, 2), ScaleDecision::Shrink);
        assert_eq!(ctl.evaluate(100, 2), ScaleDecision::NoChange);
    }

    #[test]
    fn single_worker_never_shrinks() {
        let ctl = controller(0);
        assert_eq!(ctl.evaluate(0, 1), ScaleDecision::NoChange);
    }

    #[test]
    fn grow_scenario_resets_cooldown() {
        let mut ctl = controller(200);
        let mut pool = WorkerPool::new(2);

        let decision = ctl.decide(161, pool.len());
        assert_eq!(decision, ScaleDecision::Grow);
        assert_eq!(apply(decision, &mut pool), Some(3));
        assert_eq!(pool.len(), 3);
        assert_eq!(ctl.cooldown_remaining(), 200);
    }

    #[test]
    fn cooldown_blocks_actions_until_zero() {
        let mut ctl = controller(3);
        assert_eq!(ctl.decide(1000, 1), ScaleDecision::Grow);
        assert_eq!(ctl.cooldown_remaining(), 3);

        // Threshold still exceeded, but cooling down.
        for expected in [2, 1, 0] {
            assert_eq!(ctl.decide(1000, 2), ScaleDecision::NoChange);
            assert_eq!(ctl.cooldown_remaining(), expected);
        }
        assert_eq!(ctl.decide(1000, 2), ScaleDecision::Grow);
        assert_eq!(ctl.cooldown_remaining(), 3);
    }

    #[test]
    fn shrink_also_resets_cooldown() {
        let mut ctl = controller(5);
        assert_eq!(ctl.decide(0, 4), ScaleDecision::Shrink);
        assert_eq!(ctl.cooldown_remaining(), 5);
    }

    #[test]
    fn no_change_leaves_cooldown_at_zero() {
        let mut ctl = controller(5);
        assert_eq!(ctl.decide(130, 2), ScaleDecision::NoChange);
        assert_eq!(ctl.cooldown_remaining(), 0);
    }

    #[test]
    fn repeated_shrinks_stop_at_one_worker() {
        let mut ctl = controller(0);
        let mut pool = WorkerPool::new(4);

        for _ in 0..10 {
            let decision = ctl.decide(0, pool.len());
            apply(decision, &mut pool);
        }
        assert_eq!(pool.len(), 1);
    }

    #[test]
    fn apply_no_change_is_noop() {
        let mut pool = WorkerPool::new(2);
        assert_eq!(apply(ScaleDecision::NoChange, &mut pool), None);
        assert_eq!(pool.len(), 2);
    }
}
