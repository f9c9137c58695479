//! Simulation clock — owns one run's state and advances it tick by tick.

use tracing::{debug, info};

use lbsim_autoscale::{PoolController, ScaleDecision, ScalingThresholds, apply};
use lbsim_core::SimulationConfig;
use lbsim_scheduler::{AdmissionFilter, RequestQueue, WorkerPool};

use crate::error::{EngineError, EngineResult};
use crate::events::{TickEvent, TickEvents};
use crate::generator::{RandomRequestGenerator, RequestGenerator};
use crate::stats::StatsSnapshot;

/// Where the clock is in its fixed-length run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockState {
    /// The next tick to execute (1-based).
    Running(u64),
    Finished,
}

/// A single simulation run.
///
/// Every tick leaves the engine in a consistent state, so a driver may
/// stop between any two ticks and read a valid snapshot.
pub struct Engine {
    total_ticks: u64,
    request_interval_ticks: u64,
    /// Last completed tick; 0 before the first.
    current_tick: u64,
    filter: AdmissionFilter,
    queue: RequestQueue,
    pool: WorkerPool,
    controller: PoolController,
    generator: Box<dyn RequestGenerator>,
    stats: StatsSnapshot,
}

impl Engine {
    /// Build an engine from a validated config and an injected request source.
    ///
    /// Pre-populates the backlog with `initial_queue_size()` generated
    /// requests, which pass through admission like any other.
    pub fn configure(
        config: &SimulationConfig,
        generator: Box<dyn RequestGenerator>,
    ) -> EngineResult<Self> {
        config.validate()?;

        let thresholds = ScalingThresholds {
            min_queue_per_worker: config.min_queue_per_worker,
            max_queue_per_worker: config.max_queue_per_worker,
        };

        let mut engine = Self {
            total_ticks: config.ticks,
            request_interval_ticks: config.request_interval_ticks,
            current_tick: 0,
            filter: AdmissionFilter::new(config.blocked_prefixes.clone()),
            queue: RequestQueue::new(),
            pool: WorkerPool::new(config.workers),
            controller: PoolController::new(thresholds, config.cooldown_ticks),
            generator,
            stats: StatsSnapshot::default(),
        };

        let initial = config.initial_queue_size();
        for _ in 0..initial {
            engine.admit_next();
        }

        info!(
            workers = config.workers,
            ticks = config.ticks,
            initial_queue = engine.queue.len(),
            initial_blocked = engine.stats.requests_blocked,
            "simulation configured"
        );

        Ok(engine)
    }

    /// Build an engine using the config's seed, or entropy if unset.
    pub fn from_config(config: &SimulationConfig) -> EngineResult<Self> {
        let generator = match config.seed {
            Some(seed) => {
                RandomRequestGenerator::seeded(seed, config.min_duration, config.max_duration)
            }
            None => RandomRequestGenerator::from_entropy(config.min_duration, config.max_duration),
        };
        Self::configure(config, Box::new(generator))
    }

    pub fn state(&self) -> ClockState {
        if self.current_tick >= self.total_ticks {
            ClockState::Finished
        } else {
            ClockState::Running(self.current_tick + 1)
        }
    }

    pub fn is_finished(&self) -> bool {
        self.state() == ClockState::Finished
    }

    /// Execute the next tick.
    pub fn tick(&mut self) -> EngineResult<TickEvents> {
        let tick = match self.state() {
            ClockState::Running(tick) => tick,
            ClockState::Finished => {
                return Err(EngineError::Finished {
                    ticks: self.total_ticks,
                });
            }
        };

        let mut out = TickEvents {
            tick,
            ..Default::default()
        };

        // 1. Arrivals.
        if tick % self.request_interval_ticks == 0
            && let Some(address) = self.admit_next()
        {
            out.events.push(TickEvent::Blocked {
                tick,
                address,
                queue_len_after: self.queue.len(),
            });
        }

        // 2. Dispatch, using idleness left over from the previous tick.
        out.dispatched = self.queue.try_assign(self.pool.workers_mut())?;
        self.stats.requests_dispatched += out.dispatched as u64;

        // 3. Work.
        out.completed = self.pool.advance_all();
        self.stats.requests_completed += out.completed as u64;

        // 4. Pool control.
        let decision = self.controller.decide(self.queue.len(), self.pool.len());
        if let Some(new_worker_count) = apply(decision, &mut self.pool) {
            let queue_len = self.queue.len();
            let event = match decision {
                ScaleDecision::Shrink => {
                    self.stats.scale_down_events += 1;
                    TickEvent::ScaleDown {
                        tick,
                        new_worker_count,
                        queue_len,
                    }
                }
                _ => {
                    self.stats.scale_up_events += 1;
                    TickEvent::ScaleUp {
                        tick,
                        new_worker_count,
                        queue_len,
                    }
                }
            };
            debug!(%event, "pool resized");
            out.events.push(event);
        }

        self.current_tick = tick;
        self.stats.ticks_run = tick;
        Ok(out)
    }

    /// Run up to `n` ticks, stopping early if the run finishes.
    pub fn run_ticks(&mut self, n: u64) -> EngineResult<StatsSnapshot> {
        self.run_ticks_with(n, |_| {})
    }

    /// Like `run_ticks`, passing every event to `on_event` as it happens.
    pub fn run_ticks_with<F>(&mut self, n: u64, mut on_event: F) -> EngineResult<StatsSnapshot>
    where
        F: FnMut(&TickEvent),
    {
        for _ in 0..n {
            if self.is_finished() {
                break;
            }
            let events = self.tick()?;
            events.events.iter().for_each(&mut on_event);
        }
        Ok(self.snapshot())
    }

    /// Run every remaining tick.
    pub fn run(&mut self) -> EngineResult<StatsSnapshot> {
        self.run_ticks(self.remaining_ticks())
    }

    pub fn remaining_ticks(&self) -> u64 {
        self.total_ticks.saturating_sub(self.current_tick)
    }

    /// Current counters with live pool and queue sizes.
    pub fn snapshot(&self) -> StatsSnapshot {
        StatsSnapshot {
            final_worker_count: self.pool.len(),
            final_queue_length: self.queue.len(),
            ..self.stats.clone()
        }
    }

    pub fn queue_len(&self) -> usize {
        self.queue.len()
    }

    pub fn pool(&self) -> &WorkerPool {
        &self.pool
    }

    pub fn cooldown_remaining(&self) -> u32 {
        self.controller.cooldown_remaining()
    }

    pub fn current_tick(&self) -> u64 {
        self.current_tick
    }

    /// Generate one request and run it through admission.
    ///
    /// Returns the source address if it was blocked.
    fn admit_next(&mut self) -> Option<String> {
        let request = self.generator.generate();
        self.stats.requests_generated += 1;

        if self.filter.admits(&request) {
            self.queue.enqueue(request);
            self.stats.requests_admitted += 1;
            None
        } else {
            self.stats.requests_blocked += 1;
            debug!(source = request.source_address(), "request blocked");
            Some(request.source_address().to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::SequenceGenerator;
    use lbsim_core::{Category, Request};

    fn quiet_config() -> SimulationConfig {
        SimulationConfig {
            workers: 1,
            ticks: 100,
            initial_queue_multiplier: 0,
            min_queue_per_worker: 0,
            max_queue_per_worker: 1000,
            cooldown_ticks: 0,
            request_interval_ticks: 1000,
            min_duration: 1,
            max_duration: 10,
            blocked_prefixes: vec!["10.0.0".to_string()],
            seed: Some(1),
            ..Default::default()
        }
    }

    fn seq(requests: Vec<Request>) -> Box<dyn RequestGenerator> {
        Box::new(SequenceGenerator::new(requests))
    }

    #[test]
    fn configure_rejects_invalid_config() {
        let config = SimulationConfig {
            workers: 0,
            ..quiet_config()
        };
        let result = Engine::configure(&config, seq(vec![Request::new("a", "b", 1, Category::P)]));
        assert!(matches!(result, Err(EngineError::Config(_))));
    }

    #[test]
    fn prefill_counts_towards_generated_and_blocked() {
        let config = SimulationConfig {
            workers: 2,
            initial_queue_multiplier: 2,
            ..quiet_config()
        };
        let engine = Engine::configure(
            &config,
            seq(vec![
                Request::new("10.0.0.1", "x", 3, Category::P),
                Request::new("8.8.8.8", "x", 3, Category::S),
            ]),
        )
        .unwrap();

        let snap = engine.snapshot();
        assert_eq!(snap.requests_generated, 4);
        assert_eq!(snap.requests_blocked, 2);
        assert_eq!(snap.final_queue_length, 2);
        assert_eq!(snap.ticks_run, 0);
    }

    #[test]
    fn single_worker_takes_one_request_on_tick_one() {
        let config = SimulationConfig {
            initial_queue_multiplier: 3,
            ..quiet_config()
        };
        let engine_gen = seq(vec![Request::new("1.1.1.1", "x", 5, Category::P)]);
        let mut engine = Engine::configure(&config, engine_gen).unwrap();
        assert_eq!(engine.queue_len(), 3);

        let events = engine.tick().unwrap();
        assert_eq!(events.dispatched, 1);
        assert_eq!(engine.queue_len(), 2);

        for _ in 0..2 {
            let events = engine.tick().unwrap();
            assert_eq!(events.dispatched, 0);
        }
        assert_eq!(engine.queue_len(), 2);
    }

    #[test]
    fn finished_worker_is_reused_on_following_tick() {
        let config = SimulationConfig {
            initial_queue_multiplier: 2,
            ..quiet_config()
        };
        let mut engine =
            Engine::configure(&config, seq(vec![Request::new("1.1.1.1", "x", 1, Category::P)]))
                .unwrap();

        // Tick 1: start and finish the first request.
        let first = engine.tick().unwrap();
        assert_eq!((first.dispatched, first.completed), (1, 1));
        // Tick 2: the freed worker takes the second request.
        let second = engine.tick().unwrap();
        assert_eq!((second.dispatched, second.completed), (1, 1));
        assert_eq!(engine.queue_len(), 0);
    }

    #[test]
    fn blocked_arrival_emits_event_with_queue_len() {
        let config = SimulationConfig {
            request_interval_ticks: 1,
            ..quiet_config()
        };
        let mut engine = Engine::configure(
            &config,
            seq(vec![Request::new("10.0.0.7", "x", 1, Category::P)]),
        )
        .unwrap();

        let events = engine.tick().unwrap();
        assert_eq!(
            events.events,
            vec![TickEvent::Blocked {
                tick: 1,
                address: "10.0.0.7".to_string(),
                queue_len_after: 0,
            }]
        );
    }

    #[test]
    fn arrivals_follow_request_interval() {
        let config = SimulationConfig {
            request_interval_ticks: 3,
            ticks: 10,
            ..quiet_config()
        };
        let mut engine =
            Engine::configure(&config, seq(vec![Request::new("1.1.1.1", "x", 1, Category::P)]))
                .unwrap();

        let snap = engine.run().unwrap();
        // Ticks 3, 6, 9.
        assert_eq!(snap.requests_generated, 3);
        assert_eq!(snap.ticks_run, 10);
    }

    #[test]
    fn scale_up_then_cooldown_holds() {
        let config = SimulationConfig {
            workers: 2,
            initial_queue_multiplier: 81,
            min_queue_per_worker: 50,
            max_queue_per_worker: 80,
            cooldown_ticks: 200,
            ..quiet_config()
        };
        let mut engine = Engine::configure(
            &config,
            seq(vec![Request::new("1.1.1.1", "x", 1000, Category::P)]),
        )
        .unwrap();
        assert_eq!(engine.queue_len(), 162);

        // Tick 1 dispatches 2, leaving exactly 160: not above the threshold.
        let t1 = engine.tick().unwrap();
        assert!(t1.events.is_empty());

        let config = SimulationConfig {
            initial_queue_multiplier: 82,
            ..config
        };
        let mut engine = Engine::configure(
            &config,
            seq(vec![Request::new("1.1.1.1", "x", 1000, Category::P)]),
        )
        .unwrap();
        let t1 = engine.tick().unwrap();
        assert_eq!(
            t1.events,
            vec![TickEvent::ScaleUp {
                tick: 1,
                new_worker_count: 3,
                queue_len: 162,
            }]
        );
        assert_eq!(engine.cooldown_remaining(), 200);

        // Thresholds still exceeded but no further action during cooldown.
        engine.run_ticks(50).unwrap();
        assert_eq!(engine.pool().len(), 3);
        assert_eq!(engine.cooldown_remaining(), 150);
    }

    #[test]
    fn tick_after_finish_is_an_error() {
        let config = SimulationConfig {
            ticks: 2,
            ..quiet_config()
        };
        let mut engine = Engine::from_config(&config).unwrap();
        engine.run().unwrap();
        assert_eq!(engine.state(), ClockState::Finished);
        assert!(matches!(engine.tick(), Err(EngineError::Finished { ticks: 2 })));
    }

    #[test]
    fn run_ticks_stops_at_total() {
        let config = SimulationConfig {
            ticks: 5,
            ..quiet_config()
        };
        let mut engine = Engine::from_config(&config).unwrap();
        assert_eq!(engine.state(), ClockState::Running(1));
        let snap = engine.run_ticks(3).unwrap();
        assert_eq!(snap.ticks_run, 3);
        assert_eq!(engine.remaining_ticks(), 2);
        let snap = engine.run_ticks(100).unwrap();
        assert_eq!(snap.ticks_run, 5);
    }
}
