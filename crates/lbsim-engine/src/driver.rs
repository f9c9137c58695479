//! Async drivers — cancellable single runs and parallel multi-seed batches.

use tokio::sync::watch;
use tracing::{info, warn};

use lbsim_core::SimulationConfig;

use crate::engine::Engine;
use crate::error::EngineResult;
use crate::events::TickEvent;
use crate::stats::StatsSnapshot;

/// Ticks executed between cooperative yields.
const YIELD_EVERY: u64 = 1024;

/// Run the engine to completion unless `shutdown` flips to true first.
///
/// The flag is checked between ticks, so an early stop still returns a
/// consistent snapshot of the last completed tick.
pub async fn run_until_shutdown<F>(
    engine: &mut Engine,
    mut shutdown: watch::Receiver<bool>,
    mut on_event: F,
) -> EngineResult<StatsSnapshot>
where
    F: FnMut(&TickEvent),
{
    while !engine.is_finished() {
        if *shutdown.borrow_and_update() {
            warn!(tick = engine.current_tick(), "shutdown requested, stopping simulation early");
            break;
        }

        let events = engine.tick()?;
        events.events.iter().for_each(&mut on_event);

        if events.tick % YIELD_EVERY == 0 {
            tokio::task::yield_now().await;
        }
    }

    Ok(engine.snapshot())
}

/// Run one independent simulation per seed on the blocking pool.
///
/// Results come back in the order of `seeds`.
pub async fn run_batch(
    config: &SimulationConfig,
    seeds: &[u64],
) -> EngineResult<Vec<(u64, StatsSnapshot)>> {
    let mut handles = Vec::with_capacity(seeds.len());

    for &seed in seeds {
        let config = SimulationConfig {
            seed: Some(seed),
            ..config.clone()
        };
        handles.push(tokio::task::spawn_blocking(move || {
            Engine::from_config(&config).and_then(|mut engine| engine.run())
        }));
    }

    let mut results = Vec::with_capacity(handles.len());
    for (seed, handle) in seeds.iter().zip(handles) {
        let snapshot = handle.await??;
        info!(
            seed = *seed,
            scale_ups = snapshot.scale_up_events,
            scale_downs = snapshot.scale_down_events,
            final_workers = snapshot.final_worker_count,
            "batch run finished"
        );
        results.push((*seed, snapshot));
    }

    Ok(results)
}
