//! `lbsim run` — one simulation with an event log on disk.
//!
//! The log file receives the configuration banner, a start marker, one
//! line per blocked request or scaling event, and the final summary.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result, bail};
use tokio::sync::watch;
use tracing::info;

use lbsim_core::SimulationConfig;
use lbsim_engine::{Engine, StatsSnapshot, run_until_shutdown};

use super::{Overrides, load_config};
use crate::report;

pub async fn run(config_path: Option<&Path>, overrides: Overrides, format: &str) -> Result<()> {
    let config = load_config(config_path, overrides)?;

    let quiet = format == "json";
    if !quiet {
        print!("{}", report::config_banner(&config));
    }

    // Stop between ticks on Ctrl-C.
    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("shutdown signal received");
            let _ = shutdown_tx.send(true);
        }
    });

    let stats = simulate(&config, shutdown_rx).await?;

    match format {
        "json" => println!("{}", serde_json::to_string_pretty(&stats)?),
        _ => {
            print!("{}", report::summary(&stats));
            println!("\n[DONE] Log written to {}", config.log_file);
        }
    }

    Ok(())
}

/// Run the simulation described by `config`, writing the event log.
pub async fn simulate(
    config: &SimulationConfig,
    shutdown: watch::Receiver<bool>,
) -> Result<StatsSnapshot> {
    let file = File::create(&config.log_file)
        .with_context(|| format!("could not open log file: {}", config.log_file))?;
    let mut log = BufWriter::new(file);

    write!(log, "{}", report::config_banner(config))?;

    let mut engine = Engine::from_config(config)?;
    info!(
        queued = engine.queue_len(),
        "queue initialized with {} requests",
        config.initial_queue_size()
    );
    writeln!(log, "[START] Simulation running for {} clock cycles.\n", config.ticks)?;

    let mut write_error = None;
    let stats = run_until_shutdown(&mut engine, shutdown, |event| {
        if write_error.is_none()
            && let Err(e) = writeln!(log, "{event}")
        {
            write_error = Some(e);
        }
    })
    .await?;

    if let Some(e) = write_error {
        return Err(e).with_context(|| format!("writing event log {}", config.log_file));
    }

    if stats.ticks_run < config.ticks {
        writeln!(log, "\n[STOPPED] Interrupted after {} cycles.", stats.ticks_run)?;
    }
    write!(log, "{}", report::summary(&stats))?;
    log.flush()?;

    if stats.ticks_run == 0 && config.ticks > 0 {
        bail!("simulation interrupted before the first cycle");
    }

    Ok(stats)
}
