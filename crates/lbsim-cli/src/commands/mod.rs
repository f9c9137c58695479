pub mod batch;
pub mod config;
pub mod run;

use std::path::Path;

use anyhow::Context;
use lbsim_core::SimulationConfig;

/// Config file picked up from the working directory when --config is absent.
pub const DEFAULT_CONFIG_FILE: &str = "lbsim.toml";

/// Command-line values that take precedence over the config file.
#[derive(Debug, Default)]
pub struct Overrides {
    pub ticks: Option<u64>,
    pub seed: Option<u64>,
    pub log: Option<String>,
}

/// Resolve the effective config: explicit file, ./lbsim.toml, or defaults.
pub fn load_config(path: Option<&Path>, overrides: Overrides) -> anyhow::Result<SimulationConfig> {
    let mut config = match path {
        Some(path) => SimulationConfig::from_file(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None if Path::new(DEFAULT_CONFIG_FILE).is_file() => {
            SimulationConfig::from_file(Path::new(DEFAULT_CONFIG_FILE))
                .with_context(|| format!("loading {DEFAULT_CONFIG_FILE}"))?
        }
        None => SimulationConfig::default(),
    };

    if let Some(ticks) = overrides.ticks {
        config.ticks = ticks;
    }
    if let Some(seed) = overrides.seed {
        config.seed = Some(seed);
    }
    if let Some(log) = overrides.log {
        config.log_file = log;
    }

    config.validate().context("invalid simulation config")?;
    Ok(config)
}
