use std::path::Path;

use anyhow::{Context, bail};
use lbsim_core::SimulationConfig;

use super::{Overrides, load_config};

pub fn init(path: &Path, force: bool) -> anyhow::Result<()> {
    if path.exists() && !force {
        bail!("{} already exists (use --force to overwrite)", path.display());
    }
    let content = SimulationConfig::default().to_toml_string()?;
    std::fs::write(path, content).with_context(|| format!("writing {}", path.display()))?;
    println!("✓ Generated {}", path.display());
    Ok(())
}

pub fn show(path: Option<&Path>) -> anyhow::Result<()> {
    let config = load_config(path, Overrides::default())?;
    print!("{}", config.to_toml_string()?);
    Ok(())
}
