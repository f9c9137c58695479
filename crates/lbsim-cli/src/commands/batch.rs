use std::path::Path;

use super::{Overrides, load_config};
use crate::report;

pub async fn batch(
    config_path: Option<&Path>,
    overrides: Overrides,
    seeds: &[u64],
    format: &str,
) -> anyhow::Result<()> {
    let config = load_config(config_path, overrides)?;
    let results = lbsim_engine::run_batch(&config, seeds).await?;

    match format {
        "json" => {
            let rows: Vec<_> = results
                .iter()
                .map(|(seed, stats)| serde_json::json!({ "seed": seed, "stats": stats }))
                .collect();
            println!("{}", serde_json::to_string_pretty(&rows)?);
        }
        _ => {
            for (seed, stats) in &results {
                println!("{}", report::batch_line(*seed, stats));
            }
        }
    }

    Ok(())
}
