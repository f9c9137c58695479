//! Text rendering for the configuration banner and run summary.

use std::fmt::Write;

use lbsim_core::SimulationConfig;
use lbsim_engine::StatsSnapshot;

/// Banner describing the effective configuration.
pub fn config_banner(config: &SimulationConfig) -> String {
    let mut out = String::new();
    let seed = config
        .seed
        .map(|s| s.to_string())
        .unwrap_or_else(|| "random".to_string());

    let _ = writeln!(out, "\n===== Load Balancer Configuration =====");
    let _ = writeln!(out, "  Servers:              {}", config.workers);
    let _ = writeln!(out, "  Simulation Time:      {} cycles", config.ticks);
    let _ = writeln!(out, "  Initial Queue Size:   {} requests", config.initial_queue_size());
    let _ = writeln!(out, "  Queue Min Threshold:  {} * servers", config.min_queue_per_worker);
    let _ = writeln!(out, "  Queue Max Threshold:  {} * servers", config.max_queue_per_worker);
    let _ = writeln!(out, "  Adjust Cooldown:      {} cycles", config.cooldown_ticks);
    let _ = writeln!(out, "  New Request Interval: {} cycles", config.request_interval_ticks);
    let _ = writeln!(
        out,
        "  Range For Task Times: {} - {} cycles",
        config.min_duration, config.max_duration
    );
    let _ = writeln!(out, "  Seed:                 {seed}");
    let _ = writeln!(out, "  Log File:             {}", config.log_file);
    let _ = writeln!(out, "  Blocked Prefixes:     {}", config.blocked_prefixes.join(", "));
    let _ = writeln!(out, "========================================\n");
    out
}

/// End-of-run summary block.
pub fn summary(stats: &StatsSnapshot) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "\n============= SIMULATION SUMMARY =============");
    let _ = writeln!(out, "  Total Clock Cycles Run:     {}", stats.ticks_run);
    let _ = writeln!(out, "  Total Requests Generated:   {}", stats.requests_generated);
    let _ = writeln!(out, "  Total Requests Blocked:     {}", stats.requests_blocked);
    let _ = writeln!(out, "  Requests Processed:         {}", stats.requests_processed());
    let _ = writeln!(out, "  Requests Completed:         {}", stats.requests_completed);
    let _ = writeln!(out, "  Scale-Up Events:            {}", stats.scale_up_events);
    let _ = writeln!(out, "  Scale-Down Events:          {}", stats.scale_down_events);
    let _ = writeln!(out, "  Final Server Count:         {}", stats.final_worker_count);
    let _ = writeln!(out, "  Remaining Queue Size:       {}", stats.final_queue_length);
    let _ = writeln!(out, "==============================================");
    out
}

/// One line per batch run.
pub fn batch_line(seed: u64, stats: &StatsSnapshot) -> String {
    format!(
        "seed={seed:<8} generated={} blocked={} scale_up={} scale_down={} servers={} queue={}",
        stats.requests_generated,
        stats.requests_blocked,
        stats.scale_up_events,
        stats.scale_down_events,
        stats.final_worker_count,
        stats.final_queue_length,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn banner_lists_prefixes_and_initial_queue() {
        let banner = config_banner(&SimulationConfig::default());
        assert!(banner.contains("10.0.0, 123.43.21, 123.45.67"));
        assert!(banner.contains("Initial Queue Size:   1000 requests"));
        assert!(banner.contains("Seed:                 random"));
    }

    #[test]
    fn summary_reports_processed_as_generated_minus_blocked() {
        let stats = StatsSnapshot {
            ticks_run: 10,
            requests_generated: 30,
            requests_blocked: 4,
            requests_admitted: 26,
            final_worker_count: 3,
            ..Default::default()
        };
        let text = summary(&stats);
        assert!(text.contains("Requests Processed:         26"));
        assert!(text.contains("Final Server Count:         3"));
    }

    #[test]
    fn batch_line_includes_seed() {
        let line = batch_line(42, &StatsSnapshot::default());
        assert!(line.starts_with("seed=42"));
        assert!(line.contains("servers=0"));
    }
}
