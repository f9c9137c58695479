use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod commands;
mod report;

#[derive(Parser)]
#[command(
    name = "lbsim",
    about = "lbsim — elastic load-balancer simulation",
    version,
    propagate_version = true,
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a single simulation and write its event log.
    ///
    /// Settings come from --config, else ./lbsim.toml if present, else
    /// built-in defaults. Flags override file values.
    Run {
        /// Path to an lbsim.toml config file
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Number of clock cycles to simulate
        #[arg(short, long)]
        ticks: Option<u64>,
        /// PRNG seed for a reproducible run
        #[arg(short, long)]
        seed: Option<u64>,
        /// Event log output path
        #[arg(short, long)]
        log: Option<String>,
        /// Summary format: text or json
        #[arg(short, long, default_value = "text")]
        format: String,
    },
    /// Run one simulation per seed in parallel and compare the outcomes.
    Batch {
        /// Comma-separated seeds, e.g. 1,2,3
        #[arg(long, value_delimiter = ',', required = true)]
        seeds: Vec<u64>,
        #[arg(short, long)]
        config: Option<PathBuf>,
        #[arg(short, long)]
        ticks: Option<u64>,
        /// Output format: text or json
        #[arg(short, long, default_value = "text")]
        format: String,
    },
    /// Manage lbsim.toml
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Write a default lbsim.toml
    Init {
        #[arg(short, long, default_value = "lbsim.toml")]
        path: PathBuf,
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
    /// Print the effective configuration
    Show {
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("lbsim=info".parse()?)
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            config,
            ticks,
            seed,
            log,
            format,
        } => {
            let overrides = commands::Overrides { ticks, seed, log };
            commands::run::run(config.as_deref(), overrides, &format).await
        }
        Commands::Batch {
            seeds,
            config,
            ticks,
            format,
        } => {
            let overrides = commands::Overrides {
                ticks,
                ..Default::default()
            };
            commands::batch::batch(config.as_deref(), overrides, &seeds, &format).await
        }
        Commands::Config { action } => match action {
            ConfigAction::Init { path, force } => commands::config::init(&path, force),
            ConfigAction::Show { config } => commands::config::show(config.as_deref()),
        },
    }
}
