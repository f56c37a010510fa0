use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use linear_stats_core::{ConfigLoader, SampleSeries, StatsReport};

#[derive(Parser)]
#[command(name = "linear-stats")]
#[command(
    about = "Least-squares regression and Pearson correlation over line-indexed numeric data",
    long_about = None
)]
struct Cli {
    /// Input data file, one numeric value per line
    file: PathBuf,

    /// Policy for lines that fail to parse (abort, skip)
    #[arg(long)]
    invalid_lines: Option<String>,

    /// Config file path
    #[arg(short, long, default_value = "config/Config.toml")]
    config: String,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr; stdout carries only the two result lines.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    run(&cli)
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let mut config = ConfigLoader::load_from(&cli.config)
        .with_context(|| format!("failed to load config from {}", cli.config))?;

    if let Some(policy) = cli.invalid_lines.as_deref() {
        config.input.invalid_lines = policy.parse()?;
    }

    tracing::debug!(
        file = %cli.file.display(),
        policy = %config.input.invalid_lines,
        "analyzing input"
    );

    let series = SampleSeries::from_file(&cli.file, &config.input)?;
    tracing::info!(samples = series.len(), "loaded sample series");

    let report = StatsReport::from_series(&series)?;

    // Both lines are printed together or not at all.
    println!("{}", report.render());

    Ok(())
}
