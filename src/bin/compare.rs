//! Energy comparison tool.
//!
//! Reads the baseline and per-scenario energy files the k6 harness leaves in
//! the results directory, writes `energy_comparison.csv` and
//! `energy_comparison.json` next to them, and prints a short digest.
//!
//! Usage: `RESULTS_DIR=k6/results cargo run --bin energy-compare`
//!
//! The directory defaults to `/usr/src/app/k6/results`. Log verbosity follows
//! `RUST_LOG`.

use anyhow::{Context, Result};
use energy_compare::Config;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env();
    tracing::info!(results_dir = %config.results_dir().display(), "comparing energy results");

    let summary = energy_compare::run(&config).with_context(|| {
        format!(
            "energy comparison failed for {}",
            config.results_dir().display()
        )
    })?;

    println!("{}", summary.console);
    Ok(())
}
