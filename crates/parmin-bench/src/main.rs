//! Parallel minimum sweep
//!
//! Run with defaults (sizes 100k, 1M, 10M; K up to 2x hardware threads):
//! ```bash
//! cargo run --release
//! ```
//!
//! Logs go to stderr and honour `RUST_LOG`; the report goes to stdout.

use anyhow::Context;
use clap::Parser;
use parmin_bench::{Sweep, SweepConfig};
use std::io;

/// Benchmark a fixed-partition parallel minimum against rayon execution modes
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Data sizes to sweep, comma separated
    #[arg(long, value_delimiter = ',')]
    sizes: Option<Vec<usize>>,

    /// Seed of the sample generator
    #[arg(long)]
    seed: Option<u64>,

    /// Smallest generated value
    #[arg(long, allow_negative_numbers = true)]
    min_value: Option<i32>,

    /// Largest generated value
    #[arg(long, allow_negative_numbers = true)]
    max_value: Option<i32>,

    /// Sweep K up to this multiple of the hardware thread count
    #[arg(long)]
    k_multiplier: Option<usize>,

    /// Hardware thread count to assume instead of detecting it
    #[arg(long)]
    threads: Option<usize>,
}

impl Args {
    fn into_config(self) -> SweepConfig {
        let defaults = SweepConfig::default();
        let min_value = self.min_value.unwrap_or(*defaults.value_range.start());
        let max_value = self.max_value.unwrap_or(*defaults.value_range.end());

        SweepConfig {
            sizes: self.sizes.unwrap_or(defaults.sizes),
            seed: self.seed.unwrap_or(defaults.seed),
            value_range: min_value..=max_value,
            k_multiplier: self.k_multiplier.unwrap_or(defaults.k_multiplier),
            hardware_threads: self.threads.or(defaults.hardware_threads),
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let config = Args::parse().into_config();
    let sweep = Sweep::new(config).context("failed to prepare sweep")?;

    let mut stdout = io::stdout().lock();
    sweep.run(&mut stdout).context("sweep aborted")?;

    Ok(())
}
