//! Sweep harness: for every data size, time the policy scans and then the
//! parallel reducer for each K in `1..=k_multiplier * hardware_threads`.

use crate::{
    config::SweepConfig,
    constants::LOG_TARGET,
    data::generate,
    error::{Error, Result},
    policy::{Policy, PolicyRunner},
    reducer::parallel_min,
    report,
    timing::{BestK, BestKTracker, measure},
};
use std::io::Write;

/// Elapsed time of one policy scan
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimingSample {
    /// Policy measured
    pub policy: Policy,
    /// Elapsed seconds
    pub seconds: f64,
}

/// Elapsed time of the reducer for one worker count
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KTiming {
    /// Worker count K
    pub workers: usize,
    /// Elapsed seconds
    pub seconds: f64,
}

/// Measurements for one data size
#[derive(Debug, Clone, PartialEq)]
pub struct SizeReport {
    /// Length of the sample sequence
    pub size: usize,
    /// Minimum of the sequence, agreed on by every strategy
    pub minimum: i32,
    /// Policy timings in [`Policy::ALL`] order
    pub policies: Vec<TimingSample>,
    /// Reducer timings, one per K in ascending order
    pub k_timings: Vec<KTiming>,
    /// Fastest K
    pub best: BestK,
}

/// Measurements of a whole run
#[derive(Debug, Clone, PartialEq)]
pub struct SweepReport {
    /// Hardware thread count the K range was derived from
    pub hardware_threads: usize,
    /// One entry per configured size, in order
    pub sizes: Vec<SizeReport>,
}

/// Benchmark driver. Owns the configuration and the policy runner.
#[derive(Debug)]
pub struct Sweep {
    config: SweepConfig,
    threads: usize,
    policies: PolicyRunner,
}

impl Sweep {
    /// Validate `config` and prepare the policy runner.
    pub fn new(config: SweepConfig) -> Result<Self> {
        let threads = config.resolved_threads();
        config.validate(threads)?;
        let policies = PolicyRunner::new()?;
        Ok(Self { config, threads, policies })
    }

    /// Hardware thread count in effect.
    pub const fn threads(&self) -> usize {
        self.threads
    }

    /// Largest K swept.
    pub const fn max_workers(&self) -> usize {
        // validate() already rejected an overflowing product
        self.threads.saturating_mul(self.config.k_multiplier)
    }

    /// Run every configured size, streaming the report to `out`.
    pub fn run(&self, out: &mut impl Write) -> Result<SweepReport> {
        tracing::info!(
            target: LOG_TARGET,
            sizes = ?self.config.sizes,
            threads = self.threads,
            max_workers = self.max_workers(),
            seed = self.config.seed,
            "Starting sweep"
        );

        report::write_header(out, self.threads)?;

        let mut sizes = Vec::with_capacity(self.config.sizes.len());
        for &size in &self.config.sizes {
            sizes.push(self.run_size(size, out)?);
        }
        out.flush()?;

        Ok(SweepReport { hardware_threads: self.threads, sizes })
    }

    /// Run the sweep for a single data size.
    pub fn run_size(&self, size: usize, out: &mut impl Write) -> Result<SizeReport> {
        tracing::info!(target: LOG_TARGET, size, "Generating sample sequence");
        let data = generate(size, self.config.seed, self.config.value_range.clone())?;

        report::write_size_header(out, size)?;

        let mut minimum = None;
        let mut policies = Vec::with_capacity(Policy::ALL.len());
        for policy in Policy::ALL {
            let (found, elapsed) = measure(|| self.policies.min(policy, &data));
            let found = found?;

            // NoPolicy runs first and becomes the reference answer.
            let expected = *minimum.get_or_insert(found);
            verify(policy.as_str(), expected, found)?;

            let sample = TimingSample { policy, seconds: elapsed.as_secs_f64() };
            tracing::debug!(
                target: LOG_TARGET,
                size,
                policy = policy.as_str(),
                seconds = sample.seconds,
                "Policy scan measured"
            );
            report::write_policy(out, &sample)?;
            policies.push(sample);
        }
        let minimum = minimum.ok_or(Error::EmptyInput)?;

        report::write_k_table_header(out)?;

        let mut tracker = BestKTracker::new();
        let mut k_timings = Vec::with_capacity(self.max_workers());
        for workers in 1..=self.max_workers() {
            let (found, elapsed) = measure(|| parallel_min(&data, workers));
            verify(&format!("parallel_min(K={workers})"), minimum, found?)?;

            let row = KTiming { workers, seconds: elapsed.as_secs_f64() };
            if tracker.observe(row.workers, row.seconds) {
                tracing::debug!(
                    target: LOG_TARGET,
                    size,
                    workers,
                    seconds = row.seconds,
                    "New best K"
                );
            }
            report::write_k_row(out, &row)?;
            k_timings.push(row);
        }

        let best = tracker.best().ok_or_else(|| {
            Error::InvalidConfig("no partition counts were swept".to_string())
        })?;
        tracing::info!(
            target: LOG_TARGET,
            size,
            best_k = best.workers,
            seconds = best.seconds,
            threads = self.threads,
            "Size sweep complete"
        );
        report::write_best(out, &best, self.threads)?;

        Ok(SizeReport { size, minimum, policies, k_timings, best })
    }
}

fn verify(strategy: &str, expected: i32, actual: i32) -> Result<()> {
    if expected == actual {
        Ok(())
    } else {
        Err(Error::ResultMismatch { strategy: strategy.to_string(), expected, actual })
    }
}
