//! Sweep configuration

use crate::{
    constants::{
        DEFAULT_K_MULTIPLIER, DEFAULT_SEED, DEFAULT_SIZES, LOG_TARGET, default_value_range,
    },
    error::{Error, Result},
};
use std::{ops::RangeInclusive, thread};

/// Parameters of one benchmark run
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SweepConfig {
    /// Data sizes, swept in order
    pub sizes: Vec<usize>,
    /// Seed of the sample generator
    pub seed: u64,
    /// Inclusive range of generated values
    pub value_range: RangeInclusive<i32>,
    /// The largest K swept is `k_multiplier * hardware threads`
    pub k_multiplier: usize,
    /// Hardware thread count; detected from the OS when `None`
    pub hardware_threads: Option<usize>,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            sizes: DEFAULT_SIZES.to_vec(),
            seed: DEFAULT_SEED,
            value_range: default_value_range(),
            k_multiplier: DEFAULT_K_MULTIPLIER,
            hardware_threads: None,
        }
    }
}

impl SweepConfig {
    /// Hardware thread count used to size the K range.
    ///
    /// Falls back to 1 when the OS cannot report its parallelism.
    pub fn resolved_threads(&self) -> usize {
        if let Some(threads) = self.hardware_threads {
            return threads;
        }

        match thread::available_parallelism() {
            Ok(threads) => threads.get(),
            Err(e) => {
                tracing::warn!(
                    target: LOG_TARGET,
                    error = %e,
                    "Failed to detect hardware threads, assuming 1"
                );
                1
            }
        }
    }

    /// Largest worker count swept for `threads` hardware threads.
    pub fn max_workers(&self, threads: usize) -> Result<usize> {
        threads.checked_mul(self.k_multiplier).ok_or_else(|| {
            Error::InvalidConfig(format!(
                "{} threads times multiplier {} overflows",
                threads, self.k_multiplier
            ))
        })
    }

    /// Check the configuration can be swept on `threads` hardware threads.
    ///
    /// Every size must hold at least as many elements as the largest K, since
    /// the reducer rejects more partitions than elements.
    pub fn validate(&self, threads: usize) -> Result<()> {
        if self.sizes.is_empty() {
            return Err(Error::InvalidConfig("no data sizes given".to_string()));
        }
        if self.k_multiplier == 0 {
            return Err(Error::InvalidConfig("k multiplier must be at least 1".to_string()));
        }
        if threads == 0 {
            return Err(Error::InvalidConfig("hardware thread count must be at least 1".to_string()));
        }
        if self.value_range.is_empty() {
            return Err(Error::InvalidConfig(format!(
                "value range {}..={} is empty",
                self.value_range.start(),
                self.value_range.end()
            )));
        }

        let max_workers = self.max_workers(threads)?;
        if let Some(&size) = self.sizes.iter().find(|&&size| size < max_workers) {
            return Err(Error::InvalidConfig(format!(
                "data size {size} is smaller than the largest partition count {max_workers}"
            )));
        }

        Ok(())
    }
}
