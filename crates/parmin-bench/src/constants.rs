use std::ops::RangeInclusive;

/// Data sizes swept when no override is given
pub(crate) const DEFAULT_SIZES: [usize; 3] = [100_000, 1_000_000, 10_000_000];

/// Seed of the sample generator
pub(crate) const DEFAULT_SEED: u64 = 42;

/// Smallest generated sample value
pub(crate) const DEFAULT_MIN_VALUE: i32 = 1;

/// Largest generated sample value
pub(crate) const DEFAULT_MAX_VALUE: i32 = 1_000_000;

/// Largest K swept is this multiple of the hardware thread count
pub(crate) const DEFAULT_K_MULTIPLIER: usize = 2;

/// Chunk length handed to each rayon task by the parallel-unsequenced policy.
/// Each chunk is scanned with a plain loop the compiler can vectorize.
pub(crate) const UNSEQ_CHUNK_LEN: usize = 16 * 1024;

/// Tracing target shared by every event in this crate
pub(crate) const LOG_TARGET: &str = "parmin";

/// Default inclusive value range of generated samples.
pub(crate) const fn default_value_range() -> RangeInclusive<i32> {
    DEFAULT_MIN_VALUE..=DEFAULT_MAX_VALUE
}
