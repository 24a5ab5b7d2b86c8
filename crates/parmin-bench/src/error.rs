//! Error type shared by the reducer, the policy scans and the sweep harness.

/// Result alias used throughout the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Failures of a benchmark run. None of them are retried.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The reducer was asked for zero partitions.
    #[error("partition count must be at least 1")]
    ZeroPartitions,

    /// The input sequence has no elements, so it has no minimum.
    #[error("cannot take the minimum of an empty sequence")]
    EmptyInput,

    /// More partitions than elements were requested.
    #[error("{partitions} partitions requested for a sequence of {len} elements")]
    TooManyPartitions {
        /// Requested partition count
        partitions: usize,
        /// Length of the input sequence
        len: usize,
    },

    /// The OS refused to create a worker thread.
    #[error("failed to spawn worker for partition {index}")]
    WorkerSpawn {
        /// Partition the worker was meant to scan
        index: usize,
        /// Underlying OS error
        #[source]
        source: std::io::Error,
    },

    /// A worker thread panicked before writing its partial minimum.
    #[error("worker for partition {index} panicked")]
    WorkerPanicked {
        /// Partition the worker was scanning
        index: usize,
    },

    /// The single-thread rayon pool backing the sequential policy could not be built.
    #[error("failed to build sequential policy pool")]
    PolicyPool(#[from] rayon::ThreadPoolBuildError),

    /// A strategy disagreed with the baseline scan of the same sequence.
    #[error("{strategy} returned {actual}, baseline minimum is {expected}")]
    ResultMismatch {
        /// Label of the disagreeing strategy
        strategy: String,
        /// Baseline minimum
        expected: i32,
        /// Value the strategy produced
        actual: i32,
    },

    /// Writing the report failed.
    #[error("failed to write report")]
    Io(#[from] std::io::Error),

    /// The sweep configuration cannot be run.
    #[error("invalid sweep configuration: {0}")]
    InvalidConfig(String),
}
