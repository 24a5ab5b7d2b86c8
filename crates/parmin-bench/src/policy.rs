//! Minimum scans used as comparison baselines.
//!
//! The three execution policies are provided by rayon and treated as black
//! boxes: the sweep only times them and checks their answers.

use crate::{
    constants::UNSEQ_CHUNK_LEN,
    error::{Error, Result},
};
use rayon::{ThreadPool, ThreadPoolBuilder, prelude::*};

/// Library minimum strategies measured before the custom reducer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Policy {
    /// Plain iterator scan on the calling thread
    NoPolicy,
    /// Rayon iterator confined to a single-thread pool
    Sequential,
    /// Rayon iterator on the global pool
    Parallel,
    /// Rayon over fixed chunks, each chunk scanned with a vectorizable loop
    ParallelUnsequenced,
}

impl Policy {
    /// All policies in reporting order.
    pub const ALL: [Self; 4] =
        [Self::NoPolicy, Self::Sequential, Self::Parallel, Self::ParallelUnsequenced];

    /// Short label used in logs and error messages.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::NoPolicy => "no_policy",
            Self::Sequential => "seq",
            Self::Parallel => "par",
            Self::ParallelUnsequenced => "par_unseq",
        }
    }

    /// Label printed in the report, padded so the timing column lines up.
    pub const fn report_label(&self) -> &'static str {
        match self {
            Self::NoPolicy => "min (no policy)",
            Self::Sequential => "seq            ",
            Self::Parallel => "par            ",
            Self::ParallelUnsequenced => "par_unseq      ",
        }
    }
}

/// Runs the [`Policy`] scans. Holds the single-thread pool backing
/// [`Policy::Sequential`] so it is built once per sweep.
#[derive(Debug)]
pub struct PolicyRunner {
    sequential_pool: ThreadPool,
}

impl PolicyRunner {
    /// Build the runner and its sequential pool.
    pub fn new() -> Result<Self> {
        let sequential_pool = ThreadPoolBuilder::new()
            .num_threads(1)
            .thread_name(|i| format!("parmin-seq-{i}"))
            .build()?;
        Ok(Self { sequential_pool })
    }

    /// Minimum of `data` under `policy`. Empty input has no minimum.
    pub fn min(&self, policy: Policy, data: &[i32]) -> Result<i32> {
        let found = match policy {
            Policy::NoPolicy => data.iter().copied().min(),
            Policy::Sequential => {
                self.sequential_pool.install(|| data.par_iter().copied().min())
            }
            Policy::Parallel => data.par_iter().copied().min(),
            Policy::ParallelUnsequenced => data
                .par_chunks(UNSEQ_CHUNK_LEN)
                .map(|chunk| chunk.iter().copied().fold(i32::MAX, i32::min))
                .min(),
        };
        found.ok_or(Error::EmptyInput)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::generate;

    #[test]
    fn test_policies_agree() {
        let runner = PolicyRunner::new().unwrap();
        let data = generate(100_000, 42, 1..=1_000_000).unwrap();
        let expected = *data.iter().min().unwrap();

        for policy in Policy::ALL {
            assert_eq!(runner.min(policy, &data).unwrap(), expected, "{}", policy.as_str());
        }
    }

    #[test]
    fn test_policies_short_input() {
        let runner = PolicyRunner::new().unwrap();
        let data = [4, -2, 9];
        for policy in Policy::ALL {
            assert_eq!(runner.min(policy, &data).unwrap(), -2);
        }
    }

    #[test]
    fn test_policies_empty_input() {
        let runner = PolicyRunner::new().unwrap();
        for policy in Policy::ALL {
            assert!(matches!(runner.min(policy, &[]), Err(Error::EmptyInput)));
        }
    }

    #[test]
    fn test_report_labels_align() {
        let width = Policy::NoPolicy.report_label().len();
        assert!(Policy::ALL.iter().all(|p| p.report_label().len() == width));
    }
}
