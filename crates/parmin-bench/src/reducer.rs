//! Fixed-partition parallel minimum.
//!
//! The input is split into `K` contiguous partitions (see [`partitions`]).
//! Each partition is scanned by its own freshly spawned scoped thread, which
//! writes the partition minimum into a slot it exclusively borrows. Once every
//! worker has been joined, the slots are reduced sequentially on the calling
//! thread.

use crate::{
    error::{Error, Result},
    partition::partitions,
};
use std::thread::{self, ScopedJoinHandle};

/// Minimum of `data` computed by `workers` threads, one per partition.
///
/// Fails for an empty `data`, for `workers == 0` and for `workers > data.len()`.
pub fn parallel_min(data: &[i32], workers: usize) -> Result<i32> {
    let partial = partial_minima(data, workers)?;
    Ok(reduce(&partial))
}

/// Per-partition minima, indexed by partition number.
///
/// Returns only after every worker has finished.
pub fn partial_minima(data: &[i32], workers: usize) -> Result<Vec<i32>> {
    let parts = partitions(data.len(), workers)?;
    let mut slots = vec![i32::MAX; parts.len()];

    thread::scope(|scope| {
        let mut handles = Vec::with_capacity(parts.len());
        let mut spawn_error = None;

        for (part, slot) in parts.iter().zip(slots.iter_mut()) {
            let block = &data[part.range()];
            let spawned = thread::Builder::new()
                .name(format!("parmin-worker-{}", part.index))
                .spawn_scoped(scope, move || *slot = reduce(block));

            match spawned {
                Ok(handle) => handles.push((part.index, handle)),
                Err(source) => {
                    spawn_error = Some(Error::WorkerSpawn { index: part.index, source });
                    break;
                }
            }
        }

        // Join explicitly so a panicked worker surfaces as an error instead of
        // re-panicking when the scope closes.
        let joined = join_all(handles);
        spawn_error.map_or(joined, Err)
    })?;

    Ok(slots)
}

fn join_all(handles: Vec<(usize, ScopedJoinHandle<'_, ()>)>) -> Result<()> {
    let mut outcome = Ok(());
    for (index, handle) in handles {
        if handle.join().is_err() && outcome.is_ok() {
            outcome = Err(Error::WorkerPanicked { index });
        }
    }
    outcome
}

/// Sequential minimum of a non-empty slice.
fn reduce(values: &[i32]) -> i32 {
    values.iter().copied().fold(i32::MAX, i32::min)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::generate;

    #[test]
    fn test_parallel_min_worked_example() {
        let data = [5, 3, 8, 1, 9, 2];
        assert_eq!(partial_minima(&data, 3).unwrap(), vec![3, 1, 2]);
        assert_eq!(parallel_min(&data, 3).unwrap(), 1);
    }

    #[test]
    fn test_parallel_min_matches_sequential_for_every_k() {
        let data = generate(257, 42, 1..=1_000_000).unwrap();
        let expected = *data.iter().min().unwrap();
        for k in 1..=data.len() {
            assert_eq!(parallel_min(&data, k).unwrap(), expected, "k = {k}");
        }
    }

    #[test]
    fn test_parallel_min_single_worker() {
        let data = generate(10_000, 3, 1..=1_000_000).unwrap();
        let sequential = data.iter().copied().min().unwrap();
        assert_eq!(parallel_min(&data, 1).unwrap(), sequential);
    }

    #[test]
    fn test_parallel_min_one_element_per_worker() {
        let data = [9, 4, 7, -3, 12, 0, 5];
        let partial = partial_minima(&data, data.len()).unwrap();
        assert_eq!(partial, data.to_vec());
        assert_eq!(parallel_min(&data, data.len()).unwrap(), -3);
    }

    #[test]
    fn test_parallel_min_minimum_in_remainder() {
        // 10 / 3 leaves the last partition with four elements; the minimum sits in the tail.
        let data = [10, 20, 30, 40, 50, 60, 70, 80, 90, 1];
        assert_eq!(partial_minima(&data, 3).unwrap(), vec![10, 40, 1]);
        assert_eq!(parallel_min(&data, 3).unwrap(), 1);
    }

    #[test]
    fn test_parallel_min_extreme_values() {
        let data = [i32::MAX, i32::MIN, 0, i32::MAX];
        assert_eq!(parallel_min(&data, 2).unwrap(), i32::MIN);

        let all_max = [i32::MAX; 5];
        assert_eq!(parallel_min(&all_max, 5).unwrap(), i32::MAX);
    }

    #[test]
    fn test_parallel_min_empty_input() {
        for k in [1, 2, 16] {
            assert!(matches!(parallel_min(&[], k), Err(Error::EmptyInput)));
        }
    }

    #[test]
    fn test_parallel_min_rejects_zero_workers() {
        assert!(matches!(parallel_min(&[1, 2, 3], 0), Err(Error::ZeroPartitions)));
    }

    #[test]
    fn test_parallel_min_rejects_more_workers_than_elements() {
        let err = parallel_min(&[1, 2, 3], 4).unwrap_err();
        assert!(matches!(err, Error::TooManyPartitions { partitions: 4, len: 3 }));
    }
}
