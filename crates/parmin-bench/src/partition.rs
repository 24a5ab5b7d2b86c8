//! Fixed-block partitioning of a sequence into contiguous ranges.

use crate::error::{Error, Result};
use std::ops::Range;

/// Contiguous sub-range of the input assigned to one worker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Partition {
    /// Position of this partition, also the index of its partial-minimum slot
    pub index: usize,
    /// First element (inclusive)
    pub start: usize,
    /// One past the last element
    pub end: usize,
}

impl Partition {
    /// Number of elements covered.
    pub const fn len(&self) -> usize {
        self.end - self.start
    }

    /// Whether the partition covers no elements.
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// The covered index range, suitable for slicing.
    pub const fn range(&self) -> Range<usize> {
        self.start..self.end
    }
}

/// Split `len` elements into `count` contiguous partitions of `len / count`
/// elements each; the last partition also takes the remainder.
///
/// Rejects `count == 0`, `len == 0` and `count > len`, so every partition
/// returned is non-empty.
pub fn partitions(len: usize, count: usize) -> Result<Vec<Partition>> {
    if count == 0 {
        return Err(Error::ZeroPartitions);
    }
    if len == 0 {
        return Err(Error::EmptyInput);
    }
    if count > len {
        return Err(Error::TooManyPartitions { partitions: count, len });
    }

    let block = len / count;
    Ok((0..count)
        .map(|index| {
            let start = index * block;
            let end = if index == count - 1 { len } else { start + block };
            Partition { index, start, end }
        })
        .collect())
}
