//! Wall-clock measurement and best-K selection.

use std::{
    hint::black_box,
    time::{Duration, Instant},
};

/// Run `f` once and return its output with the elapsed wall-clock time.
///
/// The output goes through [`black_box`] before the clock stops so the timed
/// work cannot be discarded by the optimizer.
pub fn measure<T>(f: impl FnOnce() -> T) -> (T, Duration) {
    let start = Instant::now();
    let output = black_box(f());
    (output, start.elapsed())
}

/// Fastest worker count observed in one size's sweep.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BestK {
    /// Worker count
    pub workers: usize,
    /// Elapsed seconds of that run
    pub seconds: f64,
}

/// Greedy tracker of the fastest K. Only a strictly faster time replaces the
/// current best, so on ties the earliest K is kept.
#[derive(Debug, Default)]
pub struct BestKTracker {
    best: Option<BestK>,
}

impl BestKTracker {
    /// Create an empty tracker.
    pub const fn new() -> Self {
        Self { best: None }
    }

    /// Record the time of one run. Returns whether it became the new best.
    pub fn observe(&mut self, workers: usize, seconds: f64) -> bool {
        let improved = self.best.is_none_or(|best| seconds < best.seconds);
        if improved {
            self.best = Some(BestK { workers, seconds });
        }
        improved
    }

    /// Current best, if any run was observed.
    pub const fn best(&self) -> Option<BestK> {
        self.best
    }
}
