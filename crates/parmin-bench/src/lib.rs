//! Parallel minimum benchmark.
//!
//! This crate times several ways of finding the minimum of a large `i32`
//! sequence: a plain scan, three rayon execution modes, and a fixed-partition
//! reducer that spawns one scoped thread per partition. The sweep harness
//! repeats the reducer for every worker count from 1 up to a multiple of the
//! hardware thread count and reports the fastest.
//!
//! # Usage
//!
//! ```no_run
//! use parmin_bench::{Sweep, SweepConfig};
//!
//! let sweep = Sweep::new(SweepConfig::default())?;
//! let report = sweep.run(&mut std::io::stdout().lock())?;
//! for size in &report.sizes {
//!     println!("{}: best K = {}", size.size, size.best.workers);
//! }
//! # Ok::<(), parmin_bench::Error>(())
//! ```

mod constants;

pub mod config;
pub mod data;
pub mod error;
pub mod partition;
pub mod policy;
pub mod reducer;
pub mod report;
pub mod sweep;
pub mod timing;

pub use config::SweepConfig;
pub use data::generate;
pub use error::{Error, Result};
pub use partition::{Partition, partitions};
pub use policy::{Policy, PolicyRunner};
pub use reducer::{parallel_min, partial_minima};
pub use sweep::{KTiming, SizeReport, Sweep, SweepReport, TimingSample};
pub use timing::{BestK, BestKTracker, measure};
