//! Text rendering of sweep results.
//!
//! Lines are written as soon as each measurement completes, so a long sweep
//! shows progress. Times are printed in seconds with six decimals.

use crate::{
    policy::Policy,
    sweep::{KTiming, TimingSample},
    timing::BestK,
};
use std::io::{self, Write};

const SEPARATOR: &str = "=============================";

/// Opening line with the hardware thread count.
pub fn write_header(out: &mut impl Write, threads: usize) -> io::Result<()> {
    writeln!(out, "CPU threads: {threads}")?;
    writeln!(out)
}

/// Start of one data size's section.
pub fn write_size_header(out: &mut impl Write, size: usize) -> io::Result<()> {
    writeln!(out, "{SEPARATOR}")?;
    writeln!(out, "Data size: {size}")
}

/// One policy timing line.
pub fn write_policy(out: &mut impl Write, sample: &TimingSample) -> io::Result<()> {
    writeln!(out, "{}: {:.6} s", sample.policy.report_label(), sample.seconds)?;
    // The baseline stands apart from the policy block.
    if sample.policy == Policy::NoPolicy {
        writeln!(out)?;
    }
    Ok(())
}

/// Title and column header of the per-K table.
pub fn write_k_table_header(out: &mut impl Write) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Custom parallel algorithm:")?;
    writeln!(out, "K\tTime (s)")
}

/// One row of the per-K table.
pub fn write_k_row(out: &mut impl Write, row: &KTiming) -> io::Result<()> {
    writeln!(out, "{}\t{:.6}", row.workers, row.seconds)
}

/// Best-K summary closing one data size's section.
pub fn write_best(out: &mut impl Write, best: &BestK, threads: usize) -> io::Result<()> {
    writeln!(
        out,
        "Best K = {} ({:.6} s, CPU threads = {threads})",
        best.workers, best.seconds
    )?;
    writeln!(out, "{SEPARATOR}")?;
    writeln!(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(f: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_header() {
        assert_eq!(render(|out| write_header(out, 8)), "CPU threads: 8\n\n");
    }

    #[test]
    fn test_policy_lines() {
        let baseline = TimingSample { policy: Policy::NoPolicy, seconds: 0.000_123_4 };
        assert_eq!(render(|out| write_policy(out, &baseline)), "min (no policy): 0.000123 s\n\n");

        let par = TimingSample { policy: Policy::Parallel, seconds: 1.5 };
        assert_eq!(render(|out| write_policy(out, &par)), "par            : 1.500000 s\n");
    }

    #[test]
    fn test_k_table() {
        let text = render(|out| {
            write_k_table_header(out)?;
            write_k_row(out, &KTiming { workers: 3, seconds: 0.25 })
        });
        assert_eq!(text, "\nCustom parallel algorithm:\nK\tTime (s)\n3\t0.250000\n");
    }

    #[test]
    fn test_best_line() {
        let best = BestK { workers: 5, seconds: 0.002 };
        let text = render(|out| write_best(out, &best, 4));
        assert!(text.starts_with("Best K = 5 (0.002000 s, CPU threads = 4)\n"));
        assert!(text.contains(SEPARATOR));
    }
}
