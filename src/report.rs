//! Console summary and CSV export of trial results.
//!
//! The CSV schema (`Language,Matrix_Size,Time_ms,Memory_MB`) is shared with
//! the sibling benchmark implementations in other languages, so results can
//! be aggregated and plotted together.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::trial::TrialReport;

/// Language tag written into the shared CSV.
const LANGUAGE: &str = "Rust";

/// Print the per-size averages as a console table.
pub fn print_summary(reports: &[TrialReport]) {
    println!("\n{}", "=".repeat(60));
    println!("AVERAGE RESULTS");
    println!("{}", "=".repeat(60));
    println!(
        "{:<12} {:>16} {:>18}",
        "Size", "Avg Time (ms)", "Peak Memory (MB)"
    );
    println!("{}", "-".repeat(60));

    for report in reports {
        match report.peak_mib {
            Some(peak) => println!(
                "{:<12} {:>16.3} {:>18.2}",
                report.n,
                report.avg_time_ms(),
                peak
            ),
            None => println!(
                "{:<12} {:>16.3} {:>18}",
                report.n,
                report.avg_time_ms(),
                "n/a"
            ),
        }
    }
    println!("{}", "=".repeat(60));
}

/// Write one averaged row per size to `path` in the shared CSV schema.
///
/// A missing peak (sampler off or no successful sample) is written as 0.00,
/// matching the best-effort convention of the other language harnesses.
pub fn write_csv(path: &Path, reports: &[TrialReport]) -> io::Result<()> {
    let mut out = BufWriter::new(File::create(path)?);
    writeln!(out, "Language,Matrix_Size,Time_ms,Memory_MB")?;
    for report in reports {
        writeln!(
            out,
            "{},{},{:.3},{:.2}",
            LANGUAGE,
            report.n,
            report.avg_time_ms(),
            report.peak_mib.unwrap_or(0.0)
        )?;
    }
    out.flush()
}
