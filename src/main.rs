//! Benchmark driver: runs the size sweep and exports results.

use std::io;
use std::path::Path;
use std::{env, fs};

use matbench::report::{print_summary, write_csv};
use matbench::trial::{Trial, SIZES};

/// Untimed iterations before measurement starts, per size.
const WARMUP_ITERATIONS: usize = 1;

/// Measured iterations per size.
const MEASURED_ITERATIONS: usize = 5;

fn main() -> io::Result<()> {
    let out_dir = env::args().nth(1).unwrap_or_else(|| "results".to_string());

    println!("=== Naive Matrix Multiplication Benchmark ===\n");
    println!(
        "Sizes: {:?} | {} warmup + {} measured iterations each\n",
        SIZES, WARMUP_ITERATIONS, MEASURED_ITERATIONS
    );

    let mut reports = Vec::with_capacity(SIZES.len());

    for &n in &SIZES {
        println!("Matrix: {}×{}", n, n);
        println!("{}", "-".repeat(50));

        let mut trial = Trial::begin(n, true);

        for _ in 0..WARMUP_ITERATIONS {
            trial.warmup();
        }

        for run in 1..=MEASURED_ITERATIONS {
            let elapsed = trial.run();
            println!("  run {} | {:.5} s", run, elapsed.as_secs_f64());
        }

        let report = trial.finish();
        println!("  checksum: {:.6}\n", report.checksum);
        reports.push(report);
    }

    print_summary(&reports);

    fs::create_dir_all(&out_dir)?;
    let csv_path = Path::new(&out_dir).join("benchmark_rust.csv");
    write_csv(&csv_path, &reports)?;
    println!("\nResults saved to {}", csv_path.display());

    Ok(())
}
