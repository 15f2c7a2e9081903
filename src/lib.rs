//! Micro-benchmark harness for naive dense matrix multiplication.
//!
//! Measures wall-clock time and peak resident memory of the textbook O(n³)
//! triple-loop multiply across a fixed set of problem sizes. The kernel is
//! intentionally the slowest reasonable implementation - it exists as a
//! baseline to compare languages and optimized libraries against, not as
//! something you would ever use for real linear algebra.
//!
//! ## Usage
//!
//! ```
//! use matbench::kernel::multiply;
//! use matbench::store::MatrixStore;
//!
//! let mut store = MatrixStore::new(64);
//! store.populate(42);
//! store.reset_output();
//!
//! let checksum = multiply(&store.a, &store.b, &mut store.c, 64);
//! assert!(checksum.is_finite());
//! ```
//!
//! Or run a full trial with memory sampling:
//!
//! ```no_run
//! use matbench::trial::Trial;
//!
//! let mut trial = Trial::begin(512, true);
//! trial.warmup();
//! for _ in 0..5 {
//!     trial.run();
//! }
//! let report = trial.finish();
//! println!("avg: {:.3} ms", report.avg_time_ms());
//! ```
//!
//! ## What's inside
//!
//! - Per-trial matrix state with a seeded, reproducible random fill
//! - The i-j-k multiply kernel with a trace checksum to defeat dead-code
//!   elimination
//! - A background thread sampling peak process RSS (best-effort)
//! - A driver binary that runs the size sweep and exports CSV

pub mod kernel;
pub mod report;
pub mod sampler;
pub mod store;
pub mod trial;

pub use kernel::{multiply, trace};
pub use store::MatrixStore;
pub use trial::{Trial, TrialReport};
