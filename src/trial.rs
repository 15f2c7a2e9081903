//! One setup-to-teardown benchmark cycle at a fixed matrix dimension.
//!
//! A [`Trial`] walks the lifecycle the measurement needs: allocate and
//! populate the matrices, optionally start the memory sampler, run
//! reset-then-multiply iterations under the clock, and at teardown stop
//! the sampler and report what was seen.

use std::hint::black_box;
use std::thread;
use std::time::{Duration, Instant};

use crate::kernel::multiply;
use crate::sampler::{MemorySampler, BYTES_PER_MIB};
use crate::store::MatrixStore;

/// Matrix dimensions exercised by the benchmark driver.
pub const SIZES: [usize; 5] = [128, 256, 512, 1024, 2048];

/// Seed for the reproducible pseudo-random fill of A and B.
pub const FILL_SEED: u64 = 42;

/// How often the memory sampler polls the process RSS.
pub const SAMPLE_INTERVAL: Duration = Duration::from_millis(200);

/// Grace period after sampler start-up before measurements begin, so the
/// first samples land before the kernel starts churning.
const SETTLE_DELAY: Duration = Duration::from_millis(50);

/// A trial in progress: populated matrices, optional running sampler,
/// and the measurements taken so far.
pub struct Trial {
    store: MatrixStore,
    sampler: Option<MemorySampler>,
    times: Vec<Duration>,
    checksum: f64,
}

impl Trial {
    /// Set up a trial: allocate n×n matrices, populate A and B from
    /// [`FILL_SEED`], and (if `sample_memory`) start the background
    /// memory sampler followed by a short settling delay.
    pub fn begin(n: usize, sample_memory: bool) -> Self {
        let mut store = MatrixStore::new(n);
        store.populate(FILL_SEED);

        let sampler = if sample_memory {
            let s = MemorySampler::start(SAMPLE_INTERVAL);
            thread::sleep(SETTLE_DELAY);
            Some(s)
        } else {
            None
        };

        Self {
            store,
            sampler,
            times: Vec::new(),
            checksum: 0.0,
        }
    }

    /// One untimed reset-and-multiply, to warm caches and page in the
    /// matrices before measured runs.
    pub fn warmup(&mut self) {
        self.store.reset_output();
        let n = self.store.dim();
        black_box(multiply(
            &self.store.a,
            &self.store.b,
            &mut self.store.c,
            n,
        ));
    }

    /// One measured iteration: zero C, multiply, record the elapsed time.
    ///
    /// The checksum is routed through [`black_box`] so the multiply cannot
    /// be eliminated as dead code.
    pub fn run(&mut self) -> Duration {
        self.store.reset_output();
        let n = self.store.dim();

        let start = Instant::now();
        let checksum = multiply(&self.store.a, &self.store.b, &mut self.store.c, n);
        let elapsed = start.elapsed();

        self.checksum = black_box(checksum);
        self.times.push(elapsed);
        elapsed
    }

    /// Tear down: stop the sampler, print the trial's report line, and
    /// hand back the collected measurements.
    pub fn finish(self) -> TrialReport {
        let n = self.store.dim();
        let peak_mib = self
            .sampler
            .and_then(MemorySampler::stop)
            .map(|bytes| bytes as f64 / BYTES_PER_MIB);

        if let Some(peak) = peak_mib {
            println!("Matrix size: {}x{} | Peak memory: {:.2} MB", n, n, peak);
        }

        TrialReport {
            n,
            times: self.times,
            checksum: self.checksum,
            peak_mib,
        }
    }
}

/// Measurements from one finished trial.
pub struct TrialReport {
    /// Matrix dimension.
    pub n: usize,
    /// Elapsed time of each measured multiply, in run order.
    pub times: Vec<Duration>,
    /// Trace of C from the last measured multiply.
    pub checksum: f64,
    /// Peak RSS in MiB, if the sampler ran and got at least one sample.
    pub peak_mib: Option<f64>,
}

impl TrialReport {
    /// Mean multiply time in milliseconds over the measured runs.
    /// 0.0 when no runs were recorded.
    pub fn avg_time_ms(&self) -> f64 {
        if self.times.is_empty() {
            return 0.0;
        }
        let total: f64 = self.times.iter().map(Duration::as_secs_f64).sum();
        total / self.times.len() as f64 * 1000.0
    }
}
