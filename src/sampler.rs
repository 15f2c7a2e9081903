//! Best-effort peak resident memory tracking.
//!
//! A single background thread polls the OS for the current process's
//! resident set size at a fixed interval and keeps a running maximum.
//! Sampling never fails the benchmark: if the OS won't report memory
//! (no process handle, unsupported platform) the sample is skipped.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use sysinfo::{Pid, System};

/// How long `stop` waits for the sampler thread to notice the stop flag.
/// Past that, the thread is abandoned - it has nothing left to interact
/// with once the trial ends.
const STOP_TIMEOUT: Duration = Duration::from_secs(1);

/// One MiB, for the bytes-to-mebibytes conversion in reports.
pub const BYTES_PER_MIB: f64 = 1_048_576.0;

/// Background sampler of the current process's peak RSS.
///
/// Start it after matrices are populated and before measured iterations
/// begin; stop it after they complete. The peak is held in an `AtomicU64`
/// updated with `fetch_max`, so concurrent writers could not lose updates
/// (there is exactly one writer here, but the max-update is the correct
/// primitive regardless).
pub struct MemorySampler {
    running: Arc<AtomicBool>,
    peak_bytes: Arc<AtomicU64>,
    handle: Option<JoinHandle<()>>,
}

impl MemorySampler {
    /// Spawn the sampling thread, polling every `interval`.
    pub fn start(interval: Duration) -> Self {
        let running = Arc::new(AtomicBool::new(true));
        let peak_bytes = Arc::new(AtomicU64::new(0));

        let thread_running = Arc::clone(&running);
        let thread_peak = Arc::clone(&peak_bytes);
        let handle = thread::spawn(move || {
            let mut sys = System::new();
            let pid = Pid::from_u32(std::process::id());
            while thread_running.load(Ordering::Relaxed) {
                if sys.refresh_process(pid) {
                    if let Some(proc_) = sys.process(pid) {
                        thread_peak.fetch_max(proc_.memory(), Ordering::Relaxed);
                    }
                }
                // Skipped sample on refresh failure: best-effort only.
                thread::sleep(interval);
            }
        });

        Self {
            running,
            peak_bytes,
            handle: Some(handle),
        }
    }

    /// Peak RSS observed so far, in bytes. 0 until the first successful
    /// sample lands.
    pub fn peak_bytes(&self) -> u64 {
        self.peak_bytes.load(Ordering::Relaxed)
    }

    /// Signal the sampler to stop and wait (bounded) for it to exit.
    ///
    /// Returns the peak RSS in bytes, or `None` if no sample was ever
    /// taken. Cancellation is cooperative: the flag is cleared, then we
    /// poll for thread exit up to [`STOP_TIMEOUT`] and proceed either way.
    pub fn stop(mut self) -> Option<u64> {
        self.running.store(false, Ordering::Relaxed);

        if let Some(handle) = self.handle.take() {
            let deadline = Instant::now() + STOP_TIMEOUT;
            while !handle.is_finished() && Instant::now() < deadline {
                thread::sleep(Duration::from_millis(10));
            }
            if handle.is_finished() {
                let _ = handle.join();
            }
        }

        let peak = self.peak_bytes.load(Ordering::Relaxed);
        if peak > 0 {
            Some(peak)
        } else {
            None
        }
    }
}
