//! Per-trial matrix state.
//!
//! The benchmark works on three square matrices: A and B are the operands,
//! C is the output accumulator. They live together in a [`MatrixStore`] that
//! is created once per trial and passed explicitly to whatever needs it -
//! no globals, one owner per trial.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Owns the A, B, C matrices for one trial at a fixed dimension.
///
/// All three are flat row-major `Vec<f64>` of length n², indexed
/// `[i * n + j]`. Allocation happens once in [`MatrixStore::new`];
/// running out of memory there aborts the process, which is the only
/// sane outcome for a benchmark that cannot proceed without its data.
pub struct MatrixStore {
    n: usize,
    /// Left operand (read-only during multiply).
    pub a: Vec<f64>,
    /// Right operand (read-only during multiply).
    pub b: Vec<f64>,
    /// Output accumulator. Must be zeroed before each multiply,
    /// the kernel does C += A * B.
    pub c: Vec<f64>,
}

impl MatrixStore {
    /// Allocate three zeroed n×n matrices.
    pub fn new(n: usize) -> Self {
        Self {
            n,
            a: vec![0.0; n * n],
            b: vec![0.0; n * n],
            c: vec![0.0; n * n],
        }
    }

    /// Matrix dimension n.
    pub fn dim(&self) -> usize {
        self.n
    }

    /// Fill A and B with pseudo-random doubles in [0,1).
    ///
    /// A single generator seeded with `seed` produces all draws: the first
    /// n² go to A and the next n² to B, both in row-major order. That draw
    /// order is part of the reproducibility contract - for a fixed n and
    /// seed, every run sees bit-identical operands.
    pub fn populate(&mut self, seed: u64) {
        let mut rng = StdRng::seed_from_u64(seed);
        for v in self.a.iter_mut() {
            *v = rng.gen();
        }
        for v in self.b.iter_mut() {
            *v = rng.gen();
        }
    }

    /// Zero the output matrix C.
    ///
    /// Call before every multiply when reusing the store across repeated
    /// measurements, otherwise results accumulate and corrupt the checksum.
    /// Idempotent - zeroing an already-zero C changes nothing.
    pub fn reset_output(&mut self) {
        self.c.fill(0.0);
    }
}
