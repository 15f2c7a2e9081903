//! The measured operation: naive triple-loop matrix multiplication.

/// Naive matrix multiplication using i-j-k loop order: C += A * B.
///
/// This is the textbook triple loop, kept deliberately unoptimized as a
/// performance baseline. The i-j-k order is part of the contract: floating
/// point addition is not associative, so reordering the loops changes the
/// least-significant bits of the result. Keeping the order fixed makes runs
/// bit-for-bit comparable against a reference.
///
/// C is accumulated into, so it must be zeroed beforehand (see
/// [`MatrixStore::reset_output`](crate::store::MatrixStore::reset_output)).
///
/// Returns the trace of C as a checksum so callers can consume the result
/// and keep the compiler from eliminating the multiply as dead code. The
/// checksum is not compared against ground truth.
///
/// # Arguments
///
/// * `a` - Matrix A (n × n), row-major
/// * `b` - Matrix B (n × n), row-major
/// * `c` - Matrix C (n × n), row-major, accumulated into (C += A * B)
/// * `n` - Dimension of all three matrices
///
/// # Panics
///
/// Panics if any slice length is not n². Mismatched dimensions are a
/// programming error, not a recoverable condition.
pub fn multiply(a: &[f64], b: &[f64], c: &mut [f64], n: usize) -> f64 {
    assert_eq!(a.len(), n * n, "A: expected {}x{}={} elements", n, n, n * n);
    assert_eq!(b.len(), n * n, "B: expected {}x{}={} elements", n, n, n * n);
    assert_eq!(c.len(), n * n, "C: expected {}x{}={} elements", n, n, n * n);

    for i in 0..n {
        for j in 0..n {
            for k in 0..n {
                c[i * n + j] += a[i * n + k] * b[k * n + j];
            }
        }
    }

    trace(c, n)
}

/// Sum of the diagonal entries of an n×n row-major matrix, in increasing
/// index order.
pub fn trace(m: &[f64], n: usize) -> f64 {
    assert_eq!(m.len(), n * n, "expected {}x{}={} elements", n, n, n * n);
    (0..n).map(|i| m[i * n + i]).sum()
}
