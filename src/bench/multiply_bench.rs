//! Criterion benchmark for the naive multiply kernel.
//!
//! Covers the smaller sweep sizes; elapsed time should grow roughly with n³
//! between them (naive kernel, no blocking). The larger sizes take minutes
//! per sample under criterion's repetition model - use the driver binary
//! for those.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use matbench::kernel::multiply;
use matbench::store::MatrixStore;
use matbench::trial::FILL_SEED;

fn bench_multiply(cr: &mut Criterion) {
    let mut group = cr.benchmark_group("naive_multiply");
    group.sample_size(10);

    for n in [128usize, 256, 512] {
        let mut store = MatrixStore::new(n);
        store.populate(FILL_SEED);

        // 2*n^3 flops per multiply
        group.throughput(Throughput::Elements((2 * n * n * n) as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |bencher, &n| {
            bencher.iter(|| {
                store.reset_output();
                multiply(&store.a, &store.b, &mut store.c, n)
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_multiply);
criterion_main!(benches);
