use bitlin::{kernel_basis, BitMatrix};
use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use rand::prelude::*;

fn random_bitmatrix(row_count: usize, column_count: usize) -> BitMatrix {
    let mut rng = thread_rng();
    BitMatrix::from_iter(
        (0..row_count).map(|_| (0..column_count).map(|_| rng.gen::<bool>()).collect::<Vec<_>>()),
        column_count,
    )
}

pub fn echelonize_benchmark(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("BitMatrix::echelonize");
    for size in [32usize, 128usize, 512usize] {
        group.sample_size(20);
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |bencher, &size| {
            bencher.iter_batched(
                || random_bitmatrix(size, 2 * size),
                |mut matrix| matrix.echelonize(),
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

pub fn kernel_benchmark(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("kernel_basis");
    for size in [32usize, 128usize, 512usize] {
        group.sample_size(20);
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |bencher, &size| {
            let mut matrix = random_bitmatrix(size, 2 * size);
            matrix.echelonize();
            let stripped = matrix.without_zero_rows();
            bencher.iter(|| kernel_basis(&stripped));
        });
    }
    group.finish();
}

criterion_group!(benches, echelonize_benchmark, kernel_benchmark);
criterion_main!(benches);
