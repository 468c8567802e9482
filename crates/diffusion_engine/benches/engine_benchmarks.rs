//! Criterion benchmarks for diffusion_engine.
//!
//! Benchmarks cover:
//! - Normal variate generation (single draws vs batch fill)
//! - Path simulation with varying path counts
//! - Terminal comparison and per-time ensemble statistics

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use diffusion_core::types::SimulationParameters;
use diffusion_engine::mc::simulate;
use diffusion_engine::rng::SimRng;
use diffusion_engine::stats::{compare, ensemble_statistics};

fn params(path_count: usize) -> SimulationParameters {
    SimulationParameters {
        path_count,
        ..Default::default()
    }
}

/// Benchmark RNG generation.
fn bench_rng_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("rng_generation");

    for n_samples in [1_000, 10_000, 100_000] {
        group.bench_with_input(
            BenchmarkId::new("normal_samples", n_samples),
            &n_samples,
            |b, &n| {
                let mut rng = SimRng::from_seed(42);
                b.iter(|| {
                    let mut sum = 0.0;
                    for _ in 0..n {
                        sum += rng.gen_normal();
                    }
                    black_box(sum)
                });
            },
        );

        group.bench_with_input(
            BenchmarkId::new("normal_batch", n_samples),
            &n_samples,
            |b, &n| {
                let mut rng = SimRng::from_seed(42);
                let mut buffer = vec![0.0; n];
                b.iter(|| {
                    rng.fill_normal(&mut buffer);
                    black_box(buffer.iter().sum::<f64>())
                });
            },
        );
    }

    group.finish();
}

/// Benchmark path simulation (100 steps) with varying path counts.
fn bench_simulate(c: &mut Criterion) {
    let mut group = c.benchmark_group("simulate");

    for n_paths in [100, 1_000, 10_000] {
        let p = params(n_paths);
        group.bench_with_input(BenchmarkId::new("paths", n_paths), &p, |b, p| {
            b.iter(|| black_box(simulate(p).unwrap()));
        });
    }

    group.finish();
}

/// Benchmark the statistics stage on a fixed batch.
fn bench_statistics(c: &mut Criterion) {
    let p = params(10_000);
    let batch = simulate(&p).unwrap();

    c.bench_function("compare_terminal", |b| {
        b.iter(|| black_box(compare(&batch, &p).unwrap()));
    });
    c.bench_function("ensemble_statistics", |b| {
        b.iter(|| black_box(ensemble_statistics(&batch)));
    });
}

criterion_group!(benches, bench_rng_generation, bench_simulate, bench_statistics);
criterion_main!(benches);
