use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::hint::black_box;
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256PlusPlus;
use jackboot::*;

const SAMPLE_SIZE: usize = 200;
const RESAMPLES: usize = 2_000;

fn sample(size: usize) -> Vec<f64> {
    (0..size).map(|i| (i % 37) as f64 * 0.5).collect()
}

/// Replicate draws plus statistic evaluation, no summary.
fn bench_distribution(c: &mut Criterion) {
    let mut group = c.benchmark_group("estimator/distribution");

    for &size in &[20, 200, 2_000] {
        let data = sample(size);
        group.throughput(Throughput::Elements((size * RESAMPLES) as u64));
        group.bench_with_input(BenchmarkId::new("mean", size), &data, |b, data| {
            let estimator = Estimator::new(Mean).nboot(RESAMPLES);
            let mut rng = Xoshiro256PlusPlus::seed_from_u64(1);
            b.iter(|| black_box(estimator.run(black_box(data), &mut rng)))
        });
    }
    group.finish();
}

/// Full jackknife-after-bootstrap, per membership rule.
fn bench_jackknife_after_bootstrap(c: &mut Criterion) {
    let data = sample(SAMPLE_SIZE);
    let mut group = c.benchmark_group("estimator/jackknife");

    for membership in [Membership::ByIndex, Membership::ByValue] {
        let estimator = Estimator::new(Mean)
            .nboot(RESAMPLES)
            .membership(membership)
            .summary(Variance::default());
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(2);
        group.bench_function(format!("{membership:?}"), |b| {
            b.iter(|| black_box(estimator.run(black_box(&data), &mut rng)))
        });
    }
    group.finish();
}

/// Spread of a vector of influence values.
fn bench_jackknife_spread(c: &mut Criterion) {
    let values = sample(SAMPLE_SIZE);
    c.bench_function("spread/jackknife", |b| {
        b.iter(|| black_box(jackknife_spread(black_box(&values))))
    });
}

criterion_group!(
    benches,
    bench_distribution,
    bench_jackknife_after_bootstrap,
    bench_jackknife_spread
);
criterion_main!(benches);
