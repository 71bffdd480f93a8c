use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use moments_core::{
    chi_squared_quantile, students_t_quantile, SampleMoments, WeightedObservation, WeightedSample,
};
use rand::prelude::*;
use rand_distr::Normal;

/// Generate normal data
fn generate_normal_data(size: usize, mean: f64, std: f64, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let normal = Normal::new(mean, std).unwrap();
    (0..size).map(|_| normal.sample(&mut rng)).collect()
}

fn bench_moments(c: &mut Criterion) {
    let mut group = c.benchmark_group("SampleMoments");

    for &size in &[100, 1_000, 10_000, 100_000] {
        let values = generate_normal_data(size, 100.0, 15.0, 42);
        let raw = WeightedSample::from_values(&values).unwrap();

        // Same data folded into a frequency table of rounded values
        let mut rng = StdRng::seed_from_u64(7);
        let weighted: WeightedSample = values
            .iter()
            .map(|&v| WeightedObservation::new(v.round(), rng.gen_range(1..10) as f64).unwrap())
            .collect();

        group.bench_with_input(BenchmarkId::new("raw", size), &raw, |b, sample| {
            b.iter(|| SampleMoments::from_sample(black_box(sample)))
        });
        group.bench_with_input(BenchmarkId::new("weighted", size), &weighted, |b, sample| {
            b.iter(|| SampleMoments::from_sample(black_box(sample)))
        });
    }

    group.finish();
}

fn bench_quantiles(c: &mut Criterion) {
    let mut group = c.benchmark_group("Quantiles");

    for &df in &[4.0, 29.0, 999.0] {
        group.bench_with_input(BenchmarkId::new("students_t", df), &df, |b, &df| {
            b.iter(|| students_t_quantile(black_box(df), 0.975))
        });
        group.bench_with_input(BenchmarkId::new("chi_squared", df), &df, |b, &df| {
            b.iter(|| chi_squared_quantile(black_box(df), 0.025))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_moments, bench_quantiles);
criterion_main!(benches);
