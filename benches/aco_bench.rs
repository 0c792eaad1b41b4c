//! Criterion benchmarks for the ant colony.
//!
//! Uses points on a noisy ring so instance size is the only variable.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::Rng;
use u_antcolony::aco::{AcoConfig, AcoRunner, DistanceMatrix, PheromoneMatrix, Point, TourBuilder};
use u_antcolony::random::create_rng;

fn ring(n: usize) -> Vec<Point> {
    let mut rng = create_rng(7);
    (0..n)
        .map(|i| {
            let angle = i as f64 / n as f64 * std::f64::consts::TAU;
            let radius = 100.0 + rng.random_range(-5.0..5.0);
            Point::new(angle.cos() * radius, angle.sin() * radius)
        })
        .collect()
}

// ===========================================================================
// Benchmarks
// ===========================================================================

fn bench_tour_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("tour_construction");

    for &n in &[20usize, 50, 100] {
        let points = ring(n);
        let distances = DistanceMatrix::build(&points).unwrap();
        let pheromones = PheromoneMatrix::init(n, 1.0 / n as f64).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, _| {
            let builder = TourBuilder::new(&distances, &pheromones, 2.0);
            let mut rng = create_rng(42);
            b.iter(|| black_box(builder.build(&mut rng)))
        });
    }
    group.finish();
}

fn bench_solve(c: &mut Criterion) {
    let mut group = c.benchmark_group("aco_solve");
    group.sample_size(10);

    for (n, pop, gen) in [(20usize, 10usize, 50usize), (50, 20, 30), (100, 20, 20)] {
        let points = ring(n);
        let config = AcoConfig {
            population_size: pop,
            generations: gen,
            seed: Some(42),
            ..AcoConfig::default()
        };
        group.bench_with_input(
            BenchmarkId::new(format!("n{}_p{}_g{}", n, pop, gen), n),
            &(points, config),
            |b, (p, c)| {
                b.iter(|| {
                    let result = AcoRunner::solve(black_box(p), black_box(c));
                    black_box(result)
                })
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_tour_construction, bench_solve);
criterion_main!(benches);
