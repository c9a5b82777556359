//! Benchmarks for the route sequencing engine.

#[cfg(feature = "bench")]
extern crate criterion;

#[cfg(feature = "bench")]
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use beat_plan::config::Config;
use beat_plan::local_search::LocalSearch;
use beat_plan::problem::{Problem, Stop};
use beat_plan::solution::Tour;
use beat_plan::RouteSolver;
use std::time::{Duration, Instant};

/// Meters per degree of latitude (and of longitude at the equator).
const METERS_PER_DEGREE: f64 = 111_194.926_644_558_73;

/// Create a benchmark stop grid of the given size with ~500 m spacing.
fn create_benchmark_stops(size: usize) -> Vec<Stop> {
    let grid_size = (size as f64).sqrt().ceil() as usize;
    let mut stops = vec![Stop::new("depot", 0.0, 0.0, "")];

    for i in 1..size {
        let row = i / grid_size;
        let col = i % grid_size;
        stops.push(Stop::new(
            format!("stop-{}", i),
            row as f64 * 500.0 / METERS_PER_DEGREE,
            col as f64 * 500.0 / METERS_PER_DEGREE,
            "",
        ));
    }

    stops
}

#[cfg(feature = "bench")]
fn benchmark_formulation(c: &mut Criterion) {
    let mut group = c.benchmark_group("formulation");

    for size in [50, 100, 200].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            let stops = create_benchmark_stops(size);

            b.iter(|| Problem::new(stops.clone()).expect("valid stops"));
        });
    }

    group.finish();
}

#[cfg(feature = "bench")]
fn benchmark_descent(c: &mut Criterion) {
    let mut group = c.benchmark_group("descent");

    for size in [50, 100, 200].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            let problem = Problem::new(create_benchmark_stops(size)).expect("valid stops");
            let local_search = LocalSearch::new(3);

            b.iter(|| {
                let mut tour = Tour::new((0..problem.len()).collect());
                let deadline = Instant::now() + Duration::from_secs(60);
                local_search.descend(&mut tour, &problem, deadline);
                tour.distance
            });
        });
    }

    group.finish();
}

#[cfg(feature = "bench")]
fn benchmark_full_solve(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_solve");
    group.measurement_time(Duration::from_secs(30));

    for size in [50, 100].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            let problem = Problem::new(create_benchmark_stops(size)).expect("valid stops");
            let config = Config::new()
                .with_seed(1)
                .with_time_limit(Duration::from_secs(2))
                .with_max_rounds_without_improvement(100);

            b.iter(|| {
                let mut solver =
                    RouteSolver::new(problem.clone(), config.clone()).expect("valid config");
                solver.run().expect("solvable instance")
            });
        });
    }

    group.finish();
}

#[cfg(feature = "bench")]
criterion_group!(
    benches,
    benchmark_formulation,
    benchmark_descent,
    benchmark_full_solve
);

#[cfg(feature = "bench")]
criterion_main!(benches);
