//! Criterion benchmarks for the evolutionary operators.
//!
//! Measures the hot per-generation paths — recombination, fitness, and
//! selection — on synthetic instances of increasing size.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use evokit::cities::CityTable;
use evokit::mixture::{Catalog, MixtureProblem};
use evokit::random::create_rng;
use evokit::selection::{inverse, roulette_selection, tournament_selection, Direction};
use evokit::tsp::TspProblem;
use evokit::vrp::VrpProblem;

fn bench_tsp_crossover(c: &mut Criterion) {
    let mut group = c.benchmark_group("tsp_crossover");

    for city_count in [20usize, 100, 400] {
        let mut rng = create_rng(42);
        let cities = CityTable::generate(city_count, 1000, &mut rng).unwrap();
        let problem = TspProblem::new(cities).unwrap();
        let p1 = problem.generate(&mut rng);
        let p2 = problem.generate(&mut rng);

        group.bench_with_input(BenchmarkId::from_parameter(city_count), &city_count, |b, _| {
            b.iter(|| problem.crossover(black_box(&p1), black_box(&p2), 1.0, &mut rng))
        });
    }
    group.finish();
}

fn bench_tsp_fitness(c: &mut Criterion) {
    let mut group = c.benchmark_group("tsp_fitness");

    for city_count in [20usize, 100, 400] {
        let mut rng = create_rng(42);
        let cities = CityTable::generate(city_count, 1000, &mut rng).unwrap();
        let problem = TspProblem::new(cities).unwrap();
        let tour = problem.generate(&mut rng);

        group.bench_with_input(BenchmarkId::from_parameter(city_count), &city_count, |b, _| {
            b.iter(|| problem.fitness(black_box(&tour)))
        });
    }
    group.finish();
}

fn bench_vrp_operators(c: &mut Criterion) {
    let mut group = c.benchmark_group("vrp");

    let mut rng = create_rng(42);
    let cities = CityTable::generate(100, 1000, &mut rng).unwrap();
    let problem = VrpProblem::new(cities, 5).unwrap();
    let p1 = problem.generate(&mut rng);
    let p2 = problem.generate(&mut rng);

    group.bench_function("crossover_100_cities_5_vehicles", |b| {
        b.iter(|| problem.crossover(black_box(&p1), black_box(&p2), 1.0, &mut rng))
    });
    group.bench_function("partition_mutation_100_cities_5_vehicles", |b| {
        b.iter(|| problem.partition_mutation(black_box(&p1), 1.0, &mut rng))
    });
    group.finish();
}

fn bench_mixture(c: &mut Criterion) {
    let mut group = c.benchmark_group("mixture");

    let mut rng = create_rng(42);
    let problem = MixtureProblem::new(Catalog::standard(), 8).unwrap();
    let genome = problem.generate(&mut rng);

    group.bench_function("generate_8_components", |b| {
        b.iter(|| problem.generate(&mut rng))
    });
    group.bench_function("fitness_8_components", |b| {
        b.iter(|| problem.fitness(black_box(&genome)))
    });
    group.finish();
}

fn bench_selection(c: &mut Criterion) {
    let mut group = c.benchmark_group("selection");

    for size in [50usize, 200] {
        let mut rng = create_rng(42);
        let population: Vec<u32> = (0..size as u32).collect();
        let fitness: Vec<f64> = (0..size).map(|i| (i + 1) as f64).collect();

        group.bench_with_input(BenchmarkId::new("tournament_k3", size), &size, |b, _| {
            b.iter(|| {
                tournament_selection(
                    black_box(&population),
                    black_box(&fitness),
                    3,
                    Direction::Minimize,
                    &mut rng,
                )
                .unwrap()
            })
        });
        group.bench_with_input(BenchmarkId::new("roulette_inverse", size), &size, |b, _| {
            b.iter(|| {
                roulette_selection(black_box(&population), black_box(&fitness), inverse, &mut rng)
                    .unwrap()
            })
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_tsp_crossover,
    bench_tsp_fitness,
    bench_vrp_operators,
    bench_mixture,
    bench_selection
);
criterion_main!(benches);
