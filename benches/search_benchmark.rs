//! Benchmarks for the fitness replay and generation advance hot paths.

#![allow(missing_docs)]
#![allow(clippy::unwrap_used)]

use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use tourney::{
    Board, BreedingConfig, Genome, Population, SearchConfig, Square, TourFitness, search,
};

fn bench_evaluate(c: &mut Criterion) {
    let start: Square = "E4".parse().unwrap();
    let mut rng = SmallRng::seed_from_u64(42);
    let genome = Genome::random(&mut rng, 64);
    let mut board = Board::new(start);

    c.bench_function("evaluate_64_slots", |b| {
        b.iter(|| {
            let evaluation = board.evaluate(black_box(&genome)).unwrap();
            black_box(evaluation)
        });
    });
}

fn bench_generation_advance(c: &mut Criterion) {
    let start: Square = "E4".parse().unwrap();
    let mut rng = SmallRng::seed_from_u64(42);
    let mut population = Population::new(
        50,
        64,
        TourFitness::new(start),
        BreedingConfig::default(),
        &mut rng,
    )
    .unwrap();

    c.bench_function("advance_generation_pop50", |b| {
        b.iter(|| {
            let reached = population
                .advance_generation(true, 63, black_box(0.01), &mut rng)
                .unwrap();
            black_box(reached)
        });
    });
}

fn bench_short_search(c: &mut Criterion) {
    let start: Square = "E4".parse().unwrap();
    let config = SearchConfig {
        generations: 20,
        ..SearchConfig::default()
    };

    c.bench_function("search_20_generations", |b| {
        b.iter(|| {
            let report = search(black_box(&config), black_box(start)).unwrap();
            black_box(report)
        });
    });
}

criterion_group!(
    benches,
    bench_evaluate,
    bench_generation_advance,
    bench_short_search
);
criterion_main!(benches);
