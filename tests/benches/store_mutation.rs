//! Mutation throughput across dimensions, with and without the spatial
//! index.

use axial_interval::Interval;
use axial_store::{Capabilities, DataStore};
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use rand::Rng as _;

const OPERATIONS: usize = 2_000;

fn bounded(start: i32, end: i32) -> Interval<i32> {
    Interval::bounded(start, end).expect("ordered points")
}

fn linear_workload() -> Vec<(Interval<i32>, u32)> {
    let mut rng = rand::rng();
    (0..OPERATIONS)
        .map(|step| {
            let start = rng.random_range(-100_000_i32..100_000);
            let width = rng.random_range(0_i32..500);
            (bounded(start, start + width), step as u32 % 16)
        })
        .collect()
}

fn planar_workload() -> Vec<((Interval<i32>, Interval<i32>), u32)> {
    let mut rng = rand::rng();
    (0..OPERATIONS)
        .map(|step| {
            let x = rng.random_range(-10_000_i32..10_000);
            let y = rng.random_range(-10_000_i32..10_000);
            let width = rng.random_range(0_i32..200);
            (
                (bounded(x, x + width), bounded(y, y + width)),
                step as u32 % 16,
            )
        })
        .collect()
}

fn set_one_dimension(criterion: &mut Criterion) {
    let workload = linear_workload();

    let mut group = criterion.benchmark_group("store/set/1d");
    for (label, flags) in [("indexed", &[][..]), ("scanning", &[Capabilities::NO_SEARCH_TREE])] {
        group.bench_with_input(BenchmarkId::from_parameter(label), &flags, |bencher, flags| {
            bencher.iter(|| {
                let mut store =
                    DataStore::with_capabilities(Capabilities::from_flags(flags.iter().copied()));
                for row in &workload {
                    store.set(*row);
                }
                store.len()
            });
        });
    }
    group.finish();
}

fn set_two_dimensions(criterion: &mut Criterion) {
    let workload = planar_workload();

    let mut group = criterion.benchmark_group("store/set/2d");
    for (label, flags) in [("indexed", &[][..]), ("scanning", &[Capabilities::NO_SEARCH_TREE])] {
        group.bench_with_input(BenchmarkId::from_parameter(label), &flags, |bencher, flags| {
            bencher.iter(|| {
                let mut store =
                    DataStore::with_capabilities(Capabilities::from_flags(flags.iter().copied()));
                for row in &workload {
                    store.set(*row);
                }
                store.len()
            });
        });
    }
    group.finish();
}

fn remove_after_fill(criterion: &mut Criterion) {
    let workload = linear_workload();
    let mut filled = DataStore::new();
    for row in &workload {
        filled.set(*row);
    }

    criterion.bench_function("store/remove/1d", |bencher| {
        bencher.iter(|| {
            let mut store = filled.clone();
            for (region, _) in workload.iter().take(200) {
                store.remove(region);
            }
            store.len()
        });
    });
}

criterion_group!(benches, set_one_dimension, set_two_dimensions, remove_after_fill);
criterion_main!(benches);
