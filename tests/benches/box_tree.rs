//! Box-tree tuning: bucket capacity and initial-boundary fit.
//!
//! The interesting result is boundary sensitivity: the tree is fastest when
//! the initial boundary matches the true data extent. A tighter boundary
//! pays for repeated doubling during warm-up, a looser one for unnecessary
//! subdivision depth.

use axial_interval::HyperBox;
use axial_store::BoxTree;
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use rand::Rng as _;

const ENTRIES: i64 = 4_096;
const DATA_EXTENT: f64 = 10_000.0;

fn random_boxes(count: i64) -> Vec<(i64, HyperBox<2>)> {
    let mut rng = rand::rng();
    (0..count)
        .map(|key| {
            let x = rng.random_range(-DATA_EXTENT..DATA_EXTENT);
            let y = rng.random_range(-DATA_EXTENT..DATA_EXTENT);
            let width = rng.random_range(1.0..50.0);
            (key, HyperBox::new([x, y], [x + width, y + width]))
        })
        .collect()
}

fn bucket_capacity(criterion: &mut Criterion) {
    let boxes = random_boxes(ENTRIES);
    let bounds = HyperBox::new([-DATA_EXTENT, -DATA_EXTENT], [DATA_EXTENT, DATA_EXTENT]);

    let mut group = criterion.benchmark_group("box_tree/bucket_capacity");
    for capacity in [4_usize, 16, 64, 256] {
        group.bench_with_input(
            BenchmarkId::from_parameter(capacity),
            &capacity,
            |bencher, &capacity| {
                bencher.iter(|| {
                    let mut tree = BoxTree::new(bounds, capacity);
                    for (key, entry) in &boxes {
                        tree.insert(*key, *entry);
                    }
                    let mut hits = 0_usize;
                    for (_, probe) in boxes.iter().take(256) {
                        hits += tree.query(probe).len();
                    }
                    hits
                });
            },
        );
    }
    group.finish();
}

fn boundary_fit(criterion: &mut Criterion) {
    let boxes = random_boxes(ENTRIES);

    let mut group = criterion.benchmark_group("box_tree/boundary_fit");
    for (label, scale) in [("tight", 1e-3), ("matched", 1.0), ("loose", 1e3)] {
        let extent = DATA_EXTENT * scale;
        let bounds = HyperBox::new([-extent, -extent], [extent, extent]);
        group.bench_with_input(BenchmarkId::from_parameter(label), &bounds, |bencher, bounds| {
            bencher.iter(|| {
                let mut tree = BoxTree::new(*bounds, 16);
                for (key, entry) in &boxes {
                    tree.insert(*key, *entry);
                }
                tree.query(&HyperBox::new([0.0, 0.0], [100.0, 100.0])).len()
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bucket_capacity, boundary_fit);
criterion_main!(benches);
