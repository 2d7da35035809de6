use axial_interval::{Interval, sequence::IntervalSequence as _};
use proptest::prelude::*;

fn interval() -> impl Strategy<Value = Interval<i32>> {
    (-1000_i32..1000, -1000_i32..1000).prop_map(|(a, b)| {
        Interval::bounded(a.min(b), a.max(b)).expect("ordered points")
    })
}

fn width(interval: &Interval<i32>) -> i64 {
    let start = i64::from(*interval.start().finite().expect("bounded input"));
    let end = i64::from(*interval.end().finite().expect("bounded input"));
    end - start + 1
}

proptest! {
    #[test]
    fn intersection_commutes(lhs in interval(), rhs in interval()) {
        prop_assert_eq!(lhs.intersect(&rhs), rhs.intersect(&lhs));
    }

    #[test]
    fn excluding_partitions_the_left_operand(lhs in interval(), rhs in interval()) {
        let pieces: Vec<_> = lhs.excluding(&rhs).into_iter().collect();
        for piece in &pieces {
            prop_assert!(lhs.contains_interval(piece));
            prop_assert!(!piece.overlaps(&rhs));
        }

        let removed = lhs.intersect(&rhs).as_ref().map_or(0, width);
        let remaining: i64 = pieces.iter().map(width).sum();
        prop_assert_eq!(remaining + removed, width(&lhs));
    }

    #[test]
    fn compress_preserves_coverage(intervals in proptest::collection::vec(interval(), 0..8)) {
        let compressed = intervals.compress();
        prop_assert!(compressed.is_disjoint());
        prop_assert!(!compressed.is_compressible());
        for probe in -1100_i32..1100 {
            let covered = intervals.iter().any(|interval| interval.contains_value(&probe));
            let still_covered = compressed.iter().any(|interval| interval.contains_value(&probe));
            prop_assert_eq!(covered, still_covered);
        }
    }

    #[test]
    fn unique_intervals_cover_the_union(intervals in proptest::collection::vec(interval(), 0..6)) {
        let atoms = intervals.unique_intervals();
        prop_assert!(atoms.is_disjoint());
        prop_assert_eq!(atoms.unique_intervals(), atoms.clone());
        for probe in -1100_i32..1100 {
            let covered = intervals.iter().any(|interval| interval.contains_value(&probe));
            let atomised = atoms.iter().any(|interval| interval.contains_value(&probe));
            prop_assert_eq!(covered, atomised);
        }
    }

    #[test]
    fn complement_is_an_involution_on_disjoint_inputs(
        intervals in proptest::collection::vec(interval(), 0..6),
    ) {
        let compressed = intervals.compress();
        let complement = compressed.complement();
        for (lhs, rhs) in compressed.iter().zip(&complement) {
            prop_assert!(!lhs.overlaps(rhs));
        }
        prop_assert_eq!(complement.complement(), compressed);
    }
}
