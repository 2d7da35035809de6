use itertools::Itertools as _;

use crate::{DiscreteValue, DomainPoint, Interval};

/// Set-level operations over sequences of one-axis intervals.
///
/// `complement` and `unique_intervals` treat the sequence as a set of points;
/// the other operations inspect pairs. None of them require the input to be
/// sorted unless stated.
pub trait IntervalSequence<V: DiscreteValue> {
    /// The intervals ordered by start, with the end as ascending tiebreak.
    fn sorted(&self) -> Vec<Interval<V>>;

    /// Checks that no two intervals share a point.
    fn is_disjoint(&self) -> bool;

    /// Checks whether some pair of intervals overlaps or touches, i.e.
    /// whether [`compress`] would shrink the sequence.
    ///
    /// [`compress`]: IntervalSequence::compress
    fn is_compressible(&self) -> bool;

    /// Merges every run of overlapping or adjacent intervals into one.
    fn compress(&self) -> Vec<Interval<V>>;

    /// The gaps of the axis not covered by this (disjoint) sequence,
    /// including the unbounded tails when the sequence does not reach the
    /// sentinels.
    fn complement(&self) -> Vec<Interval<V>>;

    /// The minimal disjoint set of atomic intervals covering the same points,
    /// where no atom straddles a boundary of any input interval.
    ///
    /// The result is the unique such tiling, so the operation is idempotent.
    fn unique_intervals(&self) -> Vec<Interval<V>>;
}

impl<V: DiscreteValue> IntervalSequence<V> for [Interval<V>] {
    fn sorted(&self) -> Vec<Interval<V>> {
        let mut intervals = self.to_vec();
        intervals.sort();
        intervals
    }

    fn is_disjoint(&self) -> bool {
        self.sorted()
            .iter()
            .tuple_windows()
            .all(|(lhs, rhs)| !lhs.overlaps(rhs))
    }

    fn is_compressible(&self) -> bool {
        self.sorted()
            .iter()
            .tuple_windows()
            .any(|(lhs, rhs)| lhs.overlaps(rhs) || lhs.is_adjacent_to(rhs))
    }

    fn compress(&self) -> Vec<Interval<V>> {
        let mut compressed = Vec::<Interval<V>>::with_capacity(self.len());
        for interval in self.sorted() {
            match compressed.last_mut() {
                Some(last) if last.overlaps(&interval) || last.is_adjacent_to(&interval) => {
                    *last = last.merge(&interval);
                }
                _ => compressed.push(interval),
            }
        }
        compressed
    }

    fn complement(&self) -> Vec<Interval<V>> {
        let mut gaps = Vec::new();
        let mut cursor = DomainPoint::Bottom;
        for interval in self.compress() {
            if let Some(gap) = gap_piece(cursor.clone(), interval.start().predecessor()) {
                gaps.push(gap);
            }
            if *interval.end() == DomainPoint::Top {
                return gaps;
            }
            cursor = interval.end().successor();
        }
        if let Some(tail) = gap_piece(cursor, DomainPoint::Top) {
            gaps.push(tail);
        }
        gaps
    }

    fn unique_intervals(&self) -> Vec<Interval<V>> {
        // Every input start opens an atom, and the point just past every
        // input end does as well. Between two consecutive openings no input
        // begins or ends, so membership is constant there and the piece is
        // atomic.
        let mut openings: Vec<DomainPoint<V>> = self
            .iter()
            .map(|interval| interval.start().clone())
            .chain(self.iter().filter_map(|interval| {
                let past_end = interval.end().successor();
                (past_end != DomainPoint::Top || *interval.end() == DomainPoint::At(V::max_value()))
                    .then_some(past_end)
            }))
            .collect();
        openings.sort();
        openings.dedup();

        let mut atoms = Vec::new();
        for (position, opening) in openings.iter().enumerate() {
            if *opening == DomainPoint::Top {
                continue;
            }
            let close = openings
                .get(position + 1)
                .map_or(DomainPoint::Top, DomainPoint::predecessor);
            let Some(atom) = gap_piece(opening.clone(), close) else {
                continue;
            };
            if self.iter().any(|interval| interval.contains_interval(&atom)) {
                atoms.push(atom);
            }
        }
        atoms
    }
}

/// A candidate piece between two cut points, or `None` when the points
/// describe a value-empty interval.
fn gap_piece<V: DiscreteValue>(
    start: DomainPoint<V>,
    end: DomainPoint<V>,
) -> Option<Interval<V>> {
    Interval::new(start, end).ok()
}
