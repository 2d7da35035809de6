use core::{
    fmt,
    iter::{Chain, Once, once},
};

use error_stack::{Report, ensure};
use serde::{Deserialize, Serialize};

use crate::{DiscreteValue, DomainPoint};

/// An interval was constructed with its start above its end, or with a
/// sentinel on the wrong side.
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("an interval start must be less than or equal to its end")]
#[must_use]
pub struct MalformedInterval;

/// A non-empty, closed interval of [`DomainPoint`]s on a single axis.
///
/// The invariant is `start <= end`, with the extra constraint that the end is
/// never [`Bottom`] and the start is never [`Top`]: both would describe an
/// interval containing no domain value. Every instance therefore covers at
/// least one value, which makes the algebra below total.
///
/// [`Bottom`]: DomainPoint::Bottom
/// [`Top`]: DomainPoint::Top
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Interval<V> {
    start: DomainPoint<V>,
    end: DomainPoint<V>,
}

/// The result of removing one interval from another: nothing is left, one
/// piece is left, or the removal cut a hole and two pieces remain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Remainder<T> {
    Empty,
    Single(T),
    Split(T, T),
}

pub enum RemainderIter<T> {
    Empty,
    Single(Once<T>),
    Split(Chain<Once<T>, Once<T>>),
}

impl<T> Iterator for RemainderIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            Self::Empty => None,
            Self::Single(piece) => piece.next(),
            Self::Split(pieces) => pieces.next(),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self {
            Self::Empty => (0, Some(0)),
            Self::Single(piece) => piece.size_hint(),
            Self::Split(pieces) => pieces.size_hint(),
        }
    }
}

impl<T> ExactSizeIterator for RemainderIter<T> {}

impl<T> IntoIterator for Remainder<T> {
    type IntoIter = RemainderIter<T>;
    type Item = T;

    fn into_iter(self) -> Self::IntoIter {
        match self {
            Self::Empty => RemainderIter::Empty,
            Self::Single(piece) => RemainderIter::Single(once(piece)),
            Self::Split(left, right) => RemainderIter::Split(once(left).chain(once(right))),
        }
    }
}

impl<V: DiscreteValue> Interval<V> {
    /// Creates an interval from the given points.
    ///
    /// # Errors
    ///
    /// Returns [`MalformedInterval`] if `start > end`, or if the pair would
    /// describe an interval containing no domain value.
    pub fn new(
        start: DomainPoint<V>,
        end: DomainPoint<V>,
    ) -> Result<Self, Report<MalformedInterval>> {
        ensure!(start <= end, MalformedInterval);
        ensure!(end != DomainPoint::Bottom, MalformedInterval);
        ensure!(start != DomainPoint::Top, MalformedInterval);
        Ok(Self { start, end })
    }

    /// Creates an interval from the given points without validating them.
    ///
    /// The caller must uphold the type invariant; every operation assumes it.
    pub(crate) fn new_unchecked(start: DomainPoint<V>, end: DomainPoint<V>) -> Self {
        debug_assert!(start <= end, "interval start must not exceed its end");
        Self { start, end }
    }

    /// `None` when the points describe a value-empty interval, the validated
    /// interval otherwise. Used by the algebra to drop degenerate pieces.
    fn checked(start: DomainPoint<V>, end: DomainPoint<V>) -> Option<Self> {
        (start <= end && end != DomainPoint::Bottom && start != DomainPoint::Top)
            .then_some(Self { start, end })
    }

    /// The interval covering the whole axis.
    pub fn unbounded() -> Self {
        Self::new_unchecked(DomainPoint::Bottom, DomainPoint::Top)
    }

    /// The single-value interval `[value..value]`.
    pub fn at(value: V) -> Self {
        Self::new_unchecked(DomainPoint::At(value.clone()), DomainPoint::At(value))
    }

    /// The interval `(-∞..value]`.
    pub fn at_most(value: V) -> Self {
        Self::new_unchecked(DomainPoint::Bottom, DomainPoint::At(value))
    }

    /// The interval `[value..+∞)`.
    pub fn at_least(value: V) -> Self {
        Self::new_unchecked(DomainPoint::At(value), DomainPoint::Top)
    }

    /// The interval `[start..end]` over concrete values.
    ///
    /// # Errors
    ///
    /// Returns [`MalformedInterval`] if `start > end`.
    pub fn bounded(start: V, end: V) -> Result<Self, Report<MalformedInterval>> {
        Self::new(DomainPoint::At(start), DomainPoint::At(end))
    }

    /// Returns a reference to the start point of this interval.
    pub const fn start(&self) -> &DomainPoint<V> {
        &self.start
    }

    /// Returns a reference to the end point of this interval.
    pub const fn end(&self) -> &DomainPoint<V> {
        &self.end
    }

    /// Converts the interval into its points.
    pub fn into_points(self) -> (DomainPoint<V>, DomainPoint<V>) {
        (self.start, self.end)
    }

    /// Checks whether `point` lies within this interval.
    pub fn contains_point(&self, point: &DomainPoint<V>) -> bool {
        self.start <= *point && *point <= self.end
    }

    /// Checks whether `value` lies within this interval.
    pub fn contains_value(&self, value: &V) -> bool {
        self.contains_point(&DomainPoint::At(value.clone()))
    }

    /// Checks if this interval completely contains the other interval.
    pub fn contains_interval(&self, other: &Self) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    /// Returns `true` if both intervals have any points in common.
    pub fn overlaps(&self, other: &Self) -> bool {
        // Examples |      1     |     2
        // =========|============|============
        // Range A  |    [-----] | [-----]
        // Range B  | [-----]    |    [-----]
        self.start <= other.end && other.start <= self.end
    }

    /// Returns the interval of all points in both intervals, if any.
    pub fn intersect(&self, other: &Self) -> Option<Self> {
        // Examples     |     1     |     2
        // =============|===========|===========
        // Range A      |   [-----] | [-----]
        // Range B      | [-----]   |   [-----]
        // -------------|-----------|-----------
        // Intersection |   [---]   |   [---]
        self.overlaps(other).then(|| {
            Self::new_unchecked(
                self.start.clone().max(other.start.clone()),
                self.end.clone().min(other.end.clone()),
            )
        })
    }

    /// Returns `true` if this interval ends exactly one step before `other`
    /// starts.
    ///
    /// Saturation takes care of the extrema: an interval ending at the
    /// maximum value steps to [`Top`], which is never a valid start, so
    /// nothing is left-adjacent past the end of the axis.
    ///
    /// [`Top`]: DomainPoint::Top
    pub fn is_left_adjacent_to(&self, other: &Self) -> bool {
        self.end.successor() == other.start && self.end != DomainPoint::Top
    }

    /// Returns `true` if `other` ends exactly one step before this interval
    /// starts.
    pub fn is_right_adjacent_to(&self, other: &Self) -> bool {
        other.is_left_adjacent_to(self)
    }

    /// Returns `true` if both intervals are adjacent but do not overlap.
    pub fn is_adjacent_to(&self, other: &Self) -> bool {
        self.is_left_adjacent_to(other) || self.is_right_adjacent_to(other)
    }

    /// Returns the hull of both intervals, covering any points between them.
    ///
    /// In comparison to [`Self::union`], this method also covers the gap if
    /// the intervals neither overlap nor touch.
    #[must_use]
    pub fn merge(&self, other: &Self) -> Self {
        // Examples |     1     |        2
        // =========|===========|=================
        // Range A  |   [-----] | [-----]
        // Range B  | [-----]   |         [-----]
        // ---------|-----------|-----------------
        // Merge    | [-------] | [-------------]
        Self::new_unchecked(
            self.start.clone().min(other.start.clone()),
            self.end.clone().max(other.end.clone()),
        )
    }

    /// Returns the interval of all points in either interval, defined only
    /// when the two intersect or are adjacent.
    pub fn union(&self, other: &Self) -> Option<Self> {
        (self.overlaps(other) || self.is_adjacent_to(other)).then(|| self.merge(other))
    }

    /// Returns this interval without the points of `other`.
    pub fn excluding(&self, other: &Self) -> Remainder<Self> {
        let Some(common) = self.intersect(other) else {
            // Ranges do not overlap:
            // Example    |      1
            // ===========|==============
            // Range A    |        [---]
            // Range B    | [---]
            // -----------|--------------
            // Remainder  |        [---]
            return Remainder::Single(self.clone());
        };

        // Pieces on either side of the intersection; a piece degenerates to
        // nothing when the intersection reaches that side of this interval.
        // Example    |        1        |     2     |     3     |    4
        // ===========|=================|===========|===========|=========
        // Range A    | [-------------] | [-----]   |   [-----] | [---]
        // Range B    |     [-------]   |     [---] | [---]     | [---]
        // -----------|-----------------|-----------|-----------|---------
        // Remainder  | [---]       [-] | [---]     |     [---] |  empty
        let left = Self::checked(self.start.clone(), common.start.predecessor());
        let right = Self::checked(common.end.successor(), self.end.clone());
        match (left, right) {
            (None, None) => Remainder::Empty,
            (Some(piece), None) | (None, Some(piece)) => Remainder::Single(piece),
            (Some(left), Some(right)) => Remainder::Split(left, right),
        }
    }

    /// Returns the interval strictly between two disjoint, non-adjacent
    /// intervals, or `None` when no points separate them.
    pub fn gap_with(&self, other: &Self) -> Option<Self> {
        if self.overlaps(other) || self.is_adjacent_to(other) {
            return None;
        }
        let (lower, upper) = if self.start <= other.start {
            (self, other)
        } else {
            (other, self)
        };
        Self::checked(lower.end.successor(), upper.start.predecessor())
    }
}

impl<V: fmt::Debug> fmt::Display for Interval<V> {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.start {
            DomainPoint::Bottom => fmt.write_str("(-\u{221e}")?,
            start => write!(fmt, "[{start}")?,
        }
        fmt.write_str("..")?;
        match &self.end {
            DomainPoint::Top => fmt.write_str("+\u{221e})"),
            end => write!(fmt, "{end}]"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn construction_rejects_inverted_points() {
        assert!(Interval::bounded(4, 2).is_err());
        assert!(Interval::<i32>::new(DomainPoint::Top, DomainPoint::Top).is_err());
        assert!(Interval::<i32>::new(DomainPoint::Bottom, DomainPoint::Bottom).is_err());
        assert!(Interval::bounded(2, 2).is_ok());
    }

    #[test]
    fn single_value_intervals_intersect_themselves() {
        let at = Interval::at(7);
        assert_eq!(at.intersect(&at), Some(at));
    }

    #[test]
    fn adjacency_does_not_step_past_the_axis() {
        let tail = Interval::at_most(i32::MAX);
        assert!(!tail.is_left_adjacent_to(&Interval::at_least(i32::MIN)));
        assert!(!tail.is_left_adjacent_to(&tail));

        let at_max = Interval::at(i32::MAX);
        assert!(Interval::at(i32::MAX - 1).is_left_adjacent_to(&at_max));
        assert!(at_max.is_right_adjacent_to(&Interval::at(i32::MAX - 1)));
    }

    #[test]
    fn display_renders_the_literal_forms() {
        assert_eq!(Interval::at_most(4).to_string(), "(-\u{221e}..4]");
        assert_eq!(Interval::at_least(16).to_string(), "[16..+\u{221e})");
        assert_eq!(
            Interval::bounded(5, 15).expect("ordered points").to_string(),
            "[5..15]"
        );
        assert_eq!(
            Interval::<i32>::unbounded().to_string(),
            "(-\u{221e}..+\u{221e})"
        );
    }
}
