use core::fmt;

use axial_interval::{DiscreteValue, DomainPoint, Interval};

use crate::{DataStore, ValidData};

/// Axis permutations and projections for planar stores.
///
/// A projection fixes one axis at a point and drops it; removing an axis
/// frequently makes previously distinct rows adjacent, so every projection
/// ends with a full compression pass. Flips permute the axis tuple without
/// touching the data.
impl<A, B, V> DataStore<(Interval<A>, Interval<B>), V>
where
    A: DiscreteValue,
    B: DiscreteValue,
    V: Clone + Eq + core::hash::Hash + fmt::Debug,
{
    /// The same rows with the axes swapped.
    pub fn flipped(&self) -> DataStore<(Interval<B>, Interval<A>), V> {
        let mut flipped = DataStore::with_capabilities(*self.capabilities());
        for row in self.get_all() {
            flipped.insert_row(ValidData::new(
                (row.interval.1.clone(), row.interval.0.clone()),
                row.value.clone(),
            ));
        }
        flipped
    }

    /// The rows whose first axis contains `at`, with that axis removed.
    pub fn by_first_axis(&self, at: &DomainPoint<A>) -> DataStore<Interval<B>, V> {
        let mut projected = DataStore::with_capabilities(*self.capabilities());
        for row in self.get_all() {
            if row.interval.0.contains_point(at) {
                projected.insert_row(ValidData::new(row.interval.1.clone(), row.value.clone()));
            }
        }
        projected.compress_all();
        projected
    }

    /// The rows whose second axis contains `at`, with that axis removed.
    pub fn by_second_axis(&self, at: &DomainPoint<B>) -> DataStore<Interval<A>, V> {
        self.flipped().by_first_axis(at)
    }
}

/// Axis permutations and projections for three-axis stores.
impl<A, B, C, V> DataStore<(Interval<A>, Interval<B>, Interval<C>), V>
where
    A: DiscreteValue,
    B: DiscreteValue,
    C: DiscreteValue,
    V: Clone + Eq + core::hash::Hash + fmt::Debug,
{
    /// The same rows with the first two axes swapped.
    pub fn flipped_first_second(&self) -> DataStore<(Interval<B>, Interval<A>, Interval<C>), V> {
        self.permuted(|(first, second, third)| (second, first, third))
    }

    /// The same rows with the outer axes swapped.
    pub fn flipped_first_third(&self) -> DataStore<(Interval<C>, Interval<B>, Interval<A>), V> {
        self.permuted(|(first, second, third)| (third, second, first))
    }

    /// The same rows with the last two axes swapped.
    pub fn flipped_second_third(&self) -> DataStore<(Interval<A>, Interval<C>, Interval<B>), V> {
        self.permuted(|(first, second, third)| (first, third, second))
    }

    /// The rows whose first axis contains `at`, with that axis removed.
    pub fn by_first_axis(&self, at: &DomainPoint<A>) -> DataStore<(Interval<B>, Interval<C>), V> {
        let mut projected = DataStore::with_capabilities(*self.capabilities());
        for row in self.get_all() {
            if row.interval.0.contains_point(at) {
                projected.insert_row(ValidData::new(
                    (row.interval.1.clone(), row.interval.2.clone()),
                    row.value.clone(),
                ));
            }
        }
        projected.compress_all();
        projected
    }

    /// The rows whose second axis contains `at`, with that axis removed.
    pub fn by_second_axis(&self, at: &DomainPoint<B>) -> DataStore<(Interval<A>, Interval<C>), V> {
        self.flipped_first_second().by_first_axis(at)
    }

    /// The rows whose third axis contains `at`, with that axis removed.
    pub fn by_third_axis(&self, at: &DomainPoint<C>) -> DataStore<(Interval<A>, Interval<B>), V> {
        self.flipped_first_third().flipped_second_third().by_first_axis(at)
    }

    fn permuted<A2, B2, C2>(
        &self,
        rearrange: impl Fn(
            (Interval<A>, Interval<B>, Interval<C>),
        ) -> (Interval<A2>, Interval<B2>, Interval<C2>),
    ) -> DataStore<(Interval<A2>, Interval<B2>, Interval<C2>), V>
    where
        A2: DiscreteValue,
        B2: DiscreteValue,
        C2: DiscreteValue,
    {
        let mut permuted = DataStore::with_capabilities(*self.capabilities());
        for row in self.get_all() {
            permuted.insert_row(ValidData::new(
                rearrange(row.interval.clone()),
                row.value.clone(),
            ));
        }
        permuted
    }
}
