use core::fmt;
use std::collections::BTreeSet;

use axial_interval::DimensionalInterval;
use error_stack::Report;

use crate::{Capabilities, DataStore, DisjointnessViolation, ValidData};

/// A dimensional store whose payload is a set of values per region.
///
/// Region-level operations delegate to the engine with `BTreeSet<V>` rows;
/// on top of those, [`add_one`] and [`remove_one`] edit a single member
/// across a region, splitting and re-compressing rows as membership changes.
///
/// [`add_one`]: MultiValueStore::add_one
/// [`remove_one`]: MultiValueStore::remove_one
#[derive(Debug, Clone, PartialEq)]
pub struct MultiValueStore<I: DimensionalInterval, V> {
    store: DataStore<I, BTreeSet<V>>,
}

impl<I, V> MultiValueStore<I, V>
where
    I: DimensionalInterval,
    V: Clone + Ord + core::hash::Hash + fmt::Debug,
{
    pub fn new() -> Self {
        Self {
            store: DataStore::new(),
        }
    }

    pub fn with_capabilities(capabilities: Capabilities) -> Self {
        Self {
            store: DataStore::with_capabilities(capabilities),
        }
    }

    /// Creates a store holding exactly the given set-valued rows.
    ///
    /// # Errors
    ///
    /// Returns [`DisjointnessViolation`] under `require_disjoint` when two
    /// rows overlap.
    pub fn from_rows<R>(
        rows: impl IntoIterator<Item = R>,
    ) -> Result<Self, Report<DisjointnessViolation>>
    where
        R: Into<ValidData<I, BTreeSet<V>>>,
    {
        Ok(Self {
            store: DataStore::from_rows(rows)?,
        })
    }

    /// The underlying set-valued store.
    pub const fn as_store(&self) -> &DataStore<I, BTreeSet<V>> {
        &self.store
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    pub fn get_all(&self) -> impl Iterator<Item = &ValidData<I, BTreeSet<V>>> {
        self.store.get_all()
    }

    /// The set of values valid at `point`, if any.
    pub fn get_at(&self, point: &I::Point) -> Option<&BTreeSet<V>> {
        self.store.get_at(point)
    }

    pub fn get_intersecting(&self, region: &I) -> Vec<&ValidData<I, BTreeSet<V>>> {
        self.store.get_intersecting(region)
    }

    pub fn intersects(&self, region: &I) -> bool {
        self.store.intersects(region)
    }

    pub fn domain(&self) -> Vec<I> {
        self.store.domain()
    }

    /// Replaces all data intersecting the row's interval with the given set.
    pub fn set(&mut self, data: impl Into<ValidData<I, BTreeSet<V>>>) {
        self.store.set(data);
    }

    pub fn remove(&mut self, region: &I) {
        self.store.remove(region);
    }

    pub fn compress_all(&mut self) {
        self.store.compress_all();
    }

    pub fn recompress_all(&mut self) {
        self.store.recompress_all();
    }

    /// Ensures `value` is a member on every cell of `region`: uncovered
    /// sub-regions gain a singleton set, covered cells gain the member.
    pub fn add_one(&mut self, region: I, value: V) {
        let addition = DataStore::from_rows_with_capabilities(
            [ValidData::new(region, BTreeSet::from([value]))],
            *self.store.capabilities(),
        )
        .unwrap_or_else(|_| unreachable!("a single row is trivially disjoint"));
        self.store
            .merge(&addition, |current, added| current.union(added).cloned().collect());
    }

    /// Ensures `value` is not a member on any cell of `region`, dropping
    /// rows whose set would become empty.
    pub fn remove_one(&mut self, region: &I, value: &V) {
        let touched = self.store.carve(region, |members| {
            let mut members = members.clone();
            members.remove(value);
            (!members.is_empty()).then_some(members)
        });
        self.store.compress_values(touched);
    }

    /// Unions the other store's membership into this one.
    pub fn merge_one(&mut self, other: &Self) {
        self.store.merge(&other.store, |current, added| {
            current.union(added).cloned().collect()
        });
    }
}

impl<I, V> Default for MultiValueStore<I, V>
where
    I: DimensionalInterval,
    V: Clone + Ord + core::hash::Hash + fmt::Debug,
{
    fn default() -> Self {
        Self::new()
    }
}
