use core::fmt;

use axial_interval::DimensionalInterval;
use error_stack::Report;

use crate::{DataStore, DiffAction, KeyNotFound, NoSingleValue, ValidData};

/// A copy-on-write façade over [`DataStore`]: every mutator clones the
/// engine, applies the change there, and returns the result as a new
/// snapshot, leaving this one untouched.
///
/// Both façades drive the same engine; pick this one when sharing a store
/// between owners matters more than allocation cost.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot<I: DimensionalInterval, V> {
    store: DataStore<I, V>,
}

impl<I, V> Snapshot<I, V>
where
    I: DimensionalInterval,
    V: Clone + Eq + core::hash::Hash + fmt::Debug,
{
    pub(crate) const fn from_store(store: DataStore<I, V>) -> Self {
        Self { store }
    }

    /// A mutable copy of the snapshot's content.
    pub fn to_mutable(&self) -> DataStore<I, V> {
        self.store.clone()
    }

    pub fn get_at(&self, point: &I::Point) -> Option<&V> {
        self.store.get_at(point)
    }

    /// # Errors
    ///
    /// Returns [`NoSingleValue`] unless exactly one row covers the unbounded
    /// region.
    pub fn get(&self) -> Result<&V, Report<NoSingleValue>> {
        self.store.get()
    }

    pub fn get_all(&self) -> impl Iterator<Item = &ValidData<I, V>> {
        self.store.get_all()
    }

    pub fn get_intersecting(&self, region: &I) -> Vec<&ValidData<I, V>> {
        self.store.get_intersecting(region)
    }

    pub fn intersects(&self, region: &I) -> bool {
        self.store.intersects(region)
    }

    pub fn domain(&self) -> Vec<I> {
        self.store.domain()
    }

    pub fn domain_complement(&self) -> Vec<I> {
        self.store.domain_complement()
    }

    #[must_use]
    pub fn set(&self, data: impl Into<ValidData<I, V>>) -> Self {
        self.updated(|store| store.set(data))
    }

    /// The updated snapshot, or `None` when a row intersects the interval.
    #[must_use]
    pub fn set_if_no_conflict(&self, data: impl Into<ValidData<I, V>>) -> Option<Self> {
        let mut store = self.store.clone();
        store.set_if_no_conflict(data).then(|| Self { store })
    }

    #[must_use]
    pub fn update(&self, data: impl Into<ValidData<I, V>>) -> Self {
        self.updated(|store| store.update(data))
    }

    #[must_use]
    pub fn remove(&self, region: &I) -> Self {
        self.updated(|store| store.remove(region))
    }

    #[must_use]
    pub fn fill(&self, data: impl Into<ValidData<I, V>>) -> Self {
        self.updated(|store| store.fill(data))
    }

    /// # Errors
    ///
    /// Returns [`KeyNotFound`] when the store holds no row equal to `old`.
    pub fn replace(
        &self,
        old: &ValidData<I, V>,
        new: impl Into<ValidData<I, V>>,
    ) -> Result<Self, Report<KeyNotFound>> {
        let mut store = self.store.clone();
        store.replace(old, new)?;
        Ok(Self { store })
    }

    /// # Errors
    ///
    /// Returns [`KeyNotFound`] when no row starts at `key`.
    pub fn replace_by_key(
        &self,
        key: &I::Start,
        new: impl Into<ValidData<I, V>>,
    ) -> Result<Self, Report<KeyNotFound>> {
        let mut store = self.store.clone();
        store.replace_by_key(key, new)?;
        Ok(Self { store })
    }

    #[must_use]
    pub fn merge(&self, other: &Self, resolve: impl FnMut(&V, &V) -> V) -> Self {
        self.updated(|store| store.merge(&other.store, resolve))
    }

    #[must_use]
    pub fn compress_all(&self) -> Self {
        self.updated(DataStore::compress_all)
    }

    #[must_use]
    pub fn recompress_all(&self) -> Self {
        self.updated(DataStore::recompress_all)
    }

    pub fn diff_actions_from(&self, old: &Self) -> Vec<DiffAction<I, V>> {
        self.store.diff_actions_from(&old.store)
    }

    #[must_use]
    pub fn apply_diff_actions(&self, actions: impl IntoIterator<Item = DiffAction<I, V>>) -> Self {
        self.updated(|store| store.apply_diff_actions(actions))
    }

    #[must_use]
    pub fn sync_with(&self, other: &Self) -> Self {
        self.updated(|store| store.sync_with(&other.store))
    }

    fn updated(&self, mutate: impl FnOnce(&mut DataStore<I, V>)) -> Self {
        let mut store = self.store.clone();
        mutate(&mut store);
        Self { store }
    }
}
