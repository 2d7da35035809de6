use core::fmt;
use std::collections::{BTreeMap, BTreeSet, HashMap, hash_map::Entry};

use axial_interval::DimensionalInterval;
use error_stack::{Report, ensure};

use crate::{
    Capabilities, DiffAction, DisjointnessViolation, KeyNotFound, NoSingleValue, ValidData,
    box_tree::BoxTree,
};

/// The dimensional store: disjoint interval-keyed values in N axes.
///
/// Three indexes are kept consistent at all times: the by-start ordered map
/// (the authoritative row set), a by-value multimap grouping the rows of each
/// value, and an optional box-tree accelerating region lookups. Every public
/// mutator resolves overlaps by carving intersecting rows into remainder
/// pieces, then re-compresses the values it touched, so after any mutator no
/// two rows of the same value touch along an axis while agreeing on all
/// others.
///
/// Mutation runs to completion on the caller's thread; a store shared across
/// threads needs external synchronisation or the copy-on-write [`Snapshot`]
/// façade.
///
/// [`Snapshot`]: crate::Snapshot
#[derive(Debug, Clone)]
pub struct DataStore<I: DimensionalInterval, V> {
    rows: BTreeMap<I::Start, ValidData<I, V>>,
    by_value: HashMap<V, BTreeSet<I::Start>>,
    search: Option<BoxTree<I::Start, I::Bounds>>,
    capabilities: Capabilities,
}

impl<I, V> DataStore<I, V>
where
    I: DimensionalInterval,
    V: Clone + Eq + core::hash::Hash + fmt::Debug,
{
    /// Creates an empty store with the default [`Capabilities`].
    pub fn new() -> Self {
        Self::with_capabilities(Capabilities::default())
    }

    /// Creates an empty store with the given capabilities.
    pub fn with_capabilities(capabilities: Capabilities) -> Self {
        let search = (!capabilities.no_search_tree).then(|| {
            BoxTree::new(
                I::domain_bounds(),
                capabilities.search_tree_bucket_capacity,
            )
        });
        Self {
            rows: BTreeMap::new(),
            by_value: HashMap::new(),
            search,
            capabilities,
        }
    }

    /// Creates a store holding exactly the given rows, without compressing
    /// them.
    ///
    /// The rows' intervals must be pairwise disjoint. Under the
    /// `require_disjoint` capability this is verified.
    ///
    /// # Errors
    ///
    /// Returns [`DisjointnessViolation`] when verification is on and two rows
    /// overlap; no partial store is built.
    pub fn from_rows<R>(rows: impl IntoIterator<Item = R>) -> Result<Self, Report<DisjointnessViolation>>
    where
        R: Into<ValidData<I, V>>,
    {
        Self::from_rows_with_capabilities(rows, Capabilities::default())
    }

    /// Like [`from_rows`], with explicit capabilities.
    ///
    /// # Errors
    ///
    /// Returns [`DisjointnessViolation`] under `require_disjoint` when two
    /// rows overlap.
    ///
    /// [`from_rows`]: DataStore::from_rows
    pub fn from_rows_with_capabilities<R>(
        rows: impl IntoIterator<Item = R>,
        capabilities: Capabilities,
    ) -> Result<Self, Report<DisjointnessViolation>>
    where
        R: Into<ValidData<I, V>>,
    {
        let rows: Vec<ValidData<I, V>> = rows.into_iter().map(Into::into).collect();
        if capabilities.require_disjoint {
            for (position, row) in rows.iter().enumerate() {
                for other in &rows[position + 1..] {
                    ensure!(
                        !row.interval.overlaps(&other.interval),
                        DisjointnessViolation
                    );
                }
            }
        }
        let mut store = Self::with_capabilities(capabilities);
        for row in rows {
            store.insert_row(row);
        }
        Ok(store)
    }

    /// The capabilities this store was constructed with.
    pub const fn capabilities(&self) -> &Capabilities {
        &self.capabilities
    }

    /// The number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// All rows in by-start order.
    pub fn get_all(&self) -> impl Iterator<Item = &ValidData<I, V>> {
        self.rows.values()
    }

    /// The value valid at `point`, if any.
    pub fn get_at(&self, point: &I::Point) -> Option<&V> {
        match &self.search {
            Some(tree) => tree
                .query(&I::point_bounds(point))
                .into_iter()
                .find_map(|key| {
                    self.rows
                        .get(&key)
                        .filter(|row| row.interval.contains_point(point))
                        .map(|row| &row.value)
                }),
            None => self
                .rows
                .values()
                .find(|row| row.interval.contains_point(point))
                .map(|row| &row.value),
        }
    }

    /// The single value covering the whole space.
    ///
    /// # Errors
    ///
    /// Returns [`NoSingleValue`] unless the store holds exactly one row and
    /// that row covers the unbounded region.
    pub fn get(&self) -> Result<&V, Report<NoSingleValue>> {
        let mut rows = self.rows.values();
        match (rows.next(), rows.next()) {
            (Some(row), None) if row.interval == I::unbounded() => Ok(&row.value),
            _ => Err(Report::new(NoSingleValue)),
        }
    }

    /// The rows intersecting `region`, in by-start order.
    pub fn get_intersecting(&self, region: &I) -> Vec<&ValidData<I, V>> {
        self.candidate_keys(region)
            .iter()
            .filter_map(|key| self.rows.get(key))
            .collect()
    }

    /// Checks whether any row intersects `region`.
    pub fn intersects(&self, region: &I) -> bool {
        !self.candidate_keys(region).is_empty()
    }

    /// The compressed regions where some row is valid.
    pub fn domain(&self) -> Vec<I> {
        let regions = self.rows.values().map(|row| row.interval.clone()).collect();
        compress_regions(regions)
    }

    /// The compressed regions where no row is valid.
    pub fn domain_complement(&self) -> Vec<I> {
        let mut complement = vec![I::unbounded()];
        for region in self.domain() {
            complement = complement
                .into_iter()
                .flat_map(|piece| match piece.intersect(&region) {
                    Some(cut) => piece.remainders(&cut),
                    None => vec![piece],
                })
                .collect();
        }
        compress_regions(complement)
    }

    /// Replaces all data intersecting the row's interval with the row.
    #[tracing::instrument(level = "trace", skip_all)]
    pub fn set(&mut self, data: impl Into<ValidData<I, V>>) {
        let data = data.into();
        let mut touched = self.carve(&data.interval, |_| None);
        push_unique(&mut touched, data.value.clone());
        self.insert_row(data);
        self.compress_values(touched);
    }

    /// Inserts the row only if nothing intersects its interval; reports
    /// whether it was inserted.
    pub fn set_if_no_conflict(&mut self, data: impl Into<ValidData<I, V>>) -> bool {
        let data = data.into();
        if self.intersects(&data.interval) {
            return false;
        }
        let value = data.value.clone();
        self.insert_row(data);
        self.compress_values(vec![value]);
        true
    }

    /// Sets every row in order; later rows override earlier ones where they
    /// overlap.
    pub fn set_many(&mut self, rows: impl IntoIterator<Item = impl Into<ValidData<I, V>>>) {
        for row in rows {
            self.set(row);
        }
    }

    /// Gives every existing row the new value where it intersects the row's
    /// interval. No previously invalid area becomes valid.
    #[tracing::instrument(level = "trace", skip_all)]
    pub fn update(&mut self, data: impl Into<ValidData<I, V>>) {
        let data = data.into();
        let touched = self.carve(&data.interval, |_| Some(data.value.clone()));
        self.compress_values(touched);
    }

    /// Removes all data in `region`, trimming and splitting rows that
    /// straddle its boundary.
    #[tracing::instrument(level = "trace", skip_all)]
    pub fn remove(&mut self, region: &I) {
        let touched = self.carve(region, |_| None);
        self.compress_values(touched);
    }

    /// Sets the row's value on exactly the sub-regions of its interval not
    /// already covered by any row.
    pub fn fill(&mut self, data: impl Into<ValidData<I, V>>) {
        let data = data.into();
        let mut free = vec![data.interval.clone()];
        for key in self.candidate_keys(&data.interval) {
            let Some(existing) = self.rows.get(&key) else {
                continue;
            };
            let existing = existing.interval.clone();
            free = free
                .into_iter()
                .flat_map(|piece| match piece.intersect(&existing) {
                    Some(cut) => piece.remainders(&cut),
                    None => vec![piece],
                })
                .collect();
        }
        for piece in free {
            self.insert_row(ValidData::new(piece, data.value.clone()));
        }
        self.compress_values(vec![data.value]);
    }

    /// Removes `old` and sets `new`.
    ///
    /// # Errors
    ///
    /// Returns [`KeyNotFound`] when the store holds no row equal to `old`;
    /// the store is unchanged.
    pub fn replace(
        &mut self,
        old: &ValidData<I, V>,
        new: impl Into<ValidData<I, V>>,
    ) -> Result<(), Report<KeyNotFound>> {
        let key = old.start_key();
        ensure!(
            self.rows.get(&key).is_some_and(|row| row == old),
            KeyNotFound
        );
        self.remove_row(&key);
        self.set(new);
        Ok(())
    }

    /// Removes the row starting at `key` and sets `new`.
    ///
    /// # Errors
    ///
    /// Returns [`KeyNotFound`] when no row starts at `key`; the store is
    /// unchanged.
    pub fn replace_by_key(
        &mut self,
        key: &I::Start,
        new: impl Into<ValidData<I, V>>,
    ) -> Result<(), Report<KeyNotFound>> {
        ensure!(self.rows.contains_key(key), KeyNotFound);
        self.remove_row(key);
        self.set(new);
        Ok(())
    }

    /// Unions the other store's validity into this one. Where both stores
    /// hold a value, `resolve` picks the result from the pair
    /// `(self value, other value)`.
    #[tracing::instrument(level = "trace", skip_all)]
    pub fn merge(&mut self, other: &Self, mut resolve: impl FnMut(&V, &V) -> V) {
        let incoming: Vec<ValidData<I, V>> = other.get_all().cloned().collect();
        for data in incoming {
            let mut touched = vec![data.value.clone()];
            let mut uncovered = vec![data.interval.clone()];
            for key in self.candidate_keys(&data.interval) {
                let Some(row) = self.remove_row(&key) else {
                    continue;
                };
                let Some(cut) = row.interval.intersect(&data.interval) else {
                    self.insert_row(row);
                    continue;
                };
                for piece in row.interval.remainders(&cut) {
                    self.insert_row(ValidData::new(piece, row.value.clone()));
                }
                let resolved = resolve(&row.value, &data.value);
                push_unique(&mut touched, row.value.clone());
                push_unique(&mut touched, resolved.clone());
                uncovered = uncovered
                    .into_iter()
                    .flat_map(|piece| match piece.intersect(&cut) {
                        Some(removed) => piece.remainders(&removed),
                        None => vec![piece],
                    })
                    .collect();
                self.insert_row(ValidData::new(cut, resolved));
            }
            for piece in uncovered {
                self.insert_row(ValidData::new(piece, data.value.clone()));
            }
            self.compress_values(touched);
        }
    }

    /// Merges every pair of same-valued rows that touch along exactly one
    /// axis and agree on all others, until none remain.
    ///
    /// The axes are swept in declaration order, each to a fixed point, and
    /// the sweep repeats until nothing merges; within an axis, pairs are
    /// examined in by-start order. The resulting tiling is deterministic.
    pub fn compress(&mut self, value: &V) {
        loop {
            let mut merged_any = false;
            for axis in 0..I::DIMENSIONS {
                while self.merge_next_on_axis(value, axis) {
                    merged_any = true;
                }
            }
            if !merged_any {
                return;
            }
        }
    }

    /// Merges the first (in by-start order) mergeable same-valued pair along
    /// the given axis; reports whether anything merged.
    fn merge_next_on_axis(&mut self, value: &V, axis: usize) -> bool {
        let keys: Vec<I::Start> = self
            .by_value
            .get(value)
            .map(|keys| keys.iter().cloned().collect())
            .unwrap_or_default();
        let mut merged_pair = None;
        'search: for (position, left_key) in keys.iter().enumerate() {
            for right_key in &keys[position + 1..] {
                let (Some(left), Some(right)) = (self.rows.get(left_key), self.rows.get(right_key))
                else {
                    continue;
                };
                if let Some(merged) = left.interval.merge_adjacent_on_axis(&right.interval, axis) {
                    merged_pair = Some((left_key.clone(), right_key.clone(), merged));
                    break 'search;
                }
            }
        }
        let Some((left_key, right_key, merged)) = merged_pair else {
            return false;
        };
        self.remove_row(&left_key);
        self.remove_row(&right_key);
        self.insert_row(ValidData::new(merged, value.clone()));
        true
    }

    /// Compresses every value.
    pub fn compress_all(&mut self) {
        let values: Vec<V> = self.by_value.keys().cloned().collect();
        for value in values {
            self.compress(&value);
        }
    }

    /// Decomposes every value's rows into the unique atomic tiling, then
    /// compresses. Merging alone is order-sensitive in two or more axes;
    /// going through the atomic tiling yields one canonical physical form
    /// for any logically equal content.
    pub fn recompress_all(&mut self) {
        let mut groups: Vec<(V, Vec<I>)> = Vec::new();
        for row in self.rows.values() {
            match groups.iter_mut().find(|(value, _)| *value == row.value) {
                Some((_, intervals)) => intervals.push(row.interval.clone()),
                None => groups.push((row.value.clone(), vec![row.interval.clone()])),
            }
        }
        let capabilities = self.capabilities;
        *self = Self::with_capabilities(capabilities);
        for (value, intervals) in groups {
            for atom in I::atoms(&intervals) {
                self.insert_row(ValidData::new(atom, value.clone()));
            }
            self.compress(&value);
        }
    }

    /// The minimal action sequence turning `old` into this store, in
    /// ascending start-key order.
    pub fn diff_actions_from(&self, old: &Self) -> Vec<DiffAction<I, V>> {
        let mut actions = Vec::new();
        let mut new_rows = self.rows.iter().peekable();
        let mut old_rows = old.rows.iter().peekable();
        loop {
            match (new_rows.peek(), old_rows.peek()) {
                (Some((new_key, new_row)), Some((old_key, old_row))) => {
                    match new_key.cmp(old_key) {
                        core::cmp::Ordering::Less => {
                            actions.push(DiffAction::Create((*new_row).clone()));
                            new_rows.next();
                        }
                        core::cmp::Ordering::Greater => {
                            actions.push(DiffAction::Delete((*old_key).clone()));
                            old_rows.next();
                        }
                        core::cmp::Ordering::Equal => {
                            if new_row != old_row {
                                actions.push(DiffAction::Update((*new_row).clone()));
                            }
                            new_rows.next();
                            old_rows.next();
                        }
                    }
                }
                (Some((_, new_row)), None) => {
                    actions.push(DiffAction::Create((*new_row).clone()));
                    new_rows.next();
                }
                (None, Some((old_key, _))) => {
                    actions.push(DiffAction::Delete((*old_key).clone()));
                    old_rows.next();
                }
                (None, None) => return actions,
            }
        }
    }

    /// Applies diff actions: deletions first, then updates, then creations.
    /// An action whose precondition no longer holds is skipped, so applying
    /// the same diff twice equals applying it once.
    pub fn apply_diff_actions(&mut self, actions: impl IntoIterator<Item = DiffAction<I, V>>) {
        let mut updates = Vec::new();
        let mut creates = Vec::new();
        for action in actions {
            match action {
                DiffAction::Delete(key) => {
                    self.remove_row(&key);
                }
                DiffAction::Update(row) => updates.push(row),
                DiffAction::Create(row) => creates.push(row),
            }
        }
        for row in updates {
            if self.rows.contains_key(&row.start_key()) {
                self.remove_row(&row.start_key());
                self.insert_row(row);
            }
        }
        for row in creates {
            if !self.intersects(&row.interval) {
                self.insert_row(row);
            }
        }
    }

    /// Makes this store equal to `other` by applying the diff between them.
    #[tracing::instrument(level = "trace", skip_all)]
    pub fn sync_with(&mut self, other: &Self) {
        let actions = other.diff_actions_from(self);
        self.apply_diff_actions(actions);
    }

    /// Pairs both stores' values on every atomic cell where both are valid.
    pub fn zip<W>(&self, other: &DataStore<I, W>) -> DataStore<I, (V, W)>
    where
        W: Clone + Eq + core::hash::Hash + fmt::Debug,
    {
        let mut zipped = DataStore::with_capabilities(self.capabilities);
        for cell in self.zip_cells(other) {
            if let (Some(left), Some(right)) =
                (self.value_covering(&cell), other.value_covering(&cell))
            {
                zipped.insert_row(ValidData::new(cell, (left.clone(), right.clone())));
            }
        }
        zipped.compress_all();
        zipped
    }

    /// Pairs both stores' values on every atomic cell where at least one is
    /// valid, defaulting the missing side. Cells valid in neither store are
    /// not emitted.
    pub fn zip_all<W>(
        &self,
        other: &DataStore<I, W>,
        self_default: V,
        other_default: W,
    ) -> DataStore<I, (V, W)>
    where
        W: Clone + Eq + core::hash::Hash + fmt::Debug,
    {
        let mut zipped = DataStore::with_capabilities(self.capabilities);
        for cell in self.zip_cells(other) {
            let pair = match (self.value_covering(&cell), other.value_covering(&cell)) {
                (Some(left), Some(right)) => (left.clone(), right.clone()),
                (Some(left), None) => (left.clone(), other_default.clone()),
                (None, Some(right)) => (self_default.clone(), right.clone()),
                (None, None) => continue,
            };
            zipped.insert_row(ValidData::new(cell, pair));
        }
        zipped.compress_all();
        zipped
    }

    /// Transforms every row; overlaps among outputs resolve in input order,
    /// later outputs overriding earlier ones.
    pub fn map<W>(&self, mut transform: impl FnMut(&ValidData<I, V>) -> ValidData<I, W>) -> DataStore<I, W>
    where
        W: Clone + Eq + core::hash::Hash + fmt::Debug,
    {
        let mut mapped = DataStore::with_capabilities(self.capabilities);
        for row in self.get_all() {
            mapped.set(transform(row));
        }
        mapped
    }

    /// Transforms every value, keeping intervals as they are.
    pub fn map_values<W>(&self, mut transform: impl FnMut(&V) -> W) -> DataStore<I, W>
    where
        W: Clone + Eq + core::hash::Hash + fmt::Debug,
    {
        let mut mapped = DataStore::with_capabilities(self.capabilities);
        for row in self.get_all() {
            mapped.insert_row(ValidData::new(row.interval.clone(), transform(&row.value)));
        }
        mapped.compress_all();
        mapped
    }

    /// Transforms every interval; overlaps among outputs resolve in input
    /// order.
    pub fn map_intervals(&self, mut transform: impl FnMut(&I) -> I) -> Self {
        let mut mapped = Self::with_capabilities(self.capabilities);
        for row in self.get_all() {
            mapped.set(ValidData::new(transform(&row.interval), row.value.clone()));
        }
        mapped
    }

    /// Keeps only the rows satisfying the predicate.
    pub fn filter(&self, mut keep: impl FnMut(&ValidData<I, V>) -> bool) -> Self {
        let mut filtered = Self::with_capabilities(self.capabilities);
        for row in self.get_all().filter(|row| keep(row)) {
            filtered.insert_row(row.clone());
        }
        filtered
    }

    /// Transforms rows, dropping those mapped to `None`.
    pub fn collect_rows<W>(
        &self,
        mut transform: impl FnMut(&ValidData<I, V>) -> Option<ValidData<I, W>>,
    ) -> DataStore<I, W>
    where
        W: Clone + Eq + core::hash::Hash + fmt::Debug,
    {
        let mut collected = DataStore::with_capabilities(self.capabilities);
        for row in self.get_all() {
            if let Some(row) = transform(row) {
                collected.set(row);
            }
        }
        collected
    }

    /// Expands every row into any number of rows; overlaps resolve in
    /// emission order.
    pub fn flat_map<W>(
        &self,
        mut expand: impl FnMut(&ValidData<I, V>) -> Vec<ValidData<I, W>>,
    ) -> DataStore<I, W>
    where
        W: Clone + Eq + core::hash::Hash + fmt::Debug,
    {
        let mut expanded = DataStore::with_capabilities(self.capabilities);
        for row in self.get_all() {
            for output in expand(row) {
                expanded.set(output);
            }
        }
        expanded
    }

    /// Folds over the rows in by-start order.
    pub fn fold<T>(&self, initial: T, accumulate: impl FnMut(T, &ValidData<I, V>) -> T) -> T {
        self.get_all().fold(initial, accumulate)
    }

    /// An immutable copy-on-write view of this store's current content.
    pub fn to_snapshot(&self) -> crate::Snapshot<I, V> {
        crate::Snapshot::from_store(self.clone())
    }

    /// The row keys intersecting `region`, ascending. Collected before any
    /// mutation so the mutators never iterate a map they are rewriting.
    fn candidate_keys(&self, region: &I) -> Vec<I::Start> {
        let mut keys: Vec<I::Start> = match &self.search {
            Some(tree) => tree.query(&region.to_bounds()),
            None => self.rows.keys().cloned().collect(),
        };
        keys.retain(|key| {
            self.rows
                .get(key)
                .is_some_and(|row| row.interval.overlaps(region))
        });
        keys
    }

    /// The update-or-remove core: every row intersecting `target` is deleted
    /// and its remainder pieces outside the intersection are re-inserted;
    /// `updated` decides what, if anything, becomes valid on the
    /// intersection. Returns the values whose rows changed.
    pub(crate) fn carve(
        &mut self,
        target: &I,
        mut updated: impl FnMut(&V) -> Option<V>,
    ) -> Vec<V> {
        let mut touched = Vec::new();
        for key in self.candidate_keys(target) {
            let Some(row) = self.remove_row(&key) else {
                continue;
            };
            let Some(cut) = row.interval.intersect(target) else {
                unreachable!("candidate rows intersect the target");
            };
            for piece in row.interval.remainders(&cut) {
                self.insert_row(ValidData::new(piece, row.value.clone()));
            }
            if let Some(new_value) = updated(&row.value) {
                push_unique(&mut touched, new_value.clone());
                self.insert_row(ValidData::new(cut, new_value));
            }
            push_unique(&mut touched, row.value);
        }
        touched
    }

    pub(crate) fn compress_values(&mut self, values: Vec<V>) {
        for value in values {
            self.compress(&value);
        }
        self.validate_disjoint();
    }

    /// Under `require_disjoint`, re-verifies the disjointness invariant at
    /// the end of every mutator.
    ///
    /// # Panics
    ///
    /// Panics when two rows overlap, which would mean a mutator broke the
    /// invariant.
    fn validate_disjoint(&self) {
        if !self.capabilities.require_disjoint {
            return;
        }
        let rows: Vec<&ValidData<I, V>> = self.rows.values().collect();
        for (position, left) in rows.iter().enumerate() {
            for right in &rows[position + 1..] {
                assert!(
                    !left.interval.overlaps(&right.interval),
                    "rows {left} and {right} overlap after a mutation"
                );
            }
        }
    }

    /// The value of the row fully containing `cell`, if any. Used by the zip
    /// operations, whose cells never straddle a row boundary.
    fn value_covering(&self, cell: &I) -> Option<&V> {
        self.get_intersecting(cell)
            .into_iter()
            .find(|row| row.interval.contains_interval(cell))
            .map(|row| &row.value)
    }

    fn zip_cells<W>(&self, other: &DataStore<I, W>) -> Vec<I>
    where
        W: Clone + Eq + core::hash::Hash + fmt::Debug,
    {
        let inputs: Vec<I> = self
            .rows
            .values()
            .map(|row| row.interval.clone())
            .chain(other.rows.values().map(|row| row.interval.clone()))
            .collect();
        I::atoms(&inputs)
    }

    pub(crate) fn insert_row(&mut self, data: ValidData<I, V>) {
        let key = data.start_key();
        if self.rows.contains_key(&key) {
            self.remove_row(&key);
        }
        if let Some(tree) = &mut self.search {
            tree.insert(key.clone(), data.interval.to_bounds());
        }
        self.by_value
            .entry(data.value.clone())
            .or_default()
            .insert(key.clone());
        self.rows.insert(key, data);
    }

    pub(crate) fn remove_row(&mut self, key: &I::Start) -> Option<ValidData<I, V>> {
        let data = self.rows.remove(key)?;
        if let Entry::Occupied(mut keys) = self.by_value.entry(data.value.clone()) {
            keys.get_mut().remove(key);
            if keys.get().is_empty() {
                keys.remove();
            }
        }
        if let Some(tree) = &mut self.search {
            tree.remove(key, &data.interval.to_bounds());
        }
        Some(data)
    }
}

impl<I, V> Default for DataStore<I, V>
where
    I: DimensionalInterval,
    V: Clone + Eq + core::hash::Hash + fmt::Debug,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<I, V> PartialEq for DataStore<I, V>
where
    I: DimensionalInterval,
    V: PartialEq,
{
    /// Physical row equality. Logically equal stores with different tilings
    /// compare unequal until both are put into canonical form with
    /// [`recompress_all`].
    ///
    /// [`recompress_all`]: DataStore::recompress_all
    fn eq(&self, other: &Self) -> bool {
        self.rows == other.rows
    }
}

impl<I, V> Eq for DataStore<I, V>
where
    I: DimensionalInterval,
    V: Eq,
{
}

/// Greedily merges adjacent same-shaped regions until a fixed point.
fn compress_regions<I: DimensionalInterval>(mut regions: Vec<I>) -> Vec<I> {
    loop {
        let mut merged_pair = None;
        'search: for (position, left) in regions.iter().enumerate() {
            for (offset, right) in regions[position + 1..].iter().enumerate() {
                if let Some(merged) = left.merge_adjacent(right) {
                    merged_pair = Some((position, position + 1 + offset, merged));
                    break 'search;
                }
            }
        }
        let Some((left, right, merged)) = merged_pair else {
            regions.sort_by(|lhs, rhs| lhs.start_key().cmp(&rhs.start_key()));
            return regions;
        };
        regions.remove(right);
        regions.remove(left);
        regions.push(merged);
    }
}

fn push_unique<V: PartialEq>(values: &mut Vec<V>, value: V) {
    if !values.contains(&value) {
        values.push(value);
    }
}
