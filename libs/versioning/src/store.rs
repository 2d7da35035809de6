use core::fmt;
use std::collections::BTreeMap;

use axial_interval::{DimensionalInterval, DomainPoint, Interval};
use axial_store::{DataStore, ValidData};
use error_stack::{Report, ensure};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::{UNAPPROVED, VersionCarrier, VersionId, VersionOutOfRange, VersionsExhausted};

/// Which slice of the version timeline a public operation addresses.
///
/// Each variant resolves to a boundary version; the operation composes
/// `[boundary..+∞)` (for writes) or the boundary point (for reads) in front
/// of the user's region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VersionSelection {
    /// The session's current version.
    #[default]
    Current,
    /// The reserved unapproved partition.
    Unapproved,
    /// An explicit version.
    Specific(VersionId),
}

impl VersionSelection {
    const fn boundary(self, current: VersionId) -> VersionId {
        match self {
            Self::Current => current,
            Self::Unapproved => UNAPPROVED,
            Self::Specific(version) => version,
        }
    }
}

/// Bookkeeping for one version on the timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionInfo {
    pub timestamp: OffsetDateTime,
    pub comment: Option<String>,
}

impl VersionInfo {
    fn now(comment: Option<String>) -> Self {
        Self {
            timestamp: OffsetDateTime::now_utc(),
            comment,
        }
    }
}

/// A store whose rows carry a system-managed version axis in front of the
/// user's region.
///
/// Writes compose `[boundary..+∞)` onto the public region, so a change made
/// at version `v` stays valid for every later version until overwritten.
/// Reads pin the version axis at the selection's boundary. Data written
/// under [`VersionSelection::Unapproved`] parks at the reserved sentinel
/// version and becomes visible to current reads only through [`approve`] or
/// [`approve_all`].
///
/// [`approve`]: VersionedStore::approve
/// [`approve_all`]: VersionedStore::approve_all
#[derive(Debug, Clone, PartialEq)]
pub struct VersionedStore<P: VersionCarrier, V> {
    store: DataStore<P, V>,
    current_version: VersionId,
    initial_version: VersionId,
    version_log: BTreeMap<VersionId, VersionInfo>,
}

impl<P, V> VersionedStore<P, V>
where
    P: VersionCarrier,
    V: Clone + Eq + core::hash::Hash + fmt::Debug,
{
    /// An empty store starting its timeline at version zero.
    pub fn new() -> Self {
        Self::with_initial_version(0)
            .unwrap_or_else(|_| unreachable!("zero lies below the unapproved sentinel"))
    }

    /// An empty store starting its timeline at the given version.
    ///
    /// # Errors
    ///
    /// Returns [`VersionOutOfRange`] if `initial` is the unapproved sentinel
    /// or above it.
    pub fn with_initial_version(
        initial: VersionId,
    ) -> Result<Self, Report<VersionOutOfRange>> {
        ensure!(initial < UNAPPROVED, VersionOutOfRange);
        Ok(Self {
            store: DataStore::new(),
            current_version: initial,
            initial_version: initial,
            version_log: BTreeMap::from([(initial, VersionInfo::now(None))]),
        })
    }

    pub const fn current_version(&self) -> VersionId {
        self.current_version
    }

    pub const fn initial_version(&self) -> VersionId {
        self.initial_version
    }

    /// The recorded metadata of a version, if the version was ever current.
    pub fn version_info(&self, version: VersionId) -> Option<&VersionInfo> {
        self.version_log.get(&version)
    }

    /// The underlying store, version axis included.
    pub const fn as_store(&self) -> &DataStore<P, V> {
        &self.store
    }

    /// Moves the session to the given version.
    ///
    /// # Errors
    ///
    /// Returns [`VersionOutOfRange`] when `version` reaches the unapproved
    /// sentinel or lies below the initial version.
    pub fn set_current_version(
        &mut self,
        version: VersionId,
        comment: impl Into<Option<String>>,
    ) -> Result<(), Report<VersionOutOfRange>> {
        ensure!(version < UNAPPROVED, VersionOutOfRange);
        ensure!(version >= self.initial_version, VersionOutOfRange);
        self.current_version = version;
        self.version_log
            .insert(version, VersionInfo::now(comment.into()));
        Ok(())
    }

    /// Moves the session one version forward.
    ///
    /// # Errors
    ///
    /// Returns [`VersionsExhausted`] when the next version would collide
    /// with the unapproved sentinel.
    pub fn increment_current_version(
        &mut self,
        comment: impl Into<Option<String>>,
    ) -> Result<(), Report<VersionsExhausted>> {
        let next = self.current_version + 1;
        ensure!(next < UNAPPROVED, VersionsExhausted);
        self.current_version = next;
        self.version_log
            .insert(next, VersionInfo::now(comment.into()));
        Ok(())
    }

    /// The value valid at the public point under the selection.
    pub fn get_at(
        &self,
        point: &<P::Public as DimensionalInterval>::Point,
        selection: VersionSelection,
    ) -> Option<&V> {
        let boundary = selection.boundary(self.current_version);
        self.store
            .get_at(&P::compose_point(DomainPoint::At(boundary), point.clone()))
    }

    /// The public rows valid under the selection, compressed.
    ///
    /// Stripping the version axis frequently makes rows that were split
    /// along it adjacent, so the projection ends with a compression pass.
    pub fn snapshot_at(&self, selection: VersionSelection) -> DataStore<P::Public, V> {
        let boundary = DomainPoint::At(selection.boundary(self.current_version));
        let mut snapshot = DataStore::new();
        for row in self.store.get_all() {
            if row.interval.version_axis().contains_point(&boundary) {
                snapshot.set(ValidData::new(
                    row.interval.public_part(),
                    row.value.clone(),
                ));
            }
        }
        snapshot.compress_all();
        snapshot
    }

    /// The public rows valid under the selection, in by-start order.
    pub fn get_all(&self, selection: VersionSelection) -> Vec<ValidData<P::Public, V>> {
        self.snapshot_at(selection).get_all().cloned().collect()
    }

    /// The public rows intersecting `region` under the selection.
    pub fn get_intersecting(
        &self,
        region: &P::Public,
        selection: VersionSelection,
    ) -> Vec<ValidData<P::Public, V>> {
        self.snapshot_at(selection)
            .get_intersecting(region)
            .into_iter()
            .cloned()
            .collect()
    }

    /// Sets the value on the public region from the selection's boundary
    /// onward.
    #[tracing::instrument(level = "trace", skip_all)]
    pub fn set(&mut self, data: ValidData<P::Public, V>, selection: VersionSelection) {
        let boundary = selection.boundary(self.current_version);
        self.store.set(ValidData::new(
            P::compose(Interval::at_least(boundary), data.interval),
            data.value,
        ));
    }

    /// Updates existing validity on the public region from the selection's
    /// boundary onward.
    pub fn update(&mut self, data: ValidData<P::Public, V>, selection: VersionSelection) {
        let boundary = selection.boundary(self.current_version);
        self.store.update(ValidData::new(
            P::compose(Interval::at_least(boundary), data.interval),
            data.value,
        ));
    }

    /// Removes the public region from the selection's boundary onward. Rows
    /// that were valid before the boundary keep their past and end just
    /// below it.
    #[tracing::instrument(level = "trace", skip_all)]
    pub fn remove(&mut self, region: P::Public, selection: VersionSelection) {
        let boundary = selection.boundary(self.current_version);
        self.store
            .remove(&P::compose(Interval::at_least(boundary), region));
    }

    /// Fills uncovered parts of the public region from the selection's
    /// boundary onward.
    pub fn fill(&mut self, data: ValidData<P::Public, V>, selection: VersionSelection) {
        let boundary = selection.boundary(self.current_version);
        self.store.fill(ValidData::new(
            P::compose(Interval::at_least(boundary), data.interval),
            data.value,
        ));
    }

    /// Rewinds the timeline: every row's version range is truncated to end
    /// at `version`, rows left with no range are dropped, and the session
    /// moves to `version`.
    ///
    /// # Errors
    ///
    /// Returns [`VersionOutOfRange`] when `version` reaches the unapproved
    /// sentinel or lies below the initial version.
    #[tracing::instrument(level = "trace", skip_all)]
    pub fn reset_to_version(
        &mut self,
        version: VersionId,
    ) -> Result<(), Report<VersionOutOfRange>> {
        ensure!(version < UNAPPROVED, VersionOutOfRange);
        ensure!(version >= self.initial_version, VersionOutOfRange);
        self.store.remove(&P::compose(
            Interval::at_least(version + 1),
            P::Public::unbounded(),
        ));
        self.current_version = version;
        self.version_log.retain(|&logged, _| logged <= version);
        Ok(())
    }

    /// Collapses the timeline to a single version: only rows valid at the
    /// selection's boundary survive, rewritten to start at the initial
    /// version, and the session moves back to the initial version.
    #[tracing::instrument(level = "trace", skip_all)]
    pub fn collapse_version_history(&mut self, selection: VersionSelection) {
        let survivors = self.snapshot_at(selection);
        let mut collapsed = DataStore::new();
        for row in survivors.get_all() {
            collapsed.set(ValidData::new(
                P::compose(
                    Interval::at_least(self.initial_version),
                    row.interval.clone(),
                ),
                row.value.clone(),
            ));
        }
        self.store = collapsed;
        self.current_version = self.initial_version;
        let initial = self.initial_version;
        self.version_log.retain(|&logged, _| logged == initial);
    }

    /// Approves the single unapproved addition whose public interval and
    /// value equal the given row, rewriting it to start at the current
    /// version. Reports whether such a row was found.
    pub fn approve(&mut self, row: &ValidData<P::Public, V>) -> bool {
        let unapproved = DomainPoint::At(UNAPPROVED);
        let Some(found) = self.store.get_all().find(|candidate| {
            *candidate.interval.version_axis().start() == unapproved
                && candidate.interval.public_part() == row.interval
                && candidate.value == row.value
        }) else {
            return false;
        };
        let found = found.clone();
        self.store.remove(&found.interval);
        self.store.set(ValidData::new(
            P::compose(
                Interval::at_least(self.current_version),
                found.interval.public_part(),
            ),
            found.value,
        ));
        true
    }

    /// Approves every unapproved addition intersecting `region`, then makes
    /// every unapproved deletion within `region` effective at the current
    /// version.
    ///
    /// An unapproved deletion is a row whose version range ends just below
    /// the unapproved sentinel: its removal was parked the same way an
    /// addition is.
    #[tracing::instrument(level = "trace", skip_all)]
    pub fn approve_all(&mut self, region: &P::Public) {
        let unapproved_start = DomainPoint::At(UNAPPROVED);
        let additions: Vec<ValidData<P::Public, V>> = self
            .store
            .get_all()
            .filter(|row| {
                *row.interval.version_axis().start() == unapproved_start
                    && row.interval.public_part().overlaps(region)
            })
            .map(|row| ValidData::new(row.interval.public_part(), row.value.clone()))
            .collect();
        for addition in &additions {
            self.approve(addition);
        }

        let deletion_end = DomainPoint::At(UNAPPROVED - 1);
        let deletions: Vec<P::Public> = self
            .store
            .get_all()
            .filter(|row| *row.interval.version_axis().end() == deletion_end)
            .filter_map(|row| row.interval.public_part().intersect(region))
            .collect();
        for deletion in deletions {
            self.store.remove(&P::compose(
                Interval::at_least(self.current_version),
                deletion,
            ));
        }
    }
}

impl<P, V> Default for VersionedStore<P, V>
where
    P: VersionCarrier,
    V: Clone + Eq + core::hash::Hash + fmt::Debug,
{
    fn default() -> Self {
        Self::new()
    }
}
