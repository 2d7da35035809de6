use axial_interval::{DomainPoint, Interval};
use axial_store::ValidData;
use axial_versioning::{UNAPPROVED, VersionId, VersionSelection, VersionedStore};
use pretty_assertions::assert_eq;

type Timeline = (Interval<VersionId>, Interval<i32>);

fn bounded(start: i32, end: i32) -> Interval<i32> {
    Interval::bounded(start, end).expect("ordered points")
}

fn rows(
    store: &VersionedStore<Timeline, &'static str>,
    selection: VersionSelection,
) -> Vec<(Interval<i32>, &'static str)> {
    store
        .get_all(selection)
        .into_iter()
        .map(|row| (row.interval, row.value))
        .collect()
}

#[test]
fn unapproved_data_is_invisible_until_approved() {
    let mut store: VersionedStore<Timeline, &str> = VersionedStore::new();
    store
        .increment_current_version("first".to_owned())
        .expect("room below the sentinel");
    store
        .increment_current_version("second".to_owned())
        .expect("room below the sentinel");
    assert_eq!(store.current_version(), 2);

    store.set(
        ValidData::new(bounded(5, 15), "to"),
        VersionSelection::Unapproved,
    );

    assert_eq!(rows(&store, VersionSelection::Current), vec![]);
    assert_eq!(
        rows(&store, VersionSelection::Unapproved),
        vec![(bounded(5, 15), "to")]
    );
    assert_eq!(
        store.get_at(&DomainPoint::At(10), VersionSelection::Current),
        None
    );

    assert!(store.approve(&ValidData::new(bounded(5, 15), "to")));
    assert_eq!(
        rows(&store, VersionSelection::Current),
        vec![(bounded(5, 15), "to")]
    );
    assert_eq!(
        store.get_at(&DomainPoint::At(10), VersionSelection::Current),
        Some(&"to")
    );

    // The past did not change: version 1 never saw the row.
    assert_eq!(rows(&store, VersionSelection::Specific(1)), vec![]);

    // Approving again finds nothing.
    assert!(!store.approve(&ValidData::new(bounded(5, 15), "to")));
}

#[test]
fn writes_at_the_current_version_preserve_history() {
    let mut store: VersionedStore<Timeline, &str> = VersionedStore::new();
    store.set(ValidData::new(bounded(0, 9), "old"), VersionSelection::Current);

    store
        .increment_current_version("revise".to_owned())
        .expect("room below the sentinel");
    store.set(ValidData::new(bounded(5, 14), "new"), VersionSelection::Current);

    assert_eq!(
        rows(&store, VersionSelection::Specific(0)),
        vec![(bounded(0, 9), "old")]
    );
    assert_eq!(
        rows(&store, VersionSelection::Current),
        vec![(bounded(0, 4), "old"), (bounded(5, 14), "new")]
    );
}

#[test]
fn version_counters_are_range_checked() {
    let mut store: VersionedStore<Timeline, &str> =
        VersionedStore::with_initial_version(5).expect("below the sentinel");

    assert!(store.set_current_version(4, None).is_err());
    assert!(store.set_current_version(UNAPPROVED, None).is_err());
    assert!(store.set_current_version(7, None).is_ok());
    assert_eq!(store.current_version(), 7);
    assert!(store.version_info(7).is_some());

    assert!(
        VersionedStore::<Timeline, &str>::with_initial_version(UNAPPROVED).is_err()
    );

    let mut near_the_end: VersionedStore<Timeline, &str> =
        VersionedStore::with_initial_version(UNAPPROVED - 2).expect("below the sentinel");
    assert!(near_the_end.increment_current_version(None).is_ok());
    assert!(near_the_end.increment_current_version(None).is_err());
}

#[test]
fn reset_drops_versions_above_the_target() {
    let mut store: VersionedStore<Timeline, &str> = VersionedStore::new();
    store.set(ValidData::new(bounded(0, 9), "kept"), VersionSelection::Current);

    store
        .increment_current_version("doomed".to_owned())
        .expect("room below the sentinel");
    store.set(
        ValidData::new(bounded(20, 29), "discarded"),
        VersionSelection::Current,
    );
    store.set(
        ValidData::new(bounded(40, 49), "parked"),
        VersionSelection::Unapproved,
    );

    store.reset_to_version(0).expect("zero is on the timeline");
    assert_eq!(store.current_version(), 0);
    assert_eq!(rows(&store, VersionSelection::Current), vec![(bounded(0, 9), "kept")]);
    // The truncated timeline ends at the target: nothing is parked anymore.
    assert_eq!(rows(&store, VersionSelection::Unapproved), vec![]);
    assert!(store.version_info(1).is_none());
}

#[test]
fn collapse_rewrites_survivors_to_the_initial_version() {
    let mut store: VersionedStore<Timeline, &str> = VersionedStore::new();
    store.set(ValidData::new(bounded(0, 9), "a"), VersionSelection::Current);
    store
        .increment_current_version(None)
        .expect("room below the sentinel");
    store.set(ValidData::new(bounded(5, 14), "b"), VersionSelection::Current);

    store.collapse_version_history(VersionSelection::Current);
    assert_eq!(store.current_version(), store.initial_version());
    assert_eq!(
        rows(&store, VersionSelection::Current),
        vec![(bounded(0, 4), "a"), (bounded(5, 14), "b")]
    );
    // The pre-collapse history is gone: version 0 sees the collapsed state.
    assert_eq!(
        rows(&store, VersionSelection::Specific(0)),
        vec![(bounded(0, 4), "a"), (bounded(5, 14), "b")]
    );
}

#[test]
fn approve_all_promotes_additions_and_deletions() {
    let mut store: VersionedStore<Timeline, &str> = VersionedStore::new();
    store.set(ValidData::new(bounded(0, 9), "kept"), VersionSelection::Current);
    store.set(ValidData::new(bounded(20, 29), "gone"), VersionSelection::Current);
    store
        .increment_current_version(None)
        .expect("room below the sentinel");

    // Park an addition and a deletion.
    store.set(
        ValidData::new(bounded(40, 49), "added"),
        VersionSelection::Unapproved,
    );
    store.remove(bounded(20, 29), VersionSelection::Unapproved);

    assert_eq!(
        rows(&store, VersionSelection::Current),
        vec![(bounded(0, 9), "kept"), (bounded(20, 29), "gone")]
    );

    store.approve_all(&Interval::unbounded());

    assert_eq!(
        rows(&store, VersionSelection::Current),
        vec![(bounded(0, 9), "kept"), (bounded(40, 49), "added")]
    );
    // The deletion's history survives below the current version.
    assert_eq!(
        rows(&store, VersionSelection::Specific(0)),
        vec![(bounded(0, 9), "kept"), (bounded(20, 29), "gone")]
    );
}

#[test]
fn planar_regions_version_the_same_way() {
    type PlanarTimeline = (Interval<VersionId>, Interval<i32>, Interval<i32>);

    let mut store: VersionedStore<PlanarTimeline, &str> = VersionedStore::new();
    store.set(
        ValidData::new((bounded(0, 9), bounded(0, 9)), "area"),
        VersionSelection::Current,
    );
    store
        .increment_current_version(None)
        .expect("room below the sentinel");
    store.remove((bounded(0, 9), bounded(5, 9)), VersionSelection::Current);

    assert_eq!(
        store.get_all(VersionSelection::Specific(0)),
        vec![ValidData::new((bounded(0, 9), bounded(0, 9)), "area")]
    );
    assert_eq!(
        store.get_all(VersionSelection::Current),
        vec![ValidData::new((bounded(0, 9), bounded(0, 4)), "area")]
    );
}
