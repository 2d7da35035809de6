use axial_interval::{DomainPoint, Interval};
use axial_store::DataStore;
use pretty_assertions::assert_eq;

fn bounded(start: i32, end: i32) -> Interval<i32> {
    Interval::bounded(start, end).expect("ordered points")
}

#[test]
fn snapshot_mutators_leave_the_original_untouched() {
    let mut store = DataStore::new();
    store.set((bounded(0, 9), "base"));
    let snapshot = store.to_snapshot();

    let with_more = snapshot.set((bounded(20, 29), "more"));
    let with_less = snapshot.remove(&bounded(0, 4));

    assert_eq!(snapshot.get_all().count(), 1);
    assert_eq!(with_more.get_all().count(), 2);
    assert_eq!(with_less.get_at(&DomainPoint::At(2)), None);
    assert_eq!(snapshot.get_at(&DomainPoint::At(2)), Some(&"base"));
}

#[test]
fn snapshot_round_trips_through_the_mutable_store() {
    let mut store = DataStore::new();
    store.set_many([(Interval::at_most(4), "Hello"), (bounded(5, 15), "to")]);

    let round_tripped = store.to_snapshot().to_mutable();
    assert_eq!(round_tripped, store);
}

#[test]
fn setting_then_removing_a_disjoint_region_is_identity() {
    let mut store = DataStore::new();
    store.set_many([(bounded(0, 9), "a"), (bounded(30, 39), "b")]);
    let snapshot = store.to_snapshot();

    let region = bounded(50, 69);
    let modified = snapshot.set((region, "transient")).remove(&region);
    assert_eq!(modified, snapshot);
}

#[test]
fn conflicting_set_yields_none() {
    let snapshot = DataStore::new().to_snapshot();
    let first = snapshot
        .set_if_no_conflict((bounded(0, 9), "first"))
        .expect("the store is empty");
    assert!(first.set_if_no_conflict((bounded(5, 9), "second")).is_none());
}
