use std::collections::BTreeSet;

use axial_interval::{DomainPoint, Interval};
use axial_store::MultiValueStore;
use pretty_assertions::assert_eq;

fn bounded(start: i32, end: i32) -> Interval<i32> {
    Interval::bounded(start, end).expect("ordered points")
}

fn members(values: &[&'static str]) -> BTreeSet<&'static str> {
    values.iter().copied().collect()
}

fn rows(
    store: &MultiValueStore<Interval<i32>, &'static str>,
) -> Vec<(Interval<i32>, BTreeSet<&'static str>)> {
    store
        .get_all()
        .map(|row| (row.interval, row.value.clone()))
        .collect()
}

#[test]
fn add_one_extends_membership_across_the_region() {
    let mut store = MultiValueStore::new();
    store.add_one(bounded(0, 9), "a");
    assert_eq!(rows(&store), vec![(bounded(0, 9), members(&["a"]))]);

    store.add_one(bounded(5, 14), "b");
    assert_eq!(
        rows(&store),
        vec![
            (bounded(0, 4), members(&["a"])),
            (bounded(5, 9), members(&["a", "b"])),
            (bounded(10, 14), members(&["b"])),
        ]
    );

    // Already a member everywhere: nothing changes.
    store.add_one(bounded(5, 9), "a");
    assert_eq!(
        rows(&store),
        vec![
            (bounded(0, 4), members(&["a"])),
            (bounded(5, 9), members(&["a", "b"])),
            (bounded(10, 14), members(&["b"])),
        ]
    );
}

#[test]
fn remove_one_drops_emptied_rows() {
    let mut store = MultiValueStore::new();
    store.add_one(bounded(0, 9), "a");
    store.add_one(bounded(5, 14), "b");

    store.remove_one(&bounded(0, 14), &"a");
    assert_eq!(rows(&store), vec![(bounded(5, 14), members(&["b"]))]);

    store.remove_one(&bounded(8, 10), &"b");
    assert_eq!(
        rows(&store),
        vec![
            (bounded(5, 7), members(&["b"])),
            (bounded(11, 14), members(&["b"])),
        ]
    );
}

#[test]
fn removing_one_member_keeps_the_rest() {
    let mut store = MultiValueStore::new();
    store.add_one(bounded(0, 9), "a");
    store.add_one(bounded(0, 9), "b");

    store.remove_one(&bounded(3, 6), &"a");
    assert_eq!(
        rows(&store),
        vec![
            (bounded(0, 2), members(&["a", "b"])),
            (bounded(3, 6), members(&["b"])),
            (bounded(7, 9), members(&["a", "b"])),
        ]
    );
    assert_eq!(store.get_at(&DomainPoint::At(4)), Some(&members(&["b"])));
}

#[test]
fn merge_one_unions_membership() {
    let mut left = MultiValueStore::new();
    left.add_one(bounded(0, 9), "a");

    let mut right = MultiValueStore::new();
    right.add_one(bounded(5, 14), "b");
    right.add_one(bounded(0, 4), "a");

    left.merge_one(&right);
    assert_eq!(
        rows(&left),
        vec![
            (bounded(0, 4), members(&["a"])),
            (bounded(5, 9), members(&["a", "b"])),
            (bounded(10, 14), members(&["b"])),
        ]
    );
}
