use axial_interval::Interval;
use axial_store::{DataStore, DiffAction, ValidData};
use pretty_assertions::assert_eq;

fn bounded(start: i32, end: i32) -> Interval<i32> {
    Interval::bounded(start, end).expect("ordered points")
}

fn store(rows: &[(Interval<i32>, &'static str)]) -> DataStore<Interval<i32>, &'static str> {
    DataStore::from_rows(rows.iter().copied()).expect("disjoint rows")
}

#[test]
fn a_trimmed_row_diffs_as_a_single_update() {
    let old = store(&[(Interval::at_most(4), "Hey"), (bounded(20, 25), "!")]);
    let new = store(&[(Interval::at_most(0), "Hey"), (bounded(20, 25), "!")]);

    let actions = new.diff_actions_from(&old);
    assert_eq!(
        actions,
        vec![DiffAction::Update(ValidData::new(
            Interval::at_most(0),
            "Hey"
        ))]
    );

    let mut patched = old.clone();
    patched.apply_diff_actions(actions);
    assert_eq!(patched, new);
}

#[test]
fn diffs_cover_creates_updates_and_deletes() {
    let old = store(&[
        (bounded(0, 4), "a"),
        (bounded(10, 14), "b"),
        (bounded(20, 24), "c"),
    ]);
    let new = store(&[
        (bounded(0, 4), "a"),
        (bounded(10, 14), "changed"),
        (bounded(30, 34), "d"),
    ]);

    let actions = new.diff_actions_from(&old);
    assert_eq!(
        actions,
        vec![
            DiffAction::Update(ValidData::new(bounded(10, 14), "changed")),
            DiffAction::Delete(*bounded(20, 24).start()),
            DiffAction::Create(ValidData::new(bounded(30, 34), "d")),
        ]
    );

    let mut patched = old.clone();
    patched.apply_diff_actions(actions);
    assert_eq!(patched, new);
}

#[test]
fn sync_round_trips_between_arbitrary_stores() {
    let mut source = DataStore::new();
    source.set_many([
        (Interval::at_most(4), "Hello"),
        (bounded(5, 15), "to"),
        (Interval::at_least(16), "World"),
    ]);

    let mut target = DataStore::new();
    target.set_many([(bounded(-10, 30), "something"), (bounded(50, 60), "else")]);

    target.sync_with(&source);
    assert_eq!(target, source);

    // Syncing the other way over an empty diff changes nothing.
    let before = target.clone();
    target.sync_with(&source);
    assert_eq!(target, before);
}

#[test]
fn applying_a_diff_twice_equals_applying_it_once() {
    let old = store(&[(bounded(0, 9), "a"), (bounded(20, 29), "b")]);
    let new = store(&[(bounded(0, 4), "a"), (bounded(25, 29), "b"), (bounded(40, 44), "c")]);

    let actions = new.diff_actions_from(&old);

    let mut once = old.clone();
    once.apply_diff_actions(actions.clone());
    let mut twice = once.clone();
    twice.apply_diff_actions(actions);

    assert_eq!(once, new);
    assert_eq!(twice, new);
}

#[test]
fn actions_no_longer_applicable_are_skipped() {
    let old = store(&[(bounded(0, 9), "a")]);
    let new = store(&[(bounded(0, 9), "changed")]);
    let actions = new.diff_actions_from(&old);

    // The base moved on: the row the update matched is gone.
    let mut diverged = store(&[(bounded(100, 109), "elsewhere")]);
    diverged.apply_diff_actions(actions);
    assert_eq!(diverged, store(&[(bounded(100, 109), "elsewhere")]));

    // A delete for a missing key is skipped too.
    let mut fresh: DataStore<Interval<i32>, &str> = DataStore::new();
    fresh.apply_diff_actions([DiffAction::Delete(*bounded(0, 9).start())]);
    assert!(fresh.is_empty());
}
