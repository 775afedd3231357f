use std::collections::BTreeSet;

use proptest::prelude::*;
use sabi_tree::TreeSet;
use sabi_tree::tree_set;

/// The number of operations to perform in each proptest case.
const TEST_SIZE: usize = 10_000;

/// Generates random values in a range small enough to force collisions.
fn value_strategy() -> impl Strategy<Value = i64> {
    -20_000i64..20_000i64
}

// ─── Operations enum for driving randomized tests ────────────────────────────

#[derive(Debug, Clone)]
enum SetOp {
    Insert(i64),
    Remove(i64),
    Contains(i64),
    First,
    Last,
    PopFirst,
    PopLast,
}

fn set_op_strategy() -> impl Strategy<Value = SetOp> {
    prop_oneof![
        5 => value_strategy().prop_map(SetOp::Insert),
        3 => value_strategy().prop_map(SetOp::Remove),
        2 => value_strategy().prop_map(SetOp::Contains),
        1 => Just(SetOp::First),
        1 => Just(SetOp::Last),
        1 => Just(SetOp::PopFirst),
        1 => Just(SetOp::PopLast),
    ]
}

// ─── Core CRUD operations ────────────────────────────────────────────────────

proptest! {
    #![proptest_config(ProptestConfig::with_cases(20))]

    /// Replays a random sequence of operations on both TreeSet and BTreeSet
    /// and asserts identical results at every step.
    #[test]
    fn set_ops_match_btreeset(ops in proptest::collection::vec(set_op_strategy(), TEST_SIZE)) {
        let mut sb_set: TreeSet<i64> = TreeSet::new();
        let mut bt_set: BTreeSet<i64> = BTreeSet::new();

        for op in &ops {
            match op {
                SetOp::Insert(v) => {
                    let sb_result = sb_set.insert(*v);
                    let bt_result = bt_set.insert(*v);
                    prop_assert_eq!(sb_result, bt_result, "insert({})", v);
                }
                SetOp::Remove(v) => {
                    let sb_result = sb_set.remove(v);
                    let bt_result = bt_set.remove(v);
                    prop_assert_eq!(sb_result, bt_result, "remove({})", v);
                }
                SetOp::Contains(v) => {
                    let sb_result = sb_set.contains(v);
                    let bt_result = bt_set.contains(v);
                    prop_assert_eq!(sb_result, bt_result, "contains({})", v);
                }
                SetOp::First => {
                    let sb_result = sb_set.first();
                    let bt_result = bt_set.first();
                    prop_assert_eq!(sb_result, bt_result, "first");
                }
                SetOp::Last => {
                    let sb_result = sb_set.last();
                    let bt_result = bt_set.last();
                    prop_assert_eq!(sb_result, bt_result, "last");
                }
                SetOp::PopFirst => {
                    let sb_result = sb_set.pop_first();
                    let bt_result = bt_set.pop_first();
                    prop_assert_eq!(sb_result, bt_result, "pop_first");
                }
                SetOp::PopLast => {
                    let sb_result = sb_set.pop_last();
                    let bt_result = bt_set.pop_last();
                    prop_assert_eq!(sb_result, bt_result, "pop_last");
                }
            }
            prop_assert_eq!(sb_set.len(), bt_set.len(), "len mismatch after {:?}", op);
            prop_assert_eq!(sb_set.is_empty(), bt_set.is_empty(), "is_empty mismatch after {:?}", op);
        }
    }

    /// Tests that iteration order matches BTreeSet after random insertions.
    #[test]
    fn iter_matches_btreeset(values in proptest::collection::vec(value_strategy(), TEST_SIZE)) {
        let sb_set: TreeSet<i64> = values.iter().cloned().collect();
        let bt_set: BTreeSet<i64> = values.iter().cloned().collect();

        let sb_items: Vec<_> = sb_set.iter().copied().collect();
        let bt_items: Vec<_> = bt_set.iter().copied().collect();
        prop_assert_eq!(&sb_items, &bt_items, "iteration order mismatch");
    }

    /// Tests exact-size and double-ended behavior of the borrowing iterator.
    #[test]
    fn iter_size_and_double_ended(values in proptest::collection::vec(value_strategy(), 1..TEST_SIZE)) {
        let sb_set: TreeSet<i64> = values.iter().cloned().collect();
        let bt_set: BTreeSet<i64> = values.iter().cloned().collect();

        let mut sb_iter = sb_set.iter();
        let mut bt_iter = bt_set.iter();
        prop_assert_eq!(sb_iter.len(), bt_iter.len(), "initial len mismatch");

        let mut toggle = true;
        loop {
            let sb_item = if toggle { sb_iter.next() } else { sb_iter.next_back() };
            let bt_item = if toggle { bt_iter.next() } else { bt_iter.next_back() };
            prop_assert_eq!(sb_item, bt_item, "interleaved item mismatch");
            prop_assert_eq!(sb_iter.len(), bt_iter.len(), "len mismatch mid-iteration");
            prop_assert_eq!(sb_iter.size_hint(), (sb_iter.len(), Some(sb_iter.len())));
            if sb_item.is_none() {
                break;
            }
            toggle = !toggle;
        }
        prop_assert_eq!(sb_iter.len(), 0, "exhausted iterator should report len 0");
        prop_assert_eq!(sb_iter.next(), None, "exhausted iterator should stay exhausted");
    }

    /// Tests retain matches BTreeSet.
    #[test]
    fn retain_matches_btreeset(values in proptest::collection::vec(value_strategy(), TEST_SIZE)) {
        let mut sb_set: TreeSet<i64> = values.iter().cloned().collect();
        let mut bt_set: BTreeSet<i64> = values.iter().cloned().collect();

        sb_set.retain(|&v| v % 3 == 0);
        bt_set.retain(|&v| v % 3 == 0);

        let sb_items: Vec<_> = sb_set.iter().copied().collect();
        let bt_items: Vec<_> = bt_set.iter().copied().collect();
        prop_assert_eq!(&sb_items, &bt_items, "retain residual mismatch");
    }

    /// Tests remove_range against a BTreeSet model for every range shape.
    #[test]
    fn remove_range_matches_btreeset(
        values in proptest::collection::vec(value_strategy(), TEST_SIZE),
        lo in value_strategy(),
        hi in value_strategy(),
    ) {
        let (lo, hi) = if lo <= hi { (lo, hi) } else { (hi, lo) };

        // Inclusive range
        let mut sb_set: TreeSet<i64> = values.iter().cloned().collect();
        let mut bt_set: BTreeSet<i64> = values.iter().cloned().collect();
        let doomed: Vec<i64> = bt_set.range(lo..=hi).copied().collect();
        for v in &doomed {
            bt_set.remove(v);
        }
        let removed = sb_set.remove_range(lo..=hi);
        prop_assert_eq!(removed, doomed.len(), "remove_range({}..={}) count mismatch", lo, hi);
        let sb_items: Vec<_> = sb_set.iter().copied().collect();
        let bt_items: Vec<_> = bt_set.iter().copied().collect();
        prop_assert_eq!(&sb_items, &bt_items, "remove_range({}..={}) residual mismatch", lo, hi);

        // Exclusive end
        let mut sb_set: TreeSet<i64> = values.iter().cloned().collect();
        let mut bt_set: BTreeSet<i64> = values.iter().cloned().collect();
        let doomed: Vec<i64> = bt_set.range(lo..hi).copied().collect();
        for v in &doomed {
            bt_set.remove(v);
        }
        let removed = sb_set.remove_range(lo..hi);
        prop_assert_eq!(removed, doomed.len(), "remove_range({}..{}) count mismatch", lo, hi);
        let sb_items: Vec<_> = sb_set.iter().copied().collect();
        let bt_items: Vec<_> = bt_set.iter().copied().collect();
        prop_assert_eq!(&sb_items, &bt_items, "remove_range({}..{}) residual mismatch", lo, hi);

        // From start
        let mut sb_set: TreeSet<i64> = values.iter().cloned().collect();
        let mut bt_set: BTreeSet<i64> = values.iter().cloned().collect();
        let doomed: Vec<i64> = bt_set.range(lo..).copied().collect();
        for v in &doomed {
            bt_set.remove(v);
        }
        let removed = sb_set.remove_range(lo..);
        prop_assert_eq!(removed, doomed.len(), "remove_range({}..) count mismatch", lo);
        let sb_items: Vec<_> = sb_set.iter().copied().collect();
        let bt_items: Vec<_> = bt_set.iter().copied().collect();
        prop_assert_eq!(&sb_items, &bt_items, "remove_range({}..) residual mismatch", lo);

        // Up to end
        let mut sb_set: TreeSet<i64> = values.iter().cloned().collect();
        let mut bt_set: BTreeSet<i64> = values.iter().cloned().collect();
        let doomed: Vec<i64> = bt_set.range(..=hi).copied().collect();
        for v in &doomed {
            bt_set.remove(v);
        }
        let removed = sb_set.remove_range(..=hi);
        prop_assert_eq!(removed, doomed.len(), "remove_range(..={}) count mismatch", hi);
        let sb_items: Vec<_> = sb_set.iter().copied().collect();
        let bt_items: Vec<_> = bt_set.iter().copied().collect();
        prop_assert_eq!(&sb_items, &bt_items, "remove_range(..={}) residual mismatch", hi);
    }

    /// Tests clear empties the set.
    #[test]
    fn clear_empties_set(values in proptest::collection::vec(value_strategy(), TEST_SIZE)) {
        let mut sb_set: TreeSet<i64> = values.iter().cloned().collect();
        sb_set.clear();
        prop_assert!(sb_set.is_empty());
        prop_assert_eq!(sb_set.len(), 0);
        prop_assert_eq!(sb_set.iter().next(), None);
        prop_assert_eq!(sb_set.first(), None);
    }

    /// Tests get matches BTreeSet behavior.
    #[test]
    fn get_matches_btreeset(
        values in proptest::collection::vec(value_strategy(), TEST_SIZE),
        probes in proptest::collection::vec(value_strategy(), 1000),
    ) {
        let sb_set: TreeSet<i64> = values.iter().cloned().collect();
        let bt_set: BTreeSet<i64> = values.iter().cloned().collect();

        for p in &probes {
            let sb_result = sb_set.get(p);
            let bt_result = bt_set.get(p);
            prop_assert_eq!(sb_result, bt_result, "get({})", p);
        }
    }

    /// Tests take matches expected behavior.
    #[test]
    fn take_matches_expected(
        values in proptest::collection::vec(value_strategy(), TEST_SIZE),
        to_take in proptest::collection::vec(value_strategy(), TEST_SIZE / 5),
    ) {
        let mut sb_set: TreeSet<i64> = values.iter().cloned().collect();
        let mut bt_set: BTreeSet<i64> = values.iter().cloned().collect();

        for v in &to_take {
            let sb_result = sb_set.take(v);
            let bt_result = bt_set.take(v);
            prop_assert_eq!(sb_result, bt_result, "take({})", v);
        }

        prop_assert_eq!(sb_set.len(), bt_set.len());
        let sb_items: Vec<_> = sb_set.iter().copied().collect();
        let bt_items: Vec<_> = bt_set.iter().copied().collect();
        prop_assert_eq!(&sb_items, &bt_items, "take residual mismatch");
    }
}

// ─── Cursors ─────────────────────────────────────────────────────────────────

proptest! {
    #![proptest_config(ProptestConfig::with_cases(20))]

    /// Walks a cursor from the front and checks it visits what iter() visits.
    #[test]
    fn cursor_front_walk_matches_iter(values in proptest::collection::vec(value_strategy(), TEST_SIZE)) {
        let sb_set: TreeSet<i64> = values.iter().cloned().collect();

        let mut walked = Vec::new();
        let mut cursor = sb_set.cursor_front();
        while let Some(&v) = cursor.item() {
            walked.push(v);
            cursor.move_next();
        }
        // A cursor past the end stays past the end.
        cursor.move_next();
        prop_assert_eq!(cursor.item(), None, "end cursor should stay at the end");

        let iterated: Vec<_> = sb_set.iter().copied().collect();
        prop_assert_eq!(&walked, &iterated, "cursor front walk mismatch");
    }

    /// Walks a cursor from the back and checks it against reverse iteration.
    #[test]
    fn cursor_back_walk_matches_reverse_iter(values in proptest::collection::vec(value_strategy(), TEST_SIZE)) {
        let sb_set: TreeSet<i64> = values.iter().cloned().collect();

        let mut walked = Vec::new();
        let mut cursor = sb_set.cursor_back();
        while let Some(&v) = cursor.item() {
            walked.push(v);
            cursor.move_prev();
        }
        cursor.move_prev();
        prop_assert_eq!(cursor.item(), None, "end cursor should stay at the end");

        let reversed: Vec<_> = sb_set.iter().rev().copied().collect();
        prop_assert_eq!(&walked, &reversed, "cursor back walk mismatch");
    }

    /// Tests find_cursor agrees with get for hits and misses.
    #[test]
    fn find_cursor_matches_get(
        values in proptest::collection::vec(value_strategy(), TEST_SIZE),
        probes in proptest::collection::vec(value_strategy(), 1000),
    ) {
        let sb_set: TreeSet<i64> = values.iter().cloned().collect();

        for p in &probes {
            let cursor = sb_set.find_cursor(p);
            prop_assert_eq!(cursor.item(), sb_set.get(p), "find_cursor({}) mismatch", p);
        }
    }

    /// Tests cursor Clone and PartialEq positions.
    #[test]
    fn cursor_equality_and_clone(values in proptest::collection::vec(value_strategy(), 2..TEST_SIZE)) {
        let sb_set: TreeSet<i64> = values.iter().cloned().collect();

        let front = sb_set.cursor_front();
        let again = sb_set.cursor_front();
        prop_assert_eq!(&front, &again, "two front cursors should compare equal");

        let cloned = front.clone();
        prop_assert_eq!(&front, &cloned, "cloned cursor should compare equal");
        prop_assert_eq!(cloned.item(), front.item());

        if sb_set.len() >= 2 {
            let mut stepped = front.clone();
            stepped.move_next();
            prop_assert_ne!(&stepped, &front, "cursors at different positions should differ");
        }

        // All past-the-end cursors of one set compare equal.
        let mut walked_off = sb_set.cursor_back();
        walked_off.move_next();
        let missing = sb_set.find_cursor(&i64::MAX);
        prop_assert_eq!(walked_off.item(), None);
        prop_assert_eq!(&walked_off, &missing, "end cursors should compare equal");
    }

    /// Repeatedly removing the current item drains the whole set: the
    /// continuation only goes past the end once the set is empty.
    #[test]
    fn cursor_removal_drains_set(values in proptest::collection::vec(value_strategy(), 1..TEST_SIZE)) {
        let mut sb_set: TreeSet<i64> = values.iter().cloned().collect();
        let bt_set: BTreeSet<i64> = values.iter().cloned().collect();
        let expected_len = sb_set.len();

        let mut removed = Vec::new();
        let mut cursor = sb_set.cursor_front_mut();
        while let Some(v) = cursor.remove_current() {
            removed.push(v);
        }

        prop_assert!(sb_set.is_empty(), "draining by cursor should empty the set");
        prop_assert_eq!(removed.len(), expected_len, "drain count mismatch");

        removed.sort_unstable();
        let bt_items: Vec<_> = bt_set.iter().copied().collect();
        prop_assert_eq!(&removed, &bt_items, "drained items mismatch");
    }

    /// After a removal the cursor must sit on a live item (or past the end),
    /// and the rest of the set must be untouched.
    #[test]
    fn remove_current_lands_on_live_item(
        values in proptest::collection::vec(value_strategy(), 1..TEST_SIZE),
        probes in proptest::collection::vec(value_strategy(), TEST_SIZE / 10),
    ) {
        let mut sb_set: TreeSet<i64> = values.iter().cloned().collect();
        let mut bt_set: BTreeSet<i64> = values.iter().cloned().collect();

        for p in &probes {
            let landed = {
                let mut cursor = sb_set.find_cursor_mut(p);
                match cursor.remove_current() {
                    Some(v) => {
                        prop_assert_eq!(&v, p, "remove_current removed the wrong item");
                        prop_assert!(bt_set.remove(p), "remove_current removed a phantom item");
                        cursor.item().copied()
                    }
                    None => {
                        prop_assert!(!bt_set.contains(p), "remove_current missed a present item");
                        continue;
                    }
                }
            };
            if let Some(landed_value) = landed {
                prop_assert!(sb_set.contains(&landed_value), "cursor landed on a dead item");
            }
            prop_assert_eq!(sb_set.len(), bt_set.len(), "len mismatch after removal of {}", p);
        }

        let sb_items: Vec<_> = sb_set.iter().copied().collect();
        let bt_items: Vec<_> = bt_set.iter().copied().collect();
        prop_assert_eq!(&sb_items, &bt_items, "residual content mismatch");
    }
}

// ─── Trait implementations ───────────────────────────────────────────────────

proptest! {
    #![proptest_config(ProptestConfig::with_cases(20))]

    /// Tests FromIterator collects the same content as BTreeSet.
    #[test]
    fn from_iter_matches_btreeset(values in proptest::collection::vec(value_strategy(), TEST_SIZE)) {
        let sb_set: TreeSet<i64> = values.iter().cloned().collect();
        let bt_set: BTreeSet<i64> = values.iter().cloned().collect();

        let sb_items: Vec<_> = sb_set.iter().copied().collect();
        let bt_items: Vec<_> = bt_set.iter().copied().collect();
        prop_assert_eq!(&sb_items, &bt_items, "from_iter content mismatch");
    }

    /// Tests Extend matches BTreeSet.
    #[test]
    fn extend_matches_btreeset(
        initial in proptest::collection::vec(value_strategy(), TEST_SIZE / 2),
        extra in proptest::collection::vec(value_strategy(), TEST_SIZE / 2),
    ) {
        let mut sb_set: TreeSet<i64> = initial.iter().cloned().collect();
        let mut bt_set: BTreeSet<i64> = initial.iter().cloned().collect();

        sb_set.extend(extra.iter().cloned());
        bt_set.extend(extra.iter().cloned());

        let sb_items: Vec<_> = sb_set.iter().copied().collect();
        let bt_items: Vec<_> = bt_set.iter().copied().collect();
        prop_assert_eq!(&sb_items, &bt_items, "extend content mismatch");
    }

    /// Tests Clone produces an equal, independent set.
    #[test]
    fn clone_produces_equal_set(values in proptest::collection::vec(value_strategy(), TEST_SIZE)) {
        let sb_set: TreeSet<i64> = values.iter().cloned().collect();
        let mut cloned = sb_set.clone();

        prop_assert_eq!(&sb_set, &cloned, "clone should compare equal");

        cloned.insert(i64::MAX);
        prop_assert_eq!(cloned.len(), sb_set.len() + 1);
        prop_assert!(!sb_set.contains(&i64::MAX));
    }

    /// Tests PartialEq matches BTreeSet's notion of equality.
    #[test]
    fn eq_matches_btreeset(
        a in proptest::collection::vec(value_strategy(), TEST_SIZE / 10),
        b in proptest::collection::vec(value_strategy(), TEST_SIZE / 10),
    ) {
        let sb_a: TreeSet<i64> = a.iter().cloned().collect();
        let sb_b: TreeSet<i64> = b.iter().cloned().collect();
        let bt_a: BTreeSet<i64> = a.iter().cloned().collect();
        let bt_b: BTreeSet<i64> = b.iter().cloned().collect();

        prop_assert_eq!(sb_a == sb_b, bt_a == bt_b, "eq mismatch");
    }

    /// Tests Ord agrees with BTreeSet's lexicographic order.
    #[test]
    fn ord_matches_btreeset(
        a in proptest::collection::vec(value_strategy(), TEST_SIZE / 10),
        b in proptest::collection::vec(value_strategy(), TEST_SIZE / 10),
    ) {
        let sb_a: TreeSet<i64> = a.iter().cloned().collect();
        let sb_b: TreeSet<i64> = b.iter().cloned().collect();
        let bt_a: BTreeSet<i64> = a.iter().cloned().collect();
        let bt_b: BTreeSet<i64> = b.iter().cloned().collect();

        prop_assert_eq!(sb_a.cmp(&sb_b), bt_a.cmp(&bt_b), "ord mismatch");
        prop_assert_eq!(sb_a.partial_cmp(&sb_b), bt_a.partial_cmp(&bt_b), "partial_ord mismatch");
    }

    /// Tests Hash consistency for equal sets.
    #[test]
    fn hash_consistent_for_equal_sets(values in proptest::collection::vec(value_strategy(), TEST_SIZE)) {
        use std::hash::{DefaultHasher, Hash, Hasher};

        let sb_set1: TreeSet<i64> = values.iter().cloned().collect();
        let sb_set2: TreeSet<i64> = values.iter().cloned().collect();

        let mut h1 = DefaultHasher::new();
        let mut h2 = DefaultHasher::new();
        sb_set1.hash(&mut h1);
        sb_set2.hash(&mut h2);

        prop_assert_eq!(h1.finish(), h2.finish(), "equal sets should have equal hashes");

        // A reverse-built set has a different shape but the same content.
        let sb_set3: TreeSet<i64> = values.iter().rev().cloned().collect();
        let mut h3 = DefaultHasher::new();
        sb_set3.hash(&mut h3);
        prop_assert_eq!(&sb_set1, &sb_set3, "reverse-built set should be equal");
        prop_assert_eq!(h1.finish(), h3.finish(), "differently shaped equal sets should hash alike");
    }
}

// ─── remove_range edge cases (empty ranges, gap boundaries, tuple bounds) ────

use core::ops::Bound;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(20))]

    /// Tests remove_range with explicit tuple bounds against the model.
    #[test]
    fn remove_range_tuple_bounds_match_btreeset(
        values in proptest::collection::vec(value_strategy(), TEST_SIZE),
        lo in value_strategy(),
        hi in value_strategy(),
    ) {
        let (lo, hi) = if lo <= hi { (lo, hi) } else { (hi, lo) };

        let bound_pairs = [
            (Bound::Included(lo), Bound::Included(hi)),
            (Bound::Included(lo), Bound::Excluded(hi)),
            (Bound::Excluded(lo), Bound::Included(hi)),
            (Bound::Unbounded, Bound::Included(hi)),
            (Bound::Excluded(lo), Bound::Unbounded),
        ];

        for bounds in bound_pairs {
            if matches!(bounds, (Bound::Excluded(a), Bound::Included(b) | Bound::Excluded(b)) if a == b) {
                continue;
            }
            let mut sb_set: TreeSet<i64> = values.iter().cloned().collect();
            let mut bt_set: BTreeSet<i64> = values.iter().cloned().collect();

            let doomed: Vec<i64> = bt_set.range(bounds).copied().collect();
            for v in &doomed {
                bt_set.remove(v);
            }

            let removed = sb_set.remove_range(bounds);
            prop_assert_eq!(removed, doomed.len(), "remove_range({:?}) count mismatch", bounds);

            let sb_items: Vec<_> = sb_set.iter().copied().collect();
            let bt_items: Vec<_> = bt_set.iter().copied().collect();
            prop_assert_eq!(&sb_items, &bt_items, "remove_range({:?}) residual mismatch", bounds);
        }
    }

    /// remove_range(v..v) removes nothing.
    #[test]
    fn remove_range_empty_at_value(
        values in proptest::collection::vec(value_strategy(), TEST_SIZE),
        value in value_strategy(),
    ) {
        let mut sb_set: TreeSet<i64> = values.iter().cloned().collect();
        let before = sb_set.len();

        prop_assert_eq!(sb_set.remove_range(value..value), 0, "remove_range(v..v) must remove nothing");
        prop_assert_eq!(sb_set.len(), before);
    }

    /// remove_range(..) removes everything.
    #[test]
    fn remove_range_unbounded_removes_everything(values in proptest::collection::vec(value_strategy(), TEST_SIZE)) {
        let mut sb_set: TreeSet<i64> = values.iter().cloned().collect();
        let before = sb_set.len();

        prop_assert_eq!(sb_set.remove_range(..), before, "remove_range(..) must remove every item");
        prop_assert!(sb_set.is_empty());
    }

    /// An excluded start bound must not remove the item it names.
    #[test]
    fn remove_range_excluded_start_skips_stored_value(values in proptest::collection::vec(value_strategy(), 1..TEST_SIZE)) {
        let mut sb_set: TreeSet<i64> = values.iter().cloned().collect();
        let &pivot = sb_set.first().expect("non-empty set");
        let distinct = sb_set.len();

        let removed = sb_set.remove_range((Bound::Excluded(pivot), Bound::Unbounded));
        prop_assert_eq!(sb_set.len(), 1, "everything above the pivot should be gone");
        prop_assert_eq!(removed + 1, distinct);
        prop_assert_eq!(sb_set.get(&pivot), Some(&pivot), "the excluded item must survive");
    }
}

// ─── Invalid range bounds panic tests ────────────────────────────────────────

#[test]
#[should_panic]
fn remove_range_start_greater_than_end_panics() {
    let mut set: TreeSet<i32> = (0..10).collect();
    let _ = set.remove_range(5..1);
}

#[test]
#[should_panic]
fn remove_range_excluded_excluded_same_bound_panics() {
    let mut set: TreeSet<i32> = (0..10).collect();
    let _ = set.remove_range((Bound::Excluded(3), Bound::Excluded(3)));
}

#[test]
#[should_panic]
fn remove_range_excluded_included_inverted_panics() {
    let mut set: TreeSet<i32> = (0..10).collect();
    let _ = set.remove_range((Bound::Excluded(5), Bound::Included(1)));
}

// ─── Consuming iterator interleaved tests ────────────────────────────────────

proptest! {
    #![proptest_config(ProptestConfig::with_cases(20))]

    /// Tests into_iter with interleaved next/next_back matches BTreeSet.
    #[test]
    fn into_iter_interleaved_next_next_back(values in proptest::collection::vec(value_strategy(), 1..TEST_SIZE)) {
        let sb_set: TreeSet<i64> = values.iter().cloned().collect();
        let bt_set: BTreeSet<i64> = values.iter().cloned().collect();

        let mut sb_iter = sb_set.into_iter();
        let mut bt_iter = bt_set.into_iter();

        let mut sb_items = Vec::new();

        let mut toggle = true;
        loop {
            let sb_item = if toggle { sb_iter.next() } else { sb_iter.next_back() };
            let bt_item = if toggle { bt_iter.next() } else { bt_iter.next_back() };
            prop_assert_eq!(sb_item, bt_item, "into_iter interleaved mismatch");
            match sb_item {
                Some(v) => sb_items.push(v),
                None => break,
            }
            toggle = !toggle;
        }

        // Verify no duplicates
        let mut sorted = sb_items.clone();
        sorted.sort_unstable();
        let dedup_len = sorted.len();
        sorted.dedup();
        prop_assert_eq!(sorted.len(), dedup_len, "into_iter yielded duplicate items");
    }
}

// ─── Deterministic Insertion Pattern Tests ───────────────────────────────────

/// Helper function to generate deterministic pseudo-random values using LCG.
fn random_values_deterministic(n: usize) -> Vec<i64> {
    let mut values = Vec::with_capacity(n);
    let mut x: u64 = 12345; // Fixed seed for reproducibility
    for _ in 0..n {
        x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
        values.push((x >> 33) as i64);
    }
    values
}

mod insertion_pattern_tests {
    use super::*;

    // Sequential patterns degenerate the tree into a chain, so every insert
    // or lookup costs O(n); keep n modest to bound the quadratic work.
    const N: usize = 2_000;

    /// Tests ordered (ascending) inserts match BTreeSet.
    #[test]
    fn ordered_inserts_match_btreeset() {
        let mut sb_set: TreeSet<i64> = TreeSet::new();
        let mut bt_set: BTreeSet<i64> = BTreeSet::new();

        for i in 0..N as i64 {
            assert!(sb_set.insert(i));
            bt_set.insert(i);
        }

        assert_eq!(sb_set.len(), N);
        assert_eq!(sb_set.len(), bt_set.len());

        let sb_items: Vec<_> = sb_set.iter().copied().collect();
        let bt_items: Vec<_> = bt_set.iter().copied().collect();
        assert_eq!(sb_items, bt_items, "ordered inserts content mismatch");

        assert_eq!(sb_set.first(), bt_set.first());
        assert_eq!(sb_set.last(), bt_set.last());
    }

    /// Tests reverse-ordered (descending) inserts match BTreeSet.
    #[test]
    fn reverse_ordered_inserts_match_btreeset() {
        let mut sb_set: TreeSet<i64> = TreeSet::new();
        let mut bt_set: BTreeSet<i64> = BTreeSet::new();

        for i in (0..N as i64).rev() {
            assert!(sb_set.insert(i));
            bt_set.insert(i);
        }

        assert_eq!(sb_set.len(), N);
        assert_eq!(sb_set.len(), bt_set.len());

        let sb_items: Vec<_> = sb_set.iter().copied().collect();
        let bt_items: Vec<_> = bt_set.iter().copied().collect();
        assert_eq!(sb_items, bt_items, "reverse ordered inserts content mismatch");

        assert_eq!(sb_set.first(), bt_set.first());
        assert_eq!(sb_set.last(), bt_set.last());
    }

    /// Tests random inserts match BTreeSet.
    #[test]
    fn random_inserts_match_btreeset() {
        let values = random_values_deterministic(N);
        let mut sb_set: TreeSet<i64> = TreeSet::new();
        let mut bt_set: BTreeSet<i64> = BTreeSet::new();

        for &v in &values {
            let sb_inserted = sb_set.insert(v);
            let bt_inserted = bt_set.insert(v);
            assert_eq!(sb_inserted, bt_inserted, "insert({}) mismatch", v);
        }

        assert_eq!(sb_set.len(), bt_set.len());

        let sb_items: Vec<_> = sb_set.iter().copied().collect();
        let bt_items: Vec<_> = bt_set.iter().copied().collect();
        assert_eq!(sb_items, bt_items, "random inserts content mismatch");
    }

    /// Tests ordered contains checks against an ascending-built set.
    #[test]
    fn ordered_contains_match_btreeset() {
        let sb_set: TreeSet<i64> = (0..N as i64).collect();
        let bt_set: BTreeSet<i64> = (0..N as i64).collect();

        for i in 0..N as i64 {
            assert_eq!(sb_set.contains(&i), bt_set.contains(&i), "contains({}) mismatch", i);
        }
        for i in [N as i64, N as i64 + 1, -1, -100] {
            assert_eq!(sb_set.contains(&i), bt_set.contains(&i), "missing contains({}) mismatch", i);
        }
    }

    /// Tests contains against a descending-built (left-degenerate) set.
    #[test]
    fn reverse_ordered_contains_match_btreeset() {
        let sb_set: TreeSet<i64> = (0..N as i64).rev().collect();
        let bt_set: BTreeSet<i64> = (0..N as i64).rev().collect();

        for i in (0..N as i64).rev() {
            assert_eq!(sb_set.contains(&i), bt_set.contains(&i), "reverse contains({}) mismatch", i);
        }
    }

    /// Tests contains with randomly built sets.
    #[test]
    fn random_contains_match_btreeset() {
        let values = random_values_deterministic(N);
        let sb_set: TreeSet<i64> = values.iter().copied().collect();
        let bt_set: BTreeSet<i64> = values.iter().copied().collect();

        for v in &values {
            assert_eq!(sb_set.contains(v), bt_set.contains(v), "random contains({}) mismatch", v);
        }
    }

    /// Tests ordered removes match BTreeSet.
    #[test]
    fn ordered_removes_match_btreeset() {
        let mut sb_set: TreeSet<i64> = (0..N as i64).collect();
        let mut bt_set: BTreeSet<i64> = (0..N as i64).collect();

        for i in 0..N as i64 {
            assert_eq!(sb_set.remove(&i), bt_set.remove(&i), "ordered remove({}) mismatch", i);
            assert_eq!(sb_set.len(), bt_set.len());
        }
        assert!(sb_set.is_empty());
    }

    /// Tests reverse-ordered removes match BTreeSet.
    #[test]
    fn reverse_ordered_removes_match_btreeset() {
        let mut sb_set: TreeSet<i64> = (0..N as i64).collect();
        let mut bt_set: BTreeSet<i64> = (0..N as i64).collect();

        for i in (0..N as i64).rev() {
            assert_eq!(sb_set.remove(&i), bt_set.remove(&i), "reverse remove({}) mismatch", i);
            assert_eq!(sb_set.len(), bt_set.len());
        }
        assert!(sb_set.is_empty());
    }

    /// Tests random removes match BTreeSet.
    #[test]
    fn random_removes_match_btreeset() {
        let values = random_values_deterministic(N);
        let mut sb_set: TreeSet<i64> = values.iter().copied().collect();
        let mut bt_set: BTreeSet<i64> = values.iter().copied().collect();

        for v in &values {
            assert_eq!(sb_set.remove(v), bt_set.remove(v), "random remove({}) mismatch", v);
            assert_eq!(sb_set.len(), bt_set.len());
        }
        assert!(sb_set.is_empty());
    }

    /// Tests ordered insert followed by ordered remove.
    #[test]
    fn ordered_insert_then_ordered_remove() {
        let mut sb_set: TreeSet<i64> = TreeSet::new();
        let mut bt_set: BTreeSet<i64> = BTreeSet::new();

        for i in 0..N as i64 {
            sb_set.insert(i);
            bt_set.insert(i);
        }

        // Remove the even items, keep the odd ones.
        for i in (0..N as i64).filter(|i| i % 2 == 0) {
            assert_eq!(sb_set.remove(&i), bt_set.remove(&i));
        }

        let sb_items: Vec<_> = sb_set.iter().copied().collect();
        let bt_items: Vec<_> = bt_set.iter().copied().collect();
        assert_eq!(sb_items, bt_items, "partial removal content mismatch");
    }

    /// Tests random insert followed by random remove.
    #[test]
    fn random_insert_then_random_remove() {
        let values = random_values_deterministic(N);
        let mut sb_set: TreeSet<i64> = TreeSet::new();
        let mut bt_set: BTreeSet<i64> = BTreeSet::new();

        for &v in &values {
            sb_set.insert(v);
            bt_set.insert(v);
        }

        // Remove every other item in generation order.
        for v in values.iter().step_by(2) {
            assert_eq!(sb_set.remove(v), bt_set.remove(v), "random remove({}) mismatch", v);
        }

        let sb_items: Vec<_> = sb_set.iter().copied().collect();
        let bt_items: Vec<_> = bt_set.iter().copied().collect();
        assert_eq!(sb_items, bt_items, "random partial removal content mismatch");
    }
}

// ─── Coverage-focused top-down tests ─────────────────────────────────────────

#[test]
#[allow(clippy::double_ended_iterator_last)]
fn capacity_default_from_array_extend_refs_and_iter_traits() {
    let set: TreeSet<i32> = TreeSet::with_capacity(16);
    assert!(set.is_empty());
    assert_eq!(set.capacity(), 16);

    let default_set: TreeSet<i32> = Default::default();
    assert!(default_set.is_empty());
    let _ = format!("{:?}", default_set);

    let from_arr = TreeSet::from([3, 1, 2]);
    let items: Vec<_> = from_arr.iter().copied().collect();
    assert_eq!(items, vec![1, 2, 3]);

    let data = [4, 5, 6];
    let mut extend_set = TreeSet::new();
    extend_set.extend(data.iter());
    assert!(extend_set.contains(&4));
    assert!(extend_set.contains(&6));

    {
        let iter = extend_set.iter();
        assert_eq!(iter.len(), 3);
        assert_eq!(iter.clone().last(), Some(&6));
        let _ = format!("{:?}", iter.clone());
        let collected: Vec<_> = (&extend_set).into_iter().copied().collect();
        assert_eq!(collected, vec![4, 5, 6]);
    }

    let empty_iter: tree_set::Iter<'_, i32> = Default::default();
    assert_eq!(empty_iter.len(), 0);
    let _ = format!("{:?}", empty_iter.clone());

    let empty_into_iter: tree_set::IntoIter<i32> = Default::default();
    let _ = format!("{:?}", empty_into_iter);

    let mut consuming = TreeSet::from([2, 1]).into_iter();
    assert_eq!(consuming.len(), 2);
    assert_eq!(consuming.next(), Some(1));
    assert_eq!(consuming.next_back(), Some(2));
    assert_eq!(consuming.next(), None);
}

#[test]
fn first_last_take_and_pop_paths() {
    let mut set = TreeSet::from([5, 1, 9]);

    assert_eq!(set.first(), Some(&1));
    assert_eq!(set.last(), Some(&9));

    assert_eq!(set.take(&5), Some(5));
    assert_eq!(set.take(&5), None);

    assert_eq!(set.pop_first(), Some(1));
    assert_eq!(set.pop_last(), Some(9));
    assert_eq!(set.pop_first(), None);
    assert_eq!(set.pop_last(), None);
    assert!(set.is_empty());
    assert_eq!(set.first(), None);
    assert_eq!(set.last(), None);
}

#[test]
fn cursor_edge_cases_and_debug() {
    let mut set = TreeSet::from([2, 1, 3]);

    let cursor = set.find_cursor(&2);
    assert_eq!(cursor.item(), Some(&2));
    let _ = format!("{:?}", cursor);
    let cloned = cursor.clone();
    assert_eq!(cloned, cursor);

    let missing = set.find_cursor(&99);
    assert_eq!(missing.item(), None);

    {
        let mut cursor_mut = set.cursor_front_mut();
        let _ = format!("{:?}", cursor_mut);
        assert_eq!(cursor_mut.item(), Some(&1));
        cursor_mut.move_next();
        // 2 sits at the root with two children; the cursor lands on the
        // in-order successor after the removal.
        assert_eq!(cursor_mut.remove_current(), Some(2));
        assert_eq!(cursor_mut.item(), Some(&3));
        cursor_mut.move_prev();
        assert_eq!(cursor_mut.item(), Some(&1));
        assert_eq!(cursor_mut.remove_current(), Some(1));
        assert_eq!(cursor_mut.item(), Some(&3));
        assert_eq!(cursor_mut.remove_current(), Some(3));
        assert_eq!(cursor_mut.item(), None);
        assert_eq!(cursor_mut.remove_current(), None);
    }
    assert!(set.is_empty());

    let empty: TreeSet<i32> = TreeSet::new();
    assert_eq!(empty.cursor_front().item(), None);
    assert_eq!(empty.cursor_back().item(), None);
    assert_eq!(empty.find_cursor(&0).item(), None);
}

#[test]
fn back_cursor_removes_the_largest_item() {
    let mut set = TreeSet::from([2, 1, 3]);

    let mut cursor = set.cursor_back_mut();
    assert_eq!(cursor.item(), Some(&3));
    assert_eq!(cursor.remove_current(), Some(3));
    // The removed leaf hung to the right, so the cursor falls back to its
    // parent, the new largest item.
    assert_eq!(cursor.item(), Some(&2));
    cursor.move_prev();
    assert_eq!(cursor.item(), Some(&1));

    assert_eq!(set.len(), 2);
    assert!(!set.contains(&3));
}
