//! Tests for the closed-interval set.

use temporal_networks::impls::IntervalSet;

/// Checks the sorted-non-overlapping invariant of an integer interval set.
fn check_invariants(set: &IntervalSet<i64>) {
    let intervals: Vec<(i64, i64)> = set.iter().collect();
    for &(start, end) in &intervals {
        assert!(start <= end);
    }
    for pair in intervals.windows(2) {
        // Sorted, non-overlapping, non-touching.
        assert!(pair[0].1 + 1 < pair[1].0);
    }
}

// ============================================================================
// Insertion and merging
// ============================================================================

#[test]
fn test_insert_disjoint_intervals() {
    let mut set = IntervalSet::new();
    set.insert(5, 7);
    set.insert(1, 2);

    assert_eq!(set.iter().collect::<Vec<_>>(), vec![(1, 2), (5, 7)]);
    check_invariants(&set);
}

#[test]
fn test_insert_merges_overlapping_intervals() {
    let mut set = IntervalSet::new();
    set.insert(1, 3);
    set.insert(6, 8);
    set.insert(2, 7);

    assert_eq!(set.iter().collect::<Vec<_>>(), vec![(1, 8)]);
    check_invariants(&set);
}

#[test]
fn test_insert_merges_touching_integer_intervals() {
    let mut set = IntervalSet::new();
    set.insert(1, 2);
    set.insert(3, 4);

    assert_eq!(set.iter().collect::<Vec<_>>(), vec![(1, 4)]);
}

#[test]
fn test_insert_keeps_gapped_integer_intervals_apart() {
    let mut set = IntervalSet::new();
    set.insert(1, 2);
    set.insert(4, 5);

    assert_eq!(set.len(), 2);
    check_invariants(&set);
}

#[test]
fn test_float_intervals_merge_only_when_they_intersect() {
    let mut set = IntervalSet::new();
    set.insert(1.0, 2.0);
    set.insert(2.0, 3.0);
    assert_eq!(set.iter().collect::<Vec<_>>(), vec![(1.0, 3.0)]);

    let mut gapped = IntervalSet::new();
    gapped.insert(1.0, 2.0);
    gapped.insert(2.5, 3.0);
    assert_eq!(gapped.len(), 2);
}

#[test]
fn test_merge_produces_the_minimal_union() {
    let first: IntervalSet<i64> = [(1, 3), (10, 12)].into_iter().collect();
    let second: IntervalSet<i64> = [(4, 6), (11, 15)].into_iter().collect();

    let mut merged = first;
    merged.merge(&second);
    assert_eq!(merged.iter().collect::<Vec<_>>(), vec![(1, 6), (10, 15)]);
    check_invariants(&merged);
}

#[test]
fn test_merge_with_empty_set() {
    let mut set: IntervalSet<i64> = [(1, 3)].into_iter().collect();
    set.merge(&IntervalSet::new());
    assert_eq!(set.iter().collect::<Vec<_>>(), vec![(1, 3)]);

    let mut empty = IntervalSet::new();
    empty.merge(&set);
    assert_eq!(empty, set);
}

// ============================================================================
// Queries
// ============================================================================

#[test]
fn test_covers_is_closed_at_both_endpoints() {
    let set: IntervalSet<i64> = [(1, 3), (7, 9)].into_iter().collect();

    assert!(set.covers(1));
    assert!(set.covers(2));
    assert!(set.covers(3));
    assert!(!set.covers(0));
    assert!(!set.covers(5));
    assert!(set.covers(7));
    assert!(set.covers(9));
    assert!(!set.covers(10));
}

#[test]
fn test_cover_is_the_total_measure() {
    let set: IntervalSet<i64> = [(1, 4), (6, 8)].into_iter().collect();
    assert_eq!(set.cover(), 5);

    let floats: IntervalSet<f64> = [(0.5, 2.0), (3.0, 3.25)].into_iter().collect();
    assert!((floats.cover() - 1.75).abs() < 1e-12);
}

#[test]
fn test_instants_counts_integer_points() {
    let set: IntervalSet<i64> = [(1, 3), (7, 7)].into_iter().collect();
    assert_eq!(set.instants(), 4);

    let floats: IntervalSet<f64> = [(0.5, 2.5)].into_iter().collect();
    assert_eq!(floats.instants(), 2);
}

#[test]
fn test_empty_set() {
    let set: IntervalSet<i64> = IntervalSet::new();

    assert!(set.is_empty());
    assert_eq!(set.cover(), 0);
    assert!(!set.covers(0));
}
