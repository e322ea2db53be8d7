//! Tests for the HyperLogLog sketch and the estimated component
//! containers.

use temporal_networks::impls::{Component, ComponentSketch, HyperLogLog};

// ============================================================================
// Sketch estimates
// ============================================================================

#[test]
fn test_empty_sketch_estimates_zero() {
    let sketch: HyperLogLog<u64> = HyperLogLog::new(0);
    assert_eq!(sketch.estimate(), 0.0);
}

#[test]
fn test_estimate_tracks_distinct_insertions() {
    let mut sketch: HyperLogLog<u64> = HyperLogLog::new(0);
    for element in 0..1000u64 {
        sketch.insert(&element);
    }

    let estimate = sketch.estimate();
    assert!((estimate / 1000.0 - 1.0).abs() < 0.05);
}

#[test]
fn test_duplicate_insertions_do_not_change_the_estimate() {
    let mut sketch: HyperLogLog<u64> = HyperLogLog::new(0);
    for element in 0..100u64 {
        sketch.insert(&element);
    }
    let before = sketch.estimate();

    for element in 0..100u64 {
        sketch.insert(&element);
    }
    assert_eq!(sketch.estimate(), before);
}

#[test]
fn test_merge_estimates_the_union() {
    let mut first: HyperLogLog<u64> = HyperLogLog::new(7);
    let mut second: HyperLogLog<u64> = HyperLogLog::new(7);
    for element in 0..500u64 {
        first.insert(&element);
    }
    for element in 250..750u64 {
        second.insert(&element);
    }

    let mut forward = first.clone();
    forward.merge(&second);
    let mut backward = second.clone();
    backward.merge(&first);

    // Merging is commutative and estimates the union.
    assert_eq!(forward.estimate(), backward.estimate());
    assert!((forward.estimate() / 750.0 - 1.0).abs() < 0.05);
    assert!(forward.estimate() >= first.estimate().max(second.estimate()));
}

#[test]
fn test_relative_error_is_below_one_percent() {
    assert!(HyperLogLog::<u64>::relative_error() < 0.01);
}

// ============================================================================
// Component sketches
// ============================================================================

#[test]
fn test_component_sketch_tracks_the_exact_component() {
    let mut component = Component::new();
    let mut sketch = ComponentSketch::new(13);
    for vert in 0..500i64 {
        component.insert(vert);
        sketch.insert(&vert);
    }

    let exact = component.len() as f64;
    assert!((sketch.size_estimate() / exact - 1.0).abs() < 0.05);
}

#[test]
fn test_component_sketch_merge() {
    let mut first = ComponentSketch::new(3);
    let mut second = ComponentSketch::new(3);
    for vert in 0..200i64 {
        first.insert(&vert);
    }
    for vert in 100..300i64 {
        second.insert(&vert);
    }

    first.merge(&second);
    assert!((first.size_estimate() / 300.0 - 1.0).abs() < 0.1);
}
