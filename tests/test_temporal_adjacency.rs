//! Tests for the temporal adjacency policies.

use temporal_networks::impls::{
    DirectedTemporalEdge, Exponential, Geometric, LimitedWaitingTime, Simple,
    UndirectedTemporalEdge,
};
use temporal_networks::traits::TemporalAdjacency;

type IntEvent = DirectedTemporalEdge<i32, i64>;
type FloatEvent = UndirectedTemporalEdge<i32, f64>;

// ============================================================================
// Simple
// ============================================================================

#[test]
fn test_simple_lingers_forever() {
    let adj = Simple::new();
    let event = IntEvent::new(1, 2, 3);

    assert_eq!(TemporalAdjacency::<IntEvent>::linger(&adj, &event, &2), i64::MAX);
    assert!(TemporalAdjacency::<IntEvent>::infinite_linger(&adj, &event, &2));
    assert_eq!(TemporalAdjacency::<IntEvent>::maximum_linger(&adj, &2), i64::MAX);
}

#[test]
fn test_simple_linger_is_infinite_for_float_time() {
    let adj = Simple::new();
    let event = FloatEvent::new(1, 2, 3.0);

    assert_eq!(TemporalAdjacency::<FloatEvent>::linger(&adj, &event, &2), f64::INFINITY);
    assert!(TemporalAdjacency::<FloatEvent>::infinite_linger(&adj, &event, &2));
}

// ============================================================================
// Limited waiting time
// ============================================================================

#[test]
fn test_limited_waiting_time_lingers_for_dt() {
    let adj = LimitedWaitingTime::new(3i64);
    let event = IntEvent::new(1, 2, 0);

    assert_eq!(adj.dt(), 3);
    assert_eq!(TemporalAdjacency::<IntEvent>::linger(&adj, &event, &2), 3);
    assert!(!TemporalAdjacency::<IntEvent>::infinite_linger(&adj, &event, &2));
    assert_eq!(TemporalAdjacency::<IntEvent>::maximum_linger(&adj, &2), 3);
}

#[test]
fn test_limited_waiting_time_with_infinite_dt() {
    let adj = LimitedWaitingTime::new(f64::INFINITY);
    let event = FloatEvent::new(1, 2, 0.0);

    assert!(TemporalAdjacency::<FloatEvent>::infinite_linger(&adj, &event, &2));
}

// ============================================================================
// Exponential
// ============================================================================

#[test]
fn test_exponential_draws_are_deterministic() {
    let adj = Exponential::new(0.5, 42);
    let event = FloatEvent::new(1, 2, 0.0);

    let first = adj.linger(&event, &2);
    let second = adj.linger(&event, &2);
    assert_eq!(first, second);
    assert!(first.is_finite());
    assert!(first >= 0.0);

    let same_params = Exponential::new(0.5, 42);
    assert_eq!(same_params.linger(&event, &2), first);
}

#[test]
fn test_exponential_draws_depend_on_the_queried_pair() {
    let adj = Exponential::new(0.5, 42);
    let event = FloatEvent::new(1, 2, 0.0);
    let other = FloatEvent::new(1, 2, 1.0);

    assert_ne!(adj.linger(&event, &1), adj.linger(&event, &2));
    assert_ne!(adj.linger(&event, &2), adj.linger(&other, &2));
    assert!(!adj.infinite_linger(&event, &2));
    assert_eq!(TemporalAdjacency::<FloatEvent>::maximum_linger(&adj, &2), f64::INFINITY);
}

#[test]
fn test_exponential_draws_depend_on_the_seed() {
    let event = FloatEvent::new(1, 2, 0.0);

    let first = Exponential::new(0.5, 42).linger(&event, &2);
    let second = Exponential::new(0.5, 43).linger(&event, &2);
    assert_ne!(first, second);
}

// ============================================================================
// Geometric
// ============================================================================

#[test]
fn test_geometric_draws_are_deterministic() {
    let adj = Geometric::new(0.25, 42);
    let event = IntEvent::new(1, 2, 0);

    assert_eq!(adj.p(), 0.25);
    let first: i64 = adj.linger(&event, &2);
    assert_eq!(adj.linger(&event, &2), first);
    assert!(first >= 0);
    assert!(!adj.infinite_linger(&event, &2));
    assert_eq!(TemporalAdjacency::<IntEvent>::maximum_linger(&adj, &2), i64::MAX);
}
