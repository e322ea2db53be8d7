//! Tests for the static hyperedge types.

use temporal_networks::impls::{DirectedHyperedge, UndirectedHyperedge};
use temporal_networks::traits::NetworkEdge;

// ============================================================================
// Canonicalisation
// ============================================================================

#[test]
fn test_directed_hyperedge_canonicalises_endpoints() {
    let edge = DirectedHyperedge::new([2, 1, 2], [4, 3, 4]);

    assert_eq!(edge.tails(), &[1, 2]);
    assert_eq!(edge.heads(), &[3, 4]);
    assert_eq!(edge, DirectedHyperedge::new([1, 2], [3, 4]));
}

#[test]
fn test_undirected_hyperedge_canonicalises_endpoints() {
    let edge = UndirectedHyperedge::new([3, 1, 3, 2]);

    assert_eq!(edge.incident_verts(), vec![1, 2, 3]);
    assert_eq!(edge, UndirectedHyperedge::new([1, 2, 3]));
}

// ============================================================================
// Vertex queries and incidence
// ============================================================================

#[test]
fn test_directed_hyperedge_vertex_queries() {
    let edge = DirectedHyperedge::new([1, 2], [2, 3]);

    assert_eq!(edge.mutator_verts(), vec![1, 2]);
    assert_eq!(edge.mutated_verts(), vec![2, 3]);
    assert_eq!(edge.incident_verts(), vec![1, 2, 3]);
    assert!(edge.is_out_incident(&1));
    assert!(!edge.is_out_incident(&3));
    assert!(edge.is_in_incident(&3));
    assert!(!edge.is_in_incident(&1));
    assert!(edge.is_incident(&2));
}

#[test]
fn test_undirected_hyperedge_vertex_queries() {
    let edge = UndirectedHyperedge::new([1, 2, 3]);

    assert_eq!(edge.mutator_verts(), vec![1, 2, 3]);
    assert_eq!(edge.mutated_verts(), vec![1, 2, 3]);
    assert!(edge.is_incident(&2));
    assert!(edge.is_in_incident(&2));
    assert!(edge.is_out_incident(&2));
    assert!(!edge.is_incident(&4));
}

// ============================================================================
// Adjacency
// ============================================================================

#[test]
fn test_directed_hyperedge_adjacency_is_head_tail_intersection() {
    let edge = DirectedHyperedge::new([1], [2, 3]);

    assert!(edge.adjacent(&DirectedHyperedge::new([3, 4], [5])));
    assert!(!edge.adjacent(&DirectedHyperedge::new([4, 5], [2])));
    assert!(!DirectedHyperedge::new([3, 4], [5]).adjacent(&edge));
}

#[test]
fn test_undirected_hyperedge_adjacency_is_intersection() {
    let edge = UndirectedHyperedge::new([1, 2]);

    assert!(edge.adjacent(&UndirectedHyperedge::new([2, 3])));
    assert!(!edge.adjacent(&UndirectedHyperedge::new([3, 4])));
}

// ============================================================================
// Orderings
// ============================================================================

#[test]
fn test_directed_hyperedge_orderings() {
    let a = DirectedHyperedge::new([1], [5]);
    let b = DirectedHyperedge::new([2], [3]);

    // Cause order compares tails first, effect order heads first.
    assert!(a < b);
    assert_eq!(a.effect_cmp(&b), core::cmp::Ordering::Greater);
}
