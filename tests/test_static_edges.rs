//! Tests for the dyadic static edge types.

use temporal_networks::impls::{DirectedEdge, UndirectedEdge};
use temporal_networks::traits::NetworkEdge;

// ============================================================================
// Directed edges
// ============================================================================

#[test]
fn test_directed_edge_vertex_queries() {
    let edge = DirectedEdge::new(1, 2);

    assert_eq!(edge.mutator_verts(), vec![1]);
    assert_eq!(edge.mutated_verts(), vec![2]);
    assert_eq!(edge.incident_verts(), vec![1, 2]);
    assert_eq!(*edge.tail(), 1);
    assert_eq!(*edge.head(), 2);
}

#[test]
fn test_directed_edge_incidence() {
    let edge = DirectedEdge::new(1, 2);

    assert!(edge.is_out_incident(&1));
    assert!(!edge.is_out_incident(&2));
    assert!(edge.is_in_incident(&2));
    assert!(!edge.is_in_incident(&1));
    assert!(edge.is_incident(&1));
    assert!(edge.is_incident(&2));
    assert!(!edge.is_incident(&3));
}

#[test]
fn test_directed_edge_self_loop() {
    let edge = DirectedEdge::new(4, 4);

    assert_eq!(edge.incident_verts(), vec![4]);
    assert!(edge.is_out_incident(&4));
    assert!(edge.is_in_incident(&4));
}

#[test]
fn test_directed_edge_adjacency() {
    assert!(DirectedEdge::new(1, 2).adjacent(&DirectedEdge::new(2, 3)));
    assert!(DirectedEdge::new(1, 2).adjacent(&DirectedEdge::new(2, 1)));
    assert!(!DirectedEdge::new(1, 2).adjacent(&DirectedEdge::new(3, 4)));
    assert!(!DirectedEdge::new(1, 2).adjacent(&DirectedEdge::new(1, 3)));
}

#[test]
fn test_directed_edge_orderings() {
    let mut edges =
        vec![DirectedEdge::new(2, 1), DirectedEdge::new(1, 3), DirectedEdge::new(1, 2)];
    edges.sort();
    assert_eq!(
        edges,
        vec![DirectedEdge::new(1, 2), DirectedEdge::new(1, 3), DirectedEdge::new(2, 1)]
    );

    // The effect order compares heads before tails.
    edges.sort_by(|a, b| a.effect_cmp(b));
    assert_eq!(
        edges,
        vec![DirectedEdge::new(2, 1), DirectedEdge::new(1, 2), DirectedEdge::new(1, 3)]
    );
}

#[test]
fn test_directed_edge_display() {
    assert_eq!(DirectedEdge::new(1, 2).to_string(), "1 2");
}

// ============================================================================
// Undirected edges
// ============================================================================

#[test]
fn test_undirected_edge_is_canonical() {
    assert_eq!(UndirectedEdge::new(2, 1), UndirectedEdge::new(1, 2));
    assert_eq!(UndirectedEdge::new(2, 1).incident_verts(), vec![1, 2]);
}

#[test]
fn test_undirected_edge_vertex_queries() {
    let edge = UndirectedEdge::new(3, 1);

    assert_eq!(edge.mutator_verts(), vec![1, 3]);
    assert_eq!(edge.mutated_verts(), vec![1, 3]);
    assert_eq!(edge.incident_verts(), vec![1, 3]);
    assert!(edge.is_incident(&1));
    assert!(edge.is_in_incident(&3));
    assert!(edge.is_out_incident(&3));
    assert!(!edge.is_incident(&2));
}

#[test]
fn test_undirected_edge_self_loop() {
    let edge = UndirectedEdge::new(7, 7);

    assert_eq!(edge.incident_verts(), vec![7]);
    assert_eq!(edge.mutator_verts(), vec![7]);
}

#[test]
fn test_undirected_edge_adjacency() {
    assert!(UndirectedEdge::new(1, 2).adjacent(&UndirectedEdge::new(2, 3)));
    assert!(UndirectedEdge::new(1, 2).adjacent(&UndirectedEdge::new(1, 2)));
    assert!(!UndirectedEdge::new(1, 2).adjacent(&UndirectedEdge::new(3, 4)));
}

#[test]
fn test_undirected_edge_effect_order_equals_cause_order() {
    let a = UndirectedEdge::new(1, 2);
    let b = UndirectedEdge::new(1, 3);
    assert_eq!(a.effect_cmp(&b), a.cmp(&b));
}

#[test]
fn test_undirected_edge_display() {
    assert_eq!(UndirectedEdge::new(2, 1).to_string(), "1 2");
}
