//! Tests for two-colouring and bipartiteness.

use temporal_networks::errors::NotBipartiteError;
use temporal_networks::impls::{DirectedHyperedge, Network, UndirectedEdge, UndirectedHyperedge};
use temporal_networks::traits::{Bipartiteness, NetworkEdge};

// ============================================================================
// Bipartite networks
// ============================================================================

#[test]
fn test_path_is_bipartite() {
    let net = Network::new([
        UndirectedEdge::new(0, 1),
        UndirectedEdge::new(1, 2),
        UndirectedEdge::new(2, 3),
    ]);

    let (first, second) = net.two_colouring().unwrap();
    assert_eq!(first.len() + second.len(), 4);
    for edge in net.edges() {
        let verts = edge.incident_verts();
        assert_ne!(first.contains(&verts[0]), first.contains(&verts[1]));
    }
    assert!(net.is_bipartite());
}

#[test]
fn test_even_cycle_is_bipartite() {
    let net = Network::new([
        UndirectedEdge::new(0, 1),
        UndirectedEdge::new(1, 2),
        UndirectedEdge::new(2, 3),
        UndirectedEdge::new(3, 0),
    ]);

    assert!(net.is_bipartite());
}

#[test]
fn test_disconnected_components_are_coloured_independently() {
    let net = Network::new([UndirectedEdge::new(0, 1), UndirectedEdge::new(2, 3)]);

    let (first, second) = net.try_two_colouring().unwrap();
    assert_eq!(first.len(), 2);
    assert_eq!(second.len(), 2);
}

#[test]
fn test_dyadic_directed_hyperedges_can_be_bipartite() {
    let net = Network::new([
        DirectedHyperedge::new([1], [2]),
        DirectedHyperedge::new([3], [2]),
    ]);

    assert!(net.is_bipartite());
}

// ============================================================================
// Non-bipartite networks
// ============================================================================

#[test]
fn test_odd_cycle_is_not_bipartite() {
    let net = Network::new([
        UndirectedEdge::new(0, 1),
        UndirectedEdge::new(1, 2),
        UndirectedEdge::new(2, 0),
    ]);

    assert_eq!(net.try_two_colouring(), None);
    assert_eq!(net.two_colouring(), Err(NotBipartiteError));
    assert!(!net.is_bipartite());
}

#[test]
fn test_hyperedge_with_three_vertices_is_not_bipartite() {
    let net = Network::new([UndirectedHyperedge::new([1, 2, 3])]);
    assert!(!net.is_bipartite());
}

#[test]
fn test_singleton_hyperedge_is_not_bipartite() {
    let net = Network::new([UndirectedHyperedge::new([1])]);
    assert!(!net.is_bipartite());
}
