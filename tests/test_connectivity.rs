//! Tests for connected and weakly connected component analysis.

use temporal_networks::impls::{
    Component, DirectedEdge, Network, UndirectedEdge, UndirectedHyperedge,
};
use temporal_networks::traits::Connectivity;

/// An undirected network with components `{0, 1, 2}`, `{3, 4}` and the
/// isolated vertex `5`.
fn three_components() -> Network<UndirectedEdge<i32>> {
    Network::new_with_vertices(
        [UndirectedEdge::new(0, 1), UndirectedEdge::new(1, 2), UndirectedEdge::new(3, 4)],
        [5],
    )
}

fn component(verts: impl IntoIterator<Item = i32>) -> Component<i32> {
    verts.into_iter().collect()
}

// ============================================================================
// Undirected networks
// ============================================================================

#[test]
fn test_connected_components_with_singletons() {
    let components = three_components().connected_components(true);

    assert_eq!(components.len(), 3);
    assert!(components.contains(&component([0, 1, 2])));
    assert!(components.contains(&component([3, 4])));
    assert!(components.contains(&component([5])));
}

#[test]
fn test_connected_components_without_singletons() {
    let components = three_components().connected_components(false);

    assert_eq!(components.len(), 2);
    assert!(!components.contains(&component([5])));
}

#[test]
fn test_connected_component_of_a_vertex() {
    let net = three_components();

    assert_eq!(net.connected_component(&0, 0), component([0, 1, 2]));
    assert_eq!(net.connected_component(&4, 0), component([3, 4]));
    assert_eq!(net.connected_component(&5, 0), component([5]));
}

#[test]
fn test_largest_connected_component() {
    assert_eq!(three_components().largest_connected_component(), component([0, 1, 2]));
    assert!(Network::<UndirectedEdge<i32>>::default().largest_connected_component().is_empty());
}

#[test]
fn test_is_connected() {
    assert!(!three_components().is_connected());
    assert!(Network::new([UndirectedEdge::new(0, 1), UndirectedEdge::new(1, 2)]).is_connected());
    assert!(Network::<UndirectedEdge<i32>>::default().is_connected());
}

#[test]
fn test_hyperedges_connect_all_their_vertices() {
    let net = Network::new([UndirectedHyperedge::new([1, 2, 3]), UndirectedHyperedge::new([4, 5])]);
    let components = net.connected_components(true);

    assert_eq!(components.len(), 2);
    assert!(components.contains(&component([1, 2, 3])));
}

// ============================================================================
// Directed networks, orientation ignored
// ============================================================================

#[test]
fn test_weakly_connected_components() {
    let net = Network::new([DirectedEdge::new(1, 2), DirectedEdge::new(3, 2)]);

    let components = net.weakly_connected_components(true);
    assert_eq!(components, vec![component([1, 2, 3])]);
    assert!(net.is_weakly_connected());
    assert_eq!(net.weakly_connected_component(&3, 0), component([1, 2, 3]));
    assert_eq!(net.largest_weakly_connected_component(), component([1, 2, 3]));
}

#[test]
fn test_weakly_disconnected_network() {
    let net = Network::new([DirectedEdge::new(1, 2), DirectedEdge::new(3, 4)]);

    assert_eq!(net.weakly_connected_components(true).len(), 2);
    assert!(!net.is_weakly_connected());
}
