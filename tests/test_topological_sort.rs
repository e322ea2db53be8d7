//! Tests for Kahn's topological ordering.

use temporal_networks::errors::NotAcyclicError;
use temporal_networks::impls::{DirectedEdge, DirectedHyperedge, Network};
use temporal_networks::traits::{NetworkEdge, TopologicalSort};

/// Checks that every mutator vertex precedes every distinct mutated vertex.
fn check_soundness<E: temporal_networks::traits::DirectedStaticEdge>(
    net: &Network<E>,
    order: &[E::VertexType],
) {
    let position = |vert: &E::VertexType| {
        order.iter().position(|other| other == vert).expect("every vertex is ordered")
    };
    for edge in net.edges() {
        for mutator in edge.mutator_verts() {
            for mutated in edge.mutated_verts() {
                if mutator != mutated {
                    assert!(position(&mutator) < position(&mutated));
                }
            }
        }
    }
}

// ============================================================================
// Acyclic networks
// ============================================================================

#[test]
fn test_topological_order_on_acyclic_network() {
    let net = Network::new([
        DirectedEdge::new(1, 2),
        DirectedEdge::new(2, 3),
        DirectedEdge::new(3, 5),
        DirectedEdge::new(5, 6),
        DirectedEdge::new(5, 4),
    ]);

    let order = net.topological_order().unwrap();
    let mut sorted = order.clone();
    sorted.sort_unstable();
    assert_eq!(sorted, vec![1, 2, 3, 4, 5, 6]);
    check_soundness(&net, &order);
    assert!(net.is_acyclic());
}

#[test]
fn test_topological_order_with_isolated_vertices() {
    let net = Network::new_with_vertices([DirectedEdge::new(1, 2)], [9]);

    let order = net.try_topological_order().unwrap();
    assert_eq!(order.len(), 3);
    check_soundness(&net, &order);
}

#[test]
fn test_topological_order_on_hypernetwork() {
    let net = Network::new([
        DirectedHyperedge::new([1, 2], [3]),
        DirectedHyperedge::new([3], [4, 5]),
    ]);

    let order = net.topological_order().unwrap();
    check_soundness(&net, &order);
}

// ============================================================================
// Cyclic networks
// ============================================================================

#[test]
fn test_cyclic_network_has_no_topological_order() {
    let net = Network::new([
        DirectedEdge::new(1, 2),
        DirectedEdge::new(2, 3),
        DirectedEdge::new(3, 5),
        DirectedEdge::new(5, 6),
        DirectedEdge::new(5, 4),
        DirectedEdge::new(4, 2),
    ]);

    assert_eq!(net.try_topological_order(), None);
    assert_eq!(net.topological_order(), Err(NotAcyclicError));
    assert!(!net.is_acyclic());
}

#[test]
fn test_self_loop_is_a_cycle() {
    let net = Network::new([DirectedEdge::new(1, 1)]);
    assert!(!net.is_acyclic());
}
