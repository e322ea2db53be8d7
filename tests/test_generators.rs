//! Tests for the deterministic graph generators.

use temporal_networks::errors::VertexTypeTooSmallError;
use temporal_networks::generators::{
    complete_directed_graph, complete_graph, cycle_graph, path_graph,
};
use temporal_networks::traits::{Bipartiteness, Connectivity};

#[test]
fn test_path_graph() {
    let net = path_graph::<u16>(5).unwrap();

    assert_eq!(net.vertices().len(), 5);
    assert_eq!(net.edges().len(), 4);
    assert_eq!(net.degree(&0), 1);
    assert_eq!(net.degree(&2), 2);
    assert!(net.is_connected());
    assert!(net.is_bipartite());
}

#[test]
fn test_cycle_graph() {
    let net = cycle_graph::<u16>(5).unwrap();

    assert_eq!(net.edges().len(), 5);
    for vert in net.vertices() {
        assert_eq!(net.degree(vert), 2);
    }
    assert!(!net.is_bipartite());
    assert!(cycle_graph::<u16>(6).unwrap().is_bipartite());
}

#[test]
fn test_complete_graph() {
    let net = complete_graph::<u16>(5).unwrap();

    assert_eq!(net.edges().len(), 10);
    for vert in net.vertices() {
        assert_eq!(net.degree(vert), 4);
    }
}

#[test]
fn test_complete_directed_graph() {
    let net = complete_directed_graph::<u16>(4).unwrap();

    assert_eq!(net.edges().len(), 12);
    for vert in net.vertices() {
        assert_eq!(net.in_degree(vert), 3);
        assert_eq!(net.out_degree(vert), 3);
    }
}

#[test]
fn test_empty_and_singleton_graphs() {
    assert!(path_graph::<u16>(0).unwrap().vertices().is_empty());
    assert_eq!(path_graph::<u16>(1).unwrap().vertices(), &[0]);
    assert!(path_graph::<u16>(1).unwrap().edges().is_empty());
}

#[test]
fn test_vertex_type_too_small() {
    assert_eq!(path_graph::<u8>(300), Err(VertexTypeTooSmallError { required: 300 }));
    assert!(path_graph::<u8>(256).is_ok());
    assert!(path_graph::<u8>(257).is_err());
}
