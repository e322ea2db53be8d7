//! Submodule providing the concrete edge types, containers and temporal
//! adjacency policies of the crate.

pub mod components;
pub(crate) mod disjoint_set;
pub mod hyperloglog;
pub mod implicit_event_graph;
pub mod interval_set;
pub mod network;
pub mod static_edges;
pub mod static_hyperedges;
pub mod temporal_adjacency;
pub mod temporal_clusters;
pub mod temporal_edges;
pub mod temporal_hyperedges;

pub use components::{Accumulator, Component, ComponentSketch};
pub use hyperloglog::HyperLogLog;
pub use implicit_event_graph::ImplicitEventGraph;
pub use interval_set::IntervalSet;
pub use network::{
    DirectedDelayedTemporalHypernetwork, DirectedDelayedTemporalNetwork, DirectedHypernetwork,
    DirectedNetwork, DirectedTemporalHypernetwork, DirectedTemporalNetwork, Network,
    UndirectedHypernetwork, UndirectedNetwork, UndirectedTemporalHypernetwork,
    UndirectedTemporalNetwork,
};
pub use static_edges::{DirectedEdge, UndirectedEdge};
pub use static_hyperedges::{DirectedHyperedge, UndirectedHyperedge};
pub use temporal_adjacency::{Exponential, Geometric, LimitedWaitingTime, Simple};
pub use temporal_clusters::{
    TemporalCluster, TemporalClusterSize, TemporalClusterSizeEstimate, TemporalClusterSketch,
};
pub use temporal_edges::{DirectedDelayedTemporalEdge, DirectedTemporalEdge, UndirectedTemporalEdge};
pub use temporal_hyperedges::{
    DirectedDelayedTemporalHyperedge, DirectedTemporalHyperedge, UndirectedTemporalHyperedge,
};
