//! Submodule providing readers and writers for external network formats:
//! whitespace-separated edgelists for dyadic networks and the HIF JSON
//! format for hypergraphs.

pub mod edgelist;
pub mod hif;

pub use edgelist::{EdgelistEdge, read_edgelist, read_edgelist_with_vertices, write_edgelist};
pub use hif::{
    HifVertex, read_directed_hif, read_undirected_hif, write_directed_hif, write_undirected_hif,
};
