//! Submodule providing the graph algorithms of the crate as extension
//! traits over [`Network`](crate::impls::Network), with blanket
//! implementations selected by the edge variant.

pub mod bfs;
pub mod bipartite;
pub mod connectivity;
pub mod degree_sequence;
pub mod reachability;
pub mod temporal;
pub mod topological_sort;

pub use bfs::{BreadthFirstSearch, TraversalDirection};
pub use bipartite::Bipartiteness;
pub use connectivity::Connectivity;
pub use degree_sequence::{DegreeSequences, is_digraphic, is_graphic};
pub use reachability::Reachability;
pub use temporal::{TemporalReachability, TimeWindows};
pub use topological_sort::TopologicalSort;
