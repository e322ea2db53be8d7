//! Errors raised by graph algorithms when their domain requirements do not
//! hold.

/// An operation requiring a directed acyclic graph was called on a network
/// containing a cycle.
///
/// The `try_*` variants of the same operations return `None` instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("the operation requires an acyclic network, but the network contains a cycle")]
pub struct NotAcyclicError;

/// A two-colouring was requested on a network that is not bipartite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("the operation requires a bipartite network")]
pub struct NotBipartiteError;

/// A query that is undefined on networks without edges, such as the time
/// window of an empty temporal network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("the query is undefined on a network with no edges")]
pub struct EmptyNetworkError;
