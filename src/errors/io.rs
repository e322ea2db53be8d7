//! Errors raised while reading or writing external network formats.

/// Errors raised while reading or writing whitespace-separated edgelists.
#[derive(Debug, thiserror::Error)]
pub enum EdgelistError {
    /// The underlying reader or writer failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
    /// A line could not be parsed as an edge of the requested type.
    #[error("line {line} is not a valid edge: `{content}`")]
    Parse {
        /// One-based line number of the offending row.
        line: usize,
        /// The offending row, verbatim.
        content: String,
    },
    /// A delayed temporal row carried an effect time before its cause time.
    #[error("line {line}: {source}")]
    Edge {
        /// One-based line number of the offending row.
        line: usize,
        /// The underlying construction error.
        source: crate::errors::EdgeConstructionError,
    },
}

/// Errors raised while reading or writing HIF hypergraph documents.
///
/// Reader and writer failures surface through the JSON layer, so there is
/// no separate I/O variant.
#[derive(Debug, thiserror::Error)]
pub enum HifError {
    /// The document is not valid JSON, or the underlying reader or writer
    /// failed.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    /// A required field is absent.
    #[error("HIF document missing required `{0}` field")]
    MissingField(&'static str),
    /// The declared network type does not match the requested one.
    #[error("HIF network-type `{found}` does not match the expected `{expected}` hypergraph")]
    NetworkTypeMismatch {
        /// The network type the caller asked for.
        expected: &'static str,
        /// The network type declared in the document.
        found: String,
    },
    /// A node value does not match the vertex type of the network.
    #[error("HIF node must be of {expected} type, got `{found}`")]
    NodeTypeMismatch {
        /// The JSON type the vertex type requires.
        expected: &'static str,
        /// A rendering of the offending value.
        found: String,
    },
    /// An edge identifier is neither a string nor an integer.
    #[error("HIF incidence `edge` field must be a string or an integer")]
    InvalidEdgeId,
    /// An incidence of a directed hypergraph carries an unknown direction.
    #[error("invalid direction `{0}` in HIF incidence")]
    InvalidDirection(String),
    /// An incidence of a directed hypergraph is missing its direction.
    #[error("HIF incidence for a directed hypergraph is missing the `direction` field")]
    MissingDirection,
    /// An incidence of an undirected hypergraph carries a direction.
    #[error("HIF incidence for an undirected hypergraph cannot carry a `direction` field")]
    UnexpectedDirection,
}
