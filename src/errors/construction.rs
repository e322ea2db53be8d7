//! Errors raised while constructing edges and networks.

/// Errors raised by edge constructors on inconsistent arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum EdgeConstructionError {
    /// A delayed temporal edge was given an effect time earlier than its
    /// cause time.
    #[error("the effect time of a delayed temporal edge cannot precede its cause time")]
    EffectBeforeCause,
}

/// The vertex type cannot label the number of distinct vertices a generator
/// was asked to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("the vertex type cannot label {required} distinct vertices")]
pub struct VertexTypeTooSmallError {
    /// Number of distinct vertex labels the caller requested.
    pub required: usize,
}
