//! Submodule defining the temporal adjacency policy trait.

use crate::traits::TemporalEdge;

/// Trait defining a temporal adjacency policy: for an event transmitting an
/// effect to a vertex, how long does the effect linger there?
///
/// Two events `a` and `b` are adjacent under a policy when they are
/// statically adjacent, `b` starts strictly after `a` took effect, and the
/// gap `cause_time(b) - effect_time(a)` does not exceed the linger of `a` at
/// the shared vertex.
///
/// # Determinism
///
/// Implementations must be pure: two queries about the same `(event,
/// vertex)` pair must observe the same linger, within and across processes.
/// This is the invariant that makes temporal reachability well-defined and
/// the out-/in-cluster duality hold. Stochastic policies therefore derive
/// their draws from a seed and the queried pair, never from mutable
/// generator state.
pub trait TemporalAdjacency<E: TemporalEdge>: Clone {
    /// Duration for which the effect transmitted by event `event` lingers in
    /// the mutated vertex `vert` after `event.effect_time()`.
    fn linger(&self, event: &E, vert: &E::VertexType) -> E::TimeType;

    /// Whether the effect conceptually lingers forever, regardless of
    /// whether the time type can represent infinity.
    fn infinite_linger(&self, event: &E, vert: &E::VertexType) -> bool;

    /// An upper bound of `linger` over all possible events at `vert`, used
    /// to prune traversal frontiers.
    fn maximum_linger(&self, vert: &E::VertexType) -> E::TimeType;
}
