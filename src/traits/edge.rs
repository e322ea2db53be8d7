//! Submodule defining the uniform trait surface of the edge algebra.

use core::cmp::Ordering;
use core::fmt::Debug;
use core::hash::Hash;

use crate::traits::Vertex;

/// Trait defining the operations every edge variant supports, static or
/// temporal, dyadic or hyper, directed or undirected.
///
/// The `Ord` supertrait is the *cause order* of the edge type: temporal
/// variants compare by cause time, then effect time, then mutator and
/// mutated vertices; static variants drop the time prefix. The dual *effect
/// order* is exposed by [`NetworkEdge::effect_cmp`].
pub trait NetworkEdge: Clone + Eq + Ord + Hash + Debug {
    /// Type used for labelling vertices.
    type VertexType: Vertex;

    /// Whether the edge variant is undirected.
    const UNDIRECTED: bool;

    /// Whether the edge variant acts at a single instant, i.e. its cause and
    /// effect times always coincide. Static variants are instantaneous.
    const INSTANTANEOUS: bool;

    /// Vertices that can initiate (cause) the effects of the relationship:
    /// the tails of a directed edge, every incident vertex of an undirected
    /// one. Sorted and deduplicated.
    fn mutator_verts(&self) -> Vec<Self::VertexType>;

    /// Vertices that can receive (be affected by) the effects of the
    /// relationship: the heads of a directed edge, every incident vertex of
    /// an undirected one. Sorted and deduplicated.
    fn mutated_verts(&self) -> Vec<Self::VertexType>;

    /// Sorted deduplicated union of the mutator and mutated vertices.
    fn incident_verts(&self) -> Vec<Self::VertexType>;

    /// Whether `vert` can initiate an effect through this edge.
    fn is_out_incident(&self, vert: &Self::VertexType) -> bool;

    /// Whether `vert` can receive an effect through this edge.
    fn is_in_incident(&self, vert: &Self::VertexType) -> bool;

    /// Whether `vert` participates in this edge at all.
    fn is_incident(&self, vert: &Self::VertexType) -> bool {
        self.is_out_incident(vert) || self.is_in_incident(vert)
    }

    /// Whether an effect transmitted through `self` can logically also be
    /// transmitted through `other`: the mutated vertices of `self` must
    /// intersect the mutator vertices of `other`, and for temporal variants
    /// the cause time of `other` must come strictly after `self` took
    /// effect. In particular no edge is adjacent to itself.
    fn adjacent(&self, other: &Self) -> bool;

    /// The *effect order* of the edge type: temporal variants compare by
    /// effect time, then cause time, then mutated and mutator vertices. For
    /// undirected and static-instantaneous variants this equals the cause
    /// order, which is the provided default.
    fn effect_cmp(&self, other: &Self) -> Ordering {
        self.cmp(other)
    }
}

/// Marker trait for the static (time-less) edge variants.
pub trait StaticEdge: NetworkEdge {}

/// Marker trait for the directed static edge variants, the domain of
/// topological ordering and in-/out-component analysis.
pub trait DirectedStaticEdge: StaticEdge {}

/// Marker trait for the undirected static edge variants, the domain of
/// connected-component analysis.
pub trait UndirectedStaticEdge: StaticEdge {}
