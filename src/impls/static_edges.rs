//! Submodule providing the dyadic static edge types.

use core::fmt::{self, Display};

use crate::traits::{DirectedStaticEdge, NetworkEdge, StaticEdge, UndirectedStaticEdge, Vertex};

/// A directed edge (or link): an asymmetric relation between two vertices,
/// represented as an arrow from the tail vertex to the head vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DirectedEdge<V: Vertex> {
    tail: V,
    head: V,
}

impl<V: Vertex> DirectedEdge<V> {
    /// Creates a directed edge from `tail`, often the initiator of the
    /// relation, to `head`, often the receiving end of the effect.
    pub fn new(tail: V, head: V) -> Self {
        Self { tail, head }
    }

    /// Returns the vertex at the tail of the arrow.
    pub fn tail(&self) -> &V {
        &self.tail
    }

    /// Returns the vertex at the head of the arrow.
    pub fn head(&self) -> &V {
        &self.head
    }
}

impl<V: Vertex> NetworkEdge for DirectedEdge<V> {
    type VertexType = V;

    const UNDIRECTED: bool = false;
    const INSTANTANEOUS: bool = true;

    fn mutator_verts(&self) -> Vec<V> {
        vec![self.tail.clone()]
    }

    fn mutated_verts(&self) -> Vec<V> {
        vec![self.head.clone()]
    }

    fn incident_verts(&self) -> Vec<V> {
        if self.tail == self.head {
            vec![self.tail.clone()]
        } else if self.tail < self.head {
            vec![self.tail.clone(), self.head.clone()]
        } else {
            vec![self.head.clone(), self.tail.clone()]
        }
    }

    fn is_out_incident(&self, vert: &V) -> bool {
        self.tail == *vert
    }

    fn is_in_incident(&self, vert: &V) -> bool {
        self.head == *vert
    }

    fn adjacent(&self, other: &Self) -> bool {
        self.head == other.tail
    }

    fn effect_cmp(&self, other: &Self) -> core::cmp::Ordering {
        (&self.head, &self.tail).cmp(&(&other.head, &other.tail))
    }
}

impl<V: Vertex> StaticEdge for DirectedEdge<V> {}
impl<V: Vertex> DirectedStaticEdge for DirectedEdge<V> {}

impl<V: Vertex + Display> Display for DirectedEdge<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.tail, self.head)
    }
}

/// An undirected edge (or link): a symmetric relation between two vertices.
///
/// The endpoints are stored in canonical (sorted) order, so two edges over
/// the same vertex pair compare and hash equal regardless of the argument
/// order at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UndirectedEdge<V: Vertex> {
    v1: V,
    v2: V,
}

impl<V: Vertex> UndirectedEdge<V> {
    /// Creates an undirected edge; the order of the endpoints is arbitrary.
    pub fn new(v1: V, v2: V) -> Self {
        if v2 < v1 { Self { v1: v2, v2: v1 } } else { Self { v1, v2 } }
    }
}

impl<V: Vertex> NetworkEdge for UndirectedEdge<V> {
    type VertexType = V;

    const UNDIRECTED: bool = true;
    const INSTANTANEOUS: bool = true;

    fn mutator_verts(&self) -> Vec<V> {
        self.incident_verts()
    }

    fn mutated_verts(&self) -> Vec<V> {
        self.incident_verts()
    }

    fn incident_verts(&self) -> Vec<V> {
        if self.v1 == self.v2 {
            vec![self.v1.clone()]
        } else {
            vec![self.v1.clone(), self.v2.clone()]
        }
    }

    fn is_out_incident(&self, vert: &V) -> bool {
        self.v1 == *vert || self.v2 == *vert
    }

    fn is_in_incident(&self, vert: &V) -> bool {
        self.v1 == *vert || self.v2 == *vert
    }

    fn adjacent(&self, other: &Self) -> bool {
        self.v1 == other.v1 || self.v1 == other.v2 || self.v2 == other.v1 || self.v2 == other.v2
    }
}

impl<V: Vertex> StaticEdge for UndirectedEdge<V> {}
impl<V: Vertex> UndirectedStaticEdge for UndirectedEdge<V> {}

impl<V: Vertex + Display> Display for UndirectedEdge<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.v1, self.v2)
    }
}
