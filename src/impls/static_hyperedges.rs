//! Submodule providing the static hyperedge types.
//!
//! Hyperedge endpoints are sorted deduplicated dense vectors, not hash sets:
//! uniqueness is established once at construction, so incidence reduces to
//! binary search and adjacency to a sorted-sequence intersection.

use crate::traits::{DirectedStaticEdge, NetworkEdge, StaticEdge, UndirectedStaticEdge, Vertex};

/// Sorts and deduplicates a sequence of endpoints into canonical form.
pub(crate) fn canonicalise<V: Vertex>(verts: impl IntoIterator<Item = V>) -> Vec<V> {
    let mut verts: Vec<V> = verts.into_iter().collect();
    verts.sort_unstable();
    verts.dedup();
    verts
}

/// Whether two sorted deduplicated sequences share at least one element.
pub(crate) fn sorted_intersect<V: Ord>(a: &[V], b: &[V]) -> bool {
    let (mut i, mut j) = (0, 0);
    while i < a.len() && j < b.len() {
        match a[i].cmp(&b[j]) {
            core::cmp::Ordering::Less => i += 1,
            core::cmp::Ordering::Greater => j += 1,
            core::cmp::Ordering::Equal => return true,
        }
    }
    false
}

/// Merges two sorted deduplicated sequences into their sorted union.
pub(crate) fn sorted_union<V: Vertex>(a: &[V], b: &[V]) -> Vec<V> {
    let mut union = Vec::with_capacity(a.len() + b.len());
    let (mut i, mut j) = (0, 0);
    while i < a.len() && j < b.len() {
        match a[i].cmp(&b[j]) {
            core::cmp::Ordering::Less => {
                union.push(a[i].clone());
                i += 1;
            }
            core::cmp::Ordering::Greater => {
                union.push(b[j].clone());
                j += 1;
            }
            core::cmp::Ordering::Equal => {
                union.push(a[i].clone());
                i += 1;
                j += 1;
            }
        }
    }
    union.extend_from_slice(&a[i..]);
    union.extend_from_slice(&b[j..]);
    union
}

/// A directed hyperedge (or hyperlink): an asymmetric relation from a set of
/// tail vertices to a set of head vertices.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DirectedHyperedge<V: Vertex> {
    tails: Vec<V>,
    heads: Vec<V>,
}

impl<V: Vertex> DirectedHyperedge<V> {
    /// Creates a directed hyperedge from its tail and head vertex sets.
    /// Duplicate endpoints are collapsed and the sets are stored sorted.
    pub fn new(
        tails: impl IntoIterator<Item = V>,
        heads: impl IntoIterator<Item = V>,
    ) -> Self {
        Self { tails: canonicalise(tails), heads: canonicalise(heads) }
    }

    /// Returns the sorted set of vertices at the tail end of the hyperedge.
    pub fn tails(&self) -> &[V] {
        &self.tails
    }

    /// Returns the sorted set of vertices at the head end of the hyperedge.
    pub fn heads(&self) -> &[V] {
        &self.heads
    }
}

impl<V: Vertex> NetworkEdge for DirectedHyperedge<V> {
    type VertexType = V;

    const UNDIRECTED: bool = false;
    const INSTANTANEOUS: bool = true;

    fn mutator_verts(&self) -> Vec<V> {
        self.tails.clone()
    }

    fn mutated_verts(&self) -> Vec<V> {
        self.heads.clone()
    }

    fn incident_verts(&self) -> Vec<V> {
        sorted_union(&self.tails, &self.heads)
    }

    fn is_out_incident(&self, vert: &V) -> bool {
        self.tails.binary_search(vert).is_ok()
    }

    fn is_in_incident(&self, vert: &V) -> bool {
        self.heads.binary_search(vert).is_ok()
    }

    fn adjacent(&self, other: &Self) -> bool {
        sorted_intersect(&self.heads, &other.tails)
    }

    fn effect_cmp(&self, other: &Self) -> core::cmp::Ordering {
        (&self.heads, &self.tails).cmp(&(&other.heads, &other.tails))
    }
}

impl<V: Vertex> StaticEdge for DirectedHyperedge<V> {}
impl<V: Vertex> DirectedStaticEdge for DirectedHyperedge<V> {}

/// An undirected hyperedge: a symmetric relation over a set of vertices.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UndirectedHyperedge<V: Vertex> {
    verts: Vec<V>,
}

impl<V: Vertex> UndirectedHyperedge<V> {
    /// Creates an undirected hyperedge over a set of vertices. Duplicates
    /// are collapsed and the set is stored sorted.
    pub fn new(verts: impl IntoIterator<Item = V>) -> Self {
        Self { verts: canonicalise(verts) }
    }
}

impl<V: Vertex> NetworkEdge for UndirectedHyperedge<V> {
    type VertexType = V;

    const UNDIRECTED: bool = true;
    const INSTANTANEOUS: bool = true;

    fn mutator_verts(&self) -> Vec<V> {
        self.verts.clone()
    }

    fn mutated_verts(&self) -> Vec<V> {
        self.verts.clone()
    }

    fn incident_verts(&self) -> Vec<V> {
        self.verts.clone()
    }

    fn is_out_incident(&self, vert: &V) -> bool {
        self.verts.binary_search(vert).is_ok()
    }

    fn is_in_incident(&self, vert: &V) -> bool {
        self.verts.binary_search(vert).is_ok()
    }

    fn adjacent(&self, other: &Self) -> bool {
        sorted_intersect(&self.verts, &other.verts)
    }
}

impl<V: Vertex> StaticEdge for UndirectedHyperedge<V> {}
impl<V: Vertex> UndirectedStaticEdge for UndirectedHyperedge<V> {}
