//! Submodule providing the immutable indexed network container.

use core::cmp::Ordering;

use hashbrown::{HashMap, HashSet};

use crate::impls::{
    DirectedDelayedTemporalEdge, DirectedDelayedTemporalHyperedge, DirectedEdge,
    DirectedHyperedge, DirectedTemporalEdge, DirectedTemporalHyperedge, UndirectedEdge,
    UndirectedHyperedge, UndirectedTemporalEdge, UndirectedTemporalHyperedge,
};
use crate::traits::NetworkEdge;

/// A generic network: a set of edges of one variant, indexed for fast
/// access to the edges a vertex can mutate or be mutated through, to
/// neighbourhoods and to degrees.
///
/// Networks are immutable once constructed; the combinators return new
/// networks. For undirected instantaneous edge variants, where the effect
/// order coincides with the cause order and in-incidence coincides with
/// out-incidence, the effect-ordered view and the in-edge index alias their
/// cause-ordered counterparts instead of being stored twice.
#[derive(Debug, Clone)]
pub struct Network<E: NetworkEdge> {
    edges_cause: Vec<E>,
    edges_effect: Vec<E>,
    verts: Vec<E::VertexType>,
    out_edges: HashMap<E::VertexType, Vec<E>>,
    in_edges: HashMap<E::VertexType, Vec<E>>,
}

impl<E: NetworkEdge> Network<E> {
    /// Whether the in-side indices alias the out-side ones.
    const ALIASED: bool = E::UNDIRECTED && E::INSTANTANEOUS;

    /// Creates a network from a sequence of edges, possibly unordered and
    /// duplicated.
    ///
    /// # Examples
    ///
    /// ```
    /// use temporal_networks::impls::{DirectedEdge, Network};
    ///
    /// let net = Network::new([
    ///     DirectedEdge::new(1, 2),
    ///     DirectedEdge::new(2, 3),
    ///     DirectedEdge::new(1, 2),
    /// ]);
    /// assert_eq!(net.edges().len(), 2);
    /// assert_eq!(net.vertices(), &[1, 2, 3]);
    /// ```
    pub fn new(edges: impl IntoIterator<Item = E>) -> Self {
        Self::new_with_vertices(edges, core::iter::empty())
    }

    /// Creates a network from a sequence of edges and a supplementary
    /// sequence of vertices; the latter only needs to contain vertices with
    /// no incident edges.
    pub fn new_with_vertices(
        edges: impl IntoIterator<Item = E>,
        verts: impl IntoIterator<Item = E::VertexType>,
    ) -> Self {
        let mut edges_cause: Vec<E> = edges.into_iter().collect();
        edges_cause.sort_unstable();
        edges_cause.dedup();

        let edges_effect = if Self::ALIASED {
            Vec::new()
        } else {
            let mut edges_effect = edges_cause.clone();
            edges_effect.sort_by(E::effect_cmp);
            edges_effect
        };

        // Pushing along the sorted edge views keeps every adjacency list
        // sorted in its respective order without a per-list sort.
        let mut out_edges: HashMap<E::VertexType, Vec<E>> = HashMap::new();
        for edge in &edges_cause {
            for vert in edge.mutator_verts() {
                out_edges.entry(vert).or_default().push(edge.clone());
            }
        }

        let mut in_edges: HashMap<E::VertexType, Vec<E>> = HashMap::new();
        if !Self::ALIASED {
            for edge in &edges_effect {
                for vert in edge.mutated_verts() {
                    in_edges.entry(vert).or_default().push(edge.clone());
                }
            }
        }

        let mut vert_set: HashSet<E::VertexType> = verts.into_iter().collect();
        for edge in &edges_cause {
            vert_set.extend(edge.incident_verts());
        }
        let mut verts: Vec<E::VertexType> = vert_set.into_iter().collect();
        verts.sort_unstable();

        Self { edges_cause, edges_effect, verts, out_edges, in_edges }
    }

    /// The unique vertices of the network, sorted.
    #[must_use]
    pub fn vertices(&self) -> &[E::VertexType] {
        &self.verts
    }

    /// The unique edges of the network, sorted in cause order.
    #[must_use]
    pub fn edges(&self) -> &[E] {
        &self.edges_cause
    }

    /// The unique edges of the network, sorted in cause order.
    #[must_use]
    pub fn edges_cause(&self) -> &[E] {
        &self.edges_cause
    }

    /// The unique edges of the network, sorted in effect order.
    #[must_use]
    pub fn edges_effect(&self) -> &[E] {
        if Self::ALIASED { &self.edges_cause } else { &self.edges_effect }
    }

    /// The edges mutating `vert`, sorted in effect order.
    #[must_use]
    pub fn in_edges(&self, vert: &E::VertexType) -> &[E] {
        let map = if Self::ALIASED { &self.out_edges } else { &self.in_edges };
        map.get(vert).map_or(&[], Vec::as_slice)
    }

    /// The edges `vert` is a mutator of, sorted in cause order.
    #[must_use]
    pub fn out_edges(&self, vert: &E::VertexType) -> &[E] {
        self.out_edges.get(vert).map_or(&[], Vec::as_slice)
    }

    /// The edges `vert` participates in, sorted in cause order.
    #[must_use]
    pub fn incident_edges(&self, vert: &E::VertexType) -> Vec<E> {
        let mut incident = self.out_edges(vert).to_vec();
        if !Self::ALIASED {
            incident.extend_from_slice(self.in_edges(vert));
            incident.sort_unstable();
            incident.dedup();
        }
        incident
    }

    /// Number of edges mutating `vert`.
    #[must_use]
    pub fn in_degree(&self, vert: &E::VertexType) -> usize {
        self.in_edges(vert).len()
    }

    /// Number of edges `vert` is a mutator of.
    #[must_use]
    pub fn out_degree(&self, vert: &E::VertexType) -> usize {
        self.out_edges(vert).len()
    }

    /// Number of edges `vert` participates in.
    #[must_use]
    pub fn degree(&self, vert: &E::VertexType) -> usize {
        if Self::ALIASED { self.out_degree(vert) } else { self.incident_edges(vert).len() }
    }

    /// Vertices that are mutators in at least one edge where `vert` is
    /// mutated, sorted and deduplicated.
    #[must_use]
    pub fn predecessors(&self, vert: &E::VertexType) -> Vec<E::VertexType> {
        let mut preds: Vec<E::VertexType> = self
            .in_edges(vert)
            .iter()
            .flat_map(NetworkEdge::mutator_verts)
            .filter(|other| other != vert)
            .collect();
        preds.sort_unstable();
        preds.dedup();
        preds
    }

    /// Vertices that are mutated in at least one edge where `vert` is a
    /// mutator, sorted and deduplicated.
    #[must_use]
    pub fn successors(&self, vert: &E::VertexType) -> Vec<E::VertexType> {
        let mut succs: Vec<E::VertexType> = self
            .out_edges(vert)
            .iter()
            .flat_map(NetworkEdge::mutated_verts)
            .filter(|other| other != vert)
            .collect();
        succs.sort_unstable();
        succs.dedup();
        succs
    }

    /// Vertices that participate in at least one edge with `vert`, sorted
    /// and deduplicated.
    #[must_use]
    pub fn neighbours(&self, vert: &E::VertexType) -> Vec<E::VertexType> {
        if Self::ALIASED {
            return self.successors(vert);
        }
        let mut neighbours = self.successors(vert);
        neighbours.extend(self.predecessors(vert));
        neighbours.sort_unstable();
        neighbours.dedup();
        neighbours
    }

    /// Whether `vert` is a vertex of this network.
    #[must_use]
    pub fn contains_vertex(&self, vert: &E::VertexType) -> bool {
        self.verts.binary_search(vert).is_ok()
    }

    /// Whether `edge` is an edge of this network.
    #[must_use]
    pub fn contains_edge(&self, edge: &E) -> bool {
        self.edges_cause.binary_search(edge).is_ok()
    }

    /// Returns the union (not the disjoint union) of this network and
    /// `other`: the merged vertex set connected through the merged edge set.
    ///
    /// The sorted edge views and the per-vertex adjacency lists are combined
    /// by linear merges rather than reconstruction.
    #[must_use]
    pub fn union_with(&self, other: &Self) -> Self {
        let edges_cause = merge_sorted(&self.edges_cause, &other.edges_cause, E::cmp);
        let edges_effect = if Self::ALIASED {
            Vec::new()
        } else {
            merge_sorted(&self.edges_effect, &other.edges_effect, E::effect_cmp)
        };
        let verts = merge_sorted(&self.verts, &other.verts, Ord::cmp);

        let mut out_edges = self.out_edges.clone();
        for (vert, edges) in &other.out_edges {
            match out_edges.entry(vert.clone()) {
                hashbrown::hash_map::Entry::Occupied(mut entry) => {
                    *entry.get_mut() = merge_sorted(entry.get(), edges, E::cmp);
                }
                hashbrown::hash_map::Entry::Vacant(entry) => {
                    entry.insert(edges.clone());
                }
            }
        }

        let mut in_edges = self.in_edges.clone();
        if !Self::ALIASED {
            for (vert, edges) in &other.in_edges {
                match in_edges.entry(vert.clone()) {
                    hashbrown::hash_map::Entry::Occupied(mut entry) => {
                        *entry.get_mut() = merge_sorted(entry.get(), edges, E::effect_cmp);
                    }
                    hashbrown::hash_map::Entry::Vacant(entry) => {
                        entry.insert(edges.clone());
                    }
                }
            }
        }

        Self { edges_cause, edges_effect, verts, out_edges, in_edges }
    }

    /// Returns a copy of the network with the given edges added.
    #[must_use]
    pub fn with_edges(&self, edges: impl IntoIterator<Item = E>) -> Self {
        self.union_with(&Self::new(edges))
    }

    /// Returns a copy of the network with the given vertices added.
    #[must_use]
    pub fn with_vertices(&self, verts: impl IntoIterator<Item = E::VertexType>) -> Self {
        self.union_with(&Self::new_with_vertices(core::iter::empty(), verts))
    }

    /// Returns a copy of the network with the given edges removed, keeping
    /// the vertex set.
    #[must_use]
    pub fn without_edges(&self, edges: impl IntoIterator<Item = E>) -> Self {
        let removed: HashSet<E> = edges.into_iter().collect();
        Self::new_with_vertices(
            self.edges_cause.iter().filter(|edge| !removed.contains(*edge)).cloned(),
            self.verts.iter().cloned(),
        )
    }

    /// Returns a copy of the network with the given vertices removed, along
    /// with every edge they participate in.
    #[must_use]
    pub fn without_vertices(&self, verts: impl IntoIterator<Item = E::VertexType>) -> Self {
        let removed: HashSet<E::VertexType> = verts.into_iter().collect();
        Self::new_with_vertices(
            self.edges_cause
                .iter()
                .filter(|edge| !edge.incident_verts().iter().any(|vert| removed.contains(vert)))
                .cloned(),
            self.verts.iter().filter(|vert| !removed.contains(*vert)).cloned(),
        )
    }

    /// Returns the subgraph induced by a set of vertices: an edge is kept
    /// iff *all* its incident vertices lie in the set.
    #[must_use]
    pub fn vertex_induced_subgraph(
        &self,
        verts: impl IntoIterator<Item = E::VertexType>,
    ) -> Self {
        let kept: HashSet<E::VertexType> = verts.into_iter().collect();
        Self::new_with_vertices(
            self.edges_cause
                .iter()
                .filter(|edge| edge.incident_verts().iter().all(|vert| kept.contains(vert)))
                .cloned(),
            self.verts.iter().filter(|vert| kept.contains(*vert)).cloned(),
        )
    }

    /// Returns the subgraph induced by a set of edges: only the specified
    /// edges are kept, along with the union of their incident vertices.
    #[must_use]
    pub fn edge_induced_subgraph(&self, edges: impl IntoIterator<Item = E>) -> Self {
        let kept: HashSet<E> = edges.into_iter().collect();
        Self::new(self.edges_cause.iter().filter(|edge| kept.contains(*edge)).cloned())
    }
}

impl<E: NetworkEdge> Default for Network<E> {
    fn default() -> Self {
        Self::new(core::iter::empty())
    }
}

/// Two networks are equal iff their vertex sets and (cause-ordered) edge
/// sets are equal; the remaining indices are derived.
impl<E: NetworkEdge> PartialEq for Network<E> {
    fn eq(&self, other: &Self) -> bool {
        self.verts == other.verts && self.edges_cause == other.edges_cause
    }
}

impl<E: NetworkEdge> Eq for Network<E> {}

impl<E: NetworkEdge> FromIterator<E> for Network<E> {
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        Self::new(iter)
    }
}

/// Merges two sorted deduplicated sequences under `cmp` into their sorted
/// deduplicated union.
fn merge_sorted<T: Clone>(a: &[T], b: &[T], cmp: impl Fn(&T, &T) -> Ordering) -> Vec<T> {
    let mut merged = Vec::with_capacity(a.len() + b.len());
    let (mut i, mut j) = (0, 0);
    while i < a.len() && j < b.len() {
        match cmp(&a[i], &b[j]) {
            Ordering::Less => {
                merged.push(a[i].clone());
                i += 1;
            }
            Ordering::Greater => {
                merged.push(b[j].clone());
                j += 1;
            }
            Ordering::Equal => {
                merged.push(a[i].clone());
                i += 1;
                j += 1;
            }
        }
    }
    merged.extend_from_slice(&a[i..]);
    merged.extend_from_slice(&b[j..]);
    merged
}

/// Network of dyadic directed edges.
pub type DirectedNetwork<V> = Network<DirectedEdge<V>>;
/// Network of dyadic undirected edges.
pub type UndirectedNetwork<V> = Network<UndirectedEdge<V>>;
/// Network of directed hyperedges.
pub type DirectedHypernetwork<V> = Network<DirectedHyperedge<V>>;
/// Network of undirected hyperedges.
pub type UndirectedHypernetwork<V> = Network<UndirectedHyperedge<V>>;
/// Temporal network of dyadic directed events.
pub type DirectedTemporalNetwork<V, T> = Network<DirectedTemporalEdge<V, T>>;
/// Temporal network of dyadic undirected events.
pub type UndirectedTemporalNetwork<V, T> = Network<UndirectedTemporalEdge<V, T>>;
/// Temporal network of dyadic directed delayed events.
pub type DirectedDelayedTemporalNetwork<V, T> = Network<DirectedDelayedTemporalEdge<V, T>>;
/// Temporal network of directed temporal hyperedges.
pub type DirectedTemporalHypernetwork<V, T> = Network<DirectedTemporalHyperedge<V, T>>;
/// Temporal network of undirected temporal hyperedges.
pub type UndirectedTemporalHypernetwork<V, T> = Network<UndirectedTemporalHyperedge<V, T>>;
/// Temporal network of directed delayed temporal hyperedges.
pub type DirectedDelayedTemporalHypernetwork<V, T> =
    Network<DirectedDelayedTemporalHyperedge<V, T>>;
