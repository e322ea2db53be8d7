//! Submodule providing the temporal hyperedge types.
//!
//! Like their static counterparts, temporal hyperedges canonicalise their
//! endpoint sets at construction; like the dyadic temporal edges, their
//! equality, ordering and hashing go through [`Time::time_cmp`] and
//! [`Time::time_hash`] so float timestamps are totally ordered.

use core::cmp::Ordering;
use core::hash::{Hash, Hasher};

use crate::errors::EdgeConstructionError;
use crate::impls::static_hyperedges::{canonicalise, sorted_intersect};
use crate::impls::{DirectedHyperedge, UndirectedHyperedge};
use crate::traits::{NetworkEdge, TemporalEdge, Time, Vertex};

/// A directed temporal hyperedge: an instantaneous asymmetric relation from
/// a set of tail vertices to a set of head vertices at a specific point in
/// time.
#[derive(Debug, Clone)]
pub struct DirectedTemporalHyperedge<V: Vertex, T: Time> {
    time: T,
    tails: Vec<V>,
    heads: Vec<V>,
}

impl<V: Vertex, T: Time> DirectedTemporalHyperedge<V, T> {
    /// Creates a directed temporal hyperedge happening at `time`. Duplicate
    /// endpoints are collapsed and the sets are stored sorted.
    pub fn new(
        tails: impl IntoIterator<Item = V>,
        heads: impl IntoIterator<Item = V>,
        time: T,
    ) -> Self {
        Self { time, tails: canonicalise(tails), heads: canonicalise(heads) }
    }

    /// Creates a directed temporal hyperedge with the endpoints of
    /// `projection` happening at `time`.
    pub fn from_projection(projection: &DirectedHyperedge<V>, time: T) -> Self {
        Self {
            time,
            tails: projection.tails().to_vec(),
            heads: projection.heads().to_vec(),
        }
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

impl<V: Vertex, T: Time> PartialEq for DirectedTemporalHyperedge<V, T> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<V: Vertex, T: Time> Eq for DirectedTemporalHyperedge<V, T> {}

impl<V: Vertex, T: Time> PartialOrd for DirectedTemporalHyperedge<V, T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<V: Vertex, T: Time> Ord for DirectedTemporalHyperedge<V, T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.time
            .time_cmp(&other.time)
            .then_with(|| self.tails.cmp(&other.tails))
            .then_with(|| self.heads.cmp(&other.heads))
    }
}

impl<V: Vertex, T: Time> Hash for DirectedTemporalHyperedge<V, T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.time.time_hash(state);
        self.tails.hash(state);
        self.heads.hash(state);
    }
}

impl<V: Vertex, T: Time> NetworkEdge for DirectedTemporalHyperedge<V, T> {
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
        self.static_projection().incident_verts()
    }

    fn is_out_incident(&self, vert: &V) -> bool {
        self.tails.binary_search(vert).is_ok()
    }

    fn is_in_incident(&self, vert: &V) -> bool {
        self.heads.binary_search(vert).is_ok()
    }

    fn adjacent(&self, other: &Self) -> bool {
        sorted_intersect(&self.heads, &other.tails)
            && other.time.time_cmp(&self.time) == Ordering::Greater
    }

    fn effect_cmp(&self, other: &Self) -> Ordering {
        self.time
            .time_cmp(&other.time)
            .then_with(|| self.heads.cmp(&other.heads))
            .then_with(|| self.tails.cmp(&other.tails))
    }
}

impl<V: Vertex, T: Time> TemporalEdge for DirectedTemporalHyperedge<V, T> {
    type TimeType = T;
    type StaticProjectionType = DirectedHyperedge<V>;

    fn cause_time(&self) -> T {
        self.time
    }

    fn effect_time(&self) -> T {
        self.time
    }

    fn static_projection(&self) -> DirectedHyperedge<V> {
        DirectedHyperedge::new(self.tails.iter().cloned(), self.heads.iter().cloned())
    }

    fn loop_event(vert: V, time: T) -> Self {
        Self::new([vert.clone()], [vert], time)
    }
}

/// A directed delayed temporal hyperedge: an asymmetric relation from a set
/// of tail vertices to a set of head vertices, initiated at a cause time and
/// received at a later (or equal) effect time.
#[derive(Debug, Clone)]
pub struct DirectedDelayedTemporalHyperedge<V: Vertex, T: Time> {
    cause_time: T,
    effect_time: T,
    tails: Vec<V>,
    heads: Vec<V>,
}

impl<V: Vertex, T: Time> DirectedDelayedTemporalHyperedge<V, T> {
    /// Creates a directed delayed temporal hyperedge initiated at
    /// `cause_time` and received at `effect_time`.
    ///
    /// # Errors
    ///
    /// * [`EdgeConstructionError::EffectBeforeCause`] if
    ///   `effect_time < cause_time`.
    pub fn new(
        tails: impl IntoIterator<Item = V>,
        heads: impl IntoIterator<Item = V>,
        cause_time: T,
        effect_time: T,
    ) -> Result<Self, EdgeConstructionError> {
        if effect_time.time_cmp(&cause_time) == Ordering::Less {
            return Err(EdgeConstructionError::EffectBeforeCause);
        }
        Ok(Self {
            cause_time,
            effect_time,
            tails: canonicalise(tails),
            heads: canonicalise(heads),
        })
    }

    /// Creates a directed delayed temporal hyperedge with the endpoints of
    /// `projection` and the given times.
    ///
    /// # Errors
    ///
    /// * [`EdgeConstructionError::EffectBeforeCause`] if
    ///   `effect_time < cause_time`.
    pub fn from_projection(
        projection: &DirectedHyperedge<V>,
        cause_time: T,
        effect_time: T,
    ) -> Result<Self, EdgeConstructionError> {
        Self::new(
            projection.tails().iter().cloned(),
            projection.heads().iter().cloned(),
            cause_time,
            effect_time,
        )
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

impl<V: Vertex, T: Time> PartialEq for DirectedDelayedTemporalHyperedge<V, T> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<V: Vertex, T: Time> Eq for DirectedDelayedTemporalHyperedge<V, T> {}

impl<V: Vertex, T: Time> PartialOrd for DirectedDelayedTemporalHyperedge<V, T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<V: Vertex, T: Time> Ord for DirectedDelayedTemporalHyperedge<V, T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.cause_time
            .time_cmp(&other.cause_time)
            .then_with(|| self.effect_time.time_cmp(&other.effect_time))
            .then_with(|| self.tails.cmp(&other.tails))
            .then_with(|| self.heads.cmp(&other.heads))
    }
}

impl<V: Vertex, T: Time> Hash for DirectedDelayedTemporalHyperedge<V, T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.cause_time.time_hash(state);
        self.effect_time.time_hash(state);
        self.tails.hash(state);
        self.heads.hash(state);
    }
}

impl<V: Vertex, T: Time> NetworkEdge for DirectedDelayedTemporalHyperedge<V, T> {
    type VertexType = V;

    const UNDIRECTED: bool = false;
    const INSTANTANEOUS: bool = false;

    fn mutator_verts(&self) -> Vec<V> {
        self.tails.clone()
    }

    fn mutated_verts(&self) -> Vec<V> {
        self.heads.clone()
    }

    fn incident_verts(&self) -> Vec<V> {
        self.static_projection().incident_verts()
    }

    fn is_out_incident(&self, vert: &V) -> bool {
        self.tails.binary_search(vert).is_ok()
    }

    fn is_in_incident(&self, vert: &V) -> bool {
        self.heads.binary_search(vert).is_ok()
    }

    fn adjacent(&self, other: &Self) -> bool {
        sorted_intersect(&self.heads, &other.tails)
            && other.cause_time.time_cmp(&self.effect_time) == Ordering::Greater
    }

    fn effect_cmp(&self, other: &Self) -> Ordering {
        self.effect_time
            .time_cmp(&other.effect_time)
            .then_with(|| self.cause_time.time_cmp(&other.cause_time))
            .then_with(|| self.heads.cmp(&other.heads))
            .then_with(|| self.tails.cmp(&other.tails))
    }
}

impl<V: Vertex, T: Time> TemporalEdge for DirectedDelayedTemporalHyperedge<V, T> {
    type TimeType = T;
    type StaticProjectionType = DirectedHyperedge<V>;

    fn cause_time(&self) -> T {
        self.cause_time
    }

    fn effect_time(&self) -> T {
        self.effect_time
    }

    fn static_projection(&self) -> DirectedHyperedge<V> {
        DirectedHyperedge::new(self.tails.iter().cloned(), self.heads.iter().cloned())
    }

    fn loop_event(vert: V, time: T) -> Self {
        Self {
            cause_time: time,
            effect_time: time,
            tails: vec![vert.clone()],
            heads: vec![vert],
        }
    }
}

/// An undirected temporal hyperedge: an instantaneous symmetric relation
/// over a set of vertices at a specific point in time.
#[derive(Debug, Clone)]
pub struct UndirectedTemporalHyperedge<V: Vertex, T: Time> {
    time: T,
    verts: Vec<V>,
}

impl<V: Vertex, T: Time> UndirectedTemporalHyperedge<V, T> {
    /// Creates an undirected temporal hyperedge over a set of vertices
    /// happening at `time`. Duplicates are collapsed and the set is stored
    /// sorted.
    pub fn new(verts: impl IntoIterator<Item = V>, time: T) -> Self {
        Self { time, verts: canonicalise(verts) }
    }

    /// Creates an undirected temporal hyperedge with the endpoints of
    /// `projection` happening at `time`.
    pub fn from_projection(projection: &UndirectedHyperedge<V>, time: T) -> Self {
        Self { time, verts: projection.incident_verts() }
    }
}

impl<V: Vertex, T: Time> PartialEq for UndirectedTemporalHyperedge<V, T> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<V: Vertex, T: Time> Eq for UndirectedTemporalHyperedge<V, T> {}

impl<V: Vertex, T: Time> PartialOrd for UndirectedTemporalHyperedge<V, T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<V: Vertex, T: Time> Ord for UndirectedTemporalHyperedge<V, T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.time.time_cmp(&other.time).then_with(|| self.verts.cmp(&other.verts))
    }
}

impl<V: Vertex, T: Time> Hash for UndirectedTemporalHyperedge<V, T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.time.time_hash(state);
        self.verts.hash(state);
    }
}

impl<V: Vertex, T: Time> NetworkEdge for UndirectedTemporalHyperedge<V, T> {
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
            && other.time.time_cmp(&self.time) == Ordering::Greater
    }
}

impl<V: Vertex, T: Time> TemporalEdge for UndirectedTemporalHyperedge<V, T> {
    type TimeType = T;
    type StaticProjectionType = UndirectedHyperedge<V>;

    fn cause_time(&self) -> T {
        self.time
    }

    fn effect_time(&self) -> T {
        self.time
    }

    fn static_projection(&self) -> UndirectedHyperedge<V> {
        UndirectedHyperedge::new(self.verts.iter().cloned())
    }

    fn loop_event(vert: V, time: T) -> Self {
        Self::new([vert], time)
    }
}
