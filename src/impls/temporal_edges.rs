//! Submodule providing the dyadic temporal edge types, or *events*.
//!
//! Temporal edges are generic over a [`Time`] type that may be a float, so
//! equality, ordering and hashing go through [`Time::time_cmp`] and
//! [`Time::time_hash`] instead of derives. The derived forms would also get
//! the field order of the effect-ordered delayed variant wrong.

use core::cmp::Ordering;
use core::fmt::{self, Display};
use core::hash::{Hash, Hasher};

use crate::errors::EdgeConstructionError;
use crate::impls::{DirectedEdge, UndirectedEdge};
use crate::traits::{NetworkEdge, TemporalEdge, Time, Vertex};

/// A directed temporal edge: an instantaneous asymmetric relation between
/// two vertices at a specific point in time.
#[derive(Debug, Clone, Copy)]
pub struct DirectedTemporalEdge<V: Vertex, T: Time> {
    time: T,
    tail: V,
    head: V,
}

impl<V: Vertex, T: Time> DirectedTemporalEdge<V, T> {
    /// Creates a directed temporal edge from `tail` to `head` happening at
    /// `time`.
    pub fn new(tail: V, head: V, time: T) -> Self {
        Self { time, tail, head }
    }

    /// Creates a directed temporal edge with the endpoints of `projection`
    /// happening at `time`.
    pub fn from_projection(projection: &DirectedEdge<V>, time: T) -> Self {
        Self::new(projection.tail().clone(), projection.head().clone(), time)
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

impl<V: Vertex, T: Time> PartialEq for DirectedTemporalEdge<V, T> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<V: Vertex, T: Time> Eq for DirectedTemporalEdge<V, T> {}

impl<V: Vertex, T: Time> PartialOrd for DirectedTemporalEdge<V, T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<V: Vertex, T: Time> Ord for DirectedTemporalEdge<V, T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.time
            .time_cmp(&other.time)
            .then_with(|| self.tail.cmp(&other.tail))
            .then_with(|| self.head.cmp(&other.head))
    }
}

impl<V: Vertex, T: Time> Hash for DirectedTemporalEdge<V, T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.time.time_hash(state);
        self.tail.hash(state);
        self.head.hash(state);
    }
}

impl<V: Vertex, T: Time> NetworkEdge for DirectedTemporalEdge<V, T> {
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
        self.static_projection().incident_verts()
    }

    fn is_out_incident(&self, vert: &V) -> bool {
        self.tail == *vert
    }

    fn is_in_incident(&self, vert: &V) -> bool {
        self.head == *vert
    }

    fn adjacent(&self, other: &Self) -> bool {
        self.head == other.tail && other.time.time_cmp(&self.time) == Ordering::Greater
    }

    fn effect_cmp(&self, other: &Self) -> Ordering {
        self.time
            .time_cmp(&other.time)
            .then_with(|| self.head.cmp(&other.head))
            .then_with(|| self.tail.cmp(&other.tail))
    }
}

impl<V: Vertex, T: Time> TemporalEdge for DirectedTemporalEdge<V, T> {
    type TimeType = T;
    type StaticProjectionType = DirectedEdge<V>;

    fn cause_time(&self) -> T {
        self.time
    }

    fn effect_time(&self) -> T {
        self.time
    }

    fn static_projection(&self) -> DirectedEdge<V> {
        DirectedEdge::new(self.tail.clone(), self.head.clone())
    }

    fn loop_event(vert: V, time: T) -> Self {
        Self::new(vert.clone(), vert, time)
    }
}

impl<V: Vertex + Display, T: Time> Display for DirectedTemporalEdge<V, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.tail, self.head, self.time)
    }
}

/// A directed delayed temporal edge: an asymmetric relation initiated at a
/// cause time whose effect is received at a later (or equal) effect time.
///
/// Think of the trip of a bus between two consecutive stops: the relation is
/// caused by the departure and the destination stop is mutated by the
/// arrival.
#[derive(Debug, Clone, Copy)]
pub struct DirectedDelayedTemporalEdge<V: Vertex, T: Time> {
    cause_time: T,
    effect_time: T,
    tail: V,
    head: V,
}

impl<V: Vertex, T: Time> DirectedDelayedTemporalEdge<V, T> {
    /// Creates a directed delayed temporal edge from `tail` to `head`,
    /// initiated at `cause_time` and received at `effect_time`.
    ///
    /// # Errors
    ///
    /// * [`EdgeConstructionError::EffectBeforeCause`] if
    ///   `effect_time < cause_time`.
    pub fn new(
        tail: V,
        head: V,
        cause_time: T,
        effect_time: T,
    ) -> Result<Self, EdgeConstructionError> {
        if effect_time.time_cmp(&cause_time) == Ordering::Less {
            return Err(EdgeConstructionError::EffectBeforeCause);
        }
        Ok(Self { cause_time, effect_time, tail, head })
    }

    /// Creates a directed delayed temporal edge with the endpoints of
    /// `projection` and the given times.
    ///
    /// # Errors
    ///
    /// * [`EdgeConstructionError::EffectBeforeCause`] if
    ///   `effect_time < cause_time`.
    pub fn from_projection(
        projection: &DirectedEdge<V>,
        cause_time: T,
        effect_time: T,
    ) -> Result<Self, EdgeConstructionError> {
        Self::new(projection.tail().clone(), projection.head().clone(), cause_time, effect_time)
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

impl<V: Vertex, T: Time> PartialEq for DirectedDelayedTemporalEdge<V, T> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<V: Vertex, T: Time> Eq for DirectedDelayedTemporalEdge<V, T> {}

impl<V: Vertex, T: Time> PartialOrd for DirectedDelayedTemporalEdge<V, T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<V: Vertex, T: Time> Ord for DirectedDelayedTemporalEdge<V, T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.cause_time
            .time_cmp(&other.cause_time)
            .then_with(|| self.effect_time.time_cmp(&other.effect_time))
            .then_with(|| self.tail.cmp(&other.tail))
            .then_with(|| self.head.cmp(&other.head))
    }
}

impl<V: Vertex, T: Time> Hash for DirectedDelayedTemporalEdge<V, T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.cause_time.time_hash(state);
        self.effect_time.time_hash(state);
        self.tail.hash(state);
        self.head.hash(state);
    }
}

impl<V: Vertex, T: Time> NetworkEdge for DirectedDelayedTemporalEdge<V, T> {
    type VertexType = V;

    const UNDIRECTED: bool = false;
    const INSTANTANEOUS: bool = false;

    fn mutator_verts(&self) -> Vec<V> {
        vec![self.tail.clone()]
    }

    fn mutated_verts(&self) -> Vec<V> {
        vec![self.head.clone()]
    }

    fn incident_verts(&self) -> Vec<V> {
        self.static_projection().incident_verts()
    }

    fn is_out_incident(&self, vert: &V) -> bool {
        self.tail == *vert
    }

    fn is_in_incident(&self, vert: &V) -> bool {
        self.head == *vert
    }

    fn adjacent(&self, other: &Self) -> bool {
        self.head == other.tail
            && other.cause_time.time_cmp(&self.effect_time) == Ordering::Greater
    }

    fn effect_cmp(&self, other: &Self) -> Ordering {
        self.effect_time
            .time_cmp(&other.effect_time)
            .then_with(|| self.cause_time.time_cmp(&other.cause_time))
            .then_with(|| self.head.cmp(&other.head))
            .then_with(|| self.tail.cmp(&other.tail))
    }
}

impl<V: Vertex, T: Time> TemporalEdge for DirectedDelayedTemporalEdge<V, T> {
    type TimeType = T;
    type StaticProjectionType = DirectedEdge<V>;

    fn cause_time(&self) -> T {
        self.cause_time
    }

    fn effect_time(&self) -> T {
        self.effect_time
    }

    fn static_projection(&self) -> DirectedEdge<V> {
        DirectedEdge::new(self.tail.clone(), self.head.clone())
    }

    fn loop_event(vert: V, time: T) -> Self {
        Self { cause_time: time, effect_time: time, tail: vert.clone(), head: vert }
    }
}

impl<V: Vertex + Display, T: Time> Display for DirectedDelayedTemporalEdge<V, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} {}", self.tail, self.head, self.cause_time, self.effect_time)
    }
}

/// An undirected temporal edge: an instantaneous symmetric relation between
/// two vertices at a specific point in time.
///
/// The endpoints are stored in canonical (sorted) order, like those of
/// [`UndirectedEdge`].
#[derive(Debug, Clone, Copy)]
pub struct UndirectedTemporalEdge<V: Vertex, T: Time> {
    time: T,
    v1: V,
    v2: V,
}

impl<V: Vertex, T: Time> UndirectedTemporalEdge<V, T> {
    /// Creates an undirected temporal edge between `v1` and `v2` happening
    /// at `time`; the order of the endpoints is arbitrary.
    pub fn new(v1: V, v2: V, time: T) -> Self {
        if v2 < v1 { Self { time, v1: v2, v2: v1 } } else { Self { time, v1, v2 } }
    }

    /// Creates an undirected temporal edge with the endpoints of
    /// `projection` happening at `time`.
    pub fn from_projection(projection: &UndirectedEdge<V>, time: T) -> Self {
        let verts = projection.incident_verts();
        let v1 = verts.first().expect("an undirected edge has at least one endpoint").clone();
        let v2 = verts.last().expect("an undirected edge has at least one endpoint").clone();
        Self::new(v1, v2, time)
    }
}

impl<V: Vertex, T: Time> PartialEq for UndirectedTemporalEdge<V, T> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<V: Vertex, T: Time> Eq for UndirectedTemporalEdge<V, T> {}

impl<V: Vertex, T: Time> PartialOrd for UndirectedTemporalEdge<V, T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<V: Vertex, T: Time> Ord for UndirectedTemporalEdge<V, T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.time
            .time_cmp(&other.time)
            .then_with(|| self.v1.cmp(&other.v1))
            .then_with(|| self.v2.cmp(&other.v2))
    }
}

impl<V: Vertex, T: Time> Hash for UndirectedTemporalEdge<V, T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.time.time_hash(state);
        self.v1.hash(state);
        self.v2.hash(state);
    }
}

impl<V: Vertex, T: Time> NetworkEdge for UndirectedTemporalEdge<V, T> {
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
        (self.v1 == other.v1
            || self.v1 == other.v2
            || self.v2 == other.v1
            || self.v2 == other.v2)
            && other.time.time_cmp(&self.time) == Ordering::Greater
    }
}

impl<V: Vertex, T: Time> TemporalEdge for UndirectedTemporalEdge<V, T> {
    type TimeType = T;
    type StaticProjectionType = UndirectedEdge<V>;

    fn cause_time(&self) -> T {
        self.time
    }

    fn effect_time(&self) -> T {
        self.time
    }

    fn static_projection(&self) -> UndirectedEdge<V> {
        UndirectedEdge::new(self.v1.clone(), self.v2.clone())
    }

    fn loop_event(vert: V, time: T) -> Self {
        Self::new(vert.clone(), vert, time)
    }
}

impl<V: Vertex + Display, T: Time> Display for UndirectedTemporalEdge<V, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.v1, self.v2, self.time)
    }
}
