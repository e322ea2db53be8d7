//! Submodule providing the exact and estimated temporal cluster containers.
//!
//! A temporal cluster is the result of a temporal reachability query: a set
//! of events, together with the record of which vertex was affected over
//! which time interval. Adding an event records, for every mutated vertex,
//! the closed interval from the effect time to the end of the linger the
//! adjacency policy assigns; an infinite linger records an interval closed
//! at the maximal representable instant.

use hashbrown::{HashMap, HashSet};
use num_traits::{ToPrimitive, Zero};

use crate::impls::{Accumulator, HyperLogLog, IntervalSet};
use crate::traits::{TemporalAdjacency, TemporalEdge, Time};

/// Extends a `(min cause, max effect-end)` lifetime with a new event span.
fn widen<T: Time>(lifetime: &mut Option<(T, T)>, cause: T, end: T) {
    *lifetime = Some(match *lifetime {
        None => (cause, end),
        Some((lo, hi)) => (
            if cause.time_cmp(&lo) == core::cmp::Ordering::Less { cause } else { lo },
            if end.time_cmp(&hi) == core::cmp::Ordering::Greater { end } else { hi },
        ),
    });
}

/// The closed interval an event contributes at one of its mutated vertices.
fn contribution<E, A>(adj: &A, event: &E, vert: &E::VertexType) -> (E::TimeType, E::TimeType)
where
    E: TemporalEdge,
    A: TemporalAdjacency<E>,
{
    let start = event.effect_time();
    let end = if adj.infinite_linger(event, vert) {
        E::TimeType::maximum()
    } else {
        start.saturating_add(adj.linger(event, vert))
    };
    (start, end)
}

/// The exact set of events reached by a temporal reachability query, with
/// per-vertex interval records.
#[derive(Debug, Clone)]
pub struct TemporalCluster<E: TemporalEdge, A: TemporalAdjacency<E>> {
    adj: A,
    events: HashSet<E>,
    lifetime: Option<(E::TimeType, E::TimeType)>,
    intervals: HashMap<E::VertexType, IntervalSet<E::TimeType>>,
}

impl<E: TemporalEdge, A: TemporalAdjacency<E>> TemporalCluster<E, A> {
    /// Returns a new, empty cluster under the adjacency policy `adj`.
    #[must_use]
    pub fn new(adj: A) -> Self {
        Self { adj, events: HashSet::new(), lifetime: None, intervals: HashMap::new() }
    }

    /// Returns a new, empty cluster with room for `size_hint` events.
    #[must_use]
    pub fn with_capacity(adj: A, size_hint: usize) -> Self {
        Self {
            adj,
            events: HashSet::with_capacity(size_hint),
            lifetime: None,
            intervals: HashMap::new(),
        }
    }

    /// Returns a cluster of the given events under the adjacency policy
    /// `adj`.
    pub fn from_events(events: impl IntoIterator<Item = E>, adj: A) -> Self {
        let mut cluster = Self::new(adj);
        for event in events {
            cluster.insert(event);
        }
        cluster
    }

    /// Inserts an event, recording its effect intervals at every mutated
    /// vertex.
    pub fn insert(&mut self, event: E) {
        widen(&mut self.lifetime, event.cause_time(), event.effect_time());
        for vert in event.mutated_verts() {
            let (start, end) = contribution(&self.adj, &event, &vert);
            widen(&mut self.lifetime, event.cause_time(), end);
            self.intervals.entry(vert).or_default().insert(start, end);
        }
        self.events.insert(event);
    }

    /// Merges another cluster into this one.
    pub fn merge(&mut self, other: &Self) {
        for event in &other.events {
            self.events.insert(event.clone());
        }
        for (vert, ints) in &other.intervals {
            self.intervals.entry(vert.clone()).or_default().merge(ints);
        }
        if let Some((lo, hi)) = other.lifetime {
            widen(&mut self.lifetime, lo, hi);
        }
    }

    /// Whether the cluster contains the event `event`.
    #[must_use]
    pub fn contains(&self, event: &E) -> bool {
        self.events.contains(event)
    }

    /// Whether the effect of some event in the cluster lingers at `vert` at
    /// the instant `time`.
    #[must_use]
    pub fn covers(&self, vert: &E::VertexType, time: E::TimeType) -> bool {
        self.intervals.get(vert).is_some_and(|ints| ints.covers(time))
    }

    /// Number of events in the cluster.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Whether the cluster contains no events.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Iterates over the events of the cluster, in arbitrary order.
    pub fn iter(&self) -> hashbrown::hash_set::Iter<'_, E> {
        self.events.iter()
    }

    /// The per-vertex interval records of the cluster.
    #[must_use]
    pub fn interval_sets(&self) -> &HashMap<E::VertexType, IntervalSet<E::TimeType>> {
        &self.intervals
    }

    /// The `(earliest cause time, latest effect-interval end)` pair of the
    /// cluster, or `None` for an empty cluster.
    #[must_use]
    pub fn lifetime(&self) -> Option<(E::TimeType, E::TimeType)> {
        self.lifetime
    }

    /// Number of distinct `(vertex, integer instant)` pairs covered by the
    /// cluster, saturating at `usize::MAX` under unbounded lingers.
    #[must_use]
    pub fn volume(&self) -> usize {
        self.intervals.values().fold(0usize, |acc, ints| acc.saturating_add(ints.instants()))
    }

    /// Total measure of the effect intervals summed over vertices.
    #[must_use]
    pub fn mass(&self) -> E::TimeType {
        self.intervals
            .values()
            .fold(E::TimeType::zero(), |acc, ints| acc.saturating_add(ints.cover()))
    }
}

impl<E: TemporalEdge, A: TemporalAdjacency<E>> PartialEq for TemporalCluster<E, A> {
    fn eq(&self, other: &Self) -> bool {
        self.events == other.events
    }
}

impl<E: TemporalEdge, A: TemporalAdjacency<E>> Eq for TemporalCluster<E, A> {}

impl<'a, E: TemporalEdge, A: TemporalAdjacency<E>> IntoIterator for &'a TemporalCluster<E, A> {
    type Item = &'a E;
    type IntoIter = hashbrown::hash_set::Iter<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.events.iter()
    }
}

impl<E: TemporalEdge, A: TemporalAdjacency<E>> Accumulator<E> for TemporalCluster<E, A> {
    fn add(&mut self, item: &E) {
        self.insert(item.clone());
    }

    fn unite(&mut self, other: &Self) {
        self.merge(other);
    }
}

/// The scalar summary of a [`TemporalCluster`], kept when the event set
/// itself is not needed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TemporalClusterSize<T: Time> {
    len: usize,
    lifetime: Option<(T, T)>,
    volume: usize,
    mass: T,
}

impl<T: Time> TemporalClusterSize<T> {
    /// Number of events in the summarised cluster.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the summarised cluster was empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Lifetime of the summarised cluster.
    #[must_use]
    pub fn lifetime(&self) -> Option<(T, T)> {
        self.lifetime
    }

    /// Volume of the summarised cluster.
    #[must_use]
    pub fn volume(&self) -> usize {
        self.volume
    }

    /// Mass of the summarised cluster.
    #[must_use]
    pub fn mass(&self) -> T {
        self.mass
    }
}

impl<E, A> From<&TemporalCluster<E, A>> for TemporalClusterSize<E::TimeType>
where
    E: TemporalEdge,
    A: TemporalAdjacency<E>,
{
    fn from(cluster: &TemporalCluster<E, A>) -> Self {
        Self {
            len: cluster.len(),
            lifetime: cluster.lifetime(),
            volume: cluster.volume(),
            mass: cluster.mass(),
        }
    }
}

/// The HyperLogLog-backed counterpart of [`TemporalCluster`]: sketches of
/// the event set, the affected vertices and the quantised `(vertex, time)`
/// pairs, keeping all-pairs temporal reachability feasible on large
/// networks.
///
/// Time is quantised to the temporal resolution `dt`: a recorded interval
/// `[s, e]` contributes every bin index between `floor(s / dt)` and
/// `floor(e / dt)` to the time sketch. An infinite-linger contribution
/// records exactly one bin, `floor(s / dt)`, so estimates stay finite.
#[derive(Debug, Clone)]
pub struct TemporalClusterSketch<E: TemporalEdge, A: TemporalAdjacency<E>> {
    dt: E::TimeType,
    adj: A,
    lifetime: Option<(E::TimeType, E::TimeType)>,
    events: HyperLogLog<E>,
    verts: HyperLogLog<E::VertexType>,
    times: HyperLogLog<(E::VertexType, i64)>,
    infinite_times: bool,
}

impl<E: TemporalEdge, A: TemporalAdjacency<E>> TemporalClusterSketch<E, A> {
    /// Returns a new, empty sketch under the adjacency policy `adj`, with
    /// temporal resolution `dt` and sketch seed `seed`.
    #[must_use]
    pub fn new(adj: A, dt: E::TimeType, seed: u64) -> Self {
        Self {
            dt,
            adj,
            lifetime: None,
            events: HyperLogLog::new(seed),
            verts: HyperLogLog::new(seed),
            times: HyperLogLog::new(seed),
            infinite_times: false,
        }
    }

    /// Returns a sketch of the given events.
    pub fn from_events(
        events: impl IntoIterator<Item = E>,
        adj: A,
        dt: E::TimeType,
        seed: u64,
    ) -> Self {
        let mut sketch = Self::new(adj, dt, seed);
        for event in events {
            sketch.insert(&event);
        }
        sketch
    }

    /// Records an event and its quantised effect intervals.
    pub fn insert(&mut self, event: &E) {
        widen(&mut self.lifetime, event.cause_time(), event.effect_time());
        for vert in event.mutated_verts() {
            let (start, end) = contribution(&self.adj, event, &vert);
            widen(&mut self.lifetime, event.cause_time(), end);
            self.verts.insert(&vert);
            if self.adj.infinite_linger(event, &vert) {
                self.infinite_times = true;
                self.times.insert(&(vert, start.quantise(self.dt)));
            } else {
                for bin in start.quantise(self.dt)..=end.quantise(self.dt) {
                    self.times.insert(&(vert.clone(), bin));
                }
            }
        }
        self.events.insert(event);
    }

    /// Merges another sketch into this one. Both must share a seed, a
    /// temporal resolution and an adjacency policy.
    pub fn merge(&mut self, other: &Self) {
        self.events.merge(&other.events);
        self.verts.merge(&other.verts);
        self.times.merge(&other.times);
        self.infinite_times |= other.infinite_times;
        if let Some((lo, hi)) = other.lifetime {
            widen(&mut self.lifetime, lo, hi);
        }
    }

    /// Estimates the number of events recorded so far.
    #[must_use]
    pub fn size_estimate(&self) -> f64 {
        self.events.estimate()
    }

    /// Lifetime of the sketched cluster, or `None` when empty.
    #[must_use]
    pub fn lifetime(&self) -> Option<(E::TimeType, E::TimeType)> {
        self.lifetime
    }

    /// Estimates the number of distinct quantised `(vertex, time)` pairs
    /// covered by the cluster. At the default resolution of one this tracks
    /// the exact [`TemporalCluster::volume`] convention; coarser resolutions
    /// undercount by design.
    #[must_use]
    pub fn volume_estimate(&self) -> f64 {
        self.times.estimate()
    }

    /// Estimates the total interval measure as the time-sketch cardinality
    /// scaled by the temporal resolution.
    #[must_use]
    pub fn mass_estimate(&self) -> f64 {
        self.times.estimate() * self.dt.to_f64().unwrap_or(f64::INFINITY)
    }

    /// The temporal resolution the time sketch is quantised to.
    #[must_use]
    pub fn temporal_resolution(&self) -> E::TimeType {
        self.dt
    }

    /// Whether some recorded contribution had an infinite linger, in which
    /// case the volume and mass estimates cover only the single recorded
    /// bin per vertex.
    #[must_use]
    pub fn unbounded(&self) -> bool {
        self.infinite_times
    }
}

impl<E: TemporalEdge, A: TemporalAdjacency<E>> Accumulator<E> for TemporalClusterSketch<E, A> {
    fn add(&mut self, item: &E) {
        self.insert(item);
    }

    fn unite(&mut self, other: &Self) {
        self.merge(other);
    }
}

/// The scalar summary of a [`TemporalClusterSketch`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TemporalClusterSizeEstimate<T: Time> {
    size_estimate: f64,
    lifetime: Option<(T, T)>,
    volume_estimate: f64,
    mass_estimate: f64,
    temporal_resolution: T,
}

impl<T: Time> TemporalClusterSizeEstimate<T> {
    /// Estimated number of events in the summarised cluster.
    #[must_use]
    pub fn size_estimate(&self) -> f64 {
        self.size_estimate
    }

    /// Lifetime of the summarised cluster.
    #[must_use]
    pub fn lifetime(&self) -> Option<(T, T)> {
        self.lifetime
    }

    /// Estimated volume of the summarised cluster.
    #[must_use]
    pub fn volume_estimate(&self) -> f64 {
        self.volume_estimate
    }

    /// Estimated mass of the summarised cluster.
    #[must_use]
    pub fn mass_estimate(&self) -> f64 {
        self.mass_estimate
    }

    /// The temporal resolution of the summarised sketch.
    #[must_use]
    pub fn temporal_resolution(&self) -> T {
        self.temporal_resolution
    }
}

impl<E, A> From<&TemporalClusterSketch<E, A>> for TemporalClusterSizeEstimate<E::TimeType>
where
    E: TemporalEdge,
    A: TemporalAdjacency<E>,
{
    fn from(sketch: &TemporalClusterSketch<E, A>) -> Self {
        Self {
            size_estimate: sketch.size_estimate(),
            lifetime: sketch.lifetime(),
            volume_estimate: sketch.volume_estimate(),
            mass_estimate: sketch.mass_estimate(),
            temporal_resolution: sketch.temporal_resolution(),
        }
    }
}
