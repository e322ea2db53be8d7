//! Submodule providing the exact and estimated static component containers.

use hashbrown::HashSet;

use crate::impls::HyperLogLog;
use crate::traits::Vertex;

/// Trait for the containers the reachability sweeps aggregate into: exact
/// sets, sketches, and the temporal cluster forms all support inserting one
/// item and uniting with a sibling container.
pub trait Accumulator<T>: Clone {
    /// Records one item.
    fn add(&mut self, item: &T);

    /// Unites this container with another one of the same kind.
    fn unite(&mut self, other: &Self);
}

/// A set of vertices, the exact result of a component query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Component<V: Vertex> {
    verts: HashSet<V>,
}

impl<V: Vertex> Default for Component<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Vertex> Component<V> {
    /// Returns a new, empty component.
    #[must_use]
    pub fn new() -> Self {
        Self { verts: HashSet::new() }
    }

    /// Returns a new, empty component with room for `size_hint` vertices.
    #[must_use]
    pub fn with_capacity(size_hint: usize) -> Self {
        Self { verts: HashSet::with_capacity(size_hint) }
    }

    /// Inserts a vertex into the component.
    pub fn insert(&mut self, vert: V) {
        self.verts.insert(vert);
    }

    /// Merges another component into this one.
    pub fn merge(&mut self, other: &Self) {
        for vert in &other.verts {
            self.verts.insert(vert.clone());
        }
    }

    /// Whether the component contains `vert`.
    #[must_use]
    pub fn contains(&self, vert: &V) -> bool {
        self.verts.contains(vert)
    }

    /// Number of vertices in the component.
    #[must_use]
    pub fn len(&self) -> usize {
        self.verts.len()
    }

    /// Whether the component contains no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.verts.is_empty()
    }

    /// Iterates over the vertices of the component, in arbitrary order.
    pub fn iter(&self) -> hashbrown::hash_set::Iter<'_, V> {
        self.verts.iter()
    }
}

impl<V: Vertex> Extend<V> for Component<V> {
    fn extend<I: IntoIterator<Item = V>>(&mut self, iter: I) {
        self.verts.extend(iter);
    }
}

impl<V: Vertex> FromIterator<V> for Component<V> {
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
        Self { verts: iter.into_iter().collect() }
    }
}

impl<'a, V: Vertex> IntoIterator for &'a Component<V> {
    type Item = &'a V;
    type IntoIter = hashbrown::hash_set::Iter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.verts.iter()
    }
}

impl<V: Vertex> IntoIterator for Component<V> {
    type Item = V;
    type IntoIter = hashbrown::hash_set::IntoIter<V>;

    fn into_iter(self) -> Self::IntoIter {
        self.verts.into_iter()
    }
}

impl<V: Vertex> Accumulator<V> for Component<V> {
    fn add(&mut self, item: &V) {
        self.verts.insert(item.clone());
    }

    fn unite(&mut self, other: &Self) {
        self.merge(other);
    }
}

/// A HyperLogLog sketch of a vertex set, the probabilistic counterpart of
/// [`Component`] for all-pairs reachability on networks too large to hold
/// every component exactly.
#[derive(Debug, Clone)]
pub struct ComponentSketch<V: Vertex> {
    verts: HyperLogLog<V>,
}

impl<V: Vertex> ComponentSketch<V> {
    /// Returns a new, empty sketch keyed by `seed`.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self { verts: HyperLogLog::new(seed) }
    }

    /// Records a vertex into the sketch.
    pub fn insert(&mut self, vert: &V) {
        self.verts.insert(vert);
    }

    /// Merges another sketch into this one. Both must share a seed.
    pub fn merge(&mut self, other: &Self) {
        self.verts.merge(&other.verts);
    }

    /// Estimates the number of distinct vertices recorded so far, within
    /// the standard HyperLogLog relative error.
    #[must_use]
    pub fn size_estimate(&self) -> f64 {
        self.verts.estimate()
    }
}

impl<V: Vertex> Accumulator<V> for ComponentSketch<V> {
    fn add(&mut self, item: &V) {
        self.insert(item);
    }

    fn unite(&mut self, other: &Self) {
        self.merge(other);
    }
}
