//! Submodule defining the properties of a network vertex.

use core::fmt::Debug;
use core::hash::Hash;

/// Trait defining the properties of a vertex label.
///
/// Any clonable, totally ordered, hashable type qualifies; integral types
/// and `String` are the usual choices.
pub trait Vertex: Clone + Ord + Hash + Debug {}

impl<T: Clone + Ord + Hash + Debug> Vertex for T {}

/// Trait for vertex types that can label a contiguous integer range, as
/// required by the deterministic graph generators.
pub trait IntegerVertex: Vertex + Copy + TryFrom<usize> {}

impl<T: Vertex + Copy + TryFrom<usize>> IntegerVertex for T {}
