//! Submodule providing weakly-connected and connected component analysis
//! via disjoint-set union.

use hashbrown::HashMap;

use crate::impls::disjoint_set::DisjointSet;
use crate::impls::{Component, Network};
use crate::traits::algorithms::bfs::{BreadthFirstSearch, TraversalDirection};
use crate::traits::StaticEdge;

/// Trait providing component analysis that ignores edge orientation: the
/// *weakly connected* components of a directed network, which for
/// undirected networks are simply the connected components.
pub trait Connectivity<E: StaticEdge> {
    /// The components of the network with every edge treated as
    /// undirected. With `singletons`, components of a single vertex are
    /// included.
    fn connected_components(&self, singletons: bool) -> Vec<Component<E::VertexType>>;

    /// The component containing `vert`, computed by a single breadth-first
    /// search; asymptotically cheaper than building all components when
    /// only one is needed.
    fn connected_component(
        &self,
        vert: &E::VertexType,
        size_hint: usize,
    ) -> Component<E::VertexType>;

    /// The largest component by vertex count; one of them, arbitrarily, if
    /// several share the maximum, or an empty component for an empty
    /// network.
    fn largest_connected_component(&self) -> Component<E::VertexType>;

    /// Whether all vertices belong to one component.
    fn is_connected(&self) -> bool;

    /// Alias of [`Connectivity::connected_components`] under the name used
    /// for directed networks.
    fn weakly_connected_components(&self, singletons: bool) -> Vec<Component<E::VertexType>> {
        self.connected_components(singletons)
    }

    /// Alias of [`Connectivity::connected_component`] under the name used
    /// for directed networks.
    fn weakly_connected_component(
        &self,
        vert: &E::VertexType,
        size_hint: usize,
    ) -> Component<E::VertexType> {
        self.connected_component(vert, size_hint)
    }

    /// Alias of [`Connectivity::largest_connected_component`] under the
    /// name used for directed networks.
    fn largest_weakly_connected_component(&self) -> Component<E::VertexType> {
        self.largest_connected_component()
    }

    /// Alias of [`Connectivity::is_connected`] under the name used for
    /// directed networks.
    fn is_weakly_connected(&self) -> bool {
        self.is_connected()
    }
}

impl<E: StaticEdge> Connectivity<E> for Network<E> {
    fn connected_components(&self, singletons: bool) -> Vec<Component<E::VertexType>> {
        let verts = self.vertices();
        let mut disjoint = DisjointSet::new(verts.len());
        let mut index_of: HashMap<&E::VertexType, usize> = HashMap::with_capacity(verts.len());
        for (index, vert) in verts.iter().enumerate() {
            index_of.insert(vert, index);
        }

        for edge in self.edges() {
            for mutator in edge.mutator_verts() {
                for mutated in edge.mutated_verts() {
                    // Undirected variants report each unordered pair twice;
                    // keeping the ordered half unites each pair once.
                    if !E::UNDIRECTED || mutator < mutated {
                        disjoint.union(index_of[&mutator], index_of[&mutated]);
                    }
                }
            }
        }

        disjoint
            .sets(singletons)
            .into_iter()
            .map(|set| set.into_iter().map(|index| verts[index].clone()).collect())
            .collect()
    }

    fn connected_component(
        &self,
        vert: &E::VertexType,
        size_hint: usize,
    ) -> Component<E::VertexType> {
        self.breadth_first_search(vert, TraversalDirection::Undirected, size_hint, |_, _, _| {
            true
        })
    }

    fn largest_connected_component(&self) -> Component<E::VertexType> {
        self.connected_components(true)
            .into_iter()
            .max_by_key(Component::len)
            .unwrap_or_default()
    }

    fn is_connected(&self) -> bool {
        match self.vertices().first() {
            None => true,
            Some(first) => self.connected_component(first, 0).len() == self.vertices().len(),
        }
    }
}
