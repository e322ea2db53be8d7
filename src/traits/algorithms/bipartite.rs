//! Submodule providing two-colouring and bipartiteness checks.

use hashbrown::HashMap;

use crate::errors::NotBipartiteError;
use crate::impls::{Component, Network};
use crate::traits::algorithms::bfs::{BreadthFirstSearch, TraversalDirection};
use crate::traits::StaticEdge;

/// Trait providing two-colouring of static networks.
pub trait Bipartiteness<E: StaticEdge> {
    /// Splits the vertices into two colour classes such that no edge joins
    /// two vertices of the same class, or returns `None` if no such split
    /// exists. Hyperedges with fewer than two distinct incident vertices
    /// make a network non-bipartite.
    fn try_two_colouring(&self) -> Option<(Component<E::VertexType>, Component<E::VertexType>)>;

    /// Like [`Bipartiteness::try_two_colouring`], but failing with an error
    /// on non-bipartite networks.
    ///
    /// # Errors
    ///
    /// * [`NotBipartiteError`] if the network is not bipartite.
    fn two_colouring(
        &self,
    ) -> Result<(Component<E::VertexType>, Component<E::VertexType>), NotBipartiteError> {
        self.try_two_colouring().ok_or(NotBipartiteError)
    }

    /// Whether the network is bipartite.
    fn is_bipartite(&self) -> bool {
        self.try_two_colouring().is_some()
    }
}

impl<E: StaticEdge> Bipartiteness<E> for Network<E> {
    fn try_two_colouring(&self) -> Option<(Component<E::VertexType>, Component<E::VertexType>)> {
        let mut colours: HashMap<E::VertexType, bool> =
            HashMap::with_capacity(self.vertices().len());
        let mut first = Component::new();
        let mut second = Component::new();

        for vert in self.vertices() {
            if colours.contains_key(vert) {
                continue;
            }
            colours.insert(vert.clone(), false);
            first.insert(vert.clone());
            self.breadth_first_search(vert, TraversalDirection::Undirected, 0, |from, _, to| {
                let colour = !colours[from];
                colours.insert(to.clone(), colour);
                if colour {
                    second.insert(to.clone());
                } else {
                    first.insert(to.clone());
                }
                true
            });
        }

        for edge in self.edges() {
            let verts = edge.incident_verts();
            if verts.len() < 2 {
                return None;
            }
            for (position, vert) in verts.iter().enumerate() {
                for other in &verts[position + 1..] {
                    if colours[vert] == colours[other] {
                        return None;
                    }
                }
            }
        }

        Some((first, second))
    }
}
