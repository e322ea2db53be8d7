//! Submodule providing the breadth-first-search primitive underlying the
//! single-source reachability queries.

use std::collections::VecDeque;

use crate::impls::{Component, Network};
use crate::traits::StaticEdge;

/// Direction a breadth-first search follows edges in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraversalDirection {
    /// Follow edges from mutator to mutated vertices.
    Forward,
    /// Follow edges from mutated to mutator vertices.
    Reverse,
    /// Ignore edge orientation.
    Undirected,
}

/// Trait providing the generic breadth-first search over a static network.
pub trait BreadthFirstSearch<E: StaticEdge> {
    /// Runs a breadth-first search from `root`, visiting the edges of each
    /// vertex in their stored sorted order so runs are reproducible.
    ///
    /// The `visitor` is called once per newly discovered vertex as
    /// `(from, edge, to)`; returning `false` short-circuits the whole
    /// search. The returned component holds every vertex discovered,
    /// including `root` and the vertex the visitor rejected, if any.
    ///
    /// `size_hint` pre-sizes the discovered set.
    fn breadth_first_search<F>(
        &self,
        root: &E::VertexType,
        direction: TraversalDirection,
        size_hint: usize,
        visitor: F,
    ) -> Component<E::VertexType>
    where
        F: FnMut(&E::VertexType, &E, &E::VertexType) -> bool;
}

impl<E: StaticEdge> BreadthFirstSearch<E> for Network<E> {
    fn breadth_first_search<F>(
        &self,
        root: &E::VertexType,
        direction: TraversalDirection,
        size_hint: usize,
        mut visitor: F,
    ) -> Component<E::VertexType>
    where
        F: FnMut(&E::VertexType, &E, &E::VertexType) -> bool,
    {
        let mut discovered = Component::with_capacity(size_hint);
        discovered.insert(root.clone());
        let mut queue = VecDeque::from([root.clone()]);

        while let Some(vert) = queue.pop_front() {
            let edges: Vec<E> = match direction {
                TraversalDirection::Forward => self.out_edges(&vert).to_vec(),
                TraversalDirection::Reverse => self.in_edges(&vert).to_vec(),
                TraversalDirection::Undirected => self.incident_edges(&vert),
            };
            for edge in &edges {
                let next_verts = match direction {
                    TraversalDirection::Forward => edge.mutated_verts(),
                    TraversalDirection::Reverse => edge.mutator_verts(),
                    TraversalDirection::Undirected => edge.incident_verts(),
                };
                for next in next_verts {
                    if discovered.contains(&next) {
                        continue;
                    }
                    discovered.insert(next.clone());
                    if !visitor(&vert, edge, &next) {
                        return discovered;
                    }
                    queue.push_back(next);
                }
            }
        }

        discovered
    }
}
