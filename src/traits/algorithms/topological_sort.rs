//! Submodule providing Kahn's algorithm for topological ordering of
//! directed static networks.

use hashbrown::HashMap;

use crate::errors::NotAcyclicError;
use crate::impls::Network;
use crate::traits::DirectedStaticEdge;

/// Trait providing topological ordering and acyclicity checks over directed
/// static networks.
pub trait TopologicalSort<E: DirectedStaticEdge> {
    /// Sorts the vertices so that for every edge, every mutator vertex
    /// appears before every (distinct) mutated vertex; returns `None` if
    /// the network has a cycle.
    ///
    /// # Examples
    ///
    /// ```
    /// use temporal_networks::impls::{DirectedEdge, Network};
    /// use temporal_networks::traits::TopologicalSort;
    ///
    /// let net = Network::new([DirectedEdge::new(1, 2), DirectedEdge::new(2, 3)]);
    /// assert_eq!(net.try_topological_order(), Some(vec![1, 2, 3]));
    /// ```
    fn try_topological_order(&self) -> Option<Vec<E::VertexType>>;

    /// Like [`TopologicalSort::try_topological_order`], but failing with an
    /// error on cyclic networks.
    ///
    /// # Errors
    ///
    /// * [`NotAcyclicError`] if the network has a cycle.
    fn topological_order(&self) -> Result<Vec<E::VertexType>, NotAcyclicError> {
        self.try_topological_order().ok_or(NotAcyclicError)
    }

    /// Whether the network contains no directed cycle.
    fn is_acyclic(&self) -> bool {
        self.try_topological_order().is_some()
    }
}

impl<E: DirectedStaticEdge> TopologicalSort<E> for Network<E> {
    fn try_topological_order(&self) -> Option<Vec<E::VertexType>> {
        let verts = self.vertices();

        // For hyperedges the in-count of a vertex is the sum of the mutator
        // set sizes over its in-edges, so each emission below can decrement
        // by one per (edge, mutator) pair.
        let mut in_counts: HashMap<E::VertexType, usize> = HashMap::with_capacity(verts.len());
        for edge in self.edges() {
            let weight = edge.mutator_verts().len();
            for vert in edge.mutated_verts() {
                *in_counts.entry(vert).or_insert(0) += weight;
            }
        }

        let mut stack: Vec<E::VertexType> = verts
            .iter()
            .filter(|vert| !in_counts.contains_key(*vert))
            .cloned()
            .collect();

        let mut order = Vec::with_capacity(verts.len());
        while let Some(vert) = stack.pop() {
            for edge in self.out_edges(&vert) {
                for mutated in edge.mutated_verts() {
                    let count = in_counts
                        .get_mut(&mutated)
                        .expect("mutated vertices have an in-count");
                    *count -= 1;
                    if *count == 0 {
                        stack.push(mutated);
                    }
                }
            }
            order.push(vert);
        }

        (order.len() == verts.len()).then_some(order)
    }
}
