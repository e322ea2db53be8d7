//! Submodule providing the temporal-network algorithms: time windows, the
//! explicit event graph, out-/in-clusters, temporal reachability, static
//! projections and link timelines.

use hashbrown::HashMap;

use crate::errors::EmptyNetworkError;
use crate::impls::{
    DirectedEdge, ImplicitEventGraph, Network, TemporalCluster, TemporalClusterSize,
    TemporalClusterSizeEstimate, TemporalClusterSketch,
};
use crate::traits::{NetworkEdge, TemporalAdjacency, TemporalEdge, Time};

/// Trait providing the time ranges spanned by a temporal network.
pub trait TimeWindows<E: TemporalEdge> {
    /// The `(min cause time, max effect time)` range of the events.
    ///
    /// # Errors
    ///
    /// * [`EmptyNetworkError`] on a network without events.
    fn time_window(&self) -> Result<(E::TimeType, E::TimeType), EmptyNetworkError>;

    /// The range of cause times present in the events.
    ///
    /// # Errors
    ///
    /// * [`EmptyNetworkError`] on a network without events.
    fn cause_time_window(&self) -> Result<(E::TimeType, E::TimeType), EmptyNetworkError>;

    /// The range of effect times present in the events.
    ///
    /// # Errors
    ///
    /// * [`EmptyNetworkError`] on a network without events.
    fn effect_time_window(&self) -> Result<(E::TimeType, E::TimeType), EmptyNetworkError>;
}

impl<E: TemporalEdge> TimeWindows<E> for Network<E> {
    fn time_window(&self) -> Result<(E::TimeType, E::TimeType), EmptyNetworkError> {
        match (self.edges_cause().first(), self.edges_effect().last()) {
            (Some(first), Some(last)) => Ok((first.cause_time(), last.effect_time())),
            _ => Err(EmptyNetworkError),
        }
    }

    fn cause_time_window(&self) -> Result<(E::TimeType, E::TimeType), EmptyNetworkError> {
        match (self.edges_cause().first(), self.edges_cause().last()) {
            (Some(first), Some(last)) => Ok((first.cause_time(), last.cause_time())),
            _ => Err(EmptyNetworkError),
        }
    }

    fn effect_time_window(&self) -> Result<(E::TimeType, E::TimeType), EmptyNetworkError> {
        match (self.edges_effect().first(), self.edges_effect().last()) {
            (Some(first), Some(last)) => Ok((first.effect_time(), last.effect_time())),
            _ => Err(EmptyNetworkError),
        }
    }
}

/// Trait providing event-graph construction, temporal clusters and
/// temporal reachability over temporal networks.
pub trait TemporalReachability<E: TemporalEdge> {
    /// Materialises the event graph under `adj` as a directed network whose
    /// vertices are the events. Only feasible when the event graph itself
    /// is small enough to hold; the cluster computations below traverse it
    /// implicitly instead.
    fn event_graph<A: TemporalAdjacency<E>>(&self, adj: &A) -> Network<DirectedEdge<E>>;

    /// The cluster of events reached by a spreading process seeded by the
    /// event `root`, including `root` itself.
    fn out_cluster<A: TemporalAdjacency<E>>(&self, adj: &A, root: &E) -> TemporalCluster<E, A>;

    /// The cluster of events reached by a spreading process seeded at
    /// vertex `vert` at time `time`, represented as the self-loop event at
    /// `(vert, time)`.
    fn out_cluster_from<A: TemporalAdjacency<E>>(
        &self,
        adj: &A,
        vert: E::VertexType,
        time: E::TimeType,
    ) -> TemporalCluster<E, A>;

    /// The cluster of events from which a spreading process reaches the
    /// event `root`, including `root` itself.
    fn in_cluster<A: TemporalAdjacency<E>>(&self, adj: &A, root: &E) -> TemporalCluster<E, A>;

    /// The cluster of events from which a spreading process reaches vertex
    /// `vert` by time `time`.
    fn in_cluster_to<A: TemporalAdjacency<E>>(
        &self,
        adj: &A,
        vert: E::VertexType,
        time: E::TimeType,
    ) -> TemporalCluster<E, A>;

    /// For every event, its out-cluster.
    fn out_clusters<A: TemporalAdjacency<E>>(
        &self,
        adj: &A,
    ) -> Vec<(E, TemporalCluster<E, A>)>;

    /// For every event, its in-cluster.
    fn in_clusters<A: TemporalAdjacency<E>>(&self, adj: &A)
    -> Vec<(E, TemporalCluster<E, A>)>;

    /// For every event, the scalar summary of its out-cluster. Finished
    /// clusters are not retained, so peak memory stays proportional to the
    /// traversal frontier.
    fn out_cluster_sizes<A: TemporalAdjacency<E>>(
        &self,
        adj: &A,
    ) -> Vec<(E, TemporalClusterSize<E::TimeType>)>;

    /// For every event, the scalar summary of its in-cluster.
    fn in_cluster_sizes<A: TemporalAdjacency<E>>(
        &self,
        adj: &A,
    ) -> Vec<(E, TemporalClusterSize<E::TimeType>)>;

    /// For every event, the HyperLogLog-estimated summary of its
    /// out-cluster, sketched at the temporal resolution `dt`.
    fn out_cluster_size_estimates<A: TemporalAdjacency<E>>(
        &self,
        adj: &A,
        dt: E::TimeType,
        seed: u64,
    ) -> Vec<(E, TemporalClusterSizeEstimate<E::TimeType>)>;

    /// For every event, the HyperLogLog-estimated summary of its
    /// in-cluster.
    fn in_cluster_size_estimates<A: TemporalAdjacency<E>>(
        &self,
        adj: &A,
        dt: E::TimeType,
        seed: u64,
    ) -> Vec<(E, TemporalClusterSizeEstimate<E::TimeType>)>;

    /// Whether `destination` at time `end` is reachable from `source` at
    /// time `start` through temporally adjacent events.
    ///
    /// # Examples
    ///
    /// ```
    /// use temporal_networks::impls::{DirectedTemporalEdge, Network, Simple};
    /// use temporal_networks::traits::TemporalReachability;
    ///
    /// let temp = Network::new([
    ///     DirectedTemporalEdge::new(1, 2, 1),
    ///     DirectedTemporalEdge::new(2, 3, 2),
    /// ]);
    /// assert!(temp.is_reachable(&Simple, &1, 0, &3, 5));
    /// assert!(!temp.is_reachable(&Simple, &3, 0, &1, 5));
    /// ```
    fn is_reachable<A: TemporalAdjacency<E>>(
        &self,
        adj: &A,
        source: &E::VertexType,
        start: E::TimeType,
        destination: &E::VertexType,
        end: E::TimeType,
    ) -> bool;

    /// The static network of the projections of the events, keeping the
    /// vertex set.
    fn static_projection(&self) -> Network<E::StaticProjectionType>;

    /// The cause-ordered events whose static projection equals `link`, i.e.
    /// the timeline of that link.
    fn link_timeline(&self, link: &E::StaticProjectionType) -> Vec<E>;

    /// For every edge of the static projection, its timeline.
    fn link_timelines(&self) -> Vec<(E::StaticProjectionType, Vec<E>)>;
}

impl<E: TemporalEdge> TemporalReachability<E> for Network<E> {
    fn event_graph<A: TemporalAdjacency<E>>(&self, adj: &A) -> Network<DirectedEdge<E>> {
        let view = ImplicitEventGraph::new(self, adj.clone());
        let mut arcs = Vec::new();
        for event in self.edges_cause() {
            for next in view.successors(event, false) {
                arcs.push(DirectedEdge::new(event.clone(), next));
            }
        }
        Network::new(arcs)
    }

    fn out_cluster<A: TemporalAdjacency<E>>(&self, adj: &A, root: &E) -> TemporalCluster<E, A> {
        let view = ImplicitEventGraph::new(self, adj.clone());
        TemporalCluster::from_events(view.out_component(root), adj.clone())
    }

    fn out_cluster_from<A: TemporalAdjacency<E>>(
        &self,
        adj: &A,
        vert: E::VertexType,
        time: E::TimeType,
    ) -> TemporalCluster<E, A> {
        self.out_cluster(adj, &E::loop_event(vert, time))
    }

    fn in_cluster<A: TemporalAdjacency<E>>(&self, adj: &A, root: &E) -> TemporalCluster<E, A> {
        let view = ImplicitEventGraph::new(self, adj.clone());
        TemporalCluster::from_events(view.in_component(root), adj.clone())
    }

    fn in_cluster_to<A: TemporalAdjacency<E>>(
        &self,
        adj: &A,
        vert: E::VertexType,
        time: E::TimeType,
    ) -> TemporalCluster<E, A> {
        self.in_cluster(adj, &E::loop_event(vert, time))
    }

    fn out_clusters<A: TemporalAdjacency<E>>(
        &self,
        adj: &A,
    ) -> Vec<(E, TemporalCluster<E, A>)> {
        let view = ImplicitEventGraph::new(self, adj.clone());
        view.accumulate(false, || TemporalCluster::new(adj.clone()), |cluster| cluster)
    }

    fn in_clusters<A: TemporalAdjacency<E>>(
        &self,
        adj: &A,
    ) -> Vec<(E, TemporalCluster<E, A>)> {
        let view = ImplicitEventGraph::new(self, adj.clone());
        view.accumulate(true, || TemporalCluster::new(adj.clone()), |cluster| cluster)
    }

    fn out_cluster_sizes<A: TemporalAdjacency<E>>(
        &self,
        adj: &A,
    ) -> Vec<(E, TemporalClusterSize<E::TimeType>)> {
        let view = ImplicitEventGraph::new(self, adj.clone());
        view.accumulate(
            false,
            || TemporalCluster::new(adj.clone()),
            |cluster| TemporalClusterSize::from(&cluster),
        )
    }

    fn in_cluster_sizes<A: TemporalAdjacency<E>>(
        &self,
        adj: &A,
    ) -> Vec<(E, TemporalClusterSize<E::TimeType>)> {
        let view = ImplicitEventGraph::new(self, adj.clone());
        view.accumulate(
            true,
            || TemporalCluster::new(adj.clone()),
            |cluster| TemporalClusterSize::from(&cluster),
        )
    }

    fn out_cluster_size_estimates<A: TemporalAdjacency<E>>(
        &self,
        adj: &A,
        dt: E::TimeType,
        seed: u64,
    ) -> Vec<(E, TemporalClusterSizeEstimate<E::TimeType>)> {
        let view = ImplicitEventGraph::new(self, adj.clone());
        view.accumulate(
            false,
            || TemporalClusterSketch::new(adj.clone(), dt, seed),
            |sketch| TemporalClusterSizeEstimate::from(&sketch),
        )
    }

    fn in_cluster_size_estimates<A: TemporalAdjacency<E>>(
        &self,
        adj: &A,
        dt: E::TimeType,
        seed: u64,
    ) -> Vec<(E, TemporalClusterSizeEstimate<E::TimeType>)> {
        let view = ImplicitEventGraph::new(self, adj.clone());
        view.accumulate(
            true,
            || TemporalClusterSketch::new(adj.clone(), dt, seed),
            |sketch| TemporalClusterSizeEstimate::from(&sketch),
        )
    }

    fn is_reachable<A: TemporalAdjacency<E>>(
        &self,
        adj: &A,
        source: &E::VertexType,
        start: E::TimeType,
        destination: &E::VertexType,
        end: E::TimeType,
    ) -> bool {
        if end.time_cmp(&start) == core::cmp::Ordering::Less {
            return false;
        }
        self.out_cluster_from(adj, source.clone(), start).covers(destination, end)
    }

    fn static_projection(&self) -> Network<E::StaticProjectionType> {
        Network::new_with_vertices(
            self.edges_cause().iter().map(TemporalEdge::static_projection),
            self.vertices().iter().cloned(),
        )
    }

    fn link_timeline(&self, link: &E::StaticProjectionType) -> Vec<E> {
        // Anchor the scan on the mutator vertex with the fewest out-edges.
        let anchor = link
            .mutator_verts()
            .into_iter()
            .min_by_key(|vert| self.out_edges(vert).len());
        let Some(anchor) = anchor else {
            return Vec::new();
        };

        self.out_edges(&anchor)
            .iter()
            .filter(|event| event.static_projection() == *link)
            .cloned()
            .collect()
    }

    fn link_timelines(&self) -> Vec<(E::StaticProjectionType, Vec<E>)> {
        let mut timelines: HashMap<E::StaticProjectionType, Vec<E>> = HashMap::new();
        for event in self.edges_cause() {
            timelines.entry(event.static_projection()).or_default().push(event.clone());
        }
        timelines.into_iter().collect()
    }
}
