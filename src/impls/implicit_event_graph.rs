//! Submodule providing the implicit event graph.
//!
//! The event graph of a temporal network has one node per event and one arc
//! per adjacent event pair. Materialising it is infeasible at scale, so
//! this view generates the successors and predecessors of an event on the
//! fly from the cause- and effect-ordered adjacency lists of the underlying
//! network, under a temporal adjacency policy.
//!
//! Temporal adjacency is strict in time, so the event graph is always
//! acyclic and the cause order of the events is one of its topological
//! orders; the all-events component sweep exploits this by processing
//! events in reverse topological order and releasing every finished
//! component as soon as its outstanding-predecessor count reaches zero.

use core::cmp::Ordering;
use std::collections::VecDeque;

use hashbrown::HashMap;

use crate::impls::disjoint_set::DisjointSet;
use crate::impls::{Accumulator, Component, Network};
use crate::traits::{TemporalAdjacency, TemporalEdge, Time};

/// A view of the event graph of a temporal network under a temporal
/// adjacency policy, generating event neighbourhoods lazily.
#[derive(Debug, Clone)]
pub struct ImplicitEventGraph<'net, E: TemporalEdge, A: TemporalAdjacency<E>> {
    temp: &'net Network<E>,
    adj: A,
}

impl<'net, E: TemporalEdge, A: TemporalAdjacency<E>> ImplicitEventGraph<'net, E, A> {
    /// Creates the implicit event graph of `temp` under the adjacency
    /// policy `adj`.
    pub fn new(temp: &'net Network<E>, adj: A) -> Self {
        Self { temp, adj }
    }

    /// The underlying temporal network.
    #[must_use]
    pub fn network(&self) -> &'net Network<E> {
        self.temp
    }

    /// The temporal adjacency policy of the view.
    #[must_use]
    pub fn adjacency(&self) -> &A {
        &self.adj
    }

    /// The events of the underlying network, sorted in cause order.
    #[must_use]
    pub fn events_cause(&self) -> &'net [E] {
        self.temp.edges_cause()
    }

    /// The events of the underlying network, sorted in effect order.
    #[must_use]
    pub fn events_effect(&self) -> &'net [E] {
        self.temp.edges_effect()
    }

    /// The events adjacent from `event`: those starting strictly after
    /// `event` took effect, statically adjacent to it, within the linger
    /// the policy assigns. With `just_first`, only the earliest successor
    /// per mutated vertex is returned.
    #[must_use]
    pub fn successors(&self, event: &E, just_first: bool) -> Vec<E> {
        let mut successors = Vec::new();
        for vert in event.mutated_verts() {
            self.successors_vert(event, &vert, just_first, &mut successors);
        }
        successors.sort_unstable();
        successors.dedup();
        successors
    }

    /// The events adjacent to `event`, i.e. the events `event` is a
    /// successor of. With `just_first`, only the latest predecessor per
    /// mutator vertex is returned.
    #[must_use]
    pub fn predecessors(&self, event: &E, just_first: bool) -> Vec<E> {
        let mut predecessors = Vec::new();
        for vert in event.mutator_verts() {
            self.predecessors_vert(event, &vert, just_first, &mut predecessors);
        }
        predecessors.sort_unstable();
        predecessors.dedup();
        predecessors
    }

    /// The union of the successors and predecessors of `event`.
    #[must_use]
    pub fn neighbours(&self, event: &E, just_first: bool) -> Vec<E> {
        let mut neighbours = self.successors(event, just_first);
        neighbours.extend(self.predecessors(event, just_first));
        neighbours.sort_unstable();
        neighbours.dedup();
        neighbours
    }

    /// Walks the cause-ordered out-edges of `vert` strictly past the effect
    /// time of `event`, stopping at the end of the linger window.
    fn successors_vert(&self, event: &E, vert: &E::VertexType, just_first: bool, out: &mut Vec<E>) {
        let out_list = self.temp.out_edges(vert);
        let effect = event.effect_time();
        let start = out_list
            .partition_point(|next| next.cause_time().time_cmp(&effect) != Ordering::Greater);
        // The linger window is exclusive at its far edge: an effect
        // transmitted at `effect` no longer lingers at `effect + linger`.
        let cutoff = if self.adj.infinite_linger(event, vert) {
            E::TimeType::maximum()
        } else {
            effect.saturating_add(self.adj.linger(event, vert))
        };
        for next in &out_list[start..] {
            if next.cause_time().time_cmp(&cutoff) != Ordering::Less {
                break;
            }
            out.push(next.clone());
            if just_first {
                break;
            }
        }
    }

    /// Walks the effect-ordered in-edges of `vert` backwards from the cause
    /// time of `event`. The policy's `maximum_linger` bounds the walk; the
    /// per-event linger decides membership.
    fn predecessors_vert(
        &self,
        event: &E,
        vert: &E::VertexType,
        just_first: bool,
        out: &mut Vec<E>,
    ) {
        let in_list = self.temp.in_edges(vert);
        let cause = event.cause_time();
        let end = in_list
            .partition_point(|prev| prev.effect_time().time_cmp(&cause) == Ordering::Less);
        let max_linger = self.adj.maximum_linger(vert);
        for prev in in_list[..end].iter().rev() {
            let effect = prev.effect_time();
            if cause.time_cmp(&effect.saturating_add(max_linger)) != Ordering::Less {
                break;
            }
            let reach = if self.adj.infinite_linger(prev, vert) {
                E::TimeType::maximum()
            } else {
                effect.saturating_add(self.adj.linger(prev, vert))
            };
            if cause.time_cmp(&reach) == Ordering::Less {
                out.push(prev.clone());
                if just_first {
                    break;
                }
            }
        }
    }

    /// The events forward-reachable from `root` (including `root` itself).
    #[must_use]
    pub fn out_component(&self, root: &E) -> Component<E> {
        self.bfs_component(root, false)
    }

    /// The events that can reach `root` (including `root` itself).
    #[must_use]
    pub fn in_component(&self, root: &E) -> Component<E> {
        self.bfs_component(root, true)
    }

    fn bfs_component(&self, root: &E, reverse: bool) -> Component<E> {
        let mut discovered = Component::new();
        discovered.insert(root.clone());
        let mut queue = VecDeque::from([root.clone()]);
        while let Some(event) = queue.pop_front() {
            let next_events = if reverse {
                self.predecessors(&event, false)
            } else {
                self.successors(&event, false)
            };
            for next in next_events {
                if !discovered.contains(&next) {
                    discovered.insert(next.clone());
                    queue.push_back(next);
                }
            }
        }
        discovered
    }

    /// For every event, the accumulated container over its forward- (or,
    /// with `reverse`, backward-) reachable events.
    ///
    /// The sweep processes events in reverse topological order of the
    /// traversal direction, merging each event's container into those of
    /// its outstanding upstream events and emitting a container through
    /// `finalise` as soon as no unprocessed event still needs it. Peak
    /// memory is proportional to the topological frontier, not the event
    /// count.
    pub(crate) fn accumulate<C, R>(
        &self,
        reverse: bool,
        make: impl Fn() -> C,
        finalise: impl Fn(C) -> R,
    ) -> Vec<(E, R)>
    where
        C: Accumulator<E>,
    {
        let events = self.events_cause();
        let mut ongoing: HashMap<E, C> = HashMap::new();
        let mut pending: HashMap<E, usize> = HashMap::new();
        let mut result = Vec::with_capacity(events.len());

        let mut sweep = |event: &E| {
            let downstream = if reverse {
                self.predecessors(event, false)
            } else {
                self.successors(event, false)
            };
            let upstream = if reverse {
                self.successors(event, false)
            } else {
                self.predecessors(event, false)
            };

            let mut component = make();
            component.add(event);
            for next in &downstream {
                let next_component =
                    ongoing.get(next).expect("downstream events are processed first");
                component.unite(next_component);

                let count =
                    pending.get_mut(next).expect("unfinished events have a pending count");
                *count -= 1;
                if *count == 0 {
                    pending.remove(next);
                    let finished =
                        ongoing.remove(next).expect("unfinished events have a container");
                    result.push((next.clone(), finalise(finished)));
                }
            }

            if upstream.is_empty() {
                result.push((event.clone(), finalise(component)));
            } else {
                pending.insert(event.clone(), upstream.len());
                ongoing.insert(event.clone(), component);
            }
        };

        if reverse {
            events.iter().for_each(&mut sweep);
        } else {
            events.iter().rev().for_each(&mut sweep);
        }

        result
    }

    /// The weakly connected components of the event graph, i.e. the
    /// components of the event graph with every arc treated as undirected.
    /// With `singletons`, components of a single event are included.
    #[must_use]
    pub fn weakly_connected_components(&self, singletons: bool) -> Vec<Component<E>> {
        let events = self.events_cause();
        let mut disjoint = DisjointSet::new(events.len());
        for (index, event) in events.iter().enumerate() {
            for next in self.successors(event, false) {
                let next_index = events
                    .binary_search(&next)
                    .expect("successors are events of the underlying network");
                disjoint.union(index, next_index);
            }
        }
        disjoint
            .sets(singletons)
            .into_iter()
            .map(|set| set.into_iter().map(|index| events[index].clone()).collect())
            .collect()
    }

    /// The weakly connected component of the event graph containing
    /// `root`.
    #[must_use]
    pub fn weakly_connected_component(&self, root: &E) -> Component<E> {
        let mut discovered = Component::new();
        discovered.insert(root.clone());
        let mut queue = VecDeque::from([root.clone()]);
        while let Some(event) = queue.pop_front() {
            for next in self.neighbours(&event, false) {
                if !discovered.contains(&next) {
                    discovered.insert(next.clone());
                    queue.push_back(next);
                }
            }
        }
        discovered
    }
}
