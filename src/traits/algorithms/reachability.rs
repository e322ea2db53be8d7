//! Submodule providing static in-/out-component analysis and single-source
//! reachability over directed static networks.
//!
//! The all-pairs computations dispatch on acyclicity. Acyclic networks take
//! a frontier-bounded sweep in reverse topological order, releasing every
//! component as soon as its outstanding-predecessor count reaches zero.
//! Cyclic networks fall back to an iterative Tarjan strongly-connected
//! component pass: the DFS stack is an explicit vector (event graphs and
//! deep networks would overflow a recursive one), and every vertex of one
//! strongly connected component shares the same component value.

use hashbrown::HashMap;

use crate::impls::{Accumulator, Component, ComponentSketch, Network};
use crate::traits::algorithms::bfs::{BreadthFirstSearch, TraversalDirection};
use crate::traits::{DirectedStaticEdge, TopologicalSort};

/// Trait providing in-/out-component analysis, shortest-path lengths and
/// reachability checks over directed static networks.
pub trait Reachability<E: DirectedStaticEdge> {
    /// The vertices reachable from `root` by forward traversal, including
    /// `root` itself.
    fn out_component(&self, root: &E::VertexType, size_hint: usize) -> Component<E::VertexType>;

    /// The vertices that can reach `root` by forward traversal, including
    /// `root` itself.
    fn in_component(&self, root: &E::VertexType, size_hint: usize) -> Component<E::VertexType>;

    /// For every vertex, its out-component.
    ///
    /// # Examples
    ///
    /// ```
    /// use temporal_networks::impls::{DirectedEdge, Network};
    /// use temporal_networks::traits::Reachability;
    ///
    /// let net = Network::new([DirectedEdge::new(1, 2), DirectedEdge::new(2, 3)]);
    /// let components = net.out_components();
    /// let (_, component) = components.iter().find(|(vert, _)| *vert == 1).unwrap();
    /// assert_eq!(component.len(), 3);
    /// ```
    fn out_components(&self) -> Vec<(E::VertexType, Component<E::VertexType>)>;

    /// For every vertex, its in-component.
    fn in_components(&self) -> Vec<(E::VertexType, Component<E::VertexType>)>;

    /// For every vertex, the size of its out-component. Unlike
    /// [`Reachability::out_components`], finished components are not
    /// retained, so peak memory stays proportional to the traversal
    /// frontier on acyclic networks.
    fn out_component_sizes(&self) -> Vec<(E::VertexType, usize)>;

    /// For every vertex, the size of its in-component.
    fn in_component_sizes(&self) -> Vec<(E::VertexType, usize)>;

    /// For every vertex, a HyperLogLog estimate of the size of its
    /// out-component, within the sketch's standard relative error.
    fn out_component_size_estimates(&self, seed: u64) -> Vec<(E::VertexType, f64)>;

    /// For every vertex, a HyperLogLog estimate of the size of its
    /// in-component.
    fn in_component_size_estimates(&self, seed: u64) -> Vec<(E::VertexType, f64)>;

    /// Whether `destination` can be reached from `source` by forward
    /// traversal. Short-circuits as soon as `destination` is discovered.
    fn is_reachable(&self, source: &E::VertexType, destination: &E::VertexType) -> bool;

    /// BFS shortest-path lengths from `vert` to every vertex reachable from
    /// it.
    fn shortest_path_lengths_from(&self, vert: &E::VertexType)
    -> HashMap<E::VertexType, usize>;

    /// BFS shortest-path lengths to `vert` from every vertex that can reach
    /// it.
    fn shortest_path_lengths_to(&self, vert: &E::VertexType) -> HashMap<E::VertexType, usize>;
}

impl<E: DirectedStaticEdge> Reachability<E> for Network<E> {
    fn out_component(&self, root: &E::VertexType, size_hint: usize) -> Component<E::VertexType> {
        self.breadth_first_search(root, TraversalDirection::Forward, size_hint, |_, _, _| true)
    }

    fn in_component(&self, root: &E::VertexType, size_hint: usize) -> Component<E::VertexType> {
        self.breadth_first_search(root, TraversalDirection::Reverse, size_hint, |_, _, _| true)
    }

    fn out_components(&self) -> Vec<(E::VertexType, Component<E::VertexType>)> {
        accumulate(self, false, Component::new, |component| component)
    }

    fn in_components(&self) -> Vec<(E::VertexType, Component<E::VertexType>)> {
        accumulate(self, true, Component::new, |component| component)
    }

    fn out_component_sizes(&self) -> Vec<(E::VertexType, usize)> {
        accumulate(self, false, Component::new, |component| component.len())
    }

    fn in_component_sizes(&self) -> Vec<(E::VertexType, usize)> {
        accumulate(self, true, Component::new, |component| component.len())
    }

    fn out_component_size_estimates(&self, seed: u64) -> Vec<(E::VertexType, f64)> {
        accumulate(
            self,
            false,
            || ComponentSketch::new(seed),
            |sketch| sketch.size_estimate(),
        )
    }

    fn in_component_size_estimates(&self, seed: u64) -> Vec<(E::VertexType, f64)> {
        accumulate(
            self,
            true,
            || ComponentSketch::new(seed),
            |sketch| sketch.size_estimate(),
        )
    }

    fn is_reachable(&self, source: &E::VertexType, destination: &E::VertexType) -> bool {
        self.breadth_first_search(source, TraversalDirection::Forward, 0, |_, _, to| {
            to != destination
        })
        .contains(destination)
    }

    fn shortest_path_lengths_from(
        &self,
        vert: &E::VertexType,
    ) -> HashMap<E::VertexType, usize> {
        let mut lengths = HashMap::from([(vert.clone(), 0)]);
        self.breadth_first_search(vert, TraversalDirection::Forward, 0, |from, _, to| {
            let next = lengths[from] + 1;
            lengths.entry(to.clone()).or_insert(next);
            true
        });
        lengths
    }

    fn shortest_path_lengths_to(&self, vert: &E::VertexType) -> HashMap<E::VertexType, usize> {
        let mut lengths = HashMap::from([(vert.clone(), 0)]);
        self.breadth_first_search(vert, TraversalDirection::Reverse, 0, |from, _, to| {
            let next = lengths[from] + 1;
            lengths.entry(to.clone()).or_insert(next);
            true
        });
        lengths
    }
}

/// Downstream neighbours of `vert` in the traversal direction.
fn downstream<E: DirectedStaticEdge>(
    net: &Network<E>,
    vert: &E::VertexType,
    reverse: bool,
) -> Vec<E::VertexType> {
    if reverse { net.predecessors(vert) } else { net.successors(vert) }
}

/// For every vertex, the accumulated container over its reachable set,
/// dispatching between the acyclic sweep and the Tarjan fallback.
fn accumulate<E, C, R>(
    net: &Network<E>,
    reverse: bool,
    make: impl Fn() -> C,
    finalise: impl Fn(C) -> R,
) -> Vec<(E::VertexType, R)>
where
    E: DirectedStaticEdge,
    C: Accumulator<E::VertexType>,
{
    match net.try_topological_order() {
        Some(topological) => accumulate_dag(net, reverse, topological, make, finalise),
        None => accumulate_cyclic(net, reverse, make, finalise),
    }
}

/// The frontier-bounded sweep over an acyclic network: iterate in reverse
/// topological order of the traversal direction, merge each vertex's
/// container into its upstream ones, and release every container once its
/// outstanding-predecessor count reaches zero.
fn accumulate_dag<E, C, R>(
    net: &Network<E>,
    reverse: bool,
    mut topological: Vec<E::VertexType>,
    make: impl Fn() -> C,
    finalise: impl Fn(C) -> R,
) -> Vec<(E::VertexType, R)>
where
    E: DirectedStaticEdge,
    C: Accumulator<E::VertexType>,
{
    if !reverse {
        topological.reverse();
    }

    let mut ongoing: HashMap<E::VertexType, C> = HashMap::new();
    let mut pending: HashMap<E::VertexType, usize> = HashMap::new();
    let mut result = Vec::with_capacity(topological.len());

    for vert in topological {
        let next_verts = downstream(net, &vert, reverse);
        let upstream = downstream(net, &vert, !reverse).len();

        let mut component = make();
        component.add(&vert);
        for next in &next_verts {
            let next_component =
                ongoing.get(next).expect("downstream vertices are processed first");
            component.unite(next_component);

            let count = pending.get_mut(next).expect("unfinished vertices have a count");
            *count -= 1;
            if *count == 0 {
                pending.remove(next);
                let finished =
                    ongoing.remove(next).expect("unfinished vertices have a container");
                result.push((next.clone(), finalise(finished)));
            }
        }

        if upstream == 0 {
            result.push((vert, finalise(component)));
        } else {
            pending.insert(vert.clone(), upstream);
            ongoing.insert(vert, component);
        }
    }

    result
}

/// The general fallback: an iterative Tarjan pass emits the strongly
/// connected components in reverse topological order of the condensation,
/// so each component's container is the union of its own vertices and the
/// containers of the components it points into, all of which are already
/// finished when it is emitted.
fn accumulate_cyclic<E, C, R>(
    net: &Network<E>,
    reverse: bool,
    make: impl Fn() -> C,
    finalise: impl Fn(C) -> R,
) -> Vec<(E::VertexType, R)>
where
    E: DirectedStaticEdge,
    C: Accumulator<E::VertexType>,
{
    let sccs = tarjan_sccs(net, reverse);

    let mut scc_of: HashMap<&E::VertexType, usize> = HashMap::new();
    for (index, scc) in sccs.iter().enumerate() {
        for vert in scc {
            scc_of.insert(vert, index);
        }
    }

    let mut containers: Vec<C> = Vec::with_capacity(sccs.len());
    for (index, scc) in sccs.iter().enumerate() {
        let mut container = make();
        for vert in scc {
            container.add(vert);
        }
        for vert in scc {
            for next in downstream(net, vert, reverse) {
                let next_scc = scc_of[&next];
                if next_scc != index {
                    container.unite(&containers[next_scc]);
                }
            }
        }
        containers.push(container);
    }

    net.vertices()
        .iter()
        .map(|vert| (vert.clone(), finalise(containers[scc_of[vert]].clone())))
        .collect()
}

/// Iterative Tarjan strongly-connected components, emitted in reverse
/// topological order of the condensation.
fn tarjan_sccs<E: DirectedStaticEdge>(
    net: &Network<E>,
    reverse: bool,
) -> Vec<Vec<E::VertexType>> {
    struct Frame<V> {
        vert: V,
        neighbours: Vec<V>,
        next: usize,
    }

    let mut preorder: HashMap<E::VertexType, usize> = HashMap::new();
    let mut lowlink: HashMap<E::VertexType, usize> = HashMap::new();
    let mut assigned: HashMap<E::VertexType, bool> = HashMap::new();
    let mut scc_stack: Vec<E::VertexType> = Vec::new();
    let mut sccs: Vec<Vec<E::VertexType>> = Vec::new();
    let mut counter = 0usize;

    for source in net.vertices() {
        if preorder.contains_key(source) {
            continue;
        }

        let mut dfs_stack = vec![Frame {
            vert: source.clone(),
            neighbours: downstream(net, source, reverse),
            next: 0,
        }];
        preorder.insert(source.clone(), counter);
        lowlink.insert(source.clone(), counter);
        counter += 1;
        scc_stack.push(source.clone());

        while let Some(frame) = dfs_stack.last_mut() {
            if frame.next < frame.neighbours.len() {
                let next = frame.neighbours[frame.next].clone();
                frame.next += 1;

                if !preorder.contains_key(&next) {
                    preorder.insert(next.clone(), counter);
                    lowlink.insert(next.clone(), counter);
                    counter += 1;
                    scc_stack.push(next.clone());
                    let neighbours = downstream(net, &next, reverse);
                    dfs_stack.push(Frame { vert: next, neighbours, next: 0 });
                } else if !assigned.get(&next).copied().unwrap_or(false) {
                    let low = lowlink[&frame.vert].min(preorder[&next]);
                    lowlink.insert(frame.vert.clone(), low);
                }
            } else {
                let frame = dfs_stack.pop().expect("the loop condition saw a frame");
                if let Some(parent) = dfs_stack.last() {
                    let low = lowlink[&parent.vert].min(lowlink[&frame.vert]);
                    lowlink.insert(parent.vert.clone(), low);
                }
                if lowlink[&frame.vert] == preorder[&frame.vert] {
                    let mut scc = Vec::new();
                    loop {
                        let member =
                            scc_stack.pop().expect("the root of the component is on the stack");
                        assigned.insert(member.clone(), true);
                        let done = member == frame.vert;
                        scc.push(member);
                        if done {
                            break;
                        }
                    }
                    sccs.push(scc);
                }
            }
        }
    }

    sccs
}
