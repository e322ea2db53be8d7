//! Submodule providing degree observables and the Erdős–Gallai and
//! Kleitman–Wang degree-sequence realisability tests.

use num_traits::PrimInt;

use crate::impls::Network;
use crate::traits::NetworkEdge;

/// Trait providing the degree sequences of a network and of its edges.
pub trait DegreeSequences<E: NetworkEdge> {
    /// For every vertex in sorted order, the number of edges mutating it.
    fn in_degree_sequence(&self) -> Vec<usize>;

    /// For every vertex in sorted order, the number of edges it mutates
    /// through.
    fn out_degree_sequence(&self) -> Vec<usize>;

    /// For every vertex in sorted order, the number of edges it
    /// participates in. For undirected networks this is the plain degree
    /// sequence.
    fn incident_degree_sequence(&self) -> Vec<usize>;

    /// For every vertex in sorted order, its `(in, out)` degree pair.
    fn in_out_degree_pair_sequence(&self) -> Vec<(usize, usize)>;

    /// For every edge in cause order, the size of its mutator vertex set.
    fn edge_in_degree_sequence(&self) -> Vec<usize>;

    /// For every edge in cause order, the size of its mutated vertex set.
    fn edge_out_degree_sequence(&self) -> Vec<usize>;

    /// For every edge in cause order, the size of its incident vertex set,
    /// i.e. its order.
    fn edge_incident_degree_sequence(&self) -> Vec<usize>;

    /// For every edge in cause order, its `(in, out)` degree pair.
    fn edge_in_out_degree_pair_sequence(&self) -> Vec<(usize, usize)>;
}

impl<E: NetworkEdge> DegreeSequences<E> for Network<E> {
    fn in_degree_sequence(&self) -> Vec<usize> {
        self.vertices().iter().map(|vert| self.in_degree(vert)).collect()
    }

    fn out_degree_sequence(&self) -> Vec<usize> {
        self.vertices().iter().map(|vert| self.out_degree(vert)).collect()
    }

    fn incident_degree_sequence(&self) -> Vec<usize> {
        self.vertices().iter().map(|vert| self.degree(vert)).collect()
    }

    fn in_out_degree_pair_sequence(&self) -> Vec<(usize, usize)> {
        self.vertices()
            .iter()
            .map(|vert| (self.in_degree(vert), self.out_degree(vert)))
            .collect()
    }

    fn edge_in_degree_sequence(&self) -> Vec<usize> {
        self.edges().iter().map(|edge| edge.mutator_verts().len()).collect()
    }

    fn edge_out_degree_sequence(&self) -> Vec<usize> {
        self.edges().iter().map(|edge| edge.mutated_verts().len()).collect()
    }

    fn edge_incident_degree_sequence(&self) -> Vec<usize> {
        self.edges().iter().map(|edge| edge.incident_verts().len()).collect()
    }

    fn edge_in_out_degree_pair_sequence(&self) -> Vec<(usize, usize)> {
        self.edges()
            .iter()
            .map(|edge| (edge.mutator_verts().len(), edge.mutated_verts().len()))
            .collect()
    }
}

/// Checks whether the sequence can be the degree sequence of a simple
/// undirected graph (no multi-edges or loops), by the Erdős–Gallai
/// criterion with the constant-time early accept of Kráľ and Kráľ.
///
/// Rejects on negative entries, odd degree sum or a maximum degree no
/// smaller than the sequence length; otherwise a degree-histogram
/// truncation of the Erdős–Gallai summation decides. The empty sequence is
/// graphic.
///
/// # Examples
///
/// ```
/// use temporal_networks::traits::is_graphic;
///
/// assert!(is_graphic(&[5, 3, 3, 3, 2, 2]));
/// assert!(!is_graphic(&[4, 3, 3, 2, 2, 1]));
/// ```
pub fn is_graphic<D: PrimInt>(sequence: &[D]) -> bool {
    let length = sequence.len();
    let mut total: usize = 0;
    let mut max_degree: usize = 0;
    let mut min_degree: usize = usize::MAX;

    for &degree in sequence {
        if degree < D::zero() {
            return false;
        }
        let degree = degree.to_usize().expect("non-negative degrees fit a usize");
        total += degree;
        max_degree = max_degree.max(degree);
        min_degree = min_degree.min(degree);
    }

    if length == 0 {
        return true;
    }

    if max_degree >= length || total % 2 != 0 || total > length * (length - 1) {
        return false;
    }

    // Kráľ-Kráľ early accept.
    if 4 * length * min_degree >= (max_degree + min_degree + 1) * (max_degree + min_degree + 1) {
        return true;
    }

    let mut histogram = vec![0usize; max_degree + 1];
    for &degree in sequence {
        histogram[degree.to_usize().expect("checked above")] += 1;
    }

    // Truncated Erdős–Gallai summation over runs of equal degree.
    let mut considered = 0usize;
    let mut partial_degree_sum = 0usize;
    let mut partial_count_sum = 0usize;
    let mut partial_weighted_sum = 0usize;
    for degree in (min_degree..=max_degree).rev() {
        if degree < considered + 1 {
            return true;
        }
        if histogram[degree] == 0 {
            continue;
        }

        let mut run = histogram[degree];
        if degree < considered + run {
            run = degree - considered;
        }

        partial_degree_sum += run * degree;
        for offset in 0..run {
            partial_count_sum += histogram[considered + offset];
            partial_weighted_sum += (considered + offset) * histogram[considered + offset];
        }

        considered += run;
        // The Erdős–Gallai bound, rearranged so every term adds.
        if partial_degree_sum + considered * partial_count_sum
            > considered * (length - 1) + partial_weighted_sum
        {
            return false;
        }
    }

    true
}

/// Checks whether the sequence of `(in, out)` degree pairs can be the
/// degree-pair sequence of a simple directed graph (no multi-edges or
/// loops), by the Kleitman–Wang peeling algorithm.
///
/// Two heaps hold the unfinished stubs, split by whether any in-degree
/// remains; the vertex with the lexicographically largest `(out, in)` pair
/// is peeled repeatedly, decrementing the in-degrees of the largest
/// remaining stubs. Rejects on negative entries, mismatched in/out sums or
/// stub exhaustion.
///
/// # Examples
///
/// ```
/// use temporal_networks::traits::is_digraphic;
///
/// assert!(is_digraphic(&[(1, 0), (2, 1), (0, 1), (1, 1), (0, 1)]));
/// assert!(!is_digraphic(&[(1, 0), (2, 1), (1, 1), (1, 1), (0, 1)]));
/// ```
pub fn is_digraphic<D: PrimInt>(sequence: &[(D, D)]) -> bool {
    use std::collections::BinaryHeap;

    let mut sum_in: usize = 0;
    let mut sum_out: usize = 0;
    let mut max_in: usize = 0;

    let mut zero_heap: BinaryHeap<(usize, usize)> = BinaryHeap::new();
    let mut nonzero_heap: BinaryHeap<(usize, usize)> = BinaryHeap::new();

    for &(in_degree, out_degree) in sequence {
        if in_degree < D::zero() || out_degree < D::zero() {
            return false;
        }
        let in_degree = in_degree.to_usize().expect("non-negative degrees fit a usize");
        let out_degree = out_degree.to_usize().expect("non-negative degrees fit a usize");

        sum_in += in_degree;
        sum_out += out_degree;
        max_in = max_in.max(in_degree);

        if in_degree == 0 {
            zero_heap.push((out_degree, in_degree));
        } else {
            nonzero_heap.push((out_degree, in_degree));
        }
    }

    if sum_in != sum_out {
        return false;
    }

    let mut modified_stubs = Vec::with_capacity(max_in);
    while let Some((out_degree, in_degree)) = nonzero_heap.pop() {
        if in_degree > nonzero_heap.len() + zero_heap.len() {
            return false;
        }

        for _ in 0..in_degree {
            let take_zero = match (zero_heap.peek(), nonzero_heap.peek()) {
                (Some(zero), Some(nonzero)) => nonzero < zero,
                (Some(_), None) => true,
                _ => false,
            };
            let stub = if take_zero { zero_heap.pop() } else { nonzero_heap.pop() };
            let Some((stub_out, stub_in)) = stub else {
                return false;
            };

            if stub_out == 0 {
                return false;
            } else if stub_out > 1 || stub_in > 0 {
                modified_stubs.push((stub_out - 1, stub_in));
            }
        }

        while let Some((stub_out, stub_in)) = modified_stubs.pop() {
            if stub_in > 0 {
                nonzero_heap.push((stub_out, stub_in));
            } else {
                zero_heap.push((stub_out, stub_in));
            }
        }

        if out_degree > 0 {
            zero_heap.push((out_degree, 0));
        }
    }

    true
}
