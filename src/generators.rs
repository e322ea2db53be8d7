//! Submodule providing deterministic graph generators over
//! integer-convertible vertex types.

use crate::errors::VertexTypeTooSmallError;
use crate::impls::{DirectedEdge, DirectedNetwork, UndirectedEdge, UndirectedNetwork};
use crate::traits::IntegerVertex;

/// Converts the labels `0..size` into the vertex type.
fn labels<V: IntegerVertex>(size: usize) -> Result<Vec<V>, VertexTypeTooSmallError> {
    (0..size)
        .map(|label| V::try_from(label).map_err(|_| VertexTypeTooSmallError { required: size }))
        .collect()
}

/// The path graph over `size` vertices: `0 - 1 - ... - size-1`.
///
/// # Errors
///
/// * [`VertexTypeTooSmallError`] if the vertex type cannot label `size`
///   distinct vertices.
pub fn path_graph<V: IntegerVertex>(size: usize) -> Result<UndirectedNetwork<V>, VertexTypeTooSmallError> {
    let verts = labels::<V>(size)?;
    Ok(UndirectedNetwork::new_with_vertices(
        verts.windows(2).map(|pair| UndirectedEdge::new(pair[0], pair[1])),
        verts.iter().copied(),
    ))
}

/// The cycle graph over `size` vertices: the path graph closed into a
/// ring.
///
/// # Errors
///
/// * [`VertexTypeTooSmallError`] if the vertex type cannot label `size`
///   distinct vertices.
pub fn cycle_graph<V: IntegerVertex>(size: usize) -> Result<UndirectedNetwork<V>, VertexTypeTooSmallError> {
    let verts = labels::<V>(size)?;
    let closing = match (verts.first(), verts.last()) {
        (Some(&first), Some(&last)) if size > 2 => Some(UndirectedEdge::new(last, first)),
        _ => None,
    };
    Ok(UndirectedNetwork::new_with_vertices(
        verts.windows(2).map(|pair| UndirectedEdge::new(pair[0], pair[1])).chain(closing),
        verts.iter().copied(),
    ))
}

/// The complete graph over `size` vertices: every unordered pair of
/// distinct vertices is an edge.
///
/// # Errors
///
/// * [`VertexTypeTooSmallError`] if the vertex type cannot label `size`
///   distinct vertices.
pub fn complete_graph<V: IntegerVertex>(
    size: usize,
) -> Result<UndirectedNetwork<V>, VertexTypeTooSmallError> {
    let verts = labels::<V>(size)?;
    let edges = verts.iter().enumerate().flat_map(|(position, &first)| {
        verts[position + 1..].iter().map(move |&second| UndirectedEdge::new(first, second))
    });
    Ok(UndirectedNetwork::new_with_vertices(edges, verts.iter().copied()))
}

/// The complete directed graph over `size` vertices: every ordered pair of
/// distinct vertices is an edge.
///
/// # Errors
///
/// * [`VertexTypeTooSmallError`] if the vertex type cannot label `size`
///   distinct vertices.
pub fn complete_directed_graph<V: IntegerVertex>(
    size: usize,
) -> Result<DirectedNetwork<V>, VertexTypeTooSmallError> {
    let verts = labels::<V>(size)?;
    let edges = verts.iter().flat_map(|&tail| {
        verts
            .iter()
            .filter(move |&&head| head != tail)
            .map(move |&head| DirectedEdge::new(tail, head))
    });
    Ok(DirectedNetwork::new_with_vertices(edges, verts.iter().copied()))
}
