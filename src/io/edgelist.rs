//! Submodule providing the whitespace-separated edgelist reader and writer
//! for dyadic networks.
//!
//! One row encodes one edge, with no header:
//!
//! | Edge variant | Row |
//! |---|---|
//! | undirected | `v1 v2` |
//! | directed | `tail head` |
//! | undirected temporal | `v1 v2 time` |
//! | directed temporal | `tail head time` |
//! | directed delayed temporal | `tail head cause_time effect_time` |
//!
//! Timestamps are written through `Display`, which for the float time types
//! round-trips the value exactly.

use std::fmt::Display;
use std::io::{BufRead, Write};
use std::str::FromStr;

use crate::errors::{EdgeConstructionError, EdgelistError};
use crate::impls::{
    DirectedDelayedTemporalEdge, DirectedEdge, DirectedTemporalEdge, Network, UndirectedEdge,
    UndirectedTemporalEdge,
};
use crate::traits::{NetworkEdge, Time, Vertex};

/// Trait for the dyadic edge variants with an edgelist row form.
pub trait EdgelistEdge: NetworkEdge {
    /// Parses an edge from the fields of a row; `None` when a field does
    /// not parse, `Err` when the parsed fields are inconsistent.
    ///
    /// # Errors
    ///
    /// * [`EdgeConstructionError`] if the fields parse but violate a
    ///   constructor invariant, such as a delayed edge received before it
    ///   was sent.
    fn from_fields(fields: &[&str]) -> Result<Option<Self>, EdgeConstructionError>;

    /// Writes the edge as one row, without the trailing newline.
    ///
    /// # Errors
    ///
    /// * Any error of the underlying writer.
    fn write_row<W: Write>(&self, out: &mut W) -> std::io::Result<()>;
}

impl<V: Vertex + FromStr + Display> EdgelistEdge for UndirectedEdge<V> {
    fn from_fields(fields: &[&str]) -> Result<Option<Self>, EdgeConstructionError> {
        let [v1, v2] = fields else { return Ok(None) };
        match (v1.parse(), v2.parse()) {
            (Ok(v1), Ok(v2)) => Ok(Some(Self::new(v1, v2))),
            _ => Ok(None),
        }
    }

    fn write_row<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        write!(out, "{self}")
    }
}

impl<V: Vertex + FromStr + Display> EdgelistEdge for DirectedEdge<V> {
    fn from_fields(fields: &[&str]) -> Result<Option<Self>, EdgeConstructionError> {
        let [tail, head] = fields else { return Ok(None) };
        match (tail.parse(), head.parse()) {
            (Ok(tail), Ok(head)) => Ok(Some(Self::new(tail, head))),
            _ => Ok(None),
        }
    }

    fn write_row<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        write!(out, "{self}")
    }
}

impl<V, T> EdgelistEdge for UndirectedTemporalEdge<V, T>
where
    V: Vertex + FromStr + Display,
    T: Time,
{
    fn from_fields(fields: &[&str]) -> Result<Option<Self>, EdgeConstructionError> {
        let [v1, v2, time] = fields else { return Ok(None) };
        match (v1.parse(), v2.parse(), time.parse()) {
            (Ok(v1), Ok(v2), Ok(time)) => Ok(Some(Self::new(v1, v2, time))),
            _ => Ok(None),
        }
    }

    fn write_row<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        write!(out, "{self}")
    }
}

impl<V, T> EdgelistEdge for DirectedTemporalEdge<V, T>
where
    V: Vertex + FromStr + Display,
    T: Time,
{
    fn from_fields(fields: &[&str]) -> Result<Option<Self>, EdgeConstructionError> {
        let [tail, head, time] = fields else { return Ok(None) };
        match (tail.parse(), head.parse(), time.parse()) {
            (Ok(tail), Ok(head), Ok(time)) => Ok(Some(Self::new(tail, head, time))),
            _ => Ok(None),
        }
    }

    fn write_row<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        write!(out, "{self}")
    }
}

impl<V, T> EdgelistEdge for DirectedDelayedTemporalEdge<V, T>
where
    V: Vertex + FromStr + Display,
    T: Time,
{
    fn from_fields(fields: &[&str]) -> Result<Option<Self>, EdgeConstructionError> {
        let [tail, head, cause, effect] = fields else { return Ok(None) };
        match (tail.parse(), head.parse(), cause.parse(), effect.parse()) {
            (Ok(tail), Ok(head), Ok(cause), Ok(effect)) => {
                Self::new(tail, head, cause, effect).map(Some)
            }
            _ => Ok(None),
        }
    }

    fn write_row<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        write!(out, "{self}")
    }
}

/// Reads a network from a whitespace-separated edgelist.
///
/// # Errors
///
/// * [`EdgelistError`] if the reader fails or a non-blank row does not
///   parse as an edge of the requested variant.
pub fn read_edgelist<E: EdgelistEdge>(reader: impl BufRead) -> Result<Network<E>, EdgelistError> {
    read_edgelist_with_vertices(reader, core::iter::empty())
}

/// Reads a network from a whitespace-separated edgelist, supplemented with
/// extra vertices that may have no incident edges.
///
/// # Errors
///
/// * [`EdgelistError`] if the reader fails or a non-blank row does not
///   parse as an edge of the requested variant.
pub fn read_edgelist_with_vertices<E: EdgelistEdge>(
    reader: impl BufRead,
    extra_verts: impl IntoIterator<Item = E::VertexType>,
) -> Result<Network<E>, EdgelistError> {
    let mut edges = Vec::new();
    for (index, row) in reader.lines().enumerate() {
        let row = row?;
        let fields: Vec<&str> = row.split_whitespace().collect();
        if fields.is_empty() {
            continue;
        }
        match E::from_fields(&fields) {
            Ok(Some(edge)) => edges.push(edge),
            Ok(None) => {
                return Err(EdgelistError::Parse { line: index + 1, content: row });
            }
            Err(source) => {
                return Err(EdgelistError::Edge { line: index + 1, source });
            }
        }
    }
    Ok(Network::new_with_vertices(edges, extra_verts))
}

/// Writes the network as a whitespace-separated edgelist, one edge per row
/// in cause order.
///
/// # Errors
///
/// * [`EdgelistError`] if the writer fails.
pub fn write_edgelist<E: EdgelistEdge>(
    net: &Network<E>,
    mut writer: impl Write,
) -> Result<(), EdgelistError> {
    for edge in net.edges() {
        edge.write_row(&mut writer)?;
        writeln!(writer)?;
    }
    Ok(())
}
