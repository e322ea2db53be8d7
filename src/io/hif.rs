//! Submodule providing the HIF (Hypergraph Interchange Format) JSON reader
//! and writer for hypergraph networks.
//!
//! A HIF document declares a `network-type`, a list of `incidences` (each
//! tying a `node` to an `edge` identifier, with a `direction` tag for
//! directed hypergraphs) and optionally a list of supplementary `nodes`.
//! Malformed documents fail without producing a partial network.

use std::io::{Read, Write};

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::HifError;
use crate::impls::{DirectedHyperedge, Network, UndirectedHyperedge};
use crate::traits::{NetworkEdge, Vertex};

/// Trait for vertex types with a HIF node representation: strings or
/// integers.
pub trait HifVertex: Vertex {
    /// The JSON type name this vertex type requires, used in mismatch
    /// errors.
    const JSON_TYPE: &'static str;

    /// Parses a vertex from a HIF node value.
    ///
    /// # Errors
    ///
    /// * [`HifError::NodeTypeMismatch`] if the value is not of the declared
    ///   vertex type.
    fn from_value(value: &Value) -> Result<Self, HifError>;

    /// Renders the vertex as a HIF node value.
    fn to_value(&self) -> Value;
}

impl HifVertex for String {
    const JSON_TYPE: &'static str = "string";

    fn from_value(value: &Value) -> Result<Self, HifError> {
        value.as_str().map(str::to_owned).ok_or_else(|| HifError::NodeTypeMismatch {
            expected: Self::JSON_TYPE,
            found: value.to_string(),
        })
    }

    fn to_value(&self) -> Value {
        Value::from(self.as_str())
    }
}

macro_rules! impl_integer_hif_vertex {
    ($($t:ty),*) => {
        $(
            impl HifVertex for $t {
                const JSON_TYPE: &'static str = "integer";

                fn from_value(value: &Value) -> Result<Self, HifError> {
                    value
                        .as_i64()
                        .and_then(|integer| Self::try_from(integer).ok())
                        .ok_or_else(|| HifError::NodeTypeMismatch {
                            expected: Self::JSON_TYPE,
                            found: value.to_string(),
                        })
                }

                fn to_value(&self) -> Value {
                    Value::from(*self)
                }
            }
        )*
    };
}

impl_integer_hif_vertex!(u8, u16, u32, u64, i8, i16, i32, i64);

/// A hyperedge identifier: HIF allows strings and integers.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum EdgeId {
    Str(String),
    Int(i64),
}

impl EdgeId {
    fn from_value(value: &Value) -> Result<Self, HifError> {
        if let Some(text) = value.as_str() {
            Ok(Self::Str(text.to_owned()))
        } else if let Some(integer) = value.as_i64() {
            Ok(Self::Int(integer))
        } else {
            Err(HifError::InvalidEdgeId)
        }
    }
}

#[derive(Debug, Deserialize)]
struct HifDocument {
    #[serde(rename = "network-type")]
    network_type: Option<String>,
    incidences: Option<Vec<HifIncidence>>,
    nodes: Option<Vec<HifNode>>,
}

#[derive(Debug, Deserialize, Serialize)]
struct HifIncidence {
    node: Option<Value>,
    edge: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    direction: Option<String>,
}

#[derive(Debug, Deserialize, Serialize)]
struct HifNode {
    node: Option<Value>,
}

fn parse_document(reader: impl Read, expected: &'static str) -> Result<HifDocument, HifError> {
    let document: HifDocument = serde_json::from_reader(reader)?;
    if let Some(declared) = &document.network_type {
        if declared != expected {
            return Err(HifError::NetworkTypeMismatch { expected, found: declared.clone() });
        }
    }
    Ok(document)
}

fn incidence_parts(incidence: &HifIncidence) -> Result<(&Value, &Value), HifError> {
    let node = incidence.node.as_ref().ok_or(HifError::MissingField("node"))?;
    let edge = incidence.edge.as_ref().ok_or(HifError::MissingField("edge"))?;
    Ok((node, edge))
}

fn supplementary_nodes<V: HifVertex>(document: &HifDocument) -> Result<Vec<V>, HifError> {
    document
        .nodes
        .iter()
        .flatten()
        .map(|entry| {
            let node = entry.node.as_ref().ok_or(HifError::MissingField("node"))?;
            V::from_value(node)
        })
        .collect()
}

/// Reads an undirected hypernetwork from a HIF document.
///
/// # Errors
///
/// * [`HifError`] if the document is not valid JSON, declares a different
///   network type, misses a required field, tags an incidence with a
///   direction, or holds a node of the wrong type.
pub fn read_undirected_hif<V: HifVertex>(
    reader: impl Read,
) -> Result<Network<UndirectedHyperedge<V>>, HifError> {
    let document = parse_document(reader, "undirected")?;
    let incidences = document.incidences.as_ref().ok_or(HifError::MissingField("incidences"))?;

    let mut edge_verts: hashbrown::HashMap<EdgeId, Vec<V>> = hashbrown::HashMap::new();
    let mut nodes: Vec<V> = Vec::new();
    for incidence in incidences {
        let (node, edge) = incidence_parts(incidence)?;
        if incidence.direction.is_some() {
            return Err(HifError::UnexpectedDirection);
        }
        let vert = V::from_value(node)?;
        edge_verts.entry(EdgeId::from_value(edge)?).or_default().push(vert.clone());
        nodes.push(vert);
    }

    nodes.extend(supplementary_nodes(&document)?);

    let edges = edge_verts.into_values().map(UndirectedHyperedge::new);
    Ok(Network::new_with_vertices(edges, nodes))
}

/// Reads a directed hypernetwork from a HIF document. Every incidence must
/// carry a `tail` or `head` direction tag.
///
/// # Errors
///
/// * [`HifError`] if the document is not valid JSON, declares a different
///   network type, misses a required field or direction tag, or holds a
///   node of the wrong type.
pub fn read_directed_hif<V: HifVertex>(
    reader: impl Read,
) -> Result<Network<DirectedHyperedge<V>>, HifError> {
    let document = parse_document(reader, "directed")?;
    let incidences = document.incidences.as_ref().ok_or(HifError::MissingField("incidences"))?;

    let mut edge_verts: hashbrown::HashMap<EdgeId, (Vec<V>, Vec<V>)> = hashbrown::HashMap::new();
    for incidence in incidences {
        let (node, edge) = incidence_parts(incidence)?;
        let vert = V::from_value(node)?;
        let entry = edge_verts.entry(EdgeId::from_value(edge)?).or_default();
        match incidence.direction.as_deref() {
            Some("tail") => entry.0.push(vert),
            Some("head") => entry.1.push(vert),
            Some(other) => return Err(HifError::InvalidDirection(other.to_owned())),
            None => return Err(HifError::MissingDirection),
        }
    }

    let nodes = supplementary_nodes(&document)?;

    let edges = edge_verts.into_values().map(|(tails, heads)| DirectedHyperedge::new(tails, heads));
    Ok(Network::new_with_vertices(edges, nodes))
}

/// Writes an undirected hypernetwork as a HIF document, numbering the
/// edges in cause order.
///
/// # Errors
///
/// * [`HifError`] if the writer fails.
pub fn write_undirected_hif<V: HifVertex>(
    net: &Network<UndirectedHyperedge<V>>,
    writer: impl Write,
) -> Result<(), HifError> {
    let incidences: Vec<HifIncidence> = net
        .edges()
        .iter()
        .enumerate()
        .flat_map(|(index, edge)| {
            edge.incident_verts().into_iter().map(move |vert| HifIncidence {
                node: Some(vert.to_value()),
                edge: Some(Value::from(index)),
                direction: None,
            })
        })
        .collect();
    write_document(net.vertices(), "undirected", incidences, writer)
}

/// Writes a directed hypernetwork as a HIF document, numbering the edges
/// in cause order and tagging every incidence with its direction.
///
/// # Errors
///
/// * [`HifError`] if the writer fails.
pub fn write_directed_hif<V: HifVertex>(
    net: &Network<DirectedHyperedge<V>>,
    writer: impl Write,
) -> Result<(), HifError> {
    let mut incidences = Vec::new();
    for (index, edge) in net.edges().iter().enumerate() {
        for vert in edge.tails() {
            incidences.push(HifIncidence {
                node: Some(vert.to_value()),
                edge: Some(Value::from(index)),
                direction: Some("tail".to_owned()),
            });
        }
        for vert in edge.heads() {
            incidences.push(HifIncidence {
                node: Some(vert.to_value()),
                edge: Some(Value::from(index)),
                direction: Some("head".to_owned()),
            });
        }
    }
    write_document(net.vertices(), "directed", incidences, writer)
}

fn write_document<V: HifVertex>(
    verts: &[V],
    network_type: &str,
    incidences: Vec<HifIncidence>,
    writer: impl Write,
) -> Result<(), HifError> {
    let document = serde_json::json!({
        "network-type": network_type,
        "incidences": incidences,
        "nodes": verts
            .iter()
            .map(|vert| HifNode { node: Some(vert.to_value()) })
            .collect::<Vec<_>>(),
    });
    serde_json::to_writer(writer, &document)?;
    Ok(())
}
