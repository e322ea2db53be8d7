//! Tests for the edgelist and HIF readers and writers.

use temporal_networks::errors::{EdgelistError, HifError};
use temporal_networks::impls::{
    DirectedDelayedTemporalEdge, DirectedEdge, DirectedHyperedge, Network, UndirectedEdge,
    UndirectedHyperedge, UndirectedTemporalEdge,
};
use temporal_networks::io::{
    read_directed_hif, read_edgelist, read_edgelist_with_vertices, read_undirected_hif,
    write_directed_hif, write_edgelist, write_undirected_hif,
};

// ============================================================================
// Edgelists
// ============================================================================

#[test]
fn test_read_directed_edgelist() {
    let net: Network<DirectedEdge<u32>> = read_edgelist("1 2\n2 3\n\n1 2\n".as_bytes()).unwrap();

    assert_eq!(net, Network::new([DirectedEdge::new(1, 2), DirectedEdge::new(2, 3)]));
}

#[test]
fn test_read_edgelist_with_supplementary_vertices() {
    let net: Network<UndirectedEdge<u32>> =
        read_edgelist_with_vertices("1 2\n".as_bytes(), [9]).unwrap();

    assert_eq!(net.vertices(), &[1, 2, 9]);
}

#[test]
fn test_read_temporal_edgelist_with_float_times() {
    let net: Network<UndirectedTemporalEdge<u32, f64>> =
        read_edgelist("1 2 0.5\n2 3 1.25\n".as_bytes()).unwrap();

    assert_eq!(
        net.edges(),
        &[
            UndirectedTemporalEdge::new(1, 2, 0.5),
            UndirectedTemporalEdge::new(2, 3, 1.25),
        ]
    );
}

#[test]
fn test_edgelist_round_trips() {
    let net = Network::new([
        DirectedDelayedTemporalEdge::new(1u32, 2, 1i64, 5).unwrap(),
        DirectedDelayedTemporalEdge::new(2, 3, 2, 3).unwrap(),
    ]);

    let mut buffer = Vec::new();
    write_edgelist(&net, &mut buffer).unwrap();
    assert_eq!(String::from_utf8(buffer.clone()).unwrap(), "1 2 1 5\n2 3 2 3\n");

    let read: Network<DirectedDelayedTemporalEdge<u32, i64>> =
        read_edgelist(buffer.as_slice()).unwrap();
    assert_eq!(read, net);
}

#[test]
fn test_float_times_round_trip_exactly() {
    let net = Network::new([UndirectedTemporalEdge::new(1u32, 2, 0.1f64 + 0.2)]);

    let mut buffer = Vec::new();
    write_edgelist(&net, &mut buffer).unwrap();
    let read: Network<UndirectedTemporalEdge<u32, f64>> =
        read_edgelist(buffer.as_slice()).unwrap();
    assert_eq!(read, net);
}

#[test]
fn test_malformed_edgelist_row_reports_its_line() {
    let result: Result<Network<DirectedEdge<u32>>, _> =
        read_edgelist("1 2\n1 x\n".as_bytes());

    match result {
        Err(EdgelistError::Parse { line, content }) => {
            assert_eq!(line, 2);
            assert_eq!(content, "1 x");
        }
        other => panic!("expected a parse error, got {other:?}"),
    }
}

#[test]
fn test_inconsistent_delayed_row_is_a_construction_error() {
    let result: Result<Network<DirectedDelayedTemporalEdge<u32, i64>>, _> =
        read_edgelist("1 2 5 3\n".as_bytes());

    assert!(matches!(result, Err(EdgelistError::Edge { line: 1, .. })));
}

#[test]
fn test_wrong_arity_is_a_parse_error() {
    let result: Result<Network<DirectedEdge<u32>>, _> = read_edgelist("1 2 3\n".as_bytes());
    assert!(matches!(result, Err(EdgelistError::Parse { .. })));
}

// ============================================================================
// HIF documents
// ============================================================================

#[test]
fn test_read_undirected_hif() {
    let document = r#"{
        "network-type": "undirected",
        "incidences": [
            {"node": 1, "edge": "e1"},
            {"node": 2, "edge": "e1"},
            {"node": 2, "edge": 7},
            {"node": 3, "edge": 7}
        ],
        "nodes": [{"node": 9}]
    }"#;

    let net = read_undirected_hif::<u32>(document.as_bytes()).unwrap();
    assert_eq!(
        net,
        Network::new_with_vertices(
            [UndirectedHyperedge::new([1, 2]), UndirectedHyperedge::new([2, 3])],
            [9],
        )
    );
}

#[test]
fn test_read_directed_hif() {
    let document = r#"{
        "network-type": "directed",
        "incidences": [
            {"node": 1, "edge": 0, "direction": "tail"},
            {"node": 2, "edge": 0, "direction": "head"},
            {"node": 3, "edge": 0, "direction": "head"}
        ]
    }"#;

    let net = read_directed_hif::<u32>(document.as_bytes()).unwrap();
    assert_eq!(net, Network::new([DirectedHyperedge::new([1], [2, 3])]));
}

#[test]
fn test_hif_round_trips() {
    let undirected = Network::new_with_vertices(
        [UndirectedHyperedge::new([1u32, 2, 3]), UndirectedHyperedge::new([3, 4])],
        [9],
    );
    let mut buffer = Vec::new();
    write_undirected_hif(&undirected, &mut buffer).unwrap();
    assert_eq!(read_undirected_hif::<u32>(buffer.as_slice()).unwrap(), undirected);

    let directed = Network::new([
        DirectedHyperedge::new(["a".to_owned()], ["b".to_owned(), "c".to_owned()]),
        DirectedHyperedge::new(["b".to_owned()], ["a".to_owned()]),
    ]);
    let mut buffer = Vec::new();
    write_directed_hif(&directed, &mut buffer).unwrap();
    assert_eq!(read_directed_hif::<String>(buffer.as_slice()).unwrap(), directed);
}

#[test]
fn test_hif_missing_incidences_field() {
    let result = read_undirected_hif::<u32>(r#"{"network-type": "undirected"}"#.as_bytes());
    assert!(matches!(result, Err(HifError::MissingField("incidences"))));
}

#[test]
fn test_hif_missing_node_and_edge_fields() {
    let missing_node = r#"{"incidences": [{"edge": 0}]}"#;
    assert!(matches!(
        read_undirected_hif::<u32>(missing_node.as_bytes()),
        Err(HifError::MissingField("node"))
    ));

    let missing_edge = r#"{"incidences": [{"node": 1}]}"#;
    assert!(matches!(
        read_undirected_hif::<u32>(missing_edge.as_bytes()),
        Err(HifError::MissingField("edge"))
    ));
}

#[test]
fn test_hif_network_type_mismatch() {
    let document = r#"{"network-type": "directed", "incidences": []}"#;
    assert!(matches!(
        read_undirected_hif::<u32>(document.as_bytes()),
        Err(HifError::NetworkTypeMismatch { expected: "undirected", .. })
    ));
}

#[test]
fn test_hif_node_type_mismatch() {
    let document = r#"{"incidences": [{"node": "a", "edge": 0}]}"#;
    assert!(matches!(
        read_undirected_hif::<u32>(document.as_bytes()),
        Err(HifError::NodeTypeMismatch { expected: "integer", .. })
    ));

    let document = r#"{"incidences": [{"node": 1, "edge": 0}]}"#;
    assert!(matches!(
        read_undirected_hif::<String>(document.as_bytes()),
        Err(HifError::NodeTypeMismatch { expected: "string", .. })
    ));
}

#[test]
fn test_hif_direction_errors() {
    let missing = r#"{"incidences": [{"node": 1, "edge": 0}]}"#;
    assert!(matches!(
        read_directed_hif::<u32>(missing.as_bytes()),
        Err(HifError::MissingDirection)
    ));

    let invalid = r#"{"incidences": [{"node": 1, "edge": 0, "direction": "sideways"}]}"#;
    assert!(matches!(
        read_directed_hif::<u32>(invalid.as_bytes()),
        Err(HifError::InvalidDirection(_))
    ));

    let unexpected = r#"{"incidences": [{"node": 1, "edge": 0, "direction": "tail"}]}"#;
    assert!(matches!(
        read_undirected_hif::<u32>(unexpected.as_bytes()),
        Err(HifError::UnexpectedDirection)
    ));
}

#[test]
fn test_hif_invalid_edge_id() {
    let document = r#"{"incidences": [{"node": 1, "edge": 0.5}]}"#;
    assert!(matches!(
        read_undirected_hif::<u32>(document.as_bytes()),
        Err(HifError::InvalidEdgeId)
    ));
}

#[test]
fn test_malformed_json_is_a_json_error() {
    let result = read_undirected_hif::<u32>("{not json".as_bytes());
    assert!(matches!(result, Err(HifError::Json(_))));
}
