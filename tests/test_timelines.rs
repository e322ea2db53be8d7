//! Tests for static projections, link timelines and time windows.

use temporal_networks::errors::EmptyNetworkError;
use temporal_networks::impls::{
    DirectedDelayedTemporalEdge, Network, UndirectedEdge, UndirectedTemporalEdge,
};
use temporal_networks::traits::{TemporalReachability, TimeWindows};

type Event = UndirectedTemporalEdge<i32, i32>;

fn events() -> Network<Event> {
    Network::new([
        UndirectedTemporalEdge::new(1, 2, 1),
        UndirectedTemporalEdge::new(2, 1, 5),
        UndirectedTemporalEdge::new(2, 3, 6),
    ])
}

// ============================================================================
// Static projection
// ============================================================================

#[test]
fn test_static_projection_collapses_events() {
    let net = events();
    let projection = net.static_projection();

    assert_eq!(projection.edges(), &[UndirectedEdge::new(1, 2), UndirectedEdge::new(2, 3)]);
    assert_eq!(projection.vertices(), net.vertices());
}

#[test]
fn test_static_projection_keeps_isolated_vertices() {
    let net = Network::new_with_vertices([UndirectedTemporalEdge::new(1, 2, 1)], [9]);
    assert!(net.static_projection().contains_vertex(&9));
}

// ============================================================================
// Link timelines
// ============================================================================

#[test]
fn test_link_timeline_is_cause_ordered() {
    let net = events();

    assert_eq!(
        net.link_timeline(&UndirectedEdge::new(1, 2)),
        vec![UndirectedTemporalEdge::new(1, 2, 1), UndirectedTemporalEdge::new(1, 2, 5)]
    );
    assert_eq!(
        net.link_timeline(&UndirectedEdge::new(2, 3)),
        vec![UndirectedTemporalEdge::new(2, 3, 6)]
    );
}

#[test]
fn test_link_timeline_of_an_absent_link_is_empty() {
    assert!(events().link_timeline(&UndirectedEdge::new(5, 6)).is_empty());
}

#[test]
fn test_link_timelines_cover_every_event_exactly_once() {
    let net = events();

    let mut collected: Vec<Event> =
        net.link_timelines().into_iter().flat_map(|(_, timeline)| timeline).collect();
    collected.sort();
    assert_eq!(collected, net.edges_cause());
}

#[test]
fn test_link_timelines_match_single_link_queries() {
    let net = events();

    for (link, timeline) in net.link_timelines() {
        assert_eq!(timeline, net.link_timeline(&link));
    }
}

// ============================================================================
// Time windows
// ============================================================================

#[test]
fn test_time_windows_of_instantaneous_events() {
    let net = events();

    assert_eq!(net.time_window(), Ok((1, 6)));
    assert_eq!(net.cause_time_window(), Ok((1, 6)));
    assert_eq!(net.effect_time_window(), Ok((1, 6)));
}

#[test]
fn test_time_windows_of_delayed_events() {
    let net = Network::new([
        DirectedDelayedTemporalEdge::new(1, 2, 1, 5).unwrap(),
        DirectedDelayedTemporalEdge::new(2, 3, 2, 3).unwrap(),
    ]);

    assert_eq!(net.time_window(), Ok((1, 5)));
    assert_eq!(net.cause_time_window(), Ok((1, 2)));
    assert_eq!(net.effect_time_window(), Ok((3, 5)));
}

#[test]
fn test_time_windows_of_an_empty_network_are_undefined() {
    let net: Network<Event> = Network::default();

    assert_eq!(net.time_window(), Err(EmptyNetworkError));
    assert_eq!(net.cause_time_window(), Err(EmptyNetworkError));
    assert_eq!(net.effect_time_window(), Err(EmptyNetworkError));
}
