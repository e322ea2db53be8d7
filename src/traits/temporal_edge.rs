//! Submodule defining the trait surface of temporal edges (events).

use crate::traits::{NetworkEdge, StaticEdge, Time};

/// Trait defining the operations of a temporal edge, or *event*: an edge
/// that carries a cause time (when the effect is initiated) and an effect
/// time (when it is received).
///
/// Instantaneous variants have equal cause and effect times; the delayed
/// variants enforce `effect_time >= cause_time` at construction.
pub trait TemporalEdge: NetworkEdge {
    /// Type used for labelling timestamps.
    type TimeType: Time;

    /// The static edge variant obtained by dropping the times.
    type StaticProjectionType: StaticEdge<VertexType = Self::VertexType>;

    /// The timestamp at which the effect is initiated by the mutator
    /// vertices.
    fn cause_time(&self) -> Self::TimeType;

    /// The timestamp at which the effect is received by the mutated
    /// vertices.
    fn effect_time(&self) -> Self::TimeType;

    /// The static edge that encompasses all non-temporal information about
    /// this event.
    fn static_projection(&self) -> Self::StaticProjectionType;

    /// The self-loop event at vertex `vert` and time `time`, used to seed
    /// vertex-at-time reachability queries through the event-seeded ones.
    fn loop_event(vert: Self::VertexType, time: Self::TimeType) -> Self;
}
