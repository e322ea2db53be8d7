//! Submodule providing the four temporal adjacency policies.
//!
//! The stochastic policies draw their lingers from a hash of the
//! `(seed, event, vertex)` triple: the draw is a pure function of its
//! inputs, so independent queries about the same pair observe identical
//! lingers within and across processes. Keeping the policies stateless is
//! what makes the out-/in-cluster duality hold.

use core::hash::{BuildHasher, Hash, Hasher};

use foldhash::fast::FixedState;
use num_traits::NumCast;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::traits::{FloatTime, IntegerTime, TemporalAdjacency, TemporalEdge, Time};

/// A uniform draw in `[0, 1)` keyed by the `(seed, event, vertex)` triple.
fn keyed_uniform<E: Hash, V: Hash>(seed: u64, event: &E, vert: &V) -> f64 {
    let mut hasher = FixedState::with_seed(seed).build_hasher();
    event.hash(&mut hasher);
    vert.hash(&mut hasher);
    SmallRng::seed_from_u64(hasher.finish()).gen_range(0.0..1.0)
}

/// The simple temporal adjacency: every effect lingers forever, so two
/// events are adjacent whenever they are statically adjacent and correctly
/// ordered in time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Simple;

impl Simple {
    /// Returns the simple temporal adjacency.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl<E: TemporalEdge> TemporalAdjacency<E> for Simple {
    fn linger(&self, _event: &E, _vert: &E::VertexType) -> E::TimeType {
        E::TimeType::maximum()
    }

    fn infinite_linger(&self, _event: &E, _vert: &E::VertexType) -> bool {
        true
    }

    fn maximum_linger(&self, _vert: &E::VertexType) -> E::TimeType {
        E::TimeType::maximum()
    }
}

/// The limited waiting-time temporal adjacency: every effect lingers for
/// exactly `dt` after its effect time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LimitedWaitingTime<T: Time> {
    dt: T,
}

impl<T: Time> LimitedWaitingTime<T> {
    /// Returns the limited waiting-time adjacency with maximum waiting time
    /// `dt`.
    #[must_use]
    pub fn new(dt: T) -> Self {
        Self { dt }
    }

    /// The maximum waiting time of the adjacency.
    #[must_use]
    pub fn dt(&self) -> T {
        self.dt
    }
}

impl<E: TemporalEdge> TemporalAdjacency<E> for LimitedWaitingTime<E::TimeType> {
    fn linger(&self, _event: &E, _vert: &E::VertexType) -> E::TimeType {
        self.dt
    }

    fn infinite_linger(&self, _event: &E, _vert: &E::VertexType) -> bool {
        self.dt.is_unbounded()
    }

    fn maximum_linger(&self, _vert: &E::VertexType) -> E::TimeType {
        self.dt
    }
}

/// The exponential temporal adjacency over float time: the linger of each
/// `(event, vertex)` pair is an `Exp(rate)` variate drawn deterministically
/// from the seed and the pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Exponential<T: FloatTime> {
    rate: T,
    seed: u64,
}

impl<T: FloatTime> Exponential<T> {
    /// Returns the exponential adjacency with the given rate and seed.
    #[must_use]
    pub fn new(rate: T, seed: u64) -> Self {
        Self { rate, seed }
    }

    /// The rate of the exponential distribution, i.e. the reciprocal of the
    /// mean linger.
    #[must_use]
    pub fn rate(&self) -> T {
        self.rate
    }

    /// The seed keying the deterministic draws.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl<E> TemporalAdjacency<E> for Exponential<E::TimeType>
where
    E: TemporalEdge,
    E::TimeType: FloatTime,
{
    fn linger(&self, event: &E, vert: &E::VertexType) -> E::TimeType {
        let uniform = keyed_uniform(self.seed, event, vert);
        // Inverse-CDF draw from Exp(rate).
        let draw = -f64::ln(1.0 - uniform);
        <E::TimeType as NumCast>::from(draw).unwrap_or_else(E::TimeType::maximum) / self.rate
    }

    fn infinite_linger(&self, _event: &E, _vert: &E::VertexType) -> bool {
        false
    }

    fn maximum_linger(&self, _vert: &E::VertexType) -> E::TimeType {
        E::TimeType::maximum()
    }
}

/// The geometric temporal adjacency over integer time: the linger of each
/// `(event, vertex)` pair is a `Geometric(p)` variate (number of failures
/// before the first success, so the mean is `1/p - 1`) drawn
/// deterministically from the seed and the pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geometric {
    p: f64,
    seed: u64,
}

impl Geometric {
    /// Returns the geometric adjacency with success probability `p` and the
    /// given seed.
    #[must_use]
    pub fn new(p: f64, seed: u64) -> Self {
        Self { p, seed }
    }

    /// The per-tick stopping probability of the effect.
    #[must_use]
    pub fn p(&self) -> f64 {
        self.p
    }

    /// The seed keying the deterministic draws.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl<E> TemporalAdjacency<E> for Geometric
where
    E: TemporalEdge,
    E::TimeType: IntegerTime,
{
    fn linger(&self, event: &E, vert: &E::VertexType) -> E::TimeType {
        let uniform = keyed_uniform(self.seed, event, vert);
        // Inverse-CDF draw from Geometric(p), counting failures.
        let draw = f64::floor(f64::ln(1.0 - uniform) / f64::ln(1.0 - self.p));
        <E::TimeType as NumCast>::from(draw).unwrap_or_else(E::TimeType::maximum)
    }

    fn infinite_linger(&self, _event: &E, _vert: &E::VertexType) -> bool {
        false
    }

    fn maximum_linger(&self, _vert: &E::VertexType) -> E::TimeType {
        E::TimeType::maximum()
    }
}
