//! Submodule defining the properties of the time axis of temporal networks.
//!
//! Temporal edges are generic over an arithmetic timestamp type. Integer and
//! floating-point timestamps behave differently in three places: floats have
//! a genuine infinity, floats are not `Ord`/`Hash`, and closed integer
//! intervals merge when they touch within one tick while float intervals
//! merge only when they share a point. The [`Time`] trait captures exactly
//! those capabilities, with macro implementations over the primitive types.

use core::cmp::Ordering;
use core::fmt::{Debug, Display};
use core::hash::{Hash, Hasher};
use core::str::FromStr;

use num_traits::{Float, Num, NumCast, PrimInt, ToPrimitive};

/// Trait defining the properties of a timestamp.
pub trait Time: Num + Copy + PartialOrd + Debug + Display + FromStr + ToPrimitive + NumCast {
    /// The largest representable instant: positive infinity for float types,
    /// the maximum value for integer types. Treated as "forever" by the
    /// temporal adjacency policies.
    fn maximum() -> Self;

    /// Whether the instant is the unbounded sentinel (infinite for float
    /// types; integer instants are always bounded).
    fn is_unbounded(&self) -> bool;

    /// Total order over instants. Float types compare with the IEEE total
    /// order, so the ordering is consistent with [`Time::time_hash`].
    fn time_cmp(&self, other: &Self) -> Ordering;

    /// Feeds the instant to a hasher, consistently with the equivalence
    /// classes of [`Time::time_cmp`].
    fn time_hash<H: Hasher>(&self, state: &mut H);

    /// `self + rhs`, saturating at [`Time::maximum`] instead of overflowing.
    fn saturating_add(self, rhs: Self) -> Self;

    /// Whether the closed intervals `[_, end]` and `[start, _]` may be
    /// merged into one: integer intervals merge when `start <= end + 1`,
    /// float intervals when `start <= end`.
    fn mergeable(end: Self, start: Self) -> bool;

    /// Index of the `resolution`-sized bin containing the instant, i.e.
    /// `floor(self / resolution)`.
    fn quantise(self, resolution: Self) -> i64;

    /// Number of integer instants inside the closed interval
    /// `[start, end]`, saturating at `usize::MAX` for unbounded intervals.
    fn instants(start: Self, end: Self) -> usize;
}

/// Trait for integer timestamp types.
pub trait IntegerTime: Time + PrimInt + Ord + Eq + Hash {}

impl<T: Time + PrimInt + Ord + Eq + Hash> IntegerTime for T {}

/// Trait for floating-point timestamp types.
pub trait FloatTime: Time + Float {}

impl<T: Time + Float> FloatTime for T {}

macro_rules! impl_integer_time {
    ($($t:ty),*) => {
        $(
            impl Time for $t {
                fn maximum() -> Self {
                    <$t>::MAX
                }

                fn is_unbounded(&self) -> bool {
                    false
                }

                fn time_cmp(&self, other: &Self) -> Ordering {
                    self.cmp(other)
                }

                fn time_hash<H: Hasher>(&self, state: &mut H) {
                    self.hash(state);
                }

                fn saturating_add(self, rhs: Self) -> Self {
                    <$t>::saturating_add(self, rhs)
                }

                fn mergeable(end: Self, start: Self) -> bool {
                    start <= <$t>::saturating_add(end, 1)
                }

                fn quantise(self, resolution: Self) -> i64 {
                    (self.div_euclid(resolution)) as i64
                }

                fn instants(start: Self, end: Self) -> usize {
                    if end < start {
                        return 0;
                    }
                    end.checked_sub(start)
                        .and_then(|span| usize::try_from(span).ok())
                        .and_then(|span| span.checked_add(1))
                        .unwrap_or(usize::MAX)
                }
            }
        )*
    };
}

impl_integer_time!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);

macro_rules! impl_float_time {
    ($($t:ty => $write:ident),*) => {
        $(
            impl Time for $t {
                fn maximum() -> Self {
                    <$t>::INFINITY
                }

                fn is_unbounded(&self) -> bool {
                    <$t>::is_infinite(*self)
                }

                fn time_cmp(&self, other: &Self) -> Ordering {
                    <$t>::total_cmp(self, other)
                }

                fn time_hash<H: Hasher>(&self, state: &mut H) {
                    state.$write(self.to_bits());
                }

                fn saturating_add(self, rhs: Self) -> Self {
                    self + rhs
                }

                fn mergeable(end: Self, start: Self) -> bool {
                    start <= end
                }

                fn quantise(self, resolution: Self) -> i64 {
                    (self / resolution).floor() as i64
                }

                fn instants(start: Self, end: Self) -> usize {
                    if <$t>::is_infinite(end) {
                        return usize::MAX;
                    }
                    let span = end.floor() - start.ceil();
                    if span < 0.0 { 0 } else { (span as usize).saturating_add(1) }
                }
            }
        )*
    };
}

impl_float_time!(f32 => write_u32, f64 => write_u64);
