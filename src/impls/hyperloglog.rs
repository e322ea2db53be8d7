//! Submodule providing the HyperLogLog cardinality sketch backing the
//! estimated component and cluster containers.
//!
//! The sketch keeps a fixed array of 2^14 one-byte registers and hashes
//! elements with a seed-keyed `foldhash` hasher, so two sketches built with
//! the same seed are mergeable and their merge is associative and
//! commutative. No crate in this stack ships a mergeable HyperLogLog, so
//! the register logic lives here.

use core::fmt::{self, Debug};
use core::hash::{BuildHasher, Hash};
use core::marker::PhantomData;

use foldhash::fast::FixedState;

/// Number of index bits, i.e. log2 of the register count.
const PRECISION: u32 = 14;

/// Number of registers in a sketch.
const REGISTERS: usize = 1 << PRECISION;

/// A HyperLogLog cardinality estimator over hashable elements.
///
/// The standard relative error at this precision is about
/// `1.04 / sqrt(2^14) ≈ 0.8%`; estimates for very small sets fall back to
/// linear counting. Merging is only meaningful between sketches built with
/// the same seed.
#[derive(Clone)]
pub struct HyperLogLog<T: Hash + ?Sized> {
    seed: u64,
    registers: Box<[u8]>,
    _elements: PhantomData<fn(&T)>,
}

impl<T: Hash + ?Sized> HyperLogLog<T> {
    /// Returns a new, empty sketch keyed by `seed`.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            registers: vec![0u8; REGISTERS].into_boxed_slice(),
            _elements: PhantomData,
        }
    }

    /// Returns the seed the element hasher is keyed by.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Records one element into the sketch.
    pub fn insert(&mut self, element: &T) {
        let digest = FixedState::with_seed(self.seed).hash_one(element);
        let index = (digest >> (64 - PRECISION)) as usize;
        let remainder = digest << PRECISION;
        let rank = if remainder == 0 {
            (64 - PRECISION + 1) as u8
        } else {
            remainder.leading_zeros() as u8 + 1
        };
        if self.registers[index] < rank {
            self.registers[index] = rank;
        }
    }

    /// Merges another sketch into this one; the result estimates the union
    /// of the two recorded multisets.
    ///
    /// Both sketches must be keyed by the same seed.
    pub fn merge(&mut self, other: &Self) {
        debug_assert_eq!(self.seed, other.seed, "merged sketches must share a seed");
        for (mine, theirs) in self.registers.iter_mut().zip(other.registers.iter()) {
            if *mine < *theirs {
                *mine = *theirs;
            }
        }
    }

    /// Estimates the number of distinct elements recorded so far.
    #[must_use]
    pub fn estimate(&self) -> f64 {
        let m = REGISTERS as f64;
        let alpha = 0.7213 / (1.0 + 1.079 / m);

        let mut harmonic_sum = 0.0;
        let mut zeros = 0usize;
        for &register in &self.registers {
            harmonic_sum += f64::powi(2.0, -i32::from(register));
            if register == 0 {
                zeros += 1;
            }
        }

        let raw = alpha * m * m / harmonic_sum;
        if raw <= 2.5 * m && zeros > 0 {
            // Small-range correction: linear counting.
            m * f64::ln(m / zeros as f64)
        } else {
            raw
        }
    }

    /// The standard relative error of the sketch at this precision.
    #[must_use]
    pub fn relative_error() -> f64 {
        1.04 / f64::sqrt(REGISTERS as f64)
    }
}

impl<T: Hash + ?Sized> Debug for HyperLogLog<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HyperLogLog")
            .field("seed", &self.seed)
            .field("estimate", &self.estimate())
            .finish()
    }
}
