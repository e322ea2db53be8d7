#![doc = include_str!("../README.md")]

pub mod errors;
pub mod generators;
pub mod impls;
pub mod io;
pub mod traits;

/// Prelude module re-exporting the edge types, containers and algorithm
/// traits.
pub mod prelude {
    pub use crate::{impls::*, traits::*};
}
