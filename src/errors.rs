//! Submodule defining common errors for the crate.

pub mod algorithms;
pub mod construction;
pub mod io;
pub use algorithms::{EmptyNetworkError, NotAcyclicError, NotBipartiteError};
pub use construction::{EdgeConstructionError, VertexTypeTooSmallError};
pub use io::{EdgelistError, HifError};
