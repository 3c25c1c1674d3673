//! Scalar types produced by eigendecomposition

pub mod complex;

pub use complex::{Complex, as_interleaved};
