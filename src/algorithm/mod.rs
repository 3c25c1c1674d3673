//! Front end of the eigendecomposition
//!
//! - [`layout`]: row input validation and column-major conversion
//! - [`decode`]: packed solver output to complex values and vectors
//! - [`eig`]: the public entry points tying both to a solver backend

pub mod decode;
pub mod eig;
pub mod layout;

pub use decode::{assemble_eigenvalues, decode_eigenvectors};
pub use layout::{from_column_major, to_column_major, validate_square};
