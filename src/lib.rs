//! # eigv
//!
//! **Eigendecomposition of general real square matrices.**
//!
//! eigv computes the (possibly complex) eigenvalues of a dense real matrix
//! and, on request, its left and right eigenvectors. Matrices are given as
//! rows; results come back as [`Complex`](dtype::Complex) values, with the
//! packed real layout of `DGEEV`-style solvers decoded for you.
//!
//! ## Quick Start
//!
//! ```
//! use eigv::prelude::*;
//!
//! let result = eig(&[[2.0, 1.0], [1.0, 2.0]], false, true)?;
//! assert_eq!(result.values, vec![Complex::new(3.0, 0.0), Complex::new(1.0, 0.0)]);
//! # Ok::<(), Error>(())
//! ```
//!
//! ## Backends
//!
//! The solver sits behind [`runtime::GeneralEigenSolver`]:
//!
//! - [`runtime::native::NativeSolver`]: pure Rust, the default
//! - `runtime::lapack::LapackSolver`: system LAPACK (`lapack` feature)
//!
//! ## Feature Flags
//!
//! - `rayon` (default): parallel [`eig_batch`]
//! - `lapack`: LAPACK `dgeev_` backend through `lapack-sys`

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod algorithm;
pub mod dtype;
pub mod error;
pub mod runtime;

pub use algorithm::eig::{
    EigOptions, EigenParts, EigenResult, eig, eig_batch, eig_with, eig_with_solver,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::algorithm::eig::{
        EigOptions, EigenResult, eig, eig_batch, eig_with, eig_with_solver,
    };
    pub use crate::dtype::Complex;
    pub use crate::error::{Error, Result};
    pub use crate::runtime::native::{NativeOptions, NativeSolver};
    pub use crate::runtime::{GeneralEigenSolver, Job};

    #[cfg(feature = "lapack")]
    pub use crate::runtime::lapack::LapackSolver;
}
