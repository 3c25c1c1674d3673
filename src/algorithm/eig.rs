//! Eigendecomposition of general real square matrices

use super::decode::{assemble_eigenvalues, decode_eigenvectors};
use super::layout::{to_column_major, validate_square};
use crate::dtype::Complex;
use crate::error::Result;
use crate::runtime::native::NativeSolver;
use crate::runtime::{GeneralEigenSolver, invoke};
use tracing::debug;

/// Which eigenvectors to compute alongside the eigenvalues
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EigOptions {
    /// Compute left eigenvectors `u` with `uᴴ·A = λ·uᴴ` (default: false)
    pub left: bool,

    /// Compute right eigenvectors `v` with `A·v = λ·v` (default: true)
    pub right: bool,
}

impl Default for EigOptions {
    fn default() -> Self {
        Self {
            left: false,
            right: true,
        }
    }
}

impl EigOptions {
    /// Eigenvalues only
    pub fn values_only() -> Self {
        Self {
            left: false,
            right: false,
        }
    }

    /// Both left and right eigenvectors
    pub fn both() -> Self {
        Self {
            left: true,
            right: true,
        }
    }
}

/// Eigenvalues and, when requested, eigenvectors of a real matrix
///
/// `left[i]` and `right[i]` belong to `values[i]`. Values keep the solver's
/// order; a complex conjugate pair occupies consecutive slots, positive
/// imaginary part first, and its eigenvectors are exact conjugates.
#[derive(Debug, Clone, PartialEq)]
pub struct EigenResult {
    /// Eigenvalues in solver order
    pub values: Vec<Complex>,
    /// Left eigenvectors, one per eigenvalue
    pub left: Option<Vec<Vec<Complex>>>,
    /// Right eigenvectors, one per eigenvalue
    pub right: Option<Vec<Vec<Complex>>>,
}

/// Eigenvalues plus optional left and right eigenvectors, as a tuple
pub type EigenParts = (
    Vec<Complex>,
    Option<Vec<Vec<Complex>>>,
    Option<Vec<Vec<Complex>>>,
);

impl EigenResult {
    /// Matrix order
    pub fn order(&self) -> usize {
        self.values.len()
    }

    /// Split into `(values, left, right)`
    pub fn into_parts(self) -> EigenParts {
        (self.values, self.left, self.right)
    }
}

/// Compute eigenvalues and optionally left/right eigenvectors of a real
/// square matrix given as rows.
///
/// # Errors
///
/// - [`Error::NonSquareMatrixInput`](crate::error::Error::NonSquareMatrixInput)
///   if some row's length differs from the number of rows
/// - [`Error::InternalError`](crate::error::Error::InternalError) if the
///   solver fails, including for the empty matrix
///
/// # Example
///
/// ```
/// use eigv::prelude::*;
///
/// let result = eig(&[[0.0, -1.0], [1.0, 0.0]], false, true)?;
/// assert_eq!(result.values, vec![Complex::new(0.0, 1.0), Complex::new(0.0, -1.0)]);
/// assert!(result.left.is_none());
/// assert_eq!(result.right.as_ref().map(Vec::len), Some(2));
/// # Ok::<(), eigv::error::Error>(())
/// ```
pub fn eig<R: AsRef<[f64]>>(matrix: &[R], left: bool, right: bool) -> Result<EigenResult> {
    eig_with(matrix, &EigOptions { left, right })
}

/// [`eig`] with options, using the native backend.
pub fn eig_with<R: AsRef<[f64]>>(matrix: &[R], options: &EigOptions) -> Result<EigenResult> {
    eig_with_solver(&NativeSolver::new(), matrix, options)
}

/// [`eig`] with options and an explicit backend.
pub fn eig_with_solver<S, R>(solver: &S, matrix: &[R], options: &EigOptions) -> Result<EigenResult>
where
    S: GeneralEigenSolver + ?Sized,
    R: AsRef<[f64]>,
{
    let n = validate_square(matrix)?;
    debug!(
        n,
        left = options.left,
        right = options.right,
        solver = solver.name(),
        "computing eigendecomposition"
    );

    let packed = invoke(
        solver,
        n,
        to_column_major(matrix),
        options.left,
        options.right,
    )?;

    let values = assemble_eigenvalues(&packed.wr, &packed.wi);
    let left = packed
        .vl
        .map(|vl| decode_eigenvectors(&packed.wi, &vl))
        .transpose()?;
    let right = packed
        .vr
        .map(|vr| decode_eigenvectors(&packed.wi, &vr))
        .transpose()?;

    Ok(EigenResult {
        values,
        left,
        right,
    })
}

/// Decompose many independent matrices; results keep the input order.
///
/// With the `rayon` feature the matrices are processed on the rayon thread
/// pool, each call still single-threaded.
pub fn eig_batch<M, R>(matrices: &[M], options: &EigOptions) -> Vec<Result<EigenResult>>
where
    M: AsRef<[R]> + Sync,
    R: AsRef<[f64]>,
{
    #[cfg(feature = "rayon")]
    {
        use rayon::prelude::*;
        matrices
            .par_iter()
            .map(|m| eig_with(m.as_ref(), options))
            .collect()
    }

    #[cfg(not(feature = "rayon"))]
    {
        matrices
            .iter()
            .map(|m| eig_with(m.as_ref(), options))
            .collect()
    }
}
