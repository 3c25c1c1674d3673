//! Pure Rust `DGEEV`-compatible eigensolver
//!
//! Pipeline:
//! 1. Householder reduction to upper Hessenberg form, `A = Q·H·Qᵀ`
//! 2. Francis double-shift QR iteration to real Schur form, `A = Z·T·Zᵀ`
//! 3. Back-substitution on T for right and/or left eigenvectors, mapped back
//!    through Z and normalised
//!
//! The input is not balanced beforehand.

mod hessenberg;
mod matrix;
mod schur;
mod vectors;

use super::{GeneralEigenSolver, Job, check_arguments};
use hessenberg::hessenberg_reduction;
use matrix::ColMatrix;
use schur::schur_decompose;
use tracing::debug;
use vectors::{left_eigenvectors, right_eigenvectors};

/// Configuration options for [`NativeSolver`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NativeOptions {
    /// QR sweep budget per unit of matrix order (default: 30)
    ///
    /// The total budget is `max_iter_factor * max(10, n)` sweeps, shared by
    /// all eigenvalues. Exhausting it fails with a positive status code.
    pub max_iter_factor: usize,
}

impl Default for NativeOptions {
    fn default() -> Self {
        Self {
            max_iter_factor: 30,
        }
    }
}

/// Pure Rust general eigensolver
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NativeSolver {
    options: NativeOptions,
}

impl NativeSolver {
    /// Create a solver with default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a solver with explicit options
    pub fn with_options(options: NativeOptions) -> Self {
        Self { options }
    }

    /// The solver's options
    pub fn options(&self) -> &NativeOptions {
        &self.options
    }
}

impl GeneralEigenSolver for NativeSolver {
    fn name(&self) -> &'static str {
        "native"
    }

    fn geev(
        &self,
        jobvl: Job,
        jobvr: Job,
        n: i32,
        a: &mut [f64],
        lda: i32,
        wr: &mut [f64],
        wi: &mut [f64],
        vl: &mut [f64],
        ldvl: i32,
        vr: &mut [f64],
        ldvr: i32,
        work: &mut [f64],
    ) -> i32 {
        let info = check_arguments(jobvl, jobvr, n, a, lda, wr, wi, vl, ldvl, vr, ldvr, work);
        if info != 0 {
            return info;
        }

        let n = n as usize;
        if n == 0 {
            return 0;
        }
        let (lda, ldvl, ldvr) = (lda as usize, ldvl as usize, ldvr as usize);

        // Step 1: Copy the leading n × n block and reduce to Hessenberg form
        let mut data = Vec::with_capacity(n * n);
        for col in 0..n {
            data.extend_from_slice(&a[col * lda..col * lda + n]);
        }
        let mut h = ColMatrix::from_vec(n, data);
        let mut z = ColMatrix::identity(n);
        hessenberg_reduction(&mut h, &mut z);

        // Step 2: QR iteration to real Schur form
        let max_iter = self.options.max_iter_factor * n.max(10);
        let eigs = match schur_decompose(&mut h, &mut z, max_iter) {
            Ok(eigs) => eigs,
            Err(index) => {
                debug!(n, index, max_iter, "QR iteration did not converge");
                return index as i32 + 1;
            }
        };
        wr[..n].copy_from_slice(&eigs.wr);
        wi[..n].copy_from_slice(&eigs.wi);

        // Step 3: Eigenvectors, written with the caller's leading dimensions
        if jobvr.wanted() {
            let packed = right_eigenvectors(&h, &z, &eigs.wr, &eigs.wi);
            scatter_columns(&packed, n, vr, ldvr);
        }
        if jobvl.wanted() {
            let packed = left_eigenvectors(&h, &z, &eigs.wr, &eigs.wi);
            scatter_columns(&packed, n, vl, ldvl);
        }

        // The input is consumed, like DGEEV's
        for col in 0..n {
            a[col * lda..col * lda + n].copy_from_slice(&h.as_slice()[col * n..(col + 1) * n]);
        }

        0
    }
}

/// Copy a dense `n × n` column-major buffer into `out` with leading dimension `ld`.
fn scatter_columns(packed: &[f64], n: usize, out: &mut [f64], ld: usize) {
    for col in 0..n {
        out[col * ld..col * ld + n].copy_from_slice(&packed[col * n..(col + 1) * n]);
    }
}
