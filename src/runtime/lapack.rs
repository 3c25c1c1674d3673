//! `DGEEV` backend through `lapack-sys`
//!
//! Only the Fortran symbol is declared here; the final binary must link a
//! LAPACK provider (OpenBLAS, Accelerate, MKL, reference LAPACK), for example
//! via the `lapack-src` crate.

use super::{GeneralEigenSolver, Job, check_arguments};
use std::os::raw::c_char;

/// Eigensolver backed by the system LAPACK
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LapackSolver;

impl LapackSolver {
    /// Create a LAPACK-backed solver
    pub fn new() -> Self {
        Self
    }
}

impl GeneralEigenSolver for LapackSolver {
    fn name(&self) -> &'static str {
        "lapack"
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
        // Buffers shorter than the stated dimensions must never reach Fortran
        let info = check_arguments(jobvl, jobvr, n, a, lda, wr, wi, vl, ldvl, vr, ldvr, work);
        if info != 0 {
            return info;
        }

        let jobvl = jobvl.as_byte() as c_char;
        let jobvr = jobvr.as_byte() as c_char;
        let lwork = i32::try_from(work.len()).unwrap_or(i32::MAX);
        let mut info = 0;

        // SAFETY: every buffer was checked against its leading dimension and
        // the order above, and all pointers stay valid for the call.
        unsafe {
            lapack_sys::dgeev_(
                &jobvl,
                &jobvr,
                &n,
                a.as_mut_ptr(),
                &lda,
                wr.as_mut_ptr(),
                wi.as_mut_ptr(),
                vl.as_mut_ptr(),
                &ldvl,
                vr.as_mut_ptr(),
                &ldvr,
                work.as_mut_ptr(),
                &lwork,
                &mut info,
            );
        }

        info
    }
}
