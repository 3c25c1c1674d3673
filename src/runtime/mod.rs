//! Eigensolver backends and the calling contract between them and eigv
//!
//! A backend implements [`GeneralEigenSolver`], whose single method mirrors
//! LAPACK's `DGEEV`: real column-major input, split real/imaginary eigenvalue
//! arrays, packed real eigenvector matrices and an integer status code.
//! Nothing on this side of the boundary knows about complex numbers; decoding
//! happens in [`crate::algorithm::decode`].
//!
//! # Backends
//!
//! - [`native::NativeSolver`] (always available): pure Rust implementation
//! - `lapack::LapackSolver` (feature `lapack`): forwards to `dgeev_`

pub mod native;

#[cfg(feature = "lapack")]
pub mod lapack;

use crate::error::{Error, Result};
use tracing::warn;

/// Whether one side's eigenvectors are computed (`'V'`) or skipped (`'N'`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Job {
    /// Compute the eigenvectors
    Compute,
    /// Do not compute the eigenvectors
    Skip,
}

impl Job {
    /// Job for a requested/unrequested side
    pub fn from_flag(wanted: bool) -> Self {
        if wanted { Job::Compute } else { Job::Skip }
    }

    /// LAPACK character code
    pub fn as_byte(self) -> u8 {
        match self {
            Job::Compute => b'V',
            Job::Skip => b'N',
        }
    }

    /// Whether eigenvectors are requested
    pub fn wanted(self) -> bool {
        self == Job::Compute
    }
}

/// Dense eigensolver for general real matrices.
///
/// The contract follows `DGEEV`:
///
/// - `a` holds the `n × n` input in column-major order with leading
///   dimension `lda`; it is overwritten.
/// - `wr`/`wi` receive the eigenvalues. Complex conjugate pairs appear
///   consecutively, positive imaginary part first.
/// - `vl`/`vr` receive the left/right eigenvectors when the matching job is
///   [`Job::Compute`], packed as described in [`crate::algorithm::decode`].
///   Left eigenvectors satisfy `uᴴ·A = λ·uᴴ`. Each vector has unit
///   Euclidean norm with its largest component real.
/// - `work` is scratch space of at least `max(1, 4n)` entries when
///   eigenvectors are requested, `max(1, 3n)` otherwise.
///
/// Returns `info`: `0` on success, `-i` when argument `i` is invalid,
/// `i > 0` when the QR algorithm failed (eigenvalues `i+1..=n`, one-based,
/// converged).
pub trait GeneralEigenSolver: Send + Sync {
    /// Short backend name for diagnostics
    fn name(&self) -> &'static str;

    /// Compute eigenvalues and optionally eigenvectors of a real matrix
    #[allow(clippy::too_many_arguments)]
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
    ) -> i32;
}

/// Argument validation shared by backends, in `DGEEV` order.
///
/// Also rejects buffers too short for the stated dimensions, reporting the
/// position of the offending buffer argument.
#[allow(clippy::too_many_arguments)]
pub(crate) fn check_arguments(
    jobvl: Job,
    jobvr: Job,
    n: i32,
    a: &[f64],
    lda: i32,
    wr: &[f64],
    wi: &[f64],
    vl: &[f64],
    ldvl: i32,
    vr: &[f64],
    ldvr: i32,
    work: &[f64],
) -> i32 {
    let wantv = jobvl.wanted() || jobvr.wanted();
    let minwrk = if wantv {
        (4 * n).max(1)
    } else {
        (3 * n).max(1)
    };
    let len = |ld: i32, cols: i32| (ld.max(0) as usize) * (cols.max(0) as usize);

    if n < 0 {
        -3
    } else if lda < n.max(1) {
        -5
    } else if a.len() < len(lda, n) {
        -4
    } else if wr.len() < n as usize {
        -6
    } else if wi.len() < n as usize {
        -7
    } else if ldvl < 1 || (jobvl.wanted() && ldvl < n) {
        -9
    } else if jobvl.wanted() && vl.len() < len(ldvl, n) {
        -8
    } else if ldvr < 1 || (jobvr.wanted() && ldvr < n) {
        -11
    } else if jobvr.wanted() && vr.len() < len(ldvr, n) {
        -10
    } else if (work.len() as i64) < minwrk as i64 {
        -13
    } else {
        0
    }
}

/// Raw solver output for one call
#[derive(Debug, Clone, PartialEq)]
pub struct PackedEigen {
    /// Real parts of the eigenvalues
    pub wr: Vec<f64>,
    /// Imaginary parts of the eigenvalues
    pub wi: Vec<f64>,
    /// Packed left eigenvectors (`n × n`, column-major), when requested
    pub vl: Option<Vec<f64>>,
    /// Packed right eigenvectors (`n × n`, column-major), when requested
    pub vr: Option<Vec<f64>>,
}

/// Allocate output buffers, call the solver once and check its status.
///
/// `a` is the column-major input and is consumed: the solver overwrites it.
/// Any non-zero status becomes [`Error::InternalError`] carrying the raw code.
pub fn invoke<S: GeneralEigenSolver + ?Sized>(
    solver: &S,
    n: usize,
    mut a: Vec<f64>,
    left: bool,
    right: bool,
) -> Result<PackedEigen> {
    let order = i32::try_from(n)
        .map_err(|_| Error::malformed(format!("matrix order {n} exceeds solver index range")))?;

    let mut wr = vec![0.0; n];
    let mut wi = vec![0.0; n];

    // Unrequested sides get a one-element dummy with leading dimension 1
    let side = |wanted: bool| {
        if wanted {
            (vec![0.0; n * n], order)
        } else {
            (vec![0.0; 1], 1)
        }
    };
    let (mut vl, ldvl) = side(left);
    let (mut vr, ldvr) = side(right);

    let mut work = vec![0.0; 4 * n];

    let info = solver.geev(
        Job::from_flag(left),
        Job::from_flag(right),
        order,
        &mut a,
        order,
        &mut wr,
        &mut wi,
        &mut vl,
        ldvl,
        &mut vr,
        ldvr,
        &mut work,
    );

    if info != 0 {
        warn!(
            solver = solver.name(),
            n,
            info,
            "eigensolver reported failure"
        );
        return Err(Error::solver_status(solver.name(), info));
    }

    Ok(PackedEigen {
        wr,
        wi,
        vl: left.then_some(vl),
        vr: right.then_some(vr),
    })
}
