//! Decoding of the solver's real-valued packed output into complex results
//!
//! A real eigensolver reports eigenvalue `j` as the pair `(wr[j], wi[j])`.
//! Complex eigenvalues of a real matrix come in conjugate pairs which the
//! solver stores consecutively, the member with positive imaginary part
//! first. Eigenvectors share one `n × n` column-major buffer:
//!
//! - real eigenvalue `j`: column `j` is the (real) eigenvector;
//! - pair `(j, j + 1)`: column `j` holds the real part and column `j + 1` the
//!   imaginary part of the eigenvector for `j`; the eigenvector for `j + 1`
//!   is its conjugate and has no storage of its own.

use crate::dtype::Complex;
use crate::error::{Error, Result};

/// Combine split real/imaginary eigenvalue arrays, keeping solver order.
pub fn assemble_eigenvalues(wr: &[f64], wi: &[f64]) -> Vec<Complex> {
    debug_assert_eq!(wr.len(), wi.len());
    wr.iter()
        .zip(wi)
        .map(|(&re, &im)| Complex::new(re, im))
        .collect()
}

/// Reconstruct eigenvectors from a packed column-major buffer.
///
/// `wi` is the solver's imaginary-part array and fixes the grouping of
/// packed columns into real vectors and conjugate pairs. Entry `j` of the
/// result is the eigenvector for eigenvalue `j`, one component per row.
pub fn decode_eigenvectors(wi: &[f64], packed: &[f64]) -> Result<Vec<Vec<Complex>>> {
    let n = wi.len();
    if packed.len() != n * n {
        return Err(Error::malformed(format!(
            "eigenvector buffer has {} entries, expected {}",
            packed.len(),
            n * n
        )));
    }

    let column = |j: usize| &packed[n * j..n * (j + 1)];

    let mut vectors: Vec<Vec<Complex>> = Vec::with_capacity(n);
    let mut j = 0;
    while j < n {
        if wi[j] == 0.0 {
            vectors.push(column(j).iter().map(|&re| Complex::new(re, 0.0)).collect());
            j += 1;
            continue;
        }

        if j + 1 == n {
            return Err(Error::malformed(format!(
                "complex eigenvalue {j} has no conjugate partner column"
            )));
        }

        let vector: Vec<Complex> = column(j)
            .iter()
            .zip(column(j + 1))
            .map(|(&re, &im)| Complex::new(re, im))
            .collect();
        let conjugate: Vec<Complex> = vector.iter().map(|c| c.conj()).collect();
        vectors.push(vector);
        vectors.push(conjugate);
        j += 2;
    }

    Ok(vectors)
}
