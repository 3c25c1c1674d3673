//! Common test utilities
#![allow(dead_code)]

use eigv::dtype::Complex;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Assert a spectrum is real and matches `expected` up to ordering
pub fn assert_real_spectrum(values: &[Complex], expected: &[f64], tol: f64, msg: &str) {
    assert_eq!(values.len(), expected.len(), "{msg}: length mismatch");
    assert!(
        values.iter().all(|z| z.im == 0.0),
        "{msg}: complex eigenvalue in {values:?}"
    );

    let mut got: Vec<f64> = values.iter().map(|z| z.re).collect();
    got.sort_by(f64::total_cmp);
    let mut want = expected.to_vec();
    want.sort_by(f64::total_cmp);
    for (i, (x, y)) in got.iter().zip(&want).enumerate() {
        assert!(
            (x - y).abs() <= tol,
            "{msg}: eigenvalue {i} is {x}, expected {y}"
        );
    }
}

/// Assert two complex slices are close within an absolute tolerance
pub fn assert_allclose_complex(a: &[Complex], b: &[Complex], atol: f64, msg: &str) {
    assert_eq!(a.len(), b.len(), "{}: length mismatch", msg);
    for (i, (x, y)) in a.iter().zip(b.iter()).enumerate() {
        let diff = (*x - *y).magnitude();
        assert!(
            diff <= atol,
            "{}: element {} differs: {} vs {} (diff={})",
            msg,
            i,
            x,
            y,
            diff
        );
    }
}

/// Sort eigenvalues by (real, imaginary) for order-independent comparison
pub fn sorted(values: &[Complex]) -> Vec<Complex> {
    let mut out = values.to_vec();
    out.sort_by(|a, b| a.re.total_cmp(&b.re).then(a.im.total_cmp(&b.im)));
    out
}

/// Euclidean norm of a complex vector
pub fn norm(v: &[Complex]) -> f64 {
    v.iter().map(|z| z.magnitude_squared()).sum::<f64>().sqrt()
}

/// Frobenius-style scale of a real matrix, used to size tolerances
pub fn matrix_scale(a: &[Vec<f64>]) -> f64 {
    a.iter()
        .flat_map(|row| row.iter())
        .map(|x| x * x)
        .sum::<f64>()
        .sqrt()
        .max(1.0)
}

/// A · v
pub fn matvec(a: &[Vec<f64>], v: &[Complex]) -> Vec<Complex> {
    a.iter()
        .map(|row| {
            row.iter()
                .zip(v)
                .fold(Complex::ZERO, |acc, (&x, &vj)| acc + vj.scale(x))
        })
        .collect()
}

/// uᴴ · A, as a vector
pub fn conj_vecmat(u: &[Complex], a: &[Vec<f64>]) -> Vec<Complex> {
    let n = a.len();
    (0..n)
        .map(|j| (0..n).fold(Complex::ZERO, |acc, i| acc + u[i].conj().scale(a[i][j])))
        .collect()
}

/// Check `A·v = λ·v` for every right eigenvector
pub fn assert_right_residuals(
    a: &[Vec<f64>],
    values: &[Complex],
    vectors: &[Vec<Complex>],
    tol: f64,
) {
    assert_eq!(values.len(), vectors.len(), "one right eigenvector per value");
    let scale = matrix_scale(a);
    for (i, (&lambda, v)) in values.iter().zip(vectors).enumerate() {
        let av = matvec(a, v);
        let lv: Vec<Complex> = v.iter().map(|&x| lambda * x).collect();
        assert_allclose_complex(&av, &lv, tol * scale, &format!("right residual {i}"));
    }
}

/// Check `uᴴ·A = λ·uᴴ` for every left eigenvector
pub fn assert_left_residuals(
    a: &[Vec<f64>],
    values: &[Complex],
    vectors: &[Vec<Complex>],
    tol: f64,
) {
    assert_eq!(values.len(), vectors.len(), "one left eigenvector per value");
    let scale = matrix_scale(a);
    for (i, (&lambda, u)) in values.iter().zip(vectors).enumerate() {
        let ua = conj_vecmat(u, a);
        let lu: Vec<Complex> = u.iter().map(|&x| lambda * x.conj()).collect();
        assert_allclose_complex(&ua, &lu, tol * scale, &format!("left residual {i}"));
    }
}

/// Check that complex eigenvalues come in adjacent conjugate pairs, positive
/// imaginary part first, with exactly conjugate eigenvectors
pub fn assert_conjugate_pairs(values: &[Complex], vectors: &[Vec<Complex>]) {
    let mut j = 0;
    while j < values.len() {
        let z = values[j];
        if z.im == 0.0 {
            j += 1;
            continue;
        }
        assert!(z.im > 0.0, "pair at {j} starts with {z}");
        assert!(j + 1 < values.len(), "pair at {j} has no partner");
        assert_eq!(values[j + 1], z.conj(), "pair at {j}");
        let conj: Vec<Complex> = vectors[j].iter().map(|x| x.conj()).collect();
        assert_eq!(vectors[j + 1], conj, "eigenvectors of pair at {j}");
        j += 2;
    }
}

/// Check every vector has unit Euclidean norm
pub fn assert_unit_norms(vectors: &[Vec<Complex>], tol: f64) {
    for (i, v) in vectors.iter().enumerate() {
        let nrm = norm(v);
        assert!((nrm - 1.0).abs() <= tol, "vector {i} has norm {nrm}");
    }
}

/// Seeded random matrix with entries uniform in [-1, 1)
pub fn random_matrix(n: usize, seed: u64) -> Vec<Vec<f64>> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|_| (0..n).map(|_| rng.random_range(-1.0..1.0)).collect())
        .collect()
}
