//! Property tests for eigenvectors of general matrices
//!
//! Tests verify, on fixed and seeded random matrices:
//! - Right eigenvectors: A·v ≈ λ·v
//! - Left eigenvectors: uᴴ·A ≈ λ·uᴴ
//! - Unit Euclidean norm, largest component real
//! - Sum and product of eigenvalues match trace and determinant

use eigv::prelude::*;

mod common;

use common::{
    assert_conjugate_pairs, assert_left_residuals, assert_right_residuals, assert_unit_norms,
    random_matrix,
};

const TOL: f64 = 1e-10;

fn check_all(a: &[Vec<f64>]) {
    let result = eig(a, true, true).unwrap();
    let left = result.left.as_ref().unwrap();
    let right = result.right.as_ref().unwrap();

    assert_right_residuals(a, &result.values, right, TOL);
    assert_left_residuals(a, &result.values, left, TOL);
    assert_unit_norms(right, 1e-12);
    assert_unit_norms(left, 1e-12);
    assert_conjugate_pairs(&result.values, right);
    assert_conjugate_pairs(&result.values, left);

    for v in left.iter().chain(right) {
        let k = (0..v.len())
            .max_by(|&x, &y| v[x].magnitude().total_cmp(&v[y].magnitude()))
            .unwrap();
        // Ties between components of equal modulus may leave either one real
        let peak = v[k].magnitude();
        assert!(
            v.iter()
                .any(|z| z.im == 0.0 && (z.magnitude() - peak).abs() <= 1e-12),
            "no real component of largest modulus in {v:?}"
        );
    }
}

fn trace(a: &[Vec<f64>]) -> f64 {
    (0..a.len()).map(|i| a[i][i]).sum()
}

#[test]
fn test_block_with_complex_pair() {
    check_all(&[
        vec![1.0, 2.0, 0.0],
        vec![-2.0, 1.0, 0.0],
        vec![0.0, 0.0, 3.0],
    ]);
}

#[test]
fn test_non_normal_matrix() {
    check_all(&[
        vec![1.0, 10.0, 0.0, 0.0],
        vec![0.0, 2.0, 10.0, 0.0],
        vec![0.0, 0.0, 3.0, 10.0],
        vec![0.0, 0.0, 0.0, 4.0],
    ]);
}

#[test]
fn test_full_matrix_with_mixed_spectrum() {
    check_all(&[
        vec![4.0, -2.0, 1.0, 3.0],
        vec![3.0, 6.0, -4.0, 2.0],
        vec![2.0, 1.0, 8.0, -5.0],
        vec![-1.0, 2.0, 3.0, 1.0],
    ]);
}

#[test]
fn test_seeded_random_matrices() {
    for (n, seed) in [(2, 1), (3, 2), (5, 3), (8, 4), (12, 5), (20, 6)] {
        let a = random_matrix(n, seed);
        check_all(&a);

        let values = eig(&a, false, false).unwrap().values;
        let sum = values.iter().fold(Complex::ZERO, |acc, &z| acc + z);
        assert!(
            (sum.re - trace(&a)).abs() < 1e-10 * n as f64,
            "n={n}: trace mismatch"
        );
        assert!(
            sum.im.abs() < 1e-10 * n as f64,
            "n={n}: imaginary parts do not cancel"
        );
    }
}

#[test]
fn test_determinant_of_random_3x3() {
    let a = random_matrix(3, 42);
    let det = a[0][0] * (a[1][1] * a[2][2] - a[1][2] * a[2][1])
        - a[0][1] * (a[1][0] * a[2][2] - a[1][2] * a[2][0])
        + a[0][2] * (a[1][0] * a[2][1] - a[1][1] * a[2][0]);

    let values = eig(&a, false, false).unwrap().values;
    let product = values.iter().fold(Complex::ONE, |acc, &z| acc * z);
    assert!((product.re - det).abs() < 1e-12);
    assert!(product.im.abs() < 1e-12);
}

#[test]
fn test_scaled_matrix() {
    // Large and small magnitudes stay accurate relative to the matrix scale
    for scale in [1e-8, 1e8] {
        let a: Vec<Vec<f64>> = random_matrix(6, 11)
            .into_iter()
            .map(|row| row.into_iter().map(|x| x * scale).collect())
            .collect();
        let result = eig(&a, true, true).unwrap();
        assert_right_residuals(&a, &result.values, result.right.as_ref().unwrap(), TOL);
        assert_left_residuals(&a, &result.values, result.left.as_ref().unwrap(), TOL);
    }
}
