//! Integration tests for batched eigendecomposition

use eigv::error::Error;
use eigv::prelude::*;

mod common;

#[test]
fn test_batch_matches_single_calls() {
    let matrices: Vec<Vec<Vec<f64>>> = (0..16)
        .map(|k| common::random_matrix(2 + k % 5, k as u64))
        .collect();
    let options = EigOptions::both();

    let batch = eig_batch(&matrices, &options);
    assert_eq!(batch.len(), matrices.len());
    for (m, result) in matrices.iter().zip(batch) {
        assert_eq!(result.unwrap(), eig_with(m, &options).unwrap());
    }
}

#[test]
fn test_batch_keeps_errors_in_place() {
    let matrices = vec![
        vec![vec![1.0, 0.0], vec![0.0, 2.0]],
        vec![vec![1.0, 2.0, 3.0]],
        vec![],
        vec![vec![5.0]],
    ];
    let batch = eig_batch(&matrices, &EigOptions::values_only());

    assert_eq!(batch[0].as_ref().unwrap().order(), 2);
    assert!(matches!(
        batch[1],
        Err(Error::NonSquareMatrixInput { row: 0, .. })
    ));
    assert_eq!(batch[2].as_ref().unwrap_err().status(), Some(-5));
    assert_eq!(
        batch[3].as_ref().unwrap().values,
        vec![Complex::new(5.0, 0.0)]
    );
}

#[test]
fn test_batch_of_arrays() {
    let matrices = [[[0.0, -1.0], [1.0, 0.0]], [[2.0, 1.0], [1.0, 2.0]]];
    let batch = eig_batch(&matrices, &EigOptions::values_only());
    assert_eq!(
        batch[0].as_ref().unwrap().values,
        vec![Complex::new(0.0, 1.0), Complex::new(0.0, -1.0)]
    );
    assert_eq!(
        batch[1].as_ref().unwrap().values,
        vec![Complex::new(3.0, 0.0), Complex::new(1.0, 0.0)]
    );
}
