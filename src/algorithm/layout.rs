//! Row-major input validation and column-major flattening
//!
//! Callers hand matrices over as rows; the eigensolver contract expects a
//! single column-major (Fortran order) buffer where `buffer[row + n * col]`
//! holds `matrix[row][col]`.

use crate::error::{Error, Result};

/// Confirm every row has as many entries as there are rows.
///
/// Returns the matrix order `n`. An empty matrix is vacuously square.
pub fn validate_square<R: AsRef<[f64]>>(matrix: &[R]) -> Result<usize> {
    let n = matrix.len();
    match matrix
        .iter()
        .enumerate()
        .find(|(_, row)| row.as_ref().len() != n)
    {
        Some((row, values)) => Err(Error::non_square(row, n, values.as_ref().len())),
        None => Ok(n),
    }
}

/// Flatten a validated square matrix into a fresh column-major buffer.
///
/// The caller's rows are only read; the returned buffer is owned and may be
/// handed to a solver that overwrites it.
pub fn to_column_major<R: AsRef<[f64]>>(matrix: &[R]) -> Vec<f64> {
    let n = matrix.len();
    let mut buffer = vec![0.0; n * n];
    for (row, values) in matrix.iter().enumerate() {
        for (col, &value) in values.as_ref().iter().enumerate() {
            buffer[row + n * col] = value;
        }
    }
    buffer
}

/// Rebuild rows from an `n × n` column-major buffer.
pub fn from_column_major(n: usize, buffer: &[f64]) -> Vec<Vec<f64>> {
    debug_assert_eq!(buffer.len(), n * n);
    (0..n)
        .map(|row| (0..n).map(|col| buffer[row + n * col]).collect())
        .collect()
}
