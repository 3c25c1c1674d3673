//! Error types for eigv

use thiserror::Error;

/// Result type alias using eigv's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while computing an eigendecomposition
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A row's length differs from the number of rows
    #[error("Non-square matrix input: row {row} has length {got}, expected {expected}")]
    NonSquareMatrixInput {
        /// Index of the first offending row
        row: usize,
        /// Required row length (the number of rows)
        expected: usize,
        /// Actual row length
        got: usize,
    },

    /// The eigensolver failed or produced output that cannot be decoded
    #[error("Internal error: {reason}")]
    InternalError {
        /// Raw status code reported by the solver, if the failure came from one
        status: Option<i32>,
        /// Human-readable description
        reason: String,
    },
}

impl Error {
    /// Create a non-square input error
    pub fn non_square(row: usize, expected: usize, got: usize) -> Self {
        Self::NonSquareMatrixInput { row, expected, got }
    }

    /// Create an internal error from a non-zero solver status code
    pub fn solver_status(solver: &'static str, info: i32) -> Self {
        let reason = if info < 0 {
            format!("{solver}: argument {} had an illegal value", -info)
        } else {
            format!("{solver}: QR iteration failed to converge (info = {info})")
        };
        Self::InternalError {
            status: Some(info),
            reason,
        }
    }

    /// Create an internal error for solver output that violates the packing convention
    pub fn malformed(reason: impl Into<String>) -> Self {
        Self::InternalError {
            status: None,
            reason: reason.into(),
        }
    }

    /// Raw solver status code carried by this error, if any
    pub fn status(&self) -> Option<i32> {
        match self {
            Self::InternalError { status, .. } => *status,
            Self::NonSquareMatrixInput { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solver_status_keeps_code() {
        let err = Error::solver_status("native", -5);
        assert_eq!(err.status(), Some(-5));
        assert!(err.to_string().contains("argument 5"));

        let err = Error::solver_status("native", 3);
        assert_eq!(err.status(), Some(3));
        assert!(err.to_string().contains("converge"));
    }

    #[test]
    fn test_non_square_display() {
        let err = Error::non_square(1, 2, 3);
        assert_eq!(
            err.to_string(),
            "Non-square matrix input: row 1 has length 3, expected 2"
        );
        assert_eq!(err.status(), None);
    }
}
