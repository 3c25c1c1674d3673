//! Dense square working matrix in column-major order

use std::ops::{Index, IndexMut};

/// Owned `n × n` matrix stored column-major, indexed as `m[(row, col)]`.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ColMatrix {
    n: usize,
    data: Vec<f64>,
}

impl ColMatrix {
    /// Wrap a column-major buffer of length `n * n`.
    pub(crate) fn from_vec(n: usize, data: Vec<f64>) -> Self {
        debug_assert_eq!(data.len(), n * n);
        Self { n, data }
    }

    pub(crate) fn zeros(n: usize) -> Self {
        Self {
            n,
            data: vec![0.0; n * n],
        }
    }

    pub(crate) fn identity(n: usize) -> Self {
        let mut m = Self::zeros(n);
        for i in 0..n {
            m[(i, i)] = 1.0;
        }
        m
    }

    pub(crate) fn order(&self) -> usize {
        self.n
    }

    pub(crate) fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Sum of absolute values on and above the subdiagonal.
    pub(crate) fn hessenberg_norm(&self) -> f64 {
        let mut norm = 0.0;
        for i in 0..self.n {
            for j in i.saturating_sub(1)..self.n {
                norm += self[(i, j)].abs();
            }
        }
        norm
    }

    /// Zero every entry below the first subdiagonal.
    pub(crate) fn clear_below_subdiagonal(&mut self) {
        for j in 0..self.n {
            for i in (j + 2)..self.n {
                self[(i, j)] = 0.0;
            }
        }
    }

    /// Zero every entry strictly below the diagonal.
    pub(crate) fn clear_strict_lower(&mut self) {
        for j in 0..self.n {
            for i in (j + 1)..self.n {
                self[(i, j)] = 0.0;
            }
        }
    }

    /// Reverse-transpose: `out[(i, j)] = self[(n-1-j, n-1-i)]`.
    ///
    /// Maps an upper quasi-triangular matrix to another one with the same
    /// diagonal blocks in reverse order.
    pub(crate) fn reverse_transpose(&self) -> Self {
        let n = self.n;
        let mut out = Self::zeros(n);
        for j in 0..n {
            for i in 0..n {
                out[(i, j)] = self[(n - 1 - j, n - 1 - i)];
            }
        }
        out
    }

    /// Matrix product `self * rhs`.
    pub(crate) fn matmul(&self, rhs: &Self) -> Self {
        debug_assert_eq!(self.n, rhs.n);
        let n = self.n;
        let mut out = Self::zeros(n);
        for j in 0..n {
            for k in 0..n {
                let b = rhs[(k, j)];
                if b == 0.0 {
                    continue;
                }
                for i in 0..n {
                    out[(i, j)] += self[(i, k)] * b;
                }
            }
        }
        out
    }
}

impl Index<(usize, usize)> for ColMatrix {
    type Output = f64;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &f64 {
        &self.data[row + self.n * col]
    }
}

impl IndexMut<(usize, usize)> for ColMatrix {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut f64 {
        &mut self.data[row + self.n * col]
    }
}
