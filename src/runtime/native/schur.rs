//! Real Schur form by Francis double-shift QR iteration
//!
//! Works on a Hessenberg matrix in place, applying every similarity to the
//! full matrix so that on success `A = Z·T·Zᵀ` with T upper quasi-triangular.

use super::matrix::ColMatrix;
use tracing::trace;

/// Eigenvalues read off the converged Schur form, in diagonal order.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct SchurEigenvalues {
    /// Real parts
    pub wr: Vec<f64>,
    /// Imaginary parts; conjugate pairs are stored positive member first
    pub wi: Vec<f64>,
}

/// Iterate `h` (upper Hessenberg) to real Schur form, accumulating into `z`.
///
/// `max_iter` bounds the total number of QR sweeps. On failure returns the
/// zero-based index of the eigenvalue that did not converge; entries after
/// it were already deflated.
///
/// 2×2 blocks with real eigenvalues are split by a plane rotation, so every
/// remaining 2×2 block carries a complex pair `(p + iq, p - iq)` with `q > 0`.
pub(crate) fn schur_decompose(
    h: &mut ColMatrix,
    z: &mut ColMatrix,
    max_iter: usize,
) -> std::result::Result<SchurEigenvalues, usize> {
    let nn = h.order();
    let mut wr = vec![0.0; nn];
    let mut wi = vec![0.0; nn];
    if nn == 0 {
        return Ok(SchurEigenvalues { wr, wi });
    }

    let eps = f64::EPSILON;
    let norm = h.hessenberg_norm();
    let mut exshift = 0.0;
    let mut iter = 0usize;
    let mut total = 0usize;

    // Number of rows still undeflated; the active bottom row is `hi - 1`
    let mut hi = nn;
    while hi > 0 {
        let en = hi - 1;

        // Look for a single small subdiagonal element
        let mut l = en;
        while l > 0 {
            let mut s = h[(l - 1, l - 1)].abs() + h[(l, l)].abs();
            if s == 0.0 {
                s = norm;
            }
            if h[(l, l - 1)].abs() <= eps * s {
                h[(l, l - 1)] = 0.0;
                break;
            }
            l -= 1;
        }

        if l == en {
            // One root found
            h[(en, en)] += exshift;
            wr[en] = h[(en, en)];
            wi[en] = 0.0;
            trace!(index = en, iterations = iter, "real eigenvalue deflated");
            hi -= 1;
            iter = 0;
            continue;
        }

        if l + 1 == en {
            // Two roots found
            split_2x2_block(h, z, en, exshift, &mut wr, &mut wi);
            trace!(index = en - 1, iterations = iter, "2x2 block deflated");
            hi -= 2;
            iter = 0;
            continue;
        }

        if total >= max_iter {
            return Err(en);
        }

        // Form shift
        let mut x = h[(en, en)];
        let mut y = h[(en - 1, en - 1)];
        let mut w = h[(en, en - 1)] * h[(en - 1, en)];

        // Exceptional shift after 10 stalled sweeps
        if iter == 10 {
            exshift += x;
            for i in 0..=en {
                h[(i, i)] -= x;
            }
            let s = h[(en, en - 1)].abs() + h[(en - 1, en - 2)].abs();
            x = 0.75 * s;
            y = x;
            w = -0.4375 * s * s;
        }

        // Second exceptional shift after 30 stalled sweeps
        if iter == 30 {
            let mut s = (y - x) / 2.0;
            s = s * s + w;
            if s > 0.0 {
                s = s.sqrt();
                if y < x {
                    s = -s;
                }
                s = x - w / ((y - x) / 2.0 + s);
                for i in 0..=en {
                    h[(i, i)] -= s;
                }
                exshift += s;
                x = 0.964;
                y = x;
                w = x;
            }
        }

        iter += 1;
        total += 1;

        double_shift_sweep(h, z, l, en, x, y, w);
    }

    Ok(SchurEigenvalues { wr, wi })
}

/// Deflate the converged 2×2 block at rows `en-1..=en`.
///
/// Real eigenvalues: rotate the block to upper triangular form.
/// Complex pair: leave the block as is and record `(p ± iq)`.
fn split_2x2_block(
    h: &mut ColMatrix,
    z: &mut ColMatrix,
    en: usize,
    exshift: f64,
    wr: &mut [f64],
    wi: &mut [f64],
) {
    let nn = h.order();
    let w = h[(en, en - 1)] * h[(en - 1, en)];
    let p = (h[(en - 1, en - 1)] - h[(en, en)]) / 2.0;
    let q = p * p + w;
    let mut zz = q.abs().sqrt();
    h[(en, en)] += exshift;
    h[(en - 1, en - 1)] += exshift;
    let x = h[(en, en)];

    if q < 0.0 {
        wr[en - 1] = x + p;
        wr[en] = x + p;
        wi[en - 1] = zz;
        wi[en] = -zz;
        return;
    }

    // Real pair
    zz = if p >= 0.0 { p + zz } else { p - zz };
    wr[en - 1] = x + zz;
    wr[en] = wr[en - 1];
    if zz != 0.0 {
        wr[en] = x - w / zz;
    }
    wi[en - 1] = 0.0;
    wi[en] = 0.0;

    let sub = h[(en, en - 1)];
    let s = sub.abs() + zz.abs();
    let mut cp = sub / s;
    let mut cq = zz / s;
    let r = (cp * cp + cq * cq).sqrt();
    cp /= r;
    cq /= r;

    // Row modification
    for j in (en - 1)..nn {
        let t = h[(en - 1, j)];
        h[(en - 1, j)] = cq * t + cp * h[(en, j)];
        h[(en, j)] = cq * h[(en, j)] - cp * t;
    }
    // Column modification
    for i in 0..=en {
        let t = h[(i, en - 1)];
        h[(i, en - 1)] = cq * t + cp * h[(i, en)];
        h[(i, en)] = cq * h[(i, en)] - cp * t;
    }
    // Accumulate transformations
    for i in 0..nn {
        let t = z[(i, en - 1)];
        z[(i, en - 1)] = cq * t + cp * z[(i, en)];
        z[(i, en)] = cq * z[(i, en)] - cp * t;
    }
    h[(en, en - 1)] = 0.0;
}

/// One implicit double-shift QR sweep on the active window `l..=en`.
///
/// `(x, y, w)` describe the shift: the trailing 2×2 block's diagonal entries
/// and the product of its off-diagonal entries.
fn double_shift_sweep(
    h: &mut ColMatrix,
    z: &mut ColMatrix,
    l: usize,
    en: usize,
    x: f64,
    y: f64,
    w: f64,
) {
    let nn = h.order();
    let eps = f64::EPSILON;

    // Look for two consecutive small subdiagonal elements
    let (mut p, mut q, mut r);
    let mut m = en - 2;
    loop {
        let zm = h[(m, m)];
        let rr = x - zm;
        let ss = y - zm;
        p = (rr * ss - w) / h[(m + 1, m)] + h[(m, m + 1)];
        q = h[(m + 1, m + 1)] - zm - rr - ss;
        r = h[(m + 2, m + 1)];
        let s = p.abs() + q.abs() + r.abs();
        p /= s;
        q /= s;
        r /= s;
        if m == l {
            break;
        }
        let lhs = h[(m, m - 1)].abs() * (q.abs() + r.abs());
        let rhs = eps * (p.abs() * (h[(m - 1, m - 1)].abs() + zm.abs() + h[(m + 1, m + 1)].abs()));
        if lhs < rhs {
            break;
        }
        m -= 1;
    }

    for i in (m + 2)..=en {
        h[(i, i - 2)] = 0.0;
        if i > m + 2 {
            h[(i, i - 3)] = 0.0;
        }
    }

    // Double QR step on rows l..=en and columns m..=en
    let mut scale = 0.0;
    for k in m..en {
        let notlast = k != en - 1;
        if k != m {
            p = h[(k, k - 1)];
            q = h[(k + 1, k - 1)];
            r = if notlast { h[(k + 2, k - 1)] } else { 0.0 };
            scale = p.abs() + q.abs() + r.abs();
            if scale == 0.0 {
                continue;
            }
            p /= scale;
            q /= scale;
            r /= scale;
        }

        let mut s = (p * p + q * q + r * r).sqrt();
        if p < 0.0 {
            s = -s;
        }
        if s == 0.0 {
            continue;
        }

        if k != m {
            h[(k, k - 1)] = -s * scale;
        } else if l != m {
            h[(k, k - 1)] = -h[(k, k - 1)];
        }
        p += s;
        let vx = p / s;
        let vy = q / s;
        let vz = r / s;
        q /= p;
        r /= p;

        // Row modification
        for j in k..nn {
            let mut t = h[(k, j)] + q * h[(k + 1, j)];
            if notlast {
                t += r * h[(k + 2, j)];
                h[(k + 2, j)] -= t * vz;
            }
            h[(k, j)] -= t * vx;
            h[(k + 1, j)] -= t * vy;
        }

        // Column modification
        for i in 0..=en.min(k + 3) {
            let mut t = vx * h[(i, k)] + vy * h[(i, k + 1)];
            if notlast {
                t += vz * h[(i, k + 2)];
                h[(i, k + 2)] -= t * r;
            }
            h[(i, k)] -= t;
            h[(i, k + 1)] -= t * q;
        }

        // Accumulate transformations
        for i in 0..nn {
            let mut t = vx * z[(i, k)] + vy * z[(i, k + 1)];
            if notlast {
                t += vz * z[(i, k + 2)];
                z[(i, k + 2)] -= t * r;
            }
            z[(i, k)] -= t;
            z[(i, k + 1)] -= t * q;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn schur(n: usize, data: Vec<f64>) -> (ColMatrix, ColMatrix, SchurEigenvalues) {
        let mut h = ColMatrix::from_vec(n, data);
        let mut z = ColMatrix::identity(n);
        let eigs = schur_decompose(&mut h, &mut z, 30 * n.max(10)).unwrap();
        (h, z, eigs)
    }

    #[test]
    fn test_diagonal_is_already_converged() {
        let (_, z, eigs) = schur(2, vec![1.0, 0.0, 0.0, 2.0]);
        assert_eq!(eigs.wr, vec![1.0, 2.0]);
        assert_eq!(eigs.wi, vec![0.0, 0.0]);
        assert_eq!(z, ColMatrix::identity(2));
    }

    #[test]
    fn test_symmetric_2x2_pair_order() {
        // [[2, 1], [1, 2]] deflates as one block: larger root first
        let (t, _, eigs) = schur(2, vec![2.0, 1.0, 1.0, 2.0]);
        assert_eq!(eigs.wr, vec![3.0, 1.0]);
        assert_eq!(eigs.wi, vec![0.0, 0.0]);
        assert_eq!(t[(1, 0)], 0.0);
    }

    #[test]
    fn test_rotation_gives_conjugate_pair() {
        // [[0, -1], [1, 0]] column-major
        let (_, _, eigs) = schur(2, vec![0.0, 1.0, -1.0, 0.0]);
        assert_eq!(eigs.wr, vec![0.0, 0.0]);
        assert_eq!(eigs.wi, vec![1.0, -1.0]);
    }

    #[test]
    fn test_companion_matrix_roots() {
        // Companion of (x-1)(x-2)(x-3) = x³ - 6x² + 11x - 6, Hessenberg already
        #[rustfmt::skip]
        let data = vec![
            6.0, 1.0, 0.0,
            -11.0, 0.0, 1.0,
            6.0, 0.0, 0.0,
        ];
        let (_, _, eigs) = schur(3, data);
        let mut roots = eigs.wr.clone();
        roots.sort_by(|a, b| a.partial_cmp(b).unwrap());
        for (got, want) in roots.iter().zip([1.0, 2.0, 3.0]) {
            assert!((got - want).abs() < 1e-10, "{got} vs {want}");
        }
        assert!(eigs.wi.iter().all(|&im| im == 0.0));
    }

    #[test]
    fn test_iteration_budget_exhausted() {
        // Companion of x³ - 6x² + 11x - 6 needs more than zero sweeps
        #[rustfmt::skip]
        let mut h = ColMatrix::from_vec(3, vec![
            6.0, 1.0, 0.0,
            -11.0, 0.0, 1.0,
            6.0, 0.0, 0.0,
        ]);
        let mut z = ColMatrix::identity(3);
        assert_eq!(schur_decompose(&mut h, &mut z, 0), Err(2));
    }
}
