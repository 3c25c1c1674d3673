//! Eigenvectors of a real Schur form
//!
//! Right eigenvectors come from back-substitution on the quasi-triangular
//! factor T. Left eigenvectors reuse the same routine on the
//! reverse-transpose of T, whose right eigenvectors are the reversed,
//! conjugated left eigenvectors of T.
//!
//! Output uses the packed real convention: a real eigenvalue owns one column,
//! a conjugate pair `(j, j+1)` stores the real part of eigenvector `j` in
//! column `j` and its imaginary part in column `j + 1`.

use super::matrix::ColMatrix;

/// Right eigenvectors of `A = Z·T·Zᵀ`, packed and normalised.
pub(crate) fn right_eigenvectors(t: &ColMatrix, z: &ColMatrix, wr: &[f64], wi: &[f64]) -> Vec<f64> {
    let mut x = t.clone();
    back_substitute(&mut x, wr, wi);
    let mut v = z.matmul(&x);
    normalize_packed(&mut v, wi);
    v.as_slice().to_vec()
}

/// Left eigenvectors `u` with `uᴴ·A = λ·uᴴ`, packed and normalised.
pub(crate) fn left_eigenvectors(t: &ColMatrix, z: &ColMatrix, wr: &[f64], wi: &[f64]) -> Vec<f64> {
    let n = t.order();

    // Reverse-transposed T lists the same blocks bottom-up; a pair keeps its
    // positive member first, which flips the sign of each reversed entry.
    let mut xr = t.reverse_transpose();
    let wr_rev: Vec<f64> = wr.iter().rev().copied().collect();
    let wi_rev: Vec<f64> = wi.iter().rev().map(|&im| -im).collect();
    back_substitute(&mut xr, &wr_rev, &wi_rev);

    // Undo the reversal and conjugate
    let mut y = ColMatrix::zeros(n);
    let mut c = 0;
    while c < n {
        if wi[c] == 0.0 {
            for r in 0..n {
                y[(r, c)] = xr[(n - 1 - r, n - 1 - c)];
            }
            c += 1;
        } else {
            for r in 0..n {
                y[(r, c)] = xr[(n - 1 - r, n - 2 - c)];
                y[(r, c + 1)] = -xr[(n - 1 - r, n - 1 - c)];
            }
            c += 2;
        }
    }

    let mut u = z.matmul(&y);
    normalize_packed(&mut u, wi);
    u.as_slice().to_vec()
}

/// Overwrite the quasi-triangular `x` with the packed eigenvectors of itself.
///
/// Blocks are identified from `wi`: a non-zero entry marks a 2×2 block whose
/// first row has `wi > 0`. Only the upper triangle and the subdiagonal
/// entries inside 2×2 blocks are read. On return the strict lower triangle is
/// zero.
fn back_substitute(x: &mut ColMatrix, wr: &[f64], wi: &[f64]) {
    let nn = x.order();
    let norm = x.hessenberg_norm();
    if norm == 0.0 {
        *x = ColMatrix::identity(nn);
        return;
    }

    for en in (0..nn).rev() {
        let p = wr[en];
        let q = wi[en];

        if q == 0.0 {
            real_vector(x, wr, wi, en, p, norm);
        } else if q < 0.0 {
            complex_vector(x, wr, wi, en, p, q, norm);
        }
    }

    x.clear_strict_lower();
}

/// Back-substitution for the real eigenvalue `p` at `en`.
fn real_vector(x: &mut ColMatrix, wr: &[f64], wi: &[f64], en: usize, p: f64, norm: f64) {
    let eps = f64::EPSILON;
    let (mut zz, mut s) = (0.0, 0.0);
    let mut l = en;
    x[(en, en)] = 1.0;

    for i in (0..en).rev() {
        let w = x[(i, i)] - p;
        let r: f64 = (l..=en).map(|j| x[(i, j)] * x[(j, en)]).sum();

        if wi[i] < 0.0 {
            zz = w;
            s = r;
            continue;
        }

        l = i;
        if wi[i] == 0.0 {
            x[(i, en)] = if w != 0.0 { -r / w } else { -r / (eps * norm) };
        } else {
            // Solve the real 2×2 system for rows i, i+1
            let bx = x[(i, i + 1)];
            let by = x[(i + 1, i)];
            let dq = (wr[i] - p) * (wr[i] - p) + wi[i] * wi[i];
            let t = (bx * s - zz * r) / dq;
            x[(i, en)] = t;
            x[(i + 1, en)] = if bx.abs() > zz.abs() {
                (-r - w * t) / bx
            } else {
                (-s - by * t) / zz
            };
        }

        // Overflow control
        let t = x[(i, en)].abs();
        if (eps * t) * t > 1.0 {
            for j in i..=en {
                x[(j, en)] /= t;
            }
        }
    }
}

/// Back-substitution for the complex pair ending at `en`, with `q = wi[en] < 0`.
///
/// Fills columns `en - 1` (real part) and `en` (imaginary part) with the
/// eigenvector of `p + i·|q|`, the first member of the pair.
fn complex_vector(x: &mut ColMatrix, wr: &[f64], wi: &[f64], en: usize, p: f64, q: f64, norm: f64) {
    let eps = f64::EPSILON;
    let mut l = en - 1;

    // Last vector component imaginary so the block is triangular
    if x[(en, en - 1)].abs() > x[(en - 1, en)].abs() {
        x[(en - 1, en - 1)] = q / x[(en, en - 1)];
        x[(en - 1, en)] = -(x[(en, en)] - p) / x[(en, en - 1)];
    } else {
        let (cr, ci) = cdiv(0.0, -x[(en - 1, en)], x[(en - 1, en - 1)] - p, q);
        x[(en - 1, en - 1)] = cr;
        x[(en - 1, en)] = ci;
    }
    x[(en, en - 1)] = 0.0;
    x[(en, en)] = 1.0;

    let (mut zz, mut r, mut s) = (0.0, 0.0, 0.0);
    for i in (0..en.saturating_sub(1)).rev() {
        let mut ra = 0.0;
        let mut sa = 0.0;
        for j in l..=en {
            ra += x[(i, j)] * x[(j, en - 1)];
            sa += x[(i, j)] * x[(j, en)];
        }
        let w = x[(i, i)] - p;

        if wi[i] < 0.0 {
            zz = w;
            r = ra;
            s = sa;
            continue;
        }

        l = i;
        if wi[i] == 0.0 {
            let (cr, ci) = cdiv(-ra, -sa, w, q);
            x[(i, en - 1)] = cr;
            x[(i, en)] = ci;
        } else {
            // Solve the complex 2×2 system for rows i, i+1
            let bx = x[(i, i + 1)];
            let by = x[(i + 1, i)];
            let mut vr = (wr[i] - p) * (wr[i] - p) + wi[i] * wi[i] - q * q;
            let vi = (wr[i] - p) * 2.0 * q;
            if vr == 0.0 && vi == 0.0 {
                vr = eps * norm * (w.abs() + q.abs() + bx.abs() + by.abs() + zz.abs());
            }
            let (cr, ci) = cdiv(bx * r - zz * ra + q * sa, bx * s - zz * sa - q * ra, vr, vi);
            x[(i, en - 1)] = cr;
            x[(i, en)] = ci;
            if bx.abs() > zz.abs() + q.abs() {
                x[(i + 1, en - 1)] = (-ra - w * x[(i, en - 1)] + q * x[(i, en)]) / bx;
                x[(i + 1, en)] = (-sa - w * x[(i, en)] - q * x[(i, en - 1)]) / bx;
            } else {
                let (cr, ci) = cdiv(-r - by * x[(i, en - 1)], -s - by * x[(i, en)], zz, q);
                x[(i + 1, en - 1)] = cr;
                x[(i + 1, en)] = ci;
            }
        }

        // Overflow control
        let t = x[(i, en - 1)].abs().max(x[(i, en)].abs());
        if (eps * t) * t > 1.0 {
            for j in i..=en {
                x[(j, en - 1)] /= t;
                x[(j, en)] /= t;
            }
        }
    }
}

/// Complex division `(xr + i·xi) / (yr + i·yi)` without intermediate overflow.
fn cdiv(xr: f64, xi: f64, yr: f64, yi: f64) -> (f64, f64) {
    if yr.abs() > yi.abs() {
        let r = yi / yr;
        let d = yr + r * yi;
        ((xr + r * xi) / d, (xi - r * xr) / d)
    } else {
        let r = yr / yi;
        let d = yi + r * yr;
        ((r * xr + xi) / d, (r * xi - xr) / d)
    }
}

/// Scale every eigenvector to unit Euclidean norm.
///
/// For a conjugate pair the norm covers both packed columns, and the vector
/// is rotated so that its largest component is real.
fn normalize_packed(v: &mut ColMatrix, wi: &[f64]) {
    let n = v.order();
    let column_norm = |v: &ColMatrix, c: usize| {
        (0..n).map(|r| v[(r, c)] * v[(r, c)]).sum::<f64>().sqrt()
    };

    let mut c = 0;
    while c < n {
        if wi[c] == 0.0 {
            let nrm = column_norm(v, c);
            if nrm > 0.0 {
                for r in 0..n {
                    v[(r, c)] /= nrm;
                }
            }
            c += 1;
            continue;
        }

        let nrm = column_norm(v, c).hypot(column_norm(v, c + 1));
        if nrm > 0.0 {
            for r in 0..n {
                v[(r, c)] /= nrm;
                v[(r, c + 1)] /= nrm;
            }
        }

        let mut k = 0;
        let mut best = -1.0;
        for r in 0..n {
            let m = v[(r, c)] * v[(r, c)] + v[(r, c + 1)] * v[(r, c + 1)];
            if m > best {
                best = m;
                k = r;
            }
        }

        let f = v[(k, c)];
        let g = v[(k, c + 1)];
        let radius = f.hypot(g);
        if radius > 0.0 {
            let (cs, sn) = (f / radius, g / radius);
            for r in 0..n {
                let re = v[(r, c)];
                let im = v[(r, c + 1)];
                v[(r, c)] = cs * re + sn * im;
                v[(r, c + 1)] = cs * im - sn * re;
            }
            v[(k, c + 1)] = 0.0;
        }
        c += 2;
    }
}
