//! Orthogonal reduction to upper Hessenberg form

use super::matrix::ColMatrix;

/// Reduce `h` to upper Hessenberg form using Householder reflections.
///
/// On return `h ← Qᵀ·h·Q` and `z ← z·Q`, so starting from `z = I` gives
/// `A = Z·H·Zᵀ`. Entries below the subdiagonal are set to exactly zero.
pub(crate) fn hessenberg_reduction(h: &mut ColMatrix, z: &mut ColMatrix) {
    let n = h.order();
    if n < 3 {
        return;
    }

    for k in 0..(n - 2) {
        // Column k is already reduced when everything below the subdiagonal is zero
        if ((k + 2)..n).all(|i| h[(i, k)] == 0.0) {
            continue;
        }

        // Householder vector for column k, rows k+1..n
        let mut v: Vec<f64> = ((k + 1)..n).map(|i| h[(i, k)]).collect();
        let norm = v.iter().map(|x| x * x).sum::<f64>().sqrt();
        let alpha = if v[0] >= 0.0 { -norm } else { norm };
        v[0] -= alpha;

        let v_norm = v.iter().map(|x| x * x).sum::<f64>().sqrt();
        if v_norm == 0.0 {
            continue;
        }
        for vi in &mut v {
            *vi /= v_norm;
        }

        // Left: H[k+1:n, :] -= 2 v (vᵀ H[k+1:n, :])
        for j in 0..n {
            let dot: f64 = v
                .iter()
                .enumerate()
                .map(|(i, vi)| vi * h[(k + 1 + i, j)])
                .sum();
            for (i, vi) in v.iter().enumerate() {
                h[(k + 1 + i, j)] -= 2.0 * vi * dot;
            }
        }

        // Right: H[:, k+1:n] -= 2 (H[:, k+1:n] v) vᵀ
        for i in 0..n {
            let dot: f64 = v
                .iter()
                .enumerate()
                .map(|(j, vj)| h[(i, k + 1 + j)] * vj)
                .sum();
            for (j, vj) in v.iter().enumerate() {
                h[(i, k + 1 + j)] -= 2.0 * dot * vj;
            }
        }

        // Accumulate: Z[:, k+1:n] -= 2 (Z[:, k+1:n] v) vᵀ
        for i in 0..n {
            let dot: f64 = v
                .iter()
                .enumerate()
                .map(|(j, vj)| z[(i, k + 1 + j)] * vj)
                .sum();
            for (j, vj) in v.iter().enumerate() {
                z[(i, k + 1 + j)] -= 2.0 * dot * vj;
            }
        }
    }

    h.clear_below_subdiagonal();
}
