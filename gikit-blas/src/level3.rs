//! BLAS Level 3: Matrix-matrix operations.
//!
//! GEMM only. Column-major throughout, unblocked: each orientation pair has
//! its own loop nest chosen so the innermost loop walks a contiguous column
//! where the storage allows it.

use gikit_core::layout::Transpose;
use gikit_core::stride::matrix_span;

// ============================================================================
// DGEMM: Double-precision General Matrix Multiply
// C := alpha * op(A) * op(B) + beta * C
// ============================================================================

/// Double-precision GEMM: C := alpha * op(A) * op(B) + beta * C
///
/// `op(A)` is `m x k`, `op(B)` is `k x n`, `C` is `m x n`. Stored shapes
/// follow the flags: `A` is `m x k` (`NoTrans`) or `k x m` (`Trans`), and
/// likewise `B` is `k x n` or `n x k`.
///
/// Degenerate sizes: `m == 0` or `n == 0` returns immediately. `k == 0` or
/// `alpha == 0` reduces to `C := beta * C` without touching `A` or `B`.
/// With `beta == 0`, `C` is overwritten and its prior contents never read.
///
/// Entries of `op(A)` that are exactly zero contribute no term, and every
/// sum starts from `-0.0`. With `A = I`, `alpha = 1` and `beta = 0` the
/// result is therefore `op(B)` bit for bit, signed zeros and infinities
/// included: a non-finite `B` entry only reaches the rows where `op(A)` is
/// nonzero. Non-finite values in `A` itself still propagate.
pub fn dgemm(
    trans_a: Transpose,
    trans_b: Transpose,
    m: usize,
    n: usize,
    k: usize,
    alpha: f64,
    a: &[f64],
    lda: usize,
    b: &[f64],
    ldb: usize,
    beta: f64,
    c: &mut [f64],
    ldc: usize,
) {
    if m == 0 || n == 0 || ((alpha == 0.0 || k == 0) && beta == 1.0) {
        return;
    }

    // Stored row counts: the leading dimensions must cover them.
    let (nrow_a, ncol_a) = trans_a.apply(m, k);
    let (nrow_b, ncol_b) = trans_b.apply(k, n);
    contract!(lda >= nrow_a.max(1), "dgemm: lda {lda} < {nrow_a}");
    contract!(ldb >= nrow_b.max(1), "dgemm: ldb {ldb} < {nrow_b}");
    contract!(ldc >= m.max(1), "dgemm: ldc {ldc} < m {m}");
    contract!(c.len() >= matrix_span(m, n, ldc), "dgemm: C too short");

    if alpha == 0.0 || k == 0 {
        scale_c(m, n, beta, c, ldc);
        return;
    }
    contract!(a.len() >= matrix_span(nrow_a, ncol_a, lda), "dgemm: A too short");
    contract!(b.len() >= matrix_span(nrow_b, ncol_b, ldb), "dgemm: B too short");

    match (trans_a, trans_b) {
        (Transpose::NoTrans, Transpose::NoTrans) => {
            // C_col_j += sum_l (alpha * B[l, j]) * A_col_l
            for j in 0..n {
                let c_col = &mut c[j * ldc..j * ldc + m];
                seed_column(c_col, beta);
                for l in 0..k {
                    let temp = alpha * b[l + j * ldb];
                    axpy_column(temp, &a[l * lda..l * lda + m], c_col);
                }
            }
        }
        (Transpose::NoTrans, Transpose::Trans) => {
            // op(B)[l, j] = B[j, l]
            for j in 0..n {
                let c_col = &mut c[j * ldc..j * ldc + m];
                seed_column(c_col, beta);
                for l in 0..k {
                    let temp = alpha * b[j + l * ldb];
                    axpy_column(temp, &a[l * lda..l * lda + m], c_col);
                }
            }
        }
        (Transpose::Trans, Transpose::NoTrans) => {
            // C[i, j] = alpha * dot(A_col_i, B_col_j) + beta * C[i, j]
            for j in 0..n {
                let b_col = &b[j * ldb..j * ldb + k];
                for i in 0..m {
                    let a_col = &a[i * lda..i * lda + k];
                    let temp = a_col
                        .iter()
                        .zip(b_col)
                        .filter(|(x, _)| **x != 0.0)
                        .fold(-0.0_f64, |acc, (x, y)| acc + x * y);
                    store(&mut c[i + j * ldc], alpha * temp, beta);
                }
            }
        }
        (Transpose::Trans, Transpose::Trans) => {
            // C[i, j] = alpha * sum_l A[l, i] * B[j, l] + beta * C[i, j]
            for j in 0..n {
                for i in 0..m {
                    let a_col = &a[i * lda..i * lda + k];
                    let temp = a_col
                        .iter()
                        .enumerate()
                        .filter(|(_, x)| **x != 0.0)
                        .fold(-0.0_f64, |acc, (l, x)| acc + x * b[j + l * ldb]);
                    store(&mut c[i + j * ldc], alpha * temp, beta);
                }
            }
        }
    }
}

/// C := beta * C over the `m x n` block, never reading C when `beta == 0`.
fn scale_c(m: usize, n: usize, beta: f64, c: &mut [f64], ldc: usize) {
    for j in 0..n {
        scale_column(&mut c[j * ldc..j * ldc + m], beta);
    }
}

#[inline]
fn scale_column(col: &mut [f64], beta: f64) {
    if beta == 0.0 {
        col.fill(0.0);
    } else if beta != 1.0 {
        col.iter_mut().for_each(|v| *v *= beta);
    }
}

/// Prepare an output column for accumulation. `-0.0` is the additive
/// identity, so a column seeded with it keeps the sign of a lone `-0.0` term.
#[inline]
fn seed_column(col: &mut [f64], beta: f64) {
    if beta == 0.0 {
        col.fill(-0.0);
    } else {
        scale_column(col, beta);
    }
}

/// y += alpha * x, skipping zero entries of x.
#[inline]
fn axpy_column(alpha: f64, x: &[f64], y: &mut [f64]) {
    for (yi, &xi) in y.iter_mut().zip(x) {
        if xi != 0.0 {
            *yi += alpha * xi;
        }
    }
}

#[inline]
fn store(cij: &mut f64, value: f64, beta: f64) {
    *cij = if beta == 0.0 { value } else { value + beta * *cij };
}
