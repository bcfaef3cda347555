//! BLAS Level 2: Matrix-vector operations.
//!
//! Matrices are column-major (`a[i + j * lda]`). Symmetric and triangular
//! routines read or write only the triangle selected by `Uplo`; the other
//! triangle is never touched, so it may hold anything (including NaN).
//!
//! Loops run column by column so the innermost access to `A` is contiguous.
//! Vector operands use the signed-increment convention of [`crate::level1`].

use gikit_core::layout::{Diag, Transpose, Uplo};
use gikit_core::stride::{matrix_span, offset, packed_index, packed_len, span};

/// y := beta * y over a strided view. `beta == 0` overwrites without reading.
#[inline]
fn scale_by_beta(len: usize, beta: f64, y: &mut [f64], incy: isize) {
    if beta == 0.0 {
        if incy == 1 {
            y[..len].fill(0.0);
        } else {
            for i in 0..len {
                y[offset(len, incy, i)] = 0.0;
            }
        }
    } else if beta != 1.0 {
        if incy == 1 {
            y[..len].iter_mut().for_each(|yi| *yi *= beta);
        } else {
            for i in 0..len {
                y[offset(len, incy, i)] *= beta;
            }
        }
    }
}

// ============================================================================
// GEMV: General matrix-vector multiply
// y := alpha * op(A) * x + beta * y
// ============================================================================

/// Double-precision GEMV: y := alpha * op(A) * x + beta * y
///
/// `A` is `m x n` as stored. With `Transpose::Trans`, x has length `m` and
/// y has length `n`; otherwise x has length `n` and y has length `m`.
pub fn dgemv(
    trans: Transpose,
    m: usize,
    n: usize,
    alpha: f64,
    a: &[f64],
    lda: usize,
    x: &[f64],
    incx: isize,
    beta: f64,
    y: &mut [f64],
    incy: isize,
) {
    if m == 0 || n == 0 || (alpha == 0.0 && beta == 1.0) {
        return;
    }

    let (leny, lenx) = trans.apply(m, n);
    contract!(lda >= m.max(1), "dgemv: lda {lda} < m {m}");
    contract!(incx != 0 && incy != 0, "dgemv: zero increment");
    contract!(y.len() >= span(leny, incy), "dgemv: y too short");

    scale_by_beta(leny, beta, y, incy);

    if alpha == 0.0 {
        return;
    }
    contract!(a.len() >= matrix_span(m, n, lda), "dgemv: A too short");
    contract!(x.len() >= span(lenx, incx), "dgemv: x too short");

    match trans {
        Transpose::NoTrans => {
            // y += (alpha * x[j]) * A_col_j
            for j in 0..n {
                let temp = alpha * x[offset(n, incx, j)];
                let col = &a[j * lda..j * lda + m];
                if incy == 1 {
                    for (yi, &aij) in y[..m].iter_mut().zip(col) {
                        *yi += temp * aij;
                    }
                } else {
                    for (i, &aij) in col.iter().enumerate() {
                        y[offset(m, incy, i)] += temp * aij;
                    }
                }
            }
        }
        Transpose::Trans => {
            // y[j] += alpha * dot(A_col_j, x)
            for j in 0..n {
                let col = &a[j * lda..j * lda + m];
                let dot: f64 = if incx == 1 {
                    col.iter().zip(&x[..m]).map(|(aij, xi)| aij * xi).sum()
                } else {
                    col.iter()
                        .enumerate()
                        .map(|(i, aij)| aij * x[offset(m, incx, i)])
                        .sum()
                };
                y[offset(n, incy, j)] += alpha * dot;
            }
        }
    }
}

// ============================================================================
// SYMV: Symmetric matrix-vector multiply
// ============================================================================

/// Double-precision SYMV: y := alpha * A * x + beta * y (A symmetric)
///
/// Entries of the unreferenced triangle are synthesized from the stored one
/// (`A[j, i] = A[i, j]`); each diagonal entry contributes once.
pub fn dsymv(
    uplo: Uplo,
    n: usize,
    alpha: f64,
    a: &[f64],
    lda: usize,
    x: &[f64],
    incx: isize,
    beta: f64,
    y: &mut [f64],
    incy: isize,
) {
    if n == 0 || (alpha == 0.0 && beta == 1.0) {
        return;
    }
    contract!(lda >= n.max(1), "dsymv: lda {lda} < n {n}");
    contract!(incx != 0 && incy != 0, "dsymv: zero increment");
    contract!(y.len() >= span(n, incy), "dsymv: y too short");

    scale_by_beta(n, beta, y, incy);

    if alpha == 0.0 {
        return;
    }
    contract!(a.len() >= matrix_span(n, n, lda), "dsymv: A too short");
    contract!(x.len() >= span(n, incx), "dsymv: x too short");

    let ix = move |i: usize| offset(n, incx, i);
    let iy = move |i: usize| offset(n, incy, i);

    match uplo {
        Uplo::Upper => {
            for j in 0..n {
                let temp1 = alpha * x[ix(j)];
                let mut temp2 = 0.0f64;
                let col = j * lda;
                for i in 0..j {
                    let aij = a[col + i];
                    y[iy(i)] += temp1 * aij;
                    temp2 += aij * x[ix(i)];
                }
                y[iy(j)] += temp1 * a[col + j] + alpha * temp2;
            }
        }
        Uplo::Lower => {
            for j in 0..n {
                let temp1 = alpha * x[ix(j)];
                let mut temp2 = 0.0f64;
                let col = j * lda;
                y[iy(j)] += temp1 * a[col + j];
                for i in (j + 1)..n {
                    let aij = a[col + i];
                    y[iy(i)] += temp1 * aij;
                    temp2 += aij * x[ix(i)];
                }
                y[iy(j)] += alpha * temp2;
            }
        }
    }
}

// ============================================================================
// GER: rank-1 update  A := alpha * x * y^T + A
// ============================================================================

/// Double-precision GER: A := alpha * x * y^T + A
///
/// Each column update is an axpy of `x` scaled by `alpha * y[j]`.
pub fn dger(
    m: usize,
    n: usize,
    alpha: f64,
    x: &[f64],
    incx: isize,
    y: &[f64],
    incy: isize,
    a: &mut [f64],
    lda: usize,
) {
    if m == 0 || n == 0 || alpha == 0.0 {
        return;
    }
    contract!(lda >= m.max(1), "dger: lda {lda} < m {m}");
    contract!(incx != 0 && incy != 0, "dger: zero increment");
    contract!(x.len() >= span(m, incx) && y.len() >= span(n, incy), "dger: vector too short");
    contract!(a.len() >= matrix_span(m, n, lda), "dger: A too short");

    for j in 0..n {
        let temp = alpha * y[offset(n, incy, j)];
        let col = &mut a[j * lda..j * lda + m];
        if incx == 1 {
            for (aij, &xi) in col.iter_mut().zip(&x[..m]) {
                *aij += xi * temp;
            }
        } else {
            for (i, aij) in col.iter_mut().enumerate() {
                *aij += x[offset(m, incx, i)] * temp;
            }
        }
    }
}

// ============================================================================
// SYR / SYR2: symmetric rank-1 and rank-2 updates
// ============================================================================

/// Double-precision SYR: A := alpha * x * x^T + A on the `uplo` triangle only.
pub fn dsyr(uplo: Uplo, n: usize, alpha: f64, x: &[f64], incx: isize, a: &mut [f64], lda: usize) {
    if n == 0 || alpha == 0.0 {
        return;
    }
    contract!(lda >= n.max(1), "dsyr: lda {lda} < n {n}");
    contract!(incx != 0, "dsyr: zero increment");
    contract!(x.len() >= span(n, incx), "dsyr: x too short");
    contract!(a.len() >= matrix_span(n, n, lda), "dsyr: A too short");

    let ix = move |i: usize| offset(n, incx, i);

    for j in 0..n {
        let temp = alpha * x[ix(j)];
        let rows = match uplo {
            Uplo::Upper => 0..j + 1,
            Uplo::Lower => j..n,
        };
        let col = j * lda;
        for i in rows {
            a[col + i] += x[ix(i)] * temp;
        }
    }
}

/// Double-precision SYR2: A := alpha * x * y^T + alpha * y * x^T + A on the
/// `uplo` triangle only.
pub fn dsyr2(
    uplo: Uplo,
    n: usize,
    alpha: f64,
    x: &[f64],
    incx: isize,
    y: &[f64],
    incy: isize,
    a: &mut [f64],
    lda: usize,
) {
    if n == 0 || alpha == 0.0 {
        return;
    }
    contract!(lda >= n.max(1), "dsyr2: lda {lda} < n {n}");
    contract!(incx != 0 && incy != 0, "dsyr2: zero increment");
    contract!(x.len() >= span(n, incx) && y.len() >= span(n, incy), "dsyr2: vector too short");
    contract!(a.len() >= matrix_span(n, n, lda), "dsyr2: A too short");

    let ix = move |i: usize| offset(n, incx, i);
    let iy = move |i: usize| offset(n, incy, i);

    for j in 0..n {
        let temp1 = alpha * y[iy(j)];
        let temp2 = alpha * x[ix(j)];
        let rows = match uplo {
            Uplo::Upper => 0..j + 1,
            Uplo::Lower => j..n,
        };
        let col = j * lda;
        for i in rows {
            a[col + i] += x[ix(i)] * temp1 + y[iy(i)] * temp2;
        }
    }
}

// ============================================================================
// TPSV: Packed triangular solve  x := op(A)^{-1} * x
// ============================================================================

/// Double-precision TPSV: solve `op(A) * x = b` in place, `A` packed triangular.
///
/// `x` holds `b` on entry and the solution on exit. Substitution runs
/// backward for (Upper, NoTrans) and (Lower, Trans), forward for
/// (Lower, NoTrans) and (Upper, Trans). With `Diag::Unit` the stored
/// diagonal is never read and no division happens.
///
/// No singularity test is performed: a zero diagonal entry yields inf/NaN.
pub fn dtpsv(
    uplo: Uplo,
    trans: Transpose,
    diag: Diag,
    n: usize,
    ap: &[f64],
    x: &mut [f64],
    incx: isize,
) {
    if n == 0 {
        return;
    }
    contract!(incx != 0, "dtpsv: zero increment");
    contract!(ap.len() >= packed_len(n), "dtpsv: packed A too short");
    contract!(x.len() >= span(n, incx), "dtpsv: x too short");

    let unit = diag.is_unit();
    let ix = move |i: usize| offset(n, incx, i);
    let at = |i: usize, j: usize| ap[packed_index(uplo, n, i, j)];

    match (uplo, trans) {
        (Uplo::Upper, Transpose::NoTrans) => {
            // Back substitution, column-oriented
            for j in (0..n).rev() {
                let mut xj = x[ix(j)];
                if xj != 0.0 {
                    if !unit {
                        xj /= at(j, j);
                        x[ix(j)] = xj;
                    }
                    for i in (0..j).rev() {
                        x[ix(i)] -= xj * at(i, j);
                    }
                }
            }
        }
        (Uplo::Lower, Transpose::NoTrans) => {
            // Forward substitution, column-oriented
            for j in 0..n {
                let mut xj = x[ix(j)];
                if xj != 0.0 {
                    if !unit {
                        xj /= at(j, j);
                        x[ix(j)] = xj;
                    }
                    for i in (j + 1)..n {
                        x[ix(i)] -= xj * at(i, j);
                    }
                }
            }
        }
        (Uplo::Upper, Transpose::Trans) => {
            // Forward substitution on A^T: row j of A^T is column j of A
            for j in 0..n {
                let mut temp = x[ix(j)];
                for i in 0..j {
                    temp -= at(i, j) * x[ix(i)];
                }
                if !unit {
                    temp /= at(j, j);
                }
                x[ix(j)] = temp;
            }
        }
        (Uplo::Lower, Transpose::Trans) => {
            for j in (0..n).rev() {
                let mut temp = x[ix(j)];
                for i in ((j + 1)..n).rev() {
                    temp -= at(i, j) * x[ix(i)];
                }
                if !unit {
                    temp /= at(j, j);
                }
                x[ix(j)] = temp;
            }
        }
    }
}
