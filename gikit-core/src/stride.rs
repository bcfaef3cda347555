//! Index arithmetic for strided vectors and packed triangles.
//!
//! A vector view is `(slice, n, inc)`. With a positive increment logical
//! element `i` sits at `i * inc`; with a negative increment the walk starts
//! at the far end, so element `i` sits at `(n - 1 - i) * |inc|`. This is the
//! reference BLAS convention and keeps every index inside `0..span(n, inc)`.

use crate::layout::Uplo;

/// Physical slice index of logical element `i` of an `n`-element view.
#[inline(always)]
pub fn offset(n: usize, inc: isize, i: usize) -> usize {
    let step = inc.unsigned_abs();
    if inc >= 0 {
        i * step
    } else {
        (n - 1 - i) * step
    }
}

/// Minimum slice length backing an `n`-element view with increment `inc`.
#[inline]
pub fn span(n: usize, inc: isize) -> usize {
    if n == 0 {
        0
    } else {
        1 + (n - 1) * inc.unsigned_abs()
    }
}

/// Minimum slice length backing a column-major `rows x cols` matrix with leading dimension `ld`.
#[inline]
pub fn matrix_span(rows: usize, cols: usize, ld: usize) -> usize {
    if rows == 0 || cols == 0 {
        0
    } else {
        (cols - 1) * ld + rows
    }
}

/// Number of stored elements in a packed `n x n` triangle.
#[inline]
pub fn packed_len(n: usize) -> usize {
    n * (n + 1) / 2
}

/// Position of `(i, j)` inside a packed triangle stored column by column.
///
/// `(i, j)` must lie in the selected triangle: `i <= j` for `Upper`,
/// `i >= j` for `Lower`.
#[inline(always)]
pub fn packed_index(uplo: Uplo, n: usize, i: usize, j: usize) -> usize {
    match uplo {
        Uplo::Upper => i + j * (j + 1) / 2,
        Uplo::Lower => i + j * (2 * n - j - 1) / 2,
    }
}
