//! BLAS Level 1: Vector-vector operations.
//!
//! Every routine takes vector views as `(slice, n, inc)`. Increments may be
//! negative (the view is walked from the far end of the slice, see
//! [`gikit_core::stride`]); zero is a contract violation. Contiguous views
//! (`inc == 1`) take a slice-iterator fast path, strided views index the
//! caller's storage directly. Nothing here allocates.

use gikit_core::stride::{offset, span};

/// Logical elements of a strided view, in order.
#[inline]
fn elems(x: &[f64], n: usize, inc: isize) -> impl Iterator<Item = f64> + '_ {
    (0..n).map(move |i| x[offset(n, inc, i)])
}

// ============================================================================
// ROTG / ROT: plane rotations
// ============================================================================

/// Result of [`drotg`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Givens {
    /// Combined magnitude, signed like the larger-magnitude input.
    pub r: f64,
    /// Reconstruction parameter: `s` when `|a| > |b|`, else `1 / c` (or 1 when `c == 0`).
    pub z: f64,
    pub c: f64,
    pub s: f64,
}

impl Givens {
    /// Rotate a single pair: `(c*x + s*y, -s*x + c*y)`.
    #[inline]
    pub fn apply(&self, x: f64, y: f64) -> (f64, f64) {
        (self.c * x + self.s * y, self.c * y - self.s * x)
    }
}

/// Construct the Givens rotation that maps `(a, b)` to `(r, 0)`.
///
/// Two zero inputs give the identity rotation (`c = 1`, `s = 0`, `r = 0`).
/// Both inputs are divided by `max(|a|, |b|)` first, so the scaled squares
/// lie in `[0, 2]` and `c`, `s` are finite for every finite input. Only `r`
/// itself can overflow, and only when `sqrt(a^2 + b^2)` exceeds `f64::MAX`.
pub fn drotg(a: f64, b: f64) -> Givens {
    let roe = if a.abs() > b.abs() { a } else { b };
    let scale = a.abs().max(b.abs());
    if scale == 0.0 {
        return Givens {
            r: 0.0,
            z: 0.0,
            c: 1.0,
            s: 0.0,
        };
    }

    let (sa, sb) = (a / scale, b / scale);
    let mut t = (sa * sa + sb * sb).sqrt();
    if roe < 0.0 {
        t = -t;
    }
    let r = scale * t;
    let c = sa / t;
    let s = sb / t;

    let z = if a.abs() > b.abs() {
        s
    } else if c != 0.0 {
        1.0 / c
    } else {
        1.0
    };

    Givens { r, z, c, s }
}

/// Apply a plane rotation: `(x_i, y_i) := (c*x_i + s*y_i, -s*x_i + c*y_i)`.
pub fn drot(n: usize, x: &mut [f64], incx: isize, y: &mut [f64], incy: isize, c: f64, s: f64) {
    if n == 0 {
        return;
    }
    contract!(incx != 0 && incy != 0, "drot: zero increment");
    contract!(x.len() >= span(n, incx) && y.len() >= span(n, incy), "drot: vector too short");

    if incx == 1 && incy == 1 {
        for (xi, yi) in x[..n].iter_mut().zip(y[..n].iter_mut()) {
            let t = c * *xi + s * *yi;
            *yi = c * *yi - s * *xi;
            *xi = t;
        }
    } else {
        for i in 0..n {
            let ix = offset(n, incx, i);
            let iy = offset(n, incy, i);
            let t = c * x[ix] + s * y[iy];
            y[iy] = c * y[iy] - s * x[ix];
            x[ix] = t;
        }
    }
}

// ============================================================================
// SWAP / COPY
// ============================================================================

/// Double-precision swap: x <-> y
pub fn dswap(n: usize, x: &mut [f64], incx: isize, y: &mut [f64], incy: isize) {
    if n == 0 {
        return;
    }
    contract!(incx != 0 && incy != 0, "dswap: zero increment");
    contract!(x.len() >= span(n, incx) && y.len() >= span(n, incy), "dswap: vector too short");

    if incx == 1 && incy == 1 {
        x[..n].swap_with_slice(&mut y[..n]);
    } else {
        for i in 0..n {
            std::mem::swap(&mut x[offset(n, incx, i)], &mut y[offset(n, incy, i)]);
        }
    }
}

/// Double-precision copy: y := x
pub fn dcopy(n: usize, x: &[f64], incx: isize, y: &mut [f64], incy: isize) {
    if n == 0 {
        return;
    }
    contract!(incx != 0 && incy != 0, "dcopy: zero increment");
    contract!(x.len() >= span(n, incx) && y.len() >= span(n, incy), "dcopy: vector too short");

    if incx == 1 && incy == 1 {
        y[..n].copy_from_slice(&x[..n]);
    } else {
        for (i, v) in elems(x, n, incx).enumerate() {
            y[offset(n, incy, i)] = v;
        }
    }
}

// ============================================================================
// SCAL / AXPY
// ============================================================================

/// Double-precision scal: x := alpha * x
pub fn dscal(n: usize, alpha: f64, x: &mut [f64], incx: isize) {
    if n == 0 {
        return;
    }
    contract!(incx != 0, "dscal: zero increment");
    contract!(x.len() >= span(n, incx), "dscal: vector too short");

    if incx == 1 {
        x[..n].iter_mut().for_each(|xi| *xi *= alpha);
    } else {
        for i in 0..n {
            x[offset(n, incx, i)] *= alpha;
        }
    }
}

/// Double-precision axpy: y := alpha * x + y
///
/// With `alpha == 0` the call returns before `x` is looked at.
pub fn daxpy(n: usize, alpha: f64, x: &[f64], incx: isize, y: &mut [f64], incy: isize) {
    if n == 0 || alpha == 0.0 {
        return;
    }
    contract!(incx != 0 && incy != 0, "daxpy: zero increment");
    contract!(x.len() >= span(n, incx) && y.len() >= span(n, incy), "daxpy: vector too short");

    if incx == 1 && incy == 1 {
        for (yi, &xi) in y[..n].iter_mut().zip(&x[..n]) {
            *yi += alpha * xi;
        }
    } else {
        for (i, xi) in elems(x, n, incx).enumerate() {
            y[offset(n, incy, i)] += alpha * xi;
        }
    }
}

// ============================================================================
// DOT / NRM2 / ASUM
// ============================================================================

/// Double-precision dot product: result = x^T * y
pub fn ddot(n: usize, x: &[f64], incx: isize, y: &[f64], incy: isize) -> f64 {
    if n == 0 {
        return 0.0;
    }
    contract!(incx != 0 && incy != 0, "ddot: zero increment");
    contract!(x.len() >= span(n, incx) && y.len() >= span(n, incy), "ddot: vector too short");

    if incx == 1 && incy == 1 {
        x[..n].iter().zip(&y[..n]).map(|(a, b)| a * b).sum()
    } else {
        elems(x, n, incx).zip(elems(y, n, incy)).map(|(a, b)| a * b).sum()
    }
}

/// Euclidean norm `||x||_2`, safe against overflow and underflow.
///
/// Keeps a running `scale` (largest magnitude seen so far) and `ssq` such
/// that the partial sum of squares equals `scale^2 * ssq`. Every term
/// squared is a ratio `<= 1`, so components near `f64::MAX` or
/// `f64::MIN_POSITIVE` survive where `sqrt(ddot(x, x))` would not.
pub fn dnrm2(n: usize, x: &[f64], incx: isize) -> f64 {
    if n == 0 {
        return 0.0;
    }
    contract!(incx != 0, "dnrm2: zero increment");
    contract!(x.len() >= span(n, incx), "dnrm2: vector too short");
    if n == 1 {
        return x[0].abs();
    }

    let mut scale = 0.0f64;
    let mut ssq = 1.0f64;
    for v in elems(x, n, incx) {
        if v != 0.0 {
            let absxi = v.abs();
            if scale < absxi {
                let ratio = scale / absxi;
                ssq = 1.0 + ssq * ratio * ratio;
                scale = absxi;
            } else {
                let ratio = absxi / scale;
                ssq += ratio * ratio;
            }
        }
    }
    scale * ssq.sqrt()
}

/// Double-precision asum: sum(|x_i|)
pub fn dasum(n: usize, x: &[f64], incx: isize) -> f64 {
    if n == 0 {
        return 0.0;
    }
    contract!(incx != 0, "dasum: zero increment");
    contract!(x.len() >= span(n, incx), "dasum: vector too short");

    if incx == 1 {
        x[..n].iter().map(|v| v.abs()).sum()
    } else {
        elems(x, n, incx).map(f64::abs).sum()
    }
}

// ============================================================================
// IAMAX: index of max absolute value
// ============================================================================

/// 0-based logical index of the first element with the largest `|x_i|`.
///
/// Ties go to the lowest index. Returns `None` for an empty view.
pub fn idamax(n: usize, x: &[f64], incx: isize) -> Option<usize> {
    if n == 0 {
        return None;
    }
    contract!(incx != 0, "idamax: zero increment");
    contract!(x.len() >= span(n, incx), "idamax: vector too short");

    let mut max_idx = 0;
    let mut max_val = x[offset(n, incx, 0)].abs();
    for (i, v) in elems(x, n, incx).enumerate().skip(1) {
        let v = v.abs();
        if v > max_val {
            max_val = v;
            max_idx = i;
        }
    }
    Some(max_idx)
}
