//! Solve a small anchored path-Laplacian system `A x = b` the way a harmonic
//! parameterization would: dense Cholesky factor `A = L L^T` built from
//! Level 1 kernels, packed, then two triangular solves with `dtpsv`.

use gikit_blas::{level1, level2, Diag, Transpose, Uplo};
use gikit_core::stride::{packed_index, packed_len};

fn main() {
    let n = 6;

    // A = tridiag(-1, 2, -1), symmetric positive definite; only the lower triangle is filled.
    let mut a = vec![0.0f64; n * n];
    for j in 0..n {
        a[j + j * n] = 2.0;
        if j + 1 < n {
            a[(j + 1) + j * n] = -1.0;
        }
    }

    // Boundary values 0 and 1 pinned at the path ends show up as a load on the last row.
    let mut b = vec![0.0f64; n];
    b[n - 1] = 1.0;

    // Left-looking Cholesky on a copy of the lower triangle. Row j of L is a
    // stride-n view into the column-major buffer.
    let mut l = a.clone();
    let stride = n as isize;
    for j in 0..n {
        let d = l[j + j * n] - level1::ddot(j, &l[j..], stride, &l[j..], stride);
        assert!(d > 0.0, "matrix is not positive definite");
        let ljj = d.sqrt();
        l[j + j * n] = ljj;
        for i in (j + 1)..n {
            let s = level1::ddot(j, &l[i..], stride, &l[j..], stride);
            l[i + j * n] = (l[i + j * n] - s) / ljj;
        }
    }

    let mut ap = vec![0.0f64; packed_len(n)];
    for j in 0..n {
        for i in j..n {
            ap[packed_index(Uplo::Lower, n, i, j)] = l[i + j * n];
        }
    }

    // L y = b, then L^T x = y
    let mut x = b.clone();
    level2::dtpsv(Uplo::Lower, Transpose::NoTrans, Diag::NonUnit, n, &ap, &mut x, 1);
    level2::dtpsv(Uplo::Lower, Transpose::Trans, Diag::NonUnit, n, &ap, &mut x, 1);

    // residual r = b - A x using the stored lower triangle only
    let mut r = b.clone();
    level2::dsymv(Uplo::Lower, n, -1.0, &a, n, &x, 1, 1.0, &mut r, 1);

    println!("=== Anchored path Laplacian, n = {n} ===");
    for (i, xi) in x.iter().enumerate() {
        println!("  x[{i}] = {xi:.6}  (exact {:.6})", (i + 1) as f64 / (n + 1) as f64);
    }
    println!("  ||b - A x||_2 = {:.3e}", level1::dnrm2(n, &r, 1));
}
