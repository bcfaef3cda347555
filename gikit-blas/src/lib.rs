// BLAS functions keep the reference argument lists — many parameters are inherent to the API.
#![allow(clippy::too_many_arguments)]

//! # gikit BLAS
//!
//! Double-precision BLAS subset in safe Rust: the dense and symmetric kernels
//! that parameterization solvers hand their linear systems to.
//!
//! ## BLAS Levels
//!
//! - **Level 1** (vector-vector): `drotg`, `drot`, `dswap`, `dcopy`, `dscal`,
//!   `daxpy`, `ddot`, `dnrm2`, `dasum`, `idamax`
//! - **Level 2** (matrix-vector): `dgemv`, `dsymv`, `dger`, `dsyr`, `dsyr2`, `dtpsv`
//! - **Level 3** (matrix-matrix): `dgemm`
//!
//! ## Memory Layout
//!
//! Matrices are column-major with an explicit leading dimension: element
//! `(i, j)` lives at `a[i + j * lda]`. Vectors carry a signed increment;
//! a negative increment walks the slice from its far end.
//!
//! ## Contracts
//!
//! Kernels never return errors. Zero sizes and zero coefficients are
//! well-defined quick returns. Zero increments, short slices and undersized
//! leading dimensions are caller bugs, checked with assertions in debug
//! builds (and in release builds with the `checked` feature).
//!
//! ```
//! use gikit_blas::{level3, Transpose};
//!
//! // C := A * B for 2 x 2 column-major matrices
//! let a = [1.0, 0.0, 0.0, 1.0];
//! let b = [2.0, 4.0, 3.0, 5.0];
//! let mut c = [0.0; 4];
//! level3::dgemm(Transpose::NoTrans, Transpose::NoTrans, 2, 2, 2,
//!               1.0, &a, 2, &b, 2, 0.0, &mut c, 2);
//! assert_eq!(c, b);
//! ```

/// Caller-contract assertion: active in debug builds or with the `checked` feature.
macro_rules! contract {
    ($($arg:tt)*) => {
        if cfg!(any(debug_assertions, feature = "checked")) {
            assert!($($arg)*);
        }
    };
}

pub mod level1;
pub mod level2;
pub mod level3;

// Re-export flag types for convenience
pub use gikit_core::layout::{Diag, Transpose, Uplo};
pub use gikit_core::FlagError;

pub use level1::Givens;
