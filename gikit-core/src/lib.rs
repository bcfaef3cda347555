//! # gikit core
//!
//! Shared vocabulary for the gikit kernel crates:
//! - **Operand flags**: `Transpose`, `Uplo`, `Diag`, parsed from the
//!   reference single-character codes at the call boundary.
//! - **Stride arithmetic**: logical-to-physical indexing for strided vectors
//!   (including negative increments) and packed triangular storage.

pub mod error;
pub mod layout;
pub mod stride;

pub use error::FlagError;
pub use layout::{Diag, Transpose, Uplo};
