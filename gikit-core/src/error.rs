use thiserror::Error;

/// Rejected reference-style flag code.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FlagError {
    #[error("invalid transpose flag {0:?} (expected N, T or C)")]
    Transpose(char),
    #[error("invalid triangle flag {0:?} (expected U or L)")]
    Uplo(char),
    #[error("invalid diagonal flag {0:?} (expected N or U)")]
    Diag(char),
    #[error("flag must be a single character, got {0:?}")]
    Length(String),
}
