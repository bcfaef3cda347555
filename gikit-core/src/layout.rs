//! BLAS operand flags: orientation, triangle selection, diagonal kind.
//!
//! The reference interface passes these as single characters (`'N'`, `'T'`,
//! `'U'`, ...). Here they are enums; the character codes are still accepted
//! through `TryFrom<char>` / `FromStr` so callers holding reference-style
//! flags convert once at the boundary and unknown codes are rejected there.
//!
//! All matrices in gikit are column-major: element `(i, j)` of a matrix with
//! leading dimension `ld` lives at `i + j * ld`.

use std::str::FromStr;

use crate::error::FlagError;

/// Orientation of a matrix operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Transpose {
    /// Use the operand as stored.
    #[default]
    NoTrans,
    /// Use the transpose of the operand. Also produced by the conjugate
    /// transpose code `'C'`, which means the same thing for real data.
    Trans,
}

impl Transpose {
    /// Reference character code.
    #[inline]
    pub fn as_char(self) -> char {
        match self {
            Transpose::NoTrans => 'N',
            Transpose::Trans => 'T',
        }
    }

    #[inline(always)]
    pub fn is_trans(self) -> bool {
        self == Transpose::Trans
    }

    /// Logical `(rows, cols)` of a `rows x cols` stored matrix under this orientation.
    #[inline(always)]
    pub fn apply(self, rows: usize, cols: usize) -> (usize, usize) {
        match self {
            Transpose::NoTrans => (rows, cols),
            Transpose::Trans => (cols, rows),
        }
    }
}

impl TryFrom<char> for Transpose {
    type Error = FlagError;

    fn try_from(code: char) -> Result<Self, Self::Error> {
        match code.to_ascii_uppercase() {
            'N' => Ok(Transpose::NoTrans),
            'T' | 'C' => Ok(Transpose::Trans),
            _ => Err(FlagError::Transpose(code)),
        }
    }
}

/// Triangle of a symmetric or triangular matrix that is referenced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Uplo {
    #[default]
    Upper,
    Lower,
}

impl Uplo {
    #[inline]
    pub fn as_char(self) -> char {
        match self {
            Uplo::Upper => 'U',
            Uplo::Lower => 'L',
        }
    }

    /// The opposite triangle, i.e. where the selected one lands after a transpose.
    #[inline(always)]
    pub fn flip(self) -> Uplo {
        match self {
            Uplo::Upper => Uplo::Lower,
            Uplo::Lower => Uplo::Upper,
        }
    }
}

impl TryFrom<char> for Uplo {
    type Error = FlagError;

    fn try_from(code: char) -> Result<Self, Self::Error> {
        match code.to_ascii_uppercase() {
            'U' => Ok(Uplo::Upper),
            'L' => Ok(Uplo::Lower),
            _ => Err(FlagError::Uplo(code)),
        }
    }
}

/// Whether a triangular matrix has an implicit unit diagonal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Diag {
    /// Diagonal entries are read from storage.
    #[default]
    NonUnit,
    /// Diagonal entries are taken to be 1 and never read.
    Unit,
}

impl Diag {
    #[inline]
    pub fn as_char(self) -> char {
        match self {
            Diag::NonUnit => 'N',
            Diag::Unit => 'U',
        }
    }

    #[inline(always)]
    pub fn is_unit(self) -> bool {
        self == Diag::Unit
    }
}

impl TryFrom<char> for Diag {
    type Error = FlagError;

    fn try_from(code: char) -> Result<Self, Self::Error> {
        match code.to_ascii_uppercase() {
            'N' => Ok(Diag::NonUnit),
            'U' => Ok(Diag::Unit),
            _ => Err(FlagError::Diag(code)),
        }
    }
}

/// Parses a one-character flag string such as `"T"`.
fn single_char(s: &str) -> Result<char, FlagError> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(FlagError::Length(s.to_owned())),
    }
}

impl FromStr for Transpose {
    type Err = FlagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Transpose::try_from(single_char(s)?)
    }
}

impl FromStr for Uplo {
    type Err = FlagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uplo::try_from(single_char(s)?)
    }
}

impl FromStr for Diag {
    type Err = FlagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Diag::try_from(single_char(s)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transpose_codes() {
        assert_eq!(Transpose::try_from('n').unwrap(), Transpose::NoTrans);
        assert_eq!(Transpose::try_from('N').unwrap(), Transpose::NoTrans);
        assert_eq!(Transpose::try_from('t').unwrap(), Transpose::Trans);
        assert_eq!(Transpose::try_from('C').unwrap(), Transpose::Trans);
        assert_eq!(Transpose::try_from('x'), Err(FlagError::Transpose('x')));
    }

    #[test]
    fn test_uplo_and_diag_codes() {
        assert_eq!(Uplo::try_from('U').unwrap(), Uplo::Upper);
        assert_eq!(Uplo::try_from('l').unwrap(), Uplo::Lower);
        assert_eq!(Uplo::try_from('N'), Err(FlagError::Uplo('N')));
        assert_eq!(Diag::try_from('u').unwrap(), Diag::Unit);
        assert_eq!(Diag::try_from('n').unwrap(), Diag::NonUnit);
        assert_eq!(Diag::try_from('T'), Err(FlagError::Diag('T')));
    }

    #[test]
    fn test_from_str() {
        assert_eq!("T".parse::<Transpose>().unwrap(), Transpose::Trans);
        assert_eq!("l".parse::<Uplo>().unwrap(), Uplo::Lower);
        assert_eq!(
            "NT".parse::<Transpose>(),
            Err(FlagError::Length("NT".to_owned()))
        );
        assert!("".parse::<Diag>().is_err());
    }

    #[test]
    fn test_as_char_round_trips() {
        for t in [Transpose::NoTrans, Transpose::Trans] {
            assert_eq!(Transpose::try_from(t.as_char()).unwrap(), t);
        }
        for u in [Uplo::Upper, Uplo::Lower] {
            assert_eq!(Uplo::try_from(u.as_char()).unwrap(), u);
        }
        for d in [Diag::NonUnit, Diag::Unit] {
            assert_eq!(Diag::try_from(d.as_char()).unwrap(), d);
        }
    }

    #[test]
    fn test_shape_helpers() {
        assert_eq!(Transpose::NoTrans.apply(3, 5), (3, 5));
        assert_eq!(Transpose::Trans.apply(3, 5), (5, 3));
        assert_eq!(Uplo::Upper.flip(), Uplo::Lower);
        assert!(Diag::Unit.is_unit());
        assert!(!Transpose::NoTrans.is_trans());
    }
}
