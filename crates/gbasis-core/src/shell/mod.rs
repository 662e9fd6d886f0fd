//! Shell-type codes and basis-function counting.
//!
//! A shell type is a signed code: `l >= 0` is a Cartesian shell of angular
//! momentum `l`, `-l` with `l >= 2` is the pure (solid harmonic) shell. Pure s
//! and p shells coincide with their Cartesian counterparts, so `-1` never
//! denotes a shell and is rejected as an invalid code.

pub mod cartesian;

pub use cartesian::{cartesian_count_cumulative, CartesianPowers, CartesianPowersIter};

use crate::common::constants::{MAX_SHELL_TYPE, SHELL_LETTERS, SHELL_TYPE_INVALID_CODE};
use crate::domain::ShellConvention;
use crate::numerics::combinatorics::CombinatoricsError;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ShellError {
    #[error("shell type {0} is not a valid shell code")]
    InvalidShellType(i64),
    #[error("angular momentum must be non-negative, got {0}")]
    NegativeAngularMomentum(i64),
    #[error("shell type {shell_type} exceeds the maximum supported shell type {max_shell_type}")]
    ExceedsMaxShellType { shell_type: i64, max_shell_type: i64 },
    #[error("unknown shell label '{label}'")]
    UnknownLabel { label: String },
    #[error("shell type {0} has no letter label")]
    NoLabel(i64),
    #[error("basis function count for shell type {shell_type} overflowed 64-bit arithmetic")]
    Overflow { shell_type: i64 },
    #[error(transparent)]
    Combinatorics(#[from] CombinatoricsError),
}

impl ShellError {
    /// Sentinel the legacy numeric interface returned in place of this error.
    /// Only the invalid code `-1` has one.
    pub const fn legacy_code(&self) -> Option<i64> {
        match self {
            Self::InvalidShellType(SHELL_TYPE_INVALID_CODE) => Some(SHELL_TYPE_INVALID_CODE),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ShellType(i64);

impl ShellType {
    pub fn new(code: i64) -> Result<Self, ShellError> {
        if code == SHELL_TYPE_INVALID_CODE {
            return Err(ShellError::InvalidShellType(code));
        }
        Ok(Self(code))
    }

    pub fn cartesian(l: i64) -> Result<Self, ShellError> {
        if l < 0 {
            return Err(ShellError::NegativeAngularMomentum(l));
        }
        Ok(Self(l))
    }

    /// Pure shells of angular momentum 0 and 1 use the Cartesian code.
    pub fn pure(l: i64) -> Result<Self, ShellError> {
        match l {
            0 | 1 => Ok(Self(l)),
            l if l > 1 => Ok(Self(-l)),
            _ => Err(ShellError::NegativeAngularMomentum(l)),
        }
    }

    pub(crate) const fn from_valid_code(code: i64) -> Self {
        Self(code)
    }

    pub const fn code(self) -> i64 {
        self.0
    }

    pub const fn convention(self) -> ShellConvention {
        if self.0 >= 0 {
            ShellConvention::Cartesian
        } else {
            ShellConvention::Pure
        }
    }

    pub const fn angular_momentum(self) -> i64 {
        self.0.saturating_abs()
    }

    pub fn basis_count(self) -> Result<i64, ShellError> {
        shell_basis_count(self.0)
    }

    pub fn label(self) -> Result<char, ShellError> {
        usize::try_from(self.angular_momentum())
            .ok()
            .and_then(|l| SHELL_LETTERS.get(l).copied())
            .ok_or(ShellError::NoLabel(self.0))
    }
}

impl TryFrom<i64> for ShellType {
    type Error = ShellError;

    fn try_from(code: i64) -> Result<Self, Self::Error> {
        Self::new(code)
    }
}

/// Number of basis functions in a shell: `(l+1)(l+2)/2` for Cartesian codes,
/// `2l+1` for pure codes. The code `-1` is reported as
/// [`ShellError::InvalidShellType`].
pub fn shell_basis_count(shell_type: i64) -> Result<i64, ShellError> {
    let overflow = ShellError::Overflow { shell_type };
    if shell_type >= 0 {
        let lower = shell_type.checked_add(1).ok_or_else(|| overflow.clone())?;
        let upper = shell_type.checked_add(2).ok_or_else(|| overflow.clone())?;
        // One of two consecutive integers is even.
        if lower % 2 == 0 {
            (lower / 2).checked_mul(upper).ok_or(overflow)
        } else {
            lower.checked_mul(upper / 2).ok_or(overflow)
        }
    } else if shell_type == SHELL_TYPE_INVALID_CODE {
        Err(ShellError::InvalidShellType(shell_type))
    } else {
        shell_type
            .checked_mul(-2)
            .and_then(|value| value.checked_add(1))
            .ok_or(overflow)
    }
}

/// [`shell_basis_count`] with the legacy numeric contract: `-1` for the
/// invalid code and fixed-width wrapping arithmetic.
pub fn legacy_shell_basis_count(shell_type: i64) -> i64 {
    if shell_type > 0 {
        shell_type
            .wrapping_add(1)
            .wrapping_mul(shell_type.wrapping_add(2))
            / 2
    } else if shell_type == SHELL_TYPE_INVALID_CODE {
        SHELL_TYPE_INVALID_CODE
    } else {
        shell_type.wrapping_mul(-2).wrapping_add(1)
    }
}

/// Build-time bound on the shell-type magnitude. Runtime code should take a
/// [`ShellLimits`](crate::common::config::ShellLimits) instead.
pub const fn max_shell_type() -> i64 {
    MAX_SHELL_TYPE
}

pub fn shell_type_label(shell_type: i64) -> Result<char, ShellError> {
    ShellType::new(shell_type)?.label()
}

/// Parses a letter string such as `"sp"` or `"D"` into shell types.
///
/// With `pure` set, letters from `d` upward map to negative codes.
pub fn parse_shell_types(label: &str, pure: bool) -> Result<Vec<ShellType>, ShellError> {
    let trimmed = label.trim();
    if trimmed.is_empty() {
        return Err(ShellError::UnknownLabel {
            label: label.to_string(),
        });
    }

    trimmed
        .chars()
        .map(|letter| {
            let letter = letter.to_ascii_lowercase();
            let l = SHELL_LETTERS
                .iter()
                .position(|candidate| *candidate == letter)
                .ok_or_else(|| ShellError::UnknownLabel {
                    label: trimmed.to_string(),
                })? as i64;
            if pure {
                ShellType::pure(l)
            } else {
                ShellType::cartesian(l)
            }
        })
        .collect()
}

/// Total number of basis functions over a list of shell codes.
pub fn total_basis_count(shell_types: &[i64]) -> Result<i64, ShellError> {
    shell_types.iter().try_fold(0_i64, |total, &shell_type| {
        let count = shell_basis_count(shell_type)?;
        total
            .checked_add(count)
            .ok_or(ShellError::Overflow { shell_type })
    })
}
