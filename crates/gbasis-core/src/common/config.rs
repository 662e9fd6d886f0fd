//! Injected shell-type bound.
//!
//! Code that needs to validate shell types or size shell-indexed storage takes
//! a [`ShellLimits`] instead of reading [`MAX_SHELL_TYPE`] directly.

use super::constants::{MAX_SHELL_TYPE, SHELL_TYPE_INVALID_CODE};
use crate::numerics::combinatorics::{binomial, CombinatoricsError};
use crate::shell::{ShellError, ShellType};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Bound on the shell-type magnitude, between 0 and [`MAX_SHELL_TYPE`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(try_from = "RawShellLimits")]
pub struct ShellLimits {
    #[serde(rename = "maxShellType")]
    max_shell_type: i64,
}

#[derive(Deserialize)]
struct RawShellLimits {
    #[serde(rename = "maxShellType")]
    max_shell_type: i64,
}

impl TryFrom<RawShellLimits> for ShellLimits {
    type Error = ShellConfigError;

    fn try_from(raw: RawShellLimits) -> Result<Self, Self::Error> {
        Self::new(raw.max_shell_type)
    }
}

impl Default for ShellLimits {
    fn default() -> Self {
        Self {
            max_shell_type: MAX_SHELL_TYPE,
        }
    }
}

impl ShellLimits {
    pub fn new(max_shell_type: i64) -> Result<Self, ShellConfigError> {
        if max_shell_type < 0 {
            return Err(ShellConfigError::NegativeMaxShellType {
                value: max_shell_type,
            });
        }
        if max_shell_type > MAX_SHELL_TYPE {
            return Err(ShellConfigError::MaxShellTypeAboveSupported {
                value: max_shell_type,
                supported: MAX_SHELL_TYPE,
            });
        }
        Ok(Self { max_shell_type })
    }

    pub const fn max_shell_type(&self) -> i64 {
        self.max_shell_type
    }

    /// Accepts any code whose angular momentum is within the bound, except `-1`.
    pub fn validate(&self, shell_type: i64) -> Result<ShellType, ShellError> {
        let shell = ShellType::new(shell_type)?;
        if shell.angular_momentum() > self.max_shell_type {
            return Err(ShellError::ExceedsMaxShellType {
                shell_type,
                max_shell_type: self.max_shell_type,
            });
        }
        Ok(shell)
    }

    /// All valid codes from `-max` to `max`, in increasing order.
    pub fn shell_types(&self) -> impl Iterator<Item = ShellType> {
        (-self.max_shell_type..=self.max_shell_type)
            .filter(|code| *code != SHELL_TYPE_INVALID_CODE)
            .map(ShellType::from_valid_code)
    }

    pub fn max_cartesian_count(&self) -> Result<i64, ShellError> {
        crate::shell::shell_basis_count(self.max_shell_type)
    }

    pub fn max_cartesian_cumulative(&self) -> Result<i64, CombinatoricsError> {
        self.max_cartesian_cumulative_deriv(0)
    }

    /// Scratch size for Cartesian functions up to the bound, raised by
    /// `order` derivative levels: `C(max + 3 + order, 3 + order)`.
    pub fn max_cartesian_cumulative_deriv(&self, order: i64) -> Result<i64, CombinatoricsError> {
        let overflow = CombinatoricsError::Overflow {
            operation: "max_cartesian_cumulative",
        };
        let m = order.checked_add(3).ok_or(overflow)?;
        let n = self.max_shell_type.checked_add(m).ok_or(overflow)?;
        binomial(n, m)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ShellConfigError {
    #[error("failed to read shell configuration '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse shell configuration '{}': {source}", path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("maxShellType must be non-negative, got {value}")]
    NegativeMaxShellType { value: i64 },
    #[error("maxShellType {value} exceeds the largest supported shell type {supported}")]
    MaxShellTypeAboveSupported { value: i64, supported: i64 },
}

pub fn load_shell_limits(config_path: impl AsRef<Path>) -> Result<ShellLimits, ShellConfigError> {
    let config_path = config_path.as_ref();
    let source = fs::read_to_string(config_path).map_err(|source| ShellConfigError::Read {
        path: config_path.to_path_buf(),
        source,
    })?;
    // Parsed in two steps so range errors keep their own variant.
    let raw: RawShellLimits =
        serde_json::from_str(&source).map_err(|source| ShellConfigError::Parse {
            path: config_path.to_path_buf(),
            source,
        })?;
    let limits = ShellLimits::try_from(raw)?;
    tracing::debug!(
        path = %config_path.display(),
        max_shell_type = limits.max_shell_type,
        "loaded shell limits"
    );
    Ok(limits)
}
