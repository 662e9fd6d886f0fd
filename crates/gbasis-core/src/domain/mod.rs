pub mod errors;

pub use errors::{GbasisError, GbasisErrorCategory};

use std::fmt::{Display, Formatter};

/// Representation convention of a Gaussian shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShellConvention {
    Cartesian,
    Pure,
}

impl ShellConvention {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Cartesian => "cartesian",
            Self::Pure => "pure",
        }
    }
}

impl Display for ShellConvention {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).as_str())
    }
}
