//! Gaussian shell bookkeeping: double factorials, binomial coefficients,
//! basis-function counts per shell type and the configured shell-type bound.

pub mod common;
pub mod domain;
pub mod numerics;
pub mod shell;

pub use common::{load_shell_limits, ShellLimits, MAX_SHELL_TYPE};
pub use domain::{GbasisError, GbasisErrorCategory, ShellConvention};
pub use numerics::{binomial, double_factorial};
pub use shell::{max_shell_type, shell_basis_count, ShellError, ShellType};
