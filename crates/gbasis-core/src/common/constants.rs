//! Build-time constants shared by the shell bookkeeping helpers.
//!
//! `MAX_SHELL_TYPE` is the single source of truth for the highest angular
//! momentum supported; runtime code receives it through
//! [`ShellLimits`](super::config::ShellLimits).

/// Highest supported angular momentum (`k` shell).
pub const MAX_SHELL_TYPE: i64 = 7;

/// Shell letters indexed by angular momentum. `j` is skipped by convention.
pub const SHELL_LETTERS: [char; 8] = ['s', 'p', 'd', 'f', 'g', 'h', 'i', 'k'];

pub const SHELL_TYPE_INVALID_CODE: i64 = -1;
