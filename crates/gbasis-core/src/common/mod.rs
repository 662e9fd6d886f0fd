pub mod config;
pub mod constants;

pub use config::{load_shell_limits, ShellConfigError, ShellLimits};
pub use constants::MAX_SHELL_TYPE;
