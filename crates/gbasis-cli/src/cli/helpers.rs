use super::CliError;
use gbasis_core::common::{load_shell_limits, ShellLimits};
use gbasis_core::shell::ShellType;
use serde::Serialize;
use std::path::Path;
use tracing_subscriber::EnvFilter;

pub(super) const LOG_ENV_VAR: &str = "GBASIS_LOG";

pub(super) fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new("warn"));
    // A subscriber may already be installed when the CLI is embedded.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

pub(super) fn resolve_limits(config: Option<&Path>) -> Result<ShellLimits, CliError> {
    match config {
        Some(path) => load_shell_limits(path).map_err(CliError::compute),
        None => {
            tracing::debug!("no shell configuration given, using build defaults");
            Ok(ShellLimits::default())
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct ShellRow {
    pub(super) shell_type: i64,
    pub(super) label: String,
    pub(super) convention: &'static str,
    pub(super) nbasis: i64,
}

impl ShellRow {
    pub(super) fn from_shell(shell: ShellType) -> Result<Self, CliError> {
        let label = shell
            .label()
            .map(String::from)
            .unwrap_or_else(|_| format!("l={}", shell.angular_momentum()));
        Ok(Self {
            shell_type: shell.code(),
            label,
            convention: shell.convention().as_str(),
            nbasis: shell.basis_count().map_err(CliError::compute)?,
        })
    }
}

pub(super) fn render_shell_table(rows: &[ShellRow]) -> String {
    let mut lines = Vec::with_capacity(rows.len() + 1);
    lines.push(format!(
        "{:>10}  {:<5}  {:<9}  {:>6}",
        "shell_type", "label", "convention", "nbasis"
    ));
    for row in rows {
        lines.push(format!(
            "{:>10}  {:<5}  {:<9}  {:>6}",
            row.shell_type, row.label, row.convention, row.nbasis
        ));
    }
    lines.join("\n")
}
