use std::path::Path;

/// Subcommands that can be invoked directly through a same-named executable
/// link, e.g. `fac2 7` instead of `gbasis fac2 7`.
pub(super) const ALIASABLE_COMMANDS: [&str; 4] = ["fac2", "binom", "nbasis", "max-shell-type"];

pub(super) fn command_alias_from_program_name(program_name: &str) -> Option<&'static str> {
    let executable_name = Path::new(program_name)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or(program_name);
    let normalized = executable_name
        .strip_suffix(".exe")
        .unwrap_or(executable_name);

    if normalized == "gbasis" {
        return None;
    }

    ALIASABLE_COMMANDS
        .iter()
        .copied()
        .find(|command| *command == normalized)
}
