use super::CliError;
use super::helpers::{render_shell_table, resolve_limits, ShellRow};
use anyhow::Context;
use gbasis_core::numerics::{binomial, double_factorial, wrapping_double_factorial};
use gbasis_core::shell::{
    legacy_shell_basis_count, parse_shell_types, shell_basis_count, total_basis_count,
    CartesianPowers, ShellError,
};
use std::path::PathBuf;

#[derive(clap::Args)]
pub(super) struct Fac2Args {
    /// Argument of the double factorial; values <= 1 give 1
    #[arg(allow_negative_numbers = true)]
    n: i64,

    /// Wrap on overflow instead of failing
    #[arg(long)]
    wrapping: bool,
}

#[derive(clap::Args)]
pub(super) struct BinomArgs {
    #[arg(allow_negative_numbers = true)]
    n: i64,

    #[arg(allow_negative_numbers = true)]
    m: i64,
}

#[derive(clap::Args)]
pub(super) struct NbasisArgs {
    /// Shell type code: l for Cartesian, -l for pure shells
    #[arg(allow_negative_numbers = true, value_name = "SHELL_TYPE")]
    shell_type: i64,

    /// Print -1 for the invalid code instead of failing
    #[arg(long)]
    legacy: bool,
}

#[derive(clap::Args, Default)]
pub(super) struct ConfigArgs {
    /// JSON shell configuration, e.g. {"maxShellType": 5}
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(clap::Args)]
pub(super) struct ShellsArgs {
    #[command(flatten)]
    config: ConfigArgs,

    /// Emit the table as JSON
    #[arg(long)]
    json: bool,
}

#[derive(clap::Args)]
pub(super) struct CartesianArgs {
    /// Angular momentum of the Cartesian shell
    #[arg(allow_negative_numbers = true)]
    l: i64,
}

#[derive(clap::Args)]
pub(super) struct ParseArgs {
    /// Shell letters, e.g. `sp` or `D`
    label: String,

    /// Interpret d and higher shells as pure
    #[arg(long)]
    pure: bool,
}

pub(super) fn run_fac2_command(args: Fac2Args) -> Result<i32, CliError> {
    let value = if args.wrapping {
        wrapping_double_factorial(args.n)
    } else {
        double_factorial(args.n).map_err(CliError::compute)?
    };
    tracing::debug!(n = args.n, wrapping = args.wrapping, value, "computed double factorial");
    println!("{value}");
    Ok(0)
}

pub(super) fn run_binom_command(args: BinomArgs) -> Result<i32, CliError> {
    let value = binomial(args.n, args.m).map_err(CliError::compute)?;
    tracing::debug!(n = args.n, m = args.m, value, "computed binomial coefficient");
    println!("{value}");
    Ok(0)
}

pub(super) fn run_nbasis_command(args: NbasisArgs) -> Result<i32, CliError> {
    if args.legacy {
        println!("{}", legacy_shell_basis_count(args.shell_type));
        return Ok(0);
    }

    let count = shell_basis_count(args.shell_type).map_err(CliError::compute)?;
    println!("{count}");
    Ok(0)
}

pub(super) fn run_max_shell_type_command(args: ConfigArgs) -> Result<i32, CliError> {
    let limits = resolve_limits(args.config.as_deref())?;
    println!("{}", limits.max_shell_type());
    Ok(0)
}

pub(super) fn run_shells_command(args: ShellsArgs) -> Result<i32, CliError> {
    let limits = resolve_limits(args.config.config.as_deref())?;
    let rows = limits
        .shell_types()
        .map(ShellRow::from_shell)
        .collect::<Result<Vec<_>, _>>()?;
    tracing::info!(
        max_shell_type = limits.max_shell_type(),
        shells = rows.len(),
        "listing shell types"
    );

    if args.json {
        let rendered =
            serde_json::to_string_pretty(&rows).context("failed to render shell table as JSON")?;
        println!("{rendered}");
    } else {
        println!("{}", render_shell_table(&rows));
    }
    Ok(0)
}

pub(super) fn run_cartesian_command(args: CartesianArgs) -> Result<i32, CliError> {
    if args.l < 0 {
        return Err(CliError::compute(ShellError::NegativeAngularMomentum(args.l)));
    }
    for powers in CartesianPowers::iter(args.l) {
        println!("{} {} {}  {}", powers.x, powers.y, powers.z, powers);
    }
    Ok(0)
}

pub(super) fn run_parse_command(args: ParseArgs) -> Result<i32, CliError> {
    let shells = parse_shell_types(&args.label, args.pure).map_err(CliError::compute)?;
    let codes: Vec<i64> = shells.iter().map(|shell| shell.code()).collect();
    let total = total_basis_count(&codes).map_err(CliError::compute)?;
    let rendered = codes
        .iter()
        .map(i64::to_string)
        .collect::<Vec<_>>()
        .join(" ");
    println!("{rendered}");
    println!("nbasis: {total}");
    Ok(0)
}
