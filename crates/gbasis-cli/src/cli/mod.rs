mod commands;
mod dispatch;
mod helpers;

use clap::Parser;
use dispatch::command_alias_from_program_name;
use gbasis_core::domain::GbasisError;

pub fn run_from_env() -> i32 {
    helpers::init_tracing();

    let mut args = std::env::args();
    let program_name = args.next().unwrap_or_else(|| "gbasis".to_string());
    let remaining: Vec<String> = args.collect();

    match run_with_program_name(&program_name, remaining) {
        Ok(code) => code,
        Err(error) => {
            let compatibility_error = error.as_gbasis_error();
            tracing::debug!(
                category = compatibility_error.category().as_str(),
                placeholder = compatibility_error.placeholder(),
                "command failed"
            );
            eprintln!("{}", compatibility_error.diagnostic_line());
            eprintln!("{}", compatibility_error.fatal_exit_line());
            compatibility_error.exit_code()
        }
    }
}

pub fn run<I, S>(args: I) -> Result<i32, CliError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let args: Vec<String> = args.into_iter().map(Into::into).collect();
    let full_args = std::iter::once("gbasis".to_string())
        .chain(args)
        .collect::<Vec<_>>();
    parse_and_dispatch(full_args)
}

fn run_with_program_name(program_name: &str, args: Vec<String>) -> Result<i32, CliError> {
    let alias = command_alias_from_program_name(program_name);
    let full_args = std::iter::once("gbasis".to_string())
        .chain(alias.map(str::to_string))
        .chain(args)
        .collect::<Vec<_>>();
    parse_and_dispatch(full_args)
}

fn parse_and_dispatch(args: Vec<String>) -> Result<i32, CliError> {
    match Cli::try_parse_from(&args) {
        Ok(cli) => dispatch_parsed(cli.command),
        Err(err) => match err.kind() {
            clap::error::ErrorKind::DisplayHelp | clap::error::ErrorKind::DisplayVersion => {
                print!("{}", err);
                Ok(0)
            }
            _ => Err(CliError::Usage(err.to_string())),
        },
    }
}

#[derive(Parser)]
#[command(name = "gbasis", about = "Gaussian shell bookkeeping helpers", version)]
struct Cli {
    #[command(subcommand)]
    command: CliCommand,
}

#[derive(clap::Subcommand)]
enum CliCommand {
    /// Print the double factorial n!!
    Fac2(commands::Fac2Args),
    /// Print the binomial coefficient C(n, m)
    Binom(commands::BinomArgs),
    /// Print the number of basis functions in a shell
    Nbasis(commands::NbasisArgs),
    /// Print the maximum supported shell type
    MaxShellType(commands::ConfigArgs),
    /// List every supported shell type with its basis function count
    Shells(commands::ShellsArgs),
    /// List the Cartesian exponents of a shell
    Cartesian(commands::CartesianArgs),
    /// Parse a shell label such as `sp` or `d` into shell types
    Parse(commands::ParseArgs),
}

fn dispatch_parsed(command: CliCommand) -> Result<i32, CliError> {
    match command {
        CliCommand::Fac2(args) => commands::run_fac2_command(args),
        CliCommand::Binom(args) => commands::run_binom_command(args),
        CliCommand::Nbasis(args) => commands::run_nbasis_command(args),
        CliCommand::MaxShellType(args) => commands::run_max_shell_type_command(args),
        CliCommand::Shells(args) => commands::run_shells_command(args),
        CliCommand::Cartesian(args) => commands::run_cartesian_command(args),
        CliCommand::Parse(args) => commands::run_parse_command(args),
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("{0}")]
    Usage(String),
    #[error("{0}")]
    Compute(GbasisError),
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl CliError {
    pub(crate) fn compute(error: impl Into<GbasisError>) -> Self {
        Self::Compute(error.into())
    }

    fn as_gbasis_error(&self) -> GbasisError {
        match self {
            Self::Usage(message) => {
                GbasisError::input_validation("INPUT.CLI_USAGE", message.clone())
            }
            Self::Compute(error) => error.clone(),
            Self::Internal(error) => GbasisError::internal("SYS.CLI", format!("{error:#}")),
        }
    }
}
