//! Command-line arguments.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use varpath_domain::VariableName;

/// Resolve `$(Variable)` paths into absolute paths.
#[derive(Debug, Parser)]
#[command(name = "varpath", version, about)]
pub struct Cli {
    /// Settings file (JSON or YAML). Defaults to $VARPATH_SETTINGS, then the
    /// platform config directory.
    #[arg(long, global = true, env = "VARPATH_SETTINGS")]
    pub settings: Option<PathBuf>,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Substitute variables and validate the result as an absolute path.
    Resolve(ResolveArgs),
    /// List the variables referenced by an expression.
    Vars(VarsArgs),
}

/// Arguments for `varpath resolve`.
#[derive(Debug, Args)]
pub struct ResolveArgs {
    /// Path expression, e.g. `$(SolutionDir)/bin`.
    pub expression: String,

    /// Bindings file (JSON or YAML). May be repeated; later files win.
    #[arg(short, long = "bindings", value_name = "FILE")]
    pub bindings_files: Vec<PathBuf>,

    /// Offer process environment variables as bindings.
    #[arg(long)]
    pub env: bool,

    /// Only use environment variables with this prefix (prefix is stripped).
    #[arg(long, value_name = "PREFIX")]
    pub env_prefix: Option<String>,

    /// Inline binding `NAME=VALUE`. May be repeated; overrides every other source.
    #[arg(short, long = "set", value_name = "NAME=VALUE", value_parser = parse_binding)]
    pub set: Vec<(VariableName, String)>,

    /// Compare variable names without regard to ASCII case.
    #[arg(short = 'i', long)]
    pub case_insensitive: bool,

    /// Print the outcome as JSON.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for `varpath vars`.
#[derive(Debug, Args)]
pub struct VarsArgs {
    /// Path expression to inspect.
    pub expression: String,

    /// Print the names as a JSON array.
    #[arg(long)]
    pub json: bool,
}

fn parse_binding(raw: &str) -> Result<(VariableName, String), String> {
    let (name, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=VALUE, got {raw:?}"))?;
    let name = VariableName::new(name).map_err(|e| e.to_string())?;
    Ok((name, value.to_string()))
}
