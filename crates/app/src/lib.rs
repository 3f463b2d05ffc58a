//! Varpath command-line application
//!
//! Wires settings, bindings sources and the resolver together for the
//! `varpath` binary.

pub mod cli;
pub mod report;

use std::io::Write;

use thiserror::Error;
use varpath_application::{ApplicationError, ResolvePath, parse_expression};
use varpath_domain::{
    DomainError, NameMatching, ResolverSettings, VariableBindings, VariableName,
};
use varpath_infrastructure::{
    FileBindings, LayeredBindings, ProcessEnvBindings, SerializationError, SettingsError,
    SettingsRepository, StaticBindings, TokioFileSystem, to_json_stable,
};

pub use cli::{Cli, Command, ResolveArgs, VarsArgs};
pub use report::{Exit, OutcomeReport};

/// Errors that abort a command before an outcome can be reported.
#[derive(Debug, Error)]
pub enum AppError {
    /// Loading bindings or resolving failed.
    #[error(transparent)]
    Application(#[from] ApplicationError),

    /// The expression does not parse.
    #[error("invalid path expression: {0}")]
    Domain(#[from] DomainError),

    /// Settings could not be loaded.
    #[error("settings error: {0}")]
    Settings(#[from] SettingsError),

    /// Output could not be serialized.
    #[error(transparent)]
    Serialization(#[from] SerializationError),

    /// Output could not be written.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Runs a parsed command line, writing results to `out` and diagnostics to `err`.
///
/// # Errors
///
/// Returns an error for settings, bindings, parse and output failures.
/// Unresolved variables and non-absolute results are reported through the
/// returned [`Exit`], not as errors.
pub async fn run<W: Write, E: Write>(
    cli: Cli,
    out: &mut W,
    err: &mut E,
) -> Result<Exit, AppError> {
    match cli.command {
        Command::Resolve(args) => {
            let settings = SettingsRepository::new(TokioFileSystem::new())
                .load_or_default(cli.settings.as_deref())
                .await?;
            resolve(&args, &settings, out, err).await
        }
        Command::Vars(args) => vars(&args, out),
    }
}

async fn resolve<W: Write, E: Write>(
    args: &ResolveArgs,
    settings: &ResolverSettings,
    out: &mut W,
    err: &mut E,
) -> Result<Exit, AppError> {
    let matching = if args.case_insensitive {
        NameMatching::CaseInsensitive
    } else {
        settings.name_matching
    };

    let use_case = ResolvePath::new(bindings_sources(args, settings, matching), matching);
    let output = use_case.execute(&args.expression).await?;
    let outcome = &output.outcome;

    if args.json {
        out.write_all(to_json_stable(&OutcomeReport::from(outcome))?.as_bytes())?;
    } else if let Some(path) = outcome.absolute_path() {
        writeln!(out, "{path}")?;
    } else if let Some(message) = outcome.failure_message() {
        writeln!(err, "error: {message}")?;
    }

    tracing::info!(
        expression = %output.expression,
        bindings = output.binding_count,
        status = ?outcome.status(),
        "resolution finished"
    );
    Ok(Exit::from(outcome.status()))
}

/// Builds the bindings layers in precedence order: environment, settings
/// files, command-line files, then inline `--set` values.
fn bindings_sources(
    args: &ResolveArgs,
    settings: &ResolverSettings,
    matching: NameMatching,
) -> LayeredBindings {
    let mut layers = LayeredBindings::with_matching(matching);

    if args.env || args.env_prefix.is_some() || settings.include_environment {
        let prefix = args
            .env_prefix
            .clone()
            .or_else(|| settings.environment_prefix.clone());
        layers.push(prefix.map_or_else(ProcessEnvBindings::new, ProcessEnvBindings::with_prefix));
    }

    for path in settings.bindings_files.iter().chain(&args.bindings_files) {
        layers.push(FileBindings::new(TokioFileSystem::new(), path.clone()));
    }

    if !args.set.is_empty() {
        let mut inline = VariableBindings::with_matching(matching);
        inline.extend(args.set.iter().cloned());
        layers.push(StaticBindings::new(inline));
    }

    layers
}

fn vars<W: Write>(args: &VarsArgs, out: &mut W) -> Result<Exit, AppError> {
    let expression = parse_expression(&args.expression)?;
    let names: Vec<&str> = expression
        .variable_names()
        .into_iter()
        .map(VariableName::as_str)
        .collect();

    if args.json {
        out.write_all(to_json_stable(&names)?.as_bytes())?;
    } else {
        for name in names {
            writeln!(out, "{name}")?;
        }
    }
    Ok(Exit::Resolved)
}
