//! Varpath binary.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use varpath::{Cli, Exit};

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let result = varpath::run(cli, &mut std::io::stdout(), &mut std::io::stderr()).await;

    match result {
        Ok(exit) => ExitCode::from(exit.code()),
        Err(e) => {
            tracing::error!(error = %e, "varpath failed");
            eprintln!("error: {e}");
            ExitCode::from(Exit::Failure.code())
        }
    }
}
