//! Hyperstack CLI binary entrypoint.
//!
//! This is the main entry point for the `hyperstack` command-line tool.

use std::io;
use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use hyperstack::{ClientConfig, CredentialResolver, HyperstackClient};
use hyperstack_cli::cli::Cli;
use hyperstack_cli::dispatch::Dispatcher;
use hyperstack_cli::output::OutputFormat;

fn main() -> ExitCode {
    // Logs go to stderr so stdout only carries the response.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    // One request per invocation, so a single-threaded runtime is enough.
    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(rt) => rt,
        Err(e) => {
            eprintln!("Failed to create async runtime: {e}");
            return ExitCode::FAILURE;
        }
    };

    match runtime.block_on(run(cli)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), hyperstack_cli::CliError> {
    let key = CredentialResolver::from_env().resolve(cli.api_key.as_deref())?;

    let config = ClientConfig::default()
        .with_base_url(cli.base_url.as_str())
        .with_timeout(Duration::from_secs(cli.timeout));
    let client = HyperstackClient::new(config)?;

    let format = OutputFormat::new(cli.format);
    let mut stdout = io::stdout().lock();

    Dispatcher::new(&client, &key)
        .execute(&mut stdout, &format, &cli.command)
        .await
}
