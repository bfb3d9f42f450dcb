mod cli;
mod commands;
mod error;
mod metadata;
mod output;
mod session;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Command};
use crate::error::CliError;

/// Exit code when the command completed but the envelope carries errors.
const EXIT_COMMAND_ERRORS: i32 = 3;

#[tokio::main]
async fn main() {
    init_tracing();

    let cli = Cli::parse();
    match run(&cli).await {
        Ok(exit_code) if exit_code != 0 => std::process::exit(exit_code),
        Ok(_) => {}
        Err(error) => {
            eprintln!("error: {error}");
            std::process::exit(i32::from(error.exit_code()));
        }
    }
}

async fn run(cli: &Cli) -> Result<i32, CliError> {
    // The watch session owns the terminal directly instead of emitting
    // a single envelope.
    if let Command::Watch(args) = &cli.command {
        commands::watch::run(args, cli.timeout_ms).await?;
        return Ok(0);
    }

    let envelope = commands::run(cli).await?;
    output::render(&envelope, cli.format, cli.pretty)?;

    if envelope.errors.is_empty() {
        Ok(0)
    } else {
        Ok(EXIT_COMMAND_ERRORS)
    }
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
}
