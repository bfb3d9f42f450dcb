mod chart;
mod logo;
mod movers;
mod overview;
pub mod watch;

use std::time::Instant;

use serde_json::Value;
use tickwatch_core::{
    AlphaVantageClient, Envelope, EnvelopeError, ProviderConfig, ProviderError, ProviderErrorKind,
};

use crate::cli::{Cli, Command};
use crate::error::CliError;
use crate::metadata::Metadata;

pub struct CommandResult {
    pub data: Value,
    pub warnings: Vec<String>,
    pub errors: Vec<EnvelopeError>,
}

impl CommandResult {
    pub fn ok(data: Value) -> Self {
        Self {
            data,
            warnings: Vec::new(),
            errors: Vec::new(),
        }
    }

    pub fn with_warning(mut self, warning: impl Into<String>) -> Self {
        self.warnings.push(warning.into());
        self
    }

    pub fn with_error(mut self, error: EnvelopeError) -> Self {
        self.errors.push(error);
        self
    }
}

pub async fn run(cli: &Cli) -> Result<Envelope<Value>, CliError> {
    let client =
        AlphaVantageClient::new(ProviderConfig::from_env()).with_timeout_ms(cli.timeout_ms);

    let started = Instant::now();
    tracing::debug!(command = ?cli.command, "dispatching command");
    let command_result = match &cli.command {
        Command::Movers(args) => movers::run(args, &client).await?,
        Command::Overview(args) => overview::run(args, &client).await?,
        Command::Logo(args) => logo::run(args, &client).await?,
        Command::Chart(args) => chart::run(args, &client).await?,
        // Dispatched before the envelope pipeline in main.
        Command::Watch(_) => return Err(CliError::Command(String::from(
            "watch is interactive and does not produce an envelope",
        ))),
    };
    let latency_ms = started.elapsed().as_millis() as u64;

    let CommandResult {
        data,
        warnings,
        errors,
    } = command_result;

    let mut metadata = Metadata::new(latency_ms);
    for warning in warnings {
        metadata.push_warning(warning);
    }

    Envelope::with_errors(metadata.into_envelope_meta(), data, errors).map_err(CliError::from)
}

/// Stable machine-readable code for a provider error kind.
pub(crate) const fn provider_error_code(kind: ProviderErrorKind) -> &'static str {
    match kind {
        ProviderErrorKind::NotConfigured => "not_configured",
        ProviderErrorKind::Http => "http_error",
        ProviderErrorKind::ProviderMessage => "provider_message",
        ProviderErrorKind::MalformedResponse => "malformed_response",
    }
}

pub(crate) fn provider_envelope_error(error: &ProviderError) -> Result<EnvelopeError, CliError> {
    Ok(
        EnvelopeError::new(provider_error_code(error.kind()), error.message())?
            .with_retryable(error.retryable()),
    )
}
