use serde_json::json;
use tickwatch_core::{AlphaVantageClient, Symbol};

use crate::cli::LogoArgs;
use crate::error::CliError;

use super::{provider_envelope_error, CommandResult};

pub async fn run(args: &LogoArgs, client: &AlphaVantageClient) -> Result<CommandResult, CliError> {
    let symbol = Symbol::parse(&args.symbol)?;

    match client.logo(&symbol).await {
        Ok(Some(logo)) => Ok(CommandResult::ok(json!({
            "symbol": symbol.as_str(),
            "logo": logo,
        }))),
        Ok(None) => Ok(CommandResult::ok(json!({
            "symbol": symbol.as_str(),
            "logo": null,
        }))
        .with_warning(format!("no logo available for {symbol}"))),
        Err(error) => {
            let envelope_error = provider_envelope_error(&error)?;
            Ok(
                CommandResult::ok(json!({ "symbol": symbol.as_str(), "logo": null }))
                    .with_error(envelope_error),
            )
        }
    }
}
