use serde_json::json;
use tickwatch_core::{AlphaVantageClient, Symbol};

use crate::cli::OverviewArgs;
use crate::error::CliError;

use super::{provider_envelope_error, CommandResult};

pub async fn run(
    args: &OverviewArgs,
    client: &AlphaVantageClient,
) -> Result<CommandResult, CliError> {
    let symbol = Symbol::parse(&args.symbol)?;

    match client.overview(&symbol).await {
        Ok(overview) => {
            let market_cap_display = overview.market_cap_display();
            let mut data = serde_json::to_value(&overview)?;
            if let Some(object) = data.as_object_mut() {
                object.insert(
                    String::from("MarketCapitalizationDisplay"),
                    json!(market_cap_display),
                );
            }
            Ok(CommandResult::ok(data))
        }
        Err(error) => {
            let envelope_error = provider_envelope_error(&error)?;
            Ok(CommandResult::ok(json!({ "Symbol": symbol.as_str() })).with_error(envelope_error))
        }
    }
}
