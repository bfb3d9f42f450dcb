use serde::Serialize;
use serde_json::json;
use tickwatch_core::{AlphaVantageClient, Mover, MoversBoard};

use crate::cli::MoversArgs;
use crate::error::CliError;

use super::{provider_envelope_error, CommandResult};

#[derive(Debug, Serialize)]
struct FilteredMovers<'a> {
    query: &'a str,
    matches: Vec<Mover>,
}

pub async fn run(args: &MoversArgs, client: &AlphaVantageClient) -> Result<CommandResult, CliError> {
    match client.movers().await {
        Ok(board) => render(args, board),
        Err(error) => {
            let envelope_error = provider_envelope_error(&error)?;
            Ok(CommandResult::ok(json!({
                "top_gainers": [],
                "top_losers": [],
                "most_actively_traded": [],
            }))
            .with_error(envelope_error))
        }
    }
}

fn render(args: &MoversArgs, board: MoversBoard) -> Result<CommandResult, CliError> {
    let data = match args.filter.as_deref() {
        Some(query) => serde_json::to_value(FilteredMovers {
            query,
            matches: board.filter(query),
        })?,
        None => serde_json::to_value(board)?,
    };

    Ok(CommandResult::ok(data))
}
