use serde::Serialize;
use serde_json::json;
use tickwatch_core::{
    build_chart, AlphaVantageClient, ChangeSummary, ChartPoint, SeriesError, Symbol, Window,
};

use crate::cli::ChartArgs;
use crate::error::CliError;

use super::{provider_envelope_error, CommandResult};

#[derive(Debug, Serialize)]
struct ChartData<'a> {
    symbol: &'a str,
    window: Window,
    points: &'a [ChartPoint],
    total_points: usize,
    #[serde(flatten)]
    summary: ChangeSummary,
}

pub async fn run(args: &ChartArgs, client: &AlphaVantageClient) -> Result<CommandResult, CliError> {
    let symbol = Symbol::parse(&args.symbol)?;
    let window: Window = args.window.parse()?;

    let payload = match client.time_series(&symbol, window).await {
        Ok(payload) => payload,
        Err(error) => {
            let envelope_error = provider_envelope_error(&error)?;
            return Ok(empty_chart(&symbol, window)?.with_error(envelope_error));
        }
    };

    match build_chart(&payload, window) {
        Ok(chart) => {
            let data = serde_json::to_value(ChartData {
                symbol: symbol.as_str(),
                window,
                points: chart.display_points(),
                total_points: chart.points.len(),
                summary: chart.summary,
            })?;
            Ok(CommandResult::ok(data))
        }
        Err(SeriesError::NoData) => {
            let envelope_error =
                tickwatch_core::EnvelopeError::new("no_data", "no series data available")?
                    .with_retryable(false);
            Ok(empty_chart(&symbol, window)?.with_error(envelope_error))
        }
    }
}

fn empty_chart(symbol: &Symbol, window: Window) -> Result<CommandResult, CliError> {
    Ok(CommandResult::ok(json!({
        "symbol": symbol.as_str(),
        "window": window.as_str(),
        "points": [],
        "total_points": 0,
        "change": 0.0,
        "percentage": 0.0,
    })))
}
