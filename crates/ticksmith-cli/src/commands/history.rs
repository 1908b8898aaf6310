use serde::Serialize;

use ticksmith_core::{BarSeries, HistoryRequest, MarketData, Symbol};

use crate::cli::HistoryArgs;
use crate::error::CliError;

use super::CommandResult;

#[derive(Debug, Serialize)]
struct HistoryResponseData {
    series: BarSeries,
}

pub async fn run(args: &HistoryArgs, feed: &dyn MarketData) -> Result<CommandResult, CliError> {
    let symbol = Symbol::parse(&args.symbol)?;
    let series = feed
        .history(HistoryRequest::new(symbol, args.days))
        .await?;

    let data = serde_json::to_value(HistoryResponseData { series })?;
    Ok(CommandResult::ok(data))
}
