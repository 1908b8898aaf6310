use std::sync::Arc;

use serde::Serialize;

use ticksmith_core::{MarketData, Quote, QuoteRequest, Symbol};

use crate::cli::QuoteArgs;
use crate::error::CliError;

use super::CommandResult;

#[derive(Debug, Serialize)]
struct QuoteResponseData {
    quotes: Vec<Quote>,
}

/// Fetch one quote per symbol concurrently and join the results.
///
/// Each fetch is independent and keyed by its symbol, so completion order is
/// irrelevant; the output preserves the request order.
pub async fn run(
    args: &QuoteArgs,
    feed: &Arc<dyn MarketData>,
) -> Result<CommandResult, CliError> {
    let symbols = args
        .symbols
        .iter()
        .map(|raw| Symbol::parse(raw))
        .collect::<Result<Vec<_>, _>>()?;

    let mut pending = Vec::with_capacity(symbols.len());
    for symbol in symbols {
        let feed = Arc::clone(feed);
        let task_symbol = symbol.clone();
        let handle = tokio::spawn(async move {
            let request = QuoteRequest::new(vec![task_symbol])?;
            feed.quote(request).await
        });
        pending.push((symbol, handle));
    }

    let mut quotes = Vec::with_capacity(pending.len());
    for (symbol, handle) in pending {
        let batch = handle
            .await
            .map_err(|error| CliError::Command(format!("quote task for {symbol}: {error}")))??;
        quotes.extend(batch.quotes);
    }

    let data = serde_json::to_value(QuoteResponseData { quotes })?;
    Ok(CommandResult::ok(data))
}
