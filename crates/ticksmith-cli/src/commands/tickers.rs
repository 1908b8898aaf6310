use serde::Serialize;

use ticksmith_core::{CatalogEntry, TickerCatalog};

use crate::error::CliError;

use super::CommandResult;

#[derive(Debug, Serialize)]
struct TickersResponseData {
    tickers: Vec<CatalogEntry>,
}

pub fn run(catalog: &TickerCatalog) -> Result<CommandResult, CliError> {
    let data = serde_json::to_value(TickersResponseData {
        tickers: catalog.entries().to_vec(),
    })?;
    Ok(CommandResult::ok(data))
}
