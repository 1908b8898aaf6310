//! Fixed ticker → company-name lookup table.
//!
//! The table is built once at startup and passed by reference into the quote
//! synthesizer; nothing reads it as ambient global state.

use serde::{Deserialize, Serialize};

use crate::Symbol;

const BUILTIN: &[(&str, &str)] = &[
    ("AAPL", "Apple Inc."),
    ("MSFT", "Microsoft Corporation"),
    ("GOOGL", "Alphabet Inc."),
    ("AMZN", "Amazon.com, Inc."),
    ("META", "Meta Platforms, Inc."),
    ("TSLA", "Tesla, Inc."),
    ("NVDA", "NVIDIA Corporation"),
    ("JPM", "JPMorgan Chase & Co."),
];

/// One known ticker with its company name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub ticker: String,
    pub name: String,
}

/// Read-only ticker catalog.
#[derive(Debug, Clone, Default)]
pub struct TickerCatalog {
    entries: Vec<CatalogEntry>,
}

impl TickerCatalog {
    /// The built-in dashboard tickers.
    pub fn builtin() -> Self {
        let entries = BUILTIN
            .iter()
            .map(|(ticker, name)| CatalogEntry {
                ticker: (*ticker).to_owned(),
                name: (*name).to_owned(),
            })
            .collect();
        Self { entries }
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn name_for(&self, symbol: &Symbol) -> Option<&str> {
        self.entries
            .iter()
            .find(|entry| entry.ticker == symbol.as_str())
            .map(|entry| entry.name.as_str())
    }

    /// Company name for known tickers, the symbol itself otherwise.
    pub fn resolve_name(&self, symbol: &Symbol) -> String {
        self.name_for(symbol)
            .map(str::to_owned)
            .unwrap_or_else(|| symbol.as_str().to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_known_ticker() {
        let catalog = TickerCatalog::builtin();
        let symbol = Symbol::parse("AAPL").expect("valid symbol");
        assert_eq!(catalog.resolve_name(&symbol), "Apple Inc.");
    }

    #[test]
    fn falls_back_to_symbol_for_unknown_ticker() {
        let catalog = TickerCatalog::builtin();
        let symbol = Symbol::parse("ZZZZ").expect("valid symbol");
        assert_eq!(catalog.resolve_name(&symbol), "ZZZZ");
    }

    #[test]
    fn builtin_catalog_lists_dashboard_tickers() {
        let catalog = TickerCatalog::builtin();
        assert_eq!(catalog.entries().len(), 8);
        assert_eq!(catalog.entries()[0].ticker, "AAPL");
    }
}
