//! Behavioral tests for the synthetic feed behind the async contract.

use std::sync::Arc;

use ticksmith_core::{
    FeedErrorKind, HistoryRequest, IsoDate, MarketData, QuoteRequest, Symbol, SyntheticFeed,
    TickerCatalog,
};

fn seeded_feed(seed: u64) -> SyntheticFeed {
    SyntheticFeed::with_seed(TickerCatalog::builtin(), seed)
}

#[tokio::test]
async fn batch_returns_one_quote_per_symbol_in_request_order() {
    let feed = seeded_feed(42);
    let symbols = ["AAPL", "MSFT", "GOOGL", "AMZN"]
        .iter()
        .map(|raw| Symbol::parse(raw).expect("valid symbol"))
        .collect::<Vec<_>>();

    let batch = feed
        .quote(QuoteRequest::new(symbols.clone()).expect("valid request"))
        .await
        .expect("quotes synthesize");

    assert_eq!(batch.quotes.len(), symbols.len());
    for (quote, symbol) in batch.quotes.iter().zip(&symbols) {
        assert_eq!(&quote.symbol, symbol);
    }
}

#[tokio::test]
async fn concurrent_fetches_join_to_the_sequential_result() {
    let feed: Arc<dyn MarketData> = Arc::new(seeded_feed(42));
    let symbols = ["AAPL", "MSFT", "GOOGL", "AMZN"]
        .iter()
        .map(|raw| Symbol::parse(raw).expect("valid symbol"))
        .collect::<Vec<_>>();

    let sequential = feed
        .quote(QuoteRequest::new(symbols.clone()).expect("valid request"))
        .await
        .expect("quotes synthesize");

    // Issue the same symbols as independent tasks and join them; completion
    // order must not matter because each result is keyed by its symbol.
    let mut handles = Vec::new();
    for symbol in symbols.iter().rev() {
        let feed = Arc::clone(&feed);
        let symbol = symbol.clone();
        handles.push(tokio::spawn(async move {
            let request = QuoteRequest::new(vec![symbol]).expect("valid request");
            feed.quote(request).await.expect("quotes synthesize")
        }));
    }

    let mut joined = Vec::new();
    for handle in handles {
        joined.extend(handle.await.expect("task completes").quotes);
    }

    for quote in &sequential.quotes {
        let twin = joined
            .iter()
            .find(|candidate| candidate.symbol == quote.symbol)
            .expect("joined batch covers every symbol");
        assert_eq!(twin.price, quote.price);
        assert_eq!(twin.change, quote.change);
        assert_eq!(twin.previous_close, quote.previous_close);
        assert_eq!(twin.volume, quote.volume);
    }
}

#[tokio::test]
async fn unknown_ticker_echoes_symbol_as_name() {
    let feed = seeded_feed(7);
    let symbol = Symbol::parse("WXYZ").expect("valid symbol");

    let batch = feed
        .quote(QuoteRequest::new(vec![symbol]).expect("valid request"))
        .await
        .expect("quotes synthesize");

    assert_eq!(batch.quotes[0].name, "WXYZ");
}

#[tokio::test]
async fn known_ticker_resolves_catalog_name() {
    let feed = seeded_feed(7);
    let symbol = Symbol::parse("jpm").expect("valid symbol");

    let batch = feed
        .quote(QuoteRequest::new(vec![symbol]).expect("valid request"))
        .await
        .expect("quotes synthesize");

    assert_eq!(batch.quotes[0].name, "JPMorgan Chase & Co.");
}

#[test]
fn empty_quote_request_is_rejected() {
    let err = QuoteRequest::new(Vec::new()).expect_err("must fail");
    assert_eq!(err.kind(), FeedErrorKind::InvalidRequest);
}

#[tokio::test]
async fn history_bars_end_today_and_skip_weekends() {
    let feed = seeded_feed(11);
    let symbol = Symbol::parse("META").expect("valid symbol");

    let series = feed
        .history(HistoryRequest::new(symbol, 30))
        .await
        .expect("history synthesizes");

    let today = IsoDate::today_utc();
    assert!(!series.bars.is_empty());
    for bar in &series.bars {
        assert!(bar.date <= today);
        assert!(bar.date.is_trading_day());
    }
    for pair in series.bars.windows(2) {
        assert!(pair[0].date < pair[1].date);
    }
}

#[tokio::test]
async fn seeded_history_is_reproducible_across_calls() {
    let feed = seeded_feed(23);
    let symbol = Symbol::parse("NVDA").expect("valid symbol");

    let first = feed
        .history(HistoryRequest::new(symbol.clone(), 20))
        .await
        .expect("history synthesizes");
    let second = feed
        .history(HistoryRequest::new(symbol, 20))
        .await
        .expect("history synthesizes");

    assert_eq!(first, second);
}
