//! Synthetic feed implementation.
//!
//! The sole [`MarketData`] implementation: every response is generated
//! locally from the random walk and quote synthesizer. With a seed set,
//! output is deterministic per symbol and independent of batch order or
//! join order, so concurrent and sequential fetches agree.

use std::future::Future;
use std::pin::Pin;

use crate::feed::{FeedError, HistoryRequest, MarketData, QuoteBatch, QuoteRequest};
use crate::rng::Entropy;
use crate::synth::{random_walk, synthesize_quote};
use crate::{BarSeries, IsoDate, Symbol, TickerCatalog};

/// Stream salts keep quote and history draws independent for one symbol.
const QUOTE_STREAM: u64 = 0x5154;
const HISTORY_STREAM: u64 = 0x4854;

/// Locally generated market data behind the async feed contract.
pub struct SyntheticFeed {
    catalog: TickerCatalog,
    seed: Option<u64>,
}

impl SyntheticFeed {
    pub fn new(catalog: TickerCatalog) -> Self {
        Self {
            catalog,
            seed: None,
        }
    }

    /// Deterministic feed: identical seeds reproduce identical responses.
    pub fn with_seed(catalog: TickerCatalog, seed: u64) -> Self {
        Self {
            catalog,
            seed: Some(seed),
        }
    }

    pub fn catalog(&self) -> &TickerCatalog {
        &self.catalog
    }

    fn entropy_for(&self, symbol: &Symbol, stream: u64) -> Entropy {
        match self.seed {
            Some(seed) => Entropy::seeded(seed ^ symbol_seed(symbol) ^ stream),
            None => Entropy::random(),
        }
    }
}

impl MarketData for SyntheticFeed {
    fn quote<'a>(
        &'a self,
        req: QuoteRequest,
    ) -> Pin<Box<dyn Future<Output = Result<QuoteBatch, FeedError>> + Send + 'a>> {
        Box::pin(async move {
            let quotes = req
                .symbols
                .iter()
                .map(|symbol| {
                    let mut entropy = self.entropy_for(symbol, QUOTE_STREAM);
                    synthesize_quote(symbol, &self.catalog, &mut entropy)
                        .map_err(|error| FeedError::internal(error.to_string()))
                })
                .collect::<Result<Vec<_>, _>>()?;

            tracing::debug!(count = quotes.len(), "synthesized quote batch");
            Ok(QuoteBatch { quotes })
        })
    }

    fn history<'a>(
        &'a self,
        req: HistoryRequest,
    ) -> Pin<Box<dyn Future<Output = Result<BarSeries, FeedError>> + Send + 'a>> {
        Box::pin(async move {
            let start = IsoDate::today_utc()
                .minus_days(req.span_days)
                .map_err(|error| FeedError::invalid_request(error.to_string()))?;

            let mut entropy = self.entropy_for(&req.symbol, HISTORY_STREAM);
            let bars = random_walk(start, req.span_days, &mut entropy)
                .map_err(|error| FeedError::internal(error.to_string()))?;

            tracing::debug!(
                symbol = %req.symbol,
                bars = bars.len(),
                span_days = req.span_days,
                "synthesized history"
            );

            BarSeries::new(req.symbol, bars)
                .map_err(|error| FeedError::internal(error.to_string()))
        })
    }
}

/// Stable per-symbol seed component (byte fold).
fn symbol_seed(symbol: &Symbol) -> u64 {
    symbol.as_str().bytes().fold(13_u64, |acc, byte| {
        acc.wrapping_mul(29).wrapping_add(u64::from(byte))
    })
}

#[cfg(test)]
mod tests {
    use std::task::{Context, Poll, RawWaker, RawWakerVTable, Waker};

    use super::*;

    #[test]
    fn seeded_quotes_ignore_batch_order() {
        let aapl = Symbol::parse("AAPL").expect("valid symbol");
        let msft = Symbol::parse("MSFT").expect("valid symbol");
        let feed = SyntheticFeed::with_seed(TickerCatalog::builtin(), 42);

        let forward = block_on(feed.quote(
            QuoteRequest::new(vec![aapl.clone(), msft.clone()]).expect("valid request"),
        ))
        .expect("quotes synthesize");
        let reversed = block_on(
            feed.quote(QuoteRequest::new(vec![msft, aapl]).expect("valid request")),
        )
        .expect("quotes synthesize");

        // `as_of` is stamped per call; the generated fields must agree.
        for (a, b) in [
            (&forward.quotes[0], &reversed.quotes[1]),
            (&forward.quotes[1], &reversed.quotes[0]),
        ] {
            assert_eq!(a.symbol, b.symbol);
            assert_eq!(a.price, b.price);
            assert_eq!(a.change, b.change);
            assert_eq!(a.volume, b.volume);
        }
    }

    #[test]
    fn history_span_covers_recent_weekdays() {
        let symbol = Symbol::parse("GOOGL").expect("valid symbol");
        let feed = SyntheticFeed::with_seed(TickerCatalog::builtin(), 7);

        let series = block_on(feed.history(HistoryRequest::new(symbol, 30)))
            .expect("history synthesizes");

        // 31 calendar days contain at least 21 and at most 23 weekdays.
        assert!((21..=23).contains(&series.bars.len()));
        let today = IsoDate::today_utc();
        for bar in &series.bars {
            assert!(bar.date <= today);
        }
    }

    #[test]
    fn zero_span_history_is_empty() {
        let symbol = Symbol::parse("GOOGL").expect("valid symbol");
        let feed = SyntheticFeed::with_seed(TickerCatalog::builtin(), 7);
        let series = block_on(feed.history(HistoryRequest::new(symbol, 0)))
            .expect("history synthesizes");
        assert!(series.bars.is_empty());
    }

    #[test]
    fn quote_and_history_draws_are_independent() {
        let symbol = Symbol::parse("AAPL").expect("valid symbol");
        let feed = SyntheticFeed::with_seed(TickerCatalog::builtin(), 42);

        let batch = block_on(
            feed.quote(QuoteRequest::new(vec![symbol.clone()]).expect("valid request")),
        )
        .expect("quotes synthesize");
        let series = block_on(feed.history(HistoryRequest::new(symbol, 10)))
            .expect("history synthesizes");

        // Same symbol and seed, different streams: the first draws differ.
        let first_close = series.bars.first().map(|bar| bar.close);
        assert_ne!(first_close, Some(batch.quotes[0].price));
    }

    // The generators never suspend, so a no-op waker is all polling needs.
    fn block_on<F>(future: F) -> F::Output
    where
        F: Future,
    {
        let waker = noop_waker();
        let mut context = Context::from_waker(&waker);
        let mut future = std::pin::pin!(future);

        loop {
            match future.as_mut().poll(&mut context) {
                Poll::Ready(output) => return output,
                Poll::Pending => std::thread::yield_now(),
            }
        }
    }

    fn noop_waker() -> Waker {
        // SAFETY: The vtable functions never dereference the data pointer.
        unsafe { Waker::from_raw(noop_raw_waker()) }
    }

    fn noop_raw_waker() -> RawWaker {
        RawWaker::new(std::ptr::null(), &NOOP_RAW_WAKER_VTABLE)
    }

    unsafe fn noop_raw_waker_clone(_: *const ()) -> RawWaker {
        noop_raw_waker()
    }

    unsafe fn noop_raw_waker_wake(_: *const ()) {}

    unsafe fn noop_raw_waker_wake_by_ref(_: *const ()) {}

    unsafe fn noop_raw_waker_drop(_: *const ()) {}

    static NOOP_RAW_WAKER_VTABLE: RawWakerVTable = RawWakerVTable::new(
        noop_raw_waker_clone,
        noop_raw_waker_wake,
        noop_raw_waker_wake_by_ref,
        noop_raw_waker_drop,
    );
}
