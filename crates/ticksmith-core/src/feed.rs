//! Market-data feed contract.
//!
//! Generation in this crate is synchronous arithmetic, but the feed surface
//! is async so callers are written against the same contract a real backend
//! would expose. Concurrent per-symbol fetches can be issued together and
//! joined; each result is independent and keyed by its symbol.
//!
//! | Method | Request | Response |
//! |--------|---------|----------|
//! | `quote` | [`QuoteRequest`] | [`QuoteBatch`] |
//! | `history` | [`HistoryRequest`] | [`BarSeries`] |

use std::fmt::{Display, Formatter};
use std::future::Future;
use std::pin::Pin;

use serde::{Deserialize, Serialize};

use crate::{BarSeries, Symbol};

/// Feed-level error classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedErrorKind {
    InvalidRequest,
    Internal,
}

/// Structured feed error.
///
/// There is no transient class: generation performs no I/O, so nothing is
/// retryable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedError {
    kind: FeedErrorKind,
    message: String,
}

impl FeedError {
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self {
            kind: FeedErrorKind::InvalidRequest,
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            kind: FeedErrorKind::Internal,
            message: message.into(),
        }
    }

    pub const fn kind(&self) -> FeedErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub const fn code(&self) -> &'static str {
        match self.kind {
            FeedErrorKind::InvalidRequest => "feed.invalid_request",
            FeedErrorKind::Internal => "feed.internal",
        }
    }
}

impl Display for FeedError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.message, self.code())
    }
}

impl std::error::Error for FeedError {}

/// Request payload for quote snapshots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuoteRequest {
    pub symbols: Vec<Symbol>,
}

impl QuoteRequest {
    pub fn new(symbols: Vec<Symbol>) -> Result<Self, FeedError> {
        if symbols.is_empty() {
            return Err(FeedError::invalid_request(
                "quote request must include at least one symbol",
            ));
        }
        Ok(Self { symbols })
    }
}

/// Request payload for daily price history.
///
/// `span_days` counts calendar days back from today; weekends inside the
/// span produce no bars, and a zero span produces an empty series.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryRequest {
    pub symbol: Symbol,
    pub span_days: u32,
}

impl HistoryRequest {
    pub fn new(symbol: Symbol, span_days: u32) -> Self {
        Self { symbol, span_days }
    }
}

/// Quote snapshots keyed by symbol, in request order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteBatch {
    pub quotes: Vec<crate::Quote>,
}

/// Market-data feed contract.
///
/// Implementations must be `Send + Sync`; callers may share one feed across
/// concurrently spawned fetches.
pub trait MarketData: Send + Sync {
    /// Fetch current-quote snapshots for the requested symbols.
    fn quote<'a>(
        &'a self,
        req: QuoteRequest,
    ) -> Pin<Box<dyn Future<Output = Result<QuoteBatch, FeedError>> + Send + 'a>>;

    /// Fetch the trailing daily-bar history for one symbol.
    fn history<'a>(
        &'a self,
        req: HistoryRequest,
    ) -> Pin<Box<dyn Future<Output = Result<BarSeries, FeedError>> + Send + 'a>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quote_request_rejects_empty_symbol_list() {
        let err = QuoteRequest::new(Vec::new()).expect_err("must fail");
        assert_eq!(err.kind(), FeedErrorKind::InvalidRequest);
        assert_eq!(err.code(), "feed.invalid_request");
    }

    #[test]
    fn feed_error_display_includes_code() {
        let error = FeedError::internal("bar synthesis failed");
        assert_eq!(error.to_string(), "bar synthesis failed (feed.internal)");
    }
}
