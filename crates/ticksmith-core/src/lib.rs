//! # Ticksmith Core
//!
//! Domain types and synthetic generators for the ticksmith mock market-data
//! toolkit. There is no real data source anywhere in this crate: quotes and
//! price history come from seedable pseudo-random generators, and the
//! forecast is a toy trailing-window projection presented the way a real
//! product would present a model.
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`domain`] | Validated models (Symbol, DailyBar, Quote, ForecastResult) |
//! | [`catalog`] | Fixed ticker → company-name table |
//! | [`rng`] | Seedable uniform noise source |
//! | [`synth`] | Random-walk and quote generators |
//! | [`forecast`] | Trailing-window forecast estimator |
//! | [`export`] | CSV rendering for forecast downloads |
//! | [`share`] | QR payload text and image URL |
//! | [`feed`] | Async market-data contract |
//! | [`synthetic`] | The synthetic feed implementation |
//! | [`envelope`] | Response envelope with metadata |
//!
//! ## Determinism
//!
//! Every generator draws randomness from an injected [`Entropy`] source.
//! Seed it and the whole pipeline — walk, quote, forecast — reproduces
//! exactly; leave it unseeded for OS-random output.

pub mod catalog;
pub mod domain;
pub mod envelope;
pub mod error;
pub mod export;
pub mod feed;
pub mod forecast;
pub mod rng;
pub mod share;
pub mod synth;
pub mod synthetic;

pub use catalog::{CatalogEntry, TickerCatalog};
pub use domain::{BarSeries, DailyBar, ForecastResult, IsoDate, Quote, Symbol, UtcDateTime};
pub use envelope::{Envelope, EnvelopeError, EnvelopeMeta};
pub use error::{ForecastError, ValidationError};
pub use feed::{FeedError, FeedErrorKind, HistoryRequest, MarketData, QuoteBatch, QuoteRequest};
pub use rng::{round2, Entropy};
pub use synthetic::SyntheticFeed;
