//! Canonical domain types for ticksmith market data.
//!
//! All models are strongly typed and validated at construction time, so an
//! instance that exists is an instance that honors its invariants:
//!
//! | Type | Description |
//! |------|-------------|
//! | [`Symbol`] | Validated, normalized ticker symbol |
//! | [`IsoDate`] | Calendar date serialized `YYYY-MM-DD` |
//! | [`UtcDateTime`] | RFC3339 UTC timestamp |
//! | [`DailyBar`] | One trading day of OHLCV data |
//! | [`BarSeries`] | Ordered daily bars for a symbol |
//! | [`Quote`] | Current-quote snapshot |
//! | [`ForecastResult`] | Projected prices with matching dates |

mod date;
mod models;
mod symbol;

pub use date::{IsoDate, UtcDateTime};
pub use models::{BarSeries, DailyBar, ForecastResult, Quote};
pub use symbol::Symbol;
