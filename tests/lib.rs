// Shared helpers for ticksmith behavioral tests.

use ticksmith_core::{BarSeries, DailyBar, IsoDate, Symbol};

/// Build a valid bar series from closes, one bar per weekday starting at
/// `start` (or the first weekday after it).
pub fn series_from_closes(ticker: &str, start: &str, closes: &[f64]) -> BarSeries {
    let symbol = Symbol::parse(ticker).expect("valid test symbol");
    let mut date = IsoDate::parse(start).expect("valid test date");
    let mut bars = Vec::with_capacity(closes.len());

    for close in closes {
        while !date.is_trading_day() {
            date = date.next_day().expect("valid date range");
        }
        bars.push(
            DailyBar::new(date, *close, close + 1.0, close - 1.0, *close, 2_000_000)
                .expect("valid test bar"),
        );
        date = date.next_day().expect("valid date range");
    }

    BarSeries::new(symbol, bars).expect("ordered test bars")
}
