//! CSV rendering for forecast downloads.
//!
//! Dates and prices cannot contain delimiter characters, so no quoting or
//! escaping is required.

use std::fmt::Write as _;

use crate::{ForecastResult, Symbol};

pub const CSV_HEADER: &str = "date,predicted_price";

/// Render a forecast as a two-column CSV document.
pub fn to_csv(result: &ForecastResult) -> String {
    let mut csv = String::with_capacity(CSV_HEADER.len() + 1 + result.len() * 18);
    csv.push_str(CSV_HEADER);
    csv.push('\n');

    for (date, price) in result.dates.iter().zip(&result.predictions) {
        // Writing to a String cannot fail.
        let _ = writeln!(csv, "{date},{price}");
    }

    csv
}

/// Download filename for a forecast export.
pub fn csv_filename(symbol: &Symbol) -> String {
    format!("{symbol}_prediction.csv")
}
