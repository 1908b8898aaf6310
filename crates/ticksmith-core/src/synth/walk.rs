use crate::rng::{round2, Entropy};
use crate::{DailyBar, IsoDate, ValidationError};

/// Starting price band for a fresh walk.
const START_PRICE_LO: f64 = 50.0;
const START_PRICE_HI: f64 = 500.0;
/// Per-day close change band, in percent.
const DAILY_CHANGE_PCT: f64 = 3.0;
/// Open drifts from the previous close by at most this much, in dollars.
const OPEN_NOISE: f64 = 1.0;
/// High/low extend past the open/close envelope by at most this much.
const RANGE_NOISE: f64 = 2.0;
const VOLUME_LO: u64 = 1_000_000;
const VOLUME_HI: u64 = 11_000_000;
/// Prices never reach zero, however long the walk drifts down.
const PRICE_FLOOR: f64 = 0.01;

/// Generate a random-walk daily bar sequence.
///
/// Produces one bar per weekday from `start` to `start + horizon_days`
/// inclusive, in ascending date order; weekend days are skipped without
/// producing a bar. A non-positive horizon yields an empty sequence.
pub fn random_walk(
    start: IsoDate,
    horizon_days: u32,
    entropy: &mut Entropy,
) -> Result<Vec<DailyBar>, ValidationError> {
    if horizon_days == 0 {
        return Ok(Vec::new());
    }

    let mut bars = Vec::with_capacity(horizon_days as usize + 1);
    let mut previous_close = entropy.uniform(START_PRICE_LO, START_PRICE_HI);
    let mut date = start;

    for day in 0..=horizon_days {
        if date.is_trading_day() {
            bars.push(next_bar(date, previous_close, entropy)?);
            previous_close = bars[bars.len() - 1].close;
        }

        if day < horizon_days {
            date = date.next_day()?;
        }
    }

    Ok(bars)
}

/// Derive one bar from the previous close, then validate it as a whole.
fn next_bar(
    date: IsoDate,
    previous_close: f64,
    entropy: &mut Entropy,
) -> Result<DailyBar, ValidationError> {
    let change_pct = entropy.uniform(-DAILY_CHANGE_PCT, DAILY_CHANGE_PCT);
    let close = previous_close * (1.0 + change_pct / 100.0);
    let open = (previous_close + entropy.uniform(-OPEN_NOISE, OPEN_NOISE)).max(PRICE_FLOOR);
    let high = open.max(close) + entropy.uniform(0.0, RANGE_NOISE);
    // Floored at half the day's envelope so deep downward drifts cannot push
    // the low to or below zero.
    let low_anchor = open.min(close);
    let low = (low_anchor - entropy.uniform(0.0, RANGE_NOISE)).max(low_anchor / 2.0);
    let volume = entropy.int_in(VOLUME_LO..VOLUME_HI);

    DailyBar::new(
        date,
        round2(open),
        round2(high),
        round2(low),
        round2(close),
        volume,
    )
}
