//! Trailing-window forecast estimator.
//!
//! The projection is a toy: it averages the day-over-day change across the
//! most recent closes and compounds that mean forward with a small uniform
//! jitter. The accuracy score is synthetic and carries no statistical
//! meaning. Both facts are intentional — this mirrors the product surface,
//! not a model.

use crate::rng::{round2, Entropy};
use crate::{BarSeries, ForecastError, ForecastResult, IsoDate};

/// At most this many trailing closes feed the mean-change estimate.
pub const TRAILING_WINDOW: usize = 10;
/// Multiplicative jitter applied to the mean change at each step.
pub const VOLATILITY: f64 = 0.015;

const ACCURACY_LO: f64 = 75.0;
const ACCURACY_HI: f64 = 90.0;

/// Project `horizon` trading days of prices past the end of `series`.
///
/// Weekends consume calendar days without emitting a point; the loop keeps
/// walking the calendar until exactly `horizon` trading-day predictions
/// exist. A zero horizon yields empty prediction and date lists.
///
/// # Errors
///
/// Returns [`ForecastError::InsufficientHistory`] when the series holds
/// fewer than two closes — the mean change would be undefined and the
/// division would otherwise poison every downstream value with NaN.
pub fn project(
    series: &BarSeries,
    horizon: usize,
    entropy: &mut Entropy,
) -> Result<ForecastResult, ForecastError> {
    if series.bars.len() < 2 {
        return Err(ForecastError::InsufficientHistory {
            len: series.bars.len(),
        });
    }

    let closes = series.closes();
    let mean_change = mean_daily_change(&closes);

    let last = &series.bars[series.bars.len() - 1];
    let mut running = last.close;
    let mut date = last.date;
    let mut dates: Vec<IsoDate> = Vec::with_capacity(horizon);
    let mut predictions: Vec<f64> = Vec::with_capacity(horizon);

    while predictions.len() < horizon {
        date = date.next_day()?;
        if !date.is_trading_day() {
            continue;
        }

        let noise = 1.0 + entropy.uniform(-1.0, 1.0) * VOLATILITY;
        running *= 1.0 + mean_change * noise;
        predictions.push(round2(running));
        dates.push(date);
    }

    let accuracy = round2(entropy.uniform(ACCURACY_LO, ACCURACY_HI));

    Ok(ForecastResult::new(
        series.symbol.clone(),
        dates,
        predictions,
        accuracy,
        series.bars.clone(),
    )?)
}

/// Mean day-over-day fractional change across the trailing window.
///
/// Callers guarantee at least two closes; closes are positive by domain
/// invariant, so each denominator is non-zero.
fn mean_daily_change(closes: &[f64]) -> f64 {
    let window = &closes[closes.len().saturating_sub(TRAILING_WINDOW)..];
    let total: f64 = window
        .windows(2)
        .map(|pair| (pair[1] - pair[0]) / pair[0])
        .sum();
    total / (window.len() - 1) as f64
}

#[cfg(test)]
mod tests {
    use crate::{DailyBar, Symbol};

    use super::*;

    fn series_from_closes(closes: &[f64]) -> BarSeries {
        let symbol = Symbol::parse("AAPL").expect("valid symbol");
        let mut date = IsoDate::parse("2024-05-01").expect("valid date");
        let mut bars = Vec::with_capacity(closes.len());
        for close in closes {
            while !date.is_trading_day() {
                date = date.next_day().expect("valid date range");
            }
            bars.push(
                DailyBar::new(date, *close, close + 1.0, close - 1.0, *close, 2_000_000)
                    .expect("valid bar"),
            );
            date = date.next_day().expect("valid date range");
        }
        BarSeries::new(symbol, bars).expect("ordered bars")
    }

    #[test]
    fn mean_change_matches_hand_computation() {
        // (2/100 - 1/102 + 2/101) / 3 ≈ 0.010365
        let mean = mean_daily_change(&[100.0, 102.0, 101.0, 103.0]);
        assert!((mean - 0.010365).abs() < 1e-4);
    }

    #[test]
    fn mean_change_uses_only_trailing_window() {
        // The leading 500s fall outside the 10-close window.
        let mut closes = vec![500.0, 500.0, 500.0];
        closes.extend(std::iter::repeat(100.0).take(TRAILING_WINDOW));
        assert!(mean_daily_change(&closes).abs() < 1e-12);
    }

    #[test]
    fn projection_emits_exactly_horizon_trading_days() {
        let series = series_from_closes(&[100.0, 102.0, 101.0, 103.0]);
        let mut entropy = Entropy::seeded(8);
        let result = project(&series, 7, &mut entropy).expect("forecast succeeds");

        assert_eq!(result.predictions.len(), 7);
        assert_eq!(result.dates.len(), 7);
        let last_history_date = series.bars[series.bars.len() - 1].date;
        for date in &result.dates {
            assert!(date.is_trading_day());
            assert!(*date > last_history_date);
        }
    }

    #[test]
    fn projection_stays_in_jitter_band() {
        let series = series_from_closes(&[100.0, 102.0, 101.0, 103.0]);
        let mean = mean_daily_change(&[100.0, 102.0, 101.0, 103.0]);
        let mut entropy = Entropy::seeded(21);
        let result = project(&series, 3, &mut entropy).expect("forecast succeeds");

        let mut lo = 103.0;
        let mut hi = 103.0;
        for (step, price) in result.predictions.iter().enumerate() {
            lo *= 1.0 + mean * (1.0 - VOLATILITY);
            hi *= 1.0 + mean * (1.0 + VOLATILITY);
            assert!(
                (lo - 0.01..=hi + 0.01).contains(price),
                "step {step}: {price} outside [{lo}, {hi}]"
            );
        }
    }

    #[test]
    fn insufficient_history_is_rejected() {
        let series = series_from_closes(&[100.0]);
        let mut entropy = Entropy::seeded(1);
        let err = project(&series, 5, &mut entropy).expect_err("must fail");
        assert!(matches!(err, ForecastError::InsufficientHistory { len: 1 }));
    }

    #[test]
    fn zero_horizon_yields_empty_forecast() {
        let series = series_from_closes(&[100.0, 101.0]);
        let mut entropy = Entropy::seeded(1);
        let result = project(&series, 0, &mut entropy).expect("forecast succeeds");
        assert!(result.is_empty());
        assert!((ACCURACY_LO..=ACCURACY_HI).contains(&result.accuracy));
    }

    #[test]
    fn seeded_projection_is_reproducible() {
        let series = series_from_closes(&[100.0, 102.0, 101.0, 103.0]);
        let mut a = Entropy::seeded(123);
        let mut b = Entropy::seeded(123);
        let first = project(&series, 10, &mut a).expect("forecast succeeds");
        let second = project(&series, 10, &mut b).expect("forecast succeeds");
        assert_eq!(first, second);
    }
}
