use serde::{Deserialize, Serialize};

use crate::{IsoDate, Symbol, UtcDateTime, ValidationError};

/// Tolerance for the `change == price - previous_close` identity.
///
/// All three fields are rounded to 2 decimals independently, so the identity
/// holds to within half a cent plus float noise.
const QUOTE_IDENTITY_TOLERANCE: f64 = 0.0051;

const ACCURACY_MIN: f64 = 75.0;
const ACCURACY_MAX: f64 = 90.0;

/// One trading day of OHLCV data.
///
/// Bars exist only for weekdays; construction rejects weekend dates along
/// with the usual range checks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DailyBar {
    pub date: IsoDate,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: u64,
}

impl DailyBar {
    pub fn new(
        date: IsoDate,
        open: f64,
        high: f64,
        low: f64,
        close: f64,
        volume: u64,
    ) -> Result<Self, ValidationError> {
        validate_positive("open", open)?;
        validate_positive("high", high)?;
        validate_positive("low", low)?;
        validate_positive("close", close)?;

        if high < low {
            return Err(ValidationError::InvalidBarRange);
        }

        if open < low || open > high || close < low || close > high {
            return Err(ValidationError::InvalidBarBounds);
        }

        if !date.is_trading_day() {
            return Err(ValidationError::NonTradingDay {
                date: date.format_iso(),
            });
        }

        Ok(Self {
            date,
            open,
            high,
            low,
            close,
            volume,
        })
    }
}

/// Ordered daily bars for a symbol.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarSeries {
    pub symbol: Symbol,
    pub bars: Vec<DailyBar>,
}

impl BarSeries {
    /// Wrap bars for a symbol, rejecting out-of-order dates.
    pub fn new(symbol: Symbol, bars: Vec<DailyBar>) -> Result<Self, ValidationError> {
        for (index, pair) in bars.windows(2).enumerate() {
            if pair[1].date <= pair[0].date {
                return Err(ValidationError::OutOfOrderBars { index: index + 1 });
            }
        }

        Ok(Self { symbol, bars })
    }

    pub fn closes(&self) -> Vec<f64> {
        self.bars.iter().map(|bar| bar.close).collect()
    }
}

/// Current-quote snapshot for a ticker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    pub symbol: Symbol,
    pub name: String,
    pub price: f64,
    pub change: f64,
    pub change_percent: f64,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub previous_close: f64,
    pub volume: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub market_cap: Option<f64>,
    pub as_of: UtcDateTime,
}

impl Quote {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        symbol: Symbol,
        name: impl Into<String>,
        price: f64,
        change: f64,
        change_percent: f64,
        open: f64,
        high: f64,
        low: f64,
        previous_close: f64,
        volume: u64,
        market_cap: Option<f64>,
        as_of: UtcDateTime,
    ) -> Result<Self, ValidationError> {
        validate_positive("price", price)?;
        validate_positive("open", open)?;
        validate_positive("high", high)?;
        validate_positive("low", low)?;
        validate_positive("previous_close", previous_close)?;
        validate_finite("change", change)?;
        validate_finite("change_percent", change_percent)?;
        if let Some(market_cap) = market_cap {
            validate_positive("market_cap", market_cap)?;
        }

        if (previous_close + change - price).abs() > QUOTE_IDENTITY_TOLERANCE {
            return Err(ValidationError::InconsistentQuoteChange);
        }

        if high < price.max(open) || low > price.min(open) {
            return Err(ValidationError::InvalidQuoteRange);
        }

        Ok(Self {
            symbol,
            name: name.into(),
            price,
            change,
            change_percent,
            open,
            high,
            low,
            previous_close,
            volume,
            market_cap,
            as_of,
        })
    }
}

/// Projected prices with matching future trading-day dates.
///
/// `accuracy` is a synthetic score in [75, 90] with no statistical backing;
/// it is carried because the original product presents one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastResult {
    pub symbol: Symbol,
    pub dates: Vec<IsoDate>,
    pub predictions: Vec<f64>,
    pub accuracy: f64,
    pub history: Vec<DailyBar>,
}

impl ForecastResult {
    pub fn new(
        symbol: Symbol,
        dates: Vec<IsoDate>,
        predictions: Vec<f64>,
        accuracy: f64,
        history: Vec<DailyBar>,
    ) -> Result<Self, ValidationError> {
        if dates.len() != predictions.len() {
            return Err(ValidationError::PredictionLengthMismatch {
                dates: dates.len(),
                prices: predictions.len(),
            });
        }

        for price in &predictions {
            validate_positive("prediction", *price)?;
        }

        for (index, pair) in dates.windows(2).enumerate() {
            if pair[1] <= pair[0] {
                return Err(ValidationError::OutOfOrderBars { index: index + 1 });
            }
        }

        for date in &dates {
            if !date.is_trading_day() {
                return Err(ValidationError::NonTradingDay {
                    date: date.format_iso(),
                });
            }
        }

        if !(ACCURACY_MIN..=ACCURACY_MAX).contains(&accuracy) {
            return Err(ValidationError::AccuracyOutOfRange { value: accuracy });
        }

        Ok(Self {
            symbol,
            dates,
            predictions,
            accuracy,
            history,
        })
    }

    pub fn len(&self) -> usize {
        self.predictions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.predictions.is_empty()
    }
}

fn validate_finite(field: &'static str, value: f64) -> Result<(), ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::NonFiniteValue { field });
    }
    Ok(())
}

fn validate_positive(field: &'static str, value: f64) -> Result<(), ValidationError> {
    validate_finite(field, value)?;
    if value <= 0.0 {
        return Err(ValidationError::NonPositiveValue { field });
    }
    Ok(())
}
