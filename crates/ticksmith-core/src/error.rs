use thiserror::Error;

/// Validation and contract errors exposed by `ticksmith-core`.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValidationError {
    #[error("symbol cannot be empty")]
    EmptySymbol,
    #[error("symbol length {len} exceeds max {max}")]
    SymbolTooLong { len: usize, max: usize },
    #[error("symbol must start with an ASCII letter: '{ch}'")]
    SymbolInvalidStart { ch: char },
    #[error("symbol contains invalid character '{ch}' at index {index}")]
    SymbolInvalidChar { ch: char, index: usize },

    #[error("date must be formatted YYYY-MM-DD: '{value}'")]
    InvalidDate { value: String },
    #[error("date is outside the supported calendar range")]
    DateOutOfRange,
    #[error("timestamp must be RFC3339 UTC (suffix Z): '{value}'")]
    TimestampNotUtc { value: String },

    #[error("field '{field}' must be finite")]
    NonFiniteValue { field: &'static str },
    #[error("field '{field}' must be positive")]
    NonPositiveValue { field: &'static str },

    #[error("bar high must be >= low")]
    InvalidBarRange,
    #[error("bar open/close must be within high/low range")]
    InvalidBarBounds,
    #[error("bar date {date} falls on a weekend")]
    NonTradingDay { date: String },
    #[error("bar dates must be strictly ascending (violated at index {index})")]
    OutOfOrderBars { index: usize },

    #[error("quote change must equal price - previous_close at 2 decimals")]
    InconsistentQuoteChange,
    #[error("quote high/low must bracket price and open")]
    InvalidQuoteRange,

    #[error("prediction dates ({dates}) and prices ({prices}) must have equal length")]
    PredictionLengthMismatch { dates: usize, prices: usize },
    #[error("accuracy {value} outside the synthetic range [75, 90]")]
    AccuracyOutOfRange { value: f64 },

    #[error("request_id must be at least 8 characters")]
    InvalidRequestId,
    #[error("schema_version must match vMAJOR.MINOR.PATCH: '{value}'")]
    InvalidSchemaVersion { value: String },
    #[error("error code cannot be empty")]
    EmptyErrorCode,
    #[error("error message cannot be empty")]
    EmptyErrorMessage,
}

/// Errors produced by the forecast estimator.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ForecastError {
    /// The mean day-over-day change is undefined on fewer than two closes.
    #[error("insufficient history: forecast requires at least 2 closes, got {len}")]
    InsufficientHistory { len: usize },

    #[error(transparent)]
    Validation(#[from] ValidationError),
}
