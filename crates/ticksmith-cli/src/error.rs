use thiserror::Error;

use ticksmith_core::{FeedError, ForecastError, ValidationError};

/// CLI-level error categories mapped to exit codes.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Forecast(#[from] ForecastError),

    #[error(transparent)]
    Feed(#[from] FeedError),

    #[error("invalid horizon {value}: days to predict must be within [1, 30]")]
    InvalidHorizon { value: usize },

    #[error("command error: {0}")]
    Command(String),

    #[error("strict mode failed: warnings={warning_count}, errors={error_count}")]
    StrictModeViolation {
        warning_count: usize,
        error_count: usize,
    },

    #[error(transparent)]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CliError {
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Validation(_) => 2,
            Self::Forecast(_) => 2,
            Self::Feed(_) => 2,
            Self::InvalidHorizon { .. } => 2,
            Self::Command(_) => 2,
            Self::StrictModeViolation { .. } => 5,
            Self::Serialization(_) => 4,
            Self::Io(_) => 10,
        }
    }
}
