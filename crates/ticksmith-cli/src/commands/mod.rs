mod history;
mod predict;
mod quote;
mod tickers;

use std::sync::Arc;
use std::time::Instant;

use serde_json::Value;

use ticksmith_core::{Envelope, EnvelopeError, MarketData, SyntheticFeed, TickerCatalog};

use crate::cli::{Cli, Command};
use crate::error::CliError;
use crate::metadata::Metadata;

const SCHEMA_VERSION: &str = "v1.0.0";

pub struct CommandResult {
    pub data: Value,
    pub warnings: Vec<String>,
    pub errors: Vec<EnvelopeError>,
}

impl CommandResult {
    pub fn ok(data: Value) -> Self {
        Self {
            data,
            warnings: Vec::new(),
            errors: Vec::new(),
        }
    }

    pub fn with_warning(mut self, warning: impl Into<String>) -> Self {
        self.warnings.push(warning.into());
        self
    }

    pub fn with_error(mut self, error: EnvelopeError) -> Self {
        self.errors.push(error);
        self
    }
}

pub async fn run(cli: &Cli) -> Result<Envelope<Value>, CliError> {
    let started = Instant::now();

    let catalog = TickerCatalog::builtin();
    let feed: Arc<dyn MarketData> = match cli.seed {
        Some(seed) => Arc::new(SyntheticFeed::with_seed(catalog.clone(), seed)),
        None => Arc::new(SyntheticFeed::new(catalog.clone())),
    };

    let command_result = match &cli.command {
        Command::Quote(args) => {
            tracing::info!(symbols = args.symbols.len(), "running quote command");
            quote::run(args, &feed).await?
        }
        Command::History(args) => {
            tracing::info!(symbol = %args.symbol, days = args.days, "running history command");
            history::run(args, feed.as_ref()).await?
        }
        Command::Predict(args) => {
            tracing::info!(symbol = %args.symbol, days = args.days, "running predict command");
            predict::run(args, feed.as_ref(), cli.seed).await?
        }
        Command::Tickers => tickers::run(&catalog)?,
    };

    let CommandResult {
        data,
        warnings,
        errors,
    } = command_result;

    let mut metadata = Metadata::new(elapsed_ms(started));
    for warning in warnings {
        metadata.push_warning(warning);
    }

    let meta = metadata.into_envelope_meta(SCHEMA_VERSION)?;
    Envelope::with_errors(meta, data, errors).map_err(CliError::from)
}

fn elapsed_ms(started: Instant) -> u64 {
    started.elapsed().as_millis().min(u128::from(u64::MAX)) as u64
}
