use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;

use ticksmith_core::export::{csv_filename, to_csv};
use ticksmith_core::share::{qr_image_url, share_text};
use ticksmith_core::{forecast, Entropy, ForecastResult, HistoryRequest, MarketData, Symbol};

use crate::cli::PredictArgs;
use crate::error::CliError;

use super::CommandResult;

/// Prediction horizon accepted at this boundary, in trading days.
const MIN_DAYS: usize = 1;
const MAX_DAYS: usize = 30;

#[derive(Debug, Serialize)]
struct PredictResponseData {
    forecast: ForecastResult,
    csv_filename: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    exported_to: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    share: Option<ShareData>,
}

#[derive(Debug, Serialize)]
struct ShareData {
    text: String,
    qr_url: String,
}

pub async fn run(
    args: &PredictArgs,
    feed: &dyn MarketData,
    seed: Option<u64>,
) -> Result<CommandResult, CliError> {
    if !(MIN_DAYS..=MAX_DAYS).contains(&args.days) {
        return Err(CliError::InvalidHorizon { value: args.days });
    }

    let symbol = Symbol::parse(&args.symbol)?;
    let series = feed
        .history(HistoryRequest::new(symbol.clone(), args.history_days))
        .await?;

    let mut entropy = match seed {
        Some(seed) => Entropy::seeded(seed),
        None => Entropy::random(),
    };
    let history_len = series.bars.len();
    let result = forecast::project(&series, args.days, &mut entropy)?;

    let filename = csv_filename(&symbol);
    let mut exported_to = None;
    let mut export_error = None;
    if let Some(target) = &args.export {
        let path = resolve_export_path(target, &filename);
        match write_csv(&path, &to_csv(&result)) {
            Ok(()) => {
                eprintln!("✓ Exported {} predictions to {}", result.len(), path.display());
                exported_to = Some(path);
            }
            Err(error) => {
                export_error = Some(
                    ticksmith_core::EnvelopeError::new(
                        "export.io",
                        format!("failed to write {}: {error}", path.display()),
                    )?
                    .with_retryable(false),
                );
            }
        }
    }

    let share = args.qr.then(|| {
        let text = share_text(&result);
        let qr_url = qr_image_url(&text);
        ShareData { text, qr_url }
    });

    let data = serde_json::to_value(PredictResponseData {
        forecast: result,
        csv_filename: filename,
        exported_to,
        share,
    })?;

    let mut command_result = CommandResult::ok(data);
    if history_len < forecast::TRAILING_WINDOW {
        command_result = command_result.with_warning(format!(
            "history has {history_len} closes; the trailing mean normally uses {}",
            forecast::TRAILING_WINDOW
        ));
    }
    if let Some(error) = export_error {
        command_result = command_result.with_error(error);
    }
    Ok(command_result)
}

/// A directory target (or the bare flag) gets the canonical download name.
fn resolve_export_path(target: &Path, filename: &str) -> PathBuf {
    if target.is_dir() {
        target.join(filename)
    } else {
        target.to_path_buf()
    }
}

fn write_csv(path: &Path, csv: &str) -> std::io::Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    writer.write_all(csv.as_bytes())?;
    writer.flush()
}
