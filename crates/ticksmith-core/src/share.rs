//! Shareable forecast summary and QR image URL.
//!
//! The QR code itself is rendered by an external image-generation endpoint;
//! this module only builds the payload text and the URL. Nothing here
//! performs network I/O.

use crate::ForecastResult;

const QR_ENDPOINT: &str = "https://api.qrserver.com/v1/create-qr-code/";
const QR_SIZE: &str = "200x200";

/// Plain-text summary encoded into the QR code.
pub fn share_text(result: &ForecastResult) -> String {
    let predictions = result
        .predictions
        .iter()
        .map(f64::to_string)
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "Stock: {}, Predictions: {}, Accuracy: {}%",
        result.symbol, predictions, result.accuracy
    )
}

/// URL of the external QR image for a payload text.
pub fn qr_image_url(payload: &str) -> String {
    format!(
        "{QR_ENDPOINT}?data={}&size={QR_SIZE}",
        urlencoding::encode(payload)
    )
}
