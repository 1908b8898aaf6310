use crate::rng::{round2, Entropy};
use crate::{Quote, Symbol, TickerCatalog, UtcDateTime, ValidationError};

const PRICE_LO: f64 = 50.0;
const PRICE_HI: f64 = 500.0;
/// Day change band, in percent.
const CHANGE_PCT: f64 = 5.0;
const OPEN_NOISE: f64 = 1.0;
const RANGE_NOISE: f64 = 5.0;
const VOLUME_LO: u64 = 1_000_000;
const VOLUME_HI: u64 = 11_000_000;
/// Market cap is price times a share count in this band.
const SHARES_LO: f64 = 10e9;
const SHARES_HI: f64 = 11e9;

/// Synthesize one internally consistent current-quote snapshot.
///
/// All derived fields are computed from already-rounded values, so
/// `price == previous_close + change` holds exactly at 2 decimals.
pub fn synthesize_quote(
    symbol: &Symbol,
    catalog: &TickerCatalog,
    entropy: &mut Entropy,
) -> Result<Quote, ValidationError> {
    let price = round2(entropy.uniform(PRICE_LO, PRICE_HI));
    let change_percent = round2(entropy.uniform(-CHANGE_PCT, CHANGE_PCT));
    let change = round2(price * change_percent / 100.0);
    let previous_close = round2(price - change);
    let open = round2(previous_close + entropy.uniform(-OPEN_NOISE, OPEN_NOISE));
    let high = round2(price.max(open) + entropy.uniform(0.0, RANGE_NOISE));
    let low = round2(price.min(open) - entropy.uniform(0.0, RANGE_NOISE));
    let volume = entropy.int_in(VOLUME_LO..VOLUME_HI);
    let market_cap = price * entropy.uniform(SHARES_LO, SHARES_HI);

    Quote::new(
        symbol.clone(),
        catalog.resolve_name(symbol),
        price,
        change,
        change_percent,
        open,
        high,
        low,
        previous_close,
        volume,
        Some(market_cap),
        UtcDateTime::now(),
    )
}
