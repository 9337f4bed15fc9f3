//! Validation utilities for generated candle data.

use crate::candle::Candle;

/// Validate a candle has reasonable values.
///
/// Checks that every price is finite, the wick spans the body
/// (`high >= max(open, close)` and `low <= min(open, close)`) and the
/// volume is non-negative.
pub fn validate_candle(candle: &Candle) -> bool {
    candle.open.is_finite()
        && candle.high.is_finite()
        && candle.low.is_finite()
        && candle.close.is_finite()
        && candle.volume.is_finite()
        && candle.high >= candle.open.max(candle.close)
        && candle.low <= candle.open.min(candle.close)
        && candle.volume >= 0.0
}

/// Validate a whole series (oldest candle first).
///
/// Every candle must validate individually and the walk must be continuous:
/// each candle opens exactly where the previous one closed.
pub fn validate_series(series: &[Candle]) -> bool {
    if !series.iter().all(validate_candle) {
        return false;
    }

    series.windows(2).all(|w| w[1].open == w[0].close)
}
