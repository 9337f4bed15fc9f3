//! Candle data structure for synthetic OHLCV data.

/// One time bucket of simulated market activity.
///
/// `ma_short` and `ma_long` are trailing simple moving averages of `close`
/// (7 and 25 candles). They are zero until an aggregation pass fills them.
#[derive(Debug, Clone, PartialEq)]
pub struct Candle {
    /// Display label for the bucket, formatted `HH:MM`.
    pub time: String,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
    pub ma_short: f64,
    pub ma_long: f64,
}

impl Candle {
    pub fn new(
        time: impl Into<String>,
        open: f64,
        high: f64,
        low: f64,
        close: f64,
        volume: f64,
    ) -> Self {
        Self {
            time: time.into(),
            open,
            high,
            low,
            close,
            volume,
            ma_short: 0.0,
            ma_long: 0.0,
        }
    }

    /// Whether the candle closed at or above its open.
    pub fn is_bullish(&self) -> bool {
        self.close >= self.open
    }
}
