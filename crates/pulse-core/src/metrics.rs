//! Headline metrics derived from the current series.

use crate::candle::Candle;

/// Latest price and its change versus the prior candle.
///
/// Derived on every refresh, never stored independently of the series it
/// came from.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct HeadlineMetrics {
    pub current_price: f64,
    pub price_change: f64,
    pub price_change_percent: f64,
}

impl HeadlineMetrics {
    /// Derives headline metrics from a series (oldest candle first).
    ///
    /// With fewer than two candles the change fields are zero; with an empty
    /// series everything is zero.
    pub fn from_series(series: &[Candle]) -> Self {
        let current_price = series.last().map(|c| c.close).unwrap_or(0.0);

        if series.len() < 2 {
            return Self {
                current_price,
                price_change: 0.0,
                price_change_percent: 0.0,
            };
        }

        let previous_close = series[series.len() - 2].close;
        let price_change = current_price - previous_close;
        let price_change_percent = price_change / previous_close * 100.0;

        Self {
            current_price,
            price_change,
            price_change_percent,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candle_with_close(close: f64) -> Candle {
        Candle::new("00:00", close, close, close, close, 0.0)
    }

    #[test]
    fn test_two_candle_series() {
        let series = vec![candle_with_close(100.0), candle_with_close(105.0)];
        let metrics = HeadlineMetrics::from_series(&series);

        assert_eq!(metrics.current_price, 105.0);
        assert_eq!(metrics.price_change, 5.0);
        assert_eq!(metrics.price_change_percent, 5.0);
    }

    #[test]
    fn test_single_candle_has_zero_change() {
        let series = vec![candle_with_close(43000.0)];
        let metrics = HeadlineMetrics::from_series(&series);

        assert_eq!(metrics.current_price, 43000.0);
        assert_eq!(metrics.price_change, 0.0);
        assert_eq!(metrics.price_change_percent, 0.0);
    }

    #[test]
    fn test_empty_series() {
        let metrics = HeadlineMetrics::from_series(&[]);
        assert_eq!(metrics, HeadlineMetrics::default());
    }

    #[test]
    fn test_negative_change() {
        let series = vec![candle_with_close(200.0), candle_with_close(190.0)];
        let metrics = HeadlineMetrics::from_series(&series);

        assert_eq!(metrics.price_change, -10.0);
        assert_eq!(metrics.price_change_percent, -5.0);
    }
}
