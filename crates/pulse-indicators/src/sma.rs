//! Simple moving average indicator and the chart's MA augmentation pass.

use pulse_core::Candle;

use crate::indicator::{Indicator, IndicatorConfig, IndicatorOutput, PriceSource};

/// Window of the short moving average overlaid on the price chart.
pub const MA_SHORT_PERIOD: usize = 7;
/// Window of the long moving average overlaid on the price chart.
pub const MA_LONG_PERIOD: usize = 25;

/// SMA indicator configuration.
#[derive(Debug, Clone)]
pub struct SmaConfig {
    /// Window size in candles (default: 7).
    pub period: usize,
    /// Price source for calculation.
    pub price_source: PriceSource,
}

impl Default for SmaConfig {
    fn default() -> Self {
        Self {
            period: MA_SHORT_PERIOD,
            price_source: PriceSource::Close,
        }
    }
}

impl IndicatorConfig for SmaConfig {}

/// Simple moving average indicator.
///
/// The window is truncated at the start of the series: index `i` averages
/// over `min(i + 1, period)` samples, so the line ramps up over short
/// history instead of starting with a gap.
pub struct Sma {
    config: SmaConfig,
}

impl Indicator for Sma {
    type Config = SmaConfig;

    fn new(config: Self::Config) -> Self {
        Self { config }
    }

    fn calculate(&self, candles: &[Candle]) -> IndicatorOutput {
        let prices: Vec<f64> = candles
            .iter()
            .map(|c| self.config.price_source.extract(c))
            .collect();

        IndicatorOutput::Line(rolling_mean(&prices, self.config.period))
    }

    fn min_periods(&self) -> usize {
        // Truncated windows yield a value from the first candle on.
        1
    }

    fn is_overlay(&self) -> bool {
        true
    }

    fn name(&self) -> &str {
        "SMA"
    }
}

impl Sma {
    /// Get the configuration.
    pub fn config(&self) -> &SmaConfig {
        &self.config
    }
}

/// Trailing mean over a truncated window.
///
/// `out[i]` is the mean of `values[max(0, i + 1 - period)..=i]`, divided by
/// the actual sample count, never by the nominal window size.
pub fn rolling_mean(values: &[f64], period: usize) -> Vec<f64> {
    if period == 0 {
        return Vec::new();
    }

    let mut out = Vec::with_capacity(values.len());
    let mut sum = 0.0;

    for i in 0..values.len() {
        sum += values[i];
        if i >= period {
            sum -= values[i - period];
        }
        let count = (i + 1).min(period);
        out.push(sum / count as f64);
    }

    out
}

/// Moving-average pair overlay configuration.
#[derive(Debug, Clone)]
pub struct MaPairConfig {
    /// Short window (default: 7).
    pub short_period: usize,
    /// Long window (default: 25).
    pub long_period: usize,
    /// Price source for calculation.
    pub price_source: PriceSource,
}

impl Default for MaPairConfig {
    fn default() -> Self {
        Self {
            short_period: MA_SHORT_PERIOD,
            long_period: MA_LONG_PERIOD,
            price_source: PriceSource::Close,
        }
    }
}

impl IndicatorConfig for MaPairConfig {}

/// The short/long moving-average pair overlaid on the price chart.
pub struct MaPair {
    config: MaPairConfig,
}

impl Indicator for MaPair {
    type Config = MaPairConfig;

    fn new(config: Self::Config) -> Self {
        Self { config }
    }

    fn calculate(&self, candles: &[Candle]) -> IndicatorOutput {
        let prices: Vec<f64> = candles
            .iter()
            .map(|c| self.config.price_source.extract(c))
            .collect();

        IndicatorOutput::MultiLine(vec![
            (
                format!("MA {}", self.config.short_period),
                rolling_mean(&prices, self.config.short_period),
            ),
            (
                format!("MA {}", self.config.long_period),
                rolling_mean(&prices, self.config.long_period),
            ),
        ])
    }

    fn min_periods(&self) -> usize {
        1
    }

    fn is_overlay(&self) -> bool {
        true
    }

    fn name(&self) -> &str {
        "MA Pair"
    }
}

/// Returns a new series with `ma_short` and `ma_long` filled in.
///
/// Pure with respect to its input: prices are untouched, only the MA slots
/// change, so applying the pass twice yields identical output.
pub fn with_moving_averages(candles: &[Candle]) -> Vec<Candle> {
    let closes: Vec<f64> = candles.iter().map(|c| c.close).collect();
    let short = rolling_mean(&closes, MA_SHORT_PERIOD);
    let long = rolling_mean(&closes, MA_LONG_PERIOD);

    candles
        .iter()
        .zip(short.into_iter().zip(long))
        .map(|(candle, (ma_short, ma_long))| {
            let mut candle = candle.clone();
            candle.ma_short = ma_short;
            candle.ma_long = ma_long;
            candle
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_candles(closes: &[f64]) -> Vec<Candle> {
        closes
            .iter()
            .enumerate()
            .map(|(i, &close)| {
                Candle::new(format!("{:02}:00", i), close, close + 1.0, close - 1.0, close, 100.0)
            })
            .collect()
    }

    fn mean(values: &[f64]) -> f64 {
        values.iter().sum::<f64>() / values.len() as f64
    }

    #[test]
    fn test_rolling_mean_ramp_up() {
        let values: Vec<f64> = (1..=10).map(|v| v as f64).collect();
        let out = rolling_mean(&values, 7);

        // Before the window fills, divide by the actual count, not 7.
        for i in 0..6 {
            assert_eq!(out[i], mean(&values[..=i]), "index {i}");
        }
    }

    #[test]
    fn test_rolling_mean_stabilized() {
        let values: Vec<f64> = (1..=20).map(|v| v as f64).collect();
        let out = rolling_mean(&values, 7);

        // From index 6 on, exactly the trailing 7 samples.
        for i in 6..values.len() {
            assert!((out[i] - mean(&values[i - 6..=i])).abs() < 1e-9, "index {i}");
        }
    }

    #[test]
    fn test_rolling_mean_constant_input() {
        let values = vec![43000.0; 31];
        let out = rolling_mean(&values, 25);
        assert!(out.iter().all(|&v| v == 43000.0));
    }

    #[test]
    fn test_with_moving_averages_fills_both_windows() {
        let closes: Vec<f64> = (0..31).map(|i| 100.0 + i as f64).collect();
        let candles = make_candles(&closes);
        let augmented = with_moving_averages(&candles);

        assert_eq!(augmented.len(), candles.len());
        assert_eq!(augmented[0].ma_short, closes[0]);
        assert_eq!(augmented[0].ma_long, closes[0]);
        assert!((augmented[30].ma_short - mean(&closes[24..=30])).abs() < 1e-9);
        assert!((augmented[30].ma_long - mean(&closes[6..=30])).abs() < 1e-9);
    }

    #[test]
    fn test_with_moving_averages_preserves_prices() {
        let candles = make_candles(&[10.0, 20.0, 30.0]);
        let augmented = with_moving_averages(&candles);

        for (before, after) in candles.iter().zip(&augmented) {
            assert_eq!(before.open, after.open);
            assert_eq!(before.high, after.high);
            assert_eq!(before.low, after.low);
            assert_eq!(before.close, after.close);
            assert_eq!(before.volume, after.volume);
            assert_eq!(before.time, after.time);
        }
    }

    #[test]
    fn test_with_moving_averages_idempotent() {
        let candles = make_candles(&[5.0, 7.0, 6.0, 9.0, 8.0, 10.0, 11.0, 12.0]);
        let once = with_moving_averages(&candles);
        let twice = with_moving_averages(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_rolling_mean_zero_period() {
        assert!(rolling_mean(&[1.0, 2.0], 0).is_empty());
    }

    #[test]
    fn test_ma_pair_lines_match_augmentation() {
        let closes: Vec<f64> = (0..31).map(|i| 200.0 + (i as f64) * 3.0).collect();
        let candles = make_candles(&closes);
        let pair = MaPair::new(MaPairConfig::default());
        let augmented = with_moving_averages(&candles);

        match pair.calculate(&candles) {
            IndicatorOutput::MultiLine(lines) => {
                assert_eq!(lines[0].0, "MA 7");
                assert_eq!(lines[1].0, "MA 25");
                for (i, candle) in augmented.iter().enumerate() {
                    assert_eq!(lines[0].1[i], candle.ma_short);
                    assert_eq!(lines[1].1[i], candle.ma_long);
                }
            }
            other => panic!("expected two lines, got {other:?}"),
        }
    }

    #[test]
    fn test_sma_indicator_line() {
        let candles = make_candles(&[2.0, 4.0, 6.0]);
        let sma = Sma::new(SmaConfig {
            period: 2,
            ..Default::default()
        });

        match sma.calculate(&candles) {
            IndicatorOutput::Line(line) => assert_eq!(line, vec![2.0, 3.0, 5.0]),
            other => panic!("expected a single line, got {other:?}"),
        }
        assert_eq!(sma.min_periods(), 1);
        assert!(sma.is_overlay());
    }
}
