//! Synthetic OHLCV series generator.

use chrono::Duration;
use pulse_core::Candle;

use crate::clock::Clock;
use crate::noise::NoiseSource;

/// Price the random walk restarts from when no close is carried forward.
pub const DEFAULT_SEED_PRICE: f64 = 43_000.0;

/// Number of candles in a generated series.
pub const SERIES_LENGTH: usize = 31;

/// Generates a fixed-length synthetic series emulating a random walk.
///
/// Each candle opens where the previous one closed; the close moves by a
/// uniform draw in `[-250, +250]`, wicks extend up to 200 beyond the body
/// and volume lands in `[500_000, 1_500_000]`. Candles are labeled with
/// wall-clock times one hour apart, newest last.
pub struct SeriesGenerator<N, C> {
    noise: N,
    clock: C,
}

impl<N: NoiseSource, C: Clock> SeriesGenerator<N, C> {
    pub fn new(noise: N, clock: C) -> Self {
        Self { noise, clock }
    }

    /// Produce `length` candles, oldest first, walking from `seed_price`.
    ///
    /// Returns a fresh series; no shared state is touched.
    pub fn generate(&mut self, seed_price: f64, length: usize) -> Vec<Candle> {
        let now = self.clock.now();
        let mut base_price = seed_price;
        let mut series = Vec::with_capacity(length);

        for i in 0..length {
            let change = (self.noise.unit() - 0.5) * 500.0;
            let open = base_price;
            let close = base_price + change;
            let high = open.max(close) + self.noise.unit() * 200.0;
            let low = open.min(close) - self.noise.unit() * 200.0;
            let volume = self.noise.unit() * 1_000_000.0 + 500_000.0;

            let hours_back = (length - 1 - i) as i64;
            let time = (now - Duration::hours(hours_back)).format("%H:%M").to_string();

            series.push(Candle::new(time, open, high, low, close, volume));
            base_price = close;
        }

        series
    }
}
