//! Core types for the pulse simulated-market pipeline.
//!
//! This crate provides fundamental data structures with no external dependencies:
//! - `Candle` - OHLCV candle data with moving-average slots
//! - `Asset` / `Timeframe` / `ChartConfig` - chart configuration enums
//! - `HeadlineMetrics` - latest price and change derived from a series

pub mod candle;
pub mod config;
pub mod metrics;
pub mod validation;

pub use candle::Candle;
pub use config::{Asset, ChartConfig, Timeframe};
pub use metrics::HeadlineMetrics;
pub use validation::{validate_candle, validate_series};
