//! Indicator framework for the simulated chart pipeline.

pub mod indicator;
pub mod sma;

pub use indicator::{Indicator, IndicatorConfig, IndicatorOutput, PriceSource};
pub use sma::{
    with_moving_averages, MaPair, MaPairConfig, Sma, SmaConfig, MA_LONG_PERIOD, MA_SHORT_PERIOD,
};
