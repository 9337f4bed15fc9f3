//! Synthetic market-data feed: candle generation, refresh scheduling and
//! the dashboard's prediction/execution signal models.
//!
//! The pipeline is `SeriesGenerator` -> moving-average augmentation ->
//! `HeadlineMetrics`, driven by a `FeedScheduler` that republishes the
//! whole series on a fixed period and on every configuration change.

pub mod clock;
pub mod generator;
pub mod noise;
pub mod scheduler;
pub mod signals;

pub use clock::{Clock, FixedClock, SystemClock};
pub use generator::{SeriesGenerator, DEFAULT_SEED_PRICE, SERIES_LENGTH};
pub use noise::{ConstNoise, NoiseSource, SeededNoise, ThreadNoise};
pub use scheduler::{FeedOptions, FeedScheduler, FeedUpdate, ReseedPolicy, REFRESH_PERIOD};
pub use signals::{
    Direction, EventKind, EventLog, EventStatus, ExecutionEvent, Prediction, SignalFeed,
};
