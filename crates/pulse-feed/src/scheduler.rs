//! Refresh scheduler owning the published series.
//!
//! The scheduler is the only component that triggers generation. It runs a
//! repeating tokio task; on every tick and on every configuration change it
//! regenerates the series, pipes it through the moving-average pass, derives
//! headline metrics and fans the triple out to all subscribers. Dropping the
//! handle (or calling [`FeedScheduler::shutdown`]) stops the task; nothing is
//! published afterwards.

use std::sync::Arc;
use std::time::Duration;

use pulse_core::{validate_series, Candle, ChartConfig, HeadlineMetrics};
use pulse_indicators::with_moving_averages;
use tokio::sync::mpsc;
use tokio::time::MissedTickBehavior;

use crate::clock::{Clock, SystemClock};
use crate::generator::{SeriesGenerator, DEFAULT_SEED_PRICE, SERIES_LENGTH};
use crate::noise::{NoiseSource, ThreadNoise};

/// Period between automatic refreshes.
pub const REFRESH_PERIOD: Duration = Duration::from_secs(10);

/// How the walk is seeded on each refresh.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReseedPolicy {
    /// Restart from the configured seed price every refresh. Matches the
    /// dashboard's reference behavior; the chart visibly jumps each period.
    #[default]
    Restart,
    /// Continue the walk from the previous series' last close.
    CarryForward,
}

/// Scheduler tuning knobs.
#[derive(Debug, Clone)]
pub struct FeedOptions {
    pub period: Duration,
    pub seed_price: f64,
    pub series_length: usize,
    pub reseed: ReseedPolicy,
}

impl Default for FeedOptions {
    fn default() -> Self {
        Self {
            period: REFRESH_PERIOD,
            seed_price: DEFAULT_SEED_PRICE,
            series_length: SERIES_LENGTH,
            reseed: ReseedPolicy::default(),
        }
    }
}

/// One published refresh: a consistent (series, metrics, config) triple.
///
/// The series snapshot is shared and immutable; replacement across refreshes
/// is wholesale, never in-place.
#[derive(Debug, Clone)]
pub struct FeedUpdate {
    pub series: Arc<[Candle]>,
    pub metrics: HeadlineMetrics,
    pub config: ChartConfig,
}

/// Internal commands for the scheduler task.
enum FeedCommand {
    Subscribe(mpsc::UnboundedSender<FeedUpdate>),
    SetConfig(ChartConfig),
    Refresh,
    Shutdown,
}

/// Handle to a running refresh scheduler.
pub struct FeedScheduler {
    command_tx: mpsc::UnboundedSender<FeedCommand>,
}

impl FeedScheduler {
    /// Start a scheduler with the production noise source and wall clock.
    ///
    /// The first refresh is published immediately, then once per period.
    pub fn start(config: ChartConfig, options: FeedOptions) -> Self {
        Self::start_with(config, options, ThreadNoise, SystemClock)
    }

    /// Start a scheduler with explicit noise and clock sources.
    pub fn start_with<N, C>(config: ChartConfig, options: FeedOptions, noise: N, clock: C) -> Self
    where
        N: NoiseSource + Send + 'static,
        C: Clock + Send + 'static,
    {
        let (command_tx, command_rx) = mpsc::unbounded_channel();
        let generator = SeriesGenerator::new(noise, clock);

        tokio::spawn(run_feed(config, options, generator, command_rx));

        Self { command_tx }
    }

    /// Register a subscriber.
    ///
    /// The current snapshot, if one exists, is delivered right away so late
    /// subscribers do not wait out a full period.
    pub fn subscribe(&self) -> mpsc::UnboundedReceiver<FeedUpdate> {
        let (tx, rx) = mpsc::unbounded_channel();
        let _ = self.command_tx.send(FeedCommand::Subscribe(tx));
        rx
    }

    /// Switch asset and/or timeframe.
    ///
    /// A changed configuration regenerates and publishes immediately instead
    /// of waiting for the next tick; an identical one is a no-op.
    pub fn set_config(&self, config: ChartConfig) {
        let _ = self.command_tx.send(FeedCommand::SetConfig(config));
    }

    /// Force a refresh outside the regular cadence.
    pub fn refresh(&self) {
        let _ = self.command_tx.send(FeedCommand::Refresh);
    }

    /// Stop the scheduler task. Idempotent.
    pub fn shutdown(&self) {
        let _ = self.command_tx.send(FeedCommand::Shutdown);
    }

    /// Whether the scheduler task is still alive.
    pub fn is_running(&self) -> bool {
        !self.command_tx.is_closed()
    }
}

/// Scheduler task body.
///
/// Exits on `Shutdown` or when every handle is gone (command channel
/// closed), dropping all subscriber senders with it.
async fn run_feed<N, C>(
    mut config: ChartConfig,
    options: FeedOptions,
    mut generator: SeriesGenerator<N, C>,
    mut command_rx: mpsc::UnboundedReceiver<FeedCommand>,
) where
    N: NoiseSource + Send,
    C: Clock + Send,
{
    let mut interval = tokio::time::interval(options.period);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

    let mut subscribers: Vec<mpsc::UnboundedSender<FeedUpdate>> = Vec::new();
    let mut last: Option<FeedUpdate> = None;

    log::info!(
        "feed started: {} {} every {:?}",
        config.asset.label(),
        config.timeframe.label(),
        options.period
    );

    loop {
        tokio::select! {
            // The first tick completes immediately, publishing the initial series.
            _ = interval.tick() => {
                refresh_now(&mut generator, config, &options, &mut subscribers, &mut last);
            }

            cmd = command_rx.recv() => match cmd {
                Some(FeedCommand::Subscribe(tx)) => {
                    if let Some(update) = &last {
                        let _ = tx.send(update.clone());
                    }
                    subscribers.push(tx);
                }
                Some(FeedCommand::SetConfig(new_config)) => {
                    if new_config != config {
                        log::info!(
                            "config switched to {} {}",
                            new_config.asset.label(),
                            new_config.timeframe.label()
                        );
                        config = new_config;
                        refresh_now(&mut generator, config, &options, &mut subscribers, &mut last);
                    }
                }
                Some(FeedCommand::Refresh) => {
                    refresh_now(&mut generator, config, &options, &mut subscribers, &mut last);
                }
                Some(FeedCommand::Shutdown) | None => break,
            }
        }
    }

    log::info!("feed stopped: {}", config.asset.label());
}

/// Generate, aggregate, derive metrics and publish to all subscribers.
fn refresh_now<N, C>(
    generator: &mut SeriesGenerator<N, C>,
    config: ChartConfig,
    options: &FeedOptions,
    subscribers: &mut Vec<mpsc::UnboundedSender<FeedUpdate>>,
    last: &mut Option<FeedUpdate>,
) where
    N: NoiseSource,
    C: Clock,
{
    let seed_price = match options.reseed {
        ReseedPolicy::Restart => options.seed_price,
        ReseedPolicy::CarryForward => last
            .as_ref()
            .and_then(|u| u.series.last())
            .map(|c| c.close)
            .unwrap_or(options.seed_price),
    };

    let series = with_moving_averages(&generator.generate(seed_price, options.series_length));
    debug_assert!(validate_series(&series));

    let metrics = HeadlineMetrics::from_series(&series);
    let update = FeedUpdate {
        series: series.into(),
        metrics,
        config,
    };

    // A gone subscriber is dropped; it never stops the feed.
    subscribers.retain(|tx| tx.send(update.clone()).is_ok());
    log::debug!(
        "published {} candles, last close {:.2} ({} subscribers)",
        update.series.len(),
        update.metrics.current_price,
        subscribers.len()
    );

    *last = Some(update);
}
