//! Pulse - console demo for the simulated trading feed.
//!
//! Starts the refresh scheduler, subscribes to it and prints every published
//! update together with a rolling stream of synthetic predictions and
//! execution events, until ctrl-c.

use std::time::Duration;

use anyhow::Result;
use pulse_config::Config;
use pulse_core::ChartConfig;
use pulse_feed::{
    EventLog, FeedOptions, FeedScheduler, FeedUpdate, ReseedPolicy, SignalFeed, SystemClock,
    ThreadNoise,
};

/// Cadence of the predictions feed in the reference dashboard.
const PREDICTION_PERIOD: Duration = Duration::from_secs(5);
/// Cadence of the execution console in the reference dashboard.
const EVENT_PERIOD: Duration = Duration::from_secs(15);

fn feed_options(config: &Config) -> FeedOptions {
    FeedOptions {
        period: Duration::from_millis(config.feed.refresh_ms),
        seed_price: config.feed.seed_price,
        series_length: config.feed.series_length,
        reseed: if config.feed.carry_last_close {
            ReseedPolicy::CarryForward
        } else {
            ReseedPolicy::Restart
        },
    }
}

fn print_update(update: &FeedUpdate) {
    let metrics = &update.metrics;
    let Some(last) = update.series.last() else {
        return;
    };

    println!(
        "{} {} | ${:.2} {}{:.2} ({}{:.2}%) | MA7 {:.2} MA25 {:.2} | vol {:.0}K",
        update.config.asset.label(),
        update.config.timeframe.label(),
        metrics.current_price,
        if metrics.price_change >= 0.0 { "+" } else { "" },
        metrics.price_change,
        if metrics.price_change_percent >= 0.0 { "+" } else { "" },
        metrics.price_change_percent,
        last.ma_short,
        last.ma_long,
        last.volume / 1000.0,
    );
}

async fn run() -> Result<()> {
    env_logger::init();

    let config = Config::load_default();
    let chart: ChartConfig = config.chart_config()?;

    let feed = FeedScheduler::start(chart, feed_options(&config));
    let mut updates = feed.subscribe();

    let mut signals = SignalFeed::new(ThreadNoise, SystemClock);
    let mut console = EventLog::default();
    let mut last_price = config.feed.seed_price;

    let mut prediction_interval = tokio::time::interval(PREDICTION_PERIOD);
    let mut event_interval = tokio::time::interval(EVENT_PERIOD);

    log::info!("pulse demo started, ctrl-c to stop");

    loop {
        tokio::select! {
            update = updates.recv() => {
                let Some(update) = update else { break };
                last_price = update.metrics.current_price;
                print_update(&update);
            }

            _ = prediction_interval.tick() => {
                let prediction = signals.next_prediction(chart.asset, chart.timeframe, last_price);
                println!(
                    "  [prediction] {} {} {} @ ${:.2} ({:.1}% confidence)",
                    prediction.timestamp,
                    prediction.asset.label(),
                    prediction.direction.label(),
                    prediction.entry_price,
                    prediction.confidence,
                );
            }

            _ = event_interval.tick() => {
                let event = signals.next_event(last_price);
                println!(
                    "  [console {:>2} deep] {} {:?}/{:?} {} - {}",
                    console.len() + 1,
                    event.timestamp,
                    event.kind,
                    event.status,
                    event.action,
                    event.details,
                );
                console.push(event);
            }

            _ = tokio::signal::ctrl_c() => break,
        }
    }

    feed.shutdown();
    log::info!("pulse demo stopped");
    Ok(())
}

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {e}");
    }
}
