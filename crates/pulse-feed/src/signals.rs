//! Synthetic AI signal models: the predictions feed and the execution log.
//!
//! These back the dashboard's side panels. Like the candle series, everything
//! here is generated client-side; the `/feed/live` endpoint the dashboard
//! would call in production stays a stub.

use std::collections::VecDeque;

use pulse_core::{Asset, Timeframe};

use crate::clock::Clock;
use crate::noise::NoiseSource;

/// Trade direction of a prediction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Long,
    Short,
}

impl Direction {
    pub fn label(&self) -> &'static str {
        match self {
            Direction::Long => "LONG",
            Direction::Short => "SHORT",
        }
    }
}

/// One AI prediction card in the live feed.
#[derive(Debug, Clone, PartialEq)]
pub struct Prediction {
    pub id: u64,
    pub asset: Asset,
    pub direction: Direction,
    /// Model confidence in percent.
    pub confidence: f64,
    pub entry_price: f64,
    /// Display label, formatted `HH:MM:SS`.
    pub timestamp: String,
    pub timeframe: Timeframe,
}

/// Category of an execution-console event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    Entry,
    Exit,
    Analysis,
    Alert,
}

/// Outcome of an execution-console event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventStatus {
    Success,
    Pending,
    Failed,
}

/// One entry in the execution console.
#[derive(Debug, Clone, PartialEq)]
pub struct ExecutionEvent {
    pub id: u64,
    /// Display label, formatted `HH:MM:SS`.
    pub timestamp: String,
    pub kind: EventKind,
    pub status: EventStatus,
    pub asset: Asset,
    pub action: String,
    pub details: String,
    pub price: Option<f64>,
    pub pnl: Option<f64>,
}

/// Generates synthetic predictions and execution events.
pub struct SignalFeed<N, C> {
    noise: N,
    clock: C,
    next_id: u64,
}

impl<N: NoiseSource, C: Clock> SignalFeed<N, C> {
    pub fn new(noise: N, clock: C) -> Self {
        Self {
            noise,
            clock,
            next_id: 1,
        }
    }

    fn take_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Pick an element by a uniform draw.
    fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        let idx = (self.noise.unit() * items.len() as f64) as usize;
        &items[idx.min(items.len() - 1)]
    }

    /// Produce the next prediction around the given entry price.
    pub fn next_prediction(&mut self, asset: Asset, timeframe: Timeframe, price: f64) -> Prediction {
        let direction = if self.noise.unit() < 0.5 {
            Direction::Long
        } else {
            Direction::Short
        };

        Prediction {
            id: self.take_id(),
            asset,
            direction,
            confidence: 70.0 + self.noise.unit() * 29.0,
            entry_price: price,
            timestamp: self.clock.now().format("%H:%M:%S").to_string(),
            timeframe,
        }
    }

    /// Produce the next execution-console event around the given price.
    pub fn next_event(&mut self, price: f64) -> ExecutionEvent {
        let asset = *self.pick(Asset::all());
        let kind = *self.pick(&[
            EventKind::Entry,
            EventKind::Exit,
            EventKind::Analysis,
            EventKind::Alert,
        ]);
        let status = *self.pick(&[EventStatus::Success, EventStatus::Pending]);

        let (action, details, event_price, pnl) = match kind {
            EventKind::Entry => (
                "Entry Executed",
                "Position opened at simulated signal level",
                Some(price),
                None,
            ),
            EventKind::Exit => (
                "Target Reached",
                "Closed position at simulated profit target",
                Some(price),
                Some((self.noise.unit() - 0.5) * 500.0),
            ),
            EventKind::Analysis => (
                "Signal Analysis",
                "Monitoring indicator confluence, awaiting confirmation",
                None,
                None,
            ),
            EventKind::Alert => (
                "Entry Rejected",
                "Market conditions outside acceptable risk parameters",
                None,
                None,
            ),
        };

        ExecutionEvent {
            id: self.take_id(),
            timestamp: self.clock.now().format("%H:%M:%S").to_string(),
            kind,
            status,
            asset,
            action: action.to_string(),
            details: details.to_string(),
            price: event_price,
            pnl,
        }
    }
}

/// Bounded most-recent-first event log backing the execution console.
#[derive(Debug)]
pub struct EventLog {
    events: VecDeque<ExecutionEvent>,
    capacity: usize,
}

impl EventLog {
    /// Console depth of the reference dashboard.
    pub const DEFAULT_CAPACITY: usize = 10;

    pub fn new(capacity: usize) -> Self {
        Self {
            events: VecDeque::with_capacity(capacity.max(1)),
            capacity: capacity.max(1),
        }
    }

    /// Push a new event to the front, evicting the oldest past capacity.
    pub fn push(&mut self, event: ExecutionEvent) {
        self.events.push_front(event);
        while self.events.len() > self.capacity {
            self.events.pop_back();
        }
    }

    /// Events, newest first.
    pub fn iter(&self) -> impl Iterator<Item = &ExecutionEvent> {
        self.events.iter()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl Default for EventLog {
    fn default() -> Self {
        Self::new(Self::DEFAULT_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::noise::{ConstNoise, SeededNoise};
    use chrono::{Local, TimeZone};

    fn fixed_clock() -> FixedClock {
        FixedClock(Local.with_ymd_and_hms(2024, 3, 1, 9, 15, 30).unwrap())
    }

    #[test]
    fn test_prediction_fields() {
        let mut feed = SignalFeed::new(ConstNoise(0.25), fixed_clock());
        let prediction = feed.next_prediction(Asset::BtcUsdt, Timeframe::Min15, 43250.5);

        assert_eq!(prediction.id, 1);
        assert_eq!(prediction.direction, Direction::Long);
        assert_eq!(prediction.entry_price, 43250.5);
        assert_eq!(prediction.timestamp, "09:15:30");
        assert!((70.0..=99.0).contains(&prediction.confidence));
    }

    #[test]
    fn test_event_ids_are_sequential() {
        let mut feed = SignalFeed::new(SeededNoise::new(5), fixed_clock());
        let a = feed.next_event(100.0);
        let b = feed.next_event(100.0);
        assert_eq!(b.id, a.id + 1);
    }

    #[test]
    fn test_exit_events_carry_pnl() {
        let mut feed = SignalFeed::new(SeededNoise::new(6), fixed_clock());
        for _ in 0..64 {
            let event = feed.next_event(4500.0);
            match event.kind {
                EventKind::Exit => {
                    assert!(event.pnl.is_some());
                    assert_eq!(event.price, Some(4500.0));
                }
                EventKind::Entry => {
                    assert!(event.pnl.is_none());
                    assert_eq!(event.price, Some(4500.0));
                }
                EventKind::Analysis | EventKind::Alert => {
                    assert!(event.price.is_none());
                    assert!(event.pnl.is_none());
                }
            }
        }
    }

    #[test]
    fn test_event_log_evicts_oldest() {
        let mut feed = SignalFeed::new(SeededNoise::new(7), fixed_clock());
        let mut log = EventLog::new(3);

        for _ in 0..5 {
            log.push(feed.next_event(100.0));
        }

        assert_eq!(log.len(), 3);
        // Newest first: ids 5, 4, 3.
        let ids: Vec<u64> = log.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![5, 4, 3]);
    }
}
