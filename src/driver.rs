//! Host-side pacing: when to tick and which way to go.
//!
//! The simulation has no notion of time. Whatever drives it (a render loop, a
//! terminal) owns one of these and asks it every frame whether a tick is due.

use super::Direction;

use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct Driver {
    interval: Duration,
    last_tick: Option<Instant>,

    heading: Direction,
    pending: Option<Direction>,
}

impl Driver {
    pub fn new(interval: Duration, heading: Direction) -> Self {
        Self {
            interval,
            last_tick: None,
            heading,
            pending: None,
        }
    }

    /// Records a key press. Only the latest press before a tick counts.
    pub fn press(&mut self, dir: Direction) {
        self.pending = Some(dir);
    }

    pub fn heading(&self) -> Direction {
        self.heading
    }

    /// Returns the direction to step in if a tick is due at `now`.
    ///
    /// The first poll always ticks. Without a new key press the snake keeps
    /// going the way it was.
    pub fn poll(&mut self, now: Instant) -> Option<Direction> {
        if let Some(last) = self.last_tick {
            if now.saturating_duration_since(last) < self.interval {
                return None;
            }
        }

        self.last_tick = Some(now);
        if let Some(dir) = self.pending.take() {
            self.heading = dir;
        }

        Some(self.heading)
    }

    /// How long until the next tick is due.
    pub fn until_next(&self, now: Instant) -> Duration {
        match self.last_tick {
            Some(last) => self.interval.checked_sub(now.saturating_duration_since(last)).unwrap_or_default(),
            None => Duration::from_secs(0),
        }
    }

    /// Forgets timing and input, e.g. when a new game starts.
    pub fn reset(&mut self, heading: Direction) {
        self.last_tick = None;
        self.heading = heading;
        self.pending = None;
    }
}
