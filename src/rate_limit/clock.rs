//! Time sources for the submission limiter and date-bound validation.

use chrono::{Days, Local, NaiveDate};
use std::sync::Mutex;
use std::time::{Duration, Instant};

/// Monotonic time source.
///
/// Abstracted so cooldowns can be tested with deterministic time.
pub trait Clock: Send + Sync {
    fn now(&self) -> Instant;

    /// Calendar date used to bound birth dates.
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Wall-clock time via [`Instant::now`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// A clock that only moves when told to.
#[derive(Debug)]
pub struct ManualClock {
    origin: Instant,
    origin_date: NaiveDate,
    elapsed: Mutex<Duration>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::starting_on(Local::now().date_naive())
    }

    /// A clock whose calendar starts on `date`.
    pub fn starting_on(date: NaiveDate) -> Self {
        Self {
            origin: Instant::now(),
            origin_date: date,
            elapsed: Mutex::new(Duration::ZERO),
        }
    }

    fn elapsed(&self) -> Duration {
        self.elapsed.lock().map(|e| *e).unwrap_or_default()
    }

    /// Move the clock forward by `by`.
    pub fn advance(&self, by: Duration) {
        if let Ok(mut elapsed) = self.elapsed.lock() {
            *elapsed += by;
        }
    }

    /// Set the time elapsed since the clock was created.
    pub fn set_elapsed(&self, to: Duration) {
        if let Ok(mut elapsed) = self.elapsed.lock() {
            *elapsed = to;
        }
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.origin + self.elapsed()
    }

    fn today(&self) -> NaiveDate {
        let days = self.elapsed().as_secs() / 86_400;
        self.origin_date
            .checked_add_days(Days::new(days))
            .unwrap_or(NaiveDate::MAX)
    }
}
