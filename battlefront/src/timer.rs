//! Wall-clock match timing. The timer is polled once per frame; nothing is pushed to
//! the session when time passes.
use std::{
    cell::Cell,
    fmt,
    str::FromStr,
    time::{Duration, Instant},
};

use thiserror::Error;

/// Source of monotonic time, measured from an arbitrary fixed origin.
pub trait Clock {
    fn now(&self) -> Duration;
}

/// [`Clock`] backed by [`Instant`], measured from when the clock was created.
#[derive(Debug, Copy, Clone)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

/// [`Clock`] that only moves when told to. Used for scripted play and tests.
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<Duration>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Move the clock forward by `by`.
    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        self.now.get()
    }
}

/// Pausable stopwatch for a single match.
#[derive(Debug, Clone, Default)]
pub struct MatchTimer {
    /// Time accumulated by previous running periods.
    banked: Duration,
    /// Clock reading when the current running period began, if running.
    since: Option<Duration>,
}

impl MatchTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start or resume the timer. Does nothing if it is already running.
    pub fn start(&mut self, now: Duration) {
        if self.since.is_none() {
            self.since = Some(now);
        }
    }

    /// Stop the timer, keeping the time accumulated so far.
    pub fn pause(&mut self, now: Duration) {
        if let Some(since) = self.since.take() {
            self.banked += now.checked_sub(since).unwrap_or_default();
        }
    }

    /// Stop the timer and discard all accumulated time.
    pub fn reset(&mut self) {
        self.banked = Duration::default();
        self.since = None;
    }

    pub fn is_running(&self) -> bool {
        self.since.is_some()
    }

    /// Total running time as of `now`.
    pub fn elapsed(&self, now: Duration) -> Duration {
        match self.since {
            Some(since) => self.banked + now.checked_sub(since).unwrap_or_default(),
            None => self.banked,
        }
    }
}

/// Display helper for elapsed match time, shown as zero padded `MM:SS`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd)]
pub struct ElapsedTime(pub Duration);

impl ElapsedTime {
    /// Elapsed time truncated to whole seconds.
    pub fn whole_seconds(&self) -> u64 {
        self.0.as_secs()
    }
}

impl fmt::Display for ElapsedTime {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let secs = self.whole_seconds();
        write!(f, "{:02}:{:02}", secs / 60, secs % 60)
    }
}

/// Error returned when a clock label is not of the form `MM:SS`.
#[derive(Debug, Error, Clone, Eq, PartialEq)]
#[error("invalid elapsed time {0:?}, expected MM:SS")]
pub struct ParseElapsedError(String);

impl FromStr for ElapsedTime {
    type Err = ParseElapsedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseElapsedError(s.to_owned());
        let mut parts = s.trim().splitn(2, ':');
        let minutes: u64 = parts.next().and_then(|m| m.parse().ok()).ok_or_else(err)?;
        let seconds: u64 = parts.next().and_then(|s| s.parse().ok()).ok_or_else(err)?;
        if seconds >= 60 {
            return Err(err());
        }
        let total = minutes
            .checked_mul(60)
            .and_then(|secs| secs.checked_add(seconds))
            .ok_or_else(err)?;
        Ok(ElapsedTime(Duration::from_secs(total)))
    }
}
