//! Forced end of a match once the difficulty's time limit has run out.
use std::time::Duration;

use crate::difficulty::Difficulty;

/// Result of checking elapsed match time against the difficulty limit.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Verdict {
    /// The match may continue; `remaining` whole seconds are left.
    Running { remaining: Duration },
    /// The time limit has been reached.
    Expired,
}

impl Verdict {
    pub fn expired(&self) -> bool {
        *self == Verdict::Expired
    }
}

/// Compare elapsed match time to the limit for `difficulty`. Comparison is done on
/// whole seconds with `>=`, so a frame that skips over the exact limit second still
/// expires the match.
pub fn check(difficulty: Difficulty, elapsed: Duration) -> Verdict {
    let limit = difficulty.time_limit().as_secs();
    let elapsed = elapsed.as_secs();
    if elapsed >= limit {
        Verdict::Expired
    } else {
        Verdict::Running {
            remaining: Duration::from_secs(limit - elapsed),
        }
    }
}
