//! Per-side countdown clocks.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::core::{Side, SideMap};

/// Two countdown clocks plus total elapsed time.
///
/// Clocks run on wall time supplied by the caller; they have nothing to do
/// with ply counting.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchClock {
    remaining: SideMap<Duration>,
    elapsed: Duration,
}

impl MatchClock {
    /// Both sides start with `budget`.
    #[must_use]
    pub fn new(budget: Duration) -> Self {
        Self {
            remaining: SideMap::with_value(budget),
            elapsed: Duration::ZERO,
        }
    }

    #[must_use]
    pub fn remaining(&self, side: Side) -> Duration {
        self.remaining[side]
    }

    /// Time remaining for both sides.
    #[must_use]
    pub fn remaining_all(&self) -> &SideMap<Duration> {
        &self.remaining
    }

    /// Wall time that has passed since the match started.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Run `side`'s clock for `delta`, stopping at zero.
    pub fn debit(&mut self, side: Side, delta: Duration) {
        self.remaining[side] = self.remaining[side].saturating_sub(delta);
        self.elapsed += delta;
    }

    /// Check if a side has run out of time.
    #[must_use]
    pub fn is_flagged(&self, side: Side) -> bool {
        self.remaining[side].is_zero()
    }
}

/// Render a duration as `m:ss`.
///
/// ```
/// use std::time::Duration;
/// use rune_rift::game::format_clock;
///
/// assert_eq!(format_clock(Duration::from_secs(600)), "10:00");
/// assert_eq!(format_clock(Duration::from_millis(65_900)), "1:05");
/// ```
#[must_use]
pub fn format_clock(duration: Duration) -> String {
    let secs = duration.as_secs();
    format!("{}:{:02}", secs / 60, secs % 60)
}
