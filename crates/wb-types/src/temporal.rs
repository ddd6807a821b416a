use std::fmt;
use std::ops::Sub;

use serde::{Deserialize, Serialize};

/// Host game-clock ticks per notional second.
pub const TICKS_PER_SECOND: i64 = 60;

/// A host game-clock tick.
///
/// Ticks are supplied by the host's monotonic counter and recorded on each
/// ledger entry as its last-update time. Waybill never reads a wall clock;
/// all ages are derived by subtracting ticks.
#[derive(
    Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Tick(pub i64);

impl Tick {
    /// The zero tick.
    pub const fn zero() -> Self {
        Self(0)
    }

    /// The raw signed 64-bit value written to disk.
    pub fn raw(&self) -> i64 {
        self.0
    }

    /// Whole seconds elapsed since `earlier`, at 60 ticks per second.
    ///
    /// Unclamped: negative when `earlier` is in the future of `self`.
    pub fn seconds_since(&self, earlier: Tick) -> i64 {
        (self.0 - earlier.0) / TICKS_PER_SECOND
    }
}

impl Sub for Tick {
    type Output = i64;

    fn sub(self, rhs: Tick) -> i64 {
        self.0 - rhs.0
    }
}

impl fmt::Debug for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tick({})", self.0)
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for Tick {
    fn from(raw: i64) -> Self {
        Self(raw)
    }
}
