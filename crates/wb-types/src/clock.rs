use crate::temporal::Tick;

/// Capability trait for the host's monotonic game clock.
///
/// The core never reaches for a global tick counter; whoever drives a load
/// or decode passes a clock in. The host implements this over its own
/// counter; tests use [`FixedClock`].
pub trait GameClock {
    /// The current tick.
    fn current_tick(&self) -> Tick;
}

/// A clock pinned to one tick. For tests and offline tools.
#[derive(Clone, Copy, Debug, Default)]
pub struct FixedClock(pub Tick);

impl FixedClock {
    pub fn at(tick: i64) -> Self {
        Self(Tick(tick))
    }
}

impl GameClock for FixedClock {
    fn current_tick(&self) -> Tick {
        self.0
    }
}

impl<C: GameClock + ?Sized> GameClock for &C {
    fn current_tick(&self) -> Tick {
        (**self).current_tick()
    }
}
