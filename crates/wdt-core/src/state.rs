//! Watchdog state record and tick outcome.

/// The complete architectural state of the watchdog.
///
/// Everything observable through the register map or the interrupt line is a
/// function of these five fields. The record starts zeroed at power-on and
/// returns to that value on every system reset.
///
/// Fields are only mutated by [`WatchdogCore`](crate::WatchdogCore); hosts read
/// them through the accessors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct WatchdogState {
    pub(crate) enabled: bool,
    pub(crate) started: bool,
    pub(crate) countdown_configured: u32,
    pub(crate) countdown_remaining: u32,
    pub(crate) timeout_pending: bool,
}

impl WatchdogState {
    /// The power-on / reset state.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            enabled: false,
            started: false,
            countdown_configured: 0,
            countdown_remaining: 0,
            timeout_pending: false,
        }
    }

    /// Whether the watchdog responds to START, TAP and the countdown.
    #[must_use]
    pub fn enabled(&self) -> bool {
        self.enabled
    }

    /// Whether the countdown is running.
    #[must_use]
    pub fn started(&self) -> bool {
        self.started
    }

    /// Reload value last written to COUNTDOWN.
    #[must_use]
    pub fn countdown_configured(&self) -> u32 {
        self.countdown_configured
    }

    /// Cycles left before expiry.
    #[must_use]
    pub fn countdown_remaining(&self) -> u32 {
        self.countdown_remaining
    }

    /// Sticky fault flag; drives the interrupt line.
    #[must_use]
    pub fn timeout_pending(&self) -> bool {
        self.timeout_pending
    }

    /// Running and not yet expired.
    #[must_use]
    pub fn counter_active(&self) -> bool {
        self.started && self.countdown_remaining > 0
    }

    /// Running with nothing left to count: the deadline has passed.
    #[must_use]
    pub fn expired(&self) -> bool {
        self.started && self.countdown_remaining == 0
    }
}

/// What a single clock tick did to the countdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickEffect {
    /// The counter was idle (not started).
    Idle,
    /// The counter decremented and is still above zero.
    Counted,
    /// The counter reached zero on this tick and raised the timeout.
    Expired,
    /// The counter was already at zero while started; the timeout is held.
    HeldExpired,
}

impl TickEffect {
    /// Whether this tick raised a new expiry.
    #[must_use]
    pub fn is_expiry(self) -> bool {
        matches!(self, Self::Expired)
    }
}
