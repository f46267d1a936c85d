//! Event counters for monitoring and diagnostics.
//!
//! Metrics live beside the architectural state, not inside it. They never
//! influence register reads or the interrupt line, and they survive a system
//! reset; clear them explicitly with [`WatchdogMetrics::reset`].

/// Counters for the events a host usually wants to see.
///
/// All counters saturate instead of wrapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WatchdogMetrics {
    /// Clock cycles evaluated since the last metrics reset.
    pub cycles: u64,
    /// START writes that actually started the countdown.
    pub start_count: u64,
    /// TAP writes that reloaded the countdown.
    pub tap_count: u64,
    /// Times the countdown ran out and raised the interrupt.
    pub expiry_count: u64,
    /// System resets observed.
    pub reset_count: u64,
}

impl WatchdogMetrics {
    /// Create a new metrics instance with all counters at zero.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cycles: 0,
            start_count: 0,
            tap_count: 0,
            expiry_count: 0,
            reset_count: 0,
        }
    }

    /// Record one evaluated clock cycle.
    pub fn record_cycle(&mut self) {
        self.cycles = self.cycles.saturating_add(1);
    }

    /// Record a successful START.
    pub fn record_start(&mut self) {
        self.start_count = self.start_count.saturating_add(1);
    }

    /// Record an accepted TAP.
    pub fn record_tap(&mut self) {
        self.tap_count = self.tap_count.saturating_add(1);
    }

    /// Record a countdown expiry.
    pub fn record_expiry(&mut self) {
        self.expiry_count = self.expiry_count.saturating_add(1);
    }

    /// Record a system reset.
    pub fn record_reset(&mut self) {
        self.reset_count = self.reset_count.saturating_add(1);
    }

    /// Clear every counter.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}
