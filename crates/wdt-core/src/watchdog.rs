//! The watchdog state machine.
//!
//! [`WatchdogCore`] owns the [`WatchdogState`] record and is the only thing
//! that mutates it. There are exactly three inputs:
//!
//! - a register write ([`WatchdogCore::write`]),
//! - a clock tick ([`WatchdogCore::tick`]),
//! - the system reset line ([`WatchdogCore::reset`]).
//!
//! Hosts that model a full clock cycle, where a bus write and the tick land on
//! the same edge, use [`WatchdogCore::cycle`]. It applies the inputs in one
//! fixed order:
//!
//! 1. reset, if asserted, and nothing else;
//! 2. otherwise the tick (decrement and expiry check);
//! 3. then the register write.
//!
//! A TAP that lands on the cycle where the countdown reaches zero therefore
//! sees the expiry and clears it again: the interrupt is low at the end of
//! that cycle and the countdown is reloaded.
//!
//! # State Machine
//!
//! ```text
//!            ENABLE!=0            START (configured != 0)
//! Disabled ────────────► Enabled ─────────────────────────► Running
//!    ▲                      │                                 │  │
//!    │       ENABLE=0       │        tick, remaining -> 0     │  │ TAP 0xABCD
//!    └──────────────────────┴──── Expired ◄───────────────────┘  │ (reload)
//!                                    │                           │
//!                                    └──── TAP 0xABCD ──────────►┘
//! ```
//!
//! `timeout_pending` is orthogonal to the diagram: it is raised on entry to
//! Expired and survives ENABLE=0 and START; only TAP and reset lower it.

use crate::metrics::WatchdogMetrics;
use crate::register::{Register, RegisterAccess, TAP_CODE};
use crate::state::{TickEffect, WatchdogState};
use crate::status::{StatusFlags, encode_status};

/// A register write as presented by the bus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BusWrite {
    /// Decoded target.
    pub access: RegisterAccess,
    /// Data bus value; bits outside the access width are ignored.
    pub value: u32,
}

impl BusWrite {
    /// Create a write of `value` through `access`.
    #[must_use]
    pub fn new(access: RegisterAccess, value: u32) -> Self {
        Self { access, value }
    }
}

/// Everything sampled on one rising clock edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CycleInputs {
    /// System reset line. Overrides every other input.
    pub reset: bool,
    /// Register write presented on this edge, if any.
    pub write: Option<BusWrite>,
}

impl CycleInputs {
    /// A cycle with no bus traffic and reset deasserted.
    #[must_use]
    pub fn idle() -> Self {
        Self::default()
    }

    /// A cycle carrying `write`.
    #[must_use]
    pub fn with_write(write: BusWrite) -> Self {
        Self {
            reset: false,
            write: Some(write),
        }
    }

    /// A cycle with reset asserted.
    #[must_use]
    pub fn reset() -> Self {
        Self {
            reset: true,
            write: None,
        }
    }
}

/// Synchronous watchdog timer core.
///
/// # Example
///
/// ```rust
/// use wdt_core::prelude::*;
///
/// let mut core = WatchdogCore::new();
/// core.write(RegisterAccess::new(Register::Countdown, AccessWidth::Word), 5);
/// core.write(RegisterAccess::new(Register::Start, AccessWidth::Word), 1);
/// assert_eq!(core.status(), 0b1011);
///
/// for _ in 0..5 {
///     core.tick();
/// }
/// assert!(core.interrupt_asserted());
/// ```
#[derive(Debug, Clone, Default)]
pub struct WatchdogCore {
    state: WatchdogState,
    metrics: WatchdogMetrics,
}

impl WatchdogCore {
    /// Create a core in the power-on state.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: WatchdogState::new(),
            metrics: WatchdogMetrics::new(),
        }
    }

    /// Current architectural state.
    #[must_use]
    pub fn state(&self) -> &WatchdogState {
        &self.state
    }

    /// Event counters.
    #[must_use]
    pub fn metrics(&self) -> WatchdogMetrics {
        self.metrics
    }

    /// Clear the event counters without touching the state.
    pub fn reset_metrics(&mut self) {
        self.metrics.reset();
    }

    /// Level of the interrupt output.
    #[must_use]
    pub fn interrupt_asserted(&self) -> bool {
        self.state.timeout_pending
    }

    /// Raw STATUS register value.
    #[must_use]
    pub fn status(&self) -> u32 {
        encode_status(&self.state)
    }

    /// STATUS register as flags.
    #[must_use]
    pub fn status_flags(&self) -> StatusFlags {
        StatusFlags::from_state(&self.state)
    }

    /// Drive the system reset line: return to the power-on state.
    pub fn reset(&mut self) {
        self.state = WatchdogState::new();
        self.metrics.record_reset();
        tracing::info!("Watchdog reset");
    }

    /// Evaluate one clock cycle of the countdown.
    pub fn tick(&mut self) -> TickEffect {
        self.metrics.record_cycle();

        if !self.state.started {
            return TickEffect::Idle;
        }

        if self.state.countdown_remaining == 0 {
            // Started with nothing left: already expired, hold the fault.
            self.raise_timeout();
            return TickEffect::HeldExpired;
        }

        self.state.countdown_remaining = self.state.countdown_remaining.saturating_sub(1);
        if self.state.countdown_remaining == 0 {
            self.raise_timeout();
            TickEffect::Expired
        } else {
            TickEffect::Counted
        }
    }

    /// Apply one rising clock edge: reset, else tick then write.
    pub fn cycle(&mut self, inputs: CycleInputs) -> TickEffect {
        if inputs.reset {
            self.reset();
            return TickEffect::Idle;
        }

        let effect = self.tick();
        if let Some(write) = inputs.write {
            self.write(write.access, write.value);
        }
        effect
    }

    /// Apply a register write.
    ///
    /// Writes never fail. Anything the register does not accept (a wrong
    /// tap code, START with no countdown configured, a write to STATUS) is
    /// dropped without a trace.
    pub fn write(&mut self, access: RegisterAccess, value: u32) {
        let data = access.write_data(value);
        match access.register {
            Register::Enable => self.write_enable(data != 0),
            Register::Start => self.start(),
            Register::Countdown => {
                let configured = access.merge(self.state.countdown_configured, value);
                self.state.countdown_configured = configured;
            }
            Register::Tap => self.tap(data),
            Register::Status => {}
        }
    }

    /// Read a register.
    ///
    /// Write-only registers read as zero.
    #[must_use]
    pub fn read(&self, access: RegisterAccess) -> u32 {
        match access.register {
            Register::Countdown => access.extract(self.state.countdown_configured),
            Register::Status => access.extract(self.status()),
            Register::Enable | Register::Start | Register::Tap => 0,
        }
    }

    fn write_enable(&mut self, enable: bool) {
        if enable {
            self.state.enabled = true;
            tracing::debug!("Watchdog enabled");
        } else {
            self.state.enabled = false;
            self.state.started = false;
            tracing::debug!(
                timeout_pending = self.state.timeout_pending,
                "Watchdog disabled"
            );
        }
    }

    fn start(&mut self) {
        if self.state.countdown_configured == 0 {
            return;
        }

        self.state.enabled = true;
        self.state.started = true;
        self.state.countdown_remaining = self.state.countdown_configured;
        self.metrics.record_start();
        tracing::debug!(
            countdown = self.state.countdown_configured,
            "Watchdog countdown started"
        );
    }

    fn tap(&mut self, data: u32) {
        if !(self.state.enabled && self.state.started) || data != TAP_CODE {
            return;
        }

        let cleared = self.state.timeout_pending;
        self.state.countdown_remaining = self.state.countdown_configured;
        self.state.timeout_pending = false;
        self.metrics.record_tap();
        tracing::debug!(
            countdown = self.state.countdown_configured,
            cleared_timeout = cleared,
            "Watchdog tapped"
        );
    }

    fn raise_timeout(&mut self) {
        if self.state.timeout_pending {
            return;
        }

        self.state.timeout_pending = true;
        self.metrics.record_expiry();
        tracing::warn!(
            countdown = self.state.countdown_configured,
            "Watchdog countdown expired, interrupt asserted"
        );
    }
}
