//! STATUS register encoding.
//!
//! STATUS is not stored anywhere; it is recomputed from [`WatchdogState`] on
//! every read. Keeping the packing here, away from the mutation logic, lets
//! hosts decode a raw read back into flags without touching the core.

use bitflags::bitflags;

use crate::state::WatchdogState;

bitflags! {
    /// Bits of the STATUS register.
    ///
    /// Bits 4..=31 are reserved and always read as zero.
    #[repr(transparent)]
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct StatusFlags: u32 {
        /// Watchdog is enabled.
        const ENABLED         = 0b0001;
        /// Countdown is running.
        const STARTED         = 0b0010;
        /// Timeout is pending; mirrors the interrupt line.
        const TIMEOUT_PENDING = 0b0100;
        /// Running and countdown not yet at zero.
        const COUNTER_ACTIVE  = 0b1000;

        /// Reserved bits, never set by the peripheral.
        const RESERVED        = 0xFFFF_FFF0;
    }
}

impl StatusFlags {
    /// Snapshot the flags for `state`.
    #[must_use]
    pub fn from_state(state: &WatchdogState) -> Self {
        let mut flags = Self::empty();
        flags.set(Self::ENABLED, state.enabled());
        flags.set(Self::STARTED, state.started());
        flags.set(Self::TIMEOUT_PENDING, state.timeout_pending());
        flags.set(Self::COUNTER_ACTIVE, state.counter_active());
        flags
    }

    /// Decode a raw STATUS read, discarding reserved bits.
    #[must_use]
    pub fn decode(raw: u32) -> Self {
        Self::from_bits_truncate(raw) - Self::RESERVED
    }

    /// Whether any reserved bit is set in `raw`.
    #[must_use]
    pub fn has_reserved_bits(raw: u32) -> bool {
        raw & Self::RESERVED.bits() != 0
    }
}

/// Pack `state` into the 32-bit STATUS register value.
#[must_use]
pub fn encode_status(state: &WatchdogState) -> u32 {
    StatusFlags::from_state(state).bits()
}
