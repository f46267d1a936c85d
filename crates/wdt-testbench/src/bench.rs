//! Register-level test bench.
//!
//! [`TestBench`] drives any [`RegisterBus`] the way a SoC test harness does:
//! reset, 8/16/32-bit register reads and writes, free-running clock cycles
//! and interrupt sampling. Register writes land between clock edges.

use std::num::NonZeroU32;
use std::time::Duration;

use wdt_core::{
    AccessWidth, AddressLayout, RegisterBus, WatchdogConfig, WatchdogPeripheral, WdtResult,
};

/// Clock used by the default bench: 10 MHz, a 100 ns period.
pub const TEST_CLOCK_HZ: NonZeroU32 = match NonZeroU32::new(10_000_000) {
    Some(hz) => hz,
    None => NonZeroU32::MIN,
};

/// Register addresses in the compact layout.
pub mod addr {
    /// Write nonzero to enable, zero to disable.
    pub const ENABLE: u32 = 0;
    /// Write to start the countdown (implicitly enables).
    pub const START: u32 = 1;
    /// Countdown reload value, 8/16/32-bit.
    pub const COUNTDOWN: u32 = 2;
    /// Write the tap code to reload the countdown and clear the interrupt.
    pub const TAP: u32 = 3;
    /// Read-only status bits.
    pub const STATUS: u32 = 4;
}

/// Test bench around a register-mapped peripheral.
///
/// # Example
///
/// ```rust
/// use wdt_testbench::prelude::*;
///
/// # fn main() -> Result<(), WdtError> {
/// let mut tb = TestBench::watchdog();
/// tb.reset();
/// tb.write_word_reg(addr::COUNTDOWN, 10)?;
/// tb.write_word_reg(addr::START, 1)?;
/// tb.clock_cycles(10);
/// assert!(tb.is_interrupt_asserted());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct TestBench<B: RegisterBus = WatchdogPeripheral> {
    bus: B,
    cycles_elapsed: u64,
}

impl TestBench<WatchdogPeripheral> {
    /// Bench around a watchdog with the compact layout and a 10 MHz clock.
    #[must_use]
    pub fn watchdog() -> Self {
        Self::new(WatchdogPeripheral::with_clock(AddressLayout::Compact, TEST_CLOCK_HZ))
    }

    /// Bench around a watchdog built from `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn with_config(config: WatchdogConfig) -> WdtResult<Self> {
        Ok(Self::new(WatchdogPeripheral::new(config)?))
    }
}

impl<B: RegisterBus> TestBench<B> {
    /// Wrap `bus`.
    pub fn new(bus: B) -> Self {
        Self {
            bus,
            cycles_elapsed: 0,
        }
    }

    /// The device under test.
    pub fn bus(&self) -> &B {
        &self.bus
    }

    /// Pulse the reset line.
    pub fn reset(&mut self) {
        self.bus.reset();
        tracing::debug!(cycle = self.cycles_elapsed, "Test bench reset");
    }

    /// Run `n` clock cycles with no bus traffic.
    pub fn clock_cycles(&mut self, n: u64) {
        for _ in 0..n {
            self.bus.tick();
        }
        self.cycles_elapsed = self.cycles_elapsed.saturating_add(n);
    }

    /// Run for `duration` of simulated time at the device clock.
    ///
    /// Returns the number of cycles run.
    pub fn clock_for(&mut self, duration: Duration) -> u64 {
        let cycles = self.bus.config().cycles_in(duration);
        let cycles = u64::try_from(cycles).unwrap_or(u64::MAX);
        self.clock_cycles(cycles);
        cycles
    }

    /// Cycles run since the bench was created.
    pub fn cycles_elapsed(&self) -> u64 {
        self.cycles_elapsed
    }

    /// Sample the interrupt line.
    pub fn is_interrupt_asserted(&self) -> bool {
        self.bus.interrupt_asserted()
    }

    /// Write a byte register.
    ///
    /// # Errors
    ///
    /// Returns an error if the address does not decode.
    pub fn write_byte_reg(&mut self, address: u32, value: u8) -> WdtResult<()> {
        self.bus.write(address, AccessWidth::Byte, u32::from(value))
    }

    /// Write a half-word register.
    ///
    /// # Errors
    ///
    /// Returns an error if the address does not decode.
    pub fn write_hword_reg(&mut self, address: u32, value: u16) -> WdtResult<()> {
        self.bus.write(address, AccessWidth::HalfWord, u32::from(value))
    }

    /// Write a word register.
    ///
    /// # Errors
    ///
    /// Returns an error if the address does not decode.
    pub fn write_word_reg(&mut self, address: u32, value: u32) -> WdtResult<()> {
        self.bus.write(address, AccessWidth::Word, value)
    }

    /// Read a byte register.
    ///
    /// # Errors
    ///
    /// Returns an error if the address does not decode.
    pub fn read_byte_reg(&self, address: u32) -> WdtResult<u8> {
        let [low, ..] = self.bus.read(address, AccessWidth::Byte)?.to_le_bytes();
        Ok(low)
    }

    /// Read a half-word register.
    ///
    /// # Errors
    ///
    /// Returns an error if the address does not decode.
    pub fn read_hword_reg(&self, address: u32) -> WdtResult<u16> {
        let [b0, b1, ..] = self.bus.read(address, AccessWidth::HalfWord)?.to_le_bytes();
        Ok(u16::from_le_bytes([b0, b1]))
    }

    /// Read a word register.
    ///
    /// # Errors
    ///
    /// Returns an error if the address does not decode.
    pub fn read_word_reg(&self, address: u32) -> WdtResult<u32> {
        self.bus.read(address, AccessWidth::Word)
    }
}
