//! Byte-addressed bus interface.
//!
//! [`RegisterBus`] is the seam a host (SoC model, test bench) programs against.
//! [`WatchdogPeripheral`] implements it by decoding bus addresses with the
//! configured [`AddressLayout`] and forwarding to a [`WatchdogCore`].

use core::num::NonZeroU32;

use crate::config::{AddressLayout, WatchdogConfig};
use crate::error::{WdtError, WdtResult};
use crate::register::{AccessWidth, Register, RegisterAccess};
use crate::watchdog::{BusWrite, CycleInputs, WatchdogCore};

/// A register-mapped peripheral with a clock, a reset line and an interrupt.
///
/// Reads and writes happen between clock edges unless submitted through
/// [`clock_with_write`](Self::clock_with_write), which lands the write on the
/// next edge together with the tick.
pub trait RegisterBus: Send {
    /// Read `width` bits at byte `address`.
    ///
    /// # Errors
    ///
    /// Returns an error if the address does not decode.
    fn read(&self, address: u32, width: AccessWidth) -> WdtResult<u32>;

    /// Write `value` with `width` at byte `address`.
    ///
    /// # Errors
    ///
    /// Returns an error if the address does not decode.
    fn write(&mut self, address: u32, width: AccessWidth, value: u32) -> WdtResult<()>;

    /// Advance one clock cycle with no bus traffic.
    fn tick(&mut self);

    /// Advance one clock cycle carrying a write on the same edge.
    ///
    /// # Errors
    ///
    /// Returns an error if the address does not decode; the cycle is not
    /// advanced in that case.
    fn clock_with_write(&mut self, address: u32, width: AccessWidth, value: u32)
    -> WdtResult<()>;

    /// Assert the system reset line for one cycle.
    fn reset(&mut self);

    /// Level of the interrupt output.
    fn interrupt_asserted(&self) -> bool;

    /// Address layout and clock of this peripheral.
    fn config(&self) -> &WatchdogConfig;
}

/// A [`WatchdogCore`] behind an address decoder.
///
/// # Example
///
/// ```rust
/// use wdt_core::prelude::*;
///
/// # fn main() -> Result<(), WdtError> {
/// let config = WatchdogConfig::builder()
///     .layout(AddressLayout::WordAligned)
///     .build()?;
/// let mut wdt = WatchdogPeripheral::new(config)?;
///
/// wdt.write(0x08, AccessWidth::Word, 100)?;
/// wdt.write(0x04, AccessWidth::Word, 1)?;
/// assert_eq!(wdt.read(0x10, AccessWidth::Word)?, 0b1011);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct WatchdogPeripheral {
    config: WatchdogConfig,
    core: WatchdogCore,
}

impl WatchdogPeripheral {
    /// Create a peripheral in the power-on state.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn new(config: WatchdogConfig) -> WdtResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            core: WatchdogCore::new(),
        })
    }

    /// Create a peripheral with the compact layout and the default clock.
    #[must_use]
    pub fn with_default_config() -> Self {
        Self {
            config: WatchdogConfig::default(),
            core: WatchdogCore::new(),
        }
    }

    /// Create a peripheral with `layout` clocked at `clock_hz`.
    ///
    /// A nonzero clock is the only thing validation checks, so this cannot fail.
    #[must_use]
    pub fn with_clock(layout: AddressLayout, clock_hz: NonZeroU32) -> Self {
        Self {
            config: WatchdogConfig {
                layout,
                clock_hz: clock_hz.get(),
            },
            core: WatchdogCore::new(),
        }
    }

    /// The wrapped core.
    #[must_use]
    pub fn core(&self) -> &WatchdogCore {
        &self.core
    }

    /// Decode a byte address into a register access.
    ///
    /// # Errors
    ///
    /// Returns [`WdtError::UnmappedAddress`] outside the register window and
    /// [`WdtError::MisalignedAccess`] for a word-aligned access that is not
    /// naturally aligned.
    pub fn decode(&self, address: u32, width: AccessWidth) -> WdtResult<RegisterAccess> {
        let layout = self.config.layout;
        if address >= layout.window_bytes() {
            return Err(WdtError::unmapped_address(address));
        }

        let (index, lane) = match layout {
            AddressLayout::Compact => (address, 0),
            AddressLayout::WordAligned => (address >> 2, address & 0b11),
        };
        let register =
            Register::from_index(index).ok_or(WdtError::unmapped_address(address))?;
        RegisterAccess::at_lane(register, width, lane)
            .ok_or(WdtError::misaligned_access(address, width))
    }
}

impl Default for WatchdogPeripheral {
    fn default() -> Self {
        Self::with_default_config()
    }
}

impl RegisterBus for WatchdogPeripheral {
    fn read(&self, address: u32, width: AccessWidth) -> WdtResult<u32> {
        let access = self.decode(address, width)?;
        let value = self.core.read(access);
        tracing::trace!(
            address,
            register = %access.register,
            width = %width,
            value,
            "Bus read"
        );
        Ok(value)
    }

    fn write(&mut self, address: u32, width: AccessWidth, value: u32) -> WdtResult<()> {
        let access = self.decode(address, width)?;
        tracing::trace!(
            address,
            register = %access.register,
            width = %width,
            value,
            "Bus write"
        );
        self.core.write(access, value);
        Ok(())
    }

    fn tick(&mut self) {
        self.core.tick();
    }

    fn clock_with_write(
        &mut self,
        address: u32,
        width: AccessWidth,
        value: u32,
    ) -> WdtResult<()> {
        let access = self.decode(address, width)?;
        tracing::trace!(
            address,
            register = %access.register,
            width = %width,
            value,
            "Bus write on clock edge"
        );
        self.core.cycle(CycleInputs::with_write(BusWrite::new(access, value)));
        Ok(())
    }

    fn reset(&mut self) {
        self.core.cycle(CycleInputs::reset());
    }

    fn interrupt_asserted(&self) -> bool {
        self.core.interrupt_asserted()
    }

    fn config(&self) -> &WatchdogConfig {
        &self.config
    }
}
