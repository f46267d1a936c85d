//! Configuration for the bus adapter and clock conversions.

use core::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{WdtError, WdtResult};

/// Default peripheral clock: the 64 MHz system clock of the host SoC.
pub const DEFAULT_CLOCK_HZ: u32 = 64_000_000;

/// How byte addresses on the bus map onto the register file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AddressLayout {
    /// Byte address N selects register N; every access hits the low lane.
    #[default]
    Compact,
    /// Register N occupies the 32-bit word at byte address `N * 4`; the low
    /// two address bits select the byte lane.
    WordAligned,
}

impl AddressLayout {
    /// Size of the decoded address window in bytes.
    #[must_use]
    pub fn window_bytes(self) -> u32 {
        match self {
            Self::Compact => crate::register::REGISTER_COUNT,
            Self::WordAligned => crate::register::REGISTER_COUNT.saturating_mul(4),
        }
    }

    /// Byte address of the first lane of `register`.
    #[must_use]
    pub fn address_of(self, register: crate::register::Register) -> u32 {
        match self {
            Self::Compact => register.index(),
            Self::WordAligned => register.index().saturating_mul(4),
        }
    }
}

/// Watchdog peripheral configuration.
///
/// Nothing in here changes the register semantics; it only controls how the
/// bus adapter decodes addresses and how wall-clock deadlines are turned into
/// cycle counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WatchdogConfig {
    /// Address decoding used by [`WatchdogPeripheral`](crate::WatchdogPeripheral).
    pub layout: AddressLayout,

    /// Frequency of the clock driving [`tick`](crate::WatchdogCore::tick), in Hz.
    ///
    /// Default: 64 MHz.
    pub clock_hz: u32,
}

impl WatchdogConfig {
    /// Create a configuration with the given layout and the default clock.
    #[must_use]
    pub fn new(layout: AddressLayout) -> Self {
        Self {
            layout,
            ..Self::default()
        }
    }

    /// Create a configuration builder.
    #[must_use]
    pub fn builder() -> WatchdogConfigBuilder {
        WatchdogConfigBuilder::default()
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if `clock_hz` is zero.
    pub fn validate(&self) -> WdtResult<()> {
        if self.clock_hz == 0 {
            return Err(WdtError::invalid_configuration(
                "clock_hz must be greater than 0",
            ));
        }
        Ok(())
    }

    /// Length of one clock cycle.
    #[must_use]
    pub fn cycle_period(&self) -> Duration {
        self.duration_of(1)
    }

    /// Number of whole cycles in `duration`, rounded down.
    #[must_use]
    pub fn cycles_in(&self, duration: Duration) -> u128 {
        duration
            .as_nanos()
            .saturating_mul(u128::from(self.clock_hz))
            / 1_000_000_000
    }

    /// COUNTDOWN value that expires after `duration`.
    ///
    /// # Errors
    ///
    /// Returns [`WdtError::CountdownOverflow`] if the cycle count does not fit
    /// in the 32-bit register.
    pub fn countdown_for(&self, duration: Duration) -> WdtResult<u32> {
        let cycles = self.cycles_in(duration);
        u32::try_from(cycles)
            .ok()
            .ok_or(WdtError::CountdownOverflow { cycles })
    }

    /// Wall-clock time covered by `cycles` clock cycles.
    ///
    /// A zero clock yields [`Duration::ZERO`]; such a configuration does not
    /// pass [`validate`](Self::validate).
    #[must_use]
    pub fn duration_of(&self, cycles: u64) -> Duration {
        u128::from(cycles)
            .saturating_mul(1_000_000_000)
            .checked_div(u128::from(self.clock_hz))
            .map_or(Duration::ZERO, |nanos| {
                Duration::from_nanos(u64::try_from(nanos).unwrap_or(u64::MAX))
            })
    }
}

impl Default for WatchdogConfig {
    fn default() -> Self {
        Self {
            layout: AddressLayout::Compact,
            clock_hz: DEFAULT_CLOCK_HZ,
        }
    }
}

/// Builder for `WatchdogConfig`.
#[derive(Debug, Default)]
pub struct WatchdogConfigBuilder {
    config: WatchdogConfig,
}

impl WatchdogConfigBuilder {
    /// Set the address layout.
    #[must_use]
    pub fn layout(mut self, layout: AddressLayout) -> Self {
        self.config.layout = layout;
        self
    }

    /// Set the clock frequency in Hz.
    #[must_use]
    pub fn clock_hz(mut self, hz: u32) -> Self {
        self.config.clock_hz = hz;
        self
    }

    /// Build the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn build(self) -> WdtResult<WatchdogConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}
