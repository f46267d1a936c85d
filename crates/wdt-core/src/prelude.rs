//! Prelude for wdt-core.
//!
//! Re-exports the types most hosts and tests need.
//!
//! # Example
//!
//! ```rust
//! use wdt_core::prelude::*;
//!
//! let mut core = WatchdogCore::new();
//! core.write(RegisterAccess::new(Register::Enable, AccessWidth::Byte), 1);
//! assert!(StatusFlags::decode(core.status()).contains(StatusFlags::ENABLED));
//! ```

pub use crate::bus::{RegisterBus, WatchdogPeripheral};
pub use crate::config::{AddressLayout, DEFAULT_CLOCK_HZ, WatchdogConfig, WatchdogConfigBuilder};
pub use crate::error::{WdtError, WdtResult};
pub use crate::metrics::WatchdogMetrics;
pub use crate::register::{AccessWidth, Register, RegisterAccess, TAP_CODE};
pub use crate::state::{TickEffect, WatchdogState};
pub use crate::status::{StatusFlags, encode_status};
pub use crate::watchdog::{BusWrite, CycleInputs, WatchdogCore};
