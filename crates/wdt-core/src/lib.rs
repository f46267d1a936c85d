//! # wdt-core
//!
//! Cycle-level model of a memory-mapped watchdog timer peripheral.
//!
//! Software arms the watchdog, loads a countdown and must keep writing the tap
//! code before the countdown runs out. If it does not, the peripheral raises a
//! level-sensitive interrupt that stays up until a valid tap or a system reset.
//!
//! This crate provides:
//! - [`WatchdogCore`] - the synchronous state machine (tick, register write,
//!   reset) over an explicit [`WatchdogState`] record
//! - [`encode_status`] / [`StatusFlags`] - the STATUS register codec, kept
//!   separate from mutation
//! - [`RegisterBus`] / [`WatchdogPeripheral`] - byte-addressed bus access with
//!   8/16/32-bit transfers and lane-accurate partial writes
//! - [`WatchdogConfig`] - address layout and clock conversions
//!
//! ## Register Map
//!
//! | Index | Name      | Access | Semantics |
//! |-------|-----------|--------|-----------|
//! | 0     | ENABLE    | W      | nonzero enables, zero disables and stops the countdown |
//! | 1     | START     | W      | reloads and runs the countdown if COUNTDOWN is nonzero |
//! | 2     | COUNTDOWN | R/W    | reload value |
//! | 3     | TAP       | W      | `0xABCD` while running reloads and clears the timeout |
//! | 4     | STATUS    | R      | bit0 enabled, bit1 started, bit2 timeout, bit3 counting |
//!
//! ## Evaluation Order
//!
//! When a bus write and a clock edge coincide, reset wins; otherwise the tick
//! is evaluated first and the write is applied after it. See
//! [`WatchdogCore::cycle`].
//!
//! ## Example
//!
//! ```rust
//! use wdt_core::prelude::*;
//!
//! # fn main() -> Result<(), WdtError> {
//! let mut wdt = WatchdogPeripheral::with_default_config();
//!
//! wdt.write(2, AccessWidth::Word, 5)?;
//! wdt.write(1, AccessWidth::Word, 1)?;
//! for _ in 0..3 {
//!     wdt.tick();
//! }
//! wdt.write(3, AccessWidth::Word, TAP_CODE)?;
//! assert!(!wdt.interrupt_asserted());
//!
//! for _ in 0..5 {
//!     wdt.tick();
//! }
//! assert!(wdt.interrupt_asserted());
//! # Ok(())
//! # }
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic_in_result_fn,
    clippy::panic,
    missing_docs,
    missing_debug_implementations
)]
#![warn(clippy::pedantic)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod bus;
pub mod config;
pub mod error;
pub mod metrics;
pub mod prelude;
pub mod register;
pub mod state;
pub mod status;
pub mod watchdog;

pub use bus::{RegisterBus, WatchdogPeripheral};
pub use config::{AddressLayout, WatchdogConfig, WatchdogConfigBuilder};
pub use error::{WdtError, WdtResult};
pub use metrics::WatchdogMetrics;
pub use register::{AccessWidth, Register, RegisterAccess, TAP_CODE};
pub use state::{TickEffect, WatchdogState};
pub use status::{StatusFlags, encode_status};
pub use watchdog::{BusWrite, CycleInputs, WatchdogCore};
