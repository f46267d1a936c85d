//! Host-side test bench for the watchdog peripheral.
//!
//! Wraps any [`wdt_core::RegisterBus`] with the register-level API a SoC
//! test harness exposes: reset, sized register reads and writes, clocking
//! and interrupt sampling.
//!
//! ```rust
//! use wdt_testbench::prelude::*;
//!
//! # fn main() -> Result<(), WdtError> {
//! init_tracing();
//! let mut tb = TestBench::watchdog();
//! tb.reset();
//! tb.write_hword_reg(addr::COUNTDOWN, 100)?;
//! tb.write_byte_reg(addr::START, 1)?;
//! tb.clock_cycles(50);
//! tb.write_hword_reg(addr::TAP, 0xABCD)?;
//! tb.clock_cycles(99);
//! assert!(!tb.is_interrupt_asserted());
//! # Ok(())
//! # }
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    missing_debug_implementations
)]
#![warn(clippy::pedantic)]

pub mod bench;
pub mod logging;
pub mod prelude;

pub use bench::{TEST_CLOCK_HZ, TestBench, addr};
pub use logging::init_tracing;
