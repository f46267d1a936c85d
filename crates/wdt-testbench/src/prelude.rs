//! Prelude for wdt-testbench.

pub use crate::bench::{TEST_CLOCK_HZ, TestBench, addr};
pub use crate::logging::init_tracing;
pub use wdt_core::prelude::*;
