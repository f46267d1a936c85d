//! Tracing setup for bench runs.

use tracing_subscriber::EnvFilter;

/// Default filter when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "wdt_core=debug,wdt_testbench=debug";

/// Install a test-writer subscriber honouring `RUST_LOG`.
///
/// Safe to call from every test; returns `false` if a global subscriber
/// was already installed.
pub fn init_tracing() -> bool {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_err| EnvFilter::new(DEFAULT_FILTER));

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init()
        .is_ok();

    if installed {
        tracing::debug!(filter = DEFAULT_FILTER, "Test bench tracing initialized");
    }
    installed
}
