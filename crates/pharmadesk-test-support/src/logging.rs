//! Tracing setup for tests.

use tracing_subscriber::EnvFilter;

/// Install a tracing subscriber for the current test binary.
///
/// Honours `RUST_LOG` and is safe to call from every test; repeat calls
/// are no-ops.
pub fn init() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
