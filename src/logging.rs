//! Logging setup built on the `tracing` ecosystem.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize a global tracing subscriber for applications embedding this
/// crate.
///
/// Respects `RUST_LOG` when set, otherwise falls back to the provided
/// default directive (e.g. `"info"` or `"rawgrab=debug"`). Should be called
/// once at startup; library code itself only emits events.
pub fn init_tracing(default_directive: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true))
        .with(filter)
        .init();
}
