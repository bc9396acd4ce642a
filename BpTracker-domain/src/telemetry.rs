//! Tracing setup for hosts and tests

use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    prelude::*,
    EnvFilter,
};

/// Install a global subscriber that honours `RUST_LOG`, falling back to
/// `default_filter` when it is unset or invalid.
///
/// Returns `false` when a global subscriber was already installed, which
/// makes it safe to call from every test.
pub fn init_tracing(default_filter: &str) -> bool {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(fmt::layer()
            .with_span_events(FmtSpan::CLOSE)
            .with_target(false))
        .with(env_filter)
        .try_init()
        .is_ok()
}
