//! Tracing setup for hosts and demos.
//!
//! Library code only emits `tracing` events. Binaries call [`init_tracing`]
//! once at startup; `RUST_LOG` overrides the default filter.

use tracing_subscriber::{EnvFilter, fmt::format::FmtSpan};

const DEFAULT_FILTER: &str = "error,slidekit_ui=info,slidekit_components=info";

/// Installs a global fmt subscriber.
///
/// Calling this more than once is harmless; later calls are ignored.
pub fn init_tracing() {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => match EnvFilter::try_new(DEFAULT_FILTER) {
            Ok(filter) => filter,
            Err(_) => EnvFilter::new("error"),
        },
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_span_events(FmtSpan::CLOSE)
        .try_init();
}
