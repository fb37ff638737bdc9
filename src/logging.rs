//! Diagnostic logging setup
//!
//! The library only emits `tracing` events; binaries decide whether anything
//! listens to them.

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call multiple times. Nothing is installed unless `RUST_LOG` is set,
/// e.g. `RUST_LOG=shell_scanner=trace`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Scanning is silent by default; without RUST_LOG no subscriber exists.
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_writer(std::io::stderr).with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}
