// src/logging.rs
//! Tracing setup for the binary.

use std::sync::Once;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Environment variable holding the log filter, e.g. `COVDEDUP_LOG=covdedup_core=trace`.
pub const LOG_ENV: &str = "COVDEDUP_LOG";

static INIT: Once = Once::new();

/// Installs a stderr subscriber so stdout stays a clean profile.
///
/// `verbose` forces `debug`; otherwise `COVDEDUP_LOG` is honoured and falls
/// back to `warn`. Later calls are no-ops.
pub fn init(verbose: bool) {
    INIT.call_once(|| {
        let filter = if verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"))
        };

        let _ = tracing_subscriber::registry()
            .with(fmt::layer().with_writer(std::io::stderr).with_target(true))
            .with(filter)
            .try_init();
    });
}
