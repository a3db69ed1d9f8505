// src/logging.rs
//! Tracing initialization for the command-line front end.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Environment variable holding the log filter, e.g. `FRIENDREC_LOG=friendrec=debug`.
pub const LOG_ENV: &str = "FRIENDREC_LOG";

static INIT: Once = Once::new();

/// Installs a stderr subscriber. `FRIENDREC_LOG` wins over `verbose`.
///
/// Idempotent: later calls are no-ops.
pub fn init(verbose: bool) {
    INIT.call_once(|| {
        let fallback = if verbose { "friendrec=debug" } else { "friendrec=warn" };
        let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(fallback));

        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true),
            )
            .with(filter)
            .init();
    });
}
