//! Tracing initialization

use std::sync::Once;

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Environment variable holding the log filter, e.g. `LOCREPORT_LOG=locreport=debug`.
pub const LOG_ENV: &str = "LOCREPORT_LOG";

static INIT: Once = Once::new();

/// Install a stderr subscriber filtered by [`LOG_ENV`], defaulting to `warn`.
///
/// Stdout is left to the report. Calling this more than once is harmless.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

        let _ = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(false),
            )
            .with(filter)
            .try_init();
    });
}
