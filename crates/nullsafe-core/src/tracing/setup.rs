//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Environment variable holding the log filter directives.
pub const LOG_ENV_VAR: &str = "NULLSAFE_LOG";

/// Initialize the tracing/logging system.
///
/// Reads `NULLSAFE_LOG` for per-module log levels, e.g.
/// `NULLSAFE_LOG=nullsafe_codegen::parsers=debug,nullsafe_codegen=info`.
///
/// Falls back to `nullsafe=info` if `NULLSAFE_LOG` is not set or is invalid.
/// Safe to call more than once; only the first call installs a subscriber,
/// and an already-installed global subscriber is left in place.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
            .unwrap_or_else(|_| EnvFilter::new("nullsafe=info"));

        let _ = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .with(filter)
            .try_init();
    });
}
