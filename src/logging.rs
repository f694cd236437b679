//! Tracing subscriber setup for the binary.

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter; `RUST_LOG` is the fallback.
pub const LOG_ENV: &str = "BARSHEET_LOG";

/// Installs a stderr `fmt` subscriber. Calling it twice is harmless.
pub fn init() {
    let filter = std::env::var(LOG_ENV)
        .ok()
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .or_else(|| EnvFilter::try_from_default_env().ok())
        .unwrap_or_else(|| EnvFilter::new("warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
