//! Diagnostic logging setup

use tracing_subscriber::{EnvFilter, fmt};

/// Environment variable holding the log filter, e.g. `LS2_LOG=debug`.
pub const LOG_ENV: &str = "LS2_LOG";

/// Install a stderr subscriber. Defaults to `warn` so normal runs stay quiet.
pub fn init_logging() {
    let env_filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .try_init();
}
