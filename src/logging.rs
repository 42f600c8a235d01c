//! Diagnostic logging to stderr, enabled by `HR_LOG`.

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter (e.g. `HR_LOG=debug`).
pub const LOG_ENV: &str = "HR_LOG";

/// Install a stderr subscriber if `HR_LOG` is set.
pub fn init() {
    let Ok(filter) = EnvFilter::try_from_env(LOG_ENV) else {
        return;
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
