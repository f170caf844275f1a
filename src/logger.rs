//! Diagnostic logging via tracing-subscriber.
//!
//! Logs go to stderr so they never mix with the chat transcript. The filter
//! comes from `MON_LOG` (e.g. `MON_LOG=debug`), defaulting to `warn`.

use anyhow::{Result, anyhow};
use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "MON_LOG";
const DEFAULT_LEVEL: &str = "warn";

fn build_filter(env_value: Option<&str>) -> Result<EnvFilter> {
    match env_value {
        Some(directives) if !directives.trim().is_empty() => EnvFilter::try_new(directives)
            .map_err(|e| anyhow!("Invalid {LOG_ENV} value '{directives}': {e}")),
        _ => Ok(EnvFilter::new(DEFAULT_LEVEL)),
    }
}

/// Initialise the global tracing subscriber. Call once at startup.
pub fn init() -> Result<()> {
    let env_value = std::env::var(LOG_ENV).ok();
    let filter = build_filter(env_value.as_deref())?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow!("Failed to set up logging: {e}"))
}
