//! Logging setup and command logging helpers

use std::time::Duration;

use creatorhub_domain::HubError;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Set to `json` for one JSON object per log line.
pub const LOG_FORMAT_ENV: &str = "CREATORHUB_LOG_FORMAT";

const DEFAULT_FILTER: &str = "info";

/// Install the global subscriber. `RUST_LOG` overrides the default `info`
/// filter. Calling it twice is harmless.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let json = std::env::var(LOG_FORMAT_ENV).is_ok_and(|format| format.eq_ignore_ascii_case("json"));

    let builder = tracing_subscriber::fmt().with_env_filter(filter).with_target(false);
    let result = if json { builder.json().try_init() } else { builder.try_init() };
    if result.is_err() {
        tracing::debug!("Tracing subscriber already installed");
    }
}

/// Log the outcome of a command execution with structured fields.
///
/// `command` should be a stable identifier (`"update"`, `"build"`).
#[inline]
pub fn log_command_execution(command: &str, elapsed: Duration, success: bool) {
    let duration_ms = elapsed.as_millis() as u64;

    if success {
        info!(command, duration_ms, "command_execution_success");
    } else {
        warn!(command, duration_ms, "command_execution_failure");
    }
}

/// Convert a `HubError` into a stable label suitable for logging.
#[inline]
pub fn error_label(error: &HubError) -> &'static str {
    match error {
        HubError::Config(_) => "config",
        HubError::Network(_) => "network",
        HubError::Auth(_) => "auth",
        HubError::NotFound(_) => "not_found",
        HubError::InvalidInput(_) => "invalid_input",
        HubError::Parse(_) => "parse",
        HubError::Io(_) => "io",
        HubError::Upstream(_) => "upstream",
        HubError::Internal(_) => "internal",
    }
}
