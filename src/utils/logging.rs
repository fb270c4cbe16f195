//! Logging utilities
//!
//! Shared logging setup and helpers. Skills own stdout for the protocol,
//! so every subscriber here writes to stderr.

use crate::config::LoggingConfig;
use tracing::debug;

/// Maximum number of characters of an upstream body kept in logs
pub const MAX_LOGGED_BODY: usize = 200;

/// Initialize the global tracing subscriber
///
/// Safe to call more than once; later calls are ignored.
pub fn init_logging(config: &LoggingConfig) {
    let result = if config.format == "json" {
        // JSON format logs (harness collects stderr)
        tracing_subscriber::fmt()
            .with_env_filter(config.level.as_str())
            .with_writer(std::io::stderr)
            .json()
            .with_current_span(true)
            .with_span_list(false)
            .try_init()
    } else {
        // Human readable format (local runs)
        tracing_subscriber::fmt()
            .with_env_filter(config.level.as_str())
            .with_writer(std::io::stderr)
            .with_target(false)
            .with_thread_ids(false)
            .with_file(false)
            .with_line_number(false)
            .try_init()
    };

    if result.is_ok() {
        debug!("Logging system initialized");
    }
}

/// Truncate a string with a note about original length
pub fn truncate_content(s: &str, max_len: usize) -> String {
    if s.chars().count() > max_len {
        let kept: String = s.chars().take(max_len).collect();
        format!("{}... ({} chars truncated)", kept, s.chars().count() - max_len)
    } else {
        s.to_string()
    }
}

/// Mask a credential for logging, keeping only its length
pub fn mask_secret(secret: &str) -> String {
    format!("<redacted:{} chars>", secret.chars().count())
}
