//! Configuration loading from environment variables.

use std::env;
use std::time::Duration;

const DEFAULT_MANAGEMENT_URL: &str = "http://localhost:8090";
const DEFAULT_TOPIC: &str = "sandbox.messages";
const DEFAULT_VERIFY_TIMEOUT_MS: u64 = 10_000;

/// Runtime configuration for the Brokerdeck console.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the management API, without a trailing slash.
    pub management_url: String,
    /// Topic whose subscription filters the console edits.
    pub topic: String,
    /// Timeout applied to filter verification requests.
    pub verify_timeout: Duration,
}

/// Strip trailing slashes so endpoint paths can be joined with a plain `/`.
pub fn normalize_management_url(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_string()
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Returns
    /// A populated [`Config`] with defaults applied when env vars are missing
    /// or unparseable.
    pub fn from_env() -> Self {
        Self {
            management_url: env::var("BROKERDECK_MANAGEMENT_URL")
                .map(|url| normalize_management_url(&url))
                .ok()
                .filter(|url| !url.is_empty())
                .unwrap_or_else(|| DEFAULT_MANAGEMENT_URL.to_string()),
            topic: env::var("BROKERDECK_TOPIC")
                .ok()
                .map(|topic| topic.trim().to_string())
                .filter(|topic| !topic.is_empty())
                .unwrap_or_else(|| DEFAULT_TOPIC.to_string()),
            verify_timeout: Duration::from_millis(
                env::var("BROKERDECK_VERIFY_TIMEOUT_MS")
                    .ok()
                    .and_then(|ms| ms.trim().parse().ok())
                    .unwrap_or(DEFAULT_VERIFY_TIMEOUT_MS),
            ),
        }
    }
}
