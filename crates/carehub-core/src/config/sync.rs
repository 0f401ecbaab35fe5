//! Partner sync and rate-limit configuration.

use serde::{Deserialize, Serialize};

/// Settings for the partner ingestion gateway.
///
/// The rate limit applies to the medications route only: the window is a
/// per-partner sliding counter that resets once it is older than
/// `rate_limit_window_seconds`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyncConfig {
    /// Maximum requests per partner per window.
    #[serde(default = "default_rate_limit_max_requests")]
    pub rate_limit_max_requests: i32,
    /// Window width in seconds.
    #[serde(default = "default_rate_limit_window_seconds")]
    pub rate_limit_window_seconds: i64,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            rate_limit_max_requests: default_rate_limit_max_requests(),
            rate_limit_window_seconds: default_rate_limit_window_seconds(),
        }
    }
}

fn default_rate_limit_max_requests() -> i32 {
    100
}

fn default_rate_limit_window_seconds() -> i64 {
    60
}
