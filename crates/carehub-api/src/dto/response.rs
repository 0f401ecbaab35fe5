//! Response DTOs.

use serde::{Deserialize, Serialize};

/// Body of `GET /api/health`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always `"ok"` when the process is serving.
    pub status: String,
    /// Crate version.
    pub version: String,
}

/// Body of `GET /api/health/detailed`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetailedHealthResponse {
    /// Always `"ok"` when the process is serving.
    pub status: String,
    /// `"connected"` or `"unreachable"`.
    pub database: String,
}
