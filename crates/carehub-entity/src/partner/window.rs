//! Per-partner rate-limit window.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// The sliding request counter for one partner.
///
/// One row per partner; the window restarts whenever it is older than the
/// configured width. Maintained by a single atomic upsert statement.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct RateLimitWindow {
    /// The partner this window belongs to.
    pub partner_id: Uuid,
    /// When the current window opened.
    pub window_start: DateTime<Utc>,
    /// Requests counted in the current window, this request included.
    pub request_count: i32,
}
