//! In-app notification entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// An in-app notification shown in the portal UI.
///
/// The core writes these for super-admin fan-outs (storage-upgrade
/// requests); the portal apps own reading and dismissal.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Notification {
    /// Unique notification identifier.
    pub id: Uuid,
    /// The recipient user.
    pub user_id: Uuid,
    /// Notification category (e.g. "storage_request").
    pub category: String,
    /// Notification title.
    pub title: String,
    /// Notification body text.
    pub message: String,
    /// Additional structured data (JSON).
    pub payload: Option<serde_json::Value>,
    /// Whether the user has read this notification.
    pub is_read: bool,
    /// When the notification was read.
    pub read_at: Option<DateTime<Utc>>,
    /// When the notification was created.
    pub created_at: DateTime<Utc>,
}
