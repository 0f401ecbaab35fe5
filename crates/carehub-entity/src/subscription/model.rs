//! Push subscription entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A registered push-notification delivery target for a portal user.
///
/// Read-only from the core's perspective; rows are created and removed by
/// the portal apps when devices register or sign out.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct PushSubscription {
    /// Unique subscription identifier.
    pub id: Uuid,
    /// The portal user owning the device.
    pub user_id: Uuid,
    /// Provider device token addressing the device.
    pub device_token: String,
    /// Device platform (e.g. "android", "ios", "web").
    pub platform: Option<String>,
    /// When the subscription was registered.
    pub created_at: DateTime<Utc>,
}
