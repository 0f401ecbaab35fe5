//! Partner entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// An external ERP integrator authorized to push clinical data.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Partner {
    /// Unique partner identifier.
    pub id: Uuid,
    /// Human-readable display name (hospital/ERP vendor).
    pub name: String,
    /// Opaque API key presented in the `x-api-key` header.
    #[serde(skip_serializing)]
    pub api_key: String,
    /// Whether the partner may currently sync. An inactive partner is
    /// rejected exactly like an unknown key.
    pub active: bool,
    /// When the partner was registered.
    pub created_at: DateTime<Utc>,
    /// When the partner was last updated.
    pub updated_at: DateTime<Utc>,
}
