//! Portal user entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::role::UserRole;

/// A portal account (patient, clinician, or administrator).
///
/// Authentication and profile management live outside this core; the core
/// reads users to resolve push subscriptions and super-admin recipients.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct PortalUser {
    /// Unique user identifier.
    pub id: Uuid,
    /// Email address.
    pub email: String,
    /// Human-readable display name.
    pub full_name: String,
    /// Portal role.
    pub role: UserRole,
    /// When the user was created.
    pub created_at: DateTime<Utc>,
}
