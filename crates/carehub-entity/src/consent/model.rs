//! Patient consent entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A patient's revocable authorization for one partner to write their data
/// (LGPD compliance requirement).
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct PatientConsent {
    /// Unique consent identifier.
    pub id: Uuid,
    /// The patient granting consent.
    pub patient_id: Uuid,
    /// The partner the consent applies to.
    pub partner_id: Uuid,
    /// Whether consent was affirmatively given.
    pub consent_given: bool,
    /// When consent was granted.
    pub granted_at: DateTime<Utc>,
    /// When consent was revoked, if ever. A revoked consent is as good as
    /// no consent.
    pub revoked_at: Option<DateTime<Utc>>,
}

impl PatientConsent {
    /// Whether this consent currently authorizes writes.
    pub fn is_effective(&self) -> bool {
        self.consent_given && self.revoked_at.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn consent(given: bool, revoked: bool) -> PatientConsent {
        PatientConsent {
            id: Uuid::new_v4(),
            patient_id: Uuid::new_v4(),
            partner_id: Uuid::new_v4(),
            consent_given: given,
            granted_at: Utc::now(),
            revoked_at: revoked.then(Utc::now),
        }
    }

    #[test]
    fn affirmative_unrevoked_is_effective() {
        assert!(consent(true, false).is_effective());
    }

    #[test]
    fn negative_consent_is_not_effective() {
        assert!(!consent(false, false).is_effective());
    }

    #[test]
    fn revocation_wins_over_affirmation() {
        assert!(!consent(true, true).is_effective());
    }
}
