//! Portal user role enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Roles available in the portal.
///
/// The core only distinguishes super-admins (storage-request fan-out
/// recipients); the remaining roles exist for the portal's own views and
/// row-level permissions, which are managed outside this codebase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "user_role", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    /// A patient using the portal.
    Patient,
    /// A doctor with a clinical view.
    Doctor,
    /// Nursing staff.
    Nurse,
    /// A tenant administrator.
    Admin,
    /// A platform-wide administrator.
    SuperAdmin,
}

impl UserRole {
    /// Check if this role receives platform-level notifications.
    pub fn is_super_admin(&self) -> bool {
        matches!(self, Self::SuperAdmin)
    }

    /// Return the role as a snake_case string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Patient => "patient",
            Self::Doctor => "doctor",
            Self::Nurse => "nurse",
            Self::Admin => "admin",
            Self::SuperAdmin => "super_admin",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = carehub_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "patient" => Ok(Self::Patient),
            "doctor" => Ok(Self::Doctor),
            "nurse" => Ok(Self::Nurse),
            "admin" => Ok(Self::Admin),
            "super_admin" => Ok(Self::SuperAdmin),
            _ => Err(carehub_core::AppError::validation(format!(
                "Invalid user role: '{s}'. Expected one of: patient, doctor, nurse, admin, super_admin"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        assert_eq!("patient".parse::<UserRole>().unwrap(), UserRole::Patient);
        assert_eq!(
            "SUPER_ADMIN".parse::<UserRole>().unwrap(),
            UserRole::SuperAdmin
        );
        assert!("invalid".parse::<UserRole>().is_err());
    }

    #[test]
    fn test_super_admin_check() {
        assert!(UserRole::SuperAdmin.is_super_admin());
        assert!(!UserRole::Admin.is_super_admin());
    }
}
