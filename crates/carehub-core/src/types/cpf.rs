//! CPF — the Brazilian national identification number used to resolve
//! patients in partner sync requests.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// A validated CPF.
///
/// Partners may send the number formatted (`123.456.789-00`) or bare
/// (`12345678900`); both normalize to the 11-digit form, which is the
/// canonical value stored and compared everywhere.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cpf(String);

impl Cpf {
    /// Parse and normalize a CPF from caller input.
    pub fn parse(input: &str) -> Result<Self, AppError> {
        let raw = input.trim();
        if raw.len() < 11 || raw.len() > 14 {
            return Err(AppError::validation(
                "patient_cpf must be between 11 and 14 characters",
            ));
        }

        let digits: String = raw.chars().filter(|c| !matches!(c, '.' | '-')).collect();
        if digits.len() != 11 || !digits.chars().all(|c| c.is_ascii_digit()) {
            return Err(AppError::validation(
                "patient_cpf must contain exactly 11 digits",
            ));
        }

        Ok(Self(digits))
    }

    /// The normalized 11-digit form.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Cpf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_bare_digits() {
        let cpf = Cpf::parse("12345678900").unwrap();
        assert_eq!(cpf.as_str(), "12345678900");
    }

    #[test]
    fn normalizes_formatted_input() {
        let cpf = Cpf::parse("123.456.789-00").unwrap();
        assert_eq!(cpf.as_str(), "12345678900");
    }

    #[test]
    fn rejects_short_input() {
        assert!(Cpf::parse("1234567890").is_err());
    }

    #[test]
    fn rejects_non_digits() {
        assert!(Cpf::parse("12345abc900").is_err());
    }

    #[test]
    fn rejects_formatted_with_wrong_digit_count() {
        assert!(Cpf::parse("123.456.78-900x").is_err());
    }
}
