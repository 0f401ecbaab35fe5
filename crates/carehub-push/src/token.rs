//! Service-account JWT assertion and OAuth token exchange.

use chrono::{DateTime, Utc};
use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};
use serde::{Deserialize, Serialize};

use carehub_core::error::AppError;
use carehub_core::result::AppResult;

use crate::credentials::ServiceAccountKey;

/// OAuth grant type for service-account assertions.
pub const JWT_BEARER_GRANT: &str = "urn:ietf:params:oauth:grant-type:jwt-bearer";

/// Assertion lifetime. The provider rejects anything above one hour.
pub const ASSERTION_TTL_SECONDS: i64 = 3600;

/// Claim set of the service-account assertion.
///
/// The provider requires exactly this shape: issuer and subject are the
/// service-account email, the audience is the token endpoint itself, and
/// the expiry is one hour out.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssertionClaims {
    /// Issuer — the service-account email.
    pub iss: String,
    /// Subject — the service-account email.
    pub sub: String,
    /// Audience — the token endpoint URL.
    pub aud: String,
    /// Requested OAuth scope.
    pub scope: String,
    /// Issued-at (Unix seconds).
    pub iat: i64,
    /// Expiry (Unix seconds).
    pub exp: i64,
}

impl AssertionClaims {
    /// Build the claim set for a token request issued at `now`.
    pub fn new(key: &ServiceAccountKey, token_uri: &str, scope: &str, now: DateTime<Utc>) -> Self {
        Self {
            iss: key.client_email.clone(),
            sub: key.client_email.clone(),
            aud: token_uri.to_string(),
            scope: scope.to_string(),
            iat: now.timestamp(),
            exp: now.timestamp() + ASSERTION_TTL_SECONDS,
        }
    }
}

/// Sign the assertion with the service-account private key (RS256).
pub fn sign_assertion(claims: &AssertionClaims, private_key_pem: &str) -> AppResult<String> {
    let key = EncodingKey::from_rsa_pem(private_key_pem.as_bytes())
        .map_err(|e| AppError::configuration(format!("Invalid service-account key: {e}")))?;

    encode(&Header::new(Algorithm::RS256), claims, &key)
        .map_err(|e| AppError::internal(format!("Failed to sign assertion: {e}")))
}

/// Successful response from the OAuth token endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    /// The bearer access token.
    pub access_token: String,
    /// Token lifetime in seconds.
    #[serde(default)]
    pub expires_in: Option<i64>,
}

/// Exchange a signed assertion for a bearer access token.
pub async fn exchange_assertion(
    http: &reqwest::Client,
    token_uri: &str,
    assertion: &str,
) -> AppResult<TokenResponse> {
    let response = http
        .post(token_uri)
        .form(&[("grant_type", JWT_BEARER_GRANT), ("assertion", assertion)])
        .send()
        .await
        .map_err(|e| AppError::external_service(format!("Token exchange request failed: {e}")))?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(AppError::external_service(format!(
            "Token exchange rejected ({status}): {body}"
        )));
    }

    response
        .json::<TokenResponse>()
        .await
        .map_err(|e| AppError::external_service(format!("Malformed token response: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::{DecodingKey, Validation, decode, decode_header};

    const TEST_PRIVATE_KEY: &str = include_str!("../tests/fixtures/test_key.pem");
    const TEST_PUBLIC_KEY: &str = include_str!("../tests/fixtures/test_key.pub.pem");

    fn test_key() -> ServiceAccountKey {
        ServiceAccountKey {
            client_email: "reminder-bot@carehub.iam.example.com".to_string(),
            private_key: TEST_PRIVATE_KEY.to_string(),
            project_id: "carehub-test".to_string(),
        }
    }

    #[test]
    fn claims_carry_issuer_subject_audience_and_ttl() {
        let now = Utc::now();
        let claims = AssertionClaims::new(
            &test_key(),
            "https://oauth2.googleapis.com/token",
            "https://www.googleapis.com/auth/firebase.messaging",
            now,
        );

        assert_eq!(claims.iss, "reminder-bot@carehub.iam.example.com");
        assert_eq!(claims.sub, claims.iss);
        assert_eq!(claims.aud, "https://oauth2.googleapis.com/token");
        assert_eq!(claims.exp - claims.iat, ASSERTION_TTL_SECONDS);
    }

    #[test]
    fn assertion_signs_as_rs256_and_verifies() {
        let now = Utc::now();
        let claims = AssertionClaims::new(
            &test_key(),
            "https://oauth2.googleapis.com/token",
            "https://www.googleapis.com/auth/firebase.messaging",
            now,
        );

        let jwt = sign_assertion(&claims, TEST_PRIVATE_KEY).unwrap();

        let header = decode_header(&jwt).unwrap();
        assert_eq!(header.alg, Algorithm::RS256);

        let mut validation = Validation::new(Algorithm::RS256);
        validation.set_audience(&["https://oauth2.googleapis.com/token"]);

        let decoded = decode::<AssertionClaims>(
            &jwt,
            &DecodingKey::from_rsa_pem(TEST_PUBLIC_KEY.as_bytes()).unwrap(),
            &validation,
        )
        .unwrap();

        assert_eq!(decoded.claims.iss, claims.iss);
        assert_eq!(decoded.claims.scope, claims.scope);
        assert_eq!(decoded.claims.exp, claims.exp);
    }

    #[test]
    fn garbage_key_is_a_configuration_error() {
        let claims = AssertionClaims::new(&test_key(), "aud", "scope", Utc::now());
        let err = sign_assertion(&claims, "not a pem").unwrap_err();
        assert_eq!(err.kind, carehub_core::error::ErrorKind::Configuration);
    }
}
