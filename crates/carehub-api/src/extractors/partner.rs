//! Partner authentication extractor.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use carehub_core::error::AppError;
use carehub_entity::partner::Partner;

use crate::error::ApiError;
use crate::state::AppState;

/// Header carrying the partner API key.
pub const API_KEY_HEADER: &str = "x-api-key";

/// Resolves the `x-api-key` header to an active partner.
///
/// The two failure modes carry distinct codes so integrators can tell a
/// forgotten header from a bad credential; an inactive partner is
/// indistinguishable from an unknown key on purpose.
#[derive(Debug, Clone)]
pub struct PartnerAuth(pub Partner);

impl FromRequestParts<AppState> for PartnerAuth {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let key = parts
            .headers
            .get(API_KEY_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .ok_or_else(|| {
                AppError::authentication("API key is required").with_code("MISSING_API_KEY")
            })?;

        let partner = state
            .partners
            .find_active_by_key(key)
            .await?
            .ok_or_else(|| {
                AppError::authentication("Unknown or inactive API key")
                    .with_code("INVALID_API_KEY")
            })?;

        Ok(Self(partner))
    }
}
