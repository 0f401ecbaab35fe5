//! Storage-request notifier handler.

use axum::Json;
use axum::body::Bytes;
use axum::extract::State;

use carehub_core::error::AppError;
use carehub_service::notify::StorageRequest;

use crate::error::ApiError;
use crate::state::AppState;

/// POST /api/notifications/storage-request
///
/// Fans the request out to every super-admin (in-app + best-effort
/// email). Delivery failures never fail the caller; only the admin
/// lookup can.
pub async fn storage_request(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<serde_json::Value>, ApiError> {
    let request: StorageRequest = serde_json::from_slice(&body)
        .map_err(|e| AppError::validation(format!("Malformed request body: {e}")))?;

    let report = state.notifier.notify_super_admins(&request).await?;

    Ok(Json(serde_json::json!({
        "success": true,
        "notified": report.notified,
        "emailed": report.emailed,
    })))
}
