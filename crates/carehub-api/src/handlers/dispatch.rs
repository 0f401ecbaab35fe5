//! Reminder dispatcher trigger handler.

use axum::Json;
use axum::extract::State;

use crate::error::ApiError;
use crate::state::AppState;

/// POST /api/notifications/dispatch
///
/// Fire-and-run trigger for the reminder dispatcher. Individual send
/// failures are reported in the summary; only infrastructure failures
/// (credentials, token exchange, candidate queries) surface as 500.
pub async fn run_dispatch(
    State(state): State<AppState>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let summary = state.dispatcher.run().await?;

    Ok(Json(serde_json::json!({
        "success": true,
        "notificationsSent": summary.notifications_sent,
        "details": summary.details,
    })))
}
