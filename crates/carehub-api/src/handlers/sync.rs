//! Partner sync handlers.
//!
//! All four routes share the same shape and the same validation order:
//! API key (extractor), rate limit (medications only, counted before the
//! body is even parsed), schema validation, patient resolution, consent.

use axum::Json;
use axum::body::Bytes;
use axum::extract::State;

use carehub_core::types::Cpf;
use carehub_service::sync::records::{
    SyncedAppointment, SyncedDocument, SyncedExam, SyncedMedication,
};

use crate::dto::request::{
    SyncAppointmentsRequest, SyncDocumentsRequest, SyncExamsRequest, SyncMedicationsRequest,
    parse_and_validate,
};
use crate::error::ApiError;
use crate::extractors::PartnerAuth;
use crate::state::AppState;

/// POST /api/sync/appointments
pub async fn sync_appointments(
    State(state): State<AppState>,
    PartnerAuth(partner): PartnerAuth,
    body: Bytes,
) -> Result<Json<serde_json::Value>, ApiError> {
    let request: SyncAppointmentsRequest = parse_and_validate(&body)?;
    let cpf = Cpf::parse(request.patient_cpf.as_deref().unwrap_or_default())?;
    let records = request
        .appointments
        .into_iter()
        .map(SyncedAppointment::try_from)
        .collect::<Result<Vec<_>, _>>()?;

    let outcome = state
        .sync_service
        .sync_appointments(&partner, &cpf, records)
        .await?;

    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Appointments synchronized",
        "inserted": outcome.inserted,
        "updated": outcome.updated,
        "total": outcome.total(),
        "appointments": outcome.records,
    })))
}

/// POST /api/sync/medications
pub async fn sync_medications(
    State(state): State<AppState>,
    PartnerAuth(partner): PartnerAuth,
    body: Bytes,
) -> Result<Json<serde_json::Value>, ApiError> {
    // Counted against the window before anything else: every
    // authenticated call spends budget, valid or not.
    state.rate_limiter.check(partner.id).await?;

    let request: SyncMedicationsRequest = parse_and_validate(&body)?;
    let cpf = Cpf::parse(request.patient_cpf.as_deref().unwrap_or_default())?;
    let records = request
        .medications
        .into_iter()
        .map(SyncedMedication::try_from)
        .collect::<Result<Vec<_>, _>>()?;

    let outcome = state
        .sync_service
        .sync_medications(&partner, &cpf, records)
        .await?;

    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Medications synchronized",
        "inserted": outcome.inserted,
        "updated": outcome.updated,
        "total": outcome.total(),
        "medications": outcome.records,
    })))
}

/// POST /api/sync/exams
pub async fn sync_exams(
    State(state): State<AppState>,
    PartnerAuth(partner): PartnerAuth,
    body: Bytes,
) -> Result<Json<serde_json::Value>, ApiError> {
    let request: SyncExamsRequest = parse_and_validate(&body)?;
    let cpf = Cpf::parse(request.patient_cpf.as_deref().unwrap_or_default())?;
    let records = request
        .exams
        .into_iter()
        .map(SyncedExam::try_from)
        .collect::<Result<Vec<_>, _>>()?;

    let outcome = state.sync_service.sync_exams(&partner, &cpf, records).await?;

    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Exams synchronized",
        "inserted": outcome.inserted,
        "updated": outcome.updated,
        "total": outcome.total(),
        "exams": outcome.records,
    })))
}

/// POST /api/sync/documents
pub async fn sync_documents(
    State(state): State<AppState>,
    PartnerAuth(partner): PartnerAuth,
    body: Bytes,
) -> Result<Json<serde_json::Value>, ApiError> {
    let request: SyncDocumentsRequest = parse_and_validate(&body)?;
    let cpf = Cpf::parse(request.patient_cpf.as_deref().unwrap_or_default())?;
    let records = request
        .documents
        .into_iter()
        .map(SyncedDocument::try_from)
        .collect::<Result<Vec<_>, _>>()?;

    let outcome = state
        .sync_service
        .sync_documents(&partner, &cpf, records)
        .await?;

    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Documents synchronized",
        "inserted": outcome.inserted,
        "updated": outcome.updated,
        "total": outcome.total(),
        "documents": outcome.records,
    })))
}
