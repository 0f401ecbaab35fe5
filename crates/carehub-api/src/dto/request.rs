//! Partner sync request DTOs with validation.
//!
//! Every violated field is collected and reported together, so an
//! integrator can fix a whole batch in one round trip. Required payload
//! fields are modeled as `Option` + `required` so that missing fields are
//! part of the same listing instead of aborting at deserialization.

use std::borrow::Cow;

use chrono::{NaiveDate, NaiveTime};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError, ValidationErrors, ValidationErrorsKind};

use carehub_core::error::AppError;
use carehub_core::result::AppResult;
use carehub_service::sync::records::{
    SyncedAppointment, SyncedDocument, SyncedExam, SyncedMedication,
};

/// One field-level validation failure.
#[derive(Debug, Clone, Serialize)]
pub struct FieldViolation {
    /// Path of the violating field (e.g. `appointments[2].appointment_date`).
    pub field: String,
    /// What is wrong with it.
    pub message: String,
}

/// Deserialize and validate a request body.
///
/// Malformed JSON and schema violations both map to a validation error;
/// the latter carries the full violation listing in `details`.
pub fn parse_and_validate<T>(bytes: &[u8]) -> AppResult<T>
where
    T: DeserializeOwned + Validate,
{
    let value: T = serde_json::from_slice(bytes)
        .map_err(|e| AppError::validation(format!("Malformed request body: {e}")))?;

    if let Err(errors) = value.validate() {
        let violations = flatten_errors(&errors);
        return Err(AppError::validation("Request body failed validation")
            .with_details(serde_json::json!({ "violations": violations })));
    }

    Ok(value)
}

/// Flatten nested validation errors into a sorted list of field paths.
pub fn flatten_errors(errors: &ValidationErrors) -> Vec<FieldViolation> {
    let mut out = Vec::new();
    flatten_into("", errors, &mut out);
    out.sort_by(|a, b| a.field.cmp(&b.field));
    out
}

fn flatten_into(prefix: &str, errors: &ValidationErrors, out: &mut Vec<FieldViolation>) {
    for (field, kind) in errors.errors() {
        let path = if prefix.is_empty() {
            field.to_string()
        } else {
            format!("{prefix}.{field}")
        };

        match kind {
            ValidationErrorsKind::Field(failures) => {
                for failure in failures {
                    let message = failure
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("invalid value ({})", failure.code));
                    out.push(FieldViolation {
                        field: path.clone(),
                        message,
                    });
                }
            }
            ValidationErrorsKind::Struct(nested) => flatten_into(&path, nested, out),
            ValidationErrorsKind::List(entries) => {
                for (index, nested) in entries {
                    flatten_into(&format!("{path}[{index}]"), nested, out);
                }
            }
        }
    }
}

fn validate_date_format(value: &str) -> Result<(), ValidationError> {
    if NaiveDate::parse_from_str(value, "%Y-%m-%d").is_ok() {
        Ok(())
    } else {
        let mut err = ValidationError::new("date_format");
        err.message = Some(Cow::Borrowed("must be a date in YYYY-MM-DD format"));
        Err(err)
    }
}

fn validate_time_format(value: &str) -> Result<(), ValidationError> {
    if parse_time_opt(value).is_some() {
        Ok(())
    } else {
        let mut err = ValidationError::new("time_format");
        err.message = Some(Cow::Borrowed("must be a time in HH:MM or HH:MM:SS format"));
        Err(err)
    }
}

fn validate_time_list(values: &[String]) -> Result<(), ValidationError> {
    if values.iter().all(|v| parse_time_opt(v).is_some()) {
        Ok(())
    } else {
        let mut err = ValidationError::new("time_format");
        err.message = Some(Cow::Borrowed(
            "every entry must be a time in HH:MM or HH:MM:SS format",
        ));
        Err(err)
    }
}

fn parse_time_opt(value: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(value, "%H:%M:%S")
        .ok()
        .or_else(|| NaiveTime::parse_from_str(value, "%H:%M").ok())
}

fn parse_date(value: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|_| AppError::validation(format!("Invalid date '{value}'")))
}

fn parse_time(value: &str) -> AppResult<NaiveTime> {
    parse_time_opt(value).ok_or_else(|| AppError::validation(format!("Invalid time '{value}'")))
}

// ── Appointments ─────────────────────────────────────────────

/// Body of `POST /api/sync/appointments`.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SyncAppointmentsRequest {
    /// Patient CPF, 11–14 characters.
    #[validate(
        required(message = "is required"),
        length(min = 11, max = 14, message = "must be between 11 and 14 characters")
    )]
    pub patient_cpf: Option<String>,
    /// The batch, 1–100 records.
    #[serde(default)]
    #[validate(
        length(min = 1, max = 100, message = "must contain between 1 and 100 records"),
        nested
    )]
    pub appointments: Vec<AppointmentPayload>,
}

/// One appointment record in a sync batch.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AppointmentPayload {
    /// Attending doctor's name.
    #[validate(
        required(message = "is required"),
        length(min = 1, message = "must not be empty")
    )]
    pub doctor_name: Option<String>,
    /// Appointment date (`YYYY-MM-DD`).
    #[validate(
        required(message = "is required"),
        custom(function = validate_date_format)
    )]
    pub appointment_date: Option<String>,
    /// Appointment time (`HH:MM[:SS]`).
    #[validate(
        required(message = "is required"),
        custom(function = validate_time_format)
    )]
    pub appointment_time: Option<String>,
    /// Doctor's specialty.
    #[serde(default)]
    pub specialty: Option<String>,
    /// Kind of appointment.
    #[serde(default, rename = "type")]
    pub appointment_type: Option<String>,
    /// Where the appointment takes place.
    #[serde(default)]
    pub location: Option<String>,
    /// Free-form notes.
    #[serde(default)]
    pub notes: Option<String>,
}

impl TryFrom<AppointmentPayload> for SyncedAppointment {
    type Error = AppError;

    fn try_from(payload: AppointmentPayload) -> AppResult<Self> {
        Ok(Self {
            doctor_name: payload.doctor_name.unwrap_or_default(),
            specialty: payload.specialty,
            date: parse_date(payload.appointment_date.as_deref().unwrap_or_default())?,
            time: parse_time(payload.appointment_time.as_deref().unwrap_or_default())?,
            appointment_type: payload.appointment_type,
            location: payload.location,
            notes: payload.notes,
        })
    }
}

// ── Medications ──────────────────────────────────────────────

/// Body of `POST /api/sync/medications`.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SyncMedicationsRequest {
    /// Patient CPF, 11–14 characters.
    #[validate(
        required(message = "is required"),
        length(min = 11, max = 14, message = "must be between 11 and 14 characters")
    )]
    pub patient_cpf: Option<String>,
    /// The batch, 1–100 records.
    #[serde(default)]
    #[validate(
        length(min = 1, max = 100, message = "must contain between 1 and 100 records"),
        nested
    )]
    pub medications: Vec<MedicationPayload>,
}

/// One medication record in a sync batch.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct MedicationPayload {
    /// Medication name.
    #[validate(
        required(message = "is required"),
        length(min = 1, message = "must not be empty")
    )]
    pub name: Option<String>,
    /// Dosage description.
    #[validate(
        required(message = "is required"),
        length(min = 1, message = "must not be empty")
    )]
    pub dosage: Option<String>,
    /// Frequency description.
    #[validate(
        required(message = "is required"),
        length(min = 1, message = "must not be empty")
    )]
    pub frequency: Option<String>,
    /// Administration instructions.
    #[serde(default)]
    pub instructions: Option<String>,
    /// First day of the treatment (`YYYY-MM-DD`).
    #[serde(default)]
    #[validate(custom(function = validate_date_format))]
    pub start_date: Option<String>,
    /// Last day of the treatment (`YYYY-MM-DD`).
    #[serde(default)]
    #[validate(custom(function = validate_date_format))]
    pub end_date: Option<String>,
    /// Daily dose times (`HH:MM[:SS]` each).
    #[serde(default)]
    #[validate(custom(function = validate_time_list))]
    pub schedule_times: Option<Vec<String>>,
}

impl TryFrom<MedicationPayload> for SyncedMedication {
    type Error = AppError;

    fn try_from(payload: MedicationPayload) -> AppResult<Self> {
        let schedule_times = payload
            .schedule_times
            .unwrap_or_default()
            .iter()
            .map(|t| parse_time(t))
            .collect::<AppResult<Vec<_>>>()?;

        Ok(Self {
            name: payload.name.unwrap_or_default(),
            dosage: payload.dosage.unwrap_or_default(),
            frequency: payload.frequency.unwrap_or_default(),
            instructions: payload.instructions,
            start_date: payload.start_date.as_deref().map(parse_date).transpose()?,
            end_date: payload.end_date.as_deref().map(parse_date).transpose()?,
            schedule_times,
        })
    }
}

// ── Exams ────────────────────────────────────────────────────

/// Body of `POST /api/sync/exams`.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SyncExamsRequest {
    /// Patient CPF, 11–14 characters.
    #[validate(
        required(message = "is required"),
        length(min = 11, max = 14, message = "must be between 11 and 14 characters")
    )]
    pub patient_cpf: Option<String>,
    /// The batch, 1–100 records.
    #[serde(default)]
    #[validate(
        length(min = 1, max = 100, message = "must contain between 1 and 100 records"),
        nested
    )]
    pub exams: Vec<ExamPayload>,
}

/// One exam record in a sync batch.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ExamPayload {
    /// Exam name.
    #[validate(
        required(message = "is required"),
        length(min = 1, message = "must not be empty")
    )]
    pub name: Option<String>,
    /// When the exam was performed (`YYYY-MM-DD`).
    #[validate(
        required(message = "is required"),
        custom(function = validate_date_format)
    )]
    pub exam_date: Option<String>,
    /// Exam category.
    #[serde(default)]
    pub exam_type: Option<String>,
    /// Short result summary.
    #[serde(default)]
    pub result_summary: Option<String>,
    /// Link to the full report.
    #[serde(default)]
    pub file_url: Option<String>,
}

impl TryFrom<ExamPayload> for SyncedExam {
    type Error = AppError;

    fn try_from(payload: ExamPayload) -> AppResult<Self> {
        Ok(Self {
            name: payload.name.unwrap_or_default(),
            exam_type: payload.exam_type,
            exam_date: parse_date(payload.exam_date.as_deref().unwrap_or_default())?,
            result_summary: payload.result_summary,
            file_url: payload.file_url,
        })
    }
}

// ── Documents ────────────────────────────────────────────────

/// Body of `POST /api/sync/documents`.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SyncDocumentsRequest {
    /// Patient CPF, 11–14 characters.
    #[validate(
        required(message = "is required"),
        length(min = 11, max = 14, message = "must be between 11 and 14 characters")
    )]
    pub patient_cpf: Option<String>,
    /// The batch, 1–100 records.
    #[serde(default)]
    #[validate(
        length(min = 1, max = 100, message = "must contain between 1 and 100 records"),
        nested
    )]
    pub documents: Vec<DocumentPayload>,
}

/// One clinical document in a sync batch.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct DocumentPayload {
    /// Document title.
    #[validate(
        required(message = "is required"),
        length(min = 1, message = "must not be empty")
    )]
    pub title: Option<String>,
    /// Document category.
    #[serde(default)]
    pub document_type: Option<String>,
    /// When the document was issued (`YYYY-MM-DD`).
    #[serde(default)]
    #[validate(custom(function = validate_date_format))]
    pub document_date: Option<String>,
    /// Link to the stored file.
    #[serde(default)]
    pub file_url: Option<String>,
    /// Free-form description.
    #[serde(default)]
    pub description: Option<String>,
}

impl TryFrom<DocumentPayload> for SyncedDocument {
    type Error = AppError;

    fn try_from(payload: DocumentPayload) -> AppResult<Self> {
        Ok(Self {
            title: payload.title.unwrap_or_default(),
            document_type: payload.document_type,
            document_date: payload.document_date.as_deref().map(parse_date).transpose()?,
            file_url: payload.file_url,
            description: payload.description,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn appointment_json(date: &str, time: &str) -> serde_json::Value {
        serde_json::json!({
            "doctor_name": "Dr. Silva",
            "appointment_date": date,
            "appointment_time": time,
            "type": "consulta"
        })
    }

    #[test]
    fn valid_request_parses_and_converts() {
        let body = serde_json::json!({
            "patient_cpf": "12345678900",
            "appointments": [appointment_json("2025-02-15", "14:30")]
        });

        let request: SyncAppointmentsRequest =
            parse_and_validate(body.to_string().as_bytes()).unwrap();
        let record = SyncedAppointment::try_from(request.appointments[0].clone()).unwrap();

        assert_eq!(record.doctor_name, "Dr. Silva");
        assert_eq!(record.date, NaiveDate::from_ymd_opt(2025, 2, 15).unwrap());
        assert_eq!(record.time, NaiveTime::from_hms_opt(14, 30, 0).unwrap());
        assert_eq!(record.appointment_type.as_deref(), Some("consulta"));
    }

    #[test]
    fn time_accepts_seconds() {
        let body = serde_json::json!({
            "patient_cpf": "12345678900",
            "appointments": [appointment_json("2025-02-15", "14:30:45")]
        });

        let request: SyncAppointmentsRequest =
            parse_and_validate(body.to_string().as_bytes()).unwrap();
        let record = SyncedAppointment::try_from(request.appointments[0].clone()).unwrap();
        assert_eq!(record.time, NaiveTime::from_hms_opt(14, 30, 45).unwrap());
    }

    #[test]
    fn every_violation_is_listed_together() {
        // Two independent violations: a bad date inside the batch and an
        // oversized batch. Both must come back in one response.
        let oversized: Vec<_> = (0..101)
            .map(|_| appointment_json("2025-02-30x", "14:30"))
            .collect();
        let body = serde_json::json!({
            "patient_cpf": "12345678900",
            "appointments": oversized
        });

        let err = parse_and_validate::<SyncAppointmentsRequest>(body.to_string().as_bytes())
            .unwrap_err();

        let details = err.details.expect("validation details");
        let violations = details["violations"].as_array().unwrap();
        let fields: Vec<&str> = violations
            .iter()
            .map(|v| v["field"].as_str().unwrap())
            .collect();

        assert!(fields.contains(&"appointments"));
        assert!(fields.contains(&"appointments[0].appointment_date"));
    }

    #[test]
    fn missing_required_fields_are_listed_not_fatal() {
        let body = serde_json::json!({
            "appointments": [{ "appointment_time": "25:99" }]
        });

        let err = parse_and_validate::<SyncAppointmentsRequest>(body.to_string().as_bytes())
            .unwrap_err();

        let details = err.details.expect("validation details");
        let violations = details["violations"].as_array().unwrap();
        let fields: Vec<&str> = violations
            .iter()
            .map(|v| v["field"].as_str().unwrap())
            .collect();

        assert!(fields.contains(&"patient_cpf"));
        assert!(fields.contains(&"appointments[0].doctor_name"));
        assert!(fields.contains(&"appointments[0].appointment_date"));
        assert!(fields.contains(&"appointments[0].appointment_time"));
    }

    #[test]
    fn empty_batch_is_rejected() {
        let body = serde_json::json!({
            "patient_cpf": "12345678900",
            "medications": []
        });

        let err = parse_and_validate::<SyncMedicationsRequest>(body.to_string().as_bytes())
            .unwrap_err();
        let details = err.details.expect("validation details");
        let fields: Vec<&str> = details["violations"]
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v["field"].as_str().unwrap())
            .collect();
        assert_eq!(fields, vec!["medications"]);
    }

    #[test]
    fn malformed_json_is_a_validation_error() {
        let err = parse_and_validate::<SyncAppointmentsRequest>(b"{not json").unwrap_err();
        assert_eq!(err.kind, carehub_core::error::ErrorKind::Validation);
        assert!(err.details.is_none());
    }

    #[test]
    fn medication_schedule_times_are_validated_and_converted() {
        let body = serde_json::json!({
            "patient_cpf": "12345678900",
            "medications": [{
                "name": "Losartana",
                "dosage": "50mg",
                "frequency": "12/12h",
                "schedule_times": ["08:00", "20:00:30"]
            }]
        });

        let request: SyncMedicationsRequest =
            parse_and_validate(body.to_string().as_bytes()).unwrap();
        let record = SyncedMedication::try_from(request.medications[0].clone()).unwrap();
        assert_eq!(record.schedule_times.len(), 2);

        let bad = serde_json::json!({
            "patient_cpf": "12345678900",
            "medications": [{
                "name": "Losartana",
                "dosage": "50mg",
                "frequency": "12/12h",
                "schedule_times": ["8 da manhã"]
            }]
        });
        assert!(parse_and_validate::<SyncMedicationsRequest>(bad.to_string().as_bytes()).is_err());
    }
}
